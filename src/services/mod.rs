pub mod topup_service;
