pub mod banktopup_repository;
