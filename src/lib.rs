//! Client for the banktopup.com SCB API: enrollment, device checks, balance,
//! transactions, transfers and bill scanning.
pub mod config;
pub mod enums;
pub mod errors;
pub mod models;
pub mod repositories;
pub mod services;

pub use errors::BankTopupError;
pub use repositories::banktopup_repository::BankTopupRepository;
