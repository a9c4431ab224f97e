use serde::Serialize;
use serde_json::Value;
use tracing::info;
use crate::config::AppConfig;
use crate::enums::command::Command;
use crate::models::account::SummaryParam;
use crate::models::billscan::BillScanParam;
use crate::models::device::CheckDeviceParam;
use crate::models::register::{RegisterOtpParam, RegisterParam};
use crate::models::transaction::{GetTransactionsParam, TransferParam};
use crate::models::Credentials;
use crate::repositories::banktopup_repository::BankTopupRepository;

#[derive(Clone, Debug)]
pub struct TopupService {
    banktopup_repository: BankTopupRepository,
}

impl TopupService {
    pub fn new(banktopup_repo: BankTopupRepository) -> Self {
        Self {
            banktopup_repository: banktopup_repo,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let mut repo = BankTopupRepository::new(
            config.device_id.clone(),
            config.account_no.clone(),
            config.pin.clone(),
            config.license.clone(),
        )
        .with_base_url(config.base_url.clone());
        if let Some(timeout) = config.timeout() {
            repo = repo.with_timeout(timeout);
        }
        Self::new(repo)
    }

    pub async fn execute(&self, cmd: Command) -> anyhow::Result<Value> {
        let repo = &self.banktopup_repository;
        match cmd {
            Command::Register {
                identification,
                mobile_phone_no,
                device_brand,
                device_code,
                year,
                month,
                day,
            } => {
                let param = RegisterParam {
                    identification,
                    account_no: repo.account_no().to_string(),
                    pin: repo.pin().to_string(),
                    phone: mobile_phone_no,
                    device_brand,
                    device_code,
                    year,
                    month,
                    day,
                };
                let result = repo.register(param).await?;
                info!("Registration started, confirm with the OTP");
                to_json(&result)
            }
            Command::RegisterOtp { otp } => {
                let result = repo.register_otp(RegisterOtpParam { otp }).await?;
                info!("Device enrolled, set DEVICE_ID={}", result.device_id);
                to_json(&result)
            }
            Command::CheckDevice { device_id } => {
                to_json(&repo.check_device(CheckDeviceParam { device_id }).await?)
            }
            Command::Transactions {
                previous_day,
                page_number,
                page_size,
            } => {
                let param = GetTransactionsParam {
                    previous_day,
                    page_number,
                    page_size,
                    credentials: Credentials::default(),
                };
                let result = repo.get_transactions(param).await?;
                info!("Fetched {} transactions", result.txn_list.len());
                to_json(&result)
            }
            Command::Transfer {
                account_to,
                bank_code,
                amount,
            } => {
                let param = TransferParam {
                    account_to,
                    bank_code,
                    amount,
                    credentials: Credentials::default(),
                };
                let result = repo.transfer(param).await?;
                info!("Transfer {} completed", result.transaction_id);
                to_json(&result)
            }
            Command::Summary => to_json(&repo.summary(SummaryParam::default()).await?),
            Command::BillScan { barcode } => {
                let param = BillScanParam {
                    barcode,
                    credentials: Credentials::default(),
                };
                to_json(&repo.bill_scan(param).await?)
            }
        }
    }
}

fn to_json<T: Serialize>(result: &T) -> anyhow::Result<Value> {
    Ok(serde_json::to_value(result)?)
}
