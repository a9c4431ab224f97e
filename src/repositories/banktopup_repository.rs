use std::fmt;
use std::time::Duration;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use urlencoding::encode;
use crate::errors::BankTopupError;
use crate::models::{BankTopupResponse, CredentialedRequest, Credentials};
use crate::models::account::{SummaryParam, SummaryResult};
use crate::models::billscan::{BillScanParam, BillScanResult};
use crate::models::device::{CheckDeviceParam, CheckDeviceResult};
use crate::models::register::{RegisterOtpParam, RegisterOtpResult, RegisterParam, RegisterResult};
use crate::models::transaction::{GetTransactionsParam, TransactionsResult, TransferParam, TransferResult};

pub const ENDPOINT: &str = "https://api-v1.banktopup.com";
const LICENSE_HEADER: &str = "x-auth-license";

const REGISTER_PATH: &str = "/api/v1/scb/register";
const CHECK_DEVICE_PATH: &str = "/api/v1/scb/check_device";
const TRANSACTIONS_PATH: &str = "/api/v1/scb/transactions";
const TRANSFER_PATH: &str = "/api/v1/scb/transfer";
const SUMMARY_PATH: &str = "/api/v1/scb/summary";
const BILLSCAN_PATH: &str = "/api/v1/scb/billscan";

// Clones share the connection pool.
#[derive(Clone)]
pub struct BankTopupRepository {
    client: reqwest::Client,
    base_url: String,
    timeout: Option<Duration>,
    device_id: String,
    account_no: String,
    pin: String,
    license: String,
}

impl fmt::Debug for BankTopupRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BankTopupRepository")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("device_id", &self.device_id)
            .field("account_no", &self.account_no)
            .finish_non_exhaustive()
    }
}

impl BankTopupRepository {
    pub fn new(
        device_id: impl Into<String>,
        account_no: impl Into<String>,
        pin: impl Into<String>,
        license: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: ENDPOINT.to_string(),
            timeout: None,
            device_id: device_id.into(),
            account_no: account_no.into(),
            pin: pin.into(),
            license: license.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Applies to every request sent through this value. Use on a clone for a
    /// single call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn account_no(&self) -> &str {
        &self.account_no
    }

    pub(crate) fn pin(&self) -> &str {
        &self.pin
    }

    pub async fn register(&self, param: RegisterParam) -> Result<RegisterResult, BankTopupError> {
        self.post("register", REGISTER_PATH, &param).await
    }

    /// Confirms enrollment. The OTP is posted to the register path suffixed
    /// with this client's account number.
    pub async fn register_otp(&self, param: RegisterOtpParam) -> Result<RegisterOtpResult, BankTopupError> {
        let path = format!("{}/{}", REGISTER_PATH, encode(&self.account_no));
        self.post("register_otp", &path, &param).await
    }

    pub async fn check_device(&self, mut param: CheckDeviceParam) -> Result<CheckDeviceResult, BankTopupError> {
        if param.device_id.is_none() {
            param.device_id = self.credentials().device_id;
        }
        self.post("check_device", CHECK_DEVICE_PATH, &param).await
    }

    pub async fn get_transactions(&self, mut param: GetTransactionsParam) -> Result<TransactionsResult, BankTopupError> {
        self.inject_credentials(&mut param);
        self.post("get_transactions", TRANSACTIONS_PATH, &param).await
    }

    /// Not safe to retry blindly: a failed call may still have moved money.
    pub async fn transfer(&self, mut param: TransferParam) -> Result<TransferResult, BankTopupError> {
        self.inject_credentials(&mut param);
        self.post("transfer", TRANSFER_PATH, &param).await
    }

    pub async fn summary(&self, mut param: SummaryParam) -> Result<SummaryResult, BankTopupError> {
        self.inject_credentials(&mut param);
        self.post("summary", SUMMARY_PATH, &param).await
    }

    pub async fn bill_scan(&self, mut param: BillScanParam) -> Result<BillScanResult, BankTopupError> {
        self.inject_credentials(&mut param);
        self.post("bill_scan", BILLSCAN_PATH, &param).await
    }

    fn credentials(&self) -> Credentials {
        Credentials::from_config(&self.device_id, &self.account_no, &self.pin)
    }

    // Caller-supplied credential values are discarded.
    fn inject_credentials<P: CredentialedRequest>(&self, param: &mut P) {
        *param.credentials_mut() = self.credentials();
    }

    fn headers(&self) -> Result<HeaderMap, BankTopupError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let license = HeaderValue::from_str(&self.license).map_err(|_| BankTopupError::InvalidLicense)?;
        headers.insert(LICENSE_HEADER, license);
        Ok(headers)
    }

    async fn post<P, R>(&self, operation: &'static str, path: &str, payload: &P) -> Result<R, BankTopupError>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let headers = self.headers()?;
        let body = serde_json::to_vec(payload).map_err(BankTopupError::Encode)?;
        let url = format!("{}{}", self.base_url, path);

        let mut req = self.client.post(url).headers(headers).body(body);
        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }

        debug!(operation, "sending request");
        let res = match req.send().await {
            Ok(res) => res,
            Err(e) => {
                warn!(operation, timeout = e.is_timeout(), connect = e.is_connect(), "request failed");
                return Err(BankTopupError::Transport(e));
            }
        };
        let status = res.status();
        let bytes = res.bytes().await?;
        debug!(operation, %status, len = bytes.len(), "received response");

        let envelope: BankTopupResponse<Value> =
            serde_json::from_slice(&bytes).map_err(BankTopupError::Decode)?;
        if !envelope.error.is_success() {
            debug!(operation, code = envelope.error.code, "api reported failure");
            return Err(BankTopupError::Api {
                code: envelope.error.code,
                msg_th: envelope.error.msg_th,
                data: envelope.error.data,
            });
        }
        decode_result(envelope.result)
    }
}

// A null or absent `result` on success decodes as the record's defaults.
fn decode_result<R: DeserializeOwned>(result: Value) -> Result<R, BankTopupError> {
    let result = match result {
        Value::Null => Value::Object(serde_json::Map::new()),
        other => other,
    };
    serde_json::from_value(result).map_err(BankTopupError::Decode)
}
