use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
pub mod account;
pub mod billscan;
pub mod device;
pub mod register;
pub mod transaction;

/// `error.msg_th` value the API uses to signal success, regardless of HTTP status.
pub const SUCCESS_MSG_TH: &str = "สำเร็จ";

// `result` is decoded in a second step, after the error block has been checked.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BankTopupResponse<T> {
    #[serde(default, deserialize_with = "null_as_default")]
    pub error: ErrorBlock,
    #[serde(default)]
    pub result: T,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBlock {
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub msg_th: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

// An explicit `null` reads the same as an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ErrorBlock {
    pub fn is_success(&self) -> bool {
        self.msg_th == SUCCESS_MSG_TH
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(rename = "deviceid", default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(rename = "account_no", default, skip_serializing_if = "Option::is_none")]
    pub account_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
}

impl Credentials {
    /// Empty strings count as "not configured" and map to `None`.
    pub fn from_config(device_id: &str, account_no: &str, pin: &str) -> Self {
        Self {
            device_id: non_empty(device_id),
            account_no: non_empty(account_no),
            pin: non_empty(pin),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

pub trait CredentialedRequest {
    fn credentials_mut(&mut self) -> &mut Credentials;
}
