use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BankTopupError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("could not encode request payload: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("could not decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The envelope decoded but `error.msg_th` was not the success message.
    /// Displays as the message alone.
    #[error("{msg_th}")]
    Api {
        code: i64,
        msg_th: String,
        data: Option<Value>,
    },

    #[error("license key is not a valid header value")]
    InvalidLicense,
}

impl BankTopupError {
    pub fn is_transport(&self) -> bool {
        matches!(self, BankTopupError::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, BankTopupError::Decode(_))
    }

    pub fn api_code(&self) -> Option<i64> {
        match self {
            BankTopupError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}
