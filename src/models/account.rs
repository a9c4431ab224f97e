use serde::{Deserialize, Serialize};
use crate::models::{CredentialedRequest, Credentials};

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SummaryParam {
    #[serde(flatten)]
    pub credentials: Credentials,
}

impl CredentialedRequest for SummaryParam {
    fn credentials_mut(&mut self) -> &mut Credentials {
        &mut self.credentials
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SummaryResult {
    pub total_available_balance: f64,
}
