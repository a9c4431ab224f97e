use serde::{Deserialize, Serialize};
use crate::models::{CredentialedRequest, Credentials};

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct BillScanParam {
    pub barcode: String,
    #[serde(flatten)]
    pub credentials: Credentials,
}

impl CredentialedRequest for BillScanParam {
    fn credentials_mut(&mut self) -> &mut Credentials {
        &mut self.credentials
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillScanResult {
    pub status: BillScanStatus,
    pub data: BillScanData,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillScanStatus {
    pub code: i64,
    pub header: String,
    pub description: String,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BillScanData {
    pub amount: f64,
    pub function: String,
    pub scan_token: String,
    pub pull_slip: PullSlip,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PullSlip {
    pub date_time: String,
    pub trans_ref: String,
    pub sender: SlipParty,
    pub receiver: SlipParty,
    pub ref1: String,
    pub ref2: String,
    pub ref3: String,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SlipParty {
    pub name: String,
    pub display_name: String,
    pub account_type: String,
    pub account_number: String,
    pub bank_code: String,
}
