use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CheckDeviceParam {
    /// `None` checks the client's own device id.
    #[serde(rename = "deviceid", default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckDeviceResult {
    pub status: bool,
    pub name: String,
    pub last_name: String,
}
