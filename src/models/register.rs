use serde::{Deserialize, Serialize};

/// Enrollment request. `account_no` and `pin` here are supplied by the caller,
/// the client does not overwrite them.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct RegisterParam {
    pub identification: String,
    pub account_no: String,
    pub pin: String,
    #[serde(rename = "mobile_phone_no")]
    pub phone: String,
    pub device_brand: String,
    pub device_code: String,
    pub year: String,
    pub month: String,
    pub day: String,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterResult {
    #[serde(rename = "msg")]
    pub message: String,
    #[serde(rename = "deviceid")]
    pub device_id: String,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct RegisterOtpParam {
    pub otp: String,
}

pub type RegisterOtpResult = RegisterResult;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn register_uses_wire_names() {
        let param = RegisterParam {
            identification: "1100000000000".into(),
            account_no: "1234567890".into(),
            pin: "123456".into(),
            phone: "0812345678".into(),
            device_brand: "samsung".into(),
            device_code: "SM-G960F".into(),
            year: "1990".into(),
            month: "01".into(),
            day: "31".into(),
        };
        let value = serde_json::to_value(&param).unwrap();
        assert_eq!(value["mobile_phone_no"], json!("0812345678"));
        assert_eq!(value["account_no"], json!("1234567890"));
        assert!(value.get("phone").is_none());
    }

    #[test]
    fn register_result_reads_deviceid() {
        let result: RegisterResult =
            serde_json::from_value(json!({"msg": "ok", "deviceid": "dev-1"})).unwrap();
        assert_eq!(result.device_id, "dev-1");
        assert_eq!(result.message, "ok");
    }
}
