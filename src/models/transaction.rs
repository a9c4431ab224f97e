use serde::{Deserialize, Serialize};
use crate::models::{CredentialedRequest, Credentials};

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct GetTransactionsParam {
    pub previous_day: i64,
    pub page_number: i64,
    pub page_size: i64,
    #[serde(flatten)]
    pub credentials: Credentials,
}

impl CredentialedRequest for GetTransactionsParam {
    fn credentials_mut(&mut self) -> &mut Credentials {
        &mut self.credentials
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionsResult {
    pub account_no: String,
    #[serde(rename = "endOfListFlag")]
    pub end_of_list_flag: String,
    #[serde(rename = "nextPageNumber")]
    pub next_page_number: String,
    #[serde(rename = "pageSize")]
    pub page_size: i64,
    #[serde(rename = "txnList")]
    pub txn_list: Vec<Transaction>,
}

impl TransactionsResult {
    pub fn is_end_of_list(&self) -> bool {
        self.end_of_list_flag.eq_ignore_ascii_case("Y")
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Transaction {
    pub annotation: String,
    pub sort_sequence: i64,
    pub txn_amount: f64,
    pub txn_date_time: String,
    pub txn_currency: String,
    pub txn_remark: String,
    pub txn_debit_credit_flag: String,
    pub txn_sequence: i64,
    pub txn_channel: CodeDescription,
    pub txn_code: CodeDescription,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeDescription {
    pub code: String,
    pub description: String,
}

// `amount` is always sent, zero included.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TransferParam {
    pub account_to: String,
    pub bank_code: String,
    pub amount: f64,
    #[serde(flatten)]
    pub credentials: Credentials,
}

impl CredentialedRequest for TransferParam {
    fn credentials_mut(&mut self) -> &mut Credentials {
        &mut self.credentials
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransferResult {
    pub transaction_id: String,
    pub transaction_date_time: String,
    pub remaining_balance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_meta_data: Option<AdditionalMetaData>,
}

impl TransferResult {
    pub fn qr_strings(&self) -> Vec<&str> {
        self.additional_meta_data
            .iter()
            .flat_map(|meta| meta.payment_info.iter())
            .map(|info| info.qr_string.as_str())
            .collect()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdditionalMetaData {
    pub payment_info: Vec<PaymentInfo>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentInfo {
    #[serde(rename = "QRstring")]
    pub qr_string: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn zero_amount_is_not_dropped() {
        let param = TransferParam {
            account_to: "0987654321".into(),
            bank_code: "014".into(),
            amount: 0.0,
            credentials: Credentials::default(),
        };
        assert_eq!(
            serde_json::to_value(&param).unwrap(),
            json!({"account_to": "0987654321", "bank_code": "014", "amount": 0.0})
        );
    }

    #[test]
    fn zero_paging_fields_are_sent() {
        let param = GetTransactionsParam::default();
        let value = serde_json::to_value(&param).unwrap();
        assert_eq!(value["previous_day"], json!(0));
        assert_eq!(value["page_number"], json!(0));
        assert_eq!(value["page_size"], json!(0));
        assert!(value.get("deviceid").is_none());
    }

    #[test]
    fn transactions_result_decodes_nested_records() {
        let body = json!({
            "account_no": "1234567890",
            "endOfListFlag": "Y",
            "nextPageNumber": "2",
            "pageSize": 20,
            "txnList": [{
                "annotation": "",
                "sortSequence": 1,
                "txnAmount": 100.25,
                "txnDateTime": "2021-03-01T10:00:00+07:00",
                "txnCurrency": "THB",
                "txnRemark": "PromptPay",
                "txnDebitCreditFlag": "C",
                "txnSequence": 7,
                "txnChannel": {"code": "ENET", "description": "Internet"},
                "txnCode": {"code": "X1", "description": "Deposit"}
            }]
        });
        let result: TransactionsResult = serde_json::from_value(body).unwrap();
        assert!(result.is_end_of_list());
        assert_eq!(result.txn_list.len(), 1);
        let txn = &result.txn_list[0];
        assert_eq!(txn.txn_amount, 100.25);
        assert_eq!(txn.txn_debit_credit_flag, "C");
        assert_eq!(txn.txn_channel.code, "ENET");
        assert_eq!(txn.txn_code.description, "Deposit");
    }

    #[test]
    fn transfer_result_without_meta_data() {
        let result: TransferResult = serde_json::from_value(json!({
            "transactionId": "T1",
            "transactionDateTime": "2021-03-01T10:00:00+07:00",
            "remainingBalance": 50.0
        }))
        .unwrap();
        assert_eq!(result.additional_meta_data, None);
        assert!(result.qr_strings().is_empty());
    }

    #[test]
    fn transfer_result_reads_qr_strings() {
        let result: TransferResult = serde_json::from_value(json!({
            "transactionId": "T2",
            "additionalMetaData": {"paymentInfo": [{"QRstring": "0041000600000101030140225"}]}
        }))
        .unwrap();
        assert_eq!(result.qr_strings(), vec!["0041000600000101030140225"]);
    }
}
