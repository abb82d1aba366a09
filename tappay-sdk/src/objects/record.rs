//! Record API responses: paginated trade records, per-trade history and
//! same-day capture.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::error::ComponentRange;

use crate::config::Operation;
use crate::response::ApiResponse;
use crate::timestamp;

/// Upper bound the gateway applies to `records_per_page`.
pub const MAX_RECORDS_PER_PAGE: i64 = 200;

/// Lifecycle state of a trade record.
///
/// Kept open: codes the gateway adds later still deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordStatus(pub i32);

impl RecordStatus {
    pub const ERROR: RecordStatus = RecordStatus(-1);
    pub const AUTH: RecordStatus = RecordStatus(0);
    pub const OK: RecordStatus = RecordStatus(1);
    pub const PARTIALLY_REFUNDED: RecordStatus = RecordStatus(2);
    pub const REFUNDED: RecordStatus = RecordStatus(3);
    pub const PENDING: RecordStatus = RecordStatus(4);
    pub const CANCEL: RecordStatus = RecordStatus(5);
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::ERROR => write!(f, "error"),
            Self::AUTH => write!(f, "auth"),
            Self::OK => write!(f, "ok"),
            Self::PARTIALLY_REFUNDED => write!(f, "partially_refunded"),
            Self::REFUNDED => write!(f, "refunded"),
            Self::PENDING => write!(f, "pending"),
            Self::CANCEL => write!(f, "cancel"),
            RecordStatus(code) => write!(f, "unknown record status ({code})"),
        }
    }
}

/// Owner of the card used in a trade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cardholder {
    pub phone_number: String,
    pub name: String,
    pub email: String,
    pub zip_code: String,
    pub address: String,
    pub national_id: String,
}

/// One historical transaction returned by a records query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub rec_trade_id: String,
    /// Authorization code from the bank.
    pub auth_code: String,
    pub merchant_id: String,
    pub merchant_name: String,
    /// Website or application the trade was made through.
    pub app_name: String,
    /// Time of the trade, ms since epoch.
    pub time: i64,
    /// Current amount. Only a refund lowers it.
    pub amount: i64,
    pub refund_amount: i64,
    pub record_status: RecordStatus,
    pub bank_transaction_id: String,
    /// When the payment is (or was) captured, ms since epoch.
    pub cap_millis: i64,
    /// Amount at authorization time.
    pub original_amount: i64,
    pub bank_transaction_start_millis: i64,
    pub bank_transaction_end_millis: i64,
    pub is_captured: bool,
    pub bank_result_code: String,
    pub bank_result_msg: String,
    /// First six and last four digits of the card.
    pub partial_card_number: String,
    /// Products or services purchased.
    pub details: String,
    pub cardholder: Cardholder,
}

impl TradeRecord {
    pub fn traded_at(&self) -> Result<OffsetDateTime, ComponentRange> {
        timestamp::from_millis(self.time)
    }

    pub fn is_partially_refunded(&self) -> bool {
        self.refund_amount > 0 && self.amount > 0
    }
}

/// One action applied to a trade, e.g. authorization, refund or capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeHistoryEntry {
    pub amount: i64,
    /// Action code.
    pub actions: i32,
    /// When the action happened, ms since epoch.
    pub mills: i64,
    pub success: bool,
}

/// One page of a record query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRecordsResponse {
    /// Response code. 0 indicates success.
    pub status: i32,
    pub msg: String,
    /// Records per page, at most [`MAX_RECORDS_PER_PAGE`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records_per_page: Option<i64>,
    /// The returned page, starting at 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_page_count: Option<i64>,
    /// Total number of transactions across all pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_transactions: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_records: Option<Vec<TradeRecord>>,
}

impl GetRecordsResponse {
    pub fn records(&self) -> &[TradeRecord] {
        self.trade_records.as_deref().unwrap_or_default()
    }

    /// Whether the paging fields agree with each other and with the records.
    ///
    /// An empty result with zero pages is consistent. Missing paging fields
    /// are not.
    pub fn is_paging_consistent(&self) -> bool {
        let (Some(per_page), Some(page), Some(total)) =
            (self.records_per_page, self.page, self.total_page_count)
        else {
            return false;
        };
        if !(1..=MAX_RECORDS_PER_PAGE).contains(&per_page) {
            return false;
        }
        let records = self.records();
        let fits_page = usize::try_from(per_page).is_ok_and(|max| records.len() <= max);
        if total == 0 {
            return records.is_empty();
        }
        fits_page && (1..=total).contains(&page)
    }

    pub fn has_next_page(&self) -> bool {
        matches!((self.page, self.total_page_count), (Some(page), Some(total)) if page < total)
    }
}

impl ApiResponse for GetRecordsResponse {
    const OPERATION: Operation = Operation::GetRecords;

    fn status(&self) -> i32 {
        self.status
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// Full action history of a single trade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRecordHistoryResponse {
    /// Response code. 0 indicates success.
    pub status: i32,
    pub msg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rec_trade_id: Option<String>,
    /// Ordered by occurrence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_history: Option<Vec<TradeHistoryEntry>>,
}

impl GetRecordHistoryResponse {
    pub fn is_chronological(&self) -> bool {
        self.trade_history
            .as_deref()
            .unwrap_or_default()
            .windows(2)
            .all(|pair| pair[0].mills <= pair[1].mills)
    }
}

impl ApiResponse for GetRecordHistoryResponse {
    const OPERATION: Operation = Operation::GetRecordHistory;

    fn status(&self) -> i32 {
        self.status
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// Response to forcing a trade to be captured today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapTodayResponse {
    /// Response code. 0 indicates success.
    pub status: i32,
    pub msg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cap_millis: Option<i64>,
}

impl CapTodayResponse {
    /// Capture time, if the gateway returned one.
    pub fn captured_at(&self) -> Option<Result<OffsetDateTime, ComponentRange>> {
        self.cap_millis.map(timestamp::from_millis)
    }
}

impl ApiResponse for CapTodayResponse {
    const OPERATION: Operation = Operation::CapToday;

    fn status(&self) -> i32 {
        self.status
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn trade_record(rec_trade_id: &str, refund_amount: i64) -> serde_json::Value {
        let record_status = if refund_amount > 0 { 2 } else { 1 };
        json!({
            "rec_trade_id": rec_trade_id,
            "auth_code": "123456",
            "merchant_id": "merchant_demo",
            "merchant_name": "Demo Store",
            "app_name": "demo-app",
            "time": 1_577_836_800_000_i64,
            "amount": 1000 - refund_amount,
            "refund_amount": refund_amount,
            "record_status": record_status,
            "bank_transaction_id": "TP20200101abcdef",
            "cap_millis": 1_577_923_200_000_i64,
            "original_amount": 1000,
            "bank_transaction_start_millis": 1_577_836_800_100_i64,
            "bank_transaction_end_millis": 1_577_836_800_900_i64,
            "is_captured": true,
            "bank_result_code": "00",
            "bank_result_msg": "",
            "partial_card_number": "424242******4242",
            "details": "T-shirt x1",
            "cardholder": {
                "phone_number": "+886923456789",
                "name": "Wang Xiao Ming",
                "email": "user@example.com",
                "zip_code": "100",
                "address": "Taipei",
                "national_id": "A123456789"
            }
        })
    }

    fn records_page(page: i64, total_page_count: i64, records: usize) -> serde_json::Value {
        let trade_records: Vec<_> = (0..records)
            .map(|i| trade_record(&format!("D{i:04}"), 0))
            .collect();
        json!({
            "status": 0,
            "msg": "Success",
            "records_per_page": 2,
            "page": page,
            "total_page_count": total_page_count,
            "number_of_transactions": 3,
            "trade_records": trade_records
        })
    }

    #[test]
    fn test_trade_record_parsing() {
        let record: TradeRecord = serde_json::from_value(trade_record("D0001", 300)).unwrap();
        assert_eq!(record.amount, 700);
        assert_eq!(record.original_amount, 1000);
        assert_eq!(record.record_status, RecordStatus::PARTIALLY_REFUNDED);
        assert!(record.is_partially_refunded());
        assert_eq!(record.cardholder.national_id, "A123456789");
        assert_eq!(record.traded_at().unwrap().year(), 2020);
    }

    #[test]
    fn test_unknown_record_status() {
        let mut raw = trade_record("D0001", 0);
        raw["record_status"] = json!(42);
        let record: TradeRecord = serde_json::from_value(raw).unwrap();
        assert_eq!(record.record_status, RecordStatus(42));
        assert_eq!(record.record_status.to_string(), "unknown record status (42)");
        assert_eq!(RecordStatus::ERROR.to_string(), "error");
    }

    #[test]
    fn test_records_page() {
        let raw = records_page(1, 2, 2);
        let response: GetRecordsResponse = serde_json::from_value(raw.clone()).unwrap();
        assert!(response.is_success());
        assert_eq!(response.records().len(), 2);
        assert!(response.is_paging_consistent());
        assert!(response.has_next_page());
        assert_eq!(serde_json::to_value(&response).unwrap(), raw);
    }

    #[test]
    fn test_last_records_page() {
        let response: GetRecordsResponse =
            serde_json::from_value(records_page(2, 2, 1)).unwrap();
        assert!(response.is_paging_consistent());
        assert!(!response.has_next_page());
    }

    #[test]
    fn test_inconsistent_paging() {
        let overfull: GetRecordsResponse =
            serde_json::from_value(records_page(1, 2, 3)).unwrap();
        assert!(!overfull.is_paging_consistent());

        let past_end: GetRecordsResponse =
            serde_json::from_value(records_page(3, 2, 0)).unwrap();
        assert!(!past_end.is_paging_consistent());

        let zero_page: GetRecordsResponse =
            serde_json::from_value(records_page(0, 2, 1)).unwrap();
        assert!(!zero_page.is_paging_consistent());
    }

    #[test]
    fn test_empty_records() {
        let response: GetRecordsResponse = serde_json::from_value(json!({
            "status": 0,
            "msg": "Success",
            "records_per_page": 50,
            "page": 1,
            "total_page_count": 0,
            "number_of_transactions": 0,
            "trade_records": []
        }))
        .unwrap();
        assert!(response.is_paging_consistent());
        assert!(!response.has_next_page());
    }

    #[test]
    fn test_records_failure() {
        let response: GetRecordsResponse =
            serde_json::from_value(json!({ "status": 2, "msg": "Invalid arguments" })).unwrap();
        assert!(!response.is_success());
        assert!(response.records().is_empty());
        assert!(!response.is_paging_consistent());
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "status": 2, "msg": "Invalid arguments" })
        );
    }

    #[test]
    fn test_record_history() {
        let raw = json!({
            "status": 0,
            "msg": "Success",
            "rec_trade_id": "D0001",
            "trade_history": [
                { "amount": 1000, "actions": 0, "mills": 1_577_836_800_000_i64, "success": true },
                { "amount": 300, "actions": 1, "mills": 1_577_923_200_000_i64, "success": true },
                { "amount": 700, "actions": 2, "mills": 1_578_009_600_000_i64, "success": false }
            ]
        });
        let response: GetRecordHistoryResponse = serde_json::from_value(raw.clone()).unwrap();
        let history = response.trade_history.as_deref().unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[1].actions, 1);
        assert_eq!(history[1].mills, 1_577_923_200_000);
        assert!(!history[2].success);
        assert!(response.is_chronological());

        let encoded = serde_json::to_value(&response).unwrap();
        assert_eq!(encoded, raw);
        assert_eq!(encoded["trade_history"][0]["mills"], 1_577_836_800_000_i64);
        let reparsed: GetRecordHistoryResponse = serde_json::from_value(encoded).unwrap();
        assert_eq!(reparsed, response);
    }

    #[test]
    fn test_record_history_out_of_order() {
        let response = GetRecordHistoryResponse {
            status: 0,
            msg: "Success".to_owned(),
            rec_trade_id: Some("D0001".to_owned()),
            trade_history: Some(vec![
                TradeHistoryEntry { amount: 1, actions: 0, mills: 20, success: true },
                TradeHistoryEntry { amount: 1, actions: 1, mills: 10, success: true },
            ]),
        };
        assert!(!response.is_chronological());
    }

    #[test]
    fn test_cap_today() {
        let response: CapTodayResponse = serde_json::from_value(json!({
            "status": 0,
            "msg": "Success",
            "cap_millis": 1_577_923_200_000_i64
        }))
        .unwrap();
        assert_eq!(response.captured_at().unwrap().unwrap().day(), 2);

        let failed: CapTodayResponse =
            serde_json::from_value(json!({ "status": 5, "msg": "Already captured" })).unwrap();
        assert!(failed.captured_at().is_none());
    }

    #[test]
    fn test_cap_today_out_of_range() {
        let response = CapTodayResponse {
            status: 0,
            msg: "Success".to_owned(),
            cap_millis: Some(i64::MAX),
        };
        assert!(response.captured_at().unwrap().is_err());
    }

    #[test]
    fn test_cap_today_round_trip() {
        for raw in [
            json!({ "status": 0, "msg": "Success", "cap_millis": 1_577_923_200_000_i64 }),
            json!({ "status": 5, "msg": "Already captured" }),
        ] {
            let response: CapTodayResponse = serde_json::from_value(raw.clone()).unwrap();
            let encoded = serde_json::to_value(&response).unwrap();
            assert_eq!(encoded, raw);
            let reparsed: CapTodayResponse = serde_json::from_value(encoded).unwrap();
            assert_eq!(reparsed, response);
        }
    }
}
