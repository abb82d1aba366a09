use serde::{Deserialize, Serialize};

use crate::config::Operation;
use crate::response::ApiResponse;

/// Response to a full or partial refund.
///
/// The gateway keeps `refund_amount` within the original amount; nothing
/// here checks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundResponse {
    /// Response code. 0 indicates success.
    pub status: i32,
    pub msg: String,
    /// Amount refunded by this request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund_amount: Option<i64>,
    /// Whether the refunded transaction had already been captured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_captured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_result_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_result_msg: Option<String>,
}

impl ApiResponse for RefundResponse {
    const OPERATION: Operation = Operation::Refund;

    fn status(&self) -> i32 {
        self.status
    }

    fn msg(&self) -> &str {
        &self.msg
    }

    fn bank_result_code(&self) -> Option<&str> {
        self.bank_result_code.as_deref()
    }

    fn bank_result_msg(&self) -> Option<&str> {
        self.bank_result_msg.as_deref()
    }
}
