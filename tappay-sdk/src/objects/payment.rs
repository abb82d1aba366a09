//! Charge responses: pay by prime and pay by card token.

use serde::{Deserialize, Serialize};

use super::card::{BankTransactionTime, CardInfo, CardSecret};
use crate::config::Operation;
use crate::response::ApiResponse;

/// Response to charging a one-time prime collected by the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayByPrimeResponse {
    /// Response code. 0 indicates success.
    pub status: i32,
    pub msg: String,
    /// Transaction identifier generated by the gateway.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rec_trade_id: Option<String>,
    /// Transaction identifier for the bank. Merchant supplied or generated,
    /// unique either way.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_transaction_id: Option<String>,
    /// Bank authorization code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_code: Option<String>,
    /// Only present when the request set `remember` to true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_secret: Option<CardSecret>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_info: Option<CardInfo>,
    /// Merchant defined order identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    /// Acquiring bank or payment processor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acquirer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_time_millis: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_transaction_time: Option<BankTransactionTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_result_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_result_msg: Option<String>,
}

impl ApiResponse for PayByPrimeResponse {
    const OPERATION: Operation = Operation::PayByPrime;

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

/// Response to charging a card previously remembered as a [`CardSecret`].
///
/// Same fields as [`PayByPrimeResponse`] minus the card secret, which the
/// caller already holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayByTokenResponse {
    /// Response code. 0 indicates success.
    pub status: i32,
    pub msg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rec_trade_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_transaction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_info: Option<CardInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acquirer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_time_millis: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_transaction_time: Option<BankTransactionTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_result_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_result_msg: Option<String>,
}

impl ApiResponse for PayByTokenResponse {
    const OPERATION: Operation = Operation::PayByToken;

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
