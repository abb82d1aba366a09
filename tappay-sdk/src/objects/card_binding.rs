//! Binding a card for later charges, and removing the binding.

use serde::{Deserialize, Serialize};

use super::card::{BankTransactionTime, CardInfo, CardSecret};
use crate::config::Operation;
use crate::response::ApiResponse;

/// Response to binding a card.
///
/// `card_secret` is only present when the binding succeeded and the request
/// asked for the card to be remembered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindCardResponse {
    /// Response code. 0 indicates success.
    pub status: i32,
    pub msg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_secret: Option<CardSecret>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_info: Option<CardInfo>,
    /// Time of the binding, ms since epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mills: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_transaction_time: Option<BankTransactionTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_result_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_result_msg: Option<String>,
}

impl ApiResponse for BindCardResponse {
    const OPERATION: Operation = Operation::BindCard;

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

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveCardResponse {
    /// Response code. 0 indicates success.
    pub status: i32,
    pub msg: String,
}

impl ApiResponse for RemoveCardResponse {
    const OPERATION: Operation = Operation::RemoveCard;

    fn status(&self) -> i32 {
        self.status
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}
