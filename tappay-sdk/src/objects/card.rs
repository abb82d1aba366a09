//! Card sub-shapes shared by the payment and card binding responses.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How the card is funded.
///
/// Kept open: codes the gateway adds later still deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Funding(pub i32);

impl Funding {
    pub const CREDIT: Funding = Funding(0);
    pub const DEBIT: Funding = Funding(1);
    pub const PREPAID: Funding = Funding(2);

    pub fn is_known(self) -> bool {
        matches!(self, Self::CREDIT | Self::DEBIT | Self::PREPAID)
    }
}

impl fmt::Display for Funding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::CREDIT => write!(f, "credit"),
            Self::DEBIT => write!(f, "debit"),
            Self::PREPAID => write!(f, "prepaid"),
            Funding(code) => write!(f, "unknown funding ({code})"),
        }
    }
}

/// Card network.
///
/// Kept open like [`Funding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardType(pub i32);

impl CardType {
    pub const VISA: CardType = CardType(1);
    pub const MASTERCARD: CardType = CardType(2);
    pub const JCB: CardType = CardType(3);
    pub const UNION_PAY: CardType = CardType(4);
    pub const AMEX: CardType = CardType(5);

    /// Network name for known codes.
    pub fn name(self) -> Option<&'static str> {
        match self {
            Self::VISA => Some("VISA"),
            Self::MASTERCARD => Some("MasterCard"),
            Self::JCB => Some("JCB"),
            Self::UNION_PAY => Some("Union Pay"),
            Self::AMEX => Some("AMEX"),
            _ => None,
        }
    }

    pub fn is_known(self) -> bool {
        self.name().is_some()
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "unknown card type ({})", self.0),
        }
    }
}

/// Reusable reference to a card, for charging it later by token.
///
/// Only returned when the request asked the gateway to remember the card.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardSecret {
    pub card_key: String,
    pub card_token: String,
}

/// Masked card metadata. Never contains the full card number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInfo {
    /// First six digits of the card.
    pub bin_code: String,
    /// Last four digits of the card.
    pub last_four: String,
    /// Card issuer.
    pub issuer: String,
    pub funding: Funding,
    #[serde(rename = "type")]
    pub card_type: CardType,
    /// Card level, e.g. `PLATINUM`.
    pub level: String,
    /// Country of the card issuer.
    pub country: String,
    pub country_code: String,
    /// Expiry as `YYYYMM`.
    pub expiry_date: String,
}

impl CardInfo {
    /// Display form of the card number, e.g. `424242******4242`.
    pub fn masked_number(&self) -> String {
        format!("{}******{}", self.bin_code, self.last_four)
    }
}

/// Window during which the bank processed the transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankTransactionTime {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time_millis: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time_millis: Option<i64>,
}

impl BankTransactionTime {
    /// Processing time, if both bounds are present and in order.
    pub fn duration(&self) -> Option<time::Duration> {
        match (self.start_time_millis, self.end_time_millis) {
            (Some(start), Some(end)) if end >= start => {
                end.checked_sub(start).map(time::Duration::milliseconds)
            }
            _ => None,
        }
    }
}
