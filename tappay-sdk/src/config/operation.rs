//! Backend API operations and their endpoints.

use std::fmt;

use url::Url;

use super::Environment;

/// One backend API call. Each response shape in
/// [`objects`](crate::objects) answers exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    PayByPrime,
    PayByToken,
    Refund,
    GetRecords,
    GetRecordHistory,
    CapToday,
    BindCard,
    RemoveCard,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::PayByPrime,
        Operation::PayByToken,
        Operation::Refund,
        Operation::GetRecords,
        Operation::GetRecordHistory,
        Operation::CapToday,
        Operation::BindCard,
        Operation::RemoveCard,
    ];

    /// Endpoint path relative to the environment root.
    pub fn path(&self) -> &'static str {
        match self {
            Operation::PayByPrime => "tpc/payment/pay-by-prime",
            Operation::PayByToken => "tpc/payment/pay-by-token",
            Operation::Refund => "tpc/transaction/refund",
            Operation::GetRecords => "tpc/transaction/query",
            Operation::GetRecordHistory => "tpc/transaction/trade-history",
            Operation::CapToday => "tpc/transaction/cap",
            Operation::BindCard => "tpc/card/bind",
            Operation::RemoveCard => "tpc/card/remove",
        }
    }

    /// Full endpoint URL in the given environment.
    pub fn url(&self, environment: Environment) -> Result<Url, url::ParseError> {
        self.url_from(&environment.base_url()?)
    }

    /// Endpoint URL under a custom root, e.g. a local mock of the gateway.
    ///
    /// `base` should end with `/`, otherwise its last segment is replaced.
    pub fn url_from(&self, base: &Url) -> Result<Url, url::ParseError> {
        base.join(self.path())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::PayByPrime => "pay_by_prime",
            Operation::PayByToken => "pay_by_token",
            Operation::Refund => "refund",
            Operation::GetRecords => "get_records",
            Operation::GetRecordHistory => "get_record_history",
            Operation::CapToday => "cap_today",
            Operation::BindCard => "bind_card",
            Operation::RemoveCard => "remove_card",
        };
        f.write_str(name)
    }
}
