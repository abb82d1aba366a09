//! Response shapes of the TapPay backend API.
//!
//! One module per area of the API. Shapes are passive records: unknown
//! coded values deserialize, and nothing here rejects a payload on semantic
//! grounds.
//!
//! On every response envelope only `status` and `msg` are guaranteed. All
//! other envelope fields are `Option`s because a rejected request may omit
//! any of them; they are skipped on serialization when absent so a decoded
//! payload re-encodes to the same JSON.

pub mod card;
pub mod card_binding;
pub mod payment;
pub mod record;
pub mod refund;

pub use card::{BankTransactionTime, CardInfo, CardSecret, CardType, Funding};
pub use card_binding::{BindCardResponse, RemoveCardResponse};
pub use payment::{PayByPrimeResponse, PayByTokenResponse};
pub use record::{
    CapTodayResponse, Cardholder, GetRecordHistoryResponse, GetRecordsResponse, RecordStatus,
    TradeHistoryEntry, TradeRecord,
};
pub use refund::RefundResponse;
