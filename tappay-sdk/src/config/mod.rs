//! Configuration types for the TapPay contract.
//!
//! These only describe where each response shape comes from. Sending the
//! requests is left to whatever HTTP client the caller already uses.

mod environment;
mod operation;

pub use environment::{Environment, UnknownEnvironment};
pub use operation::Operation;
