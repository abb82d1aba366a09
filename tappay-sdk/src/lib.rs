//! Typed response contract for the TapPay backend API.
//!
//! Every payload the gateway returns is modelled in [`objects`] as a plain
//! serde record. [`response`] adds the shared `status` / `msg` envelope on
//! top, and [`config`] names the endpoints each shape belongs to.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::panic))]
#![forbid(unsafe_code)]

pub mod config;
pub mod objects;
pub mod response;
pub mod timestamp;

pub use config::{Environment, Operation};
pub use response::{ApiResponse, DecodeError, RejectedResponse, decode, decode_lenient};
