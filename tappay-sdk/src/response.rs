//! The envelope shared by every TapPay response.
//!
//! All payloads carry a numeric `status` and a human-readable `msg`.
//! `status == 0` means the gateway accepted the request; anything else is a
//! rejection whose remaining fields are best-effort. Shapes that reach a bank
//! also surface `bank_result_code` / `bank_result_msg`.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::Operation;

/// The `status` value of an accepted request.
pub const STATUS_SUCCESS: i32 = 0;

/// Common view over the `status` / `msg` envelope of a response shape.
pub trait ApiResponse: Serialize + DeserializeOwned {
    /// The operation this shape answers.
    const OPERATION: Operation;

    fn status(&self) -> i32;

    fn msg(&self) -> &str;

    /// Response code from the bank, for shapes that carry one.
    fn bank_result_code(&self) -> Option<&str> {
        None
    }

    /// Error message from the bank, for shapes that carry one.
    fn bank_result_msg(&self) -> Option<&str> {
        None
    }

    fn is_success(&self) -> bool {
        self.status() == STATUS_SUCCESS
    }

    /// Split on the `status` convention, keeping the payload on success.
    fn into_result(self) -> Result<Self, RejectedResponse> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(RejectedResponse::from_response(&self))
        }
    }
}

/// A response whose `status` was not [`STATUS_SUCCESS`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{operation} rejected with status {status}: {msg}")]
pub struct RejectedResponse {
    pub operation: Operation,
    pub status: i32,
    pub msg: String,
    pub bank_result_code: Option<String>,
    pub bank_result_msg: Option<String>,
}

impl RejectedResponse {
    pub fn from_response<T: ApiResponse>(response: &T) -> Self {
        Self {
            operation: T::OPERATION,
            status: response.status(),
            msg: response.msg().to_owned(),
            bank_result_code: response.bank_result_code().map(str::to_owned),
            bank_result_msg: response.bank_result_msg().map(str::to_owned),
        }
    }
}

/// Errors produced while turning a response body into a typed shape.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The body is not JSON of the expected shape.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The body parsed but the gateway reported a failure.
    #[error(transparent)]
    Rejected(#[from] RejectedResponse),
}

/// Parse a response body and require `status == 0`.
pub fn decode<T: ApiResponse>(body: &[u8]) -> Result<T, DecodeError> {
    let response: T = decode_lenient(body)?;
    Ok(response.into_result()?)
}

/// Parse a response body without interpreting `status`.
pub fn decode_lenient<T: ApiResponse>(body: &[u8]) -> Result<T, DecodeError> {
    let response: T = serde_json::from_slice(body).map_err(|e| {
        warn!(operation = %T::OPERATION, error = %e, "Malformed response body");
        e
    })?;

    if response.is_success() {
        debug!(operation = %T::OPERATION, "Response decoded");
    } else {
        warn!(
            operation = %T::OPERATION,
            status = response.status(),
            msg = response.msg(),
            bank_result_code = ?response.bank_result_code(),
            "Gateway rejected request"
        );
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::card_binding::RemoveCardResponse;
    use crate::objects::refund::RefundResponse;

    #[test]
    fn test_decode_success() {
        let body = br#"{"status":0,"msg":"Success"}"#;
        let response: RemoveCardResponse = decode(body).unwrap();
        assert!(response.is_success());
        assert_eq!(response.msg, "Success");
    }

    #[test]
    fn test_decode_rejected_carries_bank_result() {
        let body = br#"{
            "status": 10003,
            "msg": "Card Error",
            "bank_result_code": "05",
            "bank_result_msg": "Do not honor"
        }"#;
        let err = decode::<RefundResponse>(body).unwrap_err();
        let DecodeError::Rejected(rejected) = err else {
            panic!("expected a rejection");
        };
        assert_eq!(rejected.operation, Operation::Refund);
        assert_eq!(rejected.status, 10003);
        assert_eq!(rejected.msg, "Card Error");
        assert_eq!(rejected.bank_result_code.as_deref(), Some("05"));
        assert_eq!(rejected.bank_result_msg.as_deref(), Some("Do not honor"));
        assert_eq!(
            rejected.to_string(),
            "refund rejected with status 10003: Card Error"
        );
    }

    #[test]
    fn test_decode_lenient_keeps_rejection() {
        let body = br#"{"status":421,"msg":"Timeout"}"#;
        let response: RemoveCardResponse = decode_lenient(body).unwrap();
        assert!(!response.is_success());
        assert_eq!(response.status(), 421);
    }

    #[test]
    fn test_decode_malformed() {
        let body = br#"{"msg":"missing status"}"#;
        let err = decode::<RemoveCardResponse>(body).unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }

    #[test]
    fn test_rejected_without_bank_fields() {
        let response = RemoveCardResponse {
            status: 4,
            msg: "Card token not found".to_owned(),
        };
        let rejected = response.into_result().unwrap_err();
        assert_eq!(rejected.operation, Operation::RemoveCard);
        assert_eq!(rejected.bank_result_code, None);
    }
}
