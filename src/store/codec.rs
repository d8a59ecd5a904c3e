//! String encodings for persisted values
//!
//! Every value is a string at rest. Decoders are strict: anything that does not
//! parse is reported so the caller can fall back to the default.

use super::state::PriorDay;
use crate::core::Order;
use thiserror::Error;

/// A stored value that does not decode as its expected type
#[derive(Debug, Error)]
#[error("unreadable {expected} value '{value}'")]
pub struct CodecError {
    pub expected: &'static str,
    pub value: String,
}

impl CodecError {
    fn new(expected: &'static str, value: &str) -> Self {
        Self {
            expected,
            value: value.to_string(),
        }
    }
}

const FALSE: &str = "false";

/// `false` when no order has been saved, otherwise a JSON array
#[must_use]
pub fn encode_order(order: Option<&Order>) -> String {
    order.map_or_else(|| FALSE.to_string(), ToString::to_string)
}

/// Decode an order saved by [`encode_order`]
///
/// `false`, `null` and the empty string all mean "no order".
///
/// # Errors
/// Returns `CodecError` for anything else that is not a JSON array of indices.
pub fn decode_order(raw: &str) -> Result<Option<Order>, CodecError> {
    match raw.trim() {
        "" | FALSE | "null" => Ok(None),
        text => serde_json::from_str(text)
            .map(Some)
            .map_err(|_| CodecError::new("order", raw)),
    }
}

#[must_use]
pub fn encode_count(count: u32) -> String {
    count.to_string()
}

/// Decode a counter; `false` and the empty string read as zero
///
/// # Errors
/// Returns `CodecError` if the value is not a non-negative integer.
pub fn decode_count(raw: &str) -> Result<u32, CodecError> {
    match raw.trim() {
        "" | FALSE => Ok(0),
        text => text.parse().map_err(|_| CodecError::new("counter", raw)),
    }
}

#[must_use]
pub fn encode_flag(flag: bool) -> String {
    flag.to_string()
}

/// # Errors
/// Returns `CodecError` unless the value is `true` or `false`.
pub fn decode_flag(raw: &str) -> Result<bool, CodecError> {
    match raw.trim() {
        "true" => Ok(true),
        "" | FALSE => Ok(false),
        _ => Err(CodecError::new("flag", raw)),
    }
}

#[must_use]
pub fn encode_priors(priors: &[PriorDay]) -> String {
    serde_json::to_string(priors).unwrap_or_else(|_| "[]".to_string())
}

/// `null` reads as an empty history
///
/// # Errors
/// Returns `CodecError` if the value is not a JSON array of `{date, solved}`.
pub fn decode_priors(raw: &str) -> Result<Vec<PriorDay>, CodecError> {
    match raw.trim() {
        "" | "null" => Ok(Vec::new()),
        text => serde_json::from_str(text).map_err(|_| CodecError::new("history", raw)),
    }
}
