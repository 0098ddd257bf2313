//! Structured error codes shared by every fallible layer.
//!
//! Route handlers copy `error_code()` into JSON error bodies so clients and
//! log searches can match on a stable `E_*` string instead of free text.

/// Grepable error code and retryable flag for structured error responses.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}
