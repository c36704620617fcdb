//! Error types for the token facade.

use thiserror::Error;
use tokenstore_core::TokenError;

/// Errors in a [`TokenConfig`](crate::TokenConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A page cap of zero would make every `find` return nothing.
    #[error("max_find_page must be at least 1")]
    ZeroFindPage,

    /// Token labels are limited to 32 bytes.
    #[error("token label is {0} bytes, limit is 32")]
    LabelTooLong(usize),
}

impl From<ConfigError> for TokenError {
    fn from(e: ConfigError) -> Self {
        TokenError::GeneralError(e.to_string())
    }
}
