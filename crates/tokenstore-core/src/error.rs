//! Error types and status codes for the token object store.

use std::fmt;

use thiserror::Error;

use crate::types::{MechType, ObjectId};

/// Errors that can occur during object store and search operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Allocation failed while growing a collection or building a snapshot.
    #[error("host memory exhausted")]
    HostMemory,

    /// An operation is already bound to the token.
    #[error("an operation is already active on this token")]
    OperationActive,

    /// No operation of the requested kind is bound to the token.
    #[error("operation not initialized")]
    OperationNotInitialized,

    /// No object with this handle exists in the store.
    #[error("object handle {0} is invalid")]
    ObjectHandleInvalid(ObjectId),

    /// A caller buffer is shorter than the stored attribute value.
    #[error("buffer too small for template entry {index}: {required} bytes required")]
    BufferTooSmall { index: usize, required: usize },

    /// The object has no mechanism entry with the requested tag.
    #[error("mechanism {0:?} is not supported by the object")]
    MechanismInvalid(MechType),

    /// The tag is present but no entry has compatible parameters.
    #[error("parameters for mechanism {0:?} are not supported by the object")]
    MechanismParamInvalid(MechType),

    /// Internal invariant violation.
    #[error("general error: {0}")]
    GeneralError(String),

    /// CBOR encoding or decoding of a record collection failed.
    #[error("encoding error: {0}")]
    Encoding(String),
}

impl TokenError {
    /// The numeric status code reported to the caller of the token API.
    pub fn rv(&self) -> CkRv {
        match self {
            TokenError::HostMemory => CkRv::HOST_MEMORY,
            TokenError::OperationActive => CkRv::OPERATION_ACTIVE,
            TokenError::OperationNotInitialized => CkRv::OPERATION_NOT_INITIALIZED,
            TokenError::ObjectHandleInvalid(_) => CkRv::OBJECT_HANDLE_INVALID,
            TokenError::BufferTooSmall { .. } => CkRv::BUFFER_TOO_SMALL,
            TokenError::MechanismInvalid(_) => CkRv::MECHANISM_INVALID,
            TokenError::MechanismParamInvalid(_) => CkRv::MECHANISM_PARAM_INVALID,
            TokenError::GeneralError(_) | TokenError::Encoding(_) => CkRv::GENERAL_ERROR,
        }
    }
}

impl From<std::collections::TryReserveError> for TokenError {
    fn from(_: std::collections::TryReserveError) -> Self {
        TokenError::HostMemory
    }
}

/// Result type for token operations.
pub type Result<T> = std::result::Result<T, TokenError>;

/// A status code of the standardized token API.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CkRv(pub u64);

impl CkRv {
    pub const OK: Self = Self(0x0000);
    pub const HOST_MEMORY: Self = Self(0x0002);
    pub const GENERAL_ERROR: Self = Self(0x0005);
    pub const MECHANISM_INVALID: Self = Self(0x0070);
    pub const MECHANISM_PARAM_INVALID: Self = Self(0x0071);
    pub const OBJECT_HANDLE_INVALID: Self = Self(0x0082);
    pub const OPERATION_ACTIVE: Self = Self(0x0090);
    pub const OPERATION_NOT_INITIALIZED: Self = Self(0x0091);
    pub const BUFFER_TOO_SMALL: Self = Self(0x0150);

    /// Collapse an operation result into its status code.
    pub fn from_result<T>(result: &Result<T>) -> Self {
        match result {
            Ok(_) => CkRv::OK,
            Err(e) => e.rv(),
        }
    }

    /// True for `CKR_OK`.
    pub fn is_ok(&self) -> bool {
        *self == CkRv::OK
    }
}

impl fmt::Debug for CkRv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            CkRv::OK => "CKR_OK",
            CkRv::HOST_MEMORY => "CKR_HOST_MEMORY",
            CkRv::GENERAL_ERROR => "CKR_GENERAL_ERROR",
            CkRv::MECHANISM_INVALID => "CKR_MECHANISM_INVALID",
            CkRv::MECHANISM_PARAM_INVALID => "CKR_MECHANISM_PARAM_INVALID",
            CkRv::OBJECT_HANDLE_INVALID => "CKR_OBJECT_HANDLE_INVALID",
            CkRv::OPERATION_ACTIVE => "CKR_OPERATION_ACTIVE",
            CkRv::OPERATION_NOT_INITIALIZED => "CKR_OPERATION_NOT_INITIALIZED",
            CkRv::BUFFER_TOO_SMALL => "CKR_BUFFER_TOO_SMALL",
            _ => return write!(f, "CkRv({:#x})", self.0),
        };
        f.write_str(name)
    }
}

impl<T> From<&Result<T>> for CkRv {
    fn from(result: &Result<T>) -> Self {
        CkRv::from_result(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(TokenError::HostMemory.rv().0, 0x02);
        assert_eq!(TokenError::OperationActive.rv().0, 0x90);
        assert_eq!(TokenError::ObjectHandleInvalid(ObjectId(9)).rv().0, 0x82);
        assert_eq!(
            TokenError::BufferTooSmall { index: 0, required: 4 }.rv().0,
            0x150
        );
        assert_eq!(TokenError::MechanismInvalid(MechType::AES_CBC).rv().0, 0x70);
        assert_eq!(
            TokenError::MechanismParamInvalid(MechType::AES_CBC).rv().0,
            0x71
        );
        assert_eq!(TokenError::Encoding("x".into()).rv(), CkRv::GENERAL_ERROR);
    }

    #[test]
    fn test_from_result() {
        let ok: Result<()> = Ok(());
        assert!(CkRv::from_result(&ok).is_ok());

        let err: Result<()> = Err(TokenError::OperationNotInitialized);
        assert_eq!(CkRv::from(&err), CkRv::OPERATION_NOT_INITIALIZED);
        assert_eq!(format!("{:?}", CkRv::from(&err)), "CKR_OPERATION_NOT_INITIALIZED");
    }
}
