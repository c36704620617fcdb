//! # Token Store Mechanisms
//!
//! Mechanism capability checks: does a token object support a requested
//! mechanism with the given parameters?
//!
//! ## Comparison Rules
//!
//! | Mechanism | Compatible when |
//! |-----------|-----------------|
//! | `CKM_RSA_X_509` | always (no parameters) |
//! | `CKM_RSA_PKCS_OAEP` | hash algorithm and MGF equal the stored entry |
//! | `CKM_AES_CBC` | requested IV is exactly one 16-byte block |
//! | anything else | parameter bytes identical to the stored entry |
//!
//! ## Usage
//!
//! ```rust
//! use tokenstore_core::{MechType, Mechanism};
//! use tokenstore_mech::{is_supported, Mgf, OaepParams};
//! use tokenstore_objects::TokenObject;
//!
//! let mut key = TokenObject::new();
//! key.append_mechanisms(&[OaepParams::new(MechType::SHA256, Mgf::MGF1_SHA256).into_mechanism()])
//!     .unwrap();
//!
//! let request = OaepParams::new(MechType::SHA256, Mgf::MGF1_SHA256).into_mechanism();
//! assert!(is_supported(&key, &request).is_ok());
//! assert!(is_supported(&key, &Mechanism::new(MechType::ECDSA)).is_err());
//! ```

pub mod params;
pub mod support;

pub use params::{Mgf, OaepParams, AES_BLOCK_SIZE, OAEP_SOURCE_DATA_SPECIFIED};
pub use support::{is_supported, ParamRule};
