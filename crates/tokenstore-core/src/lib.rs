//! # Token Store Core
//!
//! Pure primitives for the token object store: typed attributes, mechanism
//! descriptors, identifiers, and the status-code taxonomy.
//!
//! This crate contains no object records and no operation state. It only
//! describes the values that flow between the caller, the object store, and
//! the mechanism checker.
//!
//! ## Key Types
//!
//! - [`Attribute`] - A typed, variable-length value owned by an object record
//! - [`AttributeList`] - The append-only attribute collection of a record
//! - [`TemplateEntry`] - One slot of a caller's retrieval template
//! - [`Mechanism`] - A mechanism tag plus optional opaque parameters
//! - [`TokenError`] / [`CkRv`] - Failures and their numeric status codes
//!
//! ## Encoding
//!
//! Attribute and mechanism lists can be handed to a persistence layer as
//! CBOR. See the [`encoding`] module.

pub mod attribute;
pub mod encoding;
pub mod error;
pub mod mechanism;
pub mod types;

pub use attribute::{Attribute, AttributeList, TemplateEntry};
pub use error::{CkRv, Result, TokenError};
pub use mechanism::{Mechanism, MechanismList};
pub use types::{AttrType, KeyHandle, MechType, ObjectId};
