//! # Token Store
//!
//! The object repository and search engine of a cryptographic token: typed
//! object records, capability queries, and the stateful object-search
//! protocol.
//!
//! ## Overview
//!
//! A [`Token`] owns an object store and a single operation slot.
//!
//! - **Find protocol**: [`Token::find_init`] captures the objects matching a
//!   template, [`Token::find`] pages their identifiers out, and
//!   [`Token::find_final`] releases the search.
//! - **Attribute protocol**: [`Token::get_attribute_value`] fills a caller's
//!   template from one object.
//! - **Mechanism query**: [`Token::is_mech_supported`] checks a requested
//!   mechanism and its parameters against one object.
//!
//! Only one operation may be bound to a token at a time. A second
//! `find_init`, or any other operation, fails with `OperationActive` until
//! the first is finalized.
//!
//! ## Usage
//!
//! ```rust
//! use tokenstore::{Token, TokenConfig};
//! use tokenstore::core::{AttrType, Attribute, ObjectId};
//! use tokenstore::objects::TokenObject;
//!
//! let mut token = Token::new(TokenConfig::default()).unwrap();
//!
//! let mut key = TokenObject::new();
//! key.set_id(ObjectId(1)).unwrap();
//! key.append_attributes(&[Attribute::new(AttrType::LABEL, b"k1".to_vec())]).unwrap();
//! token.add_object(key).unwrap();
//!
//! token.find_init(&[Attribute::new(AttrType::LABEL, b"k1".to_vec())]).unwrap();
//! assert_eq!(token.find(10).unwrap(), vec![ObjectId(1)]);
//! token.find_final().unwrap();
//! ```
//!
//! ## Re-exports
//!
//! - `tokenstore::core` - Attributes, mechanisms, identifiers, errors
//! - `tokenstore::objects` - Object records and the object store
//! - `tokenstore::mech` - Mechanism capability checks

pub mod config;
pub mod error;
pub mod find;
pub mod operation;
pub mod token;

// Re-export component crates
pub use tokenstore_core as core;
pub use tokenstore_mech as mech;
pub use tokenstore_objects as objects;

pub use config::TokenConfig;
pub use error::ConfigError;
pub use find::FindSnapshot;
pub use operation::{OperationKind, OperationState};
pub use token::Token;

// Re-export commonly used core types
pub use tokenstore_core::{
    AttrType, Attribute, CkRv, MechType, Mechanism, ObjectId, Result, TemplateEntry, TokenError,
};
