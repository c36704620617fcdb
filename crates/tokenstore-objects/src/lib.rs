//! # Token Store Objects
//!
//! The object records a token holds, the append-only store they live in, and
//! the template matcher that searches them.
//!
//! ## Overview
//!
//! A [`TokenObject`] is populated incrementally by the collaborator that
//! loads it (blobs, auth material, id, handle, attributes, mechanisms, in any
//! order) and then moved into an [`ObjectStore`]. The store owns every record
//! exclusively; records are never removed or relocated.
//!
//! ## Key Types
//!
//! - [`TokenObject`] - A searchable record with attributes and mechanisms
//! - [`SessionObject`], [`WrappingObject`], [`SealObject`] - Flat
//!   material holders outside the searchable store
//! - [`ObjectStore`] - Ordered, append-only collection of token objects
//!
//! ## Matching
//!
//! - [`matches`] - Subset match of a template against a record
//! - [`get_attribute_by_type`] / [`get_attribute_full`] - Exact lookups
//! - [`get_attributes`] - Fill a caller's retrieval template

pub mod matcher;
pub mod object;
pub mod secondary;
pub mod store;

pub use matcher::{get_attribute_by_type, get_attribute_full, get_attributes, matches};
pub use object::TokenObject;
pub use secondary::{SealObject, SealedAuth, SessionObject, WrappingObject};
pub use store::ObjectStore;
