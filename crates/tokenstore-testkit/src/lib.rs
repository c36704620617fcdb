//! # Token Store Testkit
//!
//! Testing utilities for the token store.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Reference vectors**: Matching and mechanism-query scenarios with expected outcomes
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: A token wrapper that hands out object ids
//!
//! ## Reference Vectors
//!
//! ```rust
//! use tokenstore_testkit::vectors::verify_all_vectors;
//!
//! for (name, passed) in verify_all_vectors() {
//!     assert!(passed, "{}", name);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use tokenstore_testkit::{StoreParams, TokenFixture};
//!
//! proptest! {
//!     #[test]
//!     fn empty_template_finds_everything(params: StoreParams) {
//!         let mut fixture = TokenFixture::new();
//!         for attrs in &params.objects {
//!             fixture.add(attrs, &[]);
//!         }
//!         prop_assert_eq!(fixture.find_all(&[], 3).len(), params.objects.len());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use tokenstore_testkit::fixtures::{class, TokenFixture};
//!
//! let mut fixture = TokenFixture::new();
//! let id = fixture.add_key(class::SECRET_KEY, "k1", &[]);
//! assert_eq!(fixture.find_all(&[], 10), vec![id]);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{make_object, TokenFixture};
pub use generators::StoreParams;
pub use vectors::{match_vectors, mechanism_vectors, verify_all_vectors, MatchVector, MechanismVector, Outcome};
