//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use tokenstore::{Token, TokenConfig};
use tokenstore_core::{AttrType, Attribute, KeyHandle, Mechanism, ObjectId};
use tokenstore_objects::TokenObject;
use zeroize::Zeroizing;

/// Object class values (`CKO_*`).
pub mod class {
    pub const CERTIFICATE: u64 = 0x1;
    pub const PUBLIC_KEY: u64 = 0x2;
    pub const PRIVATE_KEY: u64 = 0x3;
    pub const SECRET_KEY: u64 = 0x4;
}

/// A token plus a counter for handing out object ids.
pub struct TokenFixture {
    pub token: Token,
    next_id: u64,
}

impl TokenFixture {
    /// Create a fixture around a token with the default config.
    pub fn new() -> Self {
        Self::with_config(TokenConfig::default())
    }

    /// Create a fixture with a specific config.
    ///
    /// Panics if the config is invalid.
    pub fn with_config(config: TokenConfig) -> Self {
        Self {
            token: Token::new(config).expect("fixture config must be valid"),
            next_id: 1,
        }
    }

    /// Build a populated object with the next free id and add it.
    pub fn add(&mut self, attrs: &[Attribute], mechs: &[Mechanism]) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;

        let object = make_object(id, attrs, mechs);
        self.token.add_object(object).expect("fixture object must insert")
    }

    /// Add a key of the given class and label.
    pub fn add_key(&mut self, key_class: u64, label: &str, mechs: &[Mechanism]) -> ObjectId {
        self.add(
            &[
                Attribute::from_ulong(AttrType::CLASS, key_class),
                Attribute::new(AttrType::LABEL, label.as_bytes().to_vec()),
                Attribute::from_bool(AttrType::TOKEN, true),
            ],
            mechs,
        )
    }

    /// Run a whole search and collect every id, paging `page` at a time.
    pub fn find_all(&mut self, template: &[Attribute], page: usize) -> Vec<ObjectId> {
        self.token.find_init(template).expect("find_init");
        let mut out = Vec::new();
        loop {
            let batch = self.token.find(page).expect("find");
            if batch.is_empty() {
                break;
            }
            out.extend(batch);
        }
        self.token.find_final().expect("find_final");
        out
    }
}

impl Default for TokenFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A fully populated token object with placeholder key material.
pub fn make_object(id: ObjectId, attrs: &[Attribute], mechs: &[Mechanism]) -> TokenObject {
    let mut object = TokenObject::new();
    object.set_id(id).expect("fixture id must be valid");
    object.set_handle(KeyHandle(0x8100_0000 | id.get() as u32));
    object.set_blob_data(vec![0xb0; 32], vec![0xb1; 48]);
    object.set_auth(Zeroizing::new(vec![0xa5; 16]), vec![0xa6; 32]);
    object
        .append_attributes(attrs)
        .expect("fixture attributes must append");
    object
        .append_mechanisms(mechs)
        .expect("fixture mechanisms must append");
    object
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokenstore_core::MechType;

    #[test]
    fn test_fixture_ids_are_sequential() {
        let mut fixture = TokenFixture::new();
        let a = fixture.add_key(class::PRIVATE_KEY, "a", &[]);
        let b = fixture.add_key(class::PUBLIC_KEY, "b", &[]);
        assert_eq!(a, ObjectId(1));
        assert_eq!(b, ObjectId(2));
        assert_eq!(fixture.token.store().len(), 2);
    }

    #[test]
    fn test_find_all_small_pages() {
        let mut fixture = TokenFixture::new();
        for i in 0..7 {
            fixture.add_key(class::SECRET_KEY, &format!("k{}", i), &[]);
        }
        let ids = fixture.find_all(&[], 3);
        assert_eq!(ids.len(), 7);
        assert!(!fixture.token.is_operation_active());
    }

    #[test]
    fn test_make_object_is_populated() {
        let obj = make_object(
            ObjectId(5),
            &[Attribute::new(AttrType::LABEL, b"x".to_vec())],
            &[Mechanism::new(MechType::RSA_X_509)],
        );
        assert_eq!(obj.handle(), KeyHandle(0x8100_0005));
        assert!(obj.public_blob().is_some());
        assert!(obj.unsealed_auth().is_some());
        assert_eq!(obj.mechanisms().len(), 1);
    }
}
