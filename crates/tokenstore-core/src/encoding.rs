//! CBOR encoding of record collections.
//!
//! The persistence layer stores a record's attribute and mechanism lists as
//! opaque bytes. These helpers produce and consume that byte form.

use serde::{de::DeserializeOwned, Serialize};

use crate::attribute::AttributeList;
use crate::error::{Result, TokenError};
use crate::mechanism::MechanismList;

fn to_cbor<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    ciborium::into_writer(value, &mut buf).map_err(|e| TokenError::Encoding(e.to_string()))?;
    Ok(buf)
}

fn from_cbor<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    ciborium::from_reader(bytes).map_err(|e| TokenError::Encoding(e.to_string()))
}

impl AttributeList {
    /// Serialize to CBOR bytes.
    pub fn to_cbor(&self) -> Result<Vec<u8>> {
        to_cbor(self)
    }

    /// Deserialize from CBOR bytes.
    pub fn from_cbor(bytes: &[u8]) -> Result<Self> {
        from_cbor(bytes)
    }
}

impl MechanismList {
    /// Serialize to CBOR bytes.
    pub fn to_cbor(&self) -> Result<Vec<u8>> {
        to_cbor(self)
    }

    /// Deserialize from CBOR bytes.
    pub fn from_cbor(bytes: &[u8]) -> Result<Self> {
        from_cbor(bytes)
    }
}
