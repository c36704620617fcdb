//! Attributes: typed, variable-length values owned by an object record.
//!
//! An attribute's length is the length of its value buffer. A zero-length
//! value is a real value, distinct from an attribute that is absent.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::AttrType;

/// A single typed attribute.
///
/// Equality is type + length + byte-wise value equality.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attribute {
    attr_type: AttrType,
    value: Vec<u8>,
}

impl Attribute {
    /// Create an attribute that owns `value`.
    pub fn new(attr_type: AttrType, value: impl Into<Vec<u8>>) -> Self {
        Self {
            attr_type,
            value: value.into(),
        }
    }

    /// Create an attribute with a zero-length value.
    pub fn empty(attr_type: AttrType) -> Self {
        Self {
            attr_type,
            value: Vec::new(),
        }
    }

    /// Create a `CK_BBOOL` attribute (one byte, 0 or 1).
    pub fn from_bool(attr_type: AttrType, value: bool) -> Self {
        Self::new(attr_type, vec![u8::from(value)])
    }

    /// Create a `CK_ULONG` attribute in native 64-bit little-endian layout.
    pub fn from_ulong(attr_type: AttrType, value: u64) -> Self {
        Self::new(attr_type, value.to_le_bytes().to_vec())
    }

    pub fn attr_type(&self) -> AttrType {
        self.attr_type
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Length of the value in bytes.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Interpret the value as a `CK_ULONG`, if it is exactly eight bytes.
    pub fn as_ulong(&self) -> Option<u64> {
        let bytes: [u8; 8] = self.value.as_slice().try_into().ok()?;
        Some(u64::from_le_bytes(bytes))
    }

    /// Interpret the value as a `CK_BBOOL`, if it is exactly one byte.
    pub fn as_bool(&self) -> Option<bool> {
        match self.value.as_slice() {
            [b] => Some(*b != 0),
            _ => None,
        }
    }

    /// Deep copy that reports allocation failure instead of aborting.
    pub fn try_clone(&self) -> Result<Self> {
        let mut value = Vec::new();
        value.try_reserve_exact(self.value.len())?;
        value.extend_from_slice(&self.value);
        Ok(Self {
            attr_type: self.attr_type,
            value,
        })
    }
}

impl fmt::Debug for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attribute")
            .field("type", &self.attr_type)
            .field("value", &hex::encode(&self.value))
            .finish()
    }
}

/// The attribute collection of an object record.
///
/// Append-only: entries are never removed or reordered. Iteration order is
/// insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeList(Vec<Attribute>);

impl AttributeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deep-copy `attrs` onto the end of the list.
    ///
    /// Either every entry is appended or, on allocation failure, the list is
    /// left exactly as it was.
    pub fn try_extend_from_slice(&mut self, attrs: &[Attribute]) -> Result<()> {
        let mut staged = Vec::new();
        staged.try_reserve_exact(attrs.len())?;
        for attr in attrs {
            staged.push(attr.try_clone()?);
        }

        self.0.try_reserve(staged.len())?;
        self.0.append(&mut staged);
        Ok(())
    }

    /// First attribute with the given type, in insertion order.
    pub fn get(&self, attr_type: AttrType) -> Option<&Attribute> {
        self.0.iter().find(|a| a.attr_type == attr_type)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Attribute] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if any attribute type appears more than once.
    pub fn has_duplicate_types(&self) -> bool {
        let mut seen = std::collections::HashSet::with_capacity(self.0.len());
        self.0.iter().any(|a| !seen.insert(a.attr_type))
    }
}

impl From<Vec<Attribute>> for AttributeList {
    fn from(attrs: Vec<Attribute>) -> Self {
        Self(attrs)
    }
}

impl<'a> IntoIterator for &'a AttributeList {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One slot of a caller's retrieval template.
///
/// Mirrors the `(type, value_pointer_or_null, value_length)` wire shape:
/// `buffer == None` asks for the length only. After a retrieval, an entry
/// whose type the object lacks is reset to absent (no buffer, zero length).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateEntry {
    pub attr_type: AttrType,
    pub buffer: Option<Vec<u8>>,
    pub value_len: usize,
}

impl TemplateEntry {
    /// Request only the length of the stored value.
    pub fn query(attr_type: AttrType) -> Self {
        Self {
            attr_type,
            buffer: None,
            value_len: 0,
        }
    }

    /// Request the value into a caller buffer of `capacity` bytes.
    pub fn with_capacity(attr_type: AttrType, capacity: usize) -> Self {
        Self {
            attr_type,
            buffer: Some(vec![0u8; capacity]),
            value_len: capacity,
        }
    }

    /// The bytes written by the last successful retrieval.
    pub fn value(&self) -> Option<&[u8]> {
        self.buffer
            .as_deref()
            .map(|buf| &buf[..self.value_len.min(buf.len())])
    }

    /// Reset to the absent state.
    pub fn clear(&mut self) {
        self.buffer = None;
        self.value_len = 0;
    }

    /// True if the entry carries neither a buffer nor a length.
    pub fn is_absent(&self) -> bool {
        self.buffer.is_none() && self.value_len == 0
    }
}
