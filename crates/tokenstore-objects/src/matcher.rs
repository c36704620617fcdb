//! Attribute template matching and retrieval.
//!
//! A search template is the required subset: a record matches when every
//! template attribute has a counterpart in the record with the same type,
//! the same length, and (for non-empty values) the same bytes. The record
//! may carry any number of extra attributes.

use tokenstore_core::{AttrType, Attribute, Result, TemplateEntry, TokenError};
use tracing::trace;

use crate::object::TokenObject;

/// Type + length + value equality, skipping the byte compare for empty values.
fn attribute_equal(stored: &Attribute, probe: &Attribute) -> bool {
    if stored.attr_type() != probe.attr_type() || stored.len() != probe.len() {
        return false;
    }
    stored.is_empty() || stored.value() == probe.value()
}

/// True if every attribute in `template` is present in `object`.
///
/// An empty template matches every record.
pub fn matches(object: &TokenObject, template: &[Attribute]) -> bool {
    if template.is_empty() {
        return true;
    }

    template
        .iter()
        .all(|search| get_attribute_full(object, search).is_some())
}

/// First attribute of the given type, in insertion order.
pub fn get_attribute_by_type(object: &TokenObject, attr_type: AttrType) -> Option<&Attribute> {
    object.attributes().get(attr_type)
}

/// First attribute equal to `probe` in type, length and value.
pub fn get_attribute_full<'a>(object: &'a TokenObject, probe: &Attribute) -> Option<&'a Attribute> {
    object
        .attributes()
        .iter()
        .find(|stored| attribute_equal(stored, probe))
}

/// Fill a caller's retrieval template from `object`.
///
/// Per entry:
/// - type missing from the record: the entry is reset to absent, not an error
/// - no caller buffer: only `value_len` is reported
/// - caller buffer too short: `value_len` is set to the stored length and
///   the call fails with `BufferTooSmall`; entries before it stay written
/// - otherwise the value is copied and `value_len` updated
pub fn get_attributes(object: &TokenObject, template: &mut [TemplateEntry]) -> Result<()> {
    for (index, entry) in template.iter_mut().enumerate() {
        let Some(found) = get_attribute_by_type(object, entry.attr_type) else {
            trace!(id = %object.id(), attr = ?entry.attr_type, "attribute not present");
            entry.clear();
            continue;
        };

        let Some(buffer) = entry.buffer.as_mut() else {
            entry.value_len = found.len();
            continue;
        };

        if found.len() > buffer.len() {
            entry.value_len = found.len();
            return Err(TokenError::BufferTooSmall {
                index,
                required: found.len(),
            });
        }

        buffer[..found.len()].copy_from_slice(found.value());
        entry.value_len = found.len();
    }

    Ok(())
}
