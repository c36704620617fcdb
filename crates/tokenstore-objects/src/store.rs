//! The per-token object store.
//!
//! An ordered, append-only collection of token objects. Records are added by
//! the loading collaborator and never removed or relocated, so identifiers
//! captured by a search stay resolvable for the life of the store.

use tokenstore_core::{Attribute, ObjectId, Result, TemplateEntry, TokenError};
use tracing::debug;

use crate::matcher;
use crate::object::TokenObject;

/// The token objects owned by one token, in insertion order.
#[derive(Debug, Default)]
pub struct ObjectStore {
    objects: Vec<TokenObject>,
}

impl ObjectStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take exclusive ownership of `object`.
    ///
    /// The object must carry a valid identifier not already present in the
    /// store. On failure the object is dropped along with its material.
    pub fn insert(&mut self, object: TokenObject) -> Result<ObjectId> {
        let id = object.id();
        if id.is_invalid() {
            return Err(TokenError::GeneralError(
                "object inserted without an id".into(),
            ));
        }
        if self.contains(id) {
            return Err(TokenError::GeneralError(format!(
                "object id {} already in store",
                id
            )));
        }

        self.objects.try_reserve(1)?;
        self.objects.push(object);
        debug!(%id, count = self.objects.len(), "object added to store");
        Ok(id)
    }

    /// Look up a record by its identifier.
    pub fn find_by_id(&self, id: ObjectId) -> Option<&TokenObject> {
        self.objects.iter().find(|o| o.id() == id)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Records matching `template`, in store order.
    pub fn filter<'a>(
        &'a self,
        template: &'a [Attribute],
    ) -> impl Iterator<Item = &'a TokenObject> + 'a {
        self.objects
            .iter()
            .filter(move |o| matcher::matches(o, template))
    }

    /// Fill a retrieval template from the record with identifier `id`.
    pub fn get_attributes(&self, id: ObjectId, template: &mut [TemplateEntry]) -> Result<()> {
        let object = self
            .find_by_id(id)
            .ok_or(TokenError::ObjectHandleInvalid(id))?;
        matcher::get_attributes(object, template)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TokenObject> {
        self.objects.iter()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl<'a> IntoIterator for &'a ObjectStore {
    type Item = &'a TokenObject;
    type IntoIter = std::slice::Iter<'a, TokenObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}
