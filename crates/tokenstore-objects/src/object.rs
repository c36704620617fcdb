//! The token object record.

use std::fmt;

use tokenstore_core::{
    Attribute, AttributeList, KeyHandle, Mechanism, MechanismList, ObjectId, Result, TokenError,
};
use tracing::{trace, warn};
use zeroize::Zeroizing;

/// A token-resident object: key, certificate, or auth-material container.
///
/// Created empty with [`TokenObject::new`], populated by the loading
/// collaborator, then handed to an [`ObjectStore`](crate::ObjectStore).
/// Dropping the record releases every buffer it owns; the unsealed auth
/// secret is wiped on release.
#[derive(Default)]
pub struct TokenObject {
    id: ObjectId,
    handle: KeyHandle,
    attributes: AttributeList,
    mechanisms: MechanismList,
    public: Option<Vec<u8>>,
    private: Option<Vec<u8>>,
    wrapped_auth: Option<Vec<u8>>,
    unsealed_auth: Option<Zeroizing<Vec<u8>>>,
}

impl TokenObject {
    /// A zero-initialized record with no owned buffers.
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Population
    // ─────────────────────────────────────────────────────────────────────────

    /// Deep-copy `attrs` onto the attribute collection.
    ///
    /// Every supplied attribute is appended, zero-length values included. On
    /// allocation failure the existing attributes are left untouched.
    pub fn append_attributes(&mut self, attrs: &[Attribute]) -> Result<()> {
        if attrs.is_empty() {
            return Ok(());
        }

        self.attributes.try_extend_from_slice(attrs).map_err(|e| {
            warn!(id = %self.id, count = attrs.len(), "attribute append failed");
            e
        })
    }

    /// Deep-copy `mechs` onto the mechanism collection.
    pub fn append_mechanisms(&mut self, mechs: &[Mechanism]) -> Result<()> {
        if mechs.is_empty() {
            return Ok(());
        }

        self.mechanisms.try_extend_from_slice(mechs).map_err(|e| {
            warn!(id = %self.id, count = mechs.len(), "mechanism append failed");
            e
        })
    }

    /// Take ownership of the public and private key blobs.
    pub fn set_blob_data(&mut self, public: Vec<u8>, private: Vec<u8>) {
        self.public = Some(public);
        self.private = Some(private);
    }

    /// Take ownership of the unsealed auth secret and the wrapped auth blob.
    pub fn set_auth(&mut self, unsealed_auth: Zeroizing<Vec<u8>>, wrapped_auth: Vec<u8>) {
        self.unsealed_auth = Some(unsealed_auth);
        self.wrapped_auth = Some(wrapped_auth);
    }

    /// Assign the object identifier.
    ///
    /// The identifier is immutable once set: re-assigning the same value is
    /// accepted, a different one is refused. The invalid handle is never
    /// assignable.
    pub fn set_id(&mut self, id: ObjectId) -> Result<()> {
        if id.is_invalid() {
            return Err(TokenError::GeneralError("object id 0 is reserved".into()));
        }
        if !self.id.is_invalid() && self.id != id {
            return Err(TokenError::GeneralError(format!(
                "object id already set to {}",
                self.id
            )));
        }
        self.id = id;
        Ok(())
    }

    pub fn set_handle(&mut self, handle: KeyHandle) {
        self.handle = handle;
    }

    /// Release the record and everything it owns.
    pub fn free(self) {
        trace!(
            id = %self.id,
            attributes = self.attributes.len(),
            mechanisms = self.mechanisms.len(),
            "freeing token object"
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn handle(&self) -> KeyHandle {
        self.handle
    }

    pub fn attributes(&self) -> &AttributeList {
        &self.attributes
    }

    pub fn mechanisms(&self) -> &MechanismList {
        &self.mechanisms
    }

    pub fn public_blob(&self) -> Option<&[u8]> {
        self.public.as_deref()
    }

    pub fn private_blob(&self) -> Option<&[u8]> {
        self.private.as_deref()
    }

    pub fn wrapped_auth(&self) -> Option<&[u8]> {
        self.wrapped_auth.as_deref()
    }

    pub fn unsealed_auth(&self) -> Option<&[u8]> {
        self.unsealed_auth.as_ref().map(|s| s.as_slice())
    }
}

impl fmt::Debug for TokenObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenObject")
            .field("id", &self.id)
            .field("handle", &self.handle)
            .field("attributes", &self.attributes)
            .field("mechanisms", &self.mechanisms)
            .field("public", &self.public.as_ref().map(Vec::len))
            .field("private", &self.private.as_ref().map(Vec::len))
            .field("wrapped_auth", &self.wrapped_auth.as_ref().map(Vec::len))
            .field("unsealed_auth", &self.unsealed_auth.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
