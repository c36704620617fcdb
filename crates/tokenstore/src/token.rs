//! The Token: one object store plus its operation slot.
//!
//! All calls on a token are expected to be serialized by the owning session
//! layer. Nothing here locks; separate tokens share no state and can be used
//! from separate threads.

use tokenstore_core::{Attribute, Mechanism, ObjectId, Result, TemplateEntry, TokenError};
use tokenstore_objects::{ObjectStore, TokenObject};
use tracing::{debug, trace, warn};

use crate::config::TokenConfig;
use crate::find::FindSnapshot;
use crate::operation::{OperationKind, OperationState};

/// A token: the object store it owns and the operation currently bound to it.
#[derive(Debug)]
pub struct Token {
    config: TokenConfig,
    store: ObjectStore,
    operation: OperationState,
}

impl Token {
    /// Create an empty token.
    pub fn new(config: TokenConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            store: ObjectStore::new(),
            operation: OperationState::Idle,
        })
    }

    pub fn config(&self) -> &TokenConfig {
        &self.config
    }

    pub fn store(&self) -> &ObjectStore {
        &self.store
    }

    pub fn operation(&self) -> &OperationState {
        &self.operation
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Object Loading
    // ─────────────────────────────────────────────────────────────────────────

    /// Move a fully populated object into the store.
    pub fn add_object(&mut self, object: TokenObject) -> Result<ObjectId> {
        if self.config.reject_duplicate_attributes && object.attributes().has_duplicate_types() {
            warn!(
                token = %self.config.label,
                id = %object.id(),
                "object rejected: duplicate attribute types"
            );
            return Err(TokenError::GeneralError(format!(
                "object {} has duplicate attribute types",
                object.id()
            )));
        }
        self.store.insert(object)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Find Protocol
    // ─────────────────────────────────────────────────────────────────────────

    /// Start a search for objects matching `template`.
    ///
    /// Fails with `OperationActive` if any operation is bound to the token.
    /// The match set is captured now; `find` pages through that snapshot.
    pub fn find_init(&mut self, template: &[Attribute]) -> Result<()> {
        if self.operation.is_active() {
            debug!(token = %self.config.label, active = ?self.operation.kind(), "find_init refused");
            return Err(TokenError::OperationActive);
        }

        let snapshot = FindSnapshot::build(&self.store, template)?;
        debug!(
            token = %self.config.label,
            template = template.len(),
            matches = snapshot.len(),
            "find initialized"
        );
        self.operation.begin(OperationState::Find(snapshot))
    }

    /// Page out up to `max_count` object identifiers.
    ///
    /// An exhausted search returns an empty page, not an error.
    pub fn find(&mut self, max_count: usize) -> Result<Vec<ObjectId>> {
        let page_size = self.config.page_size(max_count);
        let snapshot = self.operation.find_mut()?;
        let page = snapshot.next_page(page_size);
        trace!(returned = page.len(), remaining = snapshot.remaining(), "find page");
        Ok(page)
    }

    /// Page into a caller buffer; returns the number of slots written.
    pub fn find_into(&mut self, handles: &mut [ObjectId]) -> Result<usize> {
        let page_size = self.config.page_size(handles.len());
        let snapshot = self.operation.find_mut()?;
        Ok(snapshot.fill(&mut handles[..page_size]))
    }

    /// Close the search and return the token to idle.
    pub fn find_final(&mut self) -> Result<()> {
        self.operation.end(OperationKind::Find)?;
        debug!(token = %self.config.label, "find finalized");
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Object Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Fill a retrieval template from the object with identifier `id`.
    pub fn get_attribute_value(&self, id: ObjectId, template: &mut [TemplateEntry]) -> Result<()> {
        self.store.get_attributes(id, template)
    }

    /// Check that the object `id` supports `mechanism` with its parameters.
    pub fn is_mech_supported(&self, id: ObjectId, mechanism: &Mechanism) -> Result<()> {
        let object = self
            .store
            .find_by_id(id)
            .ok_or(TokenError::ObjectHandleInvalid(id))?;
        tokenstore_mech::is_supported(object, mechanism)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Other Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Bind a non-search operation to the token.
    pub fn begin_operation(&mut self, kind: OperationKind) -> Result<()> {
        if kind == OperationKind::Find {
            return Err(TokenError::GeneralError(
                "searches are started with find_init".into(),
            ));
        }
        self.operation.begin(OperationState::Other(kind))
    }

    /// Release a non-search operation.
    pub fn end_operation(&mut self, kind: OperationKind) -> Result<()> {
        self.operation.end(kind)
    }

    pub fn is_operation_active(&self) -> bool {
        self.operation.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokenstore_core::AttrType;

    fn token_with(labels: &[&[u8]]) -> Token {
        let mut token = Token::new(TokenConfig::default()).unwrap();
        for (i, label) in labels.iter().enumerate() {
            let mut obj = TokenObject::new();
            obj.set_id(ObjectId(i as u64 + 1)).unwrap();
            obj.append_attributes(&[Attribute::new(AttrType::LABEL, label.to_vec())])
                .unwrap();
            token.add_object(obj).unwrap();
        }
        token
    }

    #[test]
    fn test_init_final_init() {
        let mut token = token_with(&[b"a"]);
        token.find_init(&[]).unwrap();
        token.find_final().unwrap();
        assert!(!token.is_operation_active());
        token.find_init(&[]).unwrap();
    }

    #[test]
    fn test_second_init_keeps_original_snapshot() {
        let mut token = token_with(&[b"a", b"b"]);
        token
            .find_init(&[Attribute::new(AttrType::LABEL, b"b".to_vec())])
            .unwrap();

        assert_eq!(token.find_init(&[]), Err(TokenError::OperationActive));
        assert_eq!(token.find(10).unwrap(), vec![ObjectId(2)]);
    }

    #[test]
    fn test_find_without_init() {
        let mut token = token_with(&[]);
        assert_eq!(token.find(1), Err(TokenError::OperationNotInitialized));
        assert_eq!(token.find_final(), Err(TokenError::OperationNotInitialized));
    }

    #[test]
    fn test_other_operation_blocks_find() {
        let mut token = token_with(&[b"a"]);
        token.begin_operation(OperationKind::Sign).unwrap();
        assert_eq!(token.find_init(&[]), Err(TokenError::OperationActive));
        assert_eq!(token.find(1), Err(TokenError::OperationActive));
        assert_eq!(token.find_final(), Err(TokenError::OperationActive));

        token.end_operation(OperationKind::Sign).unwrap();
        token.find_init(&[]).unwrap();
        assert_eq!(
            token.begin_operation(OperationKind::Verify),
            Err(TokenError::OperationActive)
        );
        assert!(token.begin_operation(OperationKind::Find).is_err());
    }

    #[test]
    fn test_snapshot_ignores_later_inserts() {
        let mut token = token_with(&[b"a"]);
        token.find_init(&[]).unwrap();

        let mut late = TokenObject::new();
        late.set_id(ObjectId(99)).unwrap();
        token.add_object(late).unwrap();

        assert_eq!(token.find(10).unwrap(), vec![ObjectId(1)]);
        assert_eq!(token.find(10).unwrap(), vec![]);
    }

    #[test]
    fn test_page_cap() {
        let config = TokenConfig {
            max_find_page: Some(2),
            ..TokenConfig::default()
        };
        let mut token = Token::new(config).unwrap();
        for id in 1..=5 {
            let mut obj = TokenObject::new();
            obj.set_id(ObjectId(id)).unwrap();
            token.add_object(obj).unwrap();
        }

        token.find_init(&[]).unwrap();
        assert_eq!(token.find(100).unwrap().len(), 2);

        let mut out = [ObjectId::INVALID; 8];
        assert_eq!(token.find_into(&mut out).unwrap(), 2);
        assert_eq!(&out[..2], &[ObjectId(3), ObjectId(4)]);
    }

    #[test]
    fn test_duplicate_attribute_policy() {
        let mut dup = TokenObject::new();
        dup.set_id(ObjectId(1)).unwrap();
        dup.append_attributes(&[
            Attribute::new(AttrType::LABEL, b"a".to_vec()),
            Attribute::new(AttrType::LABEL, b"b".to_vec()),
        ])
        .unwrap();

        let strict = TokenConfig {
            reject_duplicate_attributes: true,
            ..TokenConfig::default()
        };
        let mut token = Token::new(strict).unwrap();
        assert!(matches!(
            token.add_object(dup),
            Err(TokenError::GeneralError(_))
        ));
        assert!(token.store().is_empty());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = TokenConfig {
            max_find_page: Some(0),
            ..TokenConfig::default()
        };
        assert!(matches!(Token::new(config), Err(TokenError::GeneralError(_))));
    }
}
