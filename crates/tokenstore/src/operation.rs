//! The per-token operation slot.
//!
//! A token runs at most one operation at a time. The slot is a tagged
//! variant: idle, an open search, or some other operation bound by the
//! session layer (signing, decryption, ...). The single-operation guard is
//! checked once, against "not idle", for every kind.

use std::fmt;

use tokenstore_core::{Result, TokenError};

use crate::find::FindSnapshot;

/// Kinds of operation other than search that may occupy the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Find,
    Sign,
    Verify,
    Encrypt,
    Decrypt,
    Digest,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationKind::Find => "find",
            OperationKind::Sign => "sign",
            OperationKind::Verify => "verify",
            OperationKind::Encrypt => "encrypt",
            OperationKind::Decrypt => "decrypt",
            OperationKind::Digest => "digest",
        };
        f.write_str(name)
    }
}

/// What the token is currently doing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OperationState {
    #[default]
    Idle,
    Find(FindSnapshot),
    Other(OperationKind),
}

impl OperationState {
    pub fn is_active(&self) -> bool {
        !matches!(self, OperationState::Idle)
    }

    pub fn kind(&self) -> Option<OperationKind> {
        match self {
            OperationState::Idle => None,
            OperationState::Find(_) => Some(OperationKind::Find),
            OperationState::Other(kind) => Some(*kind),
        }
    }

    /// Bind `next` to the slot if it is idle.
    pub fn begin(&mut self, next: OperationState) -> Result<()> {
        if self.is_active() {
            return Err(TokenError::OperationActive);
        }
        *self = next;
        Ok(())
    }

    /// The open search, if the slot holds one.
    ///
    /// Idle is `OperationNotInitialized`; a different kind is
    /// `OperationActive`.
    pub fn find_mut(&mut self) -> Result<&mut FindSnapshot> {
        match self {
            OperationState::Find(snapshot) => Ok(snapshot),
            OperationState::Idle => Err(TokenError::OperationNotInitialized),
            OperationState::Other(_) => Err(TokenError::OperationActive),
        }
    }

    /// Return to idle if the slot holds an operation of `kind`.
    pub fn end(&mut self, kind: OperationKind) -> Result<()> {
        match self.kind() {
            Some(active) if active == kind => {
                *self = OperationState::Idle;
                Ok(())
            }
            Some(_) => Err(TokenError::OperationActive),
            None => Err(TokenError::OperationNotInitialized),
        }
    }
}
