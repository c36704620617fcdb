//! Does an object support a requested mechanism with these parameters?
//!
//! The object's mechanism list is scanned for entries with the requested
//! tag. Each candidate is compared with the rule for that tag; the first
//! compatible entry wins.

use tokenstore_core::{MechType, Mechanism, Result, TokenError};
use tokenstore_objects::TokenObject;
use tracing::debug;

use crate::params::{OaepParams, AES_BLOCK_SIZE};

/// How the parameters of a mechanism are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamRule {
    /// The mechanism takes no parameters; any request is compatible.
    NoParams,
    /// Hash algorithm and MGF must agree; the label and source are free.
    Oaep,
    /// The requested IV must be exactly one cipher block.
    BlockIv(usize),
    /// Parameter bytes must be identical.
    Exact,
}

impl ParamRule {
    /// The comparison rule for a mechanism tag.
    pub fn for_mechanism(mechanism: MechType) -> Self {
        match mechanism {
            MechType::RSA_X_509 => ParamRule::NoParams,
            MechType::RSA_PKCS_OAEP => ParamRule::Oaep,
            MechType::AES_CBC => ParamRule::BlockIv(AES_BLOCK_SIZE),
            _ => ParamRule::Exact,
        }
    }

    /// Compare a request against one stored entry of the same tag.
    pub fn compatible(&self, requested: &Mechanism, stored: &Mechanism) -> bool {
        match self {
            ParamRule::NoParams => true,
            ParamRule::Oaep => {
                let (Some(req), Some(got)) = (
                    OaepParams::from_bytes(requested.parameter_bytes()),
                    OaepParams::from_bytes(stored.parameter_bytes()),
                ) else {
                    return false;
                };
                req.hash_alg == got.hash_alg && req.mgf == got.mgf
            }
            ParamRule::BlockIv(block) => requested.parameter_len() == *block,
            ParamRule::Exact => requested.parameter_bytes() == stored.parameter_bytes(),
        }
    }
}

/// Check whether `object` supports `requested`.
///
/// - no entry with the tag: `MechanismInvalid`
/// - entries with the tag, none compatible: `MechanismParamInvalid`
pub fn is_supported(object: &TokenObject, requested: &Mechanism) -> Result<()> {
    let tag = requested.mechanism();
    let rule = ParamRule::for_mechanism(tag);

    let mut saw_tag = false;
    for stored in object.mechanisms().with_tag(tag) {
        saw_tag = true;
        if rule.compatible(requested, stored) {
            return Ok(());
        }
    }

    if saw_tag {
        debug!(id = %object.id(), mechanism = ?tag, ?rule, "mechanism parameters rejected");
        Err(TokenError::MechanismParamInvalid(tag))
    } else {
        debug!(id = %object.id(), mechanism = ?tag, "mechanism not supported");
        Err(TokenError::MechanismInvalid(tag))
    }
}
