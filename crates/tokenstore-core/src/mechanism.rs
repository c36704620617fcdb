//! Mechanism descriptors: a mechanism tag plus optional opaque parameters.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::MechType;

/// A mechanism and its parameter buffer.
///
/// `parameter == None` is the null parameter pointer of the wire shape and
/// reports a parameter length of zero.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mechanism {
    mechanism: MechType,
    parameter: Option<Vec<u8>>,
}

impl Mechanism {
    /// A mechanism without parameters.
    pub fn new(mechanism: MechType) -> Self {
        Self {
            mechanism,
            parameter: None,
        }
    }

    /// A mechanism with a parameter buffer.
    pub fn with_parameter(mechanism: MechType, parameter: impl Into<Vec<u8>>) -> Self {
        Self {
            mechanism,
            parameter: Some(parameter.into()),
        }
    }

    pub fn mechanism(&self) -> MechType {
        self.mechanism
    }

    pub fn parameter(&self) -> Option<&[u8]> {
        self.parameter.as_deref()
    }

    /// Parameter bytes, empty when no parameter is set.
    pub fn parameter_bytes(&self) -> &[u8] {
        self.parameter.as_deref().unwrap_or_default()
    }

    pub fn parameter_len(&self) -> usize {
        self.parameter.as_ref().map_or(0, Vec::len)
    }

    /// Deep copy that reports allocation failure instead of aborting.
    pub fn try_clone(&self) -> Result<Self> {
        let parameter = match &self.parameter {
            Some(p) => {
                let mut copy = Vec::new();
                copy.try_reserve_exact(p.len())?;
                copy.extend_from_slice(p);
                Some(copy)
            }
            None => None,
        };
        Ok(Self {
            mechanism: self.mechanism,
            parameter,
        })
    }
}

impl fmt::Debug for Mechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mechanism")
            .field("mechanism", &self.mechanism)
            .field("parameter", &self.parameter.as_ref().map(hex::encode))
            .finish()
    }
}

/// The mechanism capability list of an object record. Append-only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MechanismList(Vec<Mechanism>);

impl MechanismList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deep-copy `mechs` onto the end of the list, all or nothing.
    pub fn try_extend_from_slice(&mut self, mechs: &[Mechanism]) -> Result<()> {
        let mut staged = Vec::new();
        staged.try_reserve_exact(mechs.len())?;
        for mech in mechs {
            staged.push(mech.try_clone()?);
        }

        self.0.try_reserve(staged.len())?;
        self.0.append(&mut staged);
        Ok(())
    }

    /// All entries carrying the given tag, in insertion order.
    pub fn with_tag(&self, mechanism: MechType) -> impl Iterator<Item = &Mechanism> {
        self.0.iter().filter(move |m| m.mechanism == mechanism)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Mechanism> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Mechanism] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Mechanism>> for MechanismList {
    fn from(mechs: Vec<Mechanism>) -> Self {
        Self(mechs)
    }
}

impl<'a> IntoIterator for &'a MechanismList {
    type Item = &'a Mechanism;
    type IntoIter = std::slice::Iter<'a, Mechanism>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_len() {
        assert_eq!(Mechanism::new(MechType::RSA_X_509).parameter_len(), 0);
        let cbc = Mechanism::with_parameter(MechType::AES_CBC, vec![0u8; 16]);
        assert_eq!(cbc.parameter_len(), 16);
        assert_eq!(cbc.parameter_bytes().len(), 16);
    }

    #[test]
    fn test_with_tag_preserves_order() {
        let mut list = MechanismList::new();
        list.try_extend_from_slice(&[
            Mechanism::with_parameter(MechType::AES_CBC, vec![1]),
            Mechanism::new(MechType::RSA_X_509),
            Mechanism::with_parameter(MechType::AES_CBC, vec![2]),
        ])
        .unwrap();

        let params: Vec<_> = list
            .with_tag(MechType::AES_CBC)
            .map(|m| m.parameter_bytes().to_vec())
            .collect();
        assert_eq!(params, vec![vec![1], vec![2]]);
        assert_eq!(list.with_tag(MechType::ECDSA).count(), 0);
    }

    #[test]
    fn test_try_clone_is_deep() {
        let original = Mechanism::with_parameter(MechType::RSA_PKCS_PSS, vec![9, 9]);
        let copy = original.try_clone().unwrap();
        assert_eq!(original, copy);
        assert_ne!(
            original.parameter().unwrap().as_ptr(),
            copy.parameter().unwrap().as_ptr()
        );
    }
}
