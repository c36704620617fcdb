//! Strong type definitions for the token object store.
//!
//! All identifiers and tags are newtypes to prevent misuse at compile time.
//! Tag values follow the standardized cryptographic-token API numbering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The identifier of a token object, as handed out to callers.
///
/// Find results and attribute queries both speak in `ObjectId`s. The value
/// zero is reserved as the invalid handle.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct ObjectId(pub u64);

impl ObjectId {
    /// The invalid object handle.
    pub const INVALID: Self = Self(0);

    /// Create a new id from its raw value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw value.
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// True if this is the reserved invalid handle.
    pub const fn is_invalid(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", self.0)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ObjectId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// The handle a key is loaded under on the security module.
///
/// Opaque to this crate; it is carried on the record for the collaborator
/// that performs the actual cryptography.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct KeyHandle(pub u32);

impl fmt::Debug for KeyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyHandle({:#010x})", self.0)
    }
}

/// An attribute type tag.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AttrType(pub u64);

impl AttrType {
    pub const CLASS: Self = Self(0x0000);
    pub const TOKEN: Self = Self(0x0001);
    pub const PRIVATE: Self = Self(0x0002);
    pub const LABEL: Self = Self(0x0003);
    pub const APPLICATION: Self = Self(0x0010);
    pub const VALUE: Self = Self(0x0011);
    pub const OBJECT_ID: Self = Self(0x0012);
    pub const CERTIFICATE_TYPE: Self = Self(0x0080);
    pub const KEY_TYPE: Self = Self(0x0100);
    pub const SUBJECT: Self = Self(0x0101);
    pub const ID: Self = Self(0x0102);
    pub const SENSITIVE: Self = Self(0x0103);
    pub const ENCRYPT: Self = Self(0x0104);
    pub const DECRYPT: Self = Self(0x0105);
    pub const WRAP: Self = Self(0x0106);
    pub const UNWRAP: Self = Self(0x0107);
    pub const SIGN: Self = Self(0x0108);
    pub const VERIFY: Self = Self(0x010A);
    pub const MODULUS: Self = Self(0x0120);
    pub const MODULUS_BITS: Self = Self(0x0121);
    pub const PUBLIC_EXPONENT: Self = Self(0x0122);
    pub const VALUE_LEN: Self = Self(0x0161);
    pub const EXTRACTABLE: Self = Self(0x0162);
    pub const LOCAL: Self = Self(0x0163);
    pub const EC_PARAMS: Self = Self(0x0180);
    pub const EC_POINT: Self = Self(0x0181);
    pub const ALLOWED_MECHANISMS: Self = Self(0x4000_0600);

    /// Symbolic name for well-known tags.
    pub fn name(&self) -> Option<&'static str> {
        let name = match *self {
            Self::CLASS => "CKA_CLASS",
            Self::TOKEN => "CKA_TOKEN",
            Self::PRIVATE => "CKA_PRIVATE",
            Self::LABEL => "CKA_LABEL",
            Self::APPLICATION => "CKA_APPLICATION",
            Self::VALUE => "CKA_VALUE",
            Self::OBJECT_ID => "CKA_OBJECT_ID",
            Self::CERTIFICATE_TYPE => "CKA_CERTIFICATE_TYPE",
            Self::KEY_TYPE => "CKA_KEY_TYPE",
            Self::SUBJECT => "CKA_SUBJECT",
            Self::ID => "CKA_ID",
            Self::SENSITIVE => "CKA_SENSITIVE",
            Self::ENCRYPT => "CKA_ENCRYPT",
            Self::DECRYPT => "CKA_DECRYPT",
            Self::WRAP => "CKA_WRAP",
            Self::UNWRAP => "CKA_UNWRAP",
            Self::SIGN => "CKA_SIGN",
            Self::VERIFY => "CKA_VERIFY",
            Self::MODULUS => "CKA_MODULUS",
            Self::MODULUS_BITS => "CKA_MODULUS_BITS",
            Self::PUBLIC_EXPONENT => "CKA_PUBLIC_EXPONENT",
            Self::VALUE_LEN => "CKA_VALUE_LEN",
            Self::EXTRACTABLE => "CKA_EXTRACTABLE",
            Self::LOCAL => "CKA_LOCAL",
            Self::EC_PARAMS => "CKA_EC_PARAMS",
            Self::EC_POINT => "CKA_EC_POINT",
            Self::ALLOWED_MECHANISMS => "CKA_ALLOWED_MECHANISMS",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Debug for AttrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "AttrType({:#x})", self.0),
        }
    }
}

impl From<u64> for AttrType {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// A mechanism type tag.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MechType(pub u64);

impl MechType {
    pub const RSA_PKCS_KEY_PAIR_GEN: Self = Self(0x0000);
    pub const RSA_PKCS: Self = Self(0x0001);
    pub const RSA_X_509: Self = Self(0x0003);
    pub const SHA1_RSA_PKCS: Self = Self(0x0006);
    pub const RSA_PKCS_OAEP: Self = Self(0x0009);
    pub const RSA_PKCS_PSS: Self = Self(0x000D);
    pub const SHA256_RSA_PKCS: Self = Self(0x0040);
    pub const SHA_1: Self = Self(0x0220);
    pub const SHA256: Self = Self(0x0250);
    pub const SHA384: Self = Self(0x0260);
    pub const SHA512: Self = Self(0x0270);
    pub const EC_KEY_PAIR_GEN: Self = Self(0x1040);
    pub const ECDSA: Self = Self(0x1041);
    pub const AES_KEY_GEN: Self = Self(0x1080);
    pub const AES_ECB: Self = Self(0x1081);
    pub const AES_CBC: Self = Self(0x1082);
    pub const AES_CBC_PAD: Self = Self(0x1085);

    /// Symbolic name for well-known tags.
    pub fn name(&self) -> Option<&'static str> {
        let name = match *self {
            Self::RSA_PKCS_KEY_PAIR_GEN => "CKM_RSA_PKCS_KEY_PAIR_GEN",
            Self::RSA_PKCS => "CKM_RSA_PKCS",
            Self::RSA_X_509 => "CKM_RSA_X_509",
            Self::SHA1_RSA_PKCS => "CKM_SHA1_RSA_PKCS",
            Self::RSA_PKCS_OAEP => "CKM_RSA_PKCS_OAEP",
            Self::RSA_PKCS_PSS => "CKM_RSA_PKCS_PSS",
            Self::SHA256_RSA_PKCS => "CKM_SHA256_RSA_PKCS",
            Self::SHA_1 => "CKM_SHA_1",
            Self::SHA256 => "CKM_SHA256",
            Self::SHA384 => "CKM_SHA384",
            Self::SHA512 => "CKM_SHA512",
            Self::EC_KEY_PAIR_GEN => "CKM_EC_KEY_PAIR_GEN",
            Self::ECDSA => "CKM_ECDSA",
            Self::AES_KEY_GEN => "CKM_AES_KEY_GEN",
            Self::AES_ECB => "CKM_AES_ECB",
            Self::AES_CBC => "CKM_AES_CBC",
            Self::AES_CBC_PAD => "CKM_AES_CBC_PAD",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Debug for MechType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "MechType({:#x})", self.0),
        }
    }
}

impl From<u64> for MechType {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_id_invalid() {
        assert!(ObjectId::INVALID.is_invalid());
        assert!(!ObjectId::new(7).is_invalid());
        assert_eq!(ObjectId::from(7), ObjectId::new(7));
    }

    #[test]
    fn test_attr_type_debug() {
        assert_eq!(format!("{:?}", AttrType::LABEL), "CKA_LABEL");
        assert_eq!(format!("{:?}", AttrType(0x8000_0001)), "AttrType(0x80000001)");
    }

    #[test]
    fn test_mech_type_debug() {
        assert_eq!(format!("{:?}", MechType::AES_CBC), "CKM_AES_CBC");
        assert_eq!(format!("{:?}", MechType(0xdead)), "MechType(0xdead)");
    }

    #[test]
    fn test_key_handle_debug() {
        assert_eq!(format!("{:?}", KeyHandle(0x8100_0001)), "KeyHandle(0x81000001)");
    }
}
