//! Typed views over mechanism parameter buffers.
//!
//! Parameters travel as opaque bytes. The checker only needs to look inside
//! the OAEP parameter block; everything else is compared byte-wise.

use serde::{Deserialize, Serialize};
use tokenstore_core::{MechType, Mechanism};

/// IV length for CBC with a 128-bit block cipher.
pub const AES_BLOCK_SIZE: usize = 16;

/// Mask generation function identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mgf(pub u64);

impl Mgf {
    pub const MGF1_SHA1: Self = Self(0x1);
    pub const MGF1_SHA256: Self = Self(0x2);
    pub const MGF1_SHA384: Self = Self(0x3);
    pub const MGF1_SHA512: Self = Self(0x4);
    pub const MGF1_SHA224: Self = Self(0x5);
}

/// OAEP encoding parameter source: the label is given in `source_data`.
pub const OAEP_SOURCE_DATA_SPECIFIED: u64 = 0x1;

/// Parameters of an OAEP mechanism.
///
/// Byte layout: `hash_alg`, `mgf`, `source` as little-endian u64, followed by
/// the source data (the label), which runs to the end of the buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OaepParams {
    pub hash_alg: MechType,
    pub mgf: Mgf,
    pub source: u64,
    pub source_data: Vec<u8>,
}

impl OaepParams {
    const HEADER_LEN: usize = 24;

    /// Parameters with no label.
    pub fn new(hash_alg: MechType, mgf: Mgf) -> Self {
        Self {
            hash_alg,
            mgf,
            source: OAEP_SOURCE_DATA_SPECIFIED,
            source_data: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<Vec<u8>>) -> Self {
        self.source_data = label.into();
        self
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Self::HEADER_LEN + self.source_data.len());
        buf.extend_from_slice(&self.hash_alg.0.to_le_bytes());
        buf.extend_from_slice(&self.mgf.0.to_le_bytes());
        buf.extend_from_slice(&self.source.to_le_bytes());
        buf.extend_from_slice(&self.source_data);
        buf
    }

    /// Parse a parameter buffer. `None` if it is shorter than the header.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::HEADER_LEN {
            return None;
        }
        let word = |i: usize| -> Option<u64> {
            let chunk: [u8; 8] = bytes.get(i * 8..(i + 1) * 8)?.try_into().ok()?;
            Some(u64::from_le_bytes(chunk))
        };

        Some(Self {
            hash_alg: MechType(word(0)?),
            mgf: Mgf(word(1)?),
            source: word(2)?,
            source_data: bytes[Self::HEADER_LEN..].to_vec(),
        })
    }

    /// The OAEP mechanism descriptor carrying these parameters.
    pub fn into_mechanism(self) -> Mechanism {
        Mechanism::with_parameter(MechType::RSA_PKCS_OAEP, self.to_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oaep_layout() {
        let params = OaepParams::new(MechType::SHA256, Mgf::MGF1_SHA256).with_label(b"lbl".to_vec());
        let bytes = params.to_bytes();
        assert_eq!(bytes.len(), 27);
        assert_eq!(&bytes[..8], &0x250u64.to_le_bytes());
        assert_eq!(&bytes[8..16], &2u64.to_le_bytes());
        assert_eq!(&bytes[24..], b"lbl");

        assert_eq!(OaepParams::from_bytes(&bytes), Some(params));
    }

    #[test]
    fn test_oaep_short_buffer() {
        assert_eq!(OaepParams::from_bytes(&[]), None);
        assert_eq!(OaepParams::from_bytes(&[0u8; 23]), None);
        assert!(OaepParams::from_bytes(&[0u8; 24]).is_some());
    }

    #[test]
    fn test_into_mechanism() {
        let mech = OaepParams::new(MechType::SHA_1, Mgf::MGF1_SHA1).into_mechanism();
        assert_eq!(mech.mechanism(), MechType::RSA_PKCS_OAEP);
        assert_eq!(mech.parameter_len(), 24);
    }
}
