//! Key types for AES-128.

use crate::block::Block;
use crate::error::AesError;

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; 16]);

impl From<[u8; 16]> for Aes128Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = AesError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; 16] = value
            .try_into()
            .map_err(|_| AesError::InvalidKeyLength { len: value.len() })?;
        Ok(Self(bytes))
    }
}

/// Expanded round keys for AES-128: 11 round keys of 16 bytes (44 words).
///
/// Immutable once produced by the key schedule; safe to share read-only
/// across concurrent encrypt/decrypt calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [Block; 11]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }
}
