//! Key sizes, key material and expanded round keys.

use crate::error::Error;
use crate::state::Block;

/// Maximum number of round keys across the supported sizes (AES-256: 15).
pub(crate) const MAX_ROUND_KEYS: usize = 15;

/// Supported AES key sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeySize {
    /// 128-bit key, 10 rounds.
    Aes128,
    /// 192-bit key, 12 rounds.
    Aes192,
    /// 256-bit key, 14 rounds.
    Aes256,
}

impl KeySize {
    /// Resolves a key size from its width in bits.
    pub fn from_bits(bits: usize) -> Result<Self, Error> {
        match bits {
            128 => Ok(Self::Aes128),
            192 => Ok(Self::Aes192),
            256 => Ok(Self::Aes256),
            _ => Err(Error::UnsupportedKeySize { bits }),
        }
    }

    /// Resolves a key size from the raw key length in bytes.
    pub fn from_key_len(len: usize) -> Result<Self, Error> {
        Self::from_bits(len * 8)
    }

    /// Key width in bits.
    pub fn bits(self) -> usize {
        match self {
            Self::Aes128 => 128,
            Self::Aes192 => 192,
            Self::Aes256 => 256,
        }
    }

    /// Key length in bytes.
    pub fn key_len(self) -> usize {
        self.bits() / 8
    }

    /// Number of 32-bit words in the key (`Nk`).
    pub fn nk(self) -> usize {
        self.bits() / 32
    }

    /// Number of rounds (`Nr`).
    pub fn rounds(self) -> usize {
        self.nk() + 6
    }
}

/// Validated AES key material. Immutable once constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CipherKey {
    size: KeySize,
    bytes: [u8; 32],
}

impl CipherKey {
    /// Wraps raw key bytes for the given size.
    ///
    /// Fails unless `bytes.len()` equals the size's key length.
    pub fn new(bytes: &[u8], size: KeySize) -> Result<Self, Error> {
        if bytes.len() != size.key_len() {
            return Err(Error::InvalidKeyLength {
                expected: size.key_len(),
                actual: bytes.len(),
            });
        }
        let mut buf = [0u8; 32];
        buf[..bytes.len()].copy_from_slice(bytes);
        Ok(Self { size, bytes: buf })
    }

    /// Wraps raw key bytes, inferring the size from the length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        Self::new(bytes, KeySize::from_key_len(bytes.len())?)
    }

    /// The selected key size.
    pub fn size(&self) -> KeySize {
        self.size
    }

    /// The raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.size.key_len()]
    }
}

/// Expanded round keys, one 16-byte key per round index `0..=Nr`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys {
    keys: [Block; MAX_ROUND_KEYS],
    count: usize,
}

impl RoundKeys {
    pub(crate) fn new(keys: [Block; MAX_ROUND_KEYS], count: usize) -> Self {
        debug_assert!((11..=MAX_ROUND_KEYS).contains(&count));
        Self { keys, count }
    }

    /// Returns the round key at the requested index (`0..=Nr`).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.keys[..self.count][round]
    }

    /// Number of round keys (`Nr + 1`).
    pub fn count(&self) -> usize {
        self.count
    }

    /// Iterates over the round keys in order.
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.keys[..self.count].iter()
    }
}
