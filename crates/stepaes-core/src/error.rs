//! Validation errors surfaced by the cipher entry points.

/// Errors returned by key construction and the high-level encrypt/decrypt
/// helpers. All of them mean "fix the input and call again"; the computation
/// itself is deterministic and never fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested key size is not one of 128, 192 or 256 bits.
    #[error("unsupported key size: {bits} bits (expected 128, 192 or 256)")]
    UnsupportedKeySize {
        /// Requested width in bits.
        bits: usize,
    },

    /// The key material does not match the selected key size.
    #[error("key must be exactly {expected} bytes long, got {actual}")]
    InvalidKeyLength {
        /// Byte length required by the selected key size.
        expected: usize,
        /// Byte length actually supplied.
        actual: usize,
    },

    /// Ciphertext handed to `decrypt` is not a whole number of 16-byte blocks.
    #[error("ciphertext length {len} is not a positive multiple of 16 bytes")]
    InvalidBlockLength {
        /// Offending length.
        len: usize,
    },

    /// Decrypted data does not end in well-formed PKCS#7 padding.
    #[error("invalid PKCS#7 padding")]
    InvalidPadding,
}
