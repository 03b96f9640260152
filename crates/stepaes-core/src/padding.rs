//! PKCS#7 padding over the 16-byte block size.

use crate::error::Error;
use crate::state::BLOCK_SIZE;

/// Pads `data` to a whole number of blocks.
///
/// Strict PKCS#7: block-aligned input, including empty input, gains a full
/// block of padding so the pad length is always recoverable from the last
/// byte.
pub fn pad(data: &[u8]) -> Vec<u8> {
    let padding = BLOCK_SIZE - data.len() % BLOCK_SIZE;
    let mut padded = Vec::with_capacity(data.len() + padding);
    padded.extend_from_slice(data);
    padded.extend(core::iter::repeat(padding as u8).take(padding));
    padded
}

/// Strips PKCS#7 padding, returning the payload prefix of `data`.
pub fn unpad(data: &[u8]) -> Result<&[u8], Error> {
    let last = *data.last().ok_or(Error::InvalidPadding)?;
    let padding = last as usize;
    if padding == 0 || padding > BLOCK_SIZE || padding > data.len() {
        return Err(Error::InvalidPadding);
    }
    let (payload, tail) = data.split_at(data.len() - padding);
    if tail.iter().any(|&b| b != last) {
        return Err(Error::InvalidPadding);
    }
    Ok(payload)
}
