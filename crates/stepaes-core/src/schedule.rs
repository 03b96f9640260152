//! FIPS-197 key schedule for all three key sizes.

use core::convert::TryInto;

use crate::key::{CipherKey, RoundKeys, MAX_ROUND_KEYS};
use crate::sbox::{sbox, RCON};

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    let b0 = sbox((word >> 24) as u8) as u32;
    let b1 = sbox((word >> 16) as u8) as u32;
    let b2 = sbox((word >> 8) as u8) as u32;
    let b3 = sbox(word as u8) as u32;
    (b0 << 24) | (b1 << 16) | (b2 << 8) | b3
}

/// Expands key material into `Nr + 1` round keys.
///
/// Words `0..Nk` are the key itself; each later word is `w[i-Nk] ^ temp`,
/// where `temp` is the previous word run through the schedule core every `Nk`
/// words (rotate, substitute, round-constant XOR) and, for AES-256, an extra
/// substitution-only step at `i % Nk == 4`.
pub fn expand_key(key: &CipherKey) -> RoundKeys {
    let nk = key.size().nk();
    let rounds = key.size().rounds();
    let total_words = 4 * (rounds + 1);

    let mut w = [0u32; 4 * MAX_ROUND_KEYS];
    for (i, chunk) in key.as_bytes().chunks_exact(4).enumerate() {
        let bytes: [u8; 4] = chunk.try_into().expect("chunk length is four");
        w[i] = u32::from_be_bytes(bytes);
    }

    for i in nk..total_words {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[i / nk]) << 24);
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        w[i] = w[i - nk] ^ temp;
    }

    let mut keys = [[0u8; 16]; MAX_ROUND_KEYS];
    for (round, key_bytes) in keys.iter_mut().take(rounds + 1).enumerate() {
        for word_idx in 0..4 {
            let bytes = w[round * 4 + word_idx].to_be_bytes();
            key_bytes[word_idx * 4..word_idx * 4 + 4].copy_from_slice(&bytes);
        }
    }

    RoundKeys::new(keys, rounds + 1)
}
