//! Block encryption/decryption drivers and the per-step observation hook.

use core::convert::TryInto;
use core::fmt;

use crate::error::Error;
use crate::key::{CipherKey, RoundKeys};
use crate::padding::{pad, unpad};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::schedule::expand_key;
use crate::state::{Block, State, BLOCK_SIZE};

/// One of the four per-round transformations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundStep {
    /// Round-key XOR.
    AddRoundKey,
    /// S-box substitution.
    SubBytes,
    /// Row rotation.
    ShiftRows,
    /// Column mixing.
    MixColumns,
}

impl RoundStep {
    /// Display name used by trace output.
    pub fn name(self) -> &'static str {
        match self {
            Self::AddRoundKey => "AddRoundKey",
            Self::SubBytes => "SubBytes",
            Self::ShiftRows => "ShiftRows",
            Self::MixColumns => "MixColumns",
        }
    }
}

impl fmt::Display for RoundStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Receives every intermediate state during block encryption.
///
/// The driver reports the state after each individual transformation, keyed
/// by round index and step. Observation never changes the ciphertext.
pub trait StepObserver {
    /// Called after one transformation with the round index and the new state.
    fn record(&mut self, round: usize, step: RoundStep, state: &Block);
}

/// The no-op observer used by the plain encryption path.
impl StepObserver for () {
    fn record(&mut self, _round: usize, _step: RoundStep, _state: &Block) {}
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    encrypt_block_observed(block, round_keys, &mut ())
}

/// Encrypts a block, reporting each intermediate state to `observer`.
///
/// Round 0 is the initial round-key XOR alone; rounds `1..Nr` apply SubBytes,
/// ShiftRows, MixColumns and AddRoundKey; the final round omits MixColumns.
pub fn encrypt_block_observed(
    block: &Block,
    round_keys: &RoundKeys,
    observer: &mut impl StepObserver,
) -> Block {
    let rounds = round_keys.count() - 1;
    let mut state = State::from(*block);

    add_round_key(&mut state, round_keys.get(0));
    observer.record(0, RoundStep::AddRoundKey, state.as_bytes());

    for round in 1..rounds {
        sub_bytes(&mut state);
        observer.record(round, RoundStep::SubBytes, state.as_bytes());
        shift_rows(&mut state);
        observer.record(round, RoundStep::ShiftRows, state.as_bytes());
        mix_columns(&mut state);
        observer.record(round, RoundStep::MixColumns, state.as_bytes());
        add_round_key(&mut state, round_keys.get(round));
        observer.record(round, RoundStep::AddRoundKey, state.as_bytes());
    }

    sub_bytes(&mut state);
    observer.record(rounds, RoundStep::SubBytes, state.as_bytes());
    shift_rows(&mut state);
    observer.record(rounds, RoundStep::ShiftRows, state.as_bytes());
    add_round_key(&mut state, round_keys.get(rounds));
    observer.record(rounds, RoundStep::AddRoundKey, state.as_bytes());

    state.into()
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let rounds = round_keys.count() - 1;
    let mut state = State::from(*block);

    add_round_key(&mut state, round_keys.get(rounds));
    for round in (1..rounds).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, round_keys.get(round));
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, round_keys.get(0));

    state.into()
}

/// Pads `data` with PKCS#7 and encrypts each 16-byte block independently.
pub fn encrypt(data: &[u8], key: &CipherKey) -> Vec<u8> {
    let round_keys = expand_key(key);
    let mut out = pad(data);
    for chunk in out.chunks_exact_mut(BLOCK_SIZE) {
        let block: Block = (&*chunk).try_into().expect("chunk length is sixteen");
        chunk.copy_from_slice(&encrypt_block(&block, &round_keys));
    }
    out
}

/// Decrypts block-aligned ciphertext and strips the PKCS#7 padding.
pub fn decrypt(data: &[u8], key: &CipherKey) -> Result<Vec<u8>, Error> {
    if data.is_empty() || data.len() % BLOCK_SIZE != 0 {
        return Err(Error::InvalidBlockLength { len: data.len() });
    }
    let round_keys = expand_key(key);
    let mut out = data.to_vec();
    for chunk in out.chunks_exact_mut(BLOCK_SIZE) {
        let block: Block = (&*chunk).try_into().expect("chunk length is sixteen");
        chunk.copy_from_slice(&decrypt_block(&block, &round_keys));
    }
    let keep = unpad(&out)?.len();
    out.truncate(keep);
    Ok(out)
}
