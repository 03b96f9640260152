//! Reference AES implementation backing the step-by-step walkthrough tools.
//!
//! This crate mirrors the FIPS-197 specification and provides:
//! - Key schedule for AES-128/192/256.
//! - Single-block encryption and decryption.
//! - PKCS#7 padding and padded multi-block helpers.
//! - A per-step observation hook consumed by the trace layer.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cipher;
mod error;
mod gf;
mod key;
mod padding;
mod round;
mod sbox;
mod schedule;
mod state;

pub use crate::cipher::{
    decrypt, decrypt_block, encrypt, encrypt_block, encrypt_block_observed, RoundStep,
    StepObserver,
};
pub use crate::error::Error;
pub use crate::gf::{gf_mul, xtime};
pub use crate::key::{CipherKey, KeySize, RoundKeys};
pub use crate::padding::{pad, unpad};
pub use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
pub use crate::schedule::expand_key;
pub use crate::state::{Block, State, BLOCK_SIZE};
