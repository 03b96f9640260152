//! The four round transformations and their inverses, in place over [`State`].

use crate::gf::{gf_mul, xtime};
use crate::sbox::{inv_sbox, sbox};
use crate::state::{Block, State};

/// Substitutes every state byte through the S-box.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for byte in state.as_bytes_mut().iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Substitutes every state byte through the inverse S-box.
#[inline]
pub fn inv_sub_bytes(state: &mut State) {
    for byte in state.as_bytes_mut().iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Rotates row `r` left by `r` positions.
#[inline]
pub fn shift_rows(state: &mut State) {
    let src = *state;
    for row in 1..4 {
        for col in 0..4 {
            state.set(row, col, src.get(row, (col + row) % 4));
        }
    }
}

/// Rotates row `r` right by `r` positions, undoing [`shift_rows`].
#[inline]
pub fn inv_shift_rows(state: &mut State) {
    let src = *state;
    for row in 1..4 {
        for col in 0..4 {
            state.set(row, col, src.get(row, (col + 4 - row) % 4));
        }
    }
}

fn mix_single_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *col;
    col[0] = xtime(a0) ^ (xtime(a1) ^ a1) ^ a2 ^ a3;
    col[1] = a0 ^ xtime(a1) ^ (xtime(a2) ^ a2) ^ a3;
    col[2] = a0 ^ a1 ^ xtime(a2) ^ (xtime(a3) ^ a3);
    col[3] = (xtime(a0) ^ a0) ^ a1 ^ a2 ^ xtime(a3);
}

fn inv_mix_single_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *col;
    col[0] = gf_mul(a0, 0x0e) ^ gf_mul(a1, 0x0b) ^ gf_mul(a2, 0x0d) ^ gf_mul(a3, 0x09);
    col[1] = gf_mul(a0, 0x09) ^ gf_mul(a1, 0x0e) ^ gf_mul(a2, 0x0b) ^ gf_mul(a3, 0x0d);
    col[2] = gf_mul(a0, 0x0d) ^ gf_mul(a1, 0x09) ^ gf_mul(a2, 0x0e) ^ gf_mul(a3, 0x0b);
    col[3] = gf_mul(a0, 0x0b) ^ gf_mul(a1, 0x0d) ^ gf_mul(a2, 0x09) ^ gf_mul(a3, 0x0e);
}

/// Multiplies every column by the fixed MixColumns matrix.
#[inline]
pub fn mix_columns(state: &mut State) {
    for col in 0..4 {
        let mut column = state.column(col);
        mix_single_column(&mut column);
        state.set_column(col, column);
    }
}

/// Multiplies every column by the inverse MixColumns matrix.
#[inline]
pub fn inv_mix_columns(state: &mut State) {
    for col in 0..4 {
        let mut column = state.column(col);
        inv_mix_single_column(&mut column);
        state.set_column(col, column);
    }
}

/// XORs the round key into the state. Self-inverse.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &Block) {
    for (byte, key_byte) in state.as_bytes_mut().iter_mut().zip(round_key.iter()) {
        *byte ^= *key_byte;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_state() -> State {
        let mut bytes = [0u8; 16];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        State::from(bytes)
    }

    #[test]
    fn shift_rows_matches_the_fixed_permutation() {
        let mut state = numbered_state();
        shift_rows(&mut state);
        assert_eq!(
            state.as_bytes(),
            &[0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11]
        );
    }

    #[test]
    fn inv_shift_rows_undoes_shift_rows() {
        let mut state = numbered_state();
        shift_rows(&mut state);
        inv_shift_rows(&mut state);
        assert_eq!(state, numbered_state());
    }

    #[test]
    fn shift_rows_has_period_four() {
        let mut state = numbered_state();
        for _ in 0..4 {
            shift_rows(&mut state);
        }
        assert_eq!(state, numbered_state());
    }

    #[test]
    fn mix_columns_matches_published_column_example() {
        // db 13 53 45 -> 8e 4d a1 bc in every column.
        let mut state = State::from([
            0xdb, 0x13, 0x53, 0x45, 0xdb, 0x13, 0x53, 0x45, 0xdb, 0x13, 0x53, 0x45, 0xdb, 0x13,
            0x53, 0x45,
        ]);
        mix_columns(&mut state);
        for col in 0..4 {
            assert_eq!(state.column(col), [0x8e, 0x4d, 0xa1, 0xbc]);
        }
    }

    #[test]
    fn inv_mix_columns_undoes_mix_columns() {
        let mut state = numbered_state();
        mix_columns(&mut state);
        inv_mix_columns(&mut state);
        assert_eq!(state, numbered_state());
    }

    #[test]
    fn add_round_key_is_an_involution() {
        let round_key: Block = [0x5a; 16];
        let mut state = numbered_state();
        add_round_key(&mut state, &round_key);
        assert_ne!(state, numbered_state());
        add_round_key(&mut state, &round_key);
        assert_eq!(state, numbered_state());
    }

    #[test]
    fn sub_bytes_round_trips_through_its_inverse() {
        let mut state = numbered_state();
        sub_bytes(&mut state);
        inv_sub_bytes(&mut state);
        assert_eq!(state, numbered_state());
    }
}
