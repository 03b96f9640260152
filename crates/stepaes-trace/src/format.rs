//! Display encodings used by the walkthrough UI.

use base64::{engine::general_purpose, Engine as _};

use stepaes_core::Block;

/// Formats bytes as lowercase hex pairs separated by spaces.
pub fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&format!("{byte:02x}"));
    }
    out
}

/// Encodes bytes as standard base64.
pub fn to_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Lays a block out as four display rows.
///
/// The state is column-major, so row `r` holds bytes `r, r+4, r+8, r+12`.
pub fn matrix_rows(block: &Block) -> [[u8; 4]; 4] {
    let mut rows = [[0u8; 4]; 4];
    for (i, byte) in block.iter().enumerate() {
        rows[i % 4][i / 4] = *byte;
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_pairs_are_space_separated() {
        assert_eq!(to_hex(&[0x00, 0xab, 0x5a]), "00 ab 5a");
        assert_eq!(to_hex(&[]), "");
    }

    #[test]
    fn base64_matches_known_encoding() {
        assert_eq!(to_base64(b"Man"), "TWFu");
        assert_eq!(to_base64(&[0xff]), "/w==");
    }

    #[test]
    fn matrix_rows_transpose_the_column_major_block() {
        let mut block = [0u8; 16];
        for (i, b) in block.iter_mut().enumerate() {
            *b = i as u8;
        }
        let rows = matrix_rows(&block);
        assert_eq!(rows[0], [0, 4, 8, 12]);
        assert_eq!(rows[1], [1, 5, 9, 13]);
        assert_eq!(rows[3], [3, 7, 11, 15]);
    }
}
