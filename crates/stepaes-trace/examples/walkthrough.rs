//! Prints every intermediate state for the FIPS-197 appendix C.1 vector.

use stepaes_core::{expand_key, CipherKey, KeySize};
use stepaes_trace::{to_hex, trace_block};

fn main() {
    let key = CipherKey::new(
        &[
            0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d,
            0x0e, 0x0f,
        ],
        KeySize::Aes128,
    )
    .expect("key length matches");
    let round_keys = expand_key(&key);

    let plaintext = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    let trace = trace_block(&plaintext, &round_keys);

    println!("input:       {}", to_hex(&trace.input));
    for step in &trace.steps {
        println!("round {:2}  {:<11} {}", step.round, step.step.name(), to_hex(&step.state));
    }
    println!("ciphertext:  {}", to_hex(&trace.ciphertext));

    assert_eq!(
        to_hex(&trace.ciphertext),
        "69 c4 e0 d8 6a 7b 04 30 d8 cd b7 80 70 b4 c5 5a"
    );
    println!("example succeeded; ciphertext matches the published vector");
}
