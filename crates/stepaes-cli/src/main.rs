//! Command-line interface for `stepaes`.

#![forbid(unsafe_code)]

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use stepaes_core::{decrypt, encrypt, expand_key, CipherKey, KeySize};
use stepaes_trace::{matrix_rows, to_base64, to_hex, trace_encrypt};

/// Single-block AES walkthrough CLI.
#[derive(Parser)]
#[command(
    name = "stepaes",
    version,
    author,
    about = "AES-128/192/256 encryption with step-by-step state dumps"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt input with PKCS#7 padding; prints hex and base64 ciphertext.
    Encrypt {
        /// Key as hex (32, 48 or 64 hex characters).
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Force a key size in bits instead of inferring it from the key.
        #[arg(long, value_name = "BITS")]
        key_size: Option<usize>,
        /// Plaintext as UTF-8 text.
        #[arg(long, value_name = "TEXT")]
        text: Option<String>,
        /// Plaintext as hex bytes.
        #[arg(long, value_name = "HEX")]
        input_hex: Option<String>,
    },
    /// Decrypt block-aligned ciphertext and strip the padding.
    Decrypt {
        /// Key as hex (32, 48 or 64 hex characters).
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Force a key size in bits instead of inferring it from the key.
        #[arg(long, value_name = "BITS")]
        key_size: Option<usize>,
        /// Ciphertext as hex bytes.
        #[arg(long, value_name = "HEX")]
        input_hex: String,
    },
    /// Print every round key as a 4x4 matrix.
    ExpandKey {
        /// Key as hex (32, 48 or 64 hex characters).
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Force a key size in bits instead of inferring it from the key.
        #[arg(long, value_name = "BITS")]
        key_size: Option<usize>,
    },
    /// Print every intermediate state of the encryption.
    Trace {
        /// Key as hex (32, 48 or 64 hex characters).
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Force a key size in bits instead of inferring it from the key.
        #[arg(long, value_name = "BITS")]
        key_size: Option<usize>,
        /// Plaintext as UTF-8 text.
        #[arg(long, value_name = "TEXT")]
        text: Option<String>,
        /// Plaintext as hex bytes.
        #[arg(long, value_name = "HEX")]
        input_hex: Option<String>,
        /// Emit the trace as JSON instead of plain lines.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Encrypt and decrypt random data for a chosen key size.
    Demo {
        /// Key size in bits.
        #[arg(long, default_value_t = 128)]
        key_size: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Encrypt {
            key_hex,
            key_size,
            text,
            input_hex,
        } => cmd_encrypt(&key_hex, key_size, text, input_hex),
        Commands::Decrypt {
            key_hex,
            key_size,
            input_hex,
        } => cmd_decrypt(&key_hex, key_size, &input_hex),
        Commands::ExpandKey { key_hex, key_size } => cmd_expand_key(&key_hex, key_size),
        Commands::Trace {
            key_hex,
            key_size,
            text,
            input_hex,
            json,
        } => cmd_trace(&key_hex, key_size, text, input_hex, json),
        Commands::Demo { key_size, seed } => cmd_demo(key_size, seed),
    }
}

fn cmd_encrypt(
    key_hex: &str,
    key_size: Option<usize>,
    text: Option<String>,
    input_hex: Option<String>,
) -> Result<()> {
    let key = parse_key(key_hex, key_size)?;
    let data = input_bytes(text, input_hex)?;
    let ciphertext = encrypt(&data, &key);
    println!("ciphertext: {}", to_hex(&ciphertext));
    println!("base64:     {}", to_base64(&ciphertext));
    Ok(())
}

fn cmd_decrypt(key_hex: &str, key_size: Option<usize>, input_hex: &str) -> Result<()> {
    let key = parse_key(key_hex, key_size)?;
    let ciphertext = hex::decode(input_hex.trim()).context("decode ciphertext hex")?;
    let plaintext = decrypt(&ciphertext, &key)?;
    println!("plaintext: {}", to_hex(&plaintext));
    println!("text:      {}", String::from_utf8_lossy(&plaintext));
    Ok(())
}

fn cmd_expand_key(key_hex: &str, key_size: Option<usize>) -> Result<()> {
    let key = parse_key(key_hex, key_size)?;
    let round_keys = expand_key(&key);
    for (round, round_key) in round_keys.iter().enumerate() {
        println!("round key {round}:");
        for row in matrix_rows(round_key) {
            println!(
                "  {:02x} {:02x} {:02x} {:02x}",
                row[0], row[1], row[2], row[3]
            );
        }
    }
    Ok(())
}

fn cmd_trace(
    key_hex: &str,
    key_size: Option<usize>,
    text: Option<String>,
    input_hex: Option<String>,
    json: bool,
) -> Result<()> {
    let key = parse_key(key_hex, key_size)?;
    let data = input_bytes(text, input_hex)?;
    let (ciphertext, traces) = trace_encrypt(&data, &key);

    if json {
        println!("{}", serde_json::to_string_pretty(&traces)?);
        return Ok(());
    }

    for (index, trace) in traces.iter().enumerate() {
        println!("block {index}");
        println!("  input:    {}", to_hex(&trace.input));
        for step in &trace.steps {
            println!(
                "  round {:2}  {:<11} {}",
                step.round,
                step.step.name(),
                to_hex(&step.state)
            );
        }
    }
    println!("ciphertext: {}", to_hex(&ciphertext));
    println!("base64:     {}", to_base64(&ciphertext));
    Ok(())
}

fn cmd_demo(key_size: usize, seed: Option<u64>) -> Result<()> {
    let size = KeySize::from_bits(key_size)?;
    let mut rng = seeded_rng(seed);

    let mut key_bytes = vec![0u8; size.key_len()];
    rng.fill_bytes(&mut key_bytes);
    let key = CipherKey::new(&key_bytes, size)?;

    let mut message = [0u8; 24];
    rng.fill_bytes(&mut message);

    let ciphertext = encrypt(&message, &key);
    let recovered = decrypt(&ciphertext, &key)?;

    println!("demo key:   {}", hex::encode(&key_bytes));
    println!("plaintext:  {}", hex::encode(message));
    println!("ciphertext: {}", hex::encode(&ciphertext));
    println!("decrypted:  {}", hex::encode(&recovered));
    if recovered != message {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn parse_key(key_hex: &str, key_size: Option<usize>) -> Result<CipherKey> {
    let bytes = hex::decode(key_hex.trim()).context("decode key hex")?;
    let key = match key_size {
        Some(bits) => CipherKey::new(&bytes, KeySize::from_bits(bits)?)?,
        None => CipherKey::from_bytes(&bytes)?,
    };
    Ok(key)
}

fn input_bytes(text: Option<String>, input_hex: Option<String>) -> Result<Vec<u8>> {
    match (text, input_hex) {
        (Some(text), None) => Ok(text.into_bytes()),
        (None, Some(hex_str)) => hex::decode(hex_str.trim()).context("decode input hex"),
        (Some(_), Some(_)) => bail!("provide either --text or --input-hex, not both"),
        (None, None) => bail!("provide --text or --input-hex"),
    }
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
