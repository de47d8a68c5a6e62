//! Command-line interface for single-block AES-128.

#![forbid(unsafe_code)]

use aes128_core::Aes128;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// AES-128 single-block CLI.
#[derive(Parser)]
#[command(
    name = "aes128",
    version,
    author,
    about = "Encrypt or decrypt one 16-byte block with AES-128"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a 16-byte block given as hex.
    Encrypt {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Decrypt a 16-byte block given as hex.
    Decrypt {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Encrypt and decrypt a random block with a random key.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Encrypt { key_hex, block_hex } => cmd_encrypt(&key_hex, &block_hex),
        Commands::Decrypt { key_hex, block_hex } => cmd_decrypt(&key_hex, &block_hex),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_encrypt(key_hex: &str, block_hex: &str) -> Result<()> {
    let cipher = cipher_from_hex(key_hex)?;
    let block = parse_block_hex(block_hex)?;
    let ciphertext = cipher.encrypt(&block).context("encrypt block")?;
    println!("{}", hex::encode(ciphertext));
    Ok(())
}

fn cmd_decrypt(key_hex: &str, block_hex: &str) -> Result<()> {
    let cipher = cipher_from_hex(key_hex)?;
    let block = parse_block_hex(block_hex)?;
    let plaintext = cipher.decrypt(&block).context("decrypt block")?;
    println!("{}", hex::encode(plaintext));
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    let cipher = Aes128::new(&key_bytes).context("build cipher")?;

    let mut block = [0u8; 16];
    rng.fill_bytes(&mut block);

    let ciphertext = cipher.encrypt(&block).context("encrypt block")?;
    let decrypted = cipher.decrypt(&ciphertext).context("decrypt block")?;

    println!("demo key: {}", hex::encode(key_bytes));
    println!("plaintext: {}", hex::encode(block));
    println!("ciphertext: {}", hex::encode(ciphertext));
    println!("decrypted: {}", hex::encode(decrypted));
    if decrypted != block {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn cipher_from_hex(key_hex: &str) -> Result<Aes128> {
    let bytes = hex::decode(key_hex.trim()).context("decode key hex")?;
    if bytes.len() != 16 {
        bail!("AES-128 key must be 16 bytes (32 hex characters)");
    }
    Aes128::new(&bytes).context("build cipher")
}

fn parse_block_hex(block_hex: &str) -> Result<[u8; 16]> {
    let bytes = hex::decode(block_hex.trim()).context("decode block hex")?;
    if bytes.len() != 16 {
        bail!("block must be 16 bytes (32 hex characters)");
    }
    let mut block = [0u8; 16];
    block.copy_from_slice(&bytes);
    Ok(block)
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
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
