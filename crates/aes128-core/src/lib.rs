//! AES-128 block cipher engine as specified in FIPS-197.
//!
//! This crate provides:
//! - Key schedule for AES-128.
//! - Single-block encryption and decryption.
//! - An [`Aes128`] instance type holding an immutable expanded key.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened. It handles
//! exactly one 16-byte block per call: modes of operation, padding, and
//! streaming are out of scope.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod gf;
mod key;
mod round;
mod sbox;

pub use crate::block::Block;
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key, Aes128};
pub use crate::error::{AesError, Result};
pub use crate::key::{Aes128Key, RoundKeys};
