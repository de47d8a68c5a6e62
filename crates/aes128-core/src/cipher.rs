//! AES-128 key schedule and block encryption/decryption.

use crate::block::Block;
use crate::error::{AesError, Result};
use crate::key::{Aes128Key, RoundKeys};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::sbox;

const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

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

/// Expands a 128-bit key into 11 round keys (44 schedule words).
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut w = [0u32; 44];
    for (i, chunk) in key.0.chunks_exact(4).enumerate() {
        let bytes: [u8; 4] = chunk.try_into().expect("chunk length is four");
        w[i] = u32::from_be_bytes(bytes);
    }

    for i in 4..44 {
        let mut temp = w[i - 1];
        if i % 4 == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[(i / 4) - 1]) << 24);
        }
        w[i] = w[i - 4] ^ temp;
    }

    let mut round_keys = [[0u8; 16]; 11];
    for round in 0..11 {
        for word_idx in 0..4 {
            let bytes = w[round * 4 + word_idx].to_be_bytes();
            round_keys[round][word_idx * 4..word_idx * 4 + 4].copy_from_slice(&bytes);
        }
    }

    RoundKeys(round_keys)
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..10 {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(10));

    state
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
///
/// Uses the direct inverse cipher: inverse transforms applied in reverse
/// round order.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(10));
    for round in (1..10).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, round_keys.get(round));
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, round_keys.get(0));

    state
}

/// An AES-128 cipher instance.
///
/// Holds only the immutable expanded key; the working state is local to
/// each call, so one instance may serve concurrent encrypt/decrypt calls.
#[derive(Clone, Copy, Debug)]
pub struct Aes128 {
    round_keys: RoundKeys,
}

impl Aes128 {
    /// Builds a cipher instance from a 16-byte key.
    ///
    /// # Errors
    ///
    /// Returns [`AesError::InvalidKeyLength`] when `key` is not exactly
    /// 16 bytes.
    pub fn new(key: &[u8]) -> Result<Self> {
        let key = Aes128Key::try_from(key)?;
        Ok(Self {
            round_keys: expand_key(&key),
        })
    }

    /// Encrypts one 16-byte block.
    ///
    /// # Errors
    ///
    /// Returns [`AesError::InvalidBlockLength`] when `block` is not
    /// exactly 16 bytes.
    pub fn encrypt(&self, block: &[u8]) -> Result<Block> {
        let block = Self::check_block(block)?;
        Ok(encrypt_block(&block, &self.round_keys))
    }

    /// Decrypts one 16-byte block.
    ///
    /// # Errors
    ///
    /// Returns [`AesError::InvalidBlockLength`] when `block` is not
    /// exactly 16 bytes.
    pub fn decrypt(&self, block: &[u8]) -> Result<Block> {
        let block = Self::check_block(block)?;
        Ok(decrypt_block(&block, &self.round_keys))
    }

    fn check_block(block: &[u8]) -> Result<Block> {
        block
            .try_into()
            .map_err(|_| AesError::InvalidBlockLength { len: block.len() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;
    use std::sync::Arc;

    const NIST_KEY: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    const NIST_PLAIN: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    const NIST_CIPHER: [u8; 16] = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5,
        0x5a,
    ];

    #[test]
    fn block_functions_match_nist_vector() {
        let round_keys = expand_key(&Aes128Key::from(NIST_KEY));
        assert_eq!(encrypt_block(&NIST_PLAIN, &round_keys), NIST_CIPHER);
        assert_eq!(decrypt_block(&NIST_CIPHER, &round_keys), NIST_PLAIN);
    }

    #[test]
    fn cipher_instance_matches_nist_vector() {
        let cipher = Aes128::new(&NIST_KEY).unwrap();
        assert_eq!(cipher.encrypt(&NIST_PLAIN).unwrap(), NIST_CIPHER);
        assert_eq!(cipher.decrypt(&NIST_CIPHER).unwrap(), NIST_PLAIN);
    }

    #[test]
    fn encrypt_decrypt_round_trip_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let mut key_bytes = [0u8; 16];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key_bytes);
            rng.fill_bytes(&mut block);
            let cipher = Aes128::new(&key_bytes).unwrap();
            let ct = cipher.encrypt(&block).unwrap();
            assert_eq!(cipher.decrypt(&ct).unwrap(), block);
        }
    }

    #[test]
    fn schedule_starts_with_the_key_big_endian() {
        let key = Aes128Key::from(NIST_KEY);
        let round_keys = expand_key(&key);
        assert_eq!(round_keys.get(0), &NIST_KEY);
        assert_eq!(round_keys.0.len(), 11);
    }

    #[test]
    fn expanded_words_match_fips_appendix_a() {
        // FIPS-197 appendix A.1 expands key 2b7e1516...09cf4f3c:
        // w[4] = a0fafe17, w[43] = b6630ca6.
        let key = Aes128Key::from([
            0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf,
            0x4f, 0x3c,
        ]);
        let round_keys = expand_key(&key);
        assert_eq!(&round_keys.get(1)[..4], &[0xa0, 0xfa, 0xfe, 0x17]);
        assert_eq!(&round_keys.get(10)[12..], &[0xb6, 0x63, 0x0c, 0xa6]);
    }

    #[test]
    fn expanded_words_match_fips_appendix_c_key() {
        // Appendix C uses key 000102...0e0f; its first derived word is
        // d6aa74fd: rot(0c0d0e0f) = 0d0e0f0c, sub = d7ab76fe,
        // ^ rcon = d6ab76fe, ^ w[0] = d6aa74fd.
        let round_keys = expand_key(&Aes128Key::from(NIST_KEY));
        assert_eq!(&round_keys.get(1)[..4], &[0xd6, 0xaa, 0x74, 0xfd]);
    }

    #[test]
    fn construction_rejects_wrong_key_lengths() {
        for len in [15usize, 17] {
            let key = vec![0u8; len];
            assert_eq!(
                Aes128::new(&key).unwrap_err(),
                AesError::InvalidKeyLength { len }
            );
        }
        assert!(Aes128::new(&[0u8; 16]).is_ok());
    }

    #[test]
    fn calls_reject_wrong_block_lengths() {
        let cipher = Aes128::new(&NIST_KEY).unwrap();
        for len in [15usize, 17] {
            let block = vec![0u8; len];
            assert_eq!(
                cipher.encrypt(&block).unwrap_err(),
                AesError::InvalidBlockLength { len }
            );
            assert_eq!(
                cipher.decrypt(&block).unwrap_err(),
                AesError::InvalidBlockLength { len }
            );
        }
    }

    #[test]
    fn shared_instance_is_safe_across_threads() {
        let cipher = Arc::new(Aes128::new(&NIST_KEY).unwrap());
        let handles: Vec<_> = (0..8u8)
            .map(|n| {
                let cipher = Arc::clone(&cipher);
                std::thread::spawn(move || {
                    let block = [n; 16];
                    for _ in 0..1000 {
                        let ct = cipher.encrypt(&block).unwrap();
                        assert_eq!(cipher.decrypt(&ct).unwrap(), block);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }
}
