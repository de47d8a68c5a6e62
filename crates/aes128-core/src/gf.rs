//! Arithmetic in GF(2^8) with the AES reduction polynomial
//! x^8 + x^4 + x^3 + x + 1 (reduction constant 0x1b).

/// Doubles a field element (multiplication by x).
#[inline]
pub(crate) fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ 0x1b
    } else {
        shifted
    }
}

/// Multiplies two field elements by shift-and-add.
pub(crate) fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    for _ in 0..8 {
        if b & 1 != 0 {
            product ^= a;
        }
        let hi_bit_set = a & 0x80;
        a <<= 1;
        if hi_bit_set != 0 {
            a ^= 0x1b;
        }
        b >>= 1;
    }
    product
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_and_zero_are_identities() {
        for b in 0..=255u8 {
            assert_eq!(gmul(1, b), b);
            assert_eq!(gmul(b, 1), b);
            assert_eq!(gmul(0, b), 0);
            assert_eq!(gmul(b, 0), 0);
        }
    }

    #[test]
    fn distributes_over_xor() {
        // Spot-check distributivity across a spread of operands.
        for a in (0..=255u8).step_by(7) {
            for b1 in (0..=255u8).step_by(13) {
                for b2 in (0..=255u8).step_by(29) {
                    assert_eq!(gmul(a, b1 ^ b2), gmul(a, b1) ^ gmul(a, b2));
                    assert_eq!(gmul(b1 ^ b2, a), gmul(b1, a) ^ gmul(b2, a));
                }
            }
        }
    }

    #[test]
    fn xtime_matches_gmul_by_two() {
        for b in 0..=255u8 {
            assert_eq!(xtime(b), gmul(b, 2));
        }
    }

    #[test]
    fn known_products() {
        // Worked examples from FIPS-197 section 4.2.
        assert_eq!(gmul(0x57, 0x13), 0xfe);
        assert_eq!(gmul(0x57, 0x83), 0xc1);
    }
}
