//! Block representation helpers.

/// AES block of 16 bytes.
///
/// Doubles as the 4x4 working state: byte `i` of a block sits at row
/// `i % 4`, column `i / 4`, so the flat index of `(row, col)` is
/// `4 * col + row`.
pub type Block = [u8; 16];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}
