//! Arithmetic in the prime field GF(p), p = 2²⁵⁵ − 19.
//!
//! This is the "2^k − c" pseudo-Mersenne prime behind Curve25519 and
//! Ed25519. A [`FieldElement`] holds eight 32-bit limbs, limb 0 least
//! significant, and the representation is *redundant*: a value does not
//! need to be the least non-negative residue of its class. Every arithmetic
//! primitive below accepts any 256-bit input and guarantees a result in
//! `[0, 2p − 1]`; call [`full_reduce`] only when the canonical
//! (least non-negative) representative is actually needed, e.g. before
//! encoding a value or comparing it against a test vector.
//!
//! Grounded directly in Micro25519's `gfparith.c`: the single-sweep
//! "fold the carry from the high limb into a multiply-by-c" trick used by
//! [`ops::add`], [`ops::sub`], [`ops::multiply`] and friends is that
//! reference's, translated limb-for-limb.
//!
//! None of these functions allocate, recurse, or touch any state outside
//! their arguments.

mod core_ops;
pub mod hex;
mod inverse;
mod ops;

pub use core_ops::{compare, compare_to_p, eq, full_reduce, set_p};
pub use inverse::invert;
pub use ops::{add, conditional_negate, halve, mul_small, multiply, square, subtract};

/// Number of 32-bit limbs in a field element: `ceil(255 / 32)`.
pub const LEN: usize = 8;

/// `k` in `p = 2^k - c`.
pub const CONSTK: u32 = 255;

/// `c` in `p = 2^k - c`.
pub const CONSTC: u32 = 19;

const MSB0MASK: u32 = 0x7FFF_FFFF;
const ALL1MASK: u32 = 0xFFFF_FFFF;

/// The canonical limbs of `p = 2^255 - 19`, most work is expressed against
/// this constant rather than re-deriving it.
pub const P: [u32; LEN] = [
    0u32.wrapping_sub(CONSTC),
    ALL1MASK,
    ALL1MASK,
    ALL1MASK,
    ALL1MASK,
    ALL1MASK,
    ALL1MASK,
    MSB0MASK,
];

/// An element of GF(p), stored as eight little-endian 32-bit limbs.
///
/// Equality on this type is raw-limb equality, *not* congruence mod p —
/// two `FieldElement`s can represent the same residue class while holding
/// different bit patterns. Use [`eq`] to compare residue classes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldElement(pub [u32; LEN]);

impl FieldElement {
    /// The additive identity.
    pub const ZERO: Self = Self([0; LEN]);

    /// The multiplicative identity.
    pub const ONE: Self = Self([1, 0, 0, 0, 0, 0, 0, 0]);

    /// The prime modulus itself, as a field element.
    pub const P: Self = Self(P);

    /// Builds a field element from raw limbs, limb 0 least significant.
    ///
    /// Accepts any value in `[0, 2^256 - 1]`; the value need not be reduced.
    pub const fn from_limbs(limbs: [u32; LEN]) -> Self {
        Self(limbs)
    }

    /// Returns the raw limbs, limb 0 least significant. The value may be
    /// unreduced (see the module-level docs).
    pub const fn to_limbs(self) -> [u32; LEN] {
        self.0
    }

    /// `self + other`, in `[0, 2p - 1]`.
    pub fn add(&self, other: &Self) -> Self {
        let mut r = Self::ZERO;
        ops::add(&mut r, self, other);
        r
    }

    /// `self - other`, in `[0, 2p - 1]`.
    pub fn sub(&self, other: &Self) -> Self {
        let mut r = Self::ZERO;
        ops::subtract(&mut r, self, other);
        r
    }

    /// `self * other`, in `[0, 2p - 1]`.
    pub fn mul(&self, other: &Self) -> Self {
        let mut r = Self::ZERO;
        ops::multiply(&mut r, self, other);
        r
    }

    /// `self * self`, in `[0, 2p - 1]`.
    pub fn sq(&self) -> Self {
        let mut r = Self::ZERO;
        ops::square(&mut r, self);
        r
    }

    /// `self * scalar`, treating `scalar` as a one-limb value. In `[0, 2p - 1]`.
    pub fn mul_small(&self, scalar: u32) -> Self {
        let mut r = Self::ZERO;
        ops::mul_small(&mut r, self, scalar);
        r
    }

    /// `self / 2 mod p`. In `[0, 2p - 1]`.
    pub fn halve(&self) -> Self {
        let mut r = Self::ZERO;
        ops::halve(&mut r, self);
        r
    }

    /// `-self mod p` if `neg & 1 == 1`, else `self mod p`. In `[0, 2p - 1]`.
    pub fn conditional_negate(&self, neg: u32) -> Self {
        let mut r = Self::ZERO;
        ops::conditional_negate(&mut r, self, neg);
        r
    }

    /// The least non-negative residue of `self`, in `[0, p - 1]`.
    pub fn reduce(&self) -> Self {
        let mut r = Self::ZERO;
        core_ops::full_reduce(&mut r, self);
        r
    }

    /// `self^-1 mod p`. Fails only when `self` is congruent to 0.
    ///
    /// Variable-time in `self` — see [`invert`] for details.
    pub fn invert(&self) -> Result<Self, crate::error::CoreError> {
        let mut r = Self::ZERO;
        inverse::invert(&mut r, self)?;
        Ok(r)
    }

    /// `true` if `self` and `other` represent the same residue class.
    pub fn congruent(&self, other: &Self) -> bool {
        core_ops::eq(self, other)
    }

    /// Parses a `0x`-prefixed big-endian hex string into a (possibly
    /// unreduced) field element.
    pub fn from_hex(s: &str) -> Result<Self, crate::error::CoreError> {
        hex::parse(s).map(Self)
    }

    /// Formats `self` as a `0x`-prefixed big-endian hex string. Does not
    /// reduce first — call [`FieldElement::reduce`] for the canonical form.
    pub fn to_hex(&self) -> String {
        hex::format(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn p_constant_matches_known_value() {
        // p = 2^255 - 19, most-significant limb first:
        // 0x7FFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFED
        assert_eq!(P[0], 0xFFFF_FFED);
        assert_eq!(P[1..7], [0xFFFF_FFFFu32; 6]);
        assert_eq!(P[7], 0x7FFF_FFFF);
    }

    #[test]
    fn zero_and_one_are_distinct() {
        assert!(!FieldElement::ZERO.congruent(&FieldElement::ONE));
    }
}
