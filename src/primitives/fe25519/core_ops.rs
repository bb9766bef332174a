//! Composite GF(p) operations built from the MPI layer: setting/comparing
//! against `p`, full reduction, and residue-class equality/ordering.

use super::{FieldElement, LEN, P};
use crate::primitives::mpi;
use core::cmp::Ordering;

/// Writes the canonical representation of `p` into `r`.
pub fn set_p(r: &mut FieldElement) {
    r.0 = P;
}

/// Compares a (possibly unreduced) field element against `p`.
///
/// This is just [`mpi::cmp`] against the constant [`P`] — `p`'s own limbs
/// already encode the "always equal, never worth comparing" middle words
/// that the reference's hand-unrolled `gfp_cmpp` skips explicitly.
pub fn compare_to_p(a: &FieldElement) -> Ordering {
    mpi::cmp(&a.0, &P)
}

/// Reduces `a` to its least non-negative residue, `r = a mod p`.
///
/// Two subtract-then-conditionally-re-add passes are used, not one: every
/// arithmetic primitive in this module only ever needs one subtraction to
/// land in `[0, p - 1]` from its guaranteed `[0, 2p - 1]` output range, but
/// `full_reduce`'s contract is wider — it accepts any 256-bit value a
/// caller might hand it directly, which can require a second pass.
pub fn full_reduce(r: &mut FieldElement, a: &FieldElement) {
    let mut p = FieldElement::ZERO;
    set_p(&mut p);

    let borrow = mpi::sub(&mut r.0, &a.0, &p.0);
    mpi::conditional_add(&mut r.0, &r.0, &p.0, borrow);
    let borrow = mpi::sub(&mut r.0, &r.0, &p.0);
    mpi::conditional_add(&mut r.0, &r.0, &p.0, borrow);
}

/// Orders two (possibly unreduced) field elements by residue class.
pub fn compare(a: &FieldElement, b: &FieldElement) -> Ordering {
    let mut ar = FieldElement::ZERO;
    let mut br = FieldElement::ZERO;
    full_reduce(&mut ar, a);
    full_reduce(&mut br, b);

    mpi::cmp(&ar.0, &br.0)
}

/// `true` if `a` and `b` represent the same residue class mod `p`.
pub fn eq(a: &FieldElement, b: &FieldElement) -> bool {
    compare(a, b) == Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_p_is_exactly_p() {
        let mut r = FieldElement::ZERO;
        set_p(&mut r);
        assert_eq!(r, FieldElement::P);
    }

    #[test]
    fn compare_to_p_orders_correctly() {
        assert_eq!(compare_to_p(&FieldElement::P), Ordering::Equal);
        assert_eq!(compare_to_p(&FieldElement::ZERO), Ordering::Less);

        let mut above_p = FieldElement::P;
        above_p.0[0] = above_p.0[0].wrapping_add(1);
        assert_eq!(compare_to_p(&above_p), Ordering::Greater);
    }

    #[test]
    fn full_reduce_of_p_is_zero() {
        let mut r = FieldElement::ZERO;
        full_reduce(&mut r, &FieldElement::P);
        assert_eq!(r, FieldElement::ZERO);
    }

    #[test]
    fn full_reduce_is_idempotent() {
        let mut once = FieldElement::ZERO;
        full_reduce(&mut once, &FieldElement::P);
        let mut twice = FieldElement::ZERO;
        full_reduce(&mut twice, &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn full_reduce_handles_values_above_2p() {
        // 4p, still representable in 256 bits, exercises the second pass.
        let mut four_p = [0u32; LEN];
        let carry1 = mpi::add(&mut four_p, &FieldElement::P.0, &FieldElement::P.0);
        assert_eq!(carry1, 0);
        let mut four_p2 = [0u32; LEN];
        mpi::add(&mut four_p2, &four_p, &four_p);

        let mut r = FieldElement::ZERO;
        full_reduce(&mut r, &FieldElement(four_p2));
        assert_eq!(r, FieldElement::ZERO);
    }

    #[test]
    fn eq_ignores_redundant_representation() {
        // p + 1, unreduced, is congruent to 1 mod p.
        let mut sum = FieldElement::ZERO;
        mpi::add(&mut sum.0, &FieldElement::P.0, &FieldElement::ONE.0);

        assert!(eq(&sum, &FieldElement::ONE));
    }
}
