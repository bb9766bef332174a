//! Field inversion via the binary extended Euclidean algorithm (EEA).
//!
//! Grounded in Micro25519's `gfp_inv`. The algorithm is variable-time: both
//! the number of loop iterations and which branch runs each iteration depend
//! on the bit pattern of `a`. The reference's own comment on `gfp_inv` gives
//! the standard mitigation — multiply the value to be inverted by a random,
//! secret blinding factor first, invert the product, then multiply the
//! result by the same factor again — and that responsibility is left to the
//! caller, exactly as in the reference.

use super::{ops, FieldElement, LEN};
use crate::error::CoreError;
use crate::primitives::mpi;
use core::cmp::Ordering;

/// `r = a^-1 mod p`.
///
/// Fails with [`CoreError::INVERSION_OF_ZERO`] if `a` is congruent to 0;
/// `r` is left unchanged in that case.
///
/// Unlike the reference, which aliases its `x2` accumulator directly onto
/// the output buffer `r`, this keeps `x1` and `x2` as independent local
/// scratch and copies the winning accumulator into `r` at the end. The
/// reference's aliasing trick only saves a register in C; in Rust it would
/// require unsafe aliasing of `r` with local temporaries for no benefit.
pub fn invert(r: &mut FieldElement, a: &FieldElement) -> Result<(), CoreError> {
    let mut ux = a.0;
    let mut vx = FieldElement::P.0;
    let mut x1 = FieldElement::ONE;
    let mut x2 = FieldElement::ZERO;
    let mut uvlen = LEN;

    while mpi::cmp(&ux, &vx) != Ordering::Less {
        let snapshot = ux;
        mpi::sub(&mut ux, &snapshot, &vx);
    }
    if mpi::cmp_word(&ux, 0) == Ordering::Equal {
        return Err(CoreError::INVERSION_OF_ZERO);
    }

    while mpi::cmp_word(&ux[..uvlen], 1) != Ordering::Equal
        && mpi::cmp_word(&vx[..uvlen], 1) != Ordering::Equal
    {
        while ux[0] & 1 == 0 {
            let snapshot = ux;
            mpi::shr1(&mut ux[..uvlen], &snapshot[..uvlen]);
            let x1_snap = x1;
            ops::halve(&mut x1, &x1_snap);
        }
        while vx[0] & 1 == 0 {
            let snapshot = vx;
            mpi::shr1(&mut vx[..uvlen], &snapshot[..uvlen]);
            let x2_snap = x2;
            ops::halve(&mut x2, &x2_snap);
        }

        // now both ux and vx are odd
        if mpi::cmp(&ux[..uvlen], &vx[..uvlen]) != Ordering::Less {
            let snapshot = ux;
            mpi::sub(&mut ux[..uvlen], &snapshot[..uvlen], &vx[..uvlen]);
            let (x1_snap, x2_snap) = (x1, x2);
            ops::subtract(&mut x1, &x1_snap, &x2_snap);
        } else {
            let snapshot = vx;
            mpi::sub(&mut vx[..uvlen], &snapshot[..uvlen], &ux[..uvlen]);
            let (x1_snap, x2_snap) = (x1, x2);
            ops::subtract(&mut x2, &x2_snap, &x1_snap);
        }

        if ux[uvlen - 1] == 0 && vx[uvlen - 1] == 0 {
            uvlen -= 1;
        }
    }

    if mpi::cmp_word(&ux, 1) == Ordering::Equal {
        r.0 = x1.0;
    } else {
        r.0 = x2.0;
    }
    Ok(())
}
