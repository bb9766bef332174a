//! The elementary, branch-free GF(p) primitives: addition, subtraction,
//! conditional negation, halving, and the two flavors of multiplication.
//!
//! Every function here is a single sweep over the limbs. Each fuses the
//! pseudo-Mersenne reduction (`2^255 ≡ 19 (mod p)`) into that sweep by
//! splitting the top limb's sum at bit 31: the low 31 bits become the seed
//! for the next limb 7, and the bits above feed back into the low end
//! multiplied by `c`. This is the central trick in Micro25519's `gfparith.c`,
//! and every function below is a direct translation of its C counterpart.

use super::{FieldElement, CONSTC, LEN, MSB0MASK};

const C: u64 = CONSTC as u64;

/// `r = a + b mod p`, result in `[0, 2p - 1]`.
pub fn add(r: &mut FieldElement, a: &FieldElement, b: &FieldElement) {
    let top: u64 = a.0[LEN - 1] as u64 + b.0[LEN - 1] as u64;
    let msw = (top as u32) & MSB0MASK;
    // top's bits above 30 represent "how many multiples of 2^255 this sum
    // carries" (0..=3, since a and b are each below 2p < 2^256); folding
    // that into c * overflow is the one piece of pseudo-Mersenne reduction
    // this function needs.
    let mut sum: u64 = C * (top >> 31);

    for i in 0..LEN - 1 {
        sum += a.0[i] as u64 + b.0[i] as u64;
        r.0[i] = sum as u32;
        sum >>= 32;
    }
    r.0[LEN - 1] = msw.wrapping_add(sum as u32);
}

/// `r = a - b mod p`, result in `[0, 2p - 1]`.
///
/// Computed as `(4p + a - b) mod p` in one sweep so the running sum never
/// goes negative. `4p`'s top limb, `0x1FFFFFFFC`, is split into the part
/// that feeds the loop (`0x1FFFFFFFC`, itself seeded before the loop) and
/// the `+4` that's folded back in afterward.
pub fn subtract(r: &mut FieldElement, a: &FieldElement, b: &FieldElement) {
    const FOUR_P_HI: i64 = (MSB0MASK as i64) << 2; // 0x1FFFFFFFC

    let top: i64 = FOUR_P_HI + a.0[LEN - 1] as i64 - b.0[LEN - 1] as i64;
    let msw = (top as u32) & MSB0MASK;
    let mut sum: i64 = (CONSTC as i64) * ((top >> 31) as u32 as i64);
    sum -= (CONSTC as i64) << 2;

    for i in 0..LEN - 1 {
        sum += a.0[i] as i64 - b.0[i] as i64;
        r.0[i] = sum as u32;
        sum >>= 32; // arithmetic shift: sign must be preserved here.
    }
    r.0[LEN - 1] = msw.wrapping_add(sum as u32).wrapping_add(4);
}

/// Unsigned-accumulator variant of [`subtract`], avoiding the arithmetic
/// right shift of a signed integer. Must produce bit-identical results to
/// [`subtract`] for every input — exercised in the test suite.
pub fn subtract_unsigned(r: &mut FieldElement, a: &FieldElement, b: &FieldElement) {
    const FOUR_P_HI: u64 = (MSB0MASK as u64) << 2;
    const FOUR_P_MI: u64 = (u32::MAX as u64) << 2;
    const FOUR_P_LO: u64 = ((u32::MAX - (CONSTC - 1)) as u64) << 2;

    let top = FOUR_P_HI
        .wrapping_add(a.0[LEN - 1] as u64)
        .wrapping_sub(b.0[LEN - 1] as u64);
    let msw = (top as u32) & MSB0MASK;
    let mut sum: u64 = C * ((top >> 31) as u32 as u64);

    sum = sum
        .wrapping_add(FOUR_P_LO)
        .wrapping_add(a.0[0] as u64)
        .wrapping_sub(b.0[0] as u64);
    r.0[0] = sum as u32;
    sum >>= 32;

    for i in 1..LEN - 1 {
        sum = sum
            .wrapping_add(FOUR_P_MI)
            .wrapping_add(a.0[i] as u64)
            .wrapping_sub(b.0[i] as u64);
        r.0[i] = sum as u32;
        sum >>= 32;
    }
    r.0[LEN - 1] = msw.wrapping_add(sum as u32);
}

/// `r = -a mod p` if `neg & 1 == 1`, else `r = a mod p`. Result in `[0, 2p - 1]`.
///
/// Both branches are unified by XOR-masking every limb of `a` with an
/// all-zero or all-one mask: masked, `a` becomes its one's complement,
/// which is exactly the quantity `4p - a`'s reduction needs.
pub fn conditional_negate(r: &mut FieldElement, a: &FieldElement, neg: u32) {
    const MIN4MASK: i64 = -4i64;

    let mask = 0u32.wrapping_sub(neg & 1);
    let top: i64 = MIN4MASK + (mask ^ a.0[LEN - 1]) as i64;
    let msw = (top as u32) & MSB0MASK;
    let mut sum: i64 = (CONSTC as i64) * ((top >> 31) as u32 as i64);
    sum -= (CONSTC as i64) << 1;
    sum -= (mask & ((CONSTC << 1) - 1)) as i64;

    for i in 0..LEN - 1 {
        sum += (mask ^ a.0[i]) as i64;
        r.0[i] = sum as u32;
        sum >>= 32;
    }
    r.0[LEN - 1] = msw.wrapping_add(sum as u32).wrapping_add(4);
}

/// `r = a / 2 mod p`, result in `[0, 2p - 1]`.
///
/// An even `a` is shifted right directly; an odd `a` has `p` added first
/// (masked by `a`'s low bit) to make it even, and the shift runs over that
/// sum. One sweep computes both the running sum and the 1-bit shift by
/// carrying the previous limb's low bit forward as `tmp`.
pub fn halve(r: &mut FieldElement, a: &FieldElement) {
    let mask = 0u32.wrapping_sub(a.0[0] & 1);

    let mut sum: i64 = a.0[0] as i64 - (CONSTC as i64 & mask as i64);
    let mut tmp = sum as u32;
    sum >>= 32;

    for i in 1..LEN - 1 {
        sum += a.0[i] as i64;
        r.0[i - 1] = ((sum as u32) << 31) | (tmp >> 1);
        tmp = sum as u32;
        sum >>= 32;
    }
    sum += a.0[LEN - 1] as i64 + ((0x8000_0000u32 & mask) as i64);
    r.0[LEN - 2] = ((sum as u32) << 31) | (tmp >> 1);
    r.0[LEN - 1] = (sum >> 1) as u32;
}

/// `r = a * scalar mod p`, treating `scalar` as a single limb. Result in
/// `[0, 2p - 1]`.
pub fn mul_small(r: &mut FieldElement, a: &FieldElement, scalar: u32) {
    let mut t = [0u32; LEN + 1];
    let mut prod: u64 = 0;
    for j in 0..LEN {
        prod += a.0[j] as u64 * scalar as u64;
        t[j] = prod as u32;
        prod >>= 32;
    }
    t[LEN] = prod as u32;

    let msw = t[LEN - 1] & MSB0MASK;
    let mut prod: u64 = C * ((t[LEN - 1] >> 31) as u64);

    prod += t[LEN] as u64 * (C << 1) + t[0] as u64;
    r.0[0] = prod as u32;
    prod >>= 32;

    for i in 1..LEN - 1 {
        prod += t[i] as u64;
        r.0[i] = prod as u32;
        prod >>= 32;
    }
    r.0[LEN - 1] = (prod as u32).wrapping_add(msw);
}

/// `r = a * b mod p`, result in `[0, 2p - 1]`.
///
/// An operand-scanning multiply produces a 16-limb product in `t`, then a
/// two-step reduction folds the high 8 limbs back in (multiplied by `2c`,
/// since the high half represents `2^255 * t_hi`) before the usual
/// add-style top-limb reduction finishes the job.
pub fn multiply(r: &mut FieldElement, a: &FieldElement, b: &FieldElement) {
    let t = product(a, b);
    reduce_product(r, &t);
}

/// `r = a^2 mod p`, result in `[0, 2p - 1]`.
///
/// Like [`multiply`], but the nested loop only computes cross terms
/// `a[j] * a[i]` for `j > i` once, then a doubling pass folds those in
/// alongside the (un-doubled) diagonal squares `a[i]^2`.
pub fn square(r: &mut FieldElement, a: &FieldElement) {
    let mut t = [0u32; 2 * LEN];

    t[0] = 0;
    let mut prod: u64 = 0;
    for j in 1..LEN {
        prod += a.0[j] as u64 * a.0[0] as u64;
        t[j] = prod as u32;
        prod >>= 32;
    }
    t[LEN] = prod as u32;

    for i in 1..LEN {
        let mut prod: u64 = 0;
        for j in i + 1..LEN {
            prod += a.0[j] as u64 * a.0[i] as u64 + t[i + j] as u64;
            t[i + j] = prod as u32;
            prod >>= 32;
        }
        t[i + LEN] = prod as u32;
    }

    let mut sum: u64 = 0;
    for i in 0..LEN {
        let prod = a.0[i] as u64 * a.0[i] as u64;
        sum += prod as u32 as u64;
        sum += t[2 * i] as u64 + t[2 * i] as u64;
        t[2 * i] = sum as u32;
        sum >>= 32;
        sum += (prod >> 32) as u32 as u64;
        sum += t[2 * i + 1] as u64 + t[2 * i + 1] as u64;
        t[2 * i + 1] = sum as u32;
        sum >>= 32;
    }

    reduce_product(r, &t);
}

/// The plain operand-scanning multiply, peeling the first outer iteration
/// to avoid zero-initializing `t`. Shared by [`multiply`].
fn product(a: &FieldElement, b: &FieldElement) -> [u32; 2 * LEN] {
    let mut t = [0u32; 2 * LEN];

    let mut prod: u64 = 0;
    for j in 0..LEN {
        prod += a.0[j] as u64 * b.0[0] as u64;
        t[j] = prod as u32;
        prod >>= 32;
    }
    t[LEN] = prod as u32;

    for i in 1..LEN {
        let mut prod: u64 = 0;
        for j in 0..LEN {
            prod += a.0[j] as u64 * b.0[i] as u64 + t[i + j] as u64;
            t[i + j] = prod as u32;
            prod >>= 32;
        }
        t[i + LEN] = prod as u32;
    }

    t
}

/// Reduces a 16-limb product `t` (`t = a * b`, `a, b < 2^256`) modulo `p`,
/// leaving the result in `[0, 2p - 1]`. Shared by [`multiply`] and
/// [`square`].
fn reduce_product(r: &mut FieldElement, t: &[u32; 2 * LEN]) {
    let mut low = [0u32; LEN];
    let mut prod: u64 = 0;
    for i in 0..LEN - 1 {
        prod += t[i + LEN] as u64 * (C << 1) + t[i] as u64;
        low[i] = prod as u32;
        prod >>= 32;
    }
    prod += t[2 * LEN - 1] as u64 * (C << 1) + t[LEN - 1] as u64;
    // prod fits in 2*32 - 1 bits here.

    let msw = (prod as u32) & MSB0MASK;
    let mut prod: u64 = C * (prod >> 31);
    for i in 0..LEN - 1 {
        prod += low[i] as u64;
        r.0[i] = prod as u32;
        prod >>= 32;
    }
    r.0[LEN - 1] = msw.wrapping_add(prod as u32);
}
