//! Hex encoding for field elements and raw MPI limb arrays.
//!
//! Grounded in Micro25519's `mpi_from_hex`/`mpi_to_hex`, which parse a
//! `0x`-prefixed big-endian hex string into little-endian 32-bit limbs (and
//! back). This is test-fixture and debugging plumbing, not part of the
//! arithmetic core itself — the reference's own comments describe these as
//! print/parse helpers, not primitives.

use super::LEN;
use crate::error::CoreError;

/// Parses a `0x`-prefixed, big-endian hex string into `LEN` little-endian
/// 32-bit limbs.
///
/// Accepts between 1 and `8 * LEN` hex digits after the prefix; a shorter
/// string is zero-extended at the most-significant end, matching
/// `mpi_from_hex`'s behavior of stopping once `len` limbs are filled.
pub fn parse(hexstr: &str) -> Result<[u32; LEN], CoreError> {
    let digits = hexstr
        .strip_prefix("0x")
        .or_else(|| hexstr.strip_prefix("0X"))
        .ok_or(CoreError::HEX_STRING_FORMAT)?;

    if digits.is_empty() || digits.len() > 8 * LEN || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CoreError::HEX_STRING_FORMAT);
    }

    let mut limbs = [0u32; LEN];
    let bytes = digits.as_bytes();
    let mut end = bytes.len();
    let mut i = 0;

    while end > 0 && i < LEN {
        let start = end.saturating_sub(8);
        let chunk = core::str::from_utf8(&bytes[start..end]).unwrap();
        limbs[i] = u32::from_str_radix(chunk, 16).map_err(|_| CoreError::HEX_STRING_FORMAT)?;
        end = start;
        i += 1;
    }

    Ok(limbs)
}

/// Formats `LEN` little-endian 32-bit limbs as a `0x`-prefixed, big-endian
/// hex string, most-significant limb first, each limb zero-padded to 8
/// uppercase digits.
pub fn format(limbs: &[u32; LEN]) -> String {
    let mut out = String::with_capacity(2 + 8 * LEN);
    out.push_str("0x");
    for &limb in limbs.iter().rev() {
        out.push_str(&format!("{limb:08X}"));
    }
    out
}
