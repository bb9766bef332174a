//! Crate-wide error codes.
//!
//! Most modules in the Nebula ecosystem define their own `enum` error type
//! (see e.g. `Argon2ParamError`), since each module's failure modes are
//! independent of one another. The arithmetic core is different: its error
//! taxonomy is shared with layers this crate does not implement (curve-point
//! decoding, scalar validation, test-vector I/O), and callers are expected to
//! OR several codes together when more than one check fails. A plain `enum`
//! can't represent that, so `CoreError` is a bitmask newtype instead.
//!
//! This crate only ever produces [`CoreError::NONE`] and
//! [`CoreError::INVERSION_OF_ZERO`] (from [`crate::primitives::fe25519::invert`])
//! plus [`CoreError::HEX_STRING_FORMAT`] and [`CoreError::TEST_VECTOR_FILE_ERROR`]
//! (from the hex and test-vector helpers). The other codes are reserved for
//! collaborators — curve-point decoding and scalar validation — that live
//! outside this crate's scope.

use core::ops::{BitOr, BitOrAssign};

/// A bitmask of zero or more error conditions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CoreError(pub u32);

impl CoreError {
    /// No error.
    pub const NONE: Self = Self(0);
    /// A hex string did not match the `0x`-prefixed big-endian format.
    pub const HEX_STRING_FORMAT: Self = Self(1);
    /// Attempted to invert the zero element.
    pub const INVERSION_OF_ZERO: Self = Self(2);
    /// A Montgomery (X25519) point encoding was malformed. Reserved for the
    /// curve layer; never produced by this crate.
    pub const MALFORMED_MONTGOMERY_POINT: Self = Self(4);
    /// A twisted-Edwards (Ed25519) point encoding was malformed. Reserved
    /// for the curve layer; never produced by this crate.
    pub const MALFORMED_EDWARDS_POINT: Self = Self(8);
    /// A scalar was out of range or otherwise invalid. Reserved for the
    /// curve layer; never produced by this crate.
    pub const BAD_SCALAR: Self = Self(16);
    /// A test-vector file could not be read or parsed.
    pub const TEST_VECTOR_FILE_ERROR: Self = Self(32);

    /// Returns `true` if no bit is set.
    pub fn is_ok(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if `other`'s bits are a subset of `self`'s.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for CoreError {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for CoreError {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
