//! Arithmetic in the prime field GF(2²⁵⁵ − 19), the substrate beneath
//! Curve25519 and Ed25519.
//!
//! This crate provides the finite-field layer only: multi-precision integer
//! (MPI) arithmetic, the elementary and composite GF(p) operations built on
//! top of it, and the small boundary types (error codes, curve-point limb
//! routing, hex I/O) that let higher layers — Montgomery ladders,
//! twisted-Edwards point addition, scalar validation — build on a common
//! foundation without this crate needing to know what a curve point means.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. Every
//! arithmetic primitive is dependency-free, allocation-free, and explicit
//! about the range of values it produces.
//!
//! # Module overview
//!
//! - `primitives::mpi`
//!   Multi-precision integer arithmetic over little-endian 32-bit limb
//!   slices, generic over length. The substrate [`primitives::fe25519`] and
//!   field inversion are built on.
//!
//! - `primitives::fe25519`
//!   Elements of GF(p), stored as eight 32-bit limbs. Addition, subtraction,
//!   multiplication, squaring, halving, conditional negation, full
//!   reduction, equality, and inversion, all grounded in the pseudo-Mersenne
//!   single-sweep reduction trick for `p = 2^255 - 19`. Values are kept in a
//!   redundant `[0, 2p - 1]` representation between operations; callers
//!   reduce explicitly when a canonical value is needed.
//!
//! - `primitives::point`
//!   A thin, uninterpreted boundary type that routes a flat limb buffer to a
//!   fixed number of coordinates, for collaborating curve-arithmetic layers
//!   this crate does not implement.
//!
//! - `error`
//!   A single OR-combinable error-code type shared across this crate and
//!   the curve-arithmetic layers above it.
//!
//! # Design goals
//!
//! - No heap allocations in arithmetic primitives
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//! - Variable-time operations documented as such, with the caller-side
//!   mitigation (multiplicative blinding) named rather than silently applied
//!
//! This crate is not intended to replace full-featured, externally audited
//! cryptographic libraries, but to serve as a small, controlled foundation
//! for higher cryptographic layers built on Curve25519/Ed25519 arithmetic.

pub mod error;
pub mod primitives;
