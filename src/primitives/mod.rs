//! Low-level arithmetic primitives: multi-precision integers, GF(p)
//! arithmetic, and the curve-point boundary type built on top of them.

pub mod fe25519;
pub mod mpi;
pub mod point;
