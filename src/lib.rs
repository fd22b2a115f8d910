#![feature(portable_simd)]

//! Generic fixed-size vectors for graphics and math code.
//!
//! [`Vector<T, D>`](Vector) holds `D` components of `T` and picks its
//! backing storage at compile time: a `std::simd` register when the
//! toolchain has one for the combination, a plain `[T; D]` otherwise. The
//! choice is observable through [`Vector::ACCELERATED`] but never changes
//! what an operation computes.
//!
//! ```
//! use vecn::FVec;
//!
//! let a = FVec::<3>::new([1.0, 2.0, 2.0]);
//! let b = a + FVec::<3>::splat(1.0);
//! assert_eq!(b.to_array(), [2.0, 3.0, 3.0]);
//! assert_eq!(a.length(), 3.0);
//! assert_eq!(a.cross(b).unwrap().to_array(), [0.0, 1.0, -1.0]);
//! ```

pub mod error;
mod geometry;
mod ops;
pub mod scalar;
pub mod storage;
pub mod vector;

pub use error::{Result, UnsupportedOperation};
pub use scalar::{Num, Scalar};
pub use storage::Repr;
pub use vector::{AtLeast, Dim, Vector};

/// Boolean-element vector of dimension `D`.
pub type BVec<const D: usize> = Vector<bool, D>;
/// Signed-integer vector of dimension `D`.
pub type IVec<const D: usize> = Vector<i32, D>;
/// Unsigned-integer vector of dimension `D`.
pub type UVec<const D: usize> = Vector<u32, D>;
/// Single-precision float vector of dimension `D`.
pub type FVec<const D: usize> = Vector<f32, D>;
/// Double-precision float vector of dimension `D`.
pub type DVec<const D: usize> = Vector<f64, D>;

/// 2-dimensional vector of any element type.
pub type Vec2<T> = Vector<T, 2>;
/// 3-dimensional vector of any element type.
pub type Vec3<T> = Vector<T, 3>;
/// 4-dimensional vector of any element type.
pub type Vec4<T> = Vector<T, 4>;
