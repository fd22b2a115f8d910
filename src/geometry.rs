//! Euclidean geometry over numeric vectors.

use crate::error::{Result, UnsupportedOperation};
use crate::scalar::Num;
use crate::storage::Repr;
use crate::vector::Vector;

impl<T: Num + Repr<D>, const D: usize> Vector<T, D> {
    /// Euclidean length, accumulated in `f64` regardless of the element
    /// type.
    pub fn length(&self) -> f64 {
        let mut sum = 0.0;
        for &x in self.as_slice() {
            let x = x.to_f64();
            sum += x * x;
        }
        sum.sqrt()
    }

    /// Squared length in the element type. Accumulates in [`Num::Acc`] and
    /// narrows at the end, so the narrowing can still overflow for huge
    /// integral components.
    pub fn length2(&self) -> T {
        let mut sum = T::Acc::default();
        for &x in self.as_slice() {
            sum = sum + x.widen() * x.widen();
        }
        T::narrow(sum)
    }

    /// Dot product with `that`, accumulated in [`Num::Acc`] and narrowed to
    /// the element type.
    pub fn dot(self, that: Self) -> T {
        let mut sum = T::Acc::default();
        for (&a, &b) in self.as_slice().iter().zip(that.as_slice()) {
            sum = sum + a.widen() * b.widen();
        }
        T::narrow(sum)
    }

    /// Scales `self` to unit length in place, dividing every component by
    /// [`length`](Self::length).
    ///
    /// Integral components divide by the length rounded up to a whole
    /// number; see [`Num::div_len`]. A zero-length vector divides by zero
    /// and gets whatever the element type does about that.
    pub fn normalize(&mut self) {
        let len = self.length();
        for x in self.as_mut_slice() {
            *x = x.div_len(len);
        }
    }

    /// Like [`normalize`](Self::normalize), but returns the scaled copy.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Cross product, defined for 3-dimensional vectors only. Any other
    /// dimension reports [`UnsupportedOperation`].
    pub fn cross(self, that: Self) -> Result<Self> {
        if D != 3 {
            return Err(UnsupportedOperation { op: "cross" });
        }
        let (a, b) = (self.as_slice(), that.as_slice());
        Ok(Self::from_slice(&[
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]))
    }
}
