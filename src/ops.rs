//! The arithmetic operator family.
//!
//! One macro template per operator shape; the operator itself is a token
//! substituted into the template, and the work happens in the [`Repr`]
//! kernel so each representation resolves it at its own tier. Scalar
//! operands are broadcast against every component. An element type that
//! lacks the scalar operator (unary minus on an unsigned or boolean element,
//! say) fails the bound here and the vector operator does not exist.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use crate::storage::Repr;
use crate::vector::Vector;

/// Implements a binary operator and its compound-assignment form, each in
/// vector-with-vector and vector-with-scalar (broadcast) flavors.
macro_rules! impl_binary_op {
    ($trait:ident :: $method:ident, $assign:ident :: $assign_method:ident, $kernel:ident) => {
        impl<T: Repr<D> + $trait<Output = T>, const D: usize> $trait for Vector<T, D> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self {
                    data: T::$kernel(self.data, rhs.data),
                }
            }
        }

        impl<T: Repr<D> + $trait<Output = T>, const D: usize> $trait<T> for Vector<T, D> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: T) -> Self {
                Self {
                    data: T::$kernel(self.data, T::splat(rhs)),
                }
            }
        }

        impl<T: Repr<D> + $trait<Output = T>, const D: usize> $assign for Vector<T, D> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                self.data = T::$kernel(self.data, rhs.data);
            }
        }

        impl<T: Repr<D> + $trait<Output = T>, const D: usize> $assign<T> for Vector<T, D> {
            #[inline]
            fn $assign_method(&mut self, rhs: T) {
                self.data = T::$kernel(self.data, T::splat(rhs));
            }
        }
    };
}

impl_binary_op!(Add::add, AddAssign::add_assign, vadd);
impl_binary_op!(Sub::sub, SubAssign::sub_assign, vsub);
impl_binary_op!(Mul::mul, MulAssign::mul_assign, vmul);
impl_binary_op!(Div::div, DivAssign::div_assign, vdiv);
impl_binary_op!(Rem::rem, RemAssign::rem_assign, vrem);

impl<T: Repr<D> + Neg<Output = T>, const D: usize> Neg for Vector<T, D> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            data: T::vneg(self.data),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{DVec, FVec, IVec};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn vector_with_vector() {
        let a = IVec::<4>::new([1, 2, 3, 4]);
        let b = IVec::<4>::new([10, 20, 30, 40]);
        assert_eq!((a + b).to_array(), [11, 22, 33, 44]);
        assert_eq!((b - a).to_array(), [9, 18, 27, 36]);
        assert_eq!((a * b).to_array(), [10, 40, 90, 160]);
        assert_eq!((b / a).to_array(), [10, 10, 10, 10]);
        assert_eq!((b % IVec::<4>::splat(7)).to_array(), [3, 6, 2, 5]);
    }

    #[test]
    fn vector_with_scalar_broadcasts() {
        let a = FVec::<3>::new([1.0, 2.0, 3.0]);
        assert_eq!((a + 1.0).to_array(), [2.0, 3.0, 4.0]);
        assert_eq!((a * 2.0).to_array(), [2.0, 4.0, 6.0]);
        assert_eq!((a - 1.0).to_array(), [0.0, 1.0, 2.0]);
        assert_eq!((a / 2.0).to_array(), [0.5, 1.0, 1.5]);
    }

    #[test]
    fn compound_assignment_both_forms() {
        let mut v = IVec::<4>::new([1, 2, 3, 4]);
        v += IVec::<4>::splat(10);
        assert_eq!(v.to_array(), [11, 12, 13, 14]);
        v -= 1;
        assert_eq!(v.to_array(), [10, 11, 12, 13]);
        v *= 2;
        assert_eq!(v.to_array(), [20, 22, 24, 26]);
        v /= IVec::<4>::new([2, 2, 2, 2]);
        assert_eq!(v.to_array(), [10, 11, 12, 13]);
    }

    #[test]
    fn double_negation_is_identity() {
        let v = IVec::<3>::new([1, -2, 3]);
        assert_eq!(-(-v), v);
        let f = DVec::<4>::new([0.5, -1.5, 2.5, -3.5]);
        assert_eq!(-(-f), f);
    }

    #[test]
    fn add_then_sub_round_trips_exactly_for_integers() {
        let mut rng: StdRng = SeedableRng::seed_from_u64(0xABBA);
        for _ in 0..1_000 {
            let v = IVec::<8>::new(std::array::from_fn(|_| rng.gen_range(-1_000..1_000)));
            let w = IVec::<8>::new(std::array::from_fn(|_| rng.gen_range(-1_000..1_000)));
            assert_eq!((v + w) - w, v);
        }
    }

    #[test]
    fn add_then_sub_round_trips_for_floats() {
        let mut rng: StdRng = SeedableRng::seed_from_u64(0xBEEF);
        for _ in 0..1_000 {
            let v = FVec::<8>::new(std::array::from_fn(|_| rng.gen_range(-100.0f32..100.0)));
            let w = FVec::<8>::new(std::array::from_fn(|_| rng.gen_range(-100.0f32..100.0)));
            let back = (v + w) - w;
            for i in 0..8 {
                assert!((back[i] - v[i]).abs() < 1e-3, "lane {i}: {} vs {}", back[i], v[i]);
            }
        }
    }

    #[test]
    fn results_match_across_register_and_array_widths() {
        // 4 lanes ride a register, 3 lanes ride an array; the math agrees.
        let a4 = FVec::<4>::new([1.5, -2.0, 3.25, 0.0]);
        let b4 = FVec::<4>::new([0.5, 4.0, -1.25, 2.0]);
        assert_eq!((a4 + b4).to_array(), [2.0, 2.0, 2.0, 2.0]);

        let a3 = FVec::<3>::new([1.5, -2.0, 3.25]);
        let b3 = FVec::<3>::new([0.5, 4.0, -1.25]);
        assert_eq!((a3 + b3).to_array(), [2.0, 2.0, 2.0]);
    }
}
