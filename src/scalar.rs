use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

/// Any type usable as a vector component.
pub trait Scalar: Copy + Default + PartialEq + Debug + Send + Sync + 'static {}

impl Scalar for bool {}

/// Numeric components: what arithmetic and geometry need on top of
/// [`Scalar`].
pub trait Num:
    Scalar + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Div<Output = Self>
{
    /// Widened accumulator for sums of products, so integral dot products
    /// and squared lengths stay exact until the final narrowing.
    type Acc: Copy + Default + Add<Output = Self::Acc> + Mul<Output = Self::Acc>;

    fn widen(self) -> Self::Acc;

    /// Narrows an accumulated value back to the element type. Overflows for
    /// integral types with large enough components; not guarded here.
    fn narrow(acc: Self::Acc) -> Self;

    fn to_f64(self) -> f64;

    /// Divides one component by a Euclidean length.
    fn div_len(self, len: f64) -> Self;
}

macro_rules! int_scalar {
    ($($t:ty => $acc:ty),+ $(,)?) => { $(
        impl Scalar for $t {}

        impl Num for $t {
            type Acc = $acc;

            #[inline]
            fn widen(self) -> $acc {
                self as $acc
            }

            #[inline]
            fn narrow(acc: $acc) -> Self {
                acc as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn div_len(self, len: f64) -> Self {
                // Integer components divide by the length rounded up to a
                // whole number, not by the exact fractional length.
                self / (len.ceil() as $t)
            }
        }
    )+ };
}

int_scalar!(
    i8 => i64, i16 => i64, i32 => i64, i64 => i64,
    u8 => u64, u16 => u64, u32 => u64, u64 => u64,
);

macro_rules! float_scalar {
    ($($t:ty),+ $(,)?) => { $(
        impl Scalar for $t {}

        impl Num for $t {
            type Acc = f64;

            #[inline]
            fn widen(self) -> f64 {
                self as f64
            }

            #[inline]
            fn narrow(acc: f64) -> Self {
                acc as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn div_len(self, len: f64) -> Self {
                (self as f64 / len) as $t
            }
        }
    )+ };
}

float_scalar!(f32, f64);

#[cfg(test)]
mod tests {
    use super::Num;

    #[test]
    fn integer_divisor_is_rounded_up() {
        assert_eq!(7i32.div_len(6.2), 1);
        assert_eq!(10u32.div_len(10.0), 1);
        assert_eq!((-9i32).div_len(2.5), -3);
    }

    #[test]
    fn float_divisor_is_exact() {
        assert!((3.0f32.div_len(5.0) - 0.6).abs() < 1e-6);
        assert!((1.0f64.div_len(2.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn widening_keeps_integer_products_exact() {
        // 60_000^2 overflows i32 but not the i64 accumulator.
        let p = 60_000i32.widen() * 60_000i32.widen();
        assert_eq!(p, 3_600_000_000i64);
    }
}
