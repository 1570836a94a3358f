use std::{
    cmp::Ordering,
    fmt::Debug,
    iter::Sum,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// Any type that can be stored in a spectrum
pub trait Number:
    Send
    + Sync
    + Debug
    + Copy
    + Default
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign<Self>
    + SubAssign<Self>
    + MulAssign<Self>
    + DivAssign<Self>
    + Sum<Self>
    + 'static
{
    /// The Zero value for the type
    const ZERO: Self;

    /// The One value for the type
    const ONE: Self;

    /// One half, zero for integers
    const HALF: Self;

    /// Is this type a NaN value, always false if type is not floating
    fn is_nan(&self) -> bool;

    /// Is this number not infinity or NaN
    fn is_finite(&self) -> bool;

    /// Ordering of two values
    fn order(&self, rhs: &Self) -> Ordering;

    /// Cast to self
    fn cast<T: Number>(x: T) -> Self;

    /// Cast to double
    fn f64(&self) -> f64;

    /// Cast to float
    fn f32(&self) -> f32;

    /// Cast to integer
    fn i32(&self) -> i32;

    /// Cast to 64 bit integer
    fn i64(&self) -> i64;

    /// Clamp the value between two other values
    fn clamp(&self, min: Self, max: Self) -> Self;

    /// Largest of the input and self
    #[inline]
    fn max(&self, rhs: Self) -> Self {
        if *self > rhs {
            *self
        } else {
            rhs
        }
    }

    /// Smallest of the input and self
    #[inline]
    fn min(&self, rhs: Self) -> Self {
        if *self < rhs {
            *self
        } else {
            rhs
        }
    }
}

macro_rules! NumberFloat {
    (($type:ty, $name:ident)) => {
        impl Number for $type {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const HALF: Self = 0.5;

            #[inline]
            fn is_nan(&self) -> bool {
                <$type>::is_nan(*self)
            }

            #[inline]
            fn is_finite(&self) -> bool {
                <$type>::is_finite(*self)
            }

            #[inline]
            fn order(&self, rhs: &Self) -> Ordering {
                self.total_cmp(rhs)
            }

            #[inline]
            fn cast<T: Number>(num: T) -> Self {
                num.$name()
            }

            #[inline]
            fn f64(&self) -> f64 {
                *self as _
            }

            #[inline]
            fn f32(&self) -> f32 {
                *self as _
            }

            #[inline]
            fn i32(&self) -> i32 {
                *self as _
            }

            #[inline]
            fn i64(&self) -> i64 {
                *self as _
            }

            #[inline]
            fn clamp(&self, min: Self, max: Self) -> Self {
                <$type>::clamp(*self, min, max)
            }
        }
    };
    (($type:ty, $name:ident), $(($other_type:ty, $other_name:ident)),+ $(,)?) => {
        NumberFloat!(($type, $name)); $(NumberFloat!(($other_type, $other_name));)+
    };
}

NumberFloat!((f32, f32), (f64, f64));

macro_rules! NumberInteger {
    (($type:ty, $name:ident)) => {
        impl Number for $type {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const HALF: Self = 0;

            #[inline]
            fn is_nan(&self) -> bool {
                false
            }

            #[inline]
            fn is_finite(&self) -> bool {
                true
            }

            #[inline]
            fn order(&self, rhs: &Self) -> Ordering {
                self.cmp(rhs)
            }

            #[inline]
            fn cast<T: Number>(num: T) -> Self {
                num.$name()
            }

            #[inline]
            fn f64(&self) -> f64 {
                *self as _
            }

            #[inline]
            fn f32(&self) -> f32 {
                *self as _
            }

            #[inline]
            fn i32(&self) -> i32 {
                *self as _
            }

            #[inline]
            fn i64(&self) -> i64 {
                *self as _
            }

            #[inline]
            fn clamp(&self, min: Self, max: Self) -> Self {
                <$type as Ord>::clamp(*self, min, max)
            }
        }
    };
    (($type:ty, $name:ident), $(($other_type:ty, $other_name:ident)),+ $(,)?) => {
        NumberInteger!(($type, $name)); $(NumberInteger!(($other_type, $other_name));)+
    };
}

NumberInteger!((i32, i32), (i64, i64));
