use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use numeric::Number;

/// Fixed length list of spectral intensities, one per wavelength bin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientSpectrum<const N: usize, T: Number> {
    pub(crate) samples: [T; N],
}

impl<const N: usize, T: Number> CoefficientSpectrum<N, T> {
    pub const SAMPLE_COUNT: usize = N;

    /// Create a new spectrum with a given value at all points
    pub fn new(base: T) -> Self {
        assert!(!base.is_nan());
        Self { samples: [base; N] }
    }

    /// Checked read of one sample, None if the index is past the end
    pub fn get(&self, index: usize) -> Option<T> {
        self.samples.get(index).copied()
    }

    /// All of the samples, in wavelength order
    pub fn samples(&self) -> &[T; N] {
        &self.samples
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.samples.iter().copied()
    }

    /// Is this spectrum zero everywhere?
    pub fn is_black(&self) -> bool {
        self.samples == [T::ZERO; N]
    }

    /// Linear interpolate between two spectrums
    pub fn lerp(self, other: Self, t: T) -> Self {
        self * (T::ONE - t) + other * t
    }

    /// Clamp the values in the spectrum between two values
    pub fn clamp(mut self, low: T, high: T) -> Self {
        for lhs in &mut self.samples {
            *lhs = Number::clamp(lhs, low, high);
        }
        self
    }

    /// Are any of the values stored NaN?
    pub fn has_nan(&self) -> bool {
        self.samples.iter().any(Number::is_nan)
    }

    /// Sum of products of matching samples
    pub fn dot(&self, other: &Self) -> T {
        self.iter().zip(other.iter()).map(|(a, b)| a * b).sum()
    }

    /// Cast all the numbers in the spectrum to another number type
    pub fn cast<U: Number>(&self) -> CoefficientSpectrum<N, U> {
        CoefficientSpectrum {
            samples: self.samples.map(|x| U::cast(x)),
        }
    }
}

impl<const N: usize, T: Number> Default for CoefficientSpectrum<N, T> {
    fn default() -> Self {
        Self {
            samples: [T::ZERO; N],
        }
    }
}

/// Implement an element-wise operator against another spectrum and a
/// per-sample scalar operator, plus their assigning versions
macro_rules! SpectrumOp {
    ($trait:ident, $fn:ident, $assign_trait:ident, $assign_fn:ident, $check_nan:literal) => {
        impl<const N: usize, T: Number> $trait<CoefficientSpectrum<N, T>>
            for CoefficientSpectrum<N, T>
        {
            type Output = Self;

            fn $fn(mut self, rhs: CoefficientSpectrum<N, T>) -> Self::Output {
                for (lhs, rhs) in self.samples.iter_mut().zip(rhs.samples) {
                    *lhs = $trait::$fn(*lhs, rhs);
                }
                if $check_nan {
                    assert!(!self.has_nan());
                }
                self
            }
        }

        impl<const N: usize, T: Number> $trait<T> for CoefficientSpectrum<N, T> {
            type Output = Self;

            fn $fn(mut self, rhs: T) -> Self::Output {
                for lhs in &mut self.samples {
                    *lhs = $trait::$fn(*lhs, rhs);
                }
                if $check_nan {
                    assert!(!self.has_nan());
                }
                self
            }
        }

        impl<const N: usize, T: Number> $assign_trait<CoefficientSpectrum<N, T>>
            for CoefficientSpectrum<N, T>
        {
            fn $assign_fn(&mut self, rhs: CoefficientSpectrum<N, T>) {
                *self = $trait::$fn(*self, rhs);
            }
        }

        impl<const N: usize, T: Number> $assign_trait<T> for CoefficientSpectrum<N, T> {
            fn $assign_fn(&mut self, rhs: T) {
                *self = $trait::$fn(*self, rhs);
            }
        }
    };
}

SpectrumOp!(Add, add, AddAssign, add_assign, false);
SpectrumOp!(Sub, sub, SubAssign, sub_assign, false);
SpectrumOp!(Mul, mul, MulAssign, mul_assign, false);
SpectrumOp!(Div, div, DivAssign, div_assign, true);

impl<const N: usize, T: Number> Neg for CoefficientSpectrum<N, T> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        for lhs in &mut self.samples {
            *lhs = -*lhs;
        }
        self
    }
}

// Out of range indices panic rather than wrap or clamp.
impl<const N: usize, T: Number> Index<usize> for CoefficientSpectrum<N, T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.samples[index]
    }
}

impl<const N: usize, T: Number> IndexMut<usize> for CoefficientSpectrum<N, T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.samples[index]
    }
}

/// Convert an XYZ colour to linear RGB, no gamma and no clamping
pub fn xyz_to_rgb<T: Number>([x, y, z]: [T; 3]) -> [T; 3] {
    [
        T::cast(3.240479_f64) * x - T::cast(1.537150_f64) * y - T::cast(0.498535_f64) * z,
        T::cast(-0.969256_f64) * x + T::cast(1.875991_f64) * y + T::cast(0.041556_f64) * z,
        T::cast(0.055648_f64) * x - T::cast(0.204043_f64) * y + T::cast(1.057311_f64) * z,
    ]
}

/// Convert a linear RGB colour to an XYZ colour
pub fn rgb_to_xyz<T: Number>([r, g, b]: [T; 3]) -> [T; 3] {
    [
        T::cast(0.412453_f64) * r + T::cast(0.357580_f64) * g + T::cast(0.180423_f64) * b,
        T::cast(0.212671_f64) * r + T::cast(0.715160_f64) * g + T::cast(0.072169_f64) * b,
        T::cast(0.019334_f64) * r + T::cast(0.119193_f64) * g + T::cast(0.950227_f64) * b,
    ]
}
