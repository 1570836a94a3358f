use numeric::{find_interval, lerp, Number};

use crate::SpectrumError;

/// Spectrum given as a list of (wavelength, value) samples with piecewise
/// linear interpolation between them.
///
/// Construction checks that both lists are the same non-zero length, that
/// every entry is finite and that the wavelengths are strictly increasing, so
/// the rest of this type can rely on that.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabulatedSpectrum<'a, T: Number> {
    lambda: &'a [T],
    value: &'a [T],
}

impl<'a, T: Number> TabulatedSpectrum<'a, T> {
    /// Validate a list of wavelengths (nm) and their values
    pub fn new(lambda: &'a [T], value: &'a [T]) -> Result<Self, SpectrumError> {
        if lambda.len() != value.len() {
            return Err(SpectrumError::LengthMismatch {
                lambda: lambda.len(),
                value: value.len(),
            });
        }
        if lambda.is_empty() {
            return Err(SpectrumError::Empty);
        }

        if let Some(index) = lambda
            .iter()
            .zip(value)
            .position(|(l, v)| !l.is_finite() || !v.is_finite())
        {
            return Err(SpectrumError::NonFinite { index });
        }

        if let Some(index) = lambda.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(SpectrumError::NotIncreasing { index: index + 1 });
        }

        Ok(Self { lambda, value })
    }

    /// Number of samples, never zero
    pub fn len(&self) -> usize {
        self.lambda.len()
    }

    /// Always false, construction rejects empty tables
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn lambda(&self) -> &'a [T] {
        self.lambda
    }

    pub fn value(&self) -> &'a [T] {
        self.value
    }

    /// Average value of the spectrum over the wavelengths `[start, end]`,
    /// integrating the piecewise linear function with the trapezoid rule.
    ///
    /// A single sample is treated as a constant spectrum.  Intervals entirely
    /// below or above the table take the value of the nearest sample, however
    /// the parts of a partially overlapping interval that lie outside the
    /// table contribute nothing to the average.
    pub fn average(&self, start: T, end: T) -> Result<T, SpectrumError> {
        if !start.is_finite() || !end.is_finite() || end <= start {
            return Err(SpectrumError::EmptyInterval {
                start: start.f64(),
                end: end.f64(),
            });
        }

        Ok(self.average_unchecked(start, end))
    }

    /// [`Self::average`] without checking the interval, `start < end` must hold
    pub(crate) fn average_unchecked(&self, start: T, end: T) -> T {
        let (lambda, value) = (self.lambda, self.value);
        let n = lambda.len();

        if n == 1 || end <= lambda[0] {
            return value[0];
        }
        if start >= lambda[n - 1] {
            return value[n - 1];
        }

        let interp = |w: T, i: usize| {
            lerp(
                (w - lambda[i]) / (lambda[i + 1] - lambda[i]),
                value[i],
                value[i + 1],
            )
        };

        // first segment whose upper end reaches the start of the interval
        let mut i = find_interval(n, |idx| lambda[idx] < start);

        let mut sum = T::ZERO;
        while i + 1 < n && end >= lambda[i] {
            let segment_start = start.max(lambda[i]);
            let segment_end = end.min(lambda[i + 1]);

            sum += T::HALF
                * (interp(segment_start, i) + interp(segment_end, i))
                * (segment_end - segment_start);
            i += 1;
        }

        sum / (end - start)
    }
}
