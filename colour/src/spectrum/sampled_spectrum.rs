use numeric::Number;
use tracing::trace;

use crate::{
    cie::{self, ReferenceCurves},
    SpectrumError,
};

use super::{xyz_to_rgb, CoefficientSpectrum, TabulatedSpectrum};

/// uniformly sampled spectrum, bin i holds the average intensity over
/// `[wavelength(i), wavelength(i + 1))`
pub type SampledSpectrum<T> = CoefficientSpectrum<60, T>;

impl<T: Number> SampledSpectrum<T> {
    /// Starting wavelength
    pub const START: usize = 400;

    /// Ending wavelength
    pub const END: usize = 700;

    /// Lower edge of bin `idx`, `wavelength(SAMPLE_COUNT)` is [`Self::END`].
    /// Integer wavelengths are exact for every bin edge.
    pub fn wavelength(idx: usize) -> T {
        T::cast(Self::START as i64)
            + T::cast(((Self::END - Self::START) * idx) as i64) / T::cast(Self::SAMPLE_COUNT as i64)
    }

    /// Convert a list of (wavelength, value) samples into a uniform spectrum.
    /// Wavelengths must be strictly increasing.
    pub fn from_sampled(lambda: &[T], value: &[T]) -> Result<Self, SpectrumError> {
        let tabulated = TabulatedSpectrum::new(lambda, value)?;
        Ok(Self::from_tabulated(&tabulated))
    }

    /// Same as [`Self::from_sampled`], but sorts the samples by wavelength
    /// first.  Repeated wavelengths are still an error.
    pub fn from_unsorted_samples(lambda: &[T], value: &[T]) -> Result<Self, SpectrumError> {
        if lambda.len() != value.len() {
            return Err(SpectrumError::LengthMismatch {
                lambda: lambda.len(),
                value: value.len(),
            });
        }

        let mut data: Vec<_> = lambda.iter().copied().zip(value.iter().copied()).collect();
        data.sort_unstable_by(|a, b| a.0.order(&b.0));
        let (lambda, value): (Vec<_>, Vec<_>) = data.into_iter().unzip();

        Self::from_sampled(&lambda, &value)
    }

    /// Resample an already validated spectrum onto the fixed bins
    pub fn from_tabulated(tabulated: &TabulatedSpectrum<T>) -> Self {
        trace!(samples = tabulated.len(), "resampling tabulated spectrum");

        let mut spectrum = Self::default();
        for idx in 0..Self::SAMPLE_COUNT {
            // bin edges are always increasing, so the interval is never empty
            spectrum[idx] =
                tabulated.average_unchecked(Self::wavelength(idx), Self::wavelength(idx + 1));
        }

        spectrum
    }

    /// Average a list of (wavelength, value) samples over `[start, end]`,
    /// see [`TabulatedSpectrum::average`]
    pub fn average_samples(
        lambda: &[T],
        value: &[T],
        start: T,
        end: T,
    ) -> Result<T, SpectrumError> {
        TabulatedSpectrum::new(lambda, value)?.average(start, end)
    }

    /// Calculate the XYZ color coefficients [x, y, z] for this spectrum
    pub fn to_xyz(&self) -> [T; 3] {
        self.xyz_against(cie::x(), cie::y(), cie::z(), cie::y_integral())
    }

    /// Calculate the XYZ coefficients against a given set of matching curves
    pub fn to_xyz_with(&self, curves: &ReferenceCurves) -> [T; 3] {
        self.xyz_against(&curves.x, &curves.y, &curves.z, curves.y_integral)
    }

    fn xyz_against(
        &self,
        x: &SampledSpectrum<f64>,
        y: &SampledSpectrum<f64>,
        z: &SampledSpectrum<f64>,
        y_integral: f64,
    ) -> [T; 3] {
        let result = [
            self.dot(&x.cast()),
            self.dot(&y.cast()),
            self.dot(&z.cast()),
        ];

        result.map(|a| a * Self::xyz_scale(y_integral))
    }

    /// Calculate the XYZ luminance of the spectrum
    pub fn y(&self) -> T {
        self.dot(&cie::y().cast()) * Self::xyz_scale(cie::y_integral())
    }

    /// Convert this spectrum into a linear RGB colour
    pub fn to_rgb(&self) -> [T; 3] {
        xyz_to_rgb(self.to_xyz())
    }

    /// Width of a bin over the integral of ȳ, turns a sum over bins into the
    /// normalised XYZ integral
    fn xyz_scale(y_integral: f64) -> T {
        T::cast((Self::END - Self::START) as i64)
            / (T::cast(y_integral) * T::cast(Self::SAMPLE_COUNT as i64))
    }
}
