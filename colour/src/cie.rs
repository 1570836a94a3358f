//! CIE 1931 colour matching curves resampled onto the [`SampledSpectrum`]
//! bins.
//!
//! The curves built from the embedded table are computed on first use and
//! then shared for the rest of the process; [`x`], [`y`], [`z`] and
//! [`y_integral`] are each initialised at most once, even when first called
//! from several threads at the same time.  [`ReferenceCurves`] builds the
//! same data from any other table.

use data::cie::{CIE_LAMBDA, CIE_X, CIE_Y, CIE_Z};
use once_cell::sync::Lazy;
use tracing::debug;

use crate::{SampledSpectrum, SpectrumError, TabulatedSpectrum};

/// Tabulated x̄, ȳ and z̄ curves sharing one list of wavelengths
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchingFunctions<'a> {
    x: TabulatedSpectrum<'a, f64>,
    y: TabulatedSpectrum<'a, f64>,
    z: TabulatedSpectrum<'a, f64>,
}

impl<'a> MatchingFunctions<'a> {
    /// Validate a colour matching table, it needs at least two rows
    pub fn new(
        lambda: &'a [f64],
        x: &'a [f64],
        y: &'a [f64],
        z: &'a [f64],
    ) -> Result<Self, SpectrumError> {
        if lambda.len() < 2 {
            return Err(SpectrumError::DegenerateDataset { len: lambda.len() });
        }

        Ok(Self {
            x: TabulatedSpectrum::new(lambda, x)?,
            y: TabulatedSpectrum::new(lambda, y)?,
            z: TabulatedSpectrum::new(lambda, z)?,
        })
    }

    pub fn x_bar(&self) -> TabulatedSpectrum<'a, f64> {
        self.x
    }

    pub fn y_bar(&self) -> TabulatedSpectrum<'a, f64> {
        self.y
    }

    pub fn z_bar(&self) -> TabulatedSpectrum<'a, f64> {
        self.z
    }

    /// Sum of the raw ȳ values, before any resampling
    pub fn y_integral(&self) -> f64 {
        self.y.value().iter().sum()
    }
}

impl MatchingFunctions<'static> {
    /// The table compiled into the binary, 360nm to 830nm at 1nm steps
    pub fn cie_1931() -> Result<Self, SpectrumError> {
        MatchingFunctions::new(CIE_LAMBDA, CIE_X, CIE_Y, CIE_Z)
    }
}

/// Matching curves resampled onto the spectrum bins, with the normalisation
/// constant used when integrating against them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceCurves {
    pub x: SampledSpectrum<f64>,
    pub y: SampledSpectrum<f64>,
    pub z: SampledSpectrum<f64>,
    pub y_integral: f64,
}

impl ReferenceCurves {
    pub fn new(table: &MatchingFunctions) -> Result<Self, SpectrumError> {
        let y_integral = table.y_integral();
        if !(y_integral.is_finite() && y_integral > 0.0) {
            return Err(SpectrumError::ZeroIntegral);
        }

        Ok(Self {
            x: SampledSpectrum::from_tabulated(&table.x_bar()),
            y: SampledSpectrum::from_tabulated(&table.y_bar()),
            z: SampledSpectrum::from_tabulated(&table.z_bar()),
            y_integral,
        })
    }
}

fn embedded_table() -> MatchingFunctions<'static> {
    match MatchingFunctions::cie_1931() {
        Ok(table) => table,
        Err(e) => panic!("Embedded CIE 1931 table is invalid: {}", e),
    }
}

fn resample_embedded(
    name: &str,
    curve: fn(&MatchingFunctions<'static>) -> TabulatedSpectrum<'static, f64>,
) -> SampledSpectrum<f64> {
    debug!(curve = name, "computing cached CIE matching curve");
    SampledSpectrum::from_tabulated(&curve(&embedded_table()))
}

static X: Lazy<SampledSpectrum<f64>> =
    Lazy::new(|| resample_embedded("x", MatchingFunctions::x_bar));
static Y: Lazy<SampledSpectrum<f64>> =
    Lazy::new(|| resample_embedded("y", MatchingFunctions::y_bar));
static Z: Lazy<SampledSpectrum<f64>> =
    Lazy::new(|| resample_embedded("z", MatchingFunctions::z_bar));

static Y_INTEGRAL: Lazy<f64> = Lazy::new(|| {
    let integral = embedded_table().y_integral();
    debug!(integral, "computed CIE ȳ integral");
    assert!(integral > 0.0, "Embedded CIE 1931 ȳ curve integrates to zero");
    integral
});

/// x̄ resampled onto the spectrum bins
pub fn x() -> &'static SampledSpectrum<f64> {
    &X
}

/// ȳ resampled onto the spectrum bins
pub fn y() -> &'static SampledSpectrum<f64> {
    &Y
}

/// z̄ resampled onto the spectrum bins
pub fn z() -> &'static SampledSpectrum<f64> {
    &Z
}

/// Sum of the raw ȳ table values
pub fn y_integral() -> f64 {
    *Y_INTEGRAL
}
