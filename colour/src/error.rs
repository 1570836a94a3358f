use thiserror::Error;

/// Errors from building or resampling a spectrum
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SpectrumError {
    #[error("Spectrum has no samples")]
    Empty,

    #[error("Wavelength and value lists differ in length ({lambda} wavelengths, {value} values)")]
    LengthMismatch { lambda: usize, value: usize },

    #[error("Wavelengths must be strictly increasing, sample {index} is not")]
    NotIncreasing { index: usize },

    #[error("Sample {index} is not a finite number")]
    NonFinite { index: usize },

    #[error("Cannot average over the empty wavelength interval [{start}, {end}]")]
    EmptyInterval { start: f64, end: f64 },

    #[error("Colour matching table needs at least 2 rows, found {len}")]
    DegenerateDataset { len: usize },

    #[error("Colour matching table has a ȳ integral that is not positive")]
    ZeroIntegral,
}
