//! CIE 1931 2° standard observer colour matching functions, tabulated at 1nm
//! over 360..=830nm.  All four columns share the wavelength column.
//!
//! The values come from the Wyman, Sloan and Shirley analytic fit to the
//! curves, so they approximate the published CIE table rather than copy it.

use proc::cie_1931;

/// Number of rows in the CIE table
pub const CIE_SAMPLES: usize = 471;

/// Wavelength of each row, in nanometres, strictly increasing
pub static CIE_LAMBDA: &[f64; CIE_SAMPLES] = &cie_1931!(lambda);

/// x̄ matching function
pub static CIE_X: &[f64; CIE_SAMPLES] = &cie_1931!(x);

/// ȳ matching function, also the photopic luminous efficiency curve
pub static CIE_Y: &[f64; CIE_SAMPLES] = &cie_1931!(y);

/// z̄ matching function
pub static CIE_Z: &[f64; CIE_SAMPLES] = &cie_1931!(z);
