pub mod cie;
mod error;
mod spectrum;

#[cfg(test)]
mod tests;

pub use error::SpectrumError;

pub use spectrum::rgb_to_xyz;
pub use spectrum::xyz_to_rgb;
pub use spectrum::CoefficientSpectrum;
pub use spectrum::SampledSpectrum;
pub use spectrum::TabulatedSpectrum;
