mod coefficient_spectrum;
mod sampled_spectrum;
mod tabulated;

pub use coefficient_spectrum::rgb_to_xyz;
pub use coefficient_spectrum::xyz_to_rgb;
pub use coefficient_spectrum::CoefficientSpectrum;

pub use sampled_spectrum::SampledSpectrum;

pub use tabulated::TabulatedSpectrum;
