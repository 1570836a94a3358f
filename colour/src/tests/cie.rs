use approx::assert_relative_eq;
use data::cie::{CIE_LAMBDA, CIE_SAMPLES, CIE_Y};

use crate::{
    cie::{self, MatchingFunctions, ReferenceCurves},
    SampledSpectrum, SpectrumError,
};

#[test]
fn embedded_table_shape() {
    assert_eq!(CIE_SAMPLES, 471);
    assert_eq!(CIE_LAMBDA[0], 360.0);
    assert_eq!(CIE_LAMBDA[CIE_SAMPLES - 1], 830.0);
    assert!(CIE_LAMBDA.windows(2).all(|w| w[0] < w[1]));

    let table = MatchingFunctions::cie_1931().unwrap();
    assert_eq!(table.x_bar().len(), CIE_SAMPLES);
    assert_eq!(table.z_bar().lambda(), &CIE_LAMBDA[..]);
}

#[test]
fn y_integral_is_raw_sum() {
    let sum: f64 = CIE_Y.iter().sum();
    assert_eq!(cie::y_integral(), sum);
    assert!(cie::y_integral() > 100.0 && cie::y_integral() < 115.0);
}

#[test]
fn y_curve_peaks_in_green() {
    let peak = cie::y()
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(idx, _)| idx)
        .unwrap();

    // 545nm to 575nm
    assert!((29..=34).contains(&peak), "peak bin {}", peak);
    assert!(cie::y().iter().all(|v| v >= 0.0));
    assert!(cie::z().iter().all(|v| v >= 0.0));
}

#[test]
fn repeated_access_is_identical() {
    assert!(std::ptr::eq(cie::x(), cie::x()));
    assert!(std::ptr::eq(cie::y(), cie::y()));
    assert!(std::ptr::eq(cie::z(), cie::z()));
    assert_eq!(cie::y_integral().to_bits(), cie::y_integral().to_bits());
}

#[test]
fn synthetic_table() {
    let lambda = [400.0, 700.0];
    let table = MatchingFunctions::new(&lambda, &[1.0, 1.0], &[1.0, 1.0], &[0.0, 0.0]).unwrap();
    let curves = ReferenceCurves::new(&table).unwrap();

    assert_eq!(curves.y_integral, 2.0);
    assert!(curves.x.iter().all(|v| (v - 1.0).abs() < 1e-12));
    assert!(curves.z.is_black());

    // 60 bins * 1.0 * 300nm / (60 * 2)
    let [x, y, z] = SampledSpectrum::<f64>::new(1.0).to_xyz_with(&curves);
    assert_relative_eq!(x, 150.0, max_relative = 1e-12);
    assert_relative_eq!(y, 150.0, max_relative = 1e-12);
    assert_eq!(z, 0.0);
}

#[test]
fn degenerate_tables() {
    assert_eq!(
        MatchingFunctions::new(&[550.0], &[1.0], &[1.0], &[1.0]),
        Err(SpectrumError::DegenerateDataset { len: 1 })
    );
    assert_eq!(
        MatchingFunctions::new(&[], &[], &[], &[]),
        Err(SpectrumError::DegenerateDataset { len: 0 })
    );
    assert_eq!(
        MatchingFunctions::new(&[400.0, 500.0], &[1.0, 1.0], &[1.0], &[1.0, 1.0]),
        Err(SpectrumError::LengthMismatch {
            lambda: 2,
            value: 1
        })
    );

    let flat = MatchingFunctions::new(&[400.0, 500.0], &[1.0, 1.0], &[0.0, 0.0], &[1.0, 1.0])
        .unwrap();
    assert_eq!(ReferenceCurves::new(&flat), Err(SpectrumError::ZeroIntegral));
}

#[test]
fn negative_integral_is_rejected() {
    let table = MatchingFunctions::new(&[400.0, 500.0], &[1.0, 1.0], &[-1.0, -2.0], &[0.0, 0.0])
        .unwrap();
    let err = ReferenceCurves::new(&table).unwrap_err();

    assert_eq!(err, SpectrumError::ZeroIntegral);
    assert!(err.to_string().contains("not positive"));
}
