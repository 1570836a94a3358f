use approx::assert_relative_eq;

use crate::{rgb_to_xyz, xyz_to_rgb, CoefficientSpectrum, SampledSpectrum};

#[test]
fn fill_and_index() {
    let mut s = CoefficientSpectrum::<4, f32>::new(0.5);
    assert_eq!(s.samples(), &[0.5; 4]);

    s[2] = 3.0;
    assert_eq!(s[2], 3.0);
    assert_eq!(s[1], 0.5);
    assert_eq!(s.get(2), Some(3.0));
    assert_eq!(s.get(4), None);
}

#[test]
fn default_is_black() {
    let s = SampledSpectrum::<f64>::default();
    assert!(s.is_black());
    assert_eq!(SampledSpectrum::<f64>::SAMPLE_COUNT, 60);
    assert_eq!(s.iter().count(), 60);

    let mut s = s;
    s[59] = 1e-9;
    assert!(!s.is_black());
}

#[test]
#[should_panic]
fn index_past_end() {
    let s = SampledSpectrum::<f32>::default();
    let idx = SampledSpectrum::<f32>::SAMPLE_COUNT;
    let _ = s[idx];
}

#[test]
#[should_panic]
fn write_past_end() {
    let mut s = SampledSpectrum::<f32>::default();
    let idx = SampledSpectrum::<f32>::SAMPLE_COUNT + 3;
    s[idx] = 1.0;
}

#[test]
#[should_panic]
fn nan_fill() {
    CoefficientSpectrum::<3, f32>::new(f32::NAN);
}

#[test]
#[should_panic]
fn zero_over_zero() {
    let _ = CoefficientSpectrum::<3, f64>::default() / 0.0;
}

#[test]
fn arithmetic() {
    let mut a = CoefficientSpectrum::<3, f64>::default();
    a[0] = 1.0;
    a[1] = 2.0;
    a[2] = 3.0;
    let b = CoefficientSpectrum::<3, f64>::new(2.0);

    assert_eq!((a + b).samples(), &[3.0, 4.0, 5.0]);
    assert_eq!((a - b).samples(), &[-1.0, 0.0, 1.0]);
    assert_eq!((a * b).samples(), &[2.0, 4.0, 6.0]);
    assert_eq!((a / b).samples(), &[0.5, 1.0, 1.5]);
    assert_eq!((a * 3.0).samples(), &[3.0, 6.0, 9.0]);
    assert_eq!((-a).samples(), &[-1.0, -2.0, -3.0]);

    let mut c = a;
    c += b;
    c *= 0.5;
    c -= 1.0;
    assert_eq!(c.samples(), &[0.5, 1.0, 1.5]);

    assert_eq!(a.dot(&b), 12.0);
}

#[test]
fn lerp_clamp_cast() {
    let a = CoefficientSpectrum::<2, f64>::new(0.0);
    let b = CoefficientSpectrum::<2, f64>::new(4.0);

    assert_eq!(a.lerp(b, 0.25).samples(), &[1.0, 1.0]);
    assert_eq!(b.clamp(0.0, 1.0).samples(), &[1.0, 1.0]);
    assert_eq!(b.cast::<f32>().samples(), &[4.0_f32, 4.0]);
    assert!(!b.has_nan());
}

#[test]
fn rgb_xyz_matrices_invert() {
    let rgb = [0.2, 0.5, 0.9];
    let back = xyz_to_rgb(rgb_to_xyz(rgb));

    for (a, b) in rgb.iter().zip(back) {
        assert_relative_eq!(*a, b, epsilon = 1e-4);
    }
}
