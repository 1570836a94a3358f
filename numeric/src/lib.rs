mod number;


#[cfg(feature = "double")]
mod types {
    pub type Float = f64;
}

#[cfg(not(feature = "double"))]
mod types {
    pub type Float = f32;
}

pub use types::Float;

pub use number::Number;

/// Linearly interpolate between two numbers, t = 0 gives a, t = 1 gives b
#[inline]
pub fn lerp<T: Number>(t: T, a: T, b: T) -> T {
    (T::ONE - t) * a + t * b
}

/// Binary search over `0..size` for the last index where `pred` is true.
/// `pred` must be true for a (possibly empty) prefix of the range and false
/// afterwards.  The result is clamped to `0..=size - 2` so that it can always
/// be used as the start of a segment `[idx, idx + 1]`.
pub fn find_interval(size: usize, pred: impl Fn(usize) -> bool) -> usize {
    let mut first = 0;
    let mut len = size;

    while len > 0 {
        let half = len >> 1;
        let middle = first + half;

        if pred(middle) {
            first = middle + 1;
            len -= half + 1;
        } else {
            len = half;
        }
    }

    first.saturating_sub(1).min(size.saturating_sub(2))
}
