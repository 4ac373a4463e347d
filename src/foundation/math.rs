use std::f64::consts::PI;

#[inline]
pub(crate) fn deg_to_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

/// Clamp into `[lo, hi]`; `None` for NaN/infinite input.
#[inline]
pub(crate) fn clamp_finite(v: f64, lo: f64, hi: f64) -> Option<f64> {
    v.is_finite().then(|| v.clamp(lo, hi))
}

/// Wrap a possibly negative ring index.
#[inline]
pub(crate) fn ring_index(i: isize, len: usize) -> usize {
    i.rem_euclid(len as isize) as usize
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
