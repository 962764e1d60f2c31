use super::TOLERANCE;

/// `lo - TOLERANCE <= x <= hi + TOLERANCE`.
#[inline]
pub fn within_range(x: f64, lo: f64, hi: f64) -> bool {
    within_range_tol(x, lo, hi, TOLERANCE)
}

/// Closed interval membership widened by `tolerance` on both ends.
#[inline]
pub fn within_range_tol(x: f64, lo: f64, hi: f64, tolerance: f64) -> bool {
    lo - tolerance <= x && x <= hi + tolerance
}
