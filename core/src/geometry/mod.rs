use nalgebra as na;

pub type Point2 = na::Point2<f64>;

/// Tolerance shared by slope equality and range membership checks.
pub const TOLERANCE: f64 = 1e-9;

pub trait ApproxEq {
    fn approx_eq(&self, other: &Self) -> bool;
}

impl ApproxEq for f64 {
    fn approx_eq(&self, other: &Self) -> bool {
        (self - other).abs() <= TOLERANCE
    }
}

impl ApproxEq for Point2 {
    fn approx_eq(&self, other: &Self) -> bool {
        na::distance_squared(self, other) <= TOLERANCE * TOLERANCE
    }
}

/// Relative closeness: `|a - b| <= rel_tol * max(|a|, |b|)`.
///
/// Exactly equal values are always close, including infinities.
pub fn is_close(a: f64, b: f64, rel_tol: f64) -> bool {
    if a == b {
        return true;
    }
    (a - b).abs() <= rel_tol * a.abs().max(b.abs())
}

pub mod segment;
pub use segment::*;

pub mod line;
pub use line::*;

pub mod range;
pub use range::*;

pub mod overlap;
pub use overlap::*;

pub mod intersection;
pub use intersection::*;
