use super::{within_range, Point2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when building a segment from untrusted coordinates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SegmentError {
    #[error("Coordinate {coordinate} is not a finite number: {value}")]
    NonFinite { coordinate: &'static str, value: f64 },
}

const COORDINATE_NAMES: [&str; 4] = ["x1", "y1", "x2", "y2"];

/// A finite straight path between two points. Endpoint order is kept as given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }

    /// Build a segment, rejecting NaN and infinite coordinates.
    pub fn try_new(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, SegmentError> {
        Self::try_from_coords([x1, y1, x2, y2])
    }

    pub fn from_coords(coords: [f64; 4]) -> Self {
        let [x1, y1, x2, y2] = coords;
        Self::new(x1, y1, x2, y2)
    }

    pub fn try_from_coords(coords: [f64; 4]) -> Result<Self, SegmentError> {
        for (value, coordinate) in coords.iter().zip(COORDINATE_NAMES) {
            if !value.is_finite() {
                return Err(SegmentError::NonFinite {
                    coordinate,
                    value: *value,
                });
            }
        }
        Ok(Self::from_coords(coords))
    }

    /// Coordinates as `[x1, y1, x2, y2]` in the original endpoint order.
    pub fn coords(&self) -> [f64; 4] {
        [self.start.x, self.start.y, self.end.x, self.end.y]
    }

    /// Both endpoints are the same point.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Per-axis normalization. Each axis is sorted independently, so the
    /// result describes the bounding box rather than a reordered segment.
    pub fn bounds(&self) -> AxisBounds {
        AxisBounds {
            x_min: self.start.x.min(self.end.x),
            x_max: self.start.x.max(self.end.x),
            y_min: self.start.y.min(self.end.y),
            y_max: self.start.y.max(self.end.y),
        }
    }
}

impl From<[f64; 4]> for Segment {
    fn from(coords: [f64; 4]) -> Self {
        Self::from_coords(coords)
    }
}

/// Axis-aligned bounds of a segment: `x_min <= x_max` and `y_min <= y_max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl AxisBounds {
    /// Tolerant containment of a point on both axes.
    pub fn contains_approx(&self, x: f64, y: f64) -> bool {
        within_range(x, self.x_min, self.x_max) && within_range(y, self.y_min, self.y_max)
    }
}
