//! Classification of how two line segments relate.

use super::{overlap_range, LineEquation, Segment};
use serde::{Deserialize, Serialize};

/// Outcome of [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Relationship {
    /// Disjoint and not overlapping.
    NoRelation,
    /// Single crossing point.
    Point { x: f64, y: f64 },
    /// Collinear overlap between two endpoints.
    Range {
        x_start: f64,
        y_start: f64,
        x_end: f64,
        y_end: f64,
    },
}

impl Relationship {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NoRelation => "no_relation",
            Self::Point { .. } => "point",
            Self::Range { .. } => "range",
        }
    }
}

/// Determine whether two segments are disjoint, cross at one point, or
/// overlap along a collinear range.
///
/// Line equations come from the segments' endpoints as given; membership
/// checks use the per-axis bounds of each segment.
pub fn classify(first: &Segment, second: &Segment) -> Relationship {
    let l1 = LineEquation::from_segment(first);
    let l2 = LineEquation::from_segment(second);

    if l1.is_collinear(&l2) {
        return overlap_range(first, second);
    }

    // parallel lines with distinct intercepts never cross
    let Some((x, y)) = l1.crossing(&l2) else {
        return Relationship::NoRelation;
    };

    if first.bounds().contains_approx(x, y) && second.bounds().contains_approx(x, y) {
        Relationship::Point { x, y }
    } else {
        Relationship::NoRelation
    }
}

/// [`classify`] over raw `[x1, y1, x2, y2]` coordinates.
pub fn classify_coords(first: [f64; 4], second: [f64; 4]) -> Relationship {
    classify(&Segment::from_coords(first), &Segment::from_coords(second))
}
