//! Slope/intercept form of the infinite line carrying a segment.

use super::{is_close, Segment, TOLERANCE};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slope {
    /// No defined slope. The line equation's intercept holds its x value.
    Vertical,
    Sloped(f64),
}

/// `y = slope * x + intercept`, or `x = intercept` when vertical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineEquation {
    pub slope: Slope,
    pub intercept: f64,
}

impl LineEquation {
    /// Derive the line from the segment's endpoints as given.
    ///
    /// The vertical test is exact: only identical x coordinates count.
    /// Degenerate segments are therefore vertical lines through their point.
    pub fn from_segment(segment: &Segment) -> Self {
        let (x1, y1) = (segment.start.x, segment.start.y);
        let (x2, y2) = (segment.end.x, segment.end.y);

        if x1 == x2 {
            return Self {
                slope: Slope::Vertical,
                intercept: x1,
            };
        }

        let m = (y2 - y1) / (x2 - x1);
        Self {
            slope: Slope::Sloped(m),
            intercept: y1 - m * x1,
        }
    }

    /// Both vertical, or both sloped with slopes equal within relative tolerance.
    pub fn is_parallel(&self, other: &Self) -> bool {
        match (self.slope, other.slope) {
            (Slope::Vertical, Slope::Vertical) => true,
            (Slope::Sloped(m1), Slope::Sloped(m2)) => is_close(m1, m2, TOLERANCE),
            _ => false,
        }
    }

    /// Parallel and sharing the exact same intercept.
    pub fn is_collinear(&self, other: &Self) -> bool {
        self.is_parallel(other) && self.intercept == other.intercept
    }

    /// Where two non-parallel lines meet. `None` when parallel.
    ///
    /// y is taken from the first non-vertical line of the pair.
    pub fn crossing(&self, other: &Self) -> Option<(f64, f64)> {
        if self.is_parallel(other) {
            return None;
        }
        let x = match (self.slope, other.slope) {
            (Slope::Sloped(m1), Slope::Sloped(m2)) => (other.intercept - self.intercept) / (m1 - m2),
            (Slope::Vertical, _) => self.intercept,
            (_, Slope::Vertical) => other.intercept,
        };
        let y = self.y_at(x).or_else(|| other.y_at(x))?;
        Some((x, y))
    }

    /// y at the given x. `None` for vertical lines.
    pub fn y_at(&self, x: f64) -> Option<f64> {
        match self.slope {
            Slope::Vertical => None,
            Slope::Sloped(m) => Some(m * x + self.intercept),
        }
    }
}
