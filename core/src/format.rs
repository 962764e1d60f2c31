//! Human-readable rendering of coordinates and relationships.
//!
//! Display only; nothing here feeds back into the geometry.

use crate::geometry::Relationship;
use std::fmt;

/// Magnitudes above this are rounded to three decimals.
const ROUNDING_THRESHOLD: f64 = 0.01;

/// Below this magnitude the shortest decimal form would need an exponent,
/// so a fixed ten-decimal form is used instead.
const FIXED_THRESHOLD: f64 = 1e-6;

/// Shortest decimal string for a coordinate label.
///
/// Values above 0.01 in magnitude are rounded to three decimals. Smaller
/// values keep their significant digits (`0.0000015` stays `0.0000015`)
/// down to ten decimal places. Trailing zeros and a trailing point are
/// dropped, and zero is always `"0"`.
pub fn format_coordinate(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    let text = if magnitude > ROUNDING_THRESHOLD {
        format!("{:.3}", value)
    } else if magnitude < FIXED_THRESHOLD {
        format!("{:.10}", value)
    } else {
        value.to_string()
    };

    trim_decimal(&text)
}

/// `(x, y)` with both coordinates passed through [`format_coordinate`].
pub fn format_point(x: f64, y: f64) -> String {
    format!("({}, {})", format_coordinate(x), format_coordinate(y))
}

fn trim_decimal(text: &str) -> String {
    if !text.contains('.') {
        return text.to_string();
    }
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

impl Relationship {
    /// One sentence describing the outcome, suitable as a diagram title.
    pub fn summary(&self) -> String {
        match *self {
            Self::NoRelation => "The segments neither intersect nor overlap.".to_string(),
            Self::Point { x, y } => {
                format!("The segments intersect at point {}.", format_point(x, y))
            }
            Self::Range {
                x_start,
                y_start,
                x_end,
                y_end,
            } => format!(
                "The segments overlap from point {} to point {}.",
                format_point(x_start, y_start),
                format_point(x_end, y_end)
            ),
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
