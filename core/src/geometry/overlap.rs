use super::{Relationship, Segment};

/// Where two collinear segments coincide.
///
/// Intersects the per-axis projections of both segments. Touching
/// projections count as overlap, so segments sharing only an endpoint
/// yield a zero-length range.
pub fn overlap_range(first: &Segment, second: &Segment) -> Relationship {
    let a = first.bounds();
    let b = second.bounds();

    let x_start = a.x_min.max(b.x_min);
    let x_end = a.x_max.min(b.x_max);
    let mut y_start = a.y_min.max(b.y_min);
    let mut y_end = a.y_max.min(b.y_max);

    if x_start <= x_end && y_start <= y_end {
        // Orientation follows the first segment's y start.
        if a.y_min > y_end {
            std::mem::swap(&mut y_start, &mut y_end);
        }
        return Relationship::Range {
            x_start,
            y_start,
            x_end,
            y_end,
        };
    }

    Relationship::NoRelation
}
