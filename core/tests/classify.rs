use segment_core::geometry::{ApproxEq, LineEquation, Slope};
use segment_core::{classify, classify_coords, format_coordinate, Relationship, Segment};

fn point_of(r: Relationship) -> (f64, f64) {
    match r {
        Relationship::Point { x, y } => (x, y),
        other => panic!("expected a point, got {:?}", other),
    }
}

#[test]
fn test_crossing_example() {
    let (x, y) = point_of(classify_coords([0.0, 0.0, 4.0, 4.0], [0.0, 4.0, 4.0, 0.0]));
    assert!(x.approx_eq(&2.0) && y.approx_eq(&2.0));
}

#[test]
fn test_vertical_line_correctness() {
    let (x, y) = point_of(classify_coords([2.0, 0.0, 2.0, 5.0], [0.0, 3.0, 4.0, 3.0]));
    assert_eq!(x, 2.0);
    assert_eq!(y, 3.0);
}

#[test]
fn test_disjoint_collinear() {
    let r = classify_coords([0.0, 0.0, 1.0, 1.0], [2.0, 2.0, 3.0, 3.0]);
    assert_eq!(r, Relationship::NoRelation);
}

#[test]
fn test_self_overlap_returns_normalized_endpoints() {
    let a = Segment::new(3.0, 1.0, -1.0, 5.0);
    let r = classify(&a, &a);
    assert_eq!(r, Relationship::Range { x_start: -1.0, y_start: 1.0, x_end: 3.0, y_end: 5.0 });
}

#[test]
fn test_degenerate_to_point() {
    let point = Segment::new(1.5, 2.5, 1.5, 2.5);
    let crossing = Segment::new(0.0, 1.0, 3.0, 4.0);
    let (x, y) = point_of(classify(&point, &crossing));
    assert!(x.approx_eq(&1.5) && y.approx_eq(&2.5));

    let (x, y) = point_of(classify(&crossing, &point));
    assert!(x.approx_eq(&1.5) && y.approx_eq(&2.5));
}

#[test]
fn test_near_equal_slopes_are_parallel() {
    // slopes differ by ~1e-10, inside the relative tolerance
    let a = Segment::new(0.0, 0.0, 2.0, 2.0);
    let b = Segment::new(0.0, 0.0, 2.0, 2.0 * (1.0 + 1e-10));
    let la = LineEquation::from_segment(&a);
    let lb = LineEquation::from_segment(&b);
    assert!(la.is_parallel(&lb));

    let r = classify(&a, &b);
    assert_eq!(r, Relationship::Range { x_start: 0.0, y_start: 0.0, x_end: 2.0, y_end: 2.0 });
}

#[test]
fn test_distinct_slopes_cross() {
    // slopes differ by ~1e-6, well outside the tolerance
    let a = Segment::new(0.0, 0.0, 2.0, 2.0);
    let b = Segment::new(0.0, 0.0, 2.0, 2.0 * (1.0 + 1e-6));
    assert!(!LineEquation::from_segment(&a).is_parallel(&LineEquation::from_segment(&b)));

    let (x, y) = point_of(classify(&a, &b));
    assert!(x.approx_eq(&0.0) && y.approx_eq(&0.0));
}

#[test]
fn test_caller_segments_are_not_reordered() {
    let a = Segment::new(4.0, 0.0, 0.0, 4.0);
    let b = Segment::new(0.0, 0.0, 4.0, 4.0);
    let _ = classify(&a, &b);
    assert_eq!(a.coords(), [4.0, 0.0, 0.0, 4.0]);
    assert_eq!(LineEquation::from_segment(&a).slope, Slope::Sloped(-1.0));
}

#[test]
fn test_formatter_idempotence() {
    assert_eq!(format_coordinate(2.0), "2");
    let once = format_coordinate(0.000001500);
    assert_eq!(once, "0.0000015");
    let reparsed: f64 = once.parse().unwrap();
    assert_eq!(format_coordinate(reparsed), once);
}

#[test]
fn test_relationship_serializes_tagged() {
    let json = serde_json::to_value(Relationship::Point { x: 2.0, y: 3.0 }).unwrap();
    assert_eq!(json, serde_json::json!({"kind": "point", "x": 2.0, "y": 3.0}));

    let json = serde_json::to_value(Relationship::NoRelation).unwrap();
    assert_eq!(json, serde_json::json!({"kind": "no_relation"}));

    let back: Relationship = serde_json::from_str(
        r#"{"kind":"range","x_start":1.0,"y_start":1.0,"x_end":2.0,"y_end":2.0}"#,
    )
    .unwrap();
    assert_eq!(back, Relationship::Range { x_start: 1.0, y_start: 1.0, x_end: 2.0, y_end: 2.0 });
}
