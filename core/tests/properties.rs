use proptest::prelude::*;
use segment_core::geometry::within_range;
use segment_core::{classify, format_coordinate, Relationship, Segment};

// Integer grid coordinates keep every true intersection well away from the
// tolerance band, so classification is deterministic.
fn coord() -> impl Strategy<Value = f64> {
    (-8i32..=8).prop_map(f64::from)
}

fn segment() -> impl Strategy<Value = Segment> {
    (coord(), coord(), coord(), coord()).prop_map(|(x1, y1, x2, y2)| Segment::new(x1, y1, x2, y2))
}

fn non_degenerate_segment() -> impl Strategy<Value = Segment> {
    segment().prop_filter("endpoints must differ", |s| !s.is_degenerate())
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6
}

fn same_relationship(a: Relationship, b: Relationship) -> bool {
    match (a, b) {
        (Relationship::NoRelation, Relationship::NoRelation) => true,
        (Relationship::Point { x: x1, y: y1 }, Relationship::Point { x: x2, y: y2 }) => {
            close(x1, x2) && close(y1, y2)
        }
        (
            Relationship::Range { x_start: a0, y_start: b0, x_end: a1, y_end: b1 },
            Relationship::Range { x_start: c0, y_start: d0, x_end: c1, y_end: d1 },
        ) => {
            let forward = close(a0, c0) && close(b0, d0) && close(a1, c1) && close(b1, d1);
            let reversed = close(a0, c1) && close(b0, d1) && close(a1, c0) && close(b1, d0);
            forward || reversed
        }
        _ => false,
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 2_000, .. ProptestConfig::default() })]

    #[test]
    fn classification_is_symmetric(a in segment(), b in segment()) {
        let ab = classify(&a, &b);
        let ba = classify(&b, &a);
        prop_assert!(same_relationship(ab, ba), "{:?} vs {:?}", ab, ba);
    }

    #[test]
    fn self_overlap_is_the_bounding_box(a in non_degenerate_segment()) {
        let b = a.bounds();
        prop_assert_eq!(
            classify(&a, &a),
            Relationship::Range { x_start: b.x_min, y_start: b.y_min, x_end: b.x_max, y_end: b.y_max }
        );
    }

    #[test]
    fn degenerate_point_on_crossing_segment(b in non_degenerate_segment(), t in 0u8..=4) {
        // A grid point on `b` at t/4 of the way along it.
        let t = f64::from(t) / 4.0;
        let px = b.start.x + t * (b.end.x - b.start.x);
        let py = b.start.y + t * (b.end.y - b.start.y);
        let point = Segment::new(px, py, px, py);

        match classify(&point, &b) {
            Relationship::Point { x, y } => {
                prop_assert!(close(x, px) && close(y, py));
            }
            // b itself vertical: collinear with the point's vertical line
            Relationship::Range { x_start, y_start, x_end, y_end } => {
                prop_assert!(b.start.x == b.end.x);
                prop_assert!(close(x_start, px) && close(x_end, px));
                prop_assert!(close(y_start, py) && close(y_end, py));
            }
            Relationship::NoRelation => prop_assert!(false, "point {:?} lost against {:?}", (px, py), b),
        }
    }

    #[test]
    fn results_lie_within_both_segments(a in segment(), b in segment()) {
        let (ba, bb) = (a.bounds(), b.bounds());
        match classify(&a, &b) {
            Relationship::NoRelation => {}
            Relationship::Point { x, y } => {
                prop_assert!(ba.contains_approx(x, y) && bb.contains_approx(x, y));
            }
            Relationship::Range { x_start, y_start, x_end, y_end } => {
                prop_assert!(ba.contains_approx(x_start, y_start) && bb.contains_approx(x_start, y_start));
                prop_assert!(ba.contains_approx(x_end, y_end) && bb.contains_approx(x_end, y_end));
                prop_assert!(x_start <= x_end);
            }
        }
    }

    #[test]
    fn overlap_range_starts_at_low_corner(a in non_degenerate_segment(), s in 0i32..=4, e in 0i32..=4) {
        // Sub-segment of `a` between two quarter marks, so the pair is collinear.
        let lerp = |k: i32| {
            let t = f64::from(k) / 4.0;
            (a.start.x + t * (a.end.x - a.start.x), a.start.y + t * (a.end.y - a.start.y))
        };
        let ((x1, y1), (x2, y2)) = (lerp(s), lerp(e));
        let b = Segment::new(x1, y1, x2, y2);

        if let Relationship::Range { y_start, y_end, .. } = classify(&a, &b) {
            // per-axis normalization leaves the first segment's y start at or
            // below the overlap, so the start never sits above the end
            prop_assert!(y_start <= y_end);
        }
    }

    #[test]
    fn formatting_is_stable(v in -1.0e6f64..1.0e6) {
        let once = format_coordinate(v);
        let reparsed: f64 = once.parse().unwrap();
        prop_assert_eq!(format_coordinate(reparsed), once.clone());
        prop_assert!(!once.ends_with('.'));
        prop_assert!(!once.contains('e'));
    }

    #[test]
    fn within_range_accepts_interval_members(lo in -100.0f64..100.0, w in 0.0f64..50.0, t in 0.0f64..=1.0) {
        let hi = lo + w;
        prop_assert!(within_range(lo + t * w, lo, hi));
    }
}
