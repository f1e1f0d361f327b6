use crate::nbody::{Body, Bounds};
use crate::utils::NBodyError;

#[test]
fn test_center_and_max_side() {
    let bounds = Bounds::new(-2.0, 0.0, 2.0, 1.0);
    assert_eq!(bounds.center(), (0.0, 0.5));
    assert_eq!(bounds.max_side(), 4.0);
}

#[test]
fn test_contains_is_inclusive_on_all_edges() {
    let bounds = Bounds::new(0.0, 0.0, 1.0, 1.0);
    assert!(bounds.contains(0.0, 0.5));
    assert!(bounds.contains(1.0, 0.5));
    assert!(bounds.contains(0.5, 0.0));
    assert!(bounds.contains(0.5, 1.0));
    assert!(bounds.contains(1.0, 1.0));
    assert!(!bounds.contains(1.0 + 1e-12, 0.5));
    assert!(!bounds.contains(0.5, -1e-12));
}

#[test]
fn test_split4_partitions_at_midpoint() {
    let bounds = Bounds::new(0.0, 0.0, 4.0, 4.0);
    let [ne, nw, sw, se] = bounds.split4();
    assert_eq!(ne, Bounds::new(2.0, 2.0, 4.0, 4.0));
    assert_eq!(nw, Bounds::new(0.0, 2.0, 2.0, 4.0));
    assert_eq!(sw, Bounds::new(0.0, 0.0, 2.0, 2.0));
    assert_eq!(se, Bounds::new(2.0, 0.0, 4.0, 2.0));
    // The shared midpoint sits on the boundary of all four quadrants.
    for quadrant in [ne, nw, sw, se] {
        assert!(quadrant.contains(2.0, 2.0));
    }
}

#[test]
fn test_enclosing_is_tight() {
    let bodies = vec![
        Body::at_rest(0, 1.0, -3.0, 2.0),
        Body::at_rest(1, 1.0, 5.0, -1.0),
        Body::at_rest(2, 1.0, 0.0, 7.0),
    ];
    let bounds = Bounds::enclosing(&bodies).unwrap();
    assert_eq!(bounds, Bounds::new(-3.0, -1.0, 5.0, 7.0));
    for p in &bodies {
        assert!(bounds.contains(p.x, p.y));
    }
}

#[test]
fn test_enclosing_empty_set_is_an_error() {
    assert_eq!(Bounds::enclosing(&[]), Err(NBodyError::EmptyBodySet));
}

#[test]
fn test_enclosing_single_body_degenerates_to_a_point() {
    let bodies = vec![Body::at_rest(0, 1.0, 2.5, -2.5)];
    let bounds = Bounds::enclosing(&bodies).unwrap();
    assert_eq!(bounds, Bounds::new(2.5, -2.5, 2.5, -2.5));
    assert!(bounds.contains(2.5, -2.5));
}
