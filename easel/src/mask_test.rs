#![allow(clippy::float_cmp)]

use super::*;

fn layer() -> MaskLayer {
    let mut m = MaskLayer::new();
    m.resize(100.0, 100.0);
    m
}

// =============================================================
// Defaults and sizing
// =============================================================

#[test]
fn new_layer_is_empty_and_zero_sized() {
    let m = MaskLayer::new();
    assert!(m.is_empty());
    assert_eq!(m.size(), (0.0, 0.0));
}

#[test]
fn resize_sets_dimensions() {
    let m = layer();
    assert_eq!(m.size(), (100.0, 100.0));
}

#[test]
fn resize_discards_stamps() {
    let mut m = layer();
    m.stamp(Point::new(10.0, 10.0), 5.0);
    m.resize(200.0, 50.0);
    assert!(m.is_empty());
    assert_eq!(m.size(), (200.0, 50.0));
}

// =============================================================
// Stamping and coverage
// =============================================================

#[test]
fn stamp_covers_its_center() {
    let mut m = layer();
    m.stamp(Point::new(30.0, 40.0), 10.0);
    assert!(m.covers(Point::new(30.0, 40.0)));
}

#[test]
fn stamp_covers_points_within_radius() {
    let mut m = layer();
    m.stamp(Point::new(50.0, 50.0), 10.0);
    assert!(m.covers(Point::new(57.0, 57.0)));
    assert!(m.covers(Point::new(60.0, 50.0)));
}

#[test]
fn stamp_does_not_cover_points_outside_radius() {
    let mut m = layer();
    m.stamp(Point::new(50.0, 50.0), 10.0);
    assert!(!m.covers(Point::new(61.0, 50.0)));
    assert!(!m.covers(Point::new(0.0, 0.0)));
}

#[test]
fn empty_layer_covers_nothing() {
    let m = layer();
    assert!(!m.covers(Point::new(0.0, 0.0)));
    assert!(!m.covers(Point::new(50.0, 50.0)));
}

#[test]
fn accumulation_is_union_of_stamps() {
    let mut m = layer();
    m.stamp(Point::new(10.0, 10.0), 5.0);
    m.stamp(Point::new(90.0, 90.0), 5.0);
    assert!(m.covers(Point::new(10.0, 10.0)));
    assert!(m.covers(Point::new(90.0, 90.0)));
    assert!(!m.covers(Point::new(50.0, 50.0)));
    assert_eq!(m.stamp_count(), 2);
}

#[test]
fn accumulation_is_order_independent() {
    let stamps = [
        (Point::new(10.0, 10.0), 6.0),
        (Point::new(40.0, 70.0), 12.0),
        (Point::new(80.0, 20.0), 9.0),
    ];

    let mut forward = layer();
    for (c, r) in stamps {
        forward.stamp(c, r);
    }
    let mut reverse = layer();
    for (c, r) in stamps.iter().rev() {
        reverse.stamp(*c, *r);
    }

    // Sample the whole layer; coverage must agree everywhere.
    let mut x = 0.0;
    while x <= 100.0 {
        let mut y = 0.0;
        while y <= 100.0 {
            let p = Point::new(x, y);
            assert_eq!(forward.covers(p), reverse.covers(p), "diverged at ({x}, {y})");
            y += 2.5;
        }
        x += 2.5;
    }
}

// =============================================================
// Clearing
// =============================================================

#[test]
fn clear_discards_stamps_but_keeps_size() {
    let mut m = layer();
    m.stamp(Point::new(10.0, 10.0), 5.0);
    m.clear();
    assert!(m.is_empty());
    assert_eq!(m.size(), (100.0, 100.0));
}

#[test]
fn clear_is_idempotent() {
    let mut m = layer();
    m.stamp(Point::new(10.0, 10.0), 5.0);
    m.clear();
    let after_once = (m.stamp_count(), m.size());
    m.clear();
    assert_eq!((m.stamp_count(), m.size()), after_once);
}
