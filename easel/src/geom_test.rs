#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_clone() {
    let p = Point::new(1.0, 2.0);
    let q = p.clone();
    assert!(point_approx_eq(p, q));
}

#[test]
fn point_equality() {
    assert_eq!(Point::new(1.0, 2.0), Point::new(1.0, 2.0));
    assert_ne!(Point::new(1.0, 2.0), Point::new(1.0, 3.0));
}

// --- Segment ---

#[test]
fn segment_dot_has_equal_endpoints() {
    let p = Point::new(5.0, 5.0);
    let seg = Segment { from: p, to: p, width: 20.0 };
    assert_eq!(seg.from, seg.to);
}

// --- CanvasView defaults ---

#[test]
fn view_default_is_zero_sized() {
    let view = CanvasView::default();
    assert_eq!(view.css_width, 0.0);
    assert_eq!(view.canvas_width, 0.0);
}

// --- to_canvas ---

#[test]
fn to_canvas_identity_when_sizes_match() {
    let view = CanvasView::new(800.0, 600.0, 800.0, 600.0);
    let p = view.to_canvas(Point::new(50.0, 75.0));
    assert!(point_approx_eq(p, Point::new(50.0, 75.0)));
}

#[test]
fn to_canvas_scales_up_when_element_is_shrunk() {
    // A 1024x512 canvas displayed at 256x128: each CSS pixel covers four
    // canvas pixels on each axis.
    let view = CanvasView::new(256.0, 128.0, 1024.0, 512.0);
    let p = view.to_canvas(Point::new(10.0, 20.0));
    assert!(approx_eq(p.x, 40.0));
    assert!(approx_eq(p.y, 80.0));
}

#[test]
fn to_canvas_scales_down_when_element_is_stretched() {
    let view = CanvasView::new(1000.0, 1000.0, 100.0, 100.0);
    let p = view.to_canvas(Point::new(500.0, 250.0));
    assert!(approx_eq(p.x, 50.0));
    assert!(approx_eq(p.y, 25.0));
}

#[test]
fn to_canvas_axes_scale_independently() {
    let view = CanvasView::new(100.0, 200.0, 200.0, 200.0);
    let p = view.to_canvas(Point::new(10.0, 10.0));
    assert!(approx_eq(p.x, 20.0));
    assert!(approx_eq(p.y, 10.0));
}

#[test]
fn to_canvas_origin_maps_to_origin() {
    let view = CanvasView::new(321.0, 123.0, 1024.0, 768.0);
    let p = view.to_canvas(Point::new(0.0, 0.0));
    assert!(point_approx_eq(p, Point::new(0.0, 0.0)));
}

#[test]
fn to_canvas_identity_before_layout() {
    // Zero displayed size means the element has not been laid out yet.
    let view = CanvasView::new(0.0, 0.0, 1024.0, 768.0);
    let p = view.to_canvas(Point::new(12.0, 34.0));
    assert!(point_approx_eq(p, Point::new(12.0, 34.0)));
}
