#![allow(clippy::float_cmp)]

use super::*;

fn photo() -> ImageRef {
    ImageRef::new("http://host/img.png", 200.0, 100.0)
}

/// A core with a loaded 200x100 image, an unscaled view, and the brush armed.
fn painting_core() -> EngineCore {
    let mut core = EngineCore::new();
    core.begin_session("abc", photo());
    core.view = CanvasView::new(200.0, 100.0, 200.0, 100.0);
    core.set_tool(Tool::Brush);
    core
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn new_core_is_idle() {
    let core = EngineCore::new();
    assert!(!core.drawing());
    assert!(!core.has_image());
    assert!(core.remote_image_id().is_none());
    assert!(core.mask.is_empty());
    assert_eq!(core.brush.tool, Tool::Idle);
}

// =============================================================
// Session lifecycle
// =============================================================

#[test]
fn begin_session_sizes_mask_to_image() {
    let mut core = EngineCore::new();
    core.begin_session("abc", photo());
    assert_eq!(core.remote_image_id(), Some("abc"));
    assert!(core.has_image());
    assert_eq!(core.mask.size(), (200.0, 100.0));
}

#[test]
fn begin_session_discards_previous_mask() {
    let mut core = painting_core();
    core.pointer_down();
    core.pointer_move(Point::new(10.0, 10.0)).unwrap();
    assert!(!core.mask.is_empty());

    core.begin_session("def", ImageRef::new("http://host/b.png", 50.0, 50.0));
    assert!(core.mask.is_empty());
    assert_eq!(core.mask.size(), (50.0, 50.0));
    assert_eq!(core.remote_image_id(), Some("def"));
}

#[test]
fn replace_image_keeps_id_and_resets_mask() {
    let mut core = painting_core();
    core.pointer_down();
    core.pointer_move(Point::new(10.0, 10.0)).unwrap();

    core.replace_image(ImageRef::new("http://host/out.png", 200.0, 100.0));
    assert_eq!(core.remote_image_id(), Some("abc"));
    assert!(core.mask.is_empty());
    assert!(!core.drawing());
}

// =============================================================
// Stroke state machine
// =============================================================

#[test]
fn move_without_pointer_down_paints_nothing() {
    let mut core = painting_core();
    assert!(core.pointer_move(Point::new(10.0, 10.0)).is_none());
    assert!(core.mask.is_empty());
}

#[test]
fn move_with_idle_tool_paints_nothing() {
    let mut core = painting_core();
    core.set_tool(Tool::Idle);
    core.pointer_down();
    assert!(core.pointer_move(Point::new(10.0, 10.0)).is_none());
    assert!(core.mask.is_empty());
}

#[test]
fn pointer_down_starts_drawing() {
    let mut core = painting_core();
    core.pointer_down();
    assert!(core.drawing());
}

#[test]
fn first_move_paints_a_dot() {
    let mut core = painting_core();
    core.pointer_down();
    let seg = core.pointer_move(Point::new(10.0, 20.0)).unwrap();
    assert_eq!(seg.from, seg.to);
    assert_eq!(seg.to, Point::new(10.0, 20.0));
    assert_eq!(seg.width, core.brush.size);
}

#[test]
fn later_moves_connect_to_previous_point() {
    let mut core = painting_core();
    core.pointer_down();
    core.pointer_move(Point::new(10.0, 20.0)).unwrap();
    let seg = core.pointer_move(Point::new(30.0, 40.0)).unwrap();
    assert_eq!(seg.from, Point::new(10.0, 20.0));
    assert_eq!(seg.to, Point::new(30.0, 40.0));
}

#[test]
fn strokes_do_not_connect_across_pointer_up() {
    let mut core = painting_core();
    core.pointer_down();
    core.pointer_move(Point::new(10.0, 20.0)).unwrap();
    core.pointer_up();
    assert!(!core.drawing());

    core.pointer_down();
    let seg = core.pointer_move(Point::new(90.0, 90.0)).unwrap();
    // A fresh stroke starts at its own first point, not the old end point.
    assert_eq!(seg.from, Point::new(90.0, 90.0));
}

#[test]
fn moves_stamp_the_mask_at_half_brush_size() {
    let mut core = painting_core();
    core.set_brush_size(30.0);
    core.pointer_down();
    core.pointer_move(Point::new(50.0, 50.0)).unwrap();
    assert_eq!(core.mask.stamp_count(), 1);
    // Radius 15 around (50, 50).
    assert!(core.mask.covers(Point::new(64.0, 50.0)));
    assert!(!core.mask.covers(Point::new(66.0, 50.0)));
}

#[test]
fn moves_map_through_the_canvas_view() {
    let mut core = painting_core();
    // Canvas displayed at half size: CSS coordinates double on the way in.
    core.view = CanvasView::new(100.0, 50.0, 200.0, 100.0);
    core.pointer_down();
    let seg = core.pointer_move(Point::new(10.0, 10.0)).unwrap();
    assert_eq!(seg.to, Point::new(20.0, 20.0));
    assert!(core.mask.covers(Point::new(20.0, 20.0)));
}

// =============================================================
// clear_mask
// =============================================================

#[test]
fn clear_mask_resets_accumulation_and_stroke() {
    let mut core = painting_core();
    core.pointer_down();
    core.pointer_move(Point::new(10.0, 10.0)).unwrap();
    core.clear_mask();
    assert!(core.mask.is_empty());
    assert!(!core.drawing());
    // The session survives a clear.
    assert_eq!(core.remote_image_id(), Some("abc"));
    assert!(core.has_image());
}

#[test]
fn clear_mask_is_idempotent() {
    let mut core = painting_core();
    core.pointer_down();
    core.pointer_move(Point::new(10.0, 10.0)).unwrap();
    core.clear_mask();
    core.clear_mask();
    assert!(core.mask.is_empty());
    assert_eq!(core.mask.size(), (200.0, 100.0));
}

// =============================================================
// Brush delegation
// =============================================================

#[test]
fn set_brush_size_clamps() {
    let mut core = EngineCore::new();
    core.set_brush_size(1000.0);
    assert_eq!(core.brush.size, crate::consts::MAX_BRUSH_SIZE);
}
