//! Drawing: every 2D-context call the engine makes lives here.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives points and segments already mapped to canvas pixel space and
//! produces pixels; it does not mutate any engine state.
//!
//! Fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`;
//! calls whose bindings cannot fail are plain functions.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::consts::{HIGHLIGHT_STYLE, MASK_STYLE};
use crate::geom::{Point, Segment};

/// Fetch the 2D context of a canvas element.
///
/// # Errors
///
/// Returns `Err` if the element refuses a `"2d"` context or hands back an
/// unexpected object.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas element has no 2d context"))?;
    ctx.dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("2d context has an unexpected type"))
}

/// Size a canvas element's intrinsic pixel grid. Also wipes its pixels.
pub fn resize(canvas: &HtmlCanvasElement, width: u32, height: u32) {
    canvas.set_width(width);
    canvas.set_height(height);
}

/// Wipe the full canvas surface.
pub fn clear(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.clear_rect(0.0, 0.0, width, height);
}

/// Draw a decoded image over the full canvas surface.
///
/// # Errors
///
/// Returns `Err` if the image cannot be drawn (e.g. it is in a broken state).
pub fn draw_image(
    ctx: &CanvasRenderingContext2d,
    img: &HtmlImageElement,
    width: f64,
    height: f64,
) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.draw_image_with_html_image_element(img, 0.0, 0.0)
}

/// Paint one stroke segment as a semi-transparent round-cap highlight.
pub fn paint_segment(ctx: &CanvasRenderingContext2d, seg: &Segment) {
    ctx.set_stroke_style_str(HIGHLIGHT_STYLE);
    ctx.set_line_width(seg.width);
    ctx.set_line_cap("round");
    ctx.begin_path();
    ctx.move_to(seg.from.x, seg.from.y);
    ctx.line_to(seg.to.x, seg.to.y);
    ctx.stroke();
}

/// Stamp one opaque filled circle onto the mask canvas.
///
/// # Errors
///
/// Returns `Err` if the arc call fails.
pub fn stamp_mask(
    ctx: &CanvasRenderingContext2d,
    center: Point,
    radius: f64,
) -> Result<(), JsValue> {
    ctx.set_fill_style_str(MASK_STYLE);
    ctx.begin_path();
    ctx.arc(center.x, center.y, radius, 0.0, TAU)?;
    ctx.fill();
    Ok(())
}
