//! Top-level engine: the pure core plus the canvas-owning wrapper.

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::brush::{BrushState, StrokeState, Tool};
use crate::geom::{CanvasView, Point, Segment};
use crate::mask::MaskLayer;
use crate::render;
use crate::session::{EditSession, ImageRef};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Core engine state: all logic that does not depend on the canvas elements.
///
/// Separated from [`Engine`] so it can be tested without WASM or a browser.
#[derive(Debug, Clone, Default)]
pub struct EngineCore {
    pub session: EditSession,
    pub mask: MaskLayer,
    pub brush: BrushState,
    pub stroke: StrokeState,
    pub view: CanvasView,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Session ---

    /// Start a session from an upload result and size the mask to match.
    pub fn begin_session(&mut self, remote_image_id: impl Into<String>, image: ImageRef) {
        let (width, height) = (image.width, image.height);
        self.session.begin(remote_image_id, image);
        self.mask.resize(width, height);
        self.stroke = StrokeState::Idle;
    }

    /// Swap in an edit result. Mask accumulation restarts for the new image.
    pub fn replace_image(&mut self, image: ImageRef) {
        let (width, height) = (image.width, image.height);
        self.session.replace_image(image);
        self.mask.resize(width, height);
        self.stroke = StrokeState::Idle;
    }

    // --- Tool ---

    /// Arm or disarm a tool.
    pub fn set_tool(&mut self, tool: Tool) {
        self.brush.tool = tool;
    }

    /// Set the brush diameter, clamped to the accepted range.
    pub fn set_brush_size(&mut self, size: f64) {
        self.brush.set_size(size);
    }

    // --- Input ---

    /// Begin a stroke. Painting happens on subsequent moves, and only while
    /// the brush tool is armed.
    pub fn pointer_down(&mut self) {
        self.stroke = StrokeState::Painting { last: None };
    }

    /// Advance the active stroke. Returns the segment to paint, if any.
    ///
    /// The first move of a stroke yields a zero-length segment (a round-cap
    /// dot); each later move connects to the previous point. A mask stamp of
    /// half the brush diameter is recorded at the segment end.
    pub fn pointer_move(&mut self, elem: Point) -> Option<Segment> {
        let StrokeState::Painting { last } = self.stroke else {
            return None;
        };
        if self.brush.tool != Tool::Brush {
            return None;
        }
        let to = self.view.to_canvas(elem);
        let from = last.unwrap_or(to);
        self.stroke = StrokeState::Painting { last: Some(to) };
        self.mask.stamp(to, self.brush.size / 2.0);
        Some(Segment { from, to, width: self.brush.size })
    }

    /// End the stroke, so the next one starts a fresh path instead of
    /// connecting back to this one's end point.
    pub fn pointer_up(&mut self) {
        self.stroke = StrokeState::Idle;
    }

    /// Reset mask accumulation without touching the session.
    pub fn clear_mask(&mut self) {
        self.mask.clear();
        self.stroke = StrokeState::Idle;
    }

    // --- Queries ---

    /// Whether a stroke is currently in progress.
    #[must_use]
    pub fn drawing(&self) -> bool {
        self.stroke.drawing()
    }

    /// The server-issued id of the uploaded image, if any.
    #[must_use]
    pub fn remote_image_id(&self) -> Option<&str> {
        self.session.remote_image_id()
    }

    /// Whether an image is loaded into the canvases.
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.session.image().is_some()
    }
}

/// The full easel engine. Wraps [`EngineCore`] and owns the browser-side
/// display and mask canvas elements.
pub struct Engine {
    display: HtmlCanvasElement,
    mask: HtmlCanvasElement,
    display_ctx: CanvasRenderingContext2d,
    mask_ctx: CanvasRenderingContext2d,
    image_el: Option<HtmlImageElement>,
    pub core: EngineCore,
}

impl Engine {
    /// Bind the engine to its display and mask canvas elements.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either element cannot produce a 2D context.
    pub fn new(display: HtmlCanvasElement, mask: HtmlCanvasElement) -> Result<Self, JsValue> {
        let display_ctx = render::context_2d(&display)?;
        let mask_ctx = render::context_2d(&mask)?;
        Ok(Self {
            display,
            mask,
            display_ctx,
            mask_ctx,
            image_el: None,
            core: EngineCore::new(),
        })
    }

    /// Load a freshly uploaded image: size both canvases to its natural
    /// dimensions, draw it, and restart the session and mask.
    ///
    /// # Errors
    ///
    /// Returns `Err` if drawing the image fails.
    pub fn load_image(
        &mut self,
        remote_image_id: impl Into<String>,
        img: &HtmlImageElement,
    ) -> Result<(), JsValue> {
        let image = self.fit_and_draw(img)?;
        self.core.begin_session(remote_image_id, image);
        Ok(())
    }

    /// Swap in a processed result for the current session.
    ///
    /// # Errors
    ///
    /// Returns `Err` if drawing the image fails.
    pub fn apply_result(&mut self, img: &HtmlImageElement) -> Result<(), JsValue> {
        let image = self.fit_and_draw(img)?;
        self.core.replace_image(image);
        Ok(())
    }

    fn fit_and_draw(&mut self, img: &HtmlImageElement) -> Result<ImageRef, JsValue> {
        let image = ImageRef::new(
            img.src(),
            f64::from(img.natural_width()),
            f64::from(img.natural_height()),
        );
        // Resizing a canvas element also wipes its pixels, which takes care
        // of discarding any mask drawn for the previous image.
        render::resize(&self.display, img.natural_width(), img.natural_height());
        render::resize(&self.mask, img.natural_width(), img.natural_height());
        render::draw_image(&self.display_ctx, img, image.width, image.height)?;
        self.image_el = Some(img.clone());
        Ok(image)
    }

    /// Refresh the element-to-canvas mapping from the DOM, so pointer
    /// positions stay correct under CSS scaling.
    fn sync_view(&mut self) {
        self.core.view = CanvasView::new(
            f64::from(self.display.client_width()),
            f64::from(self.display.client_height()),
            f64::from(self.display.width()),
            f64::from(self.display.height()),
        );
    }

    // --- Input events ---

    /// Begin a stroke at pointer-down.
    pub fn pointer_down(&mut self) {
        self.sync_view();
        self.core.pointer_down();
    }

    /// Advance the stroke at pointer-move. `elem` is in CSS pixels relative
    /// to the canvas element's top-left corner.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a 2D drawing call fails.
    pub fn pointer_move(&mut self, elem: Point) -> Result<(), JsValue> {
        self.sync_view();
        let Some(seg) = self.core.pointer_move(elem) else {
            return Ok(());
        };
        render::paint_segment(&self.display_ctx, &seg);
        render::stamp_mask(&self.mask_ctx, seg.to, seg.width / 2.0)
    }

    /// End the stroke at pointer-up.
    pub fn pointer_up(&mut self) {
        self.core.pointer_up();
    }

    /// Erase both canvases and the mask model, then repaint the original
    /// image on the display canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if redrawing the image fails.
    pub fn clear(&mut self) -> Result<(), JsValue> {
        let width = f64::from(self.display.width());
        let height = f64::from(self.display.height());
        render::clear(&self.display_ctx, width, height);
        render::clear(&self.mask_ctx, width, height);
        if let Some(img) = &self.image_el {
            render::draw_image(&self.display_ctx, img, width, height)?;
        }
        self.core.clear_mask();
        Ok(())
    }

    /// Encode the mask canvas as a PNG data URL for submission.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas cannot be encoded.
    pub fn mask_data_url(&self) -> Result<String, JsValue> {
        self.mask.to_data_url()
    }

    /// Encode the display canvas as a PNG data URL for download.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas cannot be encoded.
    pub fn display_data_url(&self) -> Result<String, JsValue> {
        self.display.to_data_url()
    }

    // --- Delegated tool state and queries ---

    pub fn set_tool(&mut self, tool: Tool) {
        self.core.set_tool(tool);
    }

    pub fn set_brush_size(&mut self, size: f64) {
        self.core.set_brush_size(size);
    }

    #[must_use]
    pub fn remote_image_id(&self) -> Option<&str> {
        self.core.remote_image_id()
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.core.has_image()
    }
}
