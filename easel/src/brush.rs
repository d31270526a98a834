//! Brush tool state and the stroke state machine.
//!
//! `BrushState` captures the user's intent at the time of a pointer event:
//! which tool is armed and how wide the brush is. `StrokeState` is the
//! active gesture tracked between pointer-down and pointer-up, carrying the
//! previous stroke point so each pointer-move can paint an incremental
//! segment. Ending a stroke returns to `Idle`, so the next stroke never
//! connects back to the prior stroke's end point.

#[cfg(test)]
#[path = "brush_test.rs"]
mod brush_test;

use crate::consts::{DEFAULT_BRUSH_SIZE, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};
use crate::geom::Point;

/// Which tool is currently armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// No tool armed; pointer events paint nothing.
    #[default]
    Idle,
    /// Freehand mask brush.
    Brush,
}

/// Brush configuration at the time of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushState {
    /// Currently armed tool.
    pub tool: Tool,
    /// Brush diameter in canvas pixels.
    pub size: f64,
}

impl Default for BrushState {
    fn default() -> Self {
        Self { tool: Tool::default(), size: DEFAULT_BRUSH_SIZE }
    }
}

impl BrushState {
    /// Set the brush diameter, clamped to the accepted range.
    pub fn set_size(&mut self, size: f64) {
        self.size = size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
    }
}

/// The active stroke gesture between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StrokeState {
    /// No stroke in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The pointer is down. `last` is the previous stroke point in canvas
    /// pixels, or `None` before the first move of this stroke.
    Painting {
        last: Option<Point>,
    },
}

impl StrokeState {
    /// Whether a stroke is currently in progress.
    #[must_use]
    pub fn drawing(&self) -> bool {
        matches!(self, Self::Painting { .. })
    }
}
