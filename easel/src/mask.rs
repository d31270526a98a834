//! Mask layer model: the set of circle stamps painted since the last clear.
//!
//! The pixels themselves live on the mask canvas; this model is the logical
//! record the engine keeps alongside them. A stamp is added for every brush
//! event, and the layer as a whole is the union of its stamps, so the result
//! of a painting session does not depend on stroke order. The layer is
//! resized (and thereby emptied) whenever the session's image changes,
//! keeping it dimensioned like the canvases it shadows.

#[cfg(test)]
#[path = "mask_test.rs"]
mod mask_test;

use crate::geom::Point;

/// One opaque filled circle on the mask.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stamp {
    /// Circle center in canvas pixels.
    pub center: Point,
    /// Circle radius in canvas pixels (half the brush diameter).
    pub radius: f64,
}

/// The accumulated mask for the active edit session.
#[derive(Debug, Clone, Default)]
pub struct MaskLayer {
    width: f64,
    height: f64,
    stamps: Vec<Stamp>,
}

impl MaskLayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current layer dimensions in canvas pixels.
    #[must_use]
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Resize the layer to match a newly loaded image, discarding all stamps.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.stamps.clear();
    }

    /// Record a circle stamp.
    pub fn stamp(&mut self, center: Point, radius: f64) {
        self.stamps.push(Stamp { center, radius });
    }

    /// Discard all stamps, keeping the current dimensions.
    pub fn clear(&mut self) {
        self.stamps.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }

    /// Number of stamps recorded since the last clear.
    #[must_use]
    pub fn stamp_count(&self) -> usize {
        self.stamps.len()
    }

    /// Whether the union of stamps covers the given canvas point.
    #[must_use]
    pub fn covers(&self, point: Point) -> bool {
        self.stamps.iter().any(|s| {
            let dx = point.x - s.center.x;
            let dy = point.y - s.center.y;
            dx * dx + dy * dy <= s.radius * s.radius
        })
    }
}
