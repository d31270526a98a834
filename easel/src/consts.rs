//! Shared numeric and style constants for the easel engine.

// ── Brush ───────────────────────────────────────────────────────

/// Default brush diameter in canvas pixels.
pub const DEFAULT_BRUSH_SIZE: f64 = 20.0;

/// Smallest accepted brush diameter.
pub const MIN_BRUSH_SIZE: f64 = 4.0;

/// Largest accepted brush diameter.
pub const MAX_BRUSH_SIZE: f64 = 80.0;

// ── Stroke styles ───────────────────────────────────────────────

/// Stroke style for the visible highlight painted on the display canvas.
pub const HIGHLIGHT_STYLE: &str = "rgba(255, 0, 0, 0.5)";

/// Fill style for mask stamps. The backend treats any opaque pixel as masked.
pub const MASK_STYLE: &str = "white";
