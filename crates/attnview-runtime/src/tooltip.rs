#![forbid(unsafe_code)]

//! Tooltip projection: anchor clamping and weight formatting.
//!
//! The tooltip renders at `anchor + offset` with a fixed rectangle, so the
//! anchor is clamped such that the whole rectangle stays inside the canvas:
//! x in [-offset_x, canvas_w - width - offset_x], y likewise. On a canvas
//! smaller than the tooltip the lower bound wins, pinning the tooltip to
//! the near edge.

use attnview_core::geometry::{CanvasSize, Point};

/// Tooltip rectangle and pointer offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipConfig {
    /// Tooltip rectangle width.
    pub width: f64,
    /// Tooltip rectangle height.
    pub height: f64,
    /// Horizontal offset from the anchor.
    pub offset_x: f64,
    /// Vertical offset from the anchor.
    pub offset_y: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 60.0,
            offset_x: 10.0,
            offset_y: 20.0,
        }
    }
}

/// Clamp a raw pointer position so the tooltip rectangle never exits the
/// canvas.
#[must_use]
pub fn clamp_anchor(raw: Point, canvas: CanvasSize, config: &TooltipConfig) -> Point {
    let min_x = -config.offset_x;
    let max_x = canvas.width - config.width - config.offset_x;
    let min_y = -config.offset_y;
    let max_y = canvas.height - config.height - config.offset_y;
    Point::new(raw.x.min(max_x).max(min_x), raw.y.min(max_y).max(min_y))
}

/// Format an attention weight as a percentage with one decimal place.
///
/// Non-finite weights should never reach display (selection filters them),
/// but a defensive `"n/a"` beats printing `NaN%`.
#[must_use]
pub fn format_weight_percent(weight: f64) -> String {
    if weight.is_finite() {
        format!("{:.1}%", weight * 100.0)
    } else {
        "n/a".to_string()
    }
}
