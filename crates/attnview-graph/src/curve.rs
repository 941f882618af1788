#![forbid(unsafe_code)]

//! Bézier geometry for attention paths.
//!
//! A path connects two positioned tokens, anchored a fixed lift above each
//! token's baseline:
//!
//! - Same row: one quadratic arc. Control height grows with horizontal
//!   distance and is capped, so short hops stay shallow and long hops stay
//!   bounded.
//! - Different rows: a cubic S-curve. Each control point is offset
//!   horizontally toward the other endpoint (sign from which row is above)
//!   and lifted by a fixed inter-row offset; jumps over more than one row
//!   lift proportionally higher instead.
//!
//! Geometry only - stroke styling lives in [`crate::style`].

use attnview_core::geometry::Point;
use attnview_layout::TokenPosition;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Shape parameters for attention curves.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveConfig {
    /// Vertical distance between a token's baseline and the path anchor.
    pub anchor_lift: f64,
    /// Base control height for same-row arcs.
    pub base_height: f64,
    /// Extra control height per horizontal pixel for same-row arcs.
    pub distance_factor: f64,
    /// Cap on same-row control height.
    pub max_height: f64,
    /// Horizontal control offset for cross-row curves.
    pub control_offset: f64,
    /// Vertical control lift for adjacent-row curves.
    pub row_lift: f64,
    /// Vertical control lift per row of distance for non-adjacent rows.
    pub distant_row_factor: f64,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            anchor_lift: 25.0,
            base_height: 80.0,
            distance_factor: 0.15,
            max_height: 100.0,
            control_offset: 60.0,
            row_lift: 50.0,
            distant_row_factor: 50.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Path description
// ---------------------------------------------------------------------------

/// A drawable curve, or nothing.
///
/// `Empty` stands in when an endpoint is missing (stale edge against a
/// shrunk token list mid-render); consumers draw nothing and move on.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PathSpec {
    /// No-op path.
    #[default]
    Empty,
    /// Quadratic Bézier: start, one control point, end.
    Quadratic {
        start: Point,
        control: Point,
        end: Point,
    },
    /// Cubic Bézier: start, two control points, end.
    Cubic {
        start: Point,
        control1: Point,
        control2: Point,
        end: Point,
    },
}

impl PathSpec {
    #[must_use]
    pub const fn empty() -> Self {
        Self::Empty
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// Build the curve connecting two positioned tokens.
#[must_use]
pub fn curve_between(from: &TokenPosition, to: &TokenPosition, config: &CurveConfig) -> PathSpec {
    let start = Point::new(from.x, from.y - config.anchor_lift);
    let end = Point::new(to.x, to.y - config.anchor_lift);

    if from.row == to.row {
        let distance = (end.x - start.x).abs();
        let height = (config.base_height + distance * config.distance_factor)
            .min(config.max_height);
        return PathSpec::Quadratic {
            start,
            control: Point::new((start.x + end.x) / 2.0, start.y - height),
            end,
        };
    }

    let row_diff = from.row.abs_diff(to.row);
    let from_above = from.row < to.row;
    let offset = if from_above {
        config.control_offset
    } else {
        -config.control_offset
    };

    let lift = if row_diff > 1 {
        row_diff as f64 * config.distant_row_factor
    } else {
        config.row_lift
    };

    PathSpec::Cubic {
        start,
        control1: Point::new(start.x + offset, start.y - lift),
        control2: Point::new(end.x - offset, end.y - lift),
        end,
    }
}

/// Build the curve for an edge by token index.
///
/// Returns [`PathSpec::Empty`] when either index has no position; focus and
/// data changes are not perfectly synchronized within a render pass, so a
/// stale index must degrade silently.
#[must_use]
pub fn curve_for(
    positions: &[TokenPosition],
    from: usize,
    to: usize,
    config: &CurveConfig,
) -> PathSpec {
    match (positions.get(from), positions.get(to)) {
        (Some(from_pos), Some(to_pos)) => curve_between(from_pos, to_pos, config),
        _ => PathSpec::empty(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
