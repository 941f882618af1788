#![forbid(unsafe_code)]

//! Weight-derived stroke styling.
//!
//! The renderer draws each path with a thickness and opacity derived from
//! its attention weight; these helpers keep that derivation in one place so
//! every host renders the same visual weight for the same data. Colors and
//! markup stay on the host side.

/// Stroke derivation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    /// Pixels of stroke width per unit of weight.
    pub width_multiplier: f64,
    /// Lower bound on stroke width.
    pub min_width: f64,
    /// Extra width factor while a path is hovered.
    pub hover_multiplier: f64,
    /// Opacity gained per unit of weight.
    pub opacity_multiplier: f64,
    /// Base opacity added before clamping.
    pub opacity_offset: f64,
    /// Lower bound on opacity.
    pub min_opacity: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            width_multiplier: 15.0,
            min_width: 3.0,
            hover_multiplier: 1.5,
            opacity_multiplier: 0.8,
            opacity_offset: 0.2,
            min_opacity: 0.5,
        }
    }
}

impl StrokeStyle {
    /// Stroke width in pixels for a weight, widened while hovered.
    #[must_use]
    pub fn stroke_width(&self, weight: f64, hovered: bool) -> f64 {
        let width = (weight * self.width_multiplier).max(self.min_width);
        if hovered {
            width * self.hover_multiplier
        } else {
            width
        }
    }

    /// Stroke opacity for a weight.
    #[must_use]
    pub fn stroke_opacity(&self, weight: f64) -> f64 {
        (weight * self.opacity_multiplier + self.opacity_offset).max(self.min_opacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_scales_with_weight() {
        let style = StrokeStyle::default();
        assert_eq!(style.stroke_width(0.5, false), 7.5);
        assert_eq!(style.stroke_width(1.0, false), 15.0);
    }

    #[test]
    fn width_clamps_to_minimum() {
        let style = StrokeStyle::default();
        assert_eq!(style.stroke_width(0.0, false), 3.0);
        assert_eq!(style.stroke_width(0.1, false), 3.0);
    }

    #[test]
    fn hover_widens_stroke() {
        let style = StrokeStyle::default();
        assert_eq!(style.stroke_width(0.5, true), 7.5 * 1.5);
        assert_eq!(style.stroke_width(0.0, true), 3.0 * 1.5);
    }

    #[test]
    fn opacity_scales_and_clamps() {
        let style = StrokeStyle::default();
        assert!((style.stroke_opacity(1.0) - 1.0).abs() < 1e-12);
        assert!((style.stroke_opacity(0.5) - 0.6).abs() < 1e-12);
        assert_eq!(style.stroke_opacity(0.0), 0.5);
    }
}
