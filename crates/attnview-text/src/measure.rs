#![forbid(unsafe_code)]

//! Width measurement capability.
//!
//! The layout engine never touches a platform text facility directly; it
//! receives a [`TextMeasurer`] and asks it for rendered pixel widths. A host
//! embedding the engine next to a real canvas passes an adapter over its
//! platform's measure call; headless hosts and tests use
//! [`MonospaceMeasurer`], which is fully deterministic.
//!
//! [`FnMeasurer`] wraps a plain closure, so a test can inject
//! `FnMeasurer(|t: &str| t.len() as f64 * 10.0)` without further ceremony.

use unicode_width::UnicodeWidthStr;

/// Font description a measurer resolves widths against.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    /// Font size in pixels.
    pub size_px: f64,
    /// Font family name.
    pub family: String,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            size_px: 14.0,
            family: "monospace".to_string(),
        }
    }
}

/// Injected capability: rendered pixel width of a string.
pub trait TextMeasurer {
    /// Measure the rendered width of `text` in pixels.
    fn measure(&mut self, text: &str) -> f64;
}

/// Adapter turning any `FnMut(&str) -> f64` closure into a measurer.
#[derive(Debug, Clone)]
pub struct FnMeasurer<F>(pub F);

impl<F: FnMut(&str) -> f64> TextMeasurer for FnMeasurer<F> {
    fn measure(&mut self, text: &str) -> f64 {
        (self.0)(text)
    }
}

/// Nominal advance width of one monospace cell, as a fraction of font size.
const MONO_ADVANCE_RATIO: f64 = 0.6;

/// Deterministic measurer for monospace fonts.
///
/// Width is the Unicode display width in cells times a nominal per-cell
/// advance derived from the font size. This matches how a fixed-pitch font
/// renders closely enough for layout purposes and, unlike a platform canvas,
/// produces identical results on every machine.
#[derive(Debug, Clone)]
pub struct MonospaceMeasurer {
    font: FontSpec,
}

impl MonospaceMeasurer {
    #[must_use]
    pub fn new(font: FontSpec) -> Self {
        Self { font }
    }

    #[must_use]
    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    /// Pixel advance of a single cell for the configured font.
    #[must_use]
    pub fn cell_px(&self) -> f64 {
        self.font.size_px * MONO_ADVANCE_RATIO
    }
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self::new(FontSpec::default())
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&mut self, text: &str) -> f64 {
        text.width() as f64 * self.cell_px()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_font_is_14px_monospace() {
        let font = FontSpec::default();
        assert_eq!(font.size_px, 14.0);
        assert_eq!(font.family, "monospace");
    }

    #[test]
    fn monospace_measure_is_linear_in_cells() {
        let mut m = MonospaceMeasurer::default();
        let one = m.measure("a");
        let five = m.measure("abcde");
        assert!((five - one * 5.0).abs() < 1e-9);
    }

    #[test]
    fn wide_chars_take_two_cells() {
        let mut m = MonospaceMeasurer::default();
        assert!((m.measure("你") - m.measure("ab")).abs() < 1e-9);
    }

    #[test]
    fn empty_string_is_zero() {
        let mut m = MonospaceMeasurer::default();
        assert_eq!(m.measure(""), 0.0);
    }

    #[test]
    fn measure_is_deterministic() {
        let mut m = MonospaceMeasurer::default();
        assert_eq!(m.measure("Hello world"), m.measure("Hello world"));
    }

    #[test]
    fn closures_measure_through_the_adapter() {
        let mut fake = FnMeasurer(|t: &str| t.len() as f64 * 10.0);
        assert_eq!(fake.measure("abc"), 30.0);
    }
}
