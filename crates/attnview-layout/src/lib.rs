#![forbid(unsafe_code)]

//! Row layout engine for token sequences.
//!
//! Produces positioned tokens in world-unit f64 coordinates: tokens flow
//! left to right, wrapping to a new row every `max_tokens_per_line` tokens
//! when wrapping is enabled. The engine is fully deterministic: the same
//! tokens, configuration, and measurer always produce identical geometry,
//! with no RNG and no hidden global state.
//!
//! # Pipeline
//! 1. Measure each token through the injected [`TextMeasurer`]
//! 2. Pad and clamp to the minimum token width
//! 3. Walk the cursor, closing a row at each wrap boundary
//! 4. Derive row count and canvas extent from the walk
//!
//! # Example
//! ```
//! use attnview_layout::{LayoutConfig, WrapConfig, layout_tokens};
//! use attnview_text::FnMeasurer;
//!
//! let mut measure = FnMeasurer(|t: &str| t.len() as f64 * 8.0);
//! let layout = layout_tokens(
//!     ["Hello", "world"],
//!     &WrapConfig::default(),
//!     &LayoutConfig::default(),
//!     &mut measure,
//! );
//! assert_eq!(layout.positions.len(), 2);
//! assert_eq!(layout.row_count, 1);
//! ```

use attnview_core::geometry::CanvasSize;
use attnview_text::TextMeasurer;
use tracing::trace;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Line-wrap configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapConfig {
    /// Whether tokens wrap onto multiple rows.
    pub enabled: bool,
    /// Tokens per row when wrapping. Values below 1 disable wrapping.
    pub max_tokens_per_line: usize,
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_tokens_per_line: 10,
        }
    }
}

impl WrapConfig {
    /// Effective tokens-per-line, `None` when layout is single-row.
    fn stride(&self) -> Option<usize> {
        if self.enabled && self.max_tokens_per_line >= 1 {
            Some(self.max_tokens_per_line)
        } else {
            None
        }
    }
}

/// Numeric knobs for token placement and canvas sizing.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Lower bound on a token's rendered width.
    pub min_token_width: f64,
    /// Horizontal padding added around measured text.
    pub token_padding: f64,
    /// Baseline y of the first row.
    pub row_base_y: f64,
    /// Vertical distance between row baselines.
    pub row_height: f64,
    /// X position where each row starts.
    pub start_padding: f64,
    /// Gap between adjacent tokens in a row.
    pub token_gap: f64,
    /// Padding added to the widest row for the canvas width.
    pub canvas_padding: f64,
    /// Extra canvas height below the last row.
    pub height_padding: f64,
    /// Lower bound on canvas width.
    pub min_canvas_width: f64,
    /// Lower bound on canvas height.
    pub min_canvas_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_token_width: 60.0,
            token_padding: 20.0,
            row_base_y: 80.0,
            row_height: 120.0,
            start_padding: 40.0,
            token_gap: 10.0,
            canvas_padding: 40.0,
            height_padding: 50.0,
            min_canvas_width: 400.0,
            min_canvas_height: 200.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// A positioned token.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenPosition {
    /// Index into the analyzed token sequence.
    pub index: usize,
    /// Center x of the token in canvas coordinates.
    pub x: f64,
    /// Baseline y of the token's row.
    pub y: f64,
    /// Zero-based row number.
    pub row: usize,
    /// Rendered width including padding.
    pub width: f64,
}

impl TokenPosition {
    #[must_use]
    pub fn left(&self) -> f64 {
        self.x - self.width / 2.0
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// Complete layout result.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TokenLayout {
    /// One position per token, in token order.
    pub positions: Vec<TokenPosition>,
    /// Number of rows used; 0 for an empty token sequence.
    pub row_count: usize,
    /// Canvas extent enclosing every row plus padding.
    pub canvas: CanvasSize,
}

// ---------------------------------------------------------------------------
// Layout walk
// ---------------------------------------------------------------------------

/// Lay out `tokens` on wrapped rows.
///
/// The walk keeps a running x-cursor starting at `start_padding`. Each
/// token's width is `max(measured + token_padding, min_token_width)`; at a
/// wrap boundary (a positive multiple of the tokens-per-line stride) the
/// current row closes, its cursor becomes a candidate for the widest-row
/// width, and the cursor resets. Canvas width is the widest row plus
/// `canvas_padding`, canvas height covers all rows plus `height_padding`,
/// both clamped to the configured minimums.
///
/// An empty token sequence yields empty positions, zero rows, and the
/// minimum canvas.
pub fn layout_tokens<'a, I, M>(
    tokens: I,
    wrap: &WrapConfig,
    config: &LayoutConfig,
    measurer: &mut M,
) -> TokenLayout
where
    I: IntoIterator<Item = &'a str>,
    M: TextMeasurer + ?Sized,
{
    let stride = wrap.stride();
    let mut positions = Vec::new();
    let mut cursor = config.start_padding;
    let mut row = 0usize;
    let mut max_row_width = 0.0f64;

    for (index, token) in tokens.into_iter().enumerate() {
        let measured = measurer.measure(token);
        let width = (measured + config.token_padding).max(config.min_token_width);

        if let Some(stride) = stride
            && index > 0
            && index % stride == 0
        {
            max_row_width = max_row_width.max(cursor);
            cursor = config.start_padding;
            row += 1;
        }

        positions.push(TokenPosition {
            index,
            x: cursor + width / 2.0,
            y: config.row_base_y + row as f64 * config.row_height,
            row,
            width,
        });

        cursor += width + config.token_gap;
    }

    if positions.is_empty() {
        return TokenLayout {
            positions,
            row_count: 0,
            canvas: CanvasSize::new(config.min_canvas_width, config.min_canvas_height),
        };
    }

    let row_count = row + 1;
    max_row_width = max_row_width.max(cursor);
    let canvas = CanvasSize::new(
        (max_row_width + config.canvas_padding).max(config.min_canvas_width),
        (config.row_base_y + row_count as f64 * config.row_height + config.height_padding)
            .max(config.min_canvas_height),
    );

    trace!(
        tokens = positions.len(),
        rows = row_count,
        width = canvas.width,
        height = canvas.height,
        "token layout recomputed"
    );

    TokenLayout {
        positions,
        row_count,
        canvas,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
