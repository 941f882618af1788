#![forbid(unsafe_code)]

//! attnview public facade.
//!
//! Re-exports the stable surface of the engine and offers a [`prelude`] for
//! day-to-day usage. The engine renders nothing itself: it turns tokens plus
//! an attention matrix into positioned tokens, ranked curved edges, and
//! tooltip projections, and leaves pixels to the host.
//!
//! # Example
//! ```
//! use attnview::prelude::*;
//! use std::time::Instant;
//!
//! let mut viz = Visualizer::new(MonospaceMeasurer::default());
//! viz.set_analysis(AttentionData::new(
//!     vec!["Hello".into(), "world".into()],
//!     vec![AttentionMatrix::from_rows(vec![
//!         vec![0.0, 0.5],
//!         vec![0.0, 0.0],
//!     ])],
//! ));
//!
//! assert_eq!(viz.edges().len(), 1);
//! viz.handle_event(PointerEvent::TokenClick(0), Instant::now());
//! assert_eq!(viz.focus().locked, Some(0));
//! ```

// --- Core re-exports -------------------------------------------------------

pub use attnview_core::event::PointerEvent;
pub use attnview_core::geometry::{CanvasSize, Point};
pub use attnview_core::token::Token;

// --- Text re-exports -------------------------------------------------------

pub use attnview_text::{
    CachingMeasurer, FnMeasurer, FontSpec, MeasureCache, MonospaceMeasurer, TextMeasurer,
    display_text,
};

// --- Layout re-exports -----------------------------------------------------

pub use attnview_layout::{LayoutConfig, TokenLayout, TokenPosition, WrapConfig, layout_tokens};

// --- Graph re-exports ------------------------------------------------------

pub use attnview_graph::{
    AttentionData, AttentionEdge, AttentionMatrix, CurveConfig, DataError, EdgeRole, PathSpec,
    SelectionConfig, StrokeStyle, curve_between, curve_for, select_edges,
};

// --- Runtime re-exports ----------------------------------------------------

pub use attnview_runtime::{
    DebounceTimer, FocusState, HoveredEdgeDetail, InteractionState, LockChange, PathHoverChange,
    RenderedEdge, TooltipConfig, Visualizer, VisualizerConfig, clamp_anchor,
    format_weight_percent,
};

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use crate::{
        AttentionData, AttentionMatrix, CanvasSize, EdgeRole, FocusState, LockChange,
        MonospaceMeasurer, PathSpec, Point, PointerEvent, RenderedEdge, StrokeStyle, TextMeasurer,
        Token, TokenPosition, Visualizer, VisualizerConfig, WrapConfig,
    };
}
