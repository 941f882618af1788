#![forbid(unsafe_code)]

//! Interaction runtime for attnview.
//!
//! Ties the layout, selection, and curve layers together behind a single
//! stateful [`Visualizer`] and owns everything event-driven:
//!
//! - [`InteractionState`] - hover/lock/path-hover state machine
//! - [`DebounceTimer`] - single-slot cancellable deadline for hover exit
//! - [`clamp_anchor`] / [`format_weight_percent`] - tooltip projection
//! - [`Visualizer`] - orchestrator consuming [`PointerEvent`]s and serving
//!   immutable snapshots to the renderer
//!
//! Everything runs synchronously on the calling thread; time enters only as
//! explicit `Instant` arguments, so tests drive transitions with a fake
//! clock.

pub mod debounce;
pub mod interaction;
pub mod tooltip;
pub mod visualizer;

pub use debounce::DebounceTimer;
pub use interaction::{FocusState, InteractionState, LockChange, PathHoverChange};
pub use tooltip::{TooltipConfig, clamp_anchor, format_weight_percent};
pub use visualizer::{HoveredEdgeDetail, RenderedEdge, Visualizer, VisualizerConfig};
