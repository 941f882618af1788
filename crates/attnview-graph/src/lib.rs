#![forbid(unsafe_code)]

//! Attention-graph model: weight matrices, edge selection, curve geometry.
//!
//! This crate turns an attention matrix plus a focus state into a small,
//! ranked set of drawable edges:
//!
//! - [`AttentionMatrix`] / [`AttentionData`] - caller-supplied weights,
//!   one square matrix per model layer
//! - [`select_edges`] - overview vs focused top-K edge selection
//! - [`curve_between`] / [`curve_for`] - Bézier geometry connecting two
//!   positioned tokens
//! - [`StrokeStyle`] - weight-derived stroke width and opacity
//!
//! Selection and geometry are pure functions over their inputs; they never
//! validate the matrix against the token count but bounds-check every access
//! and skip anything out of range, so mismatched caller data degrades to
//! missing edges rather than a panic.

pub mod curve;
pub mod matrix;
pub mod select;
pub mod style;

pub use curve::{CurveConfig, PathSpec, curve_between, curve_for};
pub use matrix::{AttentionData, AttentionMatrix, DataError};
pub use select::{AttentionEdge, EdgeRole, SelectionConfig, select_edges};
pub use style::StrokeStyle;
