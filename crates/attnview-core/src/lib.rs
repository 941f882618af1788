#![forbid(unsafe_code)]

//! Core primitives for the attnview attention-graph engine.
//!
//! This crate holds the dependency-free value types shared by the rest of
//! the workspace:
//!
//! - [`Point`] and [`CanvasSize`] - world-unit geometry in f64 pixels
//! - [`Token`] - one analyzed text unit (raw text plus display text)
//! - [`PointerEvent`] - pointer input as seen by the interaction layer
//!
//! Everything here is plain data: no I/O, no platform dependency, no hidden
//! state. Higher-level crates (layout, graph, runtime) consume these types
//! and stay deterministic because of it.

pub mod event;
pub mod geometry;
pub mod token;

pub use event::PointerEvent;
pub use geometry::{CanvasSize, Point};
pub use token::Token;
