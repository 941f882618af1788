#![forbid(unsafe_code)]

//! Text handling for attnview.
//!
//! This crate provides the text-facing capabilities of the engine:
//! - [`TextMeasurer`] - injected width-measurement capability
//! - [`MonospaceMeasurer`] - deterministic measurer for headless use and tests
//! - [`MeasureCache`] - LRU cache over measured widths
//! - [`display_text`] - control-character sanitization for token display
//!
//! # Example
//! ```
//! use attnview_text::{FontSpec, MonospaceMeasurer, TextMeasurer, display_text};
//!
//! let mut measurer = MonospaceMeasurer::new(FontSpec::default());
//! let w = measurer.measure("Hello");
//! assert!(w > 0.0);
//!
//! assert_eq!(display_text("a\tb"), "a\\tb");
//! ```

pub mod measure;
pub mod sanitize;
pub mod width_cache;

pub use measure::{FnMeasurer, FontSpec, MonospaceMeasurer, TextMeasurer};
pub use sanitize::display_text;
pub use width_cache::{CacheStats, CachingMeasurer, MeasureCache};
