#![forbid(unsafe_code)]

//! LRU cache over measured text widths.
//!
//! Measurement sits on the layout hot path: every token is re-measured on
//! every layout pass, and real inputs repeat tokens constantly. The cache
//! stores measured pixel widths keyed by a 64-bit FxHash of the text, so a
//! repeated token costs a hash lookup instead of a measurer round-trip.
//!
//! Keys are hashes, not full strings; with a 64-bit hash the collision
//! probability is negligible for visualization-sized inputs.
//!
//! # Example
//! ```
//! use attnview_text::MeasureCache;
//!
//! let mut cache = MeasureCache::new(1024);
//! let w = cache.get_or_measure("Hello", |_| 42.0);
//! assert_eq!(w, 42.0);
//! assert_eq!(cache.stats().misses, 1);
//!
//! let w = cache.get_or_measure("Hello", |_| 99.0); // not called
//! assert_eq!(w, 42.0);
//! assert_eq!(cache.stats().hits, 1);
//! ```

use lru::LruCache;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;

use crate::measure::TextMeasurer;

/// Default cache capacity.
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Cache performance counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
    pub capacity: usize,
}

impl CacheStats {
    /// Hit rate in [0, 1]; zero when no lookups have happened.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache mapping text to measured pixel width.
#[derive(Debug)]
pub struct MeasureCache {
    cache: LruCache<u64, f64>,
    hits: u64,
    misses: u64,
}

impl MeasureCache {
    /// Create a cache with the given capacity (clamped to at least 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).expect("capacity clamped to >= 1");
        Self {
            cache: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Return the cached width for `text`, measuring on a miss.
    pub fn get_or_measure<F>(&mut self, text: &str, measure: F) -> f64
    where
        F: FnOnce(&str) -> f64,
    {
        let key = hash_text(text);
        if let Some(&width) = self.cache.get(&key) {
            self.hits += 1;
            return width;
        }
        self.misses += 1;
        let width = measure(text);
        self.cache.put(key, width);
        width
    }

    /// Cached width without measuring, or `None` on a miss. Updates LRU order.
    #[must_use]
    pub fn get(&mut self, text: &str) -> Option<f64> {
        self.cache.get(&hash_text(text)).copied()
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.cache.len(),
            capacity: self.cache.cap().get(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for MeasureCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

/// A [`TextMeasurer`] that caches another measurer's results.
///
/// The cache key is the text alone, so a `CachingMeasurer` must wrap a
/// measurer whose font configuration does not change underneath it; build a
/// fresh one when the font changes.
#[derive(Debug)]
pub struct CachingMeasurer<M> {
    inner: M,
    cache: MeasureCache,
}

impl<M: TextMeasurer> CachingMeasurer<M> {
    #[must_use]
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            cache: MeasureCache::default(),
        }
    }

    #[must_use]
    pub fn with_capacity(inner: M, capacity: usize) -> Self {
        Self {
            inner,
            cache: MeasureCache::new(capacity),
        }
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Drop cached widths, e.g. after the wrapped measurer's font changed.
    pub fn invalidate(&mut self) {
        self.cache.clear();
    }
}

impl<M: TextMeasurer> TextMeasurer for CachingMeasurer<M> {
    fn measure(&mut self, text: &str) -> f64 {
        let inner = &mut self.inner;
        self.cache.get_or_measure(text, |t| inner.measure(t))
    }
}

#[inline]
fn hash_text(text: &str) -> u64 {
    let mut hasher = FxHasher::default();
    text.hash(&mut hasher);
    hasher.finish()
}
