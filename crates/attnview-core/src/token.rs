#![forbid(unsafe_code)]

//! Token model.
//!
//! A [`Token`] is one discrete unit of analyzed text. The `raw` field is the
//! string exactly as the analysis produced it (it may contain newlines,
//! controls, or other invisible characters); `display` is the human-safe
//! rendition produced by the sanitizer in `attnview-text`. Tokens are
//! immutable once built for a given analysis and are rebuilt wholesale when
//! the token list changes.

/// One analyzed text unit, positioned and rendered individually.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Position in the analyzed sequence, zero-based and stable.
    pub index: usize,
    /// Text exactly as produced by the analysis backend.
    pub raw: String,
    /// Sanitized text safe for on-screen display.
    pub display: String,
}

impl Token {
    #[must_use]
    pub fn new(index: usize, raw: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            index,
            raw: raw.into(),
            display: display.into(),
        }
    }
}
