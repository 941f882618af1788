#![forbid(unsafe_code)]

//! Control-character sanitization for token display.
//!
//! Model tokenizers emit tokens containing newlines, tabs, NULs, replacement
//! characters, and other invisibles. Rendering those raw either collapses
//! the glyph to nothing or breaks the surrounding markup, so every token is
//! mapped through [`display_text`] exactly once when the token list changes.
//!
//! The mapping is total and pure: it walks characters in index order and
//! never fails, for any input including the empty string.

use std::fmt::Write as _;

/// Map raw token text to a human-safe display string.
///
/// Substitutions:
/// - `\n`, `\r`, `\t`, NUL become the literal two-character escapes
///   `\n`, `\r`, `\t`, `\0`
/// - U+FFFD (replacement character) becomes `[?]`
/// - U+00A0 (no-break space) becomes `[NBSP]`
/// - any other C0/C1 control becomes a `\uXXXX` escape (four uppercase hex
///   digits)
/// - everything else passes through unchanged
#[must_use]
pub fn display_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            '\u{FFFD}' => out.push_str("[?]"),
            '\u{00A0}' => out.push_str("[NBSP]"),
            // char::is_control covers exactly C0, DEL, and C1.
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(display_text("Hello"), "Hello");
        assert_eq!(display_text(" world"), " world");
    }

    #[test]
    fn empty_string_is_empty() {
        assert_eq!(display_text(""), "");
    }

    #[test]
    fn named_escapes() {
        assert_eq!(display_text("a\nb"), "a\\nb");
        assert_eq!(display_text("a\rb"), "a\\rb");
        assert_eq!(display_text("a\tb"), "a\\tb");
        assert_eq!(display_text("a\0b"), "a\\0b");
    }

    #[test]
    fn replacement_char_and_nbsp() {
        assert_eq!(display_text("\u{FFFD}"), "[?]");
        assert_eq!(display_text("\u{00A0}"), "[NBSP]");
    }

    #[test]
    fn other_controls_become_hex_escapes() {
        assert_eq!(display_text("\u{0001}"), "\\u0001");
        assert_eq!(display_text("\u{001B}"), "\\u001B");
        assert_eq!(display_text("\u{007F}"), "\\u007F");
        assert_eq!(display_text("\u{0085}"), "\\u0085");
    }

    #[test]
    fn mixed_input_in_index_order() {
        assert_eq!(display_text("\tHi\u{0001}!\n"), "\\tHi\\u0001!\\n");
    }

    #[test]
    fn unicode_passes_through() {
        assert_eq!(display_text("héllo 日本語 🎉"), "héllo 日本語 🎉");
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn never_panics_and_output_has_no_raw_controls(s in any::<String>()) {
                let out = display_text(&s);
                prop_assert!(out.chars().all(|c| !c.is_control()));
            }

            #[test]
            fn control_heavy_input_is_handled(s in proptest::collection::vec(0u32..0xA0, 0..64)) {
                let raw: String = s.into_iter().filter_map(char::from_u32).collect();
                let out = display_text(&raw);
                prop_assert!(out.chars().all(|c| !c.is_control()));
            }

            #[test]
            fn clean_input_round_trips(s in "[a-zA-Z0-9 .,!?]*") {
                prop_assert_eq!(display_text(&s), s);
            }
        }
    }
}
