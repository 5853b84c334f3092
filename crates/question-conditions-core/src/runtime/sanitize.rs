// crates/question-conditions-core/src/runtime/sanitize.rs
// ============================================================================
// Module: Input Sanitization
// Description: Markup stripping and length capping for untrusted strings.
// Purpose: Keep persisted condition strings free of markup and bounded.
// Dependencies: crate::core::condition
// ============================================================================

//! ## Overview
//! Condition documents arrive from authoring surfaces as untrusted input.
//! Comparison values keep their text minus any HTML-like tag sequences and
//! are capped at [`VALUE_MAX_CHARS`]; grouping labels are reduced to a safe
//! identifier alphabet and capped at [`GROUP_MAX_CHARS`]. Sanitization is
//! idempotent: re-sanitizing produced output returns it unchanged, which is
//! what makes validated conditions round-trip through their wire form.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::condition::GROUP_MAX_CHARS;
use crate::core::condition::VALUE_MAX_CHARS;

// ============================================================================
// SECTION: Value Sanitization
// ============================================================================

/// Strips HTML-like tag sequences and truncates to [`VALUE_MAX_CHARS`].
///
/// Tag stripping removes every span from `<` up to and including the next
/// `>`; an unterminated `<` drops the remainder of the string. Truncation
/// counts characters, not bytes, so multi-byte input cannot be split inside
/// a code point.
#[must_use]
pub fn sanitize_value(raw: &str) -> String {
    truncate_chars(&strip_markup(raw), VALUE_MAX_CHARS)
}

/// Reduces a grouping label to `[A-Za-z0-9_-]` and caps it at
/// [`GROUP_MAX_CHARS`], returning `None` when nothing survives.
#[must_use]
pub fn sanitize_group(raw: &str) -> Option<String> {
    let filtered: String = raw
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '_' || *ch == '-')
        .take(GROUP_MAX_CHARS)
        .collect();
    if filtered.is_empty() { None } else { Some(filtered) }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Removes `<...>` tag sequences from the input.
fn strip_markup(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut inside_tag = false;
    for ch in raw.chars() {
        match ch {
            '<' => inside_tag = true,
            '>' if inside_tag => inside_tag = false,
            _ if inside_tag => {}
            _ => out.push(ch),
        }
    }
    out
}

/// Truncates to at most `max_chars` characters.
fn truncate_chars(input: &str, max_chars: usize) -> String {
    input.chars().take(max_chars).collect()
}
