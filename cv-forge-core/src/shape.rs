//! Bidirectional shaping for the fixed-page renderer.
//!
//! The fixed-page backend draws strings strictly left-to-right, so lines that
//! contain Arabic-script runs must be converted to visual order first: join
//! the letters into their contextual presentation forms, then reorder each
//! right-to-left run. The flow-document format is not shaped here; its
//! readers perform bidi layout themselves.

use ar_reshaper::ArabicReshaper;
use std::panic::{catch_unwind, AssertUnwindSafe};
use unicode_bidi::BidiInfo;

/// Returns a visually-ordered, glyph-joined rendition of `text` for a
/// renderer that lays out strings left-to-right.
///
/// Pure-Latin input is returned unchanged. Fail-open: on any internal
/// failure the original text is returned, since a garbled fallback is less
/// harmful than a crashed render.
pub fn shape(text: &str) -> String {
    if !has_rtl(text) {
        return text.to_string();
    }
    match catch_unwind(AssertUnwindSafe(|| reorder(text))) {
        Ok(shaped) => shaped,
        Err(_) => {
            tracing::warn!(len = text.len(), "Bidi shaping failed, using raw text");
            text.to_string()
        }
    }
}

fn reorder(text: &str) -> String {
    let reshaper = ArabicReshaper::default();
    let joined = reshaper.reshape(text);

    let bidi = BidiInfo::new(&joined, None);
    let mut out = String::with_capacity(joined.len());
    for paragraph in &bidi.paragraphs {
        out.push_str(&bidi.reorder_line(paragraph, paragraph.range.clone()));
    }
    out
}

fn has_rtl(text: &str) -> bool {
    text.chars().any(|c| {
        matches!(c,
            '\u{0590}'..='\u{08FF}'            // Hebrew, Arabic, Syriac, extensions
            | '\u{FB50}'..='\u{FDFF}'          // Arabic presentation forms A
            | '\u{FE70}'..='\u{FEFF}'          // Arabic presentation forms B
        )
    })
}
