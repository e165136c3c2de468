//! Selection Extractor: turns the raw selection of a text field into the
//! single word a typo correction should be requested for.

use crate::dom::TextField;

/// Half-open character range `[start, end)` in the field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// A selected word. `text` is trimmed; `start`/`end` are the original,
/// untrimmed bounds so a later replacement covers exactly what was selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

/// Read the field's current selection and extract the selected word.
pub fn selected_word<F: TextField + ?Sized>(field: &F) -> Option<Selection> {
    let (start, end) = field.selection();
    selected_word_in(&field.value(), start, end)
}

/// Pure form of [`selected_word`].
///
/// Returns `None` for a bare caret, for a selection that is blank once
/// trimmed, and for a selection with whitespace inside the trimmed text.
/// An `end` past the value is clamped to its length.
pub fn selected_word_in(value: &str, start: usize, end: usize) -> Option<Selection> {
    let end = end.min(value.chars().count());
    if start >= end {
        return None;
    }
    let raw: String = value.chars().skip(start).take(end - start).collect();
    let text = raw.trim();
    if text.is_empty() || text.chars().any(char::is_whitespace) {
        return None;
    }
    Some(Selection {
        text: text.to_string(),
        start,
        end,
    })
}

/// Replace the characters in `span` with `word`, returning the new value and
/// the caret position right after the inserted word.
///
/// Span bounds past the end of `value` are clamped, so a span captured
/// against an older value never panics.
pub fn replace_span(value: &str, span: Span, word: &str) -> (String, usize) {
    let chars: Vec<char> = value.chars().collect();
    let end = span.end.min(chars.len());
    let start = span.start.min(end);
    let mut out: String = chars[..start].iter().collect();
    out.push_str(word);
    out.extend(&chars[end..]);
    (out, start + word.chars().count())
}
