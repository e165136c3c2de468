//! Plain-text rendering of the field and both panels.

use unicode_width::UnicodeWidthStr;

use assist_engine::PanelState;

/// Render the field value with the selection bracketed, e.g. `hello [wrold]`
/// or `hello|` for a bare caret.
pub fn field_line(value: &str, selection: (usize, usize)) -> String {
    let (start, end) = selection;
    let mut out = String::new();
    for (i, ch) in value.chars().enumerate() {
        if i == start {
            out.push(if start == end { '|' } else { '[' });
        }
        if i == end && start != end {
            out.push(']');
        }
        out.push(ch);
    }
    let len = value.chars().count();
    if start >= len {
        out.push(if start == end { '|' } else { '[' });
    }
    if end >= len && start != end {
        out.push(']');
    }
    out
}

/// Draw a panel as a titled box, one row per suggestion. Hidden panels
/// render as a single line.
pub fn panel_box(title: &str, state: &PanelState) -> String {
    if !state.visible {
        return format!("{title}: (hidden)\n");
    }
    let inner = state
        .words
        .iter()
        .map(|w| w.width())
        .chain(std::iter::once(title.width()))
        .max()
        .unwrap_or(0)
        + 4;

    let mut out = String::new();
    out.push_str(&format!("┌ {title} {}┐\n", "─".repeat(inner - title.width() - 1)));
    for (i, word) in state.words.iter().enumerate() {
        let label = format!("{i}. {word}");
        let pad = (inner + 1).saturating_sub(label.width());
        out.push_str(&format!("│{label}{}│\n", " ".repeat(pad)));
    }
    out.push_str(&format!("└{}┘\n", "─".repeat(inner + 1)));
    out
}
