//! Collaborator traits for the fixed DOM contract: one text input and two
//! result lists. The controller only ever touches the page through these.
//!
//! All offsets are character offsets (Unicode scalar values) into the value.

/// The single text input the assistant is bound to.
pub trait TextField {
    fn value(&self) -> String;
    fn set_value(&mut self, value: &str);
    /// Current selection as `(start, end)`; `start == end` is a bare caret.
    fn selection(&self) -> (usize, usize);
    fn set_selection(&mut self, start: usize, end: usize);
    fn focus(&mut self);
}

/// One suggestion list container.
pub trait Panel {
    fn is_visible(&self) -> bool;
    fn set_visible(&mut self, visible: bool);
    /// Remove every row.
    fn clear(&mut self);
    fn append_row(&mut self, word: &str);
    fn rows(&self) -> Vec<String>;
}

/// In-memory text input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryField {
    value: String,
    start: usize,
    end: usize,
    focused: bool,
}

impl MemoryField {
    pub fn new(value: &str) -> Self {
        let mut field = Self::default();
        field.set_value(value);
        field
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Insert `text` at the caret (replacing any selection), like a keystroke.
    pub fn type_text(&mut self, text: &str) {
        let chars: Vec<char> = self.value.chars().collect();
        let mut value: String = chars[..self.start].iter().collect();
        value.push_str(text);
        value.extend(&chars[self.end..]);
        let caret = self.start + text.chars().count();
        self.value = value;
        self.start = caret;
        self.end = caret;
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }
}

impl TextField for MemoryField {
    fn value(&self) -> String {
        self.value.clone()
    }

    /// Replacing the value moves the caret to the end, as browsers do.
    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        let len = self.len();
        self.start = len;
        self.end = len;
    }

    fn selection(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    fn set_selection(&mut self, start: usize, end: usize) {
        let len = self.len();
        let end = end.min(len);
        self.start = start.min(end);
        self.end = end;
    }

    fn focus(&mut self) {
        self.focused = true;
    }
}

/// In-memory suggestion list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPanel {
    visible: bool,
    rows: Vec<String>,
}

impl MemoryPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Panel for MemoryPanel {
    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn clear(&mut self) {
        self.rows.clear();
    }

    fn append_row(&mut self, word: &str) {
        self.rows.push(word.to_string());
    }

    fn rows(&self) -> Vec<String> {
        self.rows.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_value_moves_caret_to_end() {
        let mut field = MemoryField::new("abc");
        field.set_selection(0, 1);
        field.set_value("hello");
        assert_eq!(field.selection(), (5, 5));
    }

    #[test]
    fn selection_is_clamped() {
        let mut field = MemoryField::new("abc");
        field.set_selection(2, 10);
        assert_eq!(field.selection(), (2, 3));
        field.set_selection(7, 9);
        assert_eq!(field.selection(), (3, 3));
    }

    #[test]
    fn type_text_replaces_selection() {
        let mut field = MemoryField::new("I went too the store");
        field.set_selection(7, 10);
        field.type_text("to");
        assert_eq!(field.value(), "I went to the store");
        assert_eq!(field.selection(), (9, 9));
    }

    #[test]
    fn type_text_counts_chars_not_bytes() {
        let mut field = MemoryField::new("café");
        field.type_text("s");
        assert_eq!(field.value(), "cafés");
        assert_eq!(field.selection(), (5, 5));
    }

    #[test]
    fn panel_clear_keeps_visibility() {
        let mut panel = MemoryPanel::new();
        panel.set_visible(true);
        panel.append_row("world");
        panel.clear();
        assert!(panel.is_visible());
        assert!(panel.is_empty());
    }
}
