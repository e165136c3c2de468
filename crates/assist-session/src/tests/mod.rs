mod proptest_fsm;

use std::collections::HashMap;
use std::sync::Mutex;

use assist_core::client::SuggestionClient;
use assist_core::dom::{MemoryField, MemoryPanel, TextField};
use assist_core::suggestion::{AutocompleteItem, TypoItem};

use super::{DomEvent, EventResponse, EventTarget, InputAssistant};

pub(super) type TestAssistant = InputAssistant<MemoryField, MemoryPanel>;

pub(super) fn make_assistant(value: &str) -> TestAssistant {
    InputAssistant::new(MemoryField::new(value), MemoryPanel::new(), MemoryPanel::new())
}

/// Drag-select `[start, end)` on the field and release on it.
pub(super) fn drag_select(assistant: &mut TestAssistant, start: usize, end: usize) -> EventResponse {
    assistant.handle_event(DomEvent::PointerDown);
    assistant.field_mut().set_selection(start, end);
    assistant.handle_event(DomEvent::PointerMove);
    assistant.handle_event(DomEvent::PointerUp(EventTarget::Field))
}

/// Click at `caret` without dragging.
pub(super) fn click_at(assistant: &mut TestAssistant, caret: usize) -> EventResponse {
    assistant.handle_event(DomEvent::PointerDown);
    assistant.field_mut().set_selection(caret, caret);
    assistant.handle_event(DomEvent::PointerUp(EventTarget::Field))
}

/// Type `text` at the caret and fire the input event.
pub(super) fn type_text(assistant: &mut TestAssistant, text: &str) -> EventResponse {
    assistant.field_mut().type_text(text);
    assistant.handle_event(DomEvent::Input)
}

pub(super) fn typo(words: &[&str]) -> Vec<TypoItem> {
    words.iter().map(|w| TypoItem::new(w)).collect()
}

pub(super) fn completions(words: &[&str]) -> Vec<AutocompleteItem> {
    words
        .iter()
        .enumerate()
        .map(|(i, w)| AutocompleteItem::new(w, (words.len() - i) as f64))
        .collect()
}

/// Scripted in-memory client that records every query it sees.
#[derive(Default)]
pub(super) struct FakeClient {
    typo: HashMap<String, Vec<TypoItem>>,
    autocomplete: HashMap<String, Vec<AutocompleteItem>>,
    pub(super) typo_calls: Mutex<Vec<String>>,
    pub(super) autocomplete_calls: Mutex<Vec<String>>,
}

impl FakeClient {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn with_typo(mut self, word: &str, items: &[&str]) -> Self {
        self.typo.insert(word.to_string(), typo(items));
        self
    }

    pub(super) fn with_completions(mut self, prefix: &str, items: &[&str]) -> Self {
        self.autocomplete
            .insert(prefix.to_string(), completions(items));
        self
    }

    pub(super) fn typo_calls(&self) -> Vec<String> {
        self.typo_calls.lock().unwrap().clone()
    }

    pub(super) fn autocomplete_calls(&self) -> Vec<String> {
        self.autocomplete_calls.lock().unwrap().clone()
    }
}

impl SuggestionClient for FakeClient {
    fn typo_corrections(&self, word: &str) -> Vec<TypoItem> {
        self.typo_calls.lock().unwrap().push(word.to_string());
        self.typo.get(word).cloned().unwrap_or_default()
    }

    fn autocomplete(&self, prefix: &str) -> Vec<AutocompleteItem> {
        if prefix.is_empty() {
            return Vec::new();
        }
        self.autocomplete_calls
            .lock()
            .unwrap()
            .push(prefix.to_string());
        self.autocomplete.get(prefix).cloned().unwrap_or_default()
    }
}

pub(super) fn field_value(assistant: &TestAssistant) -> String {
    assistant.field().value()
}
