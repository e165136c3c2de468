use tracing::debug;

use assist_core::dom::{Panel, TextField};
use assist_core::drag::DragEffect;
use assist_core::selection::selected_word;

use super::types::{Channel, EventResponse, EventTarget, SuggestionQuery, SuggestionRequest};
use super::InputAssistant;

impl<F: TextField, P: Panel> InputAssistant<F, P> {
    fn apply_drag_effect(&mut self, effect: DragEffect) {
        if effect == DragEffect::SuppressPanels {
            self.suppress_panels();
        }
    }

    pub(super) fn handle_pointer_down(&mut self) -> EventResponse {
        let (drag, effect) = self.drag.pointer_down();
        self.drag = drag;
        self.apply_drag_effect(effect);
        EventResponse::handled()
    }

    pub(super) fn handle_pointer_move(&mut self) -> EventResponse {
        let (drag, effect) = self.drag.pointer_move();
        self.drag = drag;
        if effect == DragEffect::None {
            return EventResponse::not_handled();
        }
        self.apply_drag_effect(effect);
        EventResponse::handled()
    }

    /// Releases the pointer; on the field this also evaluates the selection
    /// for typo suggestions. A press that began outside the field never saw
    /// a pointer-down here, so the autocomplete panel is cleared again before
    /// the typo request goes out.
    pub(super) fn handle_pointer_up(&mut self, target: EventTarget) -> EventResponse {
        let (drag, effect) = self.drag.pointer_up();
        self.drag = drag;
        self.apply_drag_effect(effect);

        if target == EventTarget::Document {
            return EventResponse::handled();
        }

        let Some(selection) = selected_word(&self.field) else {
            self.presenter.hide(Channel::Typo);
            return EventResponse::handled();
        };

        self.clear_channel(Channel::Autocomplete);
        let generation = self.requests_mut(Channel::Typo).issue();
        debug!(word = %selection.text, generation, "typo request issued");
        EventResponse::with_request(SuggestionRequest {
            query: SuggestionQuery::Typo {
                span: selection.span(),
                word: selection.text,
            },
            generation,
        })
    }
}
