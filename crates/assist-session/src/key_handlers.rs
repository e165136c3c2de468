use tracing::debug;

use assist_core::dom::{Panel, TextField};

use super::types::{Channel, EventResponse, Key, SuggestionQuery, SuggestionRequest};
use super::InputAssistant;

impl<F: TextField, P: Panel> InputAssistant<F, P> {
    /// The whole field value is the autocomplete prefix. Any typo panel goes
    /// away first: its captured span no longer matches the text.
    pub(super) fn handle_input(&mut self) -> EventResponse {
        self.clear_channel(Channel::Typo);

        let prefix = self.field.value();
        if prefix.is_empty() {
            self.clear_channel(Channel::Autocomplete);
            return EventResponse::handled();
        }

        let generation = self.requests_mut(Channel::Autocomplete).issue();
        debug!(prefix = %prefix, generation, "autocomplete request issued");
        EventResponse::with_request(SuggestionRequest {
            query: SuggestionQuery::Autocomplete { prefix },
            generation,
        })
    }

    /// Arrow-left, arrow-right and escape hide both panels; other keys are ignored.
    pub(super) fn handle_key_up(&mut self, key: &Key) -> EventResponse {
        if !key.suppresses_panels() {
            return EventResponse::not_handled();
        }
        self.suppress_panels();
        EventResponse::handled()
    }

    pub(super) fn handle_row_click(&mut self, channel: Channel, index: usize) -> EventResponse {
        match self.presenter.commit(channel, index, &mut self.field) {
            Some(word) => EventResponse {
                commit: Some(word),
                ..EventResponse::handled()
            },
            None => EventResponse::not_handled(),
        }
    }
}
