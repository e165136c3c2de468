use tracing::debug;

use assist_core::dom::{Panel, TextField};

use super::types::{Channel, SuggestionQuery, SuggestionResult, Suggestions};
use super::InputAssistant;

impl<F: TextField, P: Panel> InputAssistant<F, P> {
    /// Deliver a resolved request. Returns true if it was rendered.
    ///
    /// By default every result is rendered as it arrives, so the last one to
    /// resolve wins. Typo results are rendered against the span captured when
    /// the request was issued, not the field's current selection. A panel
    /// that comes up takes the other one down.
    pub fn receive(&mut self, result: SuggestionResult) -> bool {
        let SuggestionResult {
            request,
            suggestions,
        } = result;
        let channel = request.channel();
        let tracker = self.requests_mut(channel);
        tracker.settle();
        let current = tracker.is_current(request.generation);

        if self.config.sequence_responses && !current {
            debug!(?channel, generation = request.generation, "stale result discarded");
            return false;
        }

        match (request.query, suggestions) {
            (SuggestionQuery::Typo { span, .. }, Suggestions::Typo(items)) => {
                self.presenter.render_typo(items, span);
            }
            (SuggestionQuery::Autocomplete { .. }, Suggestions::Autocomplete(items)) => {
                self.presenter.render_autocomplete(items);
            }
            _ => {
                debug!(?channel, "result does not match its request, ignored");
                return false;
            }
        }
        if self.presenter.is_shown(channel) {
            self.presenter.hide(channel.other());
        }
        true
    }

    /// Whether `generation` is the newest request issued on `channel` with
    /// no invalidation since.
    pub fn is_latest(&self, channel: Channel, generation: u64) -> bool {
        self.requests(channel).is_current(generation)
    }
}
