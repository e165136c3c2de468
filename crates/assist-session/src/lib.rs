//! Interaction controller for a text field with two suggestion channels.
//!
//! `InputAssistant` owns the text field and both panels, consumes raw page
//! events and returns an `EventResponse`. Fetches are never performed here:
//! a response may carry a `SuggestionRequest`, which the host resolves
//! (synchronously or on a worker) and hands back through `receive`.

pub(crate) mod types;

mod key_handlers;
mod pointer_handlers;
mod presenter;
mod receive;

#[cfg(test)]
mod tests;

use tracing::debug_span;

use assist_core::dom::{Panel, TextField};
use assist_core::drag::{DragState, PointerPhase};
use assist_core::settings::Settings;

pub use types::{
    Channel, ChannelPhase, DomEvent, EventResponse, EventTarget, Key, PanelState,
    SuggestionQuery, SuggestionRequest, SuggestionResult, Suggestions,
};

use presenter::Presenter;
use types::{RequestTracker, SessionConfig};

/// Event-driven controller over one text field and its two suggestion panels.
pub struct InputAssistant<F, P> {
    field: F,
    presenter: Presenter<P>,
    drag: DragState,

    config: SessionConfig,

    typo_requests: RequestTracker,
    autocomplete_requests: RequestTracker,
}

impl<F: TextField, P: Panel> InputAssistant<F, P> {
    pub fn new(field: F, autocomplete_panel: P, typo_panel: P) -> Self {
        Self {
            field,
            presenter: Presenter::new(autocomplete_panel, typo_panel),
            drag: DragState::default(),
            config: SessionConfig {
                sequence_responses: false,
            },
            typo_requests: RequestTracker::default(),
            autocomplete_requests: RequestTracker::default(),
        }
    }

    /// Construct with interaction options taken from `settings`.
    pub fn with_settings(field: F, autocomplete_panel: P, typo_panel: P, settings: &Settings) -> Self {
        let mut assistant = Self::new(field, autocomplete_panel, typo_panel);
        assistant.set_sequence_responses(settings.interaction.sequence_responses);
        assistant
    }

    /// Discard responses that are not from the newest request of their
    /// channel, or that predate a suppression event.
    pub fn set_sequence_responses(&mut self, enabled: bool) {
        self.config.sequence_responses = enabled;
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    /// Mutable access for the host to apply user edits before an `Input` event.
    pub fn field_mut(&mut self) -> &mut F {
        &mut self.field
    }

    pub fn panel(&self, channel: Channel) -> &P {
        self.presenter.panel(channel)
    }

    pub fn panel_state(&self, channel: Channel) -> PanelState {
        self.presenter.state(channel)
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn pointer_phase(&self) -> PointerPhase {
        self.drag.phase()
    }

    pub fn channel_phase(&self, channel: Channel) -> ChannelPhase {
        if self.presenter.is_shown(channel) {
            ChannelPhase::Shown
        } else if self.requests(channel).outstanding > 0 {
            ChannelPhase::Pending
        } else {
            ChannelPhase::Idle
        }
    }

    /// Number of requests issued on `channel` whose result has not come back.
    pub fn outstanding(&self, channel: Channel) -> usize {
        self.requests(channel).outstanding
    }

    fn requests(&self, channel: Channel) -> &RequestTracker {
        match channel {
            Channel::Autocomplete => &self.autocomplete_requests,
            Channel::Typo => &self.typo_requests,
        }
    }

    fn requests_mut(&mut self, channel: Channel) -> &mut RequestTracker {
        match channel {
            Channel::Autocomplete => &mut self.autocomplete_requests,
            Channel::Typo => &mut self.typo_requests,
        }
    }

    /// Process one page event.
    pub fn handle_event(&mut self, event: DomEvent) -> EventResponse {
        let _span = debug_span!("handle_event", ?event).entered();

        match event {
            DomEvent::PointerDown => self.handle_pointer_down(),
            DomEvent::PointerMove => self.handle_pointer_move(),
            DomEvent::PointerUp(target) => self.handle_pointer_up(target),
            DomEvent::Input => self.handle_input(),
            DomEvent::KeyUp(key) => self.handle_key_up(&key),
            DomEvent::RowClick { channel, index } => self.handle_row_click(channel, index),
        }
    }

    /// Give up on a request the host could not perform, so the channel does
    /// not stay pending.
    pub fn cancel(&mut self, request: &SuggestionRequest) {
        self.requests_mut(request.channel()).settle();
    }

    /// Hide and clear one panel. Under response sequencing this also
    /// invalidates the channel's outstanding requests.
    fn clear_channel(&mut self, channel: Channel) {
        self.presenter.hide(channel);
        if self.config.sequence_responses {
            self.requests_mut(channel).invalidate();
        }
    }

    fn suppress_panels(&mut self) {
        self.clear_channel(Channel::Autocomplete);
        self.clear_channel(Channel::Typo);
    }
}
