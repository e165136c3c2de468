//! Host-side wiring for the text-input assistant.
//!
//! `Assistant` pairs the event-driven [`InputAssistant`] with an
//! [`AsyncWorker`]: requests returned by event handling are fetched in the
//! background, and the host's event loop calls [`Assistant::pump`] to render
//! whatever has resolved.

mod async_worker;
mod trace_init;

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::warn;

pub use assist_core;
pub use assist_session;

pub use assist_core::client::{HttpSuggestionClient, SuggestionClient, UreqTransport};
pub use assist_core::dom::{MemoryField, MemoryPanel, Panel, TextField};
pub use assist_core::settings::{settings, Settings};
pub use assist_session::{
    Channel, ChannelPhase, DomEvent, EventResponse, EventTarget, InputAssistant, Key, PanelState,
};
pub use async_worker::AsyncWorker;
pub use trace_init::init_tracing;

/// An [`InputAssistant`] whose fetches run on background threads.
pub struct Assistant<F, P> {
    session: InputAssistant<F, P>,
    worker: AsyncWorker,
    in_flight: usize,
}

impl<F: TextField, P: Panel> Assistant<F, P> {
    pub fn new(
        session: InputAssistant<F, P>,
        client: Arc<dyn SuggestionClient>,
    ) -> io::Result<Self> {
        Ok(Self {
            session,
            worker: AsyncWorker::new(client)?,
            in_flight: 0,
        })
    }

    /// Assistant over the given DOM collaborators, fetching from the
    /// endpoint configured in `settings`.
    pub fn from_settings(
        field: F,
        autocomplete_panel: P,
        typo_panel: P,
        settings: &Settings,
    ) -> io::Result<Self> {
        let session = InputAssistant::with_settings(field, autocomplete_panel, typo_panel, settings);
        let client = Arc::new(HttpSuggestionClient::from_settings(settings));
        Self::new(session, client)
    }

    pub fn session(&self) -> &InputAssistant<F, P> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut InputAssistant<F, P> {
        &mut self.session
    }

    /// Requests submitted whose result has not been delivered yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Handle a page event, submitting any fetch it asks for.
    pub fn handle_event(&mut self, event: DomEvent) -> EventResponse {
        let resp = self.session.handle_event(event);
        if let Some(request) = &resp.request {
            if self.worker.submit(request.clone()) {
                self.in_flight += 1;
            } else {
                warn!(channel = ?request.channel(), "fetcher unavailable, request dropped");
                self.session.cancel(request);
            }
        }
        resp
    }

    /// Deliver every result that has resolved so far. Returns how many were delivered.
    pub fn pump(&mut self) -> usize {
        let mut delivered = 0;
        while let Some(result) = self.worker.try_recv() {
            self.deliver(result);
            delivered += 1;
        }
        delivered
    }

    /// Block until every in-flight request has been delivered or `timeout`
    /// elapses. Returns how many were delivered.
    pub fn settle(&mut self, timeout: Duration) -> usize {
        let deadline = Instant::now() + timeout;
        let mut delivered = 0;
        while self.in_flight > 0 {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            match self.worker.recv_timeout(remaining) {
                Some(result) => {
                    self.deliver(result);
                    delivered += 1;
                }
                None => break,
            }
        }
        delivered
    }

    fn deliver(&mut self, result: assist_session::SuggestionResult) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.session.receive(result);
    }
}
