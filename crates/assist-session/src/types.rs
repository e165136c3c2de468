use assist_core::client::SuggestionClient;
use assist_core::selection::Span;
use assist_core::suggestion::{AutocompleteItem, SuggestionItem, TypoItem};

/// Keys whose release hides both panels.
pub(crate) const SUPPRESS_KEYS: [Key; 3] = [Key::ArrowLeft, Key::ArrowRight, Key::Escape];

/// One of the two suggestion subsystems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Autocomplete,
    Typo,
}

impl Channel {
    /// The channel whose panel must give way when this one activates.
    pub fn other(self) -> Channel {
        match self {
            Channel::Autocomplete => Channel::Typo,
            Channel::Typo => Channel::Autocomplete,
        }
    }
}

/// Where a pointer-up was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTarget {
    /// On the text field itself.
    Field,
    /// Anywhere else in the document.
    Document,
}

/// Keyboard key, by DOM `KeyboardEvent.key` name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other(String),
}

impl Key {
    pub fn from_dom(name: &str) -> Self {
        match name {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "Escape" | "Esc" => Self::Escape,
            other => Self::Other(other.to_string()),
        }
    }

    pub(crate) fn suppresses_panels(&self) -> bool {
        SUPPRESS_KEYS.contains(self)
    }
}

/// Raw page events the assistant reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Pointer pressed on the field.
    PointerDown,
    /// Pointer moved over the field.
    PointerMove,
    PointerUp(EventTarget),
    /// The field's value changed.
    Input,
    KeyUp(Key),
    /// A suggestion row was clicked.
    RowClick { channel: Channel, index: usize },
}

/// What a request asks for, with everything needed to render its answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionQuery {
    /// Corrections for `word`, to be committed over `span`.
    Typo { word: String, span: Span },
    Autocomplete { prefix: String },
}

/// A fetch the host must perform and feed back through `InputAssistant::receive`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRequest {
    pub query: SuggestionQuery,
    /// Per-channel sequence number, used when response sequencing is on.
    pub generation: u64,
}

impl SuggestionRequest {
    pub fn channel(&self) -> Channel {
        match self.query {
            SuggestionQuery::Typo { .. } => Channel::Typo,
            SuggestionQuery::Autocomplete { .. } => Channel::Autocomplete,
        }
    }

    /// Perform the fetch with `client`, blocking until it resolves.
    pub fn resolve(self, client: &dyn SuggestionClient) -> SuggestionResult {
        let suggestions = match &self.query {
            SuggestionQuery::Typo { word, .. } => Suggestions::Typo(client.typo_corrections(word)),
            SuggestionQuery::Autocomplete { prefix } => {
                Suggestions::Autocomplete(client.autocomplete(prefix))
            }
        };
        SuggestionResult {
            request: self,
            suggestions,
        }
    }
}

/// Items returned for one channel.
#[derive(Debug, Clone, PartialEq)]
pub enum Suggestions {
    Typo(Vec<TypoItem>),
    Autocomplete(Vec<AutocompleteItem>),
}

impl Suggestions {
    pub fn len(&self) -> usize {
        match self {
            Self::Typo(items) => items.len(),
            Self::Autocomplete(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A resolved request.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionResult {
    pub request: SuggestionRequest,
    pub suggestions: Suggestions,
}

/// Outcome of one `handle_event` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventResponse {
    /// False when the event had no effect in the current state.
    pub handled: bool,
    pub request: Option<SuggestionRequest>,
    /// Word committed into the field by a row click.
    pub commit: Option<String>,
}

impl EventResponse {
    pub(crate) fn not_handled() -> Self {
        Self {
            handled: false,
            request: None,
            commit: None,
        }
    }

    pub(crate) fn handled() -> Self {
        Self {
            handled: true,
            ..Self::not_handled()
        }
    }

    pub(crate) fn with_request(request: SuggestionRequest) -> Self {
        Self {
            request: Some(request),
            ..Self::handled()
        }
    }
}

/// Read-only snapshot of one panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    pub visible: bool,
    pub words: Vec<String>,
}

/// Phase of one channel's sub-automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelPhase {
    Idle,
    /// At least one request is outstanding and the panel is hidden.
    Pending,
    Shown,
}

/// Rendered items of one panel, plus what a commit replaces.
pub(crate) struct RenderedRows {
    pub(crate) items: Vec<SuggestionItem>,
    /// Captured replacement span (typo channel only).
    pub(crate) span: Option<Span>,
}

impl RenderedRows {
    pub(crate) fn new() -> Self {
        Self {
            items: Vec::new(),
            span: None,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
        self.span = None;
    }
}

/// Per-channel bookkeeping for issued requests.
#[derive(Debug, Default)]
pub(crate) struct RequestTracker {
    /// Generation of the newest request (or invalidation) for this channel.
    pub(crate) generation: u64,
    pub(crate) outstanding: usize,
}

impl RequestTracker {
    pub(crate) fn issue(&mut self) -> u64 {
        self.generation += 1;
        self.outstanding += 1;
        self.generation
    }

    pub(crate) fn invalidate(&mut self) {
        self.generation += 1;
    }

    pub(crate) fn settle(&mut self) {
        self.outstanding = self.outstanding.saturating_sub(1);
    }

    pub(crate) fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }
}

pub(crate) struct SessionConfig {
    pub(crate) sequence_responses: bool,
}
