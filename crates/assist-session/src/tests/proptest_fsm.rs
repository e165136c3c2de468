//! Property-based tests for the interaction state machine.
//!
//! Generates random event sequences via proptest, with responses delivered
//! in random order, and checks structural invariants after every step.

use proptest::prelude::*;

use super::*;
use crate::{Channel, ChannelPhase, Key, SuggestionQuery, SuggestionRequest};
use assist_core::drag::PointerPhase;

// ---------------------------------------------------------------------------
// Action enum: every user-facing operation plus response delivery
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum Action {
    TypeChar(char),
    ClearField,
    PointerDown,
    PointerMove,
    PointerUpField,
    PointerUpDocument,
    Select(usize, usize),
    Key(&'static str),
    ClickRow(Channel, usize),
    /// Deliver the pending request at this index (modulo queue length).
    Deliver(usize),
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        20 => prop::sample::select(vec!['t', 'e', 'h', 'w', 'r', 'o', 'l', 'd', ' '])
            .prop_map(Action::TypeChar),
        2 => Just(Action::ClearField),
        8 => Just(Action::PointerDown),
        8 => Just(Action::PointerMove),
        8 => Just(Action::PointerUpField),
        3 => Just(Action::PointerUpDocument),
        8 => (0usize..12, 0usize..12).prop_map(|(a, b)| Action::Select(a.min(b), a.max(b))),
        5 => prop::sample::select(vec!["ArrowLeft", "ArrowRight", "Escape", "Enter", "a"])
            .prop_map(Action::Key),
        5 => (prop::sample::select(vec![Channel::Autocomplete, Channel::Typo]), 0usize..3)
            .prop_map(|(c, i)| Action::ClickRow(c, i)),
        15 => (0usize..4).prop_map(Action::Deliver),
    ]
}

/// Answers every typo query with two corrections and every prefix with two completions.
struct EchoClient;

impl SuggestionClient for EchoClient {
    fn typo_corrections(&self, word: &str) -> Vec<TypoItem> {
        typo(&[format!("{word}x").as_str(), format!("{word}y").as_str()])
    }

    fn autocomplete(&self, prefix: &str) -> Vec<AutocompleteItem> {
        if prefix.is_empty() {
            return Vec::new();
        }
        completions(&[format!("{prefix}a").as_str(), format!("{prefix}b").as_str()])
    }
}

struct Harness {
    assistant: TestAssistant,
    pending: Vec<SuggestionRequest>,
}

impl Harness {
    fn new(sequenced: bool) -> Self {
        let mut assistant = make_assistant("");
        assistant.set_sequence_responses(sequenced);
        Self {
            assistant,
            pending: Vec::new(),
        }
    }

    fn execute(&mut self, action: &Action) -> EventResponse {
        let event = match action {
            Action::TypeChar(ch) => {
                self.assistant.field_mut().type_text(&ch.to_string());
                DomEvent::Input
            }
            Action::ClearField => {
                self.assistant.field_mut().set_value("");
                DomEvent::Input
            }
            Action::PointerDown => DomEvent::PointerDown,
            Action::PointerMove => DomEvent::PointerMove,
            Action::PointerUpField => DomEvent::PointerUp(EventTarget::Field),
            Action::PointerUpDocument => DomEvent::PointerUp(EventTarget::Document),
            Action::Select(start, end) => {
                self.assistant.field_mut().set_selection(*start, *end);
                return EventResponse::not_handled();
            }
            Action::Key(name) => DomEvent::KeyUp(Key::from_dom(name)),
            Action::ClickRow(channel, index) => DomEvent::RowClick {
                channel: *channel,
                index: *index,
            },
            Action::Deliver(i) => {
                if !self.pending.is_empty() {
                    let req = self.pending.remove(i % self.pending.len());
                    self.assistant.receive(req.resolve(&EchoClient));
                }
                return EventResponse::not_handled();
            }
        };
        let resp = self.assistant.handle_event(event);
        if let Some(req) = &resp.request {
            self.pending.push(req.clone());
        }
        resp
    }
}

// ---------------------------------------------------------------------------
// Invariant checks, run after every action
// ---------------------------------------------------------------------------

fn assert_invariants(h: &Harness, resp: &EventResponse, action: &Action) {
    let a = &h.assistant;

    // 1. A hidden panel is always empty, a visible one never is.
    for channel in [Channel::Autocomplete, Channel::Typo] {
        let state = a.panel_state(channel);
        assert_eq!(
            state.visible,
            !state.words.is_empty(),
            "{channel:?} visibility/rows mismatch after {action:?}",
        );
    }

    // 2. Pointer-down and drag moves leave both panels hidden.
    let suppressing = match action {
        Action::PointerDown => true,
        Action::PointerMove => resp.handled,
        Action::Key(name) => matches!(*name, "ArrowLeft" | "ArrowRight" | "Escape"),
        _ => false,
    };
    if suppressing {
        assert!(!a.panel_state(Channel::Autocomplete).visible, "after {action:?}");
        assert!(!a.panel_state(Channel::Typo).visible, "after {action:?}");
    }

    // 3. Pointer phase agrees with the event.
    match action {
        Action::PointerDown => assert_eq!(a.pointer_phase(), PointerPhase::Selecting),
        Action::PointerMove if resp.handled => {
            assert_eq!(a.pointer_phase(), PointerPhase::Dragging)
        }
        Action::PointerUpField | Action::PointerUpDocument => {
            assert_eq!(a.pointer_phase(), PointerPhase::Idle)
        }
        _ => {}
    }

    // 4. Requests carry a well-formed query.
    if let Some(req) = &resp.request {
        match &req.query {
            SuggestionQuery::Typo { word, span } => {
                assert!(!word.is_empty());
                assert!(!word.chars().any(char::is_whitespace));
                assert!(span.start < span.end);
                assert!(span.end <= a.field().value().chars().count());
            }
            SuggestionQuery::Autocomplete { prefix } => {
                assert_eq!(prefix, &a.field().value());
                assert!(!prefix.is_empty());
            }
        }
    }

    // 5. Commits only ever come from row clicks, and clear their own panel.
    if let Some(word) = &resp.commit {
        let Action::ClickRow(channel, _) = action else {
            panic!("commit {word:?} from {action:?}");
        };
        assert!(!a.panel_state(*channel).visible);
        assert!(a.field().value().contains(word.as_str()));
    }

    // 6. The two panels are never up at the same time.
    assert!(
        !(a.panel_state(Channel::Autocomplete).visible && a.panel_state(Channel::Typo).visible),
        "both panels visible after {action:?}",
    );

    // 7. Starting one channel clears the other.
    match action {
        Action::TypeChar(_) | Action::ClearField => {
            assert!(!a.panel_state(Channel::Typo).visible, "after {action:?}");
        }
        Action::PointerUpField if resp.request.is_some() => {
            assert!(!a.panel_state(Channel::Autocomplete).visible, "after {action:?}");
        }
        _ => {}
    }

    // 8. Outstanding counters match the harness queue.
    let queued = |c: Channel| h.pending.iter().filter(|r| r.channel() == c).count();
    for channel in [Channel::Autocomplete, Channel::Typo] {
        assert_eq!(a.outstanding(channel), queued(channel), "after {action:?}");
        if a.channel_phase(channel) == ChannelPhase::Pending {
            assert!(queued(channel) > 0);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn interaction_invariants_hold(actions in prop::collection::vec(arb_action(), 1..120)) {
        let mut h = Harness::new(false);
        for action in &actions {
            let resp = h.execute(action);
            assert_invariants(&h, &resp, action);
        }
    }

    #[test]
    fn interaction_invariants_hold_with_sequencing(
        actions in prop::collection::vec(arb_action(), 1..120)
    ) {
        let mut h = Harness::new(true);
        for action in &actions {
            let resp = h.execute(action);
            assert_invariants(&h, &resp, action);
        }
    }
}
