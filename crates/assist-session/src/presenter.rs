//! Suggestion Presenter: owns both panels and what is rendered in them.
//!
//! Rendering or committing one channel never touches the other channel's
//! panel; clearing the other side is the controller's job.

use tracing::debug;

use assist_core::dom::{Panel, TextField};
use assist_core::selection::{replace_span, Span};
use assist_core::suggestion::{AutocompleteItem, SuggestionItem, TypoItem};

use super::types::{Channel, PanelState, RenderedRows};

pub(crate) struct Presenter<P> {
    autocomplete: P,
    typo: P,
    autocomplete_rows: RenderedRows,
    typo_rows: RenderedRows,
}

impl<P: Panel> Presenter<P> {
    pub(crate) fn new(autocomplete: P, typo: P) -> Self {
        Self {
            autocomplete,
            typo,
            autocomplete_rows: RenderedRows::new(),
            typo_rows: RenderedRows::new(),
        }
    }

    pub(crate) fn panel(&self, channel: Channel) -> &P {
        match channel {
            Channel::Autocomplete => &self.autocomplete,
            Channel::Typo => &self.typo,
        }
    }

    fn slot(&mut self, channel: Channel) -> (&mut P, &mut RenderedRows) {
        match channel {
            Channel::Autocomplete => (&mut self.autocomplete, &mut self.autocomplete_rows),
            Channel::Typo => (&mut self.typo, &mut self.typo_rows),
        }
    }

    pub(crate) fn state(&self, channel: Channel) -> PanelState {
        let panel = self.panel(channel);
        PanelState {
            visible: panel.is_visible(),
            words: panel.rows(),
        }
    }

    pub(crate) fn is_shown(&self, channel: Channel) -> bool {
        self.panel(channel).is_visible()
    }

    /// Hide and empty one panel.
    pub(crate) fn hide(&mut self, channel: Channel) {
        let (panel, rows) = self.slot(channel);
        panel.set_visible(false);
        panel.clear();
        rows.clear();
    }

    pub(crate) fn render_autocomplete(&mut self, items: Vec<AutocompleteItem>) {
        let items = items.into_iter().map(SuggestionItem::from).collect();
        self.render(Channel::Autocomplete, items, None);
    }

    /// Render typo corrections; a commit will replace `span`.
    pub(crate) fn render_typo(&mut self, items: Vec<TypoItem>, span: Span) {
        let items = items.into_iter().map(SuggestionItem::from).collect();
        self.render(Channel::Typo, items, Some(span));
    }

    fn render(&mut self, channel: Channel, items: Vec<SuggestionItem>, span: Option<Span>) {
        if items.is_empty() {
            self.hide(channel);
            return;
        }
        let (panel, rows) = self.slot(channel);
        panel.clear();
        for item in &items {
            panel.append_row(item.word());
        }
        panel.set_visible(true);
        rows.items = items;
        rows.span = span;
    }

    /// Commit row `index` of `channel` into `field`. Returns the committed
    /// word, or `None` if no such row is rendered.
    pub(crate) fn commit<F: TextField>(
        &mut self,
        channel: Channel,
        index: usize,
        field: &mut F,
    ) -> Option<String> {
        let (_, rows) = self.slot(channel);
        let word = rows.items.get(index)?.word().to_string();
        match (channel, rows.span) {
            (Channel::Typo, Some(span)) => {
                let (value, caret) = replace_span(&field.value(), span, &word);
                field.set_value(&value);
                field.focus();
                field.set_selection(caret, caret);
            }
            (Channel::Typo, None) => return None,
            (Channel::Autocomplete, _) => {
                field.set_value(&word);
                field.focus();
            }
        }
        debug!(?channel, index, word = %word, "suggestion committed");
        self.hide(channel);
        Some(word)
    }
}
