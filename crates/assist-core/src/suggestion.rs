//! Suggestion items as returned by the two endpoints.
//!
//! Only `word` is consumed by the interaction logic; the companion fields are
//! carried along for display and diagnostics. Server order is preserved.

use serde::{Deserialize, Serialize};

/// One typo-correction candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypoItem {
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl TypoItem {
    pub fn new(word: &str) -> Self {
        Self {
            word: word.to_string(),
            cost: None,
            score: None,
        }
    }
}

/// One autocomplete candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "AutocompleteWire")]
pub struct AutocompleteItem {
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
}

impl AutocompleteItem {
    pub fn new(word: &str, frequency: f64) -> Self {
        Self {
            word: word.to_string(),
            frequency: Some(frequency),
        }
    }
}

/// Shapes the autocomplete endpoint is known to emit.
#[derive(Deserialize)]
#[serde(untagged)]
enum AutocompleteWire {
    /// `["hello", 12345]`
    Pair(String, f64),
    /// `"hello"`
    Word(String),
    /// `{"word": "hello", "frequency": 12345}`
    Object {
        word: String,
        #[serde(default)]
        frequency: Option<f64>,
    },
}

impl From<AutocompleteWire> for AutocompleteItem {
    fn from(wire: AutocompleteWire) -> Self {
        match wire {
            AutocompleteWire::Pair(word, frequency) => Self {
                word,
                frequency: Some(frequency),
            },
            AutocompleteWire::Word(word) => Self {
                word,
                frequency: None,
            },
            AutocompleteWire::Object { word, frequency } => Self { word, frequency },
        }
    }
}

/// Either kind of suggestion.
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionItem {
    Autocomplete(AutocompleteItem),
    Typo(TypoItem),
}

impl SuggestionItem {
    pub fn word(&self) -> &str {
        match self {
            Self::Autocomplete(item) => &item.word,
            Self::Typo(item) => &item.word,
        }
    }
}

impl From<AutocompleteItem> for SuggestionItem {
    fn from(item: AutocompleteItem) -> Self {
        Self::Autocomplete(item)
    }
}

impl From<TypoItem> for SuggestionItem {
    fn from(item: TypoItem) -> Self {
        Self::Typo(item)
    }
}

pub fn parse_typo_response(body: &str) -> Result<Vec<TypoItem>, serde_json::Error> {
    serde_json::from_str(body)
}

pub fn parse_autocomplete_response(body: &str) -> Result<Vec<AutocompleteItem>, serde_json::Error> {
    serde_json::from_str(body)
}
