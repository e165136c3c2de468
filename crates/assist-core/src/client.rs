//! Suggestion Client: one read per endpoint, never failing past this module.
//!
//! Transport errors, non-success statuses and undecodable bodies are logged
//! and turned into an empty result. There are no retries and no timeouts.

use tracing::{debug, warn};

use crate::settings::Settings;
use crate::suggestion::{
    parse_autocomplete_response, parse_typo_response, AutocompleteItem, TypoItem,
};

pub const TYPO_CORRECTION_PATH: &str = "/typo_correction";
pub const AUTOCOMPLETE_PATH: &str = "/autocomplete";

// Typo-correction tuning. Policy constants, not user settings.
pub const TYPO_MAX_COST: u32 = 2;
pub const TYPO_TOP_K: u32 = 20;
pub const TYPO_WEIGHT_COST: f64 = 1.0;
pub const TYPO_WEIGHT_FREQ: f64 = 0.1;
pub const TYPO_MIN_FREQ: u64 = 1_000_000;

pub const AUTOCOMPLETE_TOP_K: u32 = 20;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The two suggestion reads. Implementations resolve failures to an empty vector.
pub trait SuggestionClient: Send + Sync {
    fn typo_corrections(&self, word: &str) -> Vec<TypoItem>;
    fn autocomplete(&self, prefix: &str) -> Vec<AutocompleteItem>;
}

/// A single GET against the suggestion origin.
pub trait Transport: Send + Sync {
    /// Returns the response body of `path` with `query` appended (values are
    /// percent-encoded by the transport).
    fn get(&self, path: &str, query: &[(&str, String)]) -> Result<String, ClientError>;
}

/// `ureq`-backed transport against a fixed origin.
pub struct UreqTransport {
    agent: ureq::Agent,
    base_url: String,
}

impl UreqTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            agent: ureq::Agent::new_with_defaults(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Transport for UreqTransport {
    fn get(&self, path: &str, query: &[(&str, String)]) -> Result<String, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.agent.get(&url);
        for (key, value) in query {
            request = request.query(*key, value);
        }
        request
            .call()
            .map_err(|e| match e {
                ureq::Error::StatusCode(code) => ClientError::Status(code),
                e => ClientError::Http(format!("{url}: {e}")),
            })?
            .into_body()
            .read_to_string()
            .map_err(|e| ClientError::Http(format!("{url}: {e}")))
    }
}

/// Query string for a typo-correction request, in wire order.
pub fn typo_query(word: &str) -> Vec<(&'static str, String)> {
    vec![
        ("word", word.to_string()),
        ("max_cost", TYPO_MAX_COST.to_string()),
        ("top_k", TYPO_TOP_K.to_string()),
        ("weight_cost", TYPO_WEIGHT_COST.to_string()),
        ("weight_freq", TYPO_WEIGHT_FREQ.to_string()),
        ("min_freq", TYPO_MIN_FREQ.to_string()),
    ]
}

/// Query string for an autocomplete request, in wire order.
pub fn autocomplete_query(prefix: &str) -> Vec<(&'static str, String)> {
    vec![
        ("prefix", prefix.to_string()),
        ("top_k", AUTOCOMPLETE_TOP_K.to_string()),
    ]
}

/// HTTP suggestion client over any [`Transport`].
pub struct HttpSuggestionClient<T = UreqTransport> {
    transport: T,
}

impl HttpSuggestionClient<UreqTransport> {
    /// Client against the configured endpoint origin.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(UreqTransport::new(&settings.endpoint.base_url))
    }
}

impl<T: Transport> HttpSuggestionClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn try_typo_corrections(&self, word: &str) -> Result<Vec<TypoItem>, ClientError> {
        let body = self.transport.get(TYPO_CORRECTION_PATH, &typo_query(word))?;
        Ok(parse_typo_response(&body)?)
    }

    /// Like [`SuggestionClient::autocomplete`] but surfacing the error.
    /// An empty prefix still short-circuits to `Ok(vec![])`.
    pub fn try_autocomplete(&self, prefix: &str) -> Result<Vec<AutocompleteItem>, ClientError> {
        if prefix.is_empty() {
            return Ok(Vec::new());
        }
        let body = self.transport.get(AUTOCOMPLETE_PATH, &autocomplete_query(prefix))?;
        Ok(parse_autocomplete_response(&body)?)
    }
}

impl<T: Transport> SuggestionClient for HttpSuggestionClient<T> {
    fn typo_corrections(&self, word: &str) -> Vec<TypoItem> {
        match self.try_typo_corrections(word) {
            Ok(items) => {
                debug!(word, count = items.len(), "typo corrections received");
                items
            }
            Err(e) => {
                warn!(word, error = %e, "typo correction fetch failed");
                Vec::new()
            }
        }
    }

    fn autocomplete(&self, prefix: &str) -> Vec<AutocompleteItem> {
        match self.try_autocomplete(prefix) {
            Ok(items) => {
                debug!(prefix, count = items.len(), "autocomplete received");
                items
            }
            Err(e) => {
                warn!(prefix, error = %e, "autocomplete fetch failed");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Records every call and answers from a fixed script.
    struct FakeTransport {
        calls: Mutex<Vec<(String, Vec<(String, String)>)>>,
        reply: Result<String, u16>,
    }

    impl FakeTransport {
        fn ok(body: &str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                reply: Ok(body.to_string()),
            }
        }

        fn status(code: u16) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                reply: Err(code),
            }
        }

        fn calls(&self) -> Vec<(String, Vec<(String, String)>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Transport for FakeTransport {
        fn get(&self, path: &str, query: &[(&str, String)]) -> Result<String, ClientError> {
            self.calls.lock().unwrap().push((
                path.to_string(),
                query
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect(),
            ));
            self.reply.clone().map_err(ClientError::Status)
        }
    }

    fn pairs(query: &[(&str, String)]) -> Vec<(String, String)> {
        query
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn typo_query_uses_policy_constants() {
        let q = typo_query("wrold");
        let rendered: Vec<String> = q.iter().map(|(k, v)| format!("{k}={v}")).collect();
        assert_eq!(
            rendered.join("&"),
            "word=wrold&max_cost=2&top_k=20&weight_cost=1&weight_freq=0.1&min_freq=1000000"
        );
    }

    #[test]
    fn autocomplete_query_has_top_k() {
        let q = autocomplete_query("hel");
        assert_eq!(
            pairs(&q),
            vec![
                ("prefix".to_string(), "hel".to_string()),
                ("top_k".to_string(), "20".to_string())
            ]
        );
    }

    #[test]
    fn typo_request_hits_typo_endpoint() {
        let client = HttpSuggestionClient::new(FakeTransport::ok(r#"[{"word":"world"}]"#));
        let items = client.typo_corrections("wrold");
        assert_eq!(items, vec![TypoItem::new("world")]);

        let calls = client.transport().calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, TYPO_CORRECTION_PATH);
        assert_eq!(calls[0].1, pairs(&typo_query("wrold")));
    }

    #[test]
    fn empty_prefix_makes_no_call() {
        let client = HttpSuggestionClient::new(FakeTransport::ok("[]"));
        assert!(client.autocomplete("").is_empty());
        assert!(client.transport().calls().is_empty());
    }

    #[test]
    fn autocomplete_request_hits_autocomplete_endpoint() {
        let client = HttpSuggestionClient::new(FakeTransport::ok(r#"[["hello", 9]]"#));
        let items = client.autocomplete("hel");
        assert_eq!(items, vec![AutocompleteItem::new("hello", 9.0)]);
        assert_eq!(client.transport().calls()[0].0, AUTOCOMPLETE_PATH);
    }

    #[test]
    fn status_failure_resolves_empty() {
        let client = HttpSuggestionClient::new(FakeTransport::status(500));
        assert!(client.typo_corrections("wrold").is_empty());
        assert!(client.autocomplete("hel").is_empty());
        assert!(matches!(
            client.try_typo_corrections("wrold"),
            Err(ClientError::Status(500))
        ));
    }

    #[test]
    fn malformed_body_resolves_empty() {
        let client = HttpSuggestionClient::new(FakeTransport::ok("<html>oops</html>"));
        assert!(client.typo_corrections("wrold").is_empty());
        assert!(matches!(
            client.try_autocomplete("hel"),
            Err(ClientError::Decode(_))
        ));
    }

    #[test]
    fn unreachable_origin_resolves_empty() {
        // Port 9 (discard) on localhost is not expected to serve HTTP.
        let client = HttpSuggestionClient::new(UreqTransport::new("http://127.0.0.1:9/"));
        assert_eq!(client.transport().base_url(), "http://127.0.0.1:9");
        assert!(client.typo_corrections("wrold").is_empty());
    }
}
