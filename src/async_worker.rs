use std::io;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use tracing::debug;

use assist_core::client::SuggestionClient;
use assist_session::{Channel, SuggestionRequest, SuggestionResult};

// ---------------------------------------------------------------------------
// AsyncWorker
// ---------------------------------------------------------------------------

/// Background fetchers, one thread per channel.
///
/// Requests on the same channel resolve in submission order; the two channels
/// resolve independently of each other. Every submitted request produces
/// exactly one result, even if newer requests were queued behind it.
pub struct AsyncWorker {
    typo_tx: mpsc::Sender<SuggestionRequest>,
    autocomplete_tx: mpsc::Sender<SuggestionRequest>,
    result_rx: Mutex<mpsc::Receiver<SuggestionResult>>,
}

impl AsyncWorker {
    pub fn new(client: Arc<dyn SuggestionClient>) -> io::Result<Self> {
        let (result_tx, result_rx) = mpsc::channel::<SuggestionResult>();
        let typo_tx = spawn_fetcher("assist-typo", Arc::clone(&client), result_tx.clone())?;
        let autocomplete_tx = spawn_fetcher("assist-autocomplete", client, result_tx)?;
        Ok(Self {
            typo_tx,
            autocomplete_tx,
            result_rx: Mutex::new(result_rx),
        })
    }

    /// Queue `request` on its channel's fetcher. Returns false if the
    /// fetcher thread is gone.
    pub fn submit(&self, request: SuggestionRequest) -> bool {
        let tx = match request.channel() {
            Channel::Typo => &self.typo_tx,
            Channel::Autocomplete => &self.autocomplete_tx,
        };
        tx.send(request).is_ok()
    }

    pub fn try_recv(&self) -> Option<SuggestionResult> {
        let rx = self.result_rx.lock().ok()?;
        rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<SuggestionResult> {
        let rx = self.result_rx.lock().ok()?;
        rx.recv_timeout(timeout).ok()
    }
}

// ---------------------------------------------------------------------------
// Worker threads
// ---------------------------------------------------------------------------

fn spawn_fetcher(
    name: &str,
    client: Arc<dyn SuggestionClient>,
    tx: mpsc::Sender<SuggestionResult>,
) -> io::Result<mpsc::Sender<SuggestionRequest>> {
    let (work_tx, work_rx) = mpsc::channel::<SuggestionRequest>();
    thread::Builder::new()
        .name(name.into())
        .spawn(move || fetch_worker(work_rx, tx, client))?;
    Ok(work_tx)
}

fn fetch_worker(
    rx: mpsc::Receiver<SuggestionRequest>,
    tx: mpsc::Sender<SuggestionResult>,
    client: Arc<dyn SuggestionClient>,
) {
    while let Ok(request) = rx.recv() {
        let channel = request.channel();
        let generation = request.generation;
        let result = request.resolve(client.as_ref());
        debug!(?channel, generation, count = result.suggestions.len(), "fetch resolved");
        if tx.send(result).is_err() {
            break;
        }
    }
}
