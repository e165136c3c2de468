//! Console logging for `assisttool` when no trace directory is given.

use tracing::Subscriber;
use tracing_subscriber::filter::LevelFilter;

/// Plain-text subscriber on stderr passing warnings and errors only.
pub fn stderr_warnings() -> impl Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(LevelFilter::WARN)
        .with_target(false)
        .finish()
}

pub fn init_stderr_warnings() {
    // Another subscriber may already be installed (e.g. in tests).
    let _ = tracing::subscriber::set_global_default(stderr_warnings());
}
