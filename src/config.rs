use std::path::PathBuf;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Ledger API used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings for talking to the ledger API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL, e.g. `http://localhost:8000` or `https://ledger.example.com/api`
    pub api_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            api_url: api_url.into(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

/// Load `.env` from the working directory, if any, returning its path.
///
/// Runs before tracing is set up so that `RUST_LOG` may come from the file.
pub fn load_environment() -> Option<PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => Some(path),
        Err(e) if e.not_found() => None,
        Err(e) => {
            eprintln!("Ignoring unreadable .env file: {}", e);
            None
        }
    }
}

/// Install the global tracing subscriber. `RUST_LOG` wins over `verbose`.
///
/// Logs go to stderr so command output on stdout stays machine-readable.
pub fn init_tracing(verbose: bool) {
    let default_directives = if verbose {
        "chaintrack=debug,tower_http=debug"
    } else {
        "chaintrack=info,tower_http=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
