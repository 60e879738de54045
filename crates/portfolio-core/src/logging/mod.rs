//! Logging setup.
//!
//! Console output through `tracing_subscriber::fmt`, filtered by
//! `RUST_LOG` or the configured filter, plus an optional JSONL mirror:
//!
//! ```text
//! logs/
//! └── raw/
//!     └── 2026-10-18_desktop.jsonl
//! ```
//!
//! Panics are routed through `tracing::error!` so an unexpected failure
//! ends up in the same log rather than only on stderr.

mod layer;
mod writer;

pub use layer::JsonlLayer;
pub use writer::{read_entries, LogEntry, SessionLogWriter};

use std::path::PathBuf;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Builder for the global subscriber.
pub struct LoggingBuilder {
    session: String,
    logs_dir: Option<PathBuf>,
    filter: String,
}

impl LoggingBuilder {
    pub fn new(session: impl Into<String>) -> Self {
        Self {
            session: session.into(),
            logs_dir: None,
            filter: crate::config::DEFAULT_LOG_FILTER.to_string(),
        }
    }

    /// Mirror events into a JSONL file under `dir`.
    pub fn with_logs_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.logs_dir = dir;
        self
    }

    /// Filter used when `RUST_LOG` is unset.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Install the global subscriber and the panic hook.
    ///
    /// A JSONL directory that cannot be created is reported and skipped.
    pub fn init(self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.filter));

        let (jsonl, jsonl_error) = match &self.logs_dir {
            Some(dir) => match JsonlLayer::new(dir, &self.session) {
                Ok(layer) => (Some(layer), None),
                Err(e) => (None, Some(e)),
            },
            None => (None, None),
        };

        let installed = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .with(jsonl)
            .try_init();

        if let Err(e) = installed {
            eprintln!("logging already initialised: {}", e);
        }
        if let Some(e) = jsonl_error {
            tracing::warn!("JSONL logging disabled: {}", e);
        }

        install_panic_hook();
    }
}

/// Log panics through tracing, then defer to the previous hook.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_default();
        let payload = info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        tracing::error!(location = %location, "Uncaught error: {}", payload);
        previous(info);
    }));
}
