//! Diagnostic events emitted by the checker.
//!
//! The checker never logs directly; it hands events to a [`DiagnosticSink`]
//! supplied at construction. [`TracingSink`] forwards to `tracing`,
//! [`MemorySink`] keeps them for inspection.

use std::path::PathBuf;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixityEvent {
    /// Digest computed for a file.
    Computed {
        path: PathBuf,
        algorithm: &'static str,
        digest: String,
    },
    /// Supplied reference digest did not match.
    Mismatch {
        path: PathBuf,
        old: String,
        new: String,
    },
    /// Fault-injection hook replaced the real digest.
    ForcedFailure {
        path: PathBuf,
        real: String,
        substituted: String,
    },
    /// Check or checker construction aborted. `class` is `io`, `algorithm`
    /// or `config`; `path` is `None` when no file was involved yet.
    Failed {
        path: Option<PathBuf>,
        class: &'static str,
        message: String,
    },
}

pub trait DiagnosticSink: Send + Sync {
    fn record(&self, event: &FixityEvent);
}

/// Default sink: structured `tracing` records.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, event: &FixityEvent) {
        match event {
            FixityEvent::Computed {
                path,
                algorithm,
                digest,
            } => {
                tracing::info!(
                    path = %path.display(),
                    algorithm = *algorithm,
                    "{} calculated for {}: {}",
                    algorithm,
                    path.display(),
                    digest
                );
            }
            FixityEvent::Mismatch { path, old, new } => {
                tracing::warn!(
                    path = %path.display(),
                    "fixity mismatch for {}: old={} new={}",
                    path.display(),
                    old,
                    new
                );
            }
            FixityEvent::ForcedFailure {
                path,
                real,
                substituted,
            } => {
                tracing::info!(
                    path = %path.display(),
                    "forced scan failure for {}: real digest {} replaced by {}",
                    path.display(),
                    real,
                    substituted
                );
            }
            FixityEvent::Failed {
                path,
                class: "algorithm",
                message,
            } => {
                tracing::error!(
                    path = %display_path(path),
                    class = "algorithm",
                    "digest algorithm not supported: {}",
                    message
                );
            }
            FixityEvent::Failed {
                path,
                class,
                message,
            } => {
                tracing::error!(
                    path = %display_path(path),
                    class = *class,
                    "digest could not be calculated: {}",
                    message
                );
            }
        }
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => p.display().to_string(),
        None => "-".to_string(),
    }
}

/// Sink that stores every event in order.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<FixityEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded events.
    pub fn events(&self) -> Vec<FixityEvent> {
        match self.events.lock() {
            Ok(g) => g.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl DiagnosticSink for MemorySink {
    fn record(&self, event: &FixityEvent) {
        let mut g = match self.events.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        g.push(event.clone());
    }
}
