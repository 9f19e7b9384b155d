//! Fixity checker: digest a file, optionally compare against a stored digest.
//!
//! Each call is a single synchronous pass (open, stream, finalize, compare).
//! The checker keeps no per-call state, so one instance can serve concurrent
//! callers on different files.

mod result;

use crate::algorithm::Algorithm;
use crate::checksum::{self, DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE};
use crate::config::FixityConfig;
use crate::digest::Digest;
use crate::error::FixityError;
use crate::sink::{DiagnosticSink, FixityEvent, TracingSink};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

pub use result::{mismatch_message, FixityResult};

/// Placeholder digest reported when the fault-injection hook is on.
pub const FORCED_FAILURE_DIGEST: &str = "DUMMY";

pub struct FixityChecker {
    algorithm: Algorithm,
    chunk_size: usize,
    plugin_version: String,
    sink: Arc<dyn DiagnosticSink>,
    forced_failure: bool,
}

impl fmt::Debug for FixityChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixityChecker")
            .field("algorithm", &self.algorithm)
            .field("chunk_size", &self.chunk_size)
            .field("plugin_version", &self.plugin_version)
            .field("forced_failure", &self.forced_failure)
            .finish_non_exhaustive()
    }
}

impl FixityChecker {
    /// Checker with default chunk size, crate version tag and a tracing sink.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            chunk_size: DEFAULT_CHUNK_SIZE,
            plugin_version: env!("CARGO_PKG_VERSION").to_string(),
            sink: Arc::new(TracingSink),
            forced_failure: false,
        }
    }

    /// Build from host configuration, reporting through `sink`. Fails with
    /// `AlgorithmUnavailable` when the configured algorithm is not provided by
    /// this build; the failure is recorded on `sink` before returning.
    pub fn from_config(
        cfg: &FixityConfig,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Result<Self, FixityError> {
        let algorithm = match cfg.validate() {
            Ok(a) => a,
            Err(e) => {
                sink.record(&FixityEvent::Failed {
                    path: None,
                    class: e.class(),
                    message: e.to_string(),
                });
                return Err(e);
            }
        };
        let mut checker = Self::new(algorithm)
            .with_chunk_size(cfg.chunk_size)
            .with_sink(sink);
        if let Some(v) = &cfg.plugin_version {
            checker = checker.with_plugin_version(v.clone());
        }
        Ok(checker)
    }

    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.clamp(1, MAX_CHUNK_SIZE);
        self
    }

    pub fn with_plugin_version(mut self, version: impl Into<String>) -> Self {
        self.plugin_version = version.into();
        self
    }

    /// Fault-injection hook for host integration tests: every check reports
    /// [`FORCED_FAILURE_DIGEST`] instead of the real digest. Not reachable
    /// from configuration.
    pub fn with_forced_failure(mut self) -> Self {
        self.forced_failure = true;
        self
    }

    /// Name of the hash construction, e.g. `SHA-512`.
    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm.name()
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Provenance string reported alongside fixity records.
    pub fn agent(&self) -> String {
        format!(
            "Custom fixity {}, Plugin Version {}",
            self.algorithm.name(),
            self.plugin_version
        )
    }

    /// Stream the file through the configured hash and return its digest.
    pub fn compute_digest(&self, path: &Path) -> Result<Digest, FixityError> {
        checksum::digest_path(self.algorithm, path, self.chunk_size).map_err(|e| {
            self.sink.record(&FixityEvent::Failed {
                path: Some(path.to_path_buf()),
                class: e.class(),
                message: e.to_string(),
            });
            e
        })
    }

    /// Digest `path` and compare with `previous` (case-insensitive hex).
    ///
    /// A mismatch is returned in [`FixityResult::errors`]; only I/O and
    /// algorithm failures produce `Err`. `None` or an empty reference means
    /// there is nothing to compare against.
    pub fn check_fixity(
        &self,
        path: &Path,
        previous: Option<&str>,
    ) -> Result<FixityResult, FixityError> {
        let mut digest_hex = self.compute_digest(path)?.to_hex();

        if self.forced_failure {
            self.sink.record(&FixityEvent::ForcedFailure {
                path: path.to_path_buf(),
                real: digest_hex,
                substituted: FORCED_FAILURE_DIGEST.to_string(),
            });
            digest_hex = FORCED_FAILURE_DIGEST.to_string();
        }

        self.sink.record(&FixityEvent::Computed {
            path: path.to_path_buf(),
            algorithm: self.algorithm.name(),
            digest: digest_hex.clone(),
        });

        let mut errors = Vec::new();
        if let Some(old) = previous.filter(|s| !s.is_empty()) {
            if !old.eq_ignore_ascii_case(&digest_hex) {
                self.sink.record(&FixityEvent::Mismatch {
                    path: path.to_path_buf(),
                    old: old.to_string(),
                    new: digest_hex.clone(),
                });
                errors.push(mismatch_message(old, &digest_hex));
            }
        }

        Ok(FixityResult { digest_hex, errors })
    }
}

impl Default for FixityChecker {
    fn default() -> Self {
        Self::new(Algorithm::default())
    }
}
