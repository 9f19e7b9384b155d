//! Error type for fixity checks.
//!
//! A fixity mismatch is not an error; it is reported inside
//! [`FixityResult`](crate::checker::FixityResult). Only conditions that abort a
//! check live here.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixityError {
    /// File missing, unreadable, or a read failed mid-stream.
    #[error("read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The requested hash construction is not provided by this build.
    #[error("digest algorithm not available: {name}")]
    AlgorithmUnavailable { name: String },
    /// Host configuration could not be turned into a checker.
    #[error("invalid fixity config: {0}")]
    InvalidConfig(String),
}

impl FixityError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FixityError::Io {
            path: path.into(),
            source,
        }
    }

    /// Short class label used in diagnostics (`io`, `algorithm`, `config`).
    pub fn class(&self) -> &'static str {
        match self {
            FixityError::Io { .. } => "io",
            FixityError::AlgorithmUnavailable { .. } => "algorithm",
            FixityError::InvalidConfig(_) => "config",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display_names_path() {
        let err = FixityError::io(
            "/data/obj.tif",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(err.to_string(), "read /data/obj.tif: no such file");
        assert_eq!(err.class(), "io");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn algorithm_unavailable_display() {
        let err = FixityError::AlgorithmUnavailable {
            name: "MD2".to_string(),
        };
        assert_eq!(err.to_string(), "digest algorithm not available: MD2");
        assert_eq!(err.class(), "algorithm");
    }
}
