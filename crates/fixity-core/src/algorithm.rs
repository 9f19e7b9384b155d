//! Hash constructions available to a checker.
//!
//! A checker is bound to exactly one algorithm for its lifetime; there is no
//! per-file negotiation.

use crate::error::FixityError;
use std::fmt;
use std::str::FromStr;

/// Digest algorithm. Names follow the `SHA-512` style used in fixity records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    Sha256,
    #[default]
    Sha512,
}

impl Algorithm {
    /// Resolve a host-supplied name. Case-insensitive; the dash is optional
    /// (`SHA-512`, `sha512`).
    pub fn from_name(name: &str) -> Result<Self, FixityError> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_uppercase())
            .collect();
        match normalized.as_str() {
            "SHA256" => Ok(Algorithm::Sha256),
            "SHA512" => Ok(Algorithm::Sha512),
            _ => Err(FixityError::AlgorithmUnavailable {
                name: name.to_string(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Sha256 => "SHA-256",
            Algorithm::Sha512 => "SHA-512",
        }
    }

    /// Digest length in bytes.
    pub fn digest_len(&self) -> usize {
        match self {
            Algorithm::Sha256 => 32,
            Algorithm::Sha512 => 64,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = FixityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::from_name(s)
    }
}
