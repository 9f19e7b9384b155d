//! Finalized digest bytes and their hex rendering.

use std::fmt;

/// Output of a hash function over a file's contents. Immutable once computed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digest(Vec<u8>);

impl Digest {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Digest(bytes.into())
    }

    /// Parse a hex string (either case) back into digest bytes.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        hex::decode(s).map(Digest)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex, two characters per byte, high nibble first.
    pub fn to_hex(&self) -> String {
        render_hex(&self.0)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Render raw digest bytes as lowercase hex.
pub fn render_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
