//! Outcome of a single fixity check.

/// New digest plus any mismatch messages. Empty `errors` means the digest
/// matched the reference, or no reference was supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixityResult {
    pub digest_hex: String,
    pub errors: Vec<String>,
}

impl FixityResult {
    pub fn is_mismatch(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Message reported when a stored digest no longer matches the file.
pub fn mismatch_message(old: &str, new: &str) -> String {
    format!("Fixity mismatch. Old fixity was {}, new fixity is {}", old, new)
}
