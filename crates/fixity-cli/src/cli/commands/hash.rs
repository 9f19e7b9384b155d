//! Hash command: compute the digest of a file.

use anyhow::Result;
use fixity_core::FixityChecker;
use std::path::Path;

/// Compute and print the digest of the given file.
pub fn run_hash(checker: &FixityChecker, path: &Path) -> Result<()> {
    let digest = checker.compute_digest(path)?;
    println!("{}  {}", digest, path.display());
    Ok(())
}
