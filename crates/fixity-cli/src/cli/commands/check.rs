//! Check command: digest a file and compare with a stored value.

use anyhow::Result;
use fixity_core::FixityChecker;
use std::path::Path;

/// Print the digest and any mismatch messages. Returns true when there is no mismatch.
pub fn run_check(checker: &FixityChecker, path: &Path, expected: Option<&str>) -> Result<bool> {
    let result = checker.check_fixity(path, expected)?;
    println!("{}  {}", result.digest_hex, path.display());
    for err in &result.errors {
        eprintln!("{}", err);
    }
    Ok(!result.is_mismatch())
}
