//! Integration test: multi-megabyte file checked through the public API.
//!
//! Writes a file many times larger than the read chunk, then checks that the
//! streamed digest equals a one-shot digest of the same bytes and that a stored
//! digest round-trips through a check.

use std::io::Write;
use std::sync::Arc;

use fixity_core::checksum::{self, DEFAULT_CHUNK_SIZE};
use fixity_core::sink::{FixityEvent, MemorySink};
use fixity_core::{Algorithm, Digest, FixityChecker};
use sha2::{Digest as _, Sha512};

fn large_body() -> Vec<u8> {
    let mut state: u32 = 0x2545_f491;
    (0..(3 * 1024 * 1024 + 123))
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as u8
        })
        .collect()
}

#[test]
fn streamed_digest_equals_single_pass() {
    let body = large_body();
    assert!(body.len() > DEFAULT_CHUNK_SIZE * 100);

    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(&body).unwrap();
    f.flush().unwrap();

    let one_shot = hex::encode(Sha512::digest(&body));
    let streamed = checksum::digest_path(Algorithm::Sha512, f.path(), DEFAULT_CHUNK_SIZE).unwrap();
    assert_eq!(streamed.to_hex(), one_shot);

    let checker = FixityChecker::default();
    let result = checker.check_fixity(f.path(), None).unwrap();
    assert_eq!(result.digest_hex, one_shot);
}

#[test]
fn stored_digest_verifies_then_detects_change() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("master.tif");
    std::fs::write(&path, large_body()).unwrap();

    let sink = Arc::new(MemorySink::new());
    let checker = FixityChecker::default()
        .with_plugin_version("1.0")
        .with_sink(sink.clone());

    let stored = checker.check_fixity(&path, None).unwrap().digest_hex;
    let stored_bytes = Digest::from_hex(&stored).unwrap();
    assert_eq!(stored_bytes.len(), Algorithm::Sha512.digest_len());

    let again = checker.check_fixity(&path, Some(&stored)).unwrap();
    assert!(again.errors.is_empty());

    let mut body = large_body();
    body[DEFAULT_CHUNK_SIZE] ^= 0x01;
    std::fs::write(&path, &body).unwrap();

    let changed = checker.check_fixity(&path, Some(&stored.to_uppercase())).unwrap();
    assert_eq!(changed.errors.len(), 1);
    assert!(changed.errors[0].starts_with("Fixity mismatch. Old fixity was "));
    assert!(changed.errors[0].ends_with(&changed.digest_hex));

    let mismatches = sink
        .events()
        .into_iter()
        .filter(|e| matches!(e, FixityEvent::Mismatch { .. }))
        .count();
    assert_eq!(mismatches, 1);

    std::fs::remove_file(&path).unwrap();
}
