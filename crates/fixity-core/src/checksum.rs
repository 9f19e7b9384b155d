//! Streamed digest computation over files and readers.
//!
//! Input is read in fixed-size chunks so memory use stays bounded regardless
//! of file size. The digest does not depend on the chunk size.

use crate::algorithm::Algorithm;
use crate::digest::Digest;
use crate::error::FixityError;
use sha2::{Sha256, Sha512};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Default read chunk, matching a typical I/O buffer.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Largest read chunk a checker will allocate.
pub const MAX_CHUNK_SIZE: usize = 64 * 1024 * 1024;

/// Compute the digest of a file, reading `chunk_size` bytes at a time.
///
/// The file handle is dropped on every return path, including read errors.
pub fn digest_path(
    algorithm: Algorithm,
    path: &Path,
    chunk_size: usize,
) -> Result<Digest, FixityError> {
    let mut f = File::open(path).map_err(|e| FixityError::io(path, e))?;
    digest_reader(algorithm, &mut f, chunk_size).map_err(|e| FixityError::io(path, e))
}

/// Compute the digest of everything `reader` yields until EOF.
/// `chunk_size` is clamped to `1..=MAX_CHUNK_SIZE`.
pub fn digest_reader<R: Read>(
    algorithm: Algorithm,
    reader: &mut R,
    chunk_size: usize,
) -> io::Result<Digest> {
    let chunk_size = chunk_size.clamp(1, MAX_CHUNK_SIZE);
    match algorithm {
        Algorithm::Sha256 => stream::<Sha256, R>(reader, chunk_size),
        Algorithm::Sha512 => stream::<Sha512, R>(reader, chunk_size),
    }
}

fn stream<D: sha2::Digest, R: Read>(reader: &mut R, chunk_size: usize) -> io::Result<Digest> {
    let mut hasher = D::new();
    let mut buf = vec![0u8; chunk_size];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
    }
    Ok(Digest::from_bytes(hasher.finalize().to_vec()))
}
