//! File digesting.

use memmap2::Mmap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::types::Digest;
use crate::utils::config::HashingConsts;

/// Digest a file's full content with blake3. Memory-maps files above the
/// threshold (blake3 already uses SIMD internally), reads smaller ones in
/// buffered chunks. Any I/O failure is returned for the caller to carry
/// downstream; nothing is retried here.
pub fn digest_file(path: &Path) -> std::io::Result<Digest> {
    let file = File::open(path)?;
    let size = file.metadata()?.len();
    let mut hasher = blake3::Hasher::new();

    if size > HashingConsts::MMAP_THRESHOLD {
        let mmap = unsafe { Mmap::map(&file)? };
        hasher.update(&mmap);
    } else {
        let mut reader = BufReader::with_capacity(HashingConsts::READ_CHUNK_SIZE, file);
        let mut buffer = vec![0u8; HashingConsts::READ_CHUNK_SIZE];
        loop {
            let n = reader.read(&mut buffer)?;
            if n == 0 {
                break;
            }
            hasher.update(&buffer[..n]);
        }
    }

    Ok(*hasher.finalize().as_bytes())
}

/// Lowercase hex rendering of a digest for display.
pub fn digest_to_hex(digest: &Digest) -> String {
    blake3::Hash::from_bytes(*digest).to_hex().to_string()
}
