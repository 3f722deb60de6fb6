//! Rendering digests for display.

use crate::engine::hashing::digest_to_hex;
use crate::types::DigestMap;

/// Render `<hex-digest> <path>` lines sorted lexicographically by path bytes.
/// Sorting happens here, once, over the completed map; arrival order inside
/// the pipeline carries no meaning.
pub fn render_digest_lines(files: &DigestMap) -> Vec<String> {
    let mut paths: Vec<_> = files.keys().collect();
    paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    paths
        .into_iter()
        .map(|p| format!("{} {}", digest_to_hex(&files[p]), p.display()))
        .collect()
}
