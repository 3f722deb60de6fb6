//! Walk filter utilities.

use std::path::Path;

/// Returns true if `path` survives the exclude patterns. Patterns are matched
/// against both the file name and the full path string.
pub fn should_include(path: &Path, exclude_patterns: &[String]) -> bool {
    if exclude_patterns.is_empty() {
        return true;
    }
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let full = path.to_str().unwrap_or("");
    !exclude_patterns
        .iter()
        .any(|p| glob_match(p, name) || glob_match(p, full))
}

/// Minimal glob matching over bytes: `*` matches any run, `?` exactly one
/// byte. The whole text must match.
pub fn glob_match(pattern: &str, text: &str) -> bool {
    fn matches(p: &[u8], t: &[u8]) -> bool {
        match p.split_first() {
            None => t.is_empty(),
            Some((b'*', rest)) => (0..=t.len()).any(|i| matches(rest, &t[i..])),
            Some((b'?', rest)) => !t.is_empty() && matches(rest, &t[1..]),
            Some((&c, rest)) => t.first() == Some(&c) && matches(rest, &t[1..]),
        }
    }
    matches(pattern.as_bytes(), text.as_bytes())
}
