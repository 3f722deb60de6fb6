use std::path::{Path, PathBuf};
use treesum::engine::{digest_to_hex, glob_match, render_digest_lines, should_include};
use treesum::utils::config::WorkerLimits;
use treesum::{CancelToken, DigestMap};

// --- glob_match ---

#[test]
fn test_glob_match_literal() {
    assert!(glob_match("node_modules", "node_modules"));
    assert!(!glob_match("node_modules", "node_module"));
}

#[test]
fn test_glob_match_star() {
    assert!(glob_match("*.log", "foo.log"));
    assert!(glob_match("*.log", ".log"));
    assert!(!glob_match("*.log", "foo.log.txt"));
    assert!(glob_match("node_*", "node_modules"));
}

#[test]
fn test_glob_match_question() {
    assert!(glob_match("a?c", "abc"));
    assert!(!glob_match("a?c", "ac"));
    assert!(!glob_match("a?c", "abbc"));
}

// --- should_include ---

#[test]
fn test_should_include_no_patterns() {
    assert!(should_include(Path::new("/t/a.txt"), &[]));
}

#[test]
fn test_should_include_name_pattern() {
    assert!(!should_include(
        Path::new("/t/node_modules"),
        &["node_modules".to_string()]
    ));
}

#[test]
fn test_should_include_glob_pattern() {
    assert!(!should_include(
        Path::new("/t/sub/baz.log"),
        &["*.log".to_string()]
    ));
}

#[test]
fn test_should_include_unmatched() {
    assert!(should_include(
        Path::new("/t/sub/baz.txt"),
        &["*.log".to_string(), "node_modules".to_string()]
    ));
}

// --- digest_to_hex ---

#[test]
fn test_digest_to_hex_zeroes() {
    assert_eq!(digest_to_hex(&[0u8; 32]), "00".repeat(32));
}

#[test]
fn test_digest_to_hex_bytes() {
    let mut d = [0u8; 32];
    d[0] = 0x0f;
    d[31] = 0xa0;
    let hex = digest_to_hex(&d);
    assert_eq!(hex.len(), 64);
    assert!(hex.starts_with("0f"));
    assert!(hex.ends_with("a0"));
}

// --- render_digest_lines ---

#[test]
fn test_render_lines_sorted_by_path() {
    let mut files = DigestMap::new();
    files.insert(PathBuf::from("/t/b.txt"), [0u8; 32]);
    files.insert(PathBuf::from("/t/a.txt"), [1u8; 32]);
    files.insert(PathBuf::from("/t/sub/c.txt"), [2u8; 32]);
    let lines = render_digest_lines(&files);
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with(" /t/a.txt"));
    assert!(lines[1].ends_with(" /t/b.txt"));
    assert!(lines[2].ends_with(" /t/sub/c.txt"));
    assert!(lines[0].starts_with(&"01".repeat(32)));
}

#[test]
fn test_render_lines_empty_map() {
    assert!(render_digest_lines(&DigestMap::new()).is_empty());
}

// --- WorkerLimits ---

#[test]
fn test_effective_explicit_request() {
    let limits = WorkerLimits {
        available: 8,
        ..Default::default()
    };
    assert_eq!(limits.effective(Some(3)), 3);
    assert_eq!(limits.effective(Some(50)), 50);
}

#[test]
fn test_effective_explicit_held_at_floor() {
    let limits = WorkerLimits {
        available: 8,
        ..Default::default()
    };
    assert_eq!(limits.effective(Some(0)), WorkerLimits::FLOOR_WORKERS);
}

#[test]
fn test_effective_derived_capped() {
    let limits = WorkerLimits {
        available: 64,
        ..Default::default()
    };
    assert_eq!(limits.effective(None), WorkerLimits::MAX_WORKERS);
}

#[test]
fn test_effective_derived_floor() {
    let limits = WorkerLimits {
        available: 0,
        ..Default::default()
    };
    assert_eq!(limits.effective(None), WorkerLimits::FLOOR_WORKERS);
}

// --- CancelToken ---

#[test]
fn test_cancel_token_starts_running() {
    let token = CancelToken::new();
    assert!(!token.is_cancelled());
}

#[test]
fn test_cancel_token_one_way_and_idempotent() {
    let token = CancelToken::new();
    token.cancel();
    assert!(token.is_cancelled());
    token.cancel();
    assert!(token.is_cancelled());
}

#[test]
fn test_cancel_token_clones_share_state() {
    let token = CancelToken::new();
    let observer = token.clone();
    token.cancel();
    assert!(observer.is_cancelled());
}

#[test]
fn test_cancel_token_observed_disconnects_on_cancel() {
    use crossbeam_channel::TryRecvError;
    let token = CancelToken::new();
    assert_eq!(token.observed().try_recv(), Err(TryRecvError::Empty));
    token.cancel();
    assert_eq!(token.observed().try_recv(), Err(TryRecvError::Disconnected));
}
