use crate::media::{compute_etag, etag_matches, if_range_matches};
use std::path::Path;
use std::time::{Duration, SystemTime};

fn mtime(secs: u64) -> Option<SystemTime> {
    Some(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
}

#[test]
fn etag_is_deterministic() {
    let path = Path::new("/media/movies/Heat (1995)/Heat.mkv");

    let first = compute_etag(path, mtime(1_700_000_000), 1000);
    let second = compute_etag(path, mtime(1_700_000_000), 1000);

    assert_eq!(first, second);
}

#[test]
fn etag_is_a_weak_quoted_validator() {
    let etag = compute_etag(Path::new("a.mkv"), mtime(1), 1);

    assert!(etag.starts_with("W/\""), "unexpected etag {etag}");
    assert!(etag.ends_with('"'), "unexpected etag {etag}");
    assert_eq!(etag.len(), "W/\"\"".len() + 16);
}

#[test]
fn etag_changes_with_each_input() {
    let base = compute_etag(Path::new("a.mkv"), mtime(100), 1000);

    assert_ne!(base, compute_etag(Path::new("b.mkv"), mtime(100), 1000));
    assert_ne!(base, compute_etag(Path::new("a.mkv"), mtime(101), 1000));
    assert_ne!(base, compute_etag(Path::new("a.mkv"), mtime(100), 1001));
}

#[test]
fn etag_tolerates_unknown_mtime() {
    let a = compute_etag(Path::new("a.mkv"), None, 10);
    let b = compute_etag(Path::new("a.mkv"), None, 10);
    assert_eq!(a, b);
}

#[test]
fn if_none_match_wildcard_matches() {
    assert!(etag_matches("W/\"abc\"", "*"));
    assert!(etag_matches("W/\"abc\"", " * "));
}

#[test]
fn if_none_match_exact_and_weak_forms_match() {
    assert!(etag_matches("W/\"abc\"", "W/\"abc\""));
    assert!(etag_matches("W/\"abc\"", "\"abc\""));
}

#[test]
fn if_none_match_list_matches_any_member() {
    assert!(etag_matches("W/\"abc\"", "\"xyz\", W/\"abc\""));
    assert!(!etag_matches("W/\"abc\"", "\"xyz\", W/\"def\""));
}

#[test]
fn if_none_match_mismatch() {
    assert!(!etag_matches("W/\"abc\"", "W/\"abd\""));
    assert!(!etag_matches("W/\"abc\"", ""));
}

#[test]
fn missing_if_range_passes() {
    assert!(if_range_matches("W/\"abc\"", None));
}

#[test]
fn if_range_requires_exact_match() {
    assert!(if_range_matches("W/\"abc\"", Some("W/\"abc\"")));
    assert!(!if_range_matches("W/\"abc\"", Some("\"abc\"")));
    assert!(!if_range_matches("W/\"abc\"", Some("*")));
    assert!(!if_range_matches(
        "W/\"abc\"",
        Some("Wed, 21 Oct 2015 07:28:00 GMT")
    ));
}
