//! End-to-end tests for the rule-file update engine.

use adrule::{fetch, format_rule, is_duplicate, write_insert, write_replace, RuleFile};
use std::fs;
use std::path::PathBuf;

fn rule_tree() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("rules");
    (dir, root)
}

#[test]
fn test_insert_into_empty_category_creates_file_at_version_one() {
    let (_dir, root) = rule_tree();
    let path = root.join("naver").join("naver.txt");

    assert!(!is_duplicate(&root, "ads.example.com"));

    let rule = format_rule("ads.example.com", false);
    write_insert(&path, &rule, "naver").unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("! Title: Naver DNS Rule\n"));
    assert!(content.contains("! Version: 1.0.0\n"));
    assert!(content.contains("! Date: "));
    assert!(content.contains("! Homepage: "));
    assert!(content.ends_with('\n'));

    let parsed = RuleFile::parse(&content);
    assert_eq!(parsed.version(), Some("1.0.0"));
    assert_eq!(parsed.rules(), ["||ads.example.com^"]);
}

#[test]
fn test_reinsert_is_refused_as_duplicate_and_file_is_untouched() {
    let (_dir, root) = rule_tree();
    let path = root.join("naver").join("naver.txt");

    write_insert(&path, &format_rule("ads.example.com", false), "naver").unwrap();
    let before = fs::read_to_string(&path).unwrap();

    // The insert path checks the whole tree first and refuses on a hit
    assert!(is_duplicate(&root, "ads.example.com"));
    let after = fs::read_to_string(&path).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_duplicate_scan_is_tag_agnostic_across_categories() {
    let (_dir, root) = rule_tree();
    let path = root.join("security").join("security_risk.txt");

    write_insert(&path, &format_rule("ads.example.com", true), "security").unwrap();

    // A tagged rule still answers a bare lookup, from any file in the tree
    assert!(is_duplicate(&root, "ads.example.com"));
    assert!(!is_duplicate(&root, "other.example.com"));
}

#[test]
fn test_versions_advance_across_inserts() {
    let (_dir, root) = rule_tree();
    let path = root.join("daum").join("daum.txt");

    write_insert(&path, &format_rule("a.example.com", false), "daum").unwrap();
    write_insert(&path, &format_rule("b.example.com", false), "daum").unwrap();
    write_insert(&path, &format_rule("c.example.com", false), "daum").unwrap();

    let parsed = RuleFile::parse(&fs::read_to_string(&path).unwrap());
    assert_eq!(parsed.version(), Some("1.0.2"));
    assert_eq!(
        parsed.rules(),
        [
            "||a.example.com^",
            "||b.example.com^",
            "||c.example.com^"
        ]
    );
}

#[test]
fn test_replace_supersedes_existing_body_entirely() {
    let (_dir, root) = rule_tree();
    let path = root.join("security").join("malware.txt");

    write_insert(&path, &format_rule("c.example.com", false), "security").unwrap();

    write_replace(
        &path,
        vec![
            "||b.example.com^".to_string(),
            "||a.example.com^".to_string(),
        ],
        "security",
    )
    .unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(!content.contains("c.example.com"));

    let parsed = RuleFile::parse(&content);
    assert_eq!(parsed.rules(), ["||a.example.com^", "||b.example.com^"]);

    // Snapshot version: YYYYMMDD.HHMM
    let version = parsed.version().unwrap();
    let (date, time) = version.split_once('.').unwrap();
    assert_eq!(date.len(), 8);
    assert_eq!(time.len(), 4);
    assert!(date.chars().all(|c| c.is_ascii_digit()));
    assert!(time.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn test_bulk_refresh_from_raw_upstream_content() {
    let (_dir, root) = rule_tree();
    let path = root.join("security").join("malware.txt");

    let raw = "! upstream header\n# another comment\n||z.example.com^\n||a.example.com^\n\n";
    let rules = fetch::sanitize(raw);
    assert_eq!(rules.len(), 2);

    write_replace(&path, rules, "security").unwrap();

    let parsed = RuleFile::parse(&fs::read_to_string(&path).unwrap());
    assert_eq!(parsed.rules(), ["||a.example.com^", "||z.example.com^"]);
}
