//! Duplicate detection across the rule tree.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use walkdir::WalkDir;

/// Check whether a URL is already covered by any rule file under `root`.
///
/// Every `.txt` file in the tree is scanned line by line for the literal
/// substring `||<url>^`. Matching is substring containment, so a tagged rule
/// like `||x^$important` still matches a bare lookup for `x`. A missing root
/// means no duplicates. Files that cannot be read are logged and skipped and
/// never fail the scan; the tree itself is never mutated here.
pub fn is_duplicate(root: &Path, url: &str) -> bool {
    if !root.exists() {
        return false;
    }

    let needle = format!("||{}^", url);

    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().map_or(true, |ext| ext != "txt") {
            continue;
        }
        if file_contains(path, &needle) {
            return true;
        }
    }

    false
}

fn file_contains(path: &Path, needle: &str) -> bool {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            log::warn!("skipping unreadable rule file {:?}: {}", path, e);
            return false;
        }
    };

    for line in BufReader::new(file).lines() {
        match line {
            Ok(line) => {
                if line.contains(needle) {
                    return true;
                }
            }
            Err(e) => {
                // Undecodable or truncated content: give up on this file only
                log::warn!("skipping rule file {:?} mid-read: {}", path, e);
                return false;
            }
        }
    }

    false
}
