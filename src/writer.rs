//! Rule-file write orchestration.
//!
//! Version and body are derived by re-reading the target file rather than
//! held in memory: every write is a read-modify-write against durable
//! storage. Exactly one file is touched per operation.

use std::fs;
use std::path::Path;

use chrono::Local;

use crate::error::Result;
use crate::header::compose_header;
use crate::merge::{merge_append, replace_all};
use crate::rule_file::{render, RuleFile};
use crate::version::{next_version, VersionMode};

/// Insert a single rule into the rule file at `path`, creating it if absent.
///
/// The current version and body are re-read from disk, the version is bumped
/// incrementally, and the file is overwritten in full with a fresh header and
/// the sorted, deduplicated body. The write is a plain overwrite; no
/// temp-file/rename atomicity is attempted.
pub fn write_insert(path: &Path, new_rule: &str, category: &str) -> Result<()> {
    ensure_parent(path)?;

    let current = read_current(path);
    let now = Local::now().naive_local();
    let version = next_version(current.version(), VersionMode::Incremental, now);
    let body = merge_append(current.into_rules(), new_rule);

    let header = compose_header(category, &version, now);
    fs::write(path, render(&header, &body))?;
    Ok(())
}

/// Replace the entire body of the rule file at `path` with `rules`.
///
/// Prior content is discarded unread and the version is a snapshot of the
/// write time: the supplied set fully supersedes the file.
pub fn write_replace(path: &Path, rules: Vec<String>, category: &str) -> Result<()> {
    ensure_parent(path)?;

    let now = Local::now().naive_local();
    let version = next_version(None, VersionMode::Snapshot, now);
    let body = replace_all(rules);

    let header = compose_header(category, &version, now);
    fs::write(path, render(&header, &body))?;
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
            log::info!("created rule directory {:?}", dir);
        }
    }
    Ok(())
}

/// Read the current rule file, treating an absent or unreadable file as empty.
fn read_current(path: &Path) -> RuleFile {
    if !path.exists() {
        return RuleFile::default();
    }
    match fs::read_to_string(path) {
        Ok(content) => RuleFile::parse(&content),
        Err(e) => {
            log::warn!("could not read existing rule file {:?}: {}", path, e);
            RuleFile::default()
        }
    }
}
