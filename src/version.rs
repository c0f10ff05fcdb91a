//! Version sequencing for rule-file headers.

use chrono::NaiveDateTime;

/// How the next version of a rule file is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionMode {
    /// Manual insertion path: `major.minor.patch`, bumped on every write.
    Incremental,
    /// Bulk replacement path: `YYYYMMDD.HHMM` snapshot of the write time.
    Snapshot,
}

/// Compute the next version string for a rule file.
///
/// In [`VersionMode::Incremental`] the patch component of `current` is
/// incremented; when the patch reaches 10 it resets to 0 and the minor
/// component is incremented instead. The major component is never bumped
/// automatically. A missing or unparseable current version falls back to
/// `1.0.0` with a warning rather than failing the write.
///
/// In [`VersionMode::Snapshot`] the current version is ignored entirely:
/// a replaced file is superseded, not incremented.
pub fn next_version(current: Option<&str>, mode: VersionMode, now: NaiveDateTime) -> String {
    match mode {
        VersionMode::Incremental => bump_version(current),
        VersionMode::Snapshot => now.format("%Y%m%d.%H%M").to_string(),
    }
}

fn bump_version(current: Option<&str>) -> String {
    let current = match current {
        Some(v) => v,
        None => return "1.0.0".to_string(),
    };

    let parts: Vec<&str> = current.split('.').collect();
    if parts.len() != 3 {
        log::warn!("malformed version '{}', restarting at 1.0.0", current);
        return "1.0.0".to_string();
    }

    let parsed: Option<Vec<u32>> = parts.iter().map(|p| p.trim().parse().ok()).collect();
    let (major, minor, patch) = match parsed.as_deref() {
        Some([major, minor, patch]) => (*major, *minor, *patch),
        _ => {
            log::warn!("unparseable version '{}', restarting at 1.0.0", current);
            return "1.0.0".to_string();
        }
    };

    let mut minor = minor;
    let mut patch = patch + 1;
    if patch >= 10 {
        patch = 0;
        minor += 1;
    }

    format!("{}.{}.{}", major, minor, patch)
}
