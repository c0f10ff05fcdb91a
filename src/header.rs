//! Metadata header composition for rule files.

use chrono::NaiveDateTime;

/// Marker that opens every header/comment line in a rule file.
pub const COMMENT_MARKER: char = '!';

/// Homepage advertised in every generated header.
pub const HOMEPAGE: &str = "https://github.com/op6161/adrule";

/// Build the metadata header for a rule file.
///
/// Produces, in fixed order: title, version, generation date, homepage, and a
/// trailing empty string that renders as the blank line separating the header
/// from the rule body. The header is fully regenerated on every write; only
/// the version carries over, and it is computed upstream before the old
/// header is discarded.
pub fn compose_header(category: &str, version: &str, now: NaiveDateTime) -> Vec<String> {
    vec![
        format!("! Title: {} DNS Rule", capitalize(category)),
        format!("! Version: {}", version),
        format!("! Date: {}", now.format("%Y-%m-%d %H:%M:%S")),
        format!("! Homepage: {}", HOMEPAGE),
        String::new(),
    ]
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
