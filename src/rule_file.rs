//! In-memory representation of a rule file.
//!
//! A rule file is a metadata header followed by a blank line and a body of
//! rules, one per line. Parsing and rendering are pure so the write path can
//! be exercised without touching disk.

use crate::header::COMMENT_MARKER;

/// One parsed rule file: the version recorded in its header plus the rule body.
///
/// Header lines other than the version are not retained; they are regenerated
/// from scratch on every write.
#[derive(Debug, Clone, Default)]
pub struct RuleFile {
    version: Option<String>,
    rules: Vec<String>,
}

impl RuleFile {
    /// Parse a rule file from its text content.
    ///
    /// Every trimmed, non-empty line that does not open with the comment
    /// marker is taken as a rule. Rule syntax is never interpreted beyond
    /// that; a rule is an opaque string.
    pub fn parse(content: &str) -> Self {
        let mut version = None;
        let mut rules = Vec::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(rest) = line.strip_prefix(COMMENT_MARKER) {
                if version.is_none() {
                    if let Some(v) = rest.trim().strip_prefix("Version:") {
                        version = Some(v.trim().to_string());
                    }
                }
                continue;
            }
            rules.push(line.to_string());
        }

        Self { version, rules }
    }

    /// Version recorded in the header, if any.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Rules in file order.
    pub fn rules(&self) -> &[String] {
        &self.rules
    }

    /// Consume the file, keeping only its rule body.
    pub fn into_rules(self) -> Vec<String> {
        self.rules
    }
}

/// Format a blocking rule for a raw URL in AdGuard syntax.
///
/// Produces `||url^`, with the `$important` tag appended when requested.
pub fn format_rule(url: &str, important: bool) -> String {
    if important {
        format!("||{}^$important", url)
    } else {
        format!("||{}^", url)
    }
}

/// Render header lines and rule body into final file content.
///
/// Lines are newline-joined and the output is newline-terminated.
pub fn render(header: &[String], rules: &[String]) -> String {
    let mut out = String::new();
    for line in header.iter().chain(rules) {
        out.push_str(line);
        out.push('\n');
    }
    out
}
