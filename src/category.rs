//! Category alias normalization.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Built-in alias table: canonical category name to its accepted aliases.
static DEFAULT_ALIASES: Lazy<HashMap<String, Vec<String>>> = Lazy::new(|| {
    let table: [(&str, &[&str]); 6] = [
        ("google", &["구글", "rnrmf", "google.com"]),
        ("naver", &["네이버", "spdlqj", "naver.com"]),
        ("daum", &["다음", "ekdna", "daum.net"]),
        ("spam", &["스팸"]),
        ("security", &["보안"]),
        ("malware", &["멀웨어", "악성코드"]),
    ];
    table
        .iter()
        .map(|(name, aliases)| {
            (
                name.to_string(),
                aliases.iter().map(|a| a.to_string()).collect(),
            )
        })
        .collect()
});

/// Maps user-supplied category names to canonical ones.
///
/// The alias table is injected at construction so tests can substitute
/// fixtures; [`CategoryResolver::with_defaults`] uses the built-in table.
#[derive(Debug, Clone)]
pub struct CategoryResolver {
    aliases: HashMap<String, Vec<String>>,
}

impl CategoryResolver {
    /// Create a resolver over a custom alias table.
    pub fn new(aliases: HashMap<String, Vec<String>>) -> Self {
        Self { aliases }
    }

    /// Create a resolver over the built-in alias table.
    pub fn with_defaults() -> Self {
        Self {
            aliases: DEFAULT_ALIASES.clone(),
        }
    }

    /// Resolve an alias to its canonical category name.
    ///
    /// Matching is case-insensitive against both canonical names and their
    /// aliases. Input that maps to nothing is returned unchanged; this
    /// function is total and never fails.
    pub fn normalize(&self, raw: &str) -> String {
        let lower = raw.to_lowercase();

        if self.aliases.contains_key(&lower) {
            return lower;
        }

        for (canonical, aliases) in &self.aliases {
            if aliases.iter().any(|a| a.to_lowercase() == lower) {
                return canonical.clone();
            }
        }

        raw.to_string()
    }
}

impl Default for CategoryResolver {
    fn default() -> Self {
        Self::with_defaults()
    }
}
