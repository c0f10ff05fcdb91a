//! Bulk-refresh source configuration.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// One upstream list: the file it lands in and where it is fetched from.
///
/// Both fields are optional in the JSON so that an incomplete entry can be
/// skipped with a warning at iteration time instead of failing the whole run.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceEntry {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Mapping from category name to its upstream lists.
///
/// Loaded once per sync run; categories iterate in name order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceConfig(BTreeMap<String, Vec<SourceEntry>>);

impl SourceConfig {
    /// Load the sources config from a JSON file.
    ///
    /// A missing or malformed file is a configuration error, fatal to the
    /// run that needs it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read sources config {:?}: {}", path, e)))?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("cannot parse sources config {:?}: {}", path, e)))
    }

    /// Iterate complete `(category, filename, url)` targets.
    ///
    /// Entries missing a filename or URL are logged and dropped.
    pub fn targets(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.0.iter().flat_map(|(category, entries)| {
            entries.iter().filter_map(move |entry| {
                match (entry.filename.as_deref(), entry.url.as_deref()) {
                    (Some(filename), Some(url)) => Some((category.as_str(), filename, url)),
                    _ => {
                        log::warn!(
                            "incomplete source entry under '{}': needs filename and url",
                            category
                        );
                        None
                    }
                }
            })
        })
    }

    /// Number of configured categories.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no categories are configured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
