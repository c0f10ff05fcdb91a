//! adrule - AdGuard-style DNS blocklist maintenance.
//!
//! This crate maintains a tree of plain-text blocklist files. Each file
//! carries a small metadata header (title, version, generation date) above a
//! sorted, duplicate-free body of `||domain^` rules. Two workflows mutate the
//! tree: inserting one operator-supplied rule, and bulk-replacing a file's
//! body with content fetched from an upstream source.
//!
//! # Features
//!
//! - **Duplicate detection**: a literal scan of the whole rule tree rejects
//!   rules that already exist anywhere in it
//! - **Version sequencing**: `major.minor.patch` bumps for manual insertions,
//!   `YYYYMMDD.HHMM` snapshots for bulk replacements
//! - **Deterministic output**: bodies are always written sorted and
//!   deduplicated under a freshly composed header
//! - **Upstream refresh**: download, sanitize, and replace whole rule files
//!   from configured source URLs
//! - **Git integration**: stage, commit, and push written files in one step
//!
//! # Quick Start
//!
//! ```ignore
//! use adrule::{format_rule, is_duplicate, write_insert};
//! use std::path::Path;
//!
//! let root = Path::new("rules");
//! if !is_duplicate(root, "ads.example.com") {
//!     let rule = format_rule("ads.example.com", false);
//!     write_insert(&root.join("naver/naver.txt"), &rule, "naver")?;
//! }
//! ```
//!
//! Rule syntax is never interpreted: a rule is an opaque line, duplicate
//! detection is literal substring containment over `||url^`, and ordering is
//! plain byte order. Writes are whole-file overwrites with no temp-file
//! atomicity, and exactly one process is assumed to touch the tree at a time.

mod error;
mod header;
mod merge;
mod rule_file;
mod scanner;
mod version;
mod writer;

pub mod category;
pub mod fetch;
pub mod git;
pub mod sources;

// Re-export core types
pub use error::{Error, Result};

// Re-export the rule-file update engine
pub use header::{compose_header, COMMENT_MARKER, HOMEPAGE};
pub use merge::{merge_append, replace_all};
pub use rule_file::{format_rule, render, RuleFile};
pub use scanner::is_duplicate;
pub use version::{next_version, VersionMode};
pub use writer::{write_insert, write_replace};

// Re-export collaborators
pub use category::CategoryResolver;
pub use sources::{SourceConfig, SourceEntry};
