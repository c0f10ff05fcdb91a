//! adrule: CLI for maintaining AdGuard-style DNS blocklist files.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use adrule::{
    fetch, format_rule, git, is_duplicate, write_insert, write_replace, CategoryResolver, Result,
    SourceConfig,
};

#[derive(Parser)]
#[command(name = "adrule")]
#[command(author = "op6161")]
#[command(version = "0.1.0")]
#[command(about = "Maintain AdGuard-style DNS blocklist files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add one blocking rule to a category's rule file
    Add {
        /// URL to block (e.g. ads.example.com)
        url: String,

        /// Category the rule belongs to (aliases are accepted)
        category: String,

        /// Append the $important tag to the rule
        #[arg(long)]
        important: bool,

        /// Write into the category's _risk.txt file
        #[arg(long)]
        risk: bool,

        /// Root directory of the rule tree
        #[arg(long, default_value = "rules")]
        rules_dir: PathBuf,

        /// Skip git staging, commit, and push
        #[arg(long)]
        no_git: bool,
    },

    /// Refresh configured rule files from their upstream sources
    Sync {
        /// JSON mapping of categories to upstream lists
        #[arg(short, long, default_value = "sources.json")]
        config: PathBuf,

        /// Root directory of the rule tree
        #[arg(long, default_value = "rules")]
        rules_dir: PathBuf,

        /// Skip git staging, commit, and push
        #[arg(long)]
        no_git: bool,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Add {
            url,
            category,
            important,
            risk,
            rules_dir,
            no_git,
        } => {
            if let Err(e) = run_add(&url, &category, important, risk, &rules_dir, no_git) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Sync {
            config,
            rules_dir,
            no_git,
        } => {
            if let Err(e) = run_sync(&config, &rules_dir, no_git) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn run_add(
    url: &str,
    category: &str,
    important: bool,
    risk: bool,
    rules_dir: &Path,
    no_git: bool,
) -> Result<()> {
    let resolver = CategoryResolver::with_defaults();
    let resolved = resolver.normalize(category);
    if resolved != category {
        log::info!("category '{}' resolved to '{}'", category, resolved);
    }

    if is_duplicate(rules_dir, url) {
        println!("'{}' already exists in the rule tree, nothing to do", url);
        return Ok(());
    }

    let suffix = if risk { "_risk.txt" } else { ".txt" };
    let path = rules_dir
        .join(&resolved)
        .join(format!("{}{}", resolved, suffix));
    let rule = format_rule(url, important);

    write_insert(&path, &rule, &resolved)?;
    println!("Added {} to {:?}", rule, path);

    if !no_git {
        let message = format!("Update: {} rules with {}", resolved, url);
        match git::publish(&[&path], &message) {
            Ok(()) => println!("Committed and pushed {:?}", path),
            // The rule file is already written; report and move on
            Err(e) => log::error!("{}", e),
        }
    }

    Ok(())
}

fn run_sync(config: &Path, rules_dir: &Path, no_git: bool) -> Result<()> {
    let sources = SourceConfig::load(config)?;
    log::info!("refreshing upstream lists for {} categories", sources.len());

    let mut updated: Vec<PathBuf> = Vec::new();
    for (category, filename, url) in sources.targets() {
        log::info!("[{}/{}] fetching {}", category, filename, url);

        let raw = match fetch::fetch(url) {
            Some(raw) => raw,
            None => continue,
        };

        let rules = fetch::sanitize(&raw);
        if rules.is_empty() {
            log::warn!(
                "[{}/{}] no usable rules in content from {}, skipping",
                category,
                filename,
                url
            );
            continue;
        }

        let path = rules_dir.join(category).join(filename);
        let count = rules.len();
        match write_replace(&path, rules, category) {
            Ok(()) => {
                println!("Refreshed {:?} with {} rules", path, count);
                updated.push(path);
            }
            Err(e) => log::error!("[{}/{}] write failed: {}", category, filename, e),
        }
    }

    if updated.is_empty() {
        println!("No rule files updated");
        return Ok(());
    }

    if !no_git {
        let message = format!("Chore: Update {} external rule list(s)", updated.len());
        match git::publish(&updated, &message) {
            Ok(()) => println!("Committed and pushed {} file(s)", updated.len()),
            Err(e) => log::error!("{}", e),
        }
    }

    Ok(())
}
