//! Version-control sink: staging, committing, and pushing written rule files.
//!
//! Failures surface as [`Error::Git`] and never roll back rule files that
//! were already written.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Stage the given paths.
pub fn stage<P: AsRef<Path>>(paths: &[P]) -> Result<()> {
    let mut command = Command::new("git");
    command.arg("add");
    for path in paths {
        command.arg(path.as_ref());
    }
    run(command, "add")
}

/// Commit staged changes with the given message.
pub fn commit(message: &str) -> Result<()> {
    let mut command = Command::new("git");
    command.args(["commit", "-m", message]);
    run(command, "commit")
}

/// Push the current branch to a remote.
pub fn push(remote: &str, branch: &str) -> Result<()> {
    let mut command = Command::new("git");
    command.args(["push", remote, branch]);
    run(command, "push")
}

/// Stage, commit, and push in order, stopping at the first failure.
pub fn publish<P: AsRef<Path>>(paths: &[P], message: &str) -> Result<()> {
    stage(paths)?;
    log::info!("staged {} path(s)", paths.len());
    commit(message)?;
    log::info!("committed: {}", message);
    push("origin", "main")?;
    log::info!("pushed to origin/main");
    Ok(())
}

fn run(mut command: Command, verb: &str) -> Result<()> {
    let output = command
        .output()
        .map_err(|e| Error::Git(format!("failed to execute git {}: {}", verb, e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::Git(format!(
            "git {} failed with {}: {}",
            verb,
            output.status,
            stderr.trim()
        )));
    }

    Ok(())
}
