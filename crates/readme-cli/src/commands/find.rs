//! Find command: locate and print a directory's README

use std::io::Write;
use std::path::PathBuf;

use colored::Colorize;
use git2::Repository;
use readme_git::{GitTree, LocatedReadme, locate_readme};
use readme_locate::TreeEntry;
use serde::Serialize;

use crate::config::Settings;
use crate::error::{CliError, Result};

/// Options for the find command
#[derive(Debug, Clone)]
pub struct FindOptions {
    pub repo: PathBuf,
    pub rev: String,
    pub path: String,
    pub json: bool,
    pub content: bool,
}

/// JSON view of a located README
#[derive(Debug, Serialize)]
struct ReadmeReport<'a> {
    subfolder: &'a str,
    name: &'a str,
    path: &'a str,
    full_path: &'a str,
    is_symlink: bool,
    target_id: Option<String>,
}

impl<'a> From<&'a LocatedReadme> for ReadmeReport<'a> {
    fn from(found: &'a LocatedReadme) -> Self {
        Self {
            subfolder: &found.subfolder,
            name: found.entry.name(),
            path: &found.path,
            full_path: &found.full_path,
            is_symlink: found.is_symlink(),
            target_id: found.target.as_ref().map(|t| t.id().to_string()),
        }
    }
}

/// Run the find command
pub fn run_find(options: &FindOptions, settings: &Settings) -> Result<()> {
    let repo = Repository::discover(&options.repo).map_err(|source| CliError::Repository {
        path: options.repo.clone(),
        source,
    })?;
    let tree = GitTree::open(&repo, &options.rev)?;
    let normalized = GitTree::normalize_path(&options.path)?;
    let tree_path = normalized.as_str();

    tracing::debug!(
        repo = ?repo.path(),
        rev = %options.rev,
        commit = %tree.commit_id(),
        locale = %settings.locale,
        "Searching for README"
    );

    let found = locate_readme(&tree, tree_path, &settings.locale, &settings.markup_extension)?;

    if options.json {
        let report = found.as_ref().map(ReadmeReport::from);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let Some(found) = found else {
        let shown = if tree_path.is_empty() { "/" } else { tree_path };
        eprintln!(
            "{} No README found in {}",
            "note:".yellow().bold(),
            shown.cyan()
        );
        return Ok(());
    };

    if options.content {
        let target = found.target.as_ref().ok_or_else(|| {
            CliError::user(format!(
                "README link {} does not resolve to a file",
                found.full_path
            ))
        })?;
        let blob = tree.read_blob(target)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&blob)?;
        stdout.flush()?;
        return Ok(());
    }

    println!("{}", found.path);
    Ok(())
}
