//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Locate the README that represents a directory of a git repository
#[derive(Parser, Debug)]
#[command(name = "readme")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to <config dir>/readme-locate/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that ranks README names
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct RankingArgs {
    /// Reader locale such as `en-US` or `zh-CN`; empty disables localization
    #[arg(short, long, env = "README_LOCALE")]
    pub locale: Option<String>,

    /// Markup extension ranked above `.txt`
    #[arg(long, value_name = "EXT")]
    pub markup_ext: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Find the README of a directory at a revision
    ///
    /// At the repository root, a missing README falls back to
    /// docs/, .gitea/ and .github/ in that order.
    ///
    /// Examples:
    ///   readme find                         # README of HEAD's root
    ///   readme find --path crates/core      # README of a subdirectory
    ///   readme find --rev v1.0 --locale fr  # French README at tag v1.0
    ///   readme find --content               # Print the README itself
    Find {
        /// Repository to search from (discovered upwards)
        #[arg(long, default_value = ".")]
        repo: PathBuf,

        /// Revision to read the tree from
        #[arg(long, default_value = "HEAD")]
        rev: String,

        /// Directory inside the tree, relative to the repository root
        #[arg(long, default_value = "")]
        path: String,

        #[command(flatten)]
        ranking: RankingArgs,

        /// Output as JSON for scripting
        #[arg(long, conflicts_with = "content")]
        json: bool,

        /// Print the README contents instead of its path
        #[arg(long)]
        content: bool,
    },

    /// Print README suffixes in priority order
    Extensions {
        #[command(flatten)]
        ranking: RankingArgs,
    },
}
