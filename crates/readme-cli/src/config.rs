//! Configuration file and setting precedence
//!
//! Settings are taken from, in order: command-line flags (or their
//! environment variables), the config file, then defaults. The locale
//! default comes from the process locale (`LC_ALL`, `LC_MESSAGES`, `LANG`).

use std::fs;
use std::path::{Path, PathBuf};

use readme_locate::extensions::DEFAULT_MARKUP_EXTENSION;
use serde::{Deserialize, Serialize};

use crate::cli::RankingArgs;
use crate::error::{CliError, Result};
use crate::locale;

/// Contents of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Locale used when none is given on the command line
    pub locale: Option<String>,

    /// Markup extension used when none is given on the command line
    pub markup_extension: Option<String>,
}

impl Config {
    /// Platform config location: `<config dir>/readme-locate/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("readme-locate").join("config.toml"))
    }

    /// Load the config file.
    ///
    /// An explicit path must exist. The default path is skipped when
    /// missing; a malformed file is an error either way.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_path(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_path(&path),
                Some(path) => {
                    tracing::debug!(?path, "No config file found, using defaults");
                    Ok(Self::default())
                }
                None => Ok(Self::default()),
            },
        }
    }

    fn from_path(path: &Path) -> Result<Self> {
        tracing::debug!(?path, "Loading config");
        let content = fs::read_to_string(path).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Effective ranking settings after applying precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub locale: String,
    pub markup_extension: String,
}

impl Settings {
    /// Merge flags over the config file over defaults.
    pub fn resolve(args: &RankingArgs, config: &Config) -> Self {
        let locale = args
            .locale
            .clone()
            .or_else(|| config.locale.clone())
            .unwrap_or_else(locale::system_locale);
        let markup_extension = args
            .markup_ext
            .as_deref()
            .or(config.markup_extension.as_deref())
            .map_or_else(
                || DEFAULT_MARKUP_EXTENSION.to_string(),
                normalize_extension,
            );

        Self {
            locale,
            markup_extension,
        }
    }
}

/// Ensure an extension starts with a dot: `md` becomes `.md`.
pub fn normalize_extension(ext: &str) -> String {
    if ext.is_empty() || ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    }
}
