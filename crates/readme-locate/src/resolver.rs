//! README resolution for one directory level
//!
//! Entries are ranked into suffix slots (see [`crate::extensions`]); the
//! first occupied slot wins. At the repository root a directory without a
//! README falls back to `docs`, `.gitea` and `.github`, one level deep.

use crate::Result;
use crate::extensions::{DEFAULT_MARKUP_EXTENSION, readme_slot, suffix_priorities};
use crate::natural::natural_sort_less;
use crate::path;
use crate::source::{TreeEntry, TreeSource};
use crate::well_known::WellKnownDir;

/// A README selected for a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmeMatch<E> {
    /// Well-known directory the README was found under, empty when it sits
    /// in the searched directory itself
    pub subfolder: String,

    /// The winning entry; may be a symbolic link
    pub entry: E,
}

impl<E: TreeEntry> ReadmeMatch<E> {
    /// Path of the README relative to the searched directory.
    pub fn relative_path(&self) -> String {
        path::join(&self.subfolder, self.entry.name())
    }
}

/// Picks the README that represents a directory.
#[derive(Debug)]
pub struct ReadmeResolver<'a, S> {
    source: &'a S,
    markup_extension: String,
}

impl<'a, S: TreeSource> ReadmeResolver<'a, S> {
    /// Create a resolver over `source` ranking `.md` as the markup extension.
    pub fn new(source: &'a S) -> Self {
        Self::with_markup_extension(source, DEFAULT_MARKUP_EXTENSION)
    }

    /// Create a resolver with a custom markup extension such as `.rst`.
    pub fn with_markup_extension(source: &'a S, markup_extension: impl Into<String>) -> Self {
        Self {
            source,
            markup_extension: markup_extension.into(),
        }
    }

    /// Markup extension ranked above `.txt`.
    pub fn markup_extension(&self) -> &str {
        &self.markup_extension
    }

    /// Locate the README among `entries`, the listing of `parent_path`.
    ///
    /// `try_well_known_dirs` must only be set when `parent_path` is the
    /// repository root; it enables the `docs`/`.gitea`/`.github` fallback
    /// when no README sits in `entries` itself.
    ///
    /// Returns `Ok(None)` when nothing matches. Listing failures of a
    /// well-known directory abort the whole resolution unless they only
    /// report that the directory does not exist.
    pub fn resolve(
        &self,
        parent_path: &str,
        entries: &[S::Entry],
        locale: &str,
        try_well_known_dirs: bool,
    ) -> Result<Option<ReadmeMatch<S::Entry>>> {
        let mut well_known: [Option<&S::Entry>; 3] = [None, None, None];
        if try_well_known_dirs {
            for entry in entries.iter().filter(|e| e.is_dir()) {
                if let Some(dir) = WellKnownDir::from_name(entry.name()) {
                    let slot = &mut well_known[dir.index()];
                    // Canonical spelling beats any case variant
                    if slot.is_none() || dir.is_canonical(entry.name()) {
                        *slot = Some(entry);
                    }
                }
            }
        }

        let suffixes = suffix_priorities(&self.markup_extension, locale);
        let mut slots: Vec<Option<&S::Entry>> = vec![None; suffixes.len() + 1];
        for entry in entries {
            let Some(index) = readme_slot(entry.name(), &suffixes) else {
                continue;
            };
            let replaces = match slots[index] {
                None => true,
                Some(holder) => natural_sort_less(holder.name(), entry.name()),
            };
            if replaces && self.accepts(parent_path, entry) {
                tracing::trace!(name = entry.name(), slot = index, "README candidate");
                slots[index] = Some(entry);
            }
        }

        if let Some(entry) = slots.into_iter().flatten().next() {
            return Ok(Some(ReadmeMatch {
                subfolder: String::new(),
                entry: entry.clone(),
            }));
        }

        if !try_well_known_dirs {
            return Ok(None);
        }

        for (dir, entry) in WellKnownDir::ALL.iter().zip(well_known) {
            let Some(entry) = entry else {
                continue;
            };

            let dir_path = path::join(parent_path, entry.name());
            tracing::debug!(dir = %dir, path = %dir_path, "Looking for README in well-known directory");

            let child_entries = match self.source.list_entries(entry) {
                Ok(child_entries) => child_entries,
                Err(e) if e.is_not_exist() => {
                    tracing::debug!(path = %dir_path, "Well-known directory does not exist, skipping");
                    continue;
                }
                Err(e) => return Err(e),
            };

            match self.resolve(&dir_path, &child_entries, locale, false) {
                Ok(Some(found)) => {
                    return Ok(Some(ReadmeMatch {
                        subfolder: path::join(entry.name(), &found.subfolder),
                        entry: found.entry,
                    }));
                }
                Ok(None) => {}
                Err(e) if e.is_not_exist() => {}
                Err(e) => return Err(e),
            }
        }

        Ok(None)
    }

    /// Links are only accepted when they resolve to a file.
    fn accepts(&self, parent_path: &str, entry: &S::Entry) -> bool {
        if !entry.is_symlink() {
            return true;
        }

        let full_path = path::join(parent_path, entry.name());
        match self.source.follow_link(&full_path, entry) {
            Ok(target) if target.is_regular() || target.is_executable() => true,
            Ok(_) => {
                tracing::debug!(path = %full_path, "README link does not point to a file");
                false
            }
            Err(e) => {
                tracing::debug!(path = %full_path, error = %e, "Ignoring unresolvable README link");
                false
            }
        }
    }
}
