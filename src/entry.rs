use std::path::{Path, PathBuf};

use serde::Serialize;

/// What a metadata lookup reported about a path.
///
/// Lookups follow symlinks, so a link to a directory is a `Dir`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A regular file.
    File,

    /// A directory.
    Dir,

    /// Anything else (device files, pipes, sockets, etc.). Counted, never matched.
    Other,
}

impl EntryKind {
    pub fn is_dir(self) -> bool {
        self == Self::Dir
    }
}

/// A single reported hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedEntry {
    /// Path to the entry, joined onto the crawl root as given by the caller.
    pub path: PathBuf,

    /// The entry's bare name.
    pub name: String,

    /// Whether the entry is a directory.
    pub is_directory: bool,

    /// Every configured keyword found in the lower-cased name, in configured
    /// order. Never empty.
    pub matched_keywords: Vec<String>,

    /// The file extension including the leading `.`. `None` for directories
    /// and for files without one.
    pub extension: Option<String>,
}

impl MatchedEntry {
    pub(crate) fn directory(path: PathBuf, name: String, matched_keywords: Vec<String>) -> Self {
        Self {
            path,
            name,
            is_directory: true,
            matched_keywords,
            extension: None,
        }
    }

    pub(crate) fn file(path: PathBuf, name: String, matched_keywords: Vec<String>) -> Self {
        let extension = extension_of(&name);
        Self {
            path,
            name,
            is_directory: false,
            matched_keywords,
            extension,
        }
    }
}

/// Extension of a bare file name, with its leading `.`.
///
/// Dotfiles such as `.sopconfig` have no extension; a trailing dot yields `"."`.
pub(crate) fn extension_of(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
}
