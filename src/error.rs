use std::path::PathBuf;
use thiserror::Error;

/// A failure recorded during a crawl.
///
/// None of these abort the call; they end up in
/// [`CrawlReport::errors`](crate::CrawlReport::errors). The `Display` output
/// carries the operation, the path, and the underlying message verbatim.
#[derive(Error, Debug)]
pub enum CrawlError {
    // Root
    #[error("error accessing root path {}: {source}", .path.display())]
    RootAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    // Traversal
    #[error("error reading directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error processing {}: {source}", .path.display())]
    Entry {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse classification of a [`CrawlError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The root could not be inspected or is not a directory. Nothing was walked.
    Root,

    /// A directory below the root could not be listed; its subtree was skipped.
    Listing,

    /// A single entry could not be inspected; only that entry was skipped.
    Entry,
}

impl CrawlError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::RootAccess { .. } | Self::NotADirectory(_) => ErrorKind::Root,
            Self::ReadDir { .. } => ErrorKind::Listing,
            Self::Entry { .. } => ErrorKind::Entry,
        }
    }

    /// The path this error occurred at.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::RootAccess { path, .. }
            | Self::NotADirectory(path)
            | Self::ReadDir { path, .. }
            | Self::Entry { path, .. } => path,
        }
    }

    /// Whether the crawl stopped before visiting anything.
    ///
    /// Only root errors are fatal in this sense; the call still returns a
    /// report, just an empty one.
    pub fn is_fatal(&self) -> bool {
        self.kind() == ErrorKind::Root
    }
}

/// Failure to load a [`CrawlConfig`](crate::CrawlConfig) from disk or text.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config at {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn messages_carry_operation_path_and_cause() {
        let err = CrawlError::ReadDir {
            path:   PathBuf::from("docs/private"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "access denied"),
        };
        assert_eq!(err.to_string(), "error reading directory docs/private: access denied");
        assert_eq!(err.kind(), ErrorKind::Listing);
        assert!(!err.is_fatal());
    }

    #[test]
    fn root_errors_are_fatal() {
        let missing = CrawlError::RootAccess {
            path:   PathBuf::from("/nope"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let file = CrawlError::NotADirectory(PathBuf::from("notes.txt"));

        assert!(missing.to_string().contains("error accessing root path"));
        assert_eq!(file.to_string(), "notes.txt is not a directory");
        assert!(missing.is_fatal() && file.is_fatal());
        assert_eq!(file.path(), &PathBuf::from("notes.txt"));
    }
}
