use serde::{Serialize, Serializer};

use crate::entry::MatchedEntry;
use crate::error::{CrawlError, ErrorKind};

/// The output of a completed crawl.
///
/// Built fresh for every call and returned as a snapshot. A crawl whose
/// root could not be used has empty `files`, zero counts, and exactly one
/// error for which [`CrawlError::is_fatal`] is true.
#[derive(Debug, Default, Serialize)]
pub struct CrawlReport {
    /// Matched entries. Entries from one directory listing keep their listing order.
    pub files: Vec<MatchedEntry>,

    /// Entries (files and directories) whose metadata lookup succeeded.
    pub total_scanned: usize,

    /// Directories whose listing succeeded, the root included.
    pub directories_scanned: usize,

    /// Everything that went wrong, one per failed listing or lookup.
    #[serde(serialize_with = "serialize_errors")]
    pub errors: Vec<CrawlError>,
}

impl CrawlReport {
    pub(crate) fn root_failure(error: CrawlError) -> Self {
        Self {
            errors: vec![error],
            ..Self::default()
        }
    }

    /// Fold a subtree's report into this one, after everything already here.
    pub(crate) fn merge(&mut self, other: CrawlReport) {
        self.files.extend(other.files);
        self.total_scanned += other.total_scanned;
        self.directories_scanned += other.directories_scanned;
        self.errors.extend(other.errors);
    }

    /// Human-readable error strings, in the order they were recorded.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// `true` if the root itself could not be crawled.
    pub fn root_failed(&self) -> bool {
        self.errors.iter().any(CrawlError::is_fatal)
    }

    /// Errors of one [`ErrorKind`].
    pub fn errors_of(&self, kind: ErrorKind) -> impl Iterator<Item = &CrawlError> {
        self.errors.iter().filter(move |e| e.kind() == kind)
    }
}

fn serialize_errors<S: Serializer>(errors: &[CrawlError], s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(errors.iter().map(ToString::to_string))
}
