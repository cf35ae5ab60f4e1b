//! # kwcrawl
//!
//! Keyword-driven filesystem crawler: concurrent and sequential, one contract.
//!
//! kwcrawl walks a directory tree, matches every entry's *name* against a set
//! of case-insensitive keywords, and returns a [`CrawlReport`] with the
//! matches, traversal counts, and every error it ran into. Nothing short of
//! an unusable root stops a crawl: unreadable directories and entries are
//! recorded and skipped.
//!
//! The traversal is written once against the [`FileSystem`] trait and driven
//! two ways:
//!
//! - [`Mode::Concurrent`] starts every entry of a directory at once (over
//!   [`TokioFs`] by default) and joins them before moving on;
//! - [`Mode::Sequential`] handles one entry at a time, depth-first (over
//!   [`StdFs`] by default, no runtime needed).
//!
//! Results are merged in listing order in both modes, so the two produce the
//! same report for the same tree.
//!
//! # Quick Start
//!
//! ```rust
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::write(dir.path().join("sop-guide.md"), "").unwrap();
//! std::fs::write(dir.path().join("readme.md"), "").unwrap();
//!
//! let report = kwcrawl::crawler()
//!     .keywords(["sop", "process"])
//!     .run_blocking(dir.path());
//!
//! assert_eq!(report.files.len(), 1);
//! assert_eq!(report.files[0].matched_keywords, vec!["sop"]);
//! assert_eq!(report.total_scanned, 2);
//! assert!(report.errors.is_empty());
//! ```
//!
//! From async code:
//!
//! ```rust,ignore
//! let config = kwcrawl::CrawlConfig::load("crawl.toml")?;
//! let report = kwcrawl::crawl("/srv/docs", &config).await;
//! for entry in &report.files {
//!     println!("{} {:?}", entry.path.display(), entry.matched_keywords);
//! }
//! ```

#![forbid(unsafe_code)]

mod builder;
mod config;
mod engine;
mod entry;
mod error;
mod fs;
mod keywords;
mod results;
mod traits;

use std::path::Path;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use async_trait::async_trait;
pub use builder::CrawlBuilder;
pub use config::{CrawlConfig, DEFAULT_KEYWORDS};
pub use engine::Mode;
pub use entry::{EntryKind, MatchedEntry};
pub use error::{ConfigError, CrawlError, ErrorKind};
pub use fs::{StdFs, TokioFs};
pub use keywords::match_keywords;
pub use results::CrawlReport;
pub use traits::FileSystem;

// ── Entry points ──────────────────────────────────────────────────────────────

/// Create a new [`CrawlBuilder`] to configure and run a crawl.
pub fn crawler() -> CrawlBuilder {
    CrawlBuilder::default()
}

/// Crawl `root` concurrently over the local disk.
///
/// Must be awaited inside a tokio runtime.
pub async fn crawl(root: impl AsRef<Path>, config: &CrawlConfig) -> CrawlReport {
    crawler().config(config.clone()).run(root).await
}

/// Crawl `root` sequentially over the local disk, blocking the current thread.
///
/// ```rust
/// let report = kwcrawl::crawl_blocking("/definitely/not/here", &Default::default());
///
/// assert!(report.root_failed());
/// assert!(report.error_messages()[0].contains("error accessing root path"));
/// ```
pub fn crawl_blocking(root: impl AsRef<Path>, config: &CrawlConfig) -> CrawlReport {
    crawler().config(config.clone()).run_blocking(root)
}
