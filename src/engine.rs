use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::future::{self, BoxFuture, FutureExt};
use futures::stream::{self, StreamExt};
use tracing::{debug, debug_span, info, warn, Instrument};

use crate::config::ResolvedConfig;
use crate::entry::{EntryKind, MatchedEntry};
use crate::error::CrawlError;
use crate::keywords::match_keywords;
use crate::results::CrawlReport;
use crate::traits::FileSystem;

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// How entries within one directory are scheduled.
///
/// Both modes run the same per-entry logic and merge results in listing
/// order, so they produce the same report for the same tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Start every entry of a directory (lookups and descents) at once, then
    /// wait for all of them.
    Concurrent,

    /// Finish each entry, subtree included, before starting the next.
    Sequential,
}

// ---------------------------------------------------------------------------
// Engine options
// ---------------------------------------------------------------------------

/// Internal options passed from the builder to `run()`.
pub(crate) struct EngineOptions {
    pub config:  ResolvedConfig,
    pub mode:    Mode,
    pub fan_out: Option<usize>,
    pub fs:      Arc<dyn FileSystem>,
}

// ---------------------------------------------------------------------------
// run()
// ---------------------------------------------------------------------------

/// Crawl `root` with the given options.
///
/// Never fails: every error is recorded in the returned report.
pub(crate) async fn run(root: &Path, opts: &EngineOptions) -> CrawlReport {
    let span = debug_span!("crawl", root = %root.display(), mode = ?opts.mode);

    async {
        match opts.fs.metadata(root).await {
            Err(source) => {
                let err = CrawlError::RootAccess { path: root.to_path_buf(), source };
                warn!(error = %err, "crawl aborted");
                return CrawlReport::root_failure(err);
            }
            Ok(kind) if !kind.is_dir() => {
                let err = CrawlError::NotADirectory(root.to_path_buf());
                warn!(error = %err, "crawl aborted");
                return CrawlReport::root_failure(err);
            }
            Ok(_) => {}
        }

        let report = visit(opts, root.to_path_buf(), 0).await;

        info!(
            matches     = report.files.len(),
            scanned     = report.total_scanned,
            directories = report.directories_scanned,
            errors      = report.errors.len(),
            "crawl finished"
        );
        report
    }
    .instrument(span)
    .await
}

// ---------------------------------------------------------------------------
// Directory visit
// ---------------------------------------------------------------------------

/// List `dir` and process its entries. Boxed because it recurses through
/// [`process_entry`].
fn visit(opts: &EngineOptions, dir: PathBuf, depth: usize) -> BoxFuture<'_, CrawlReport> {
    async move {
        let mut report = CrawlReport::default();

        if !opts.config.within_depth(depth) {
            return report;
        }

        let names = match opts.fs.read_dir(&dir).await {
            Ok(names) => names,
            Err(source) => {
                let err = CrawlError::ReadDir { path: dir, source };
                warn!(error = %err, "skipping subtree");
                report.errors.push(err);
                return report;
            }
        };
        report.directories_scanned += 1;
        debug!(path = %dir.display(), depth, entries = names.len(), "listed directory");

        // Futures are lazy: nothing is looked up until they are polled below.
        let tasks: Vec<_> = names
            .into_iter()
            .map(|name| process_entry(opts, &dir, name, depth))
            .collect();

        // Outcomes come back in listing order whichever way they are driven.
        let outcomes: Vec<CrawlReport> = match (opts.mode, opts.fan_out) {
            (Mode::Sequential, _) => {
                let mut outcomes = Vec::new();
                for task in tasks {
                    outcomes.push(task.await);
                }
                outcomes
            }
            (Mode::Concurrent, None)        => future::join_all(tasks).await,
            (Mode::Concurrent, Some(width)) => {
                stream::iter(tasks).buffered(width.max(1)).collect().await
            }
        };

        for outcome in outcomes {
            report.merge(outcome);
        }
        report
    }
    .boxed()
}

// ---------------------------------------------------------------------------
// Per-entry processing
// ---------------------------------------------------------------------------

/// Inspect one entry of a directory at `depth`, descending if it is a directory.
async fn process_entry(
    opts:    &EngineOptions,
    parent:  &Path,
    os_name: OsString,
    depth:   usize,
) -> CrawlReport {
    // The raw name locates the entry; the lossy one is only for matching and reporting.
    let path = parent.join(&os_name);
    let name = os_name.to_string_lossy().into_owned();
    let mut report = CrawlReport::default();

    let kind = match opts.fs.metadata(&path).await {
        Ok(kind) => kind,
        Err(source) => {
            let err = CrawlError::Entry { path, source };
            warn!(error = %err, "skipping entry");
            report.errors.push(err);
            return report;
        }
    };
    report.total_scanned += 1;

    match kind {
        EntryKind::Dir => {
            if opts.config.include_directories {
                let matched = match_keywords(&name, &opts.config.keywords);
                if !matched.is_empty() {
                    report.files.push(MatchedEntry::directory(path.clone(), name, matched));
                }
            }
            report.merge(visit(opts, path, depth + 1).await);
        }
        EntryKind::File => {
            let matched = match_keywords(&name, &opts.config.keywords);
            if !matched.is_empty() {
                let entry = MatchedEntry::file(path, name, matched);
                if opts.config.allows_extension(entry.extension.as_deref()) {
                    report.files.push(entry);
                }
            }
        }
        EntryKind::Other => {}
    }

    report
}
