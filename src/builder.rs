use std::path::Path;
use std::sync::Arc;

use futures::executor::block_on;

use crate::config::CrawlConfig;
use crate::engine::{run, EngineOptions, Mode};
use crate::fs::{StdFs, TokioFs};
use crate::results::CrawlReport;
use crate::traits::FileSystem;

// ---------------------------------------------------------------------------
// CrawlBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and executing a crawl.
///
/// Created via [`kwcrawl::crawler()`](crate::crawler). Configure with chained
/// builder methods, then call [`run()`](CrawlBuilder::run) from async code or
/// [`run_blocking()`](CrawlBuilder::run_blocking) from anywhere else.
///
/// # Example
///
/// ```rust,ignore
/// let report = kwcrawl::crawler()
///     .keywords(["sop", "runbook"])
///     .max_depth(3)
///     .file_extensions([".md"])
///     .run("docs")
///     .await;
/// ```
#[derive(Default)]
pub struct CrawlBuilder {
    config:     CrawlConfig,
    mode:       Option<Mode>,
    fan_out:    Option<usize>,
    filesystem: Option<Arc<dyn FileSystem>>,
}

impl CrawlBuilder {
    // ── Configuration ─────────────────────────────────────────────────────

    /// Replace the whole configuration, e.g. one loaded with
    /// [`CrawlConfig::load`].
    pub fn config(mut self, config: CrawlConfig) -> Self {
        self.config = config;
        self
    }

    /// Keywords to look for in entry names. Case is ignored.
    ///
    /// Defaults to [`DEFAULT_KEYWORDS`](crate::DEFAULT_KEYWORDS). An empty
    /// list matches nothing.
    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.keywords = Some(keywords.into_iter().map(Into::into).collect());
        self
    }

    /// Deepest directory level to list. `0` lists the root only, `1` the
    /// root and its subdirectories, and so on. Unlimited by default.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = Some(depth);
        self
    }

    /// Report directories whose names match, not just files.
    ///
    /// Directories are always descended into either way.
    pub fn include_directories(mut self, yes: bool) -> Self {
        self.config.include_directories = yes;
        self
    }

    /// Only report files with one of these extensions (`".md"` or `"md"`).
    pub fn file_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.file_extensions = Some(extensions.into_iter().map(Into::into).collect());
        self
    }

    // ── Scheduling ────────────────────────────────────────────────────────

    /// Choose the scheduling mode.
    ///
    /// Defaults to [`Mode::Concurrent`] for [`run()`](Self::run) and
    /// [`Mode::Sequential`] for [`run_blocking()`](Self::run_blocking).
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Shorthand for `.mode(Mode::Sequential)`.
    pub fn sequential(self) -> Self {
        self.mode(Mode::Sequential)
    }

    /// Cap how many entries of one directory are in flight at once in
    /// concurrent mode. Unlimited by default; `0` behaves like `1`.
    ///
    /// The cap is per directory, not global: nested directories each get
    /// their own.
    pub fn fan_out(mut self, width: usize) -> Self {
        self.fan_out = Some(width);
        self
    }

    /// Walk a custom [`FileSystem`] instead of the local disk.
    pub fn filesystem(mut self, fs: impl FileSystem + 'static) -> Self {
        self.filesystem = Some(Arc::new(fs));
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Crawl `root` and return the report.
    ///
    /// Uses [`TokioFs`] unless another filesystem was set, so it must be
    /// awaited inside a tokio runtime.
    pub async fn run(self, root: impl AsRef<Path>) -> CrawlReport {
        let opts = self.into_options(Mode::Concurrent, Arc::new(TokioFs));
        run(root.as_ref(), &opts).await
    }

    /// Crawl `root` on the current thread and return the report.
    ///
    /// Uses [`StdFs`] unless another filesystem was set. A custom filesystem
    /// must not depend on a tokio runtime here, so [`TokioFs`] will not work.
    pub fn run_blocking(self, root: impl AsRef<Path>) -> CrawlReport {
        let opts = self.into_options(Mode::Sequential, Arc::new(StdFs));
        block_on(run(root.as_ref(), &opts))
    }

    fn into_options(self, default_mode: Mode, default_fs: Arc<dyn FileSystem>) -> EngineOptions {
        EngineOptions {
            config:  self.config.resolve(),
            mode:    self.mode.unwrap_or(default_mode),
            fan_out: self.fan_out,
            fs:      self.filesystem.unwrap_or(default_fs),
        }
    }
}
