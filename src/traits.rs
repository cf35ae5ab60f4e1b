use std::ffi::OsString;
use std::io;
use std::path::Path;

use async_trait::async_trait;

use crate::entry::EntryKind;

/// The filesystem capability the crawl engine walks.
///
/// The engine is written once against this trait and runs over either
/// adapter shipped with the crate ([`StdFs`](crate::StdFs) for blocking
/// walks and [`TokioFs`](crate::TokioFs) for concurrent ones) or over any
/// custom implementation (in-memory trees, remote mounts, fault injection).
///
/// # Object Safety
///
/// `FileSystem` is object-safe. The builder stores it as
/// `Arc<dyn FileSystem>`, so methods are declared through `async_trait` and
/// return boxed futures.
///
/// # Thread Safety
///
/// `Send + Sync` are required: concurrent crawls poll lookups for many
/// entries at once, possibly from a multi-threaded runtime.
///
/// # Errors
///
/// Return the underlying [`io::Error`]; its message is recorded verbatim in
/// [`CrawlReport::errors`](crate::CrawlReport::errors). Errors never abort the
/// crawl past the root.
///
/// # Example
///
/// ```rust
/// use std::ffi::OsString;
/// use std::io;
/// use std::path::Path;
/// use kwcrawl::{async_trait, EntryKind, FileSystem};
///
/// /// A root directory holding exactly one file.
/// struct OneFile;
///
/// #[async_trait]
/// impl FileSystem for OneFile {
///     async fn read_dir(&self, _path: &Path) -> io::Result<Vec<OsString>> {
///         Ok(vec![OsString::from("sop.md")])
///     }
///
///     async fn metadata(&self, path: &Path) -> io::Result<EntryKind> {
///         Ok(if path.ends_with("sop.md") { EntryKind::File } else { EntryKind::Dir })
///     }
/// }
///
/// let report = kwcrawl::crawler().filesystem(OneFile).run_blocking("root");
/// assert_eq!(report.files.len(), 1);
/// ```
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// List the bare names of the entries in `path`, in listing order.
    ///
    /// Names are returned as the OS reports them; they are joined back onto
    /// `path` for the metadata lookup, so they must not be re-encoded.
    async fn read_dir(&self, path: &Path) -> io::Result<Vec<OsString>>;

    /// Look up what `path` is, following symlinks.
    async fn metadata(&self, path: &Path) -> io::Result<EntryKind>;
}
