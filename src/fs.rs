//! Filesystem adapters for the local disk.

use std::ffi::OsString;
use std::fs::{self, Metadata};
use std::io;
use std::path::Path;

use async_trait::async_trait;

use crate::entry::EntryKind;
use crate::traits::FileSystem;

fn kind_of(metadata: &Metadata) -> EntryKind {
    if metadata.is_dir() {
        EntryKind::Dir
    } else if metadata.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}

/// Blocking adapter over `std::fs`.
///
/// Every future it returns is already complete when first polled, so a
/// crawl over `StdFs` can be driven without a runtime; this is what
/// [`CrawlBuilder::run_blocking`](crate::CrawlBuilder::run_blocking) does.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFs;

#[async_trait]
impl FileSystem for StdFs {
    async fn read_dir(&self, path: &Path) -> io::Result<Vec<OsString>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(path)? {
            names.push(entry?.file_name());
        }
        Ok(names)
    }

    async fn metadata(&self, path: &Path) -> io::Result<EntryKind> {
        fs::metadata(path).map(|m| kind_of(&m))
    }
}

/// Asynchronous adapter over `tokio::fs`.
///
/// Requires a running tokio runtime. Do not combine with
/// [`CrawlBuilder::run_blocking`](crate::CrawlBuilder::run_blocking).
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFs;

#[async_trait]
impl FileSystem for TokioFs {
    async fn read_dir(&self, path: &Path) -> io::Result<Vec<OsString>> {
        let mut entries = tokio::fs::read_dir(path).await?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            names.push(entry.file_name());
        }
        Ok(names)
    }

    async fn metadata(&self, path: &Path) -> io::Result<EntryKind> {
        tokio::fs::metadata(path).await.map(|m| kind_of(&m))
    }
}
