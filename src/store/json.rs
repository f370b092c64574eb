//! JSON file report store

use crate::error::{Error, Result};
use crate::store::ReportStore;
use crate::types::{Report, ReportId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fs4::fs_std::FileExt;
use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Report store backed by a single JSON array file
///
/// Writers hold an exclusive advisory lock on a sibling `.lock` file for the
/// whole load-modify-save, so separate processes sharing one store never lose
/// each other's updates. New contents go to a uniquely named temp file in the
/// same directory which is then renamed over the original; readers always see
/// a complete file and take no lock.
pub struct JsonReportStore {
    path: PathBuf,
}

impl JsonReportStore {
    /// Open a store at `path` (the file need not exist yet)
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Count reports as `(total, pending)`
    pub async fn count_reports(&self) -> Result<(usize, usize)> {
        let reports = self.load().await?;
        let pending = reports.iter().filter(|r| r.is_pending()).count();
        Ok((reports.len(), pending))
    }

    /// Append reports to the store
    #[cfg(test)]
    pub(crate) async fn insert_reports(&self, new_reports: Vec<Report>) -> Result<()> {
        self.update(move |reports| reports.extend(new_reports)).await
    }

    async fn load(&self) -> Result<Vec<Report>> {
        decode(&self.path, tokio::fs::read(&self.path).await)
    }

    /// Apply `modify` to the stored reports under the writer lock
    async fn update<F>(&self, modify: F) -> Result<()>
    where
        F: FnOnce(&mut Vec<Report>) + Send + 'static,
    {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || update_locked(&path, modify))
            .await
            .map_err(|e| Error::Storage(format!("store update did not complete: {e}")))?
    }
}

fn decode(path: &Path, read: io::Result<Vec<u8>>) -> Result<Vec<Report>> {
    match read {
        Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Vec::new()),
        Ok(bytes) => serde_json::from_slice(&bytes)
            .map_err(|e| Error::Storage(format!("cannot parse {}: {e}", path.display()))),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}

fn lock_path(path: &Path) -> PathBuf {
    let mut lock = path.as_os_str().to_owned();
    lock.push(".lock");
    PathBuf::from(lock)
}

fn update_locked<F>(path: &Path, modify: F) -> Result<()>
where
    F: FnOnce(&mut Vec<Report>),
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    // The lock file is left in place; removing it would let a waiter lock an
    // unlinked inode while a newcomer locks a fresh one.
    let lock = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(lock_path(path))?;
    lock.lock_exclusive()?;

    let mut reports = decode(path, fs::read(path))?;
    modify(&mut reports);

    let mut tmp = NamedTempFile::new_in(dir)?;
    serde_json::to_writer(&mut tmp, &reports)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    // Released when `lock` is dropped
    Ok(())
}

#[async_trait]
impl ReportStore for JsonReportStore {
    async fn fetch_pending_reports(&self) -> Result<Vec<Report>> {
        let reports = self.load().await?;
        Ok(reports.into_iter().filter(Report::is_pending).collect())
    }

    async fn mark_uploaded(&self, ids: &[ReportId], uploaded_at: DateTime<Utc>) -> Result<()> {
        let ids: HashSet<ReportId> = ids.iter().copied().collect();
        let path = self.path.clone();

        self.update(move |reports| {
            let mut marked = 0usize;
            for report in reports.iter_mut().filter(|r| ids.contains(&r.id)) {
                report.uploaded = true;
                report.uploaded_at = Some(uploaded_at);
                marked += 1;
            }
            debug!("Marking {} reports uploaded in {}", marked, path.display());
        })
        .await
    }
}
