//! Outcome of a completed download run.

use std::path::PathBuf;

/// Represents the outcome of one [`Downloader::run`] call.
///
/// A summary is only produced for runs that reach the end of the link
/// list; aborted runs surface an [`Error`] instead.
///
/// [`Downloader::run`]: crate::downloader::Downloader::run
/// [`Error`]: crate::Error
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of resources for which a fetch was attempted.
    attempted: usize,
    /// Files written, one per successfully downloaded resource.
    files: Vec<PathBuf>,
}

impl RunSummary {
    /// Count one resource fetch attempt.
    pub(crate) fn record_attempt(&mut self) {
        self.attempted += 1;
    }

    /// Count one successfully written file.
    pub(crate) fn record_file(&mut self, path: PathBuf) {
        self.files.push(path);
    }

    /// Number of resources for which a fetch was attempted.
    pub fn attempted(&self) -> usize {
        self.attempted
    }

    /// Number of resources downloaded and written to disk.
    pub fn downloaded(&self) -> usize {
        self.files.len()
    }

    /// Number of attempted resources that were skipped.
    pub fn skipped(&self) -> usize {
        self.attempted - self.files.len()
    }

    /// Paths of the files written by the run, in download order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}
