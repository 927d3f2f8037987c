//! Configuration structures and defaults for the downloader.
//!
//! The configuration names the endpoint (host, port, page path), the
//! download folder, and the ambient pieces of a run: the transport used
//! for fetches, the progress callback, and the progress bar style.
//!
//! # Examples
//!
//! ## Using a progress callback
//!
//! ```rust
//! use imgrab::downloader::ProgressCallback;
//! use imgrab::progress::ProgressEvent;
//!
//! let callback: ProgressCallback = Box::new(|event: &ProgressEvent| {
//!     println!("last operation: {event}");
//! });
//! ```

use crate::http::{RawHttpClient, Transport};
use crate::progress::{ProgressBarOpts, ProgressEvent};

use std::env::current_dir;
use std::path::PathBuf;
use std::sync::Arc;

/// Callback type for progress events, invoked synchronously after every
/// network operation. The callback must not block the orchestration loop.
pub type ProgressCallback = Box<dyn Fn(&ProgressEvent) + Send + Sync>;

/// Configuration structure for the downloader.
#[derive(Clone)]
pub struct DownloaderConfig {
    /// Host serving the page and, by default, its images.
    pub host: String,
    /// TCP port on the host.
    pub port: u16,
    /// Path (and optional query) of the HTML page to scan.
    pub page: String,
    /// Folder where the downloaded images are stored. Treated as
    /// disposable working storage: existing files in it are deleted at
    /// the start of each run.
    pub directory: PathBuf,
    /// Progress bar style for the run.
    pub style: ProgressBarOpts,
    /// Callback for progress events.
    pub on_progress: Option<Arc<ProgressCallback>>,
    /// The transport performing the fetches.
    pub transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for DownloaderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloaderConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("page", &self.page)
            .field("directory", &self.directory)
            .field("style", &self.style)
            .field("on_progress", &self.on_progress.is_some())
            .finish()
    }
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 80,
            page: "/".to_string(),
            directory: current_dir().unwrap_or_default(),
            style: ProgressBarOpts::default(),
            on_progress: None,
            transport: Arc::new(RawHttpClient::new()),
        }
    }
}
