//! Core download orchestration.
//!
//! This module contains the main [`Downloader`] struct that drives one
//! run: fetch the page, extract the JPG links, prepare the download
//! folder, then fetch each resource in order and persist the successes.
//! Resource failures are expected and non-fatal; a page failure aborts
//! the run, since there is nothing to extract links from.
//!
//! # Examples
//!
//! ```rust,no_run
//! use imgrab::downloader::DownloaderBuilder;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), imgrab::Error> {
//! let downloader = DownloaderBuilder::new()
//!     .host("localhost")
//!     .port(8000)
//!     .page("gallery.html")
//!     .directory(PathBuf::from("./images"))
//!     .build();
//!
//! let summary = downloader.run().await?;
//! println!(
//!     "{} of {} images downloaded",
//!     summary.downloaded(),
//!     summary.attempted()
//! );
//! # Ok(())
//! # }
//! ```

use super::config::DownloaderConfig;
use super::summary::RunSummary;
use crate::error::{Error, Result};
use crate::extract::extract_jpg_links;
use crate::progress::{Operation, ProgressEvent, RunDisplay};

use std::fmt;
use std::fmt::Debug;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

/// Represents the download controller.
///
/// A downloader can be created via its builder:
///
/// ```rust
/// # fn main() {
/// use imgrab::downloader::DownloaderBuilder;
///
/// let d = DownloaderBuilder::new().host("localhost").build();
/// # }
/// ```
#[derive(Clone)]
pub struct Downloader {
    config: DownloaderConfig,
}

impl Debug for Downloader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Downloader")
            .field("config", &self.config)
            .finish()
    }
}

impl Downloader {
    /// Creates a new Downloader with the given configuration.
    pub(crate) fn new(config: DownloaderConfig) -> Self {
        Self { config }
    }

    /// Gets the host serving the page.
    pub fn host(&self) -> &str {
        &self.config.host
    }

    /// Gets the TCP port on the host.
    pub fn port(&self) -> u16 {
        self.config.port
    }

    /// Gets the path of the HTML page to scan.
    pub fn page(&self) -> &str {
        &self.config.page
    }

    /// Gets the folder where the images are downloaded.
    pub fn directory(&self) -> &PathBuf {
        &self.config.directory
    }

    /// Root URL of the configured endpoint, the base against which
    /// relative image links are resolved.
    fn host_base(&self) -> Result<Url> {
        let base = format!("http://{}:{}/", self.config.host, self.config.port);
        Url::parse(&base).map_err(|e| Error::InvalidUrl(format!("{base:?}: {e}")))
    }

    /// Full URL of the page to scan.
    pub fn page_url(&self) -> Result<Url> {
        let base = self.host_base()?;
        base.join(&self.config.page)
            .map_err(|e| Error::InvalidUrl(format!("{:?}: {e}", self.config.page)))
    }

    /// Run one download: fetch the page, extract the JPG links, clear the
    /// download folder, then fetch and persist each image in order.
    ///
    /// One progress event is emitted per network operation, in fetch
    /// order. Resource-level transport failures and non-2xx statuses are
    /// skipped; everything else aborts the run.
    pub async fn run(&self) -> Result<RunSummary> {
        let base = self.host_base()?;
        let page_url = self.page_url()?;

        debug!("Fetching page {page_url}");
        let page = match self.config.transport.fetch_text(&page_url).await {
            Ok(response) => {
                self.report(ProgressEvent::new(
                    Operation::Page,
                    Some(response.status),
                    response.connection().map(String::from),
                ));
                response
            }
            Err(e) => {
                // The connection never completed: no status to report.
                self.report(ProgressEvent::new(Operation::Page, None, None));
                return Err(e);
            }
        };
        let Some(html) = page.body else {
            return Err(Error::PageUnavailable(page.status));
        };

        let links = extract_jpg_links(&html);
        debug!("Extracted {} jpg link(s)", links.len());

        // Only a successful page fetch may touch the folder: an aborted
        // run leaves a previous run's files in place.
        self.prepare_directory().await?;

        let display = RunDisplay::new(self.config.style.clone(), links.len());
        let mut summary = RunSummary::default();
        for link in &links {
            let Some(url) = resolve(&base, link) else {
                warn!("Skipping unresolvable link {link:?}");
                continue;
            };

            debug!("Fetching image {url}");
            summary.record_attempt();
            match self.config.transport.fetch_binary(&url).await {
                Ok(response) => {
                    let event = ProgressEvent::new(
                        Operation::Image,
                        Some(response.status),
                        response.connection().map(String::from),
                    );
                    display.update(&event);
                    self.report(event);
                    if let Some(bytes) = response.body {
                        summary.record_file(self.write_image(&bytes).await?);
                    }
                }
                Err(e @ Error::Protocol(_)) => {
                    // Systemic breakage, not one bad resource.
                    let event = ProgressEvent::new(Operation::Image, None, None);
                    display.update(&event);
                    self.report(event);
                    return Err(e);
                }
                Err(e) => {
                    let event = ProgressEvent::new(Operation::Image, None, None);
                    display.update(&event);
                    self.report(event);
                    debug!("Skipping {url}: {e}");
                }
            }
        }
        display.finish();

        Ok(summary)
    }

    /// Deliver a progress event to the configured callback.
    fn report(&self, event: ProgressEvent) {
        if let Some(ref callback) = self.config.on_progress {
            callback(&event);
        }
    }

    /// Create the download folder when missing and delete every file
    /// directly inside it (non-recursive).
    async fn prepare_directory(&self) -> Result<()> {
        let dir = &self.config.directory;
        debug!("Preparing download folder {dir:?}");
        fs::create_dir_all(dir).await?;
        let mut entries = fs::read_dir(dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_file() {
                fs::remove_file(entry.path()).await?;
            }
        }
        Ok(())
    }

    /// Write one downloaded image under a fresh unique name.
    async fn write_image(&self, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.config.directory.join(format!("{}.jpg", Uuid::new_v4()));
        debug!("Writing {} bytes to {path:?}", bytes.len());
        fs::write(&path, bytes).await?;
        Ok(path)
    }
}

/// Resolve an extracted link: absolute URIs are used as-is, relative ones
/// are resolved against the page's host.
fn resolve(base: &Url, link: &str) -> Option<Url> {
    match Url::parse(link) {
        Ok(url) => Some(url),
        Err(_) => base.join(link).ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::downloader::DownloaderBuilder;

    #[test]
    fn test_page_url_joins_relative_page() {
        let d = DownloaderBuilder::hidden()
            .host("localhost")
            .port(8000)
            .page("gallery/index.html")
            .build();
        assert_eq!(
            d.page_url().unwrap().as_str(),
            "http://localhost:8000/gallery/index.html"
        );
    }

    #[test]
    fn test_resolve_relative_against_host_root() {
        let base = Url::parse("http://localhost:8000/").unwrap();
        let url = resolve(&base, "pics/a.jpg").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/pics/a.jpg");
    }

    #[test]
    fn test_resolve_absolute_used_as_is() {
        let base = Url::parse("http://localhost:8000/").unwrap();
        let url = resolve(&base, "http://other.host:9000/x.jpg").unwrap();
        assert_eq!(url.as_str(), "http://other.host:9000/x.jpg");
    }
}
