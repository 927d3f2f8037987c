//! Builder pattern implementation for creating Downloader instances.
//!
//! # Examples
//!
//! ## Basic builder usage
//!
//! ```rust
//! use imgrab::downloader::DownloaderBuilder;
//! use std::path::PathBuf;
//!
//! let downloader = DownloaderBuilder::new()
//!     .host("localhost")
//!     .port(8000)
//!     .page("index.html")
//!     .directory(PathBuf::from("./images"))
//!     .build();
//! ```
//!
//! ## With a progress callback
//!
//! ```rust
//! use imgrab::downloader::DownloaderBuilder;
//!
//! let downloader = DownloaderBuilder::new()
//!     .host("localhost")
//!     .on_progress(|event| {
//!         println!("last operation: {event}");
//!     })
//!     .build();
//! ```
//!
//! ## Hidden progress bar
//!
//! ```rust
//! use imgrab::downloader::DownloaderBuilder;
//!
//! // Create a downloader with no visible progress bar.
//! let downloader = DownloaderBuilder::hidden().build();
//! ```

use super::{config::DownloaderConfig, downloader::Downloader};
use crate::http::{RawHttpClient, Transport};
use crate::progress::{ProgressBarOpts, ProgressEvent};

use std::path::PathBuf;
use std::sync::Arc;

/// A builder used to create a [`Downloader`].
///
/// ```rust
/// # fn main() {
/// use imgrab::downloader::DownloaderBuilder;
///
/// let d = DownloaderBuilder::new().host("localhost").port(8000).build();
/// # }
/// ```
#[derive(Default)]
pub struct DownloaderBuilder {
    config: DownloaderConfig,
    user_agent: Option<String>,
    transport: Option<Arc<dyn Transport>>,
}

impl DownloaderBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        DownloaderBuilder::default()
    }

    /// Convenience function to hide the progress bar.
    pub fn hidden() -> Self {
        let mut builder = DownloaderBuilder::default();
        builder.config.style = ProgressBarOpts::hidden();
        builder
    }

    /// Sets the host serving the page.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Sets the TCP port on the host.
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Sets the path (and optional query) of the HTML page to scan.
    pub fn page(mut self, page: impl Into<String>) -> Self {
        self.config.page = page.into();
        self
    }

    /// Sets the folder where to store the downloaded images.
    ///
    /// The folder is treated as disposable working storage: it is created
    /// when missing and any files directly inside it are deleted at the
    /// start of each run.
    pub fn directory(mut self, directory: PathBuf) -> Self {
        self.config.directory = directory;
        self
    }

    /// Sets the `User-Agent` the default raw client identifies itself
    /// with. Ignored when a custom transport is supplied.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets the progress bar style.
    pub fn style(mut self, style: ProgressBarOpts) -> Self {
        self.config.style = style;
        self
    }

    /// Set the callback invoked after every network operation.
    ///
    /// The callback runs synchronously on the orchestration loop, in
    /// fetch order: one event for the page, then one per resource
    /// attempt.
    ///
    /// # Example
    ///
    /// ```rust
    /// use imgrab::downloader::DownloaderBuilder;
    ///
    /// let downloader = DownloaderBuilder::new()
    ///     .on_progress(|event| match event.status {
    ///         Some(code) => println!("{} finished with status {code}", event.operation),
    ///         None => println!("{} never completed", event.operation),
    ///     })
    ///     .build();
    /// ```
    pub fn on_progress<F>(mut self, callback: F) -> Self
    where
        F: Fn(&ProgressEvent) + Send + Sync + 'static,
    {
        self.config.on_progress = Some(Arc::new(Box::new(callback)));
        self
    }

    /// Swap the transport used for fetches.
    ///
    /// The default is [`RawHttpClient`]; anything implementing
    /// [`Transport`] can stand in without touching the orchestration
    /// logic.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Create the [`Downloader`] with the specified options.
    pub fn build(mut self) -> Downloader {
        self.config.transport = match (self.transport, self.user_agent) {
            (Some(transport), _) => transport,
            (None, Some(ua)) => Arc::new(RawHttpClient::with_user_agent(ua)),
            (None, None) => Arc::new(RawHttpClient::new()),
        };
        Downloader::new(self.config)
    }
}
