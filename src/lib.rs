//! Imgrab downloads the JPG images referenced by a web page, using a
//! hand-rolled HTTP/1.1 client built directly on a TCP byte stream.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use imgrab::{DownloaderBuilder, Error};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let downloader = DownloaderBuilder::new()
//!     .host("localhost")
//!     .port(8000)
//!     .page("gallery.html")
//!     .directory(PathBuf::from("images"))
//!     .on_progress(|event| println!("{event}"))
//!     .build();
//! let summary = downloader.run().await?;
//! println!("{} image(s) downloaded", summary.downloaded());
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`http`] - The raw protocol client: request framing, fully buffered
//!   response parsing, and the [`Transport`] seam for swapping transports
//! - [`extract`] - JPG link extraction from HTML
//! - [`downloader`] - The [`Downloader`] and [`DownloaderBuilder`]
//!   orchestrating one run
//! - [`progress`] - Progress events and bar rendering
//! - [`error`] - Centralized error handling with the [`Error`] enum

pub mod downloader;
pub mod error;
pub mod extract;
pub mod http;
pub mod progress;

pub use downloader::{Downloader, DownloaderBuilder, ProgressCallback, RunSummary};
pub use error::{Error, Result};
pub use extract::extract_jpg_links;
pub use http::{
    parse_binary_response, parse_text_response, Headers, RawHttpClient, Response, StatusLine,
    Transport,
};
pub use progress::{Operation, ProgressBarOpts, ProgressEvent};
