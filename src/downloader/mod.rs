//! Downloader module containing the orchestration logic, builder pattern,
//! and configuration.
//!
//! This module is organized into four components:
//!
//! - `downloader` - the [`Downloader`] driving one run: fetch page,
//!   extract links, clear the folder, fetch each image in order
//! - `builder` - [`DownloaderBuilder`] for flexible configuration
//! - `config` - configuration structure and the progress callback type
//! - `summary` - [`RunSummary`], the outcome of a completed run
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```rust,no_run
//! use imgrab::downloader::DownloaderBuilder;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), imgrab::Error> {
//! let downloader = DownloaderBuilder::new()
//!     .host("localhost")
//!     .port(8000)
//!     .page("index.html")
//!     .directory(PathBuf::from("./images"))
//!     .build();
//!
//! let summary = downloader.run().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Advanced configuration
//!
//! ```rust
//! use imgrab::downloader::DownloaderBuilder;
//! use imgrab::progress::ProgressBarOpts;
//!
//! let downloader = DownloaderBuilder::new()
//!     .host("localhost")
//!     .user_agent("my-scraper/1.0")
//!     .style(ProgressBarOpts::hidden())
//!     .on_progress(|event| println!("{event}"))
//!     .build();
//! ```

pub mod builder;
pub mod config;
pub mod downloader;
pub mod summary;

pub use builder::DownloaderBuilder;
pub use config::{DownloaderConfig, ProgressCallback};
pub use downloader::Downloader;
pub use summary::RunSummary;
