//! Progress module containing the progress event shape and bar rendering.
//!
//! This module is organized into three components:
//!
//! - `event` - [`ProgressEvent`] and [`Operation`], the shape delivered to
//!   the caller's progress callback after every network operation
//! - `style` - progress bar styling options
//! - `display` - the per-run progress bar fed from the same events
//!
//! # Examples
//!
//! ## Observing progress events
//!
//! ```rust
//! use imgrab::DownloaderBuilder;
//!
//! let downloader = DownloaderBuilder::new()
//!     .on_progress(|event| println!("{event}"))
//!     .build();
//! ```
//!
//! ## Hiding the progress bar
//!
//! ```rust
//! use imgrab::{DownloaderBuilder, ProgressBarOpts};
//!
//! let downloader = DownloaderBuilder::new()
//!     .style(ProgressBarOpts::hidden())
//!     .build();
//! ```

pub(crate) mod display;
pub mod event;
pub(crate) mod style;

pub use display::RunDisplay;
pub use event::{Operation, ProgressEvent};
pub use style::ProgressBarOpts;
