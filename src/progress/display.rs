//! Rendering of a run's progress bar.
//!
//! [`RunDisplay`] owns the single bar for one download run: its length is
//! the number of extracted links, it advances once per resource attempt
//! (success or failure), and its message shows the last reported
//! operation. This rendering is purely cosmetic; the contractual progress
//! channel is the callback configured on the downloader.

use crate::progress::event::ProgressEvent;
use crate::progress::style::ProgressBarOpts;
use indicatif::ProgressBar;

/// Progress bar for one download run.
pub struct RunDisplay {
    bar: ProgressBar,
    clear: bool,
}

impl RunDisplay {
    /// Create the display for a run attempting `total` resources.
    pub fn new(opts: ProgressBarOpts, total: usize) -> Self {
        let clear = opts.clear;
        let bar = opts.to_progress_bar(total as u64);
        bar.tick();
        Self { bar, clear }
    }

    /// Show `event` as the bar message; advance the bar for resource
    /// attempts.
    pub fn update(&self, event: &ProgressEvent) {
        self.bar.set_message(event.to_string());
        if matches!(event.operation, crate::progress::Operation::Image) {
            self.bar.inc(1);
        }
    }

    /// Finish the bar, clearing or keeping it based on configuration.
    pub fn finish(self) {
        if self.clear {
            self.bar.finish_and_clear();
        } else {
            self.bar.finish();
        }
    }
}
