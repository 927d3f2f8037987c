//! Progress bar styling and configuration options.
//!
//! A run renders a single progress bar advanced once per resource attempt.
//! These options control its template and characters, or hide it entirely
//! (the usual choice for tests and non-interactive callers).
//!
//! # Examples
//!
//! ```rust
//! use imgrab::progress::ProgressBarOpts;
//!
//! // Default bar, kept on screen when the run finishes.
//! let opts = ProgressBarOpts::default();
//!
//! // No bar at all.
//! let hidden = ProgressBarOpts::hidden();
//! ```

use indicatif::{ProgressBar, ProgressStyle};

/// Define the options for the run's progress bar.
#[derive(Debug, Clone)]
pub struct ProgressBarOpts {
    /// Progress bar template string.
    template: Option<String>,
    /// Progression characters set.
    ///
    /// There must be at least 3 characters for the following states:
    /// "filled", "current", and "to do".
    progress_chars: Option<String>,
    /// Enable or disable the progress bar.
    pub(crate) enabled: bool,
    /// Clear the progress bar once completed.
    pub(crate) clear: bool,
}

impl Default for ProgressBarOpts {
    fn default() -> Self {
        Self {
            template: Some(ProgressBarOpts::TEMPLATE_BAR_WITH_POSITION.into()),
            progress_chars: Some(ProgressBarOpts::CHARS_FINE.into()),
            enabled: true,
            clear: false,
        }
    }
}

impl ProgressBarOpts {
    /// Template representing the bar, its position, and the last operation.
    ///
    /// `███████████████████████████████████████ 11/12 (99%) GET jpg -> 200`
    pub const TEMPLATE_BAR_WITH_POSITION: &'static str =
        "{bar:40.blue} {pos:>}/{len} ({percent}%) {msg}";
    /// Use fine blocks as progress characters: `"█▉▊▋▌▍▎▏  "`.
    pub const CHARS_FINE: &'static str = "█▉▊▋▌▍▎▏  ";
    /// Use a line as progress characters: `"━╾─"`.
    pub const CHARS_LINE: &'static str = "━╾╴─";

    /// Create a new [`ProgressBarOpts`].
    pub fn new(
        template: Option<String>,
        progress_chars: Option<String>,
        enabled: bool,
        clear: bool,
    ) -> Self {
        Self {
            template,
            progress_chars,
            enabled,
            clear,
        }
    }

    /// Create a [`ProgressStyle`] based on the provided options.
    pub fn to_progress_style(self) -> ProgressStyle {
        let mut style = ProgressStyle::default_bar();
        if let Some(template) = self.template {
            style = style.template(&template).expect("template is valid");
        }
        if let Some(progress_chars) = self.progress_chars {
            style = style.progress_chars(&progress_chars);
        }
        style
    }

    /// Create a [`ProgressBar`] based on the provided options.
    pub fn to_progress_bar(self, len: u64) -> ProgressBar {
        // Return a hidden progress bar if we disabled it.
        if !self.enabled {
            return ProgressBar::hidden();
        }

        let style = self.to_progress_style();
        ProgressBar::new(len).with_style(style)
    }

    /// Set to `true` to clear the progress bar upon completion.
    pub fn set_clear(&mut self, clear: bool) {
        self.clear = clear;
    }

    /// Whether the bar is rendered at all.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Create a new [`ProgressBarOpts`] which hides the progress bar.
    pub fn hidden() -> Self {
        Self {
            enabled: false,
            ..ProgressBarOpts::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_bar_is_hidden() {
        let pb = ProgressBarOpts::hidden().to_progress_bar(10);
        assert!(pb.is_hidden());
    }

    #[test]
    fn test_default_bar_is_enabled() {
        assert!(ProgressBarOpts::default().is_enabled());
    }
}
