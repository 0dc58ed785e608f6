//! Progress reporting for index builds.
//!
//! [`Progress`] is the only handle build code sees. With the `progress`
//! feature it drives an indicatif spinner or bar on stderr; without it every
//! method does nothing.

#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};
#[cfg(feature = "progress")]
use std::time::Duration;

pub struct Progress {
    #[cfg(feature = "progress")]
    bar: Option<ProgressBar>,
}

#[cfg(feature = "progress")]
impl Progress {
    /// Handle that draws nothing
    pub fn hidden() -> Self {
        Self { bar: None }
    }

    /// Spinner for work of unknown length, such as counting candidate files
    pub fn spinner(message: &'static str) -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(80));
        Self { bar: Some(spinner) }
    }

    /// Bar advanced once per attempted file
    pub fn bar(total: u64, message: &'static str) -> Self {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░  "),
        );
        bar.set_message(message);
        Self { bar: Some(bar) }
    }

    pub fn inc(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    pub fn finish(&self, message: String) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message(message);
        }
    }

    #[cfg(test)]
    pub(crate) fn is_hidden(&self) -> bool {
        self.bar.is_none()
    }
}

#[cfg(not(feature = "progress"))]
impl Progress {
    pub fn hidden() -> Self {
        Self {}
    }

    pub fn spinner(_message: &'static str) -> Self {
        Self {}
    }

    pub fn bar(_total: u64, _message: &'static str) -> Self {
        Self {}
    }

    pub fn inc(&self) {}

    pub fn finish(&self, _message: String) {}

    #[cfg(test)]
    pub(crate) fn is_hidden(&self) -> bool {
        true
    }
}
