//! Progress display for the watch fetch loop
//!
//! Visual feedback while registry lookups run, using indicatif. Disabled in
//! quiet mode and for non-interactive runs that want clean logs.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for the sequential fetch loop
pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    /// Start a progress bar over a known number of dependencies
    pub fn new(enabled: bool, total: u64) -> Self {
        if !enabled {
            return Self::disabled();
        }
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} checking {msg} [{bar:24.cyan/blue}] {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar: Some(bar) }
    }

    /// A reporter that displays nothing
    pub fn disabled() -> Self {
        Self { bar: None }
    }

    /// Name the dependency currently being checked
    pub fn checking(&self, name: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(name.to_string());
        }
    }

    /// One dependency finished
    pub fn inc(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Remove the bar so report lines print cleanly
    pub fn finish_and_clear(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
