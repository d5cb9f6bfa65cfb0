//! Progress display for dependency date resolution
//!
//! A single bar on stderr, advanced once per dependency. The prefix keeps a
//! running count of skipped dependencies.

use crate::domain::DependencyRecord;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TEMPLATE: &str = "{spinner:.cyan} {prefix:.yellow} {wide_msg} [{bar:30.cyan/blue}] {pos}/{len}";

/// Progress of one aggregation run
pub struct ResolveProgress {
    bar: ProgressBar,
    skipped: u64,
}

impl ResolveProgress {
    /// Create a bar for `total` dependencies; a hidden bar when disabled
    pub fn new(total: u64, enabled: bool) -> Self {
        let bar = if enabled {
            let bar = ProgressBar::new(total);
            if let Ok(style) = ProgressStyle::default_bar().template(TEMPLATE) {
                bar.set_style(style.progress_chars("█▓▒░"));
            }
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        } else {
            ProgressBar::hidden()
        };

        Self { bar, skipped: 0 }
    }

    /// Show the dependency currently being resolved
    pub fn begin(&self, record: &DependencyRecord) {
        self.bar.set_message(record.package_identity.clone());
    }

    /// Count a dependency that produced a date
    pub fn resolved(&self) {
        self.bar.inc(1);
    }

    /// Count a dependency that was skipped
    pub fn skipped(&mut self) {
        self.skipped += 1;
        self.bar.set_prefix(format!("{} skipped", self.skipped));
        self.bar.inc(1);
    }

    /// Run `f` with the bar cleared, so log lines do not interleave with it
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.bar.suspend(f)
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
