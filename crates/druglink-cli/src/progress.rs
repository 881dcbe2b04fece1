//! Terminal progress bar for the matching stage.

use std::io::{self, IsTerminal};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use druglink_core::MatchProgress;

const MATCH_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} records ({msg})";

/// Progress bar created on the first report, once the record count is known.
pub struct MatchProgressBar {
    enabled: bool,
    bar: Option<ProgressBar>,
}

impl MatchProgressBar {
    /// Stays hidden when disabled or when stderr is not a terminal.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: enabled && io::stderr().is_terminal(),
            bar: None,
        }
    }

    pub fn update(&mut self, progress: MatchProgress) {
        if !self.enabled || progress.total == 0 {
            return;
        }
        let bar = self
            .bar
            .get_or_insert_with(|| new_bar(progress.total as u64));
        bar.set_position(progress.processed as u64);
        if progress.is_done() {
            bar.finish_and_clear();
        }
    }

    pub fn finish(&self) {
        if let Some(bar) = &self.bar
            && !bar.is_finished()
        {
            bar.finish_and_clear();
        }
    }
}

fn new_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    match ProgressStyle::default_bar().template(MATCH_TEMPLATE) {
        Ok(style) => bar.set_style(style.progress_chars("#>-")),
        Err(error) => debug!(%error, "invalid progress template, using default style"),
    }
    bar.set_message("matching drugs");
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_is_valid() {
        assert!(ProgressStyle::default_bar().template(MATCH_TEMPLATE).is_ok());
    }

    #[test]
    fn disabled_bar_is_never_created() {
        let mut progress = MatchProgressBar::new(false);
        progress.update(MatchProgress {
            processed: 1,
            total: 2,
        });
        assert!(progress.bar.is_none());
        progress.finish();
    }
}
