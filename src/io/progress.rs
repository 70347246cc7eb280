//! Progress display for the inner walks of a grid build

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_MIN_LINES};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static LINE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks completed line walks against the number of grid rows
///
/// The bar is created lazily on the first report, once the outer walk has
/// fixed the row count. Grids with fewer than [`PROGRESS_MIN_LINES`] rows
/// never show a bar.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    completed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub const fn new() -> Self {
        Self {
            bar: None,
            completed: 0,
        }
    }

    /// Number of line walks reported so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Record a finished line walk
    pub fn line_complete(&mut self, index: usize, total: usize) {
        self.completed = index + 1;

        if total < PROGRESS_MIN_LINES {
            return;
        }

        let bar = self.bar.get_or_insert_with(|| {
            let pb = ProgressBar::new(total as u64);
            pb.set_style(LINE_STYLE.clone());
            pb.set_message("Walking rows");
            pb
        });
        bar.set_position(self.completed as u64);
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
