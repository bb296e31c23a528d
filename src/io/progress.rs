//! Terminal progress for image loading and the training and synthesis stages

use crate::io::configuration::{PROGRESS_BAR_WIDTH, SPINNER_TICK_MS};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static LOADING_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Images: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg} [{elapsed}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Coordinates progress display for one training and synthesis run
///
/// Shows a bar while sample images are decoded, then a spinner per stage.
/// Completed stages leave a status line behind.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    loading_bar: Option<ProgressBar>,
    stage_bar: Option<ProgressBar>,
    completed_stages: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            loading_bar: None,
            stage_bar: None,
            completed_stages: 0,
        }
    }

    /// Show the image loading bar for `image_count` images
    pub fn start_loading(&mut self, image_count: usize) {
        let bar = ProgressBar::new(image_count as u64);
        bar.set_style(LOADING_STYLE.clone());
        self.loading_bar = Some(self.multi_progress.add(bar));
    }

    /// Report that the image at `path` is being decoded
    pub fn loading_image(&self, path: &Path) {
        if let Some(ref bar) = self.loading_bar {
            let display_name = path.file_name().unwrap_or_default().to_string_lossy();
            bar.set_message(display_name.into_owned());
        }
    }

    /// Advance the loading bar by one image
    pub fn image_loaded(&self) {
        if let Some(ref bar) = self.loading_bar {
            bar.inc(1);
        }
    }

    /// Close the loading bar with a summary
    pub fn finish_loading(&mut self) {
        if let Some(bar) = self.loading_bar.take() {
            bar.finish_with_message("Images subscaled");
        }
    }

    /// Start a spinner for a pipeline stage
    pub fn start_stage(&mut self, message: &str) {
        self.finish_stage(None);

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(STAGE_STYLE.clone());
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        self.stage_bar = Some(self.multi_progress.add(spinner));
    }

    /// Finish the running stage, optionally replacing its message
    pub fn finish_stage(&mut self, message: Option<String>) {
        if let Some(spinner) = self.stage_bar.take() {
            match message {
                Some(message) => spinner.finish_with_message(message),
                None => spinner.finish(),
            }
            self.completed_stages += 1;
        }
    }

    /// Number of stages finished so far
    pub const fn completed_stages(&self) -> usize {
        self.completed_stages
    }

    /// Print a status line above the progress bars
    pub fn status(&self, message: &str) {
        let _ = self.multi_progress.println(message);
    }

    /// Clean up all progress displays
    pub fn finish(&mut self) {
        self.finish_loading();
        self.finish_stage(None);
    }
}
