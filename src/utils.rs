/// Small helpers shared by the batch loop and the report
use crate::constants::PROGRESS_BAR_TEMPLATE;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Size in kilobytes (bytes / 1024) with one decimal, e.g. `"10.0KB"`.
pub fn format_kb(bytes: u64) -> String {
    format!("{:.1}KB", bytes as f64 / 1024.0)
}

/// Percentage saved going from `original_size` to `new_size`.
///
/// Positive means the output is smaller, negative means it grew. A zero-byte
/// original yields 0.
pub fn calculate_savings(original_size: u64, new_size: u64) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    ((original_size as f64 - new_size as f64) / original_size as f64) * 100.0
}

/// Progress bar over `len` files. Hidden in quiet mode and when stderr is not a terminal.
pub fn create_progress_bar(len: u64, quiet: bool) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if quiet {
        pb.set_draw_target(ProgressDrawTarget::hidden());
    }
    let style = ProgressStyle::default_bar()
        .template(PROGRESS_BAR_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");
    pb.set_style(style);
    pb
}
