use indicatif::{ProgressBar, ProgressStyle};

/// Returns a progress bar for `steps` map fetches.
pub fn bar(prefix: String, steps: u64) -> ProgressBar {
    let pb = ProgressBar::new(steps);
    pb.set_prefix(prefix);
    pb.set_style(
        ProgressStyle::with_template("{prefix}...\n[{wide_bar:.green/blue}] {pos}/{len}")
            .expect("incorrect progress bar format string")
            .progress_chars("#>-"),
    );
    pb
}
