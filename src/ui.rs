// UI module for consistent terminal output with progress bars and styling
//
// Spinners and progress bars draw on stderr and stay hidden when it is not a TTY.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use console::{Term, style};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// Spinner style similar to uv/pnpm
const SPINNER_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Check if stderr is a TTY (for interactive output)
fn is_tty() -> bool {
    Term::stderr().is_term()
}

fn styled(template: &str, fallback: ProgressStyle) -> ProgressStyle {
    ProgressStyle::with_template(template).unwrap_or(fallback)
}

fn hide_unless_tty(pb: ProgressBar) -> ProgressBar {
    if !is_tty() {
        pb.set_draw_target(ProgressDrawTarget::hidden());
    }
    pb
}

/// Create a styled spinner for network round trips
pub fn spinner(message: &str) -> ProgressBar {
    let pb = hide_unless_tty(ProgressBar::new_spinner());
    pb.set_style(
        styled("{spinner:.cyan} {msg}", ProgressStyle::default_spinner()).tick_chars(SPINNER_CHARS),
    );
    pb.set_message(message.to_string());

    if is_tty() {
        pb.enable_steady_tick(Duration::from_millis(80));
    }
    pb
}

/// Create a progress bar for downloads with a known size
pub fn download_bar(total_size: u64) -> ProgressBar {
    let pb = hide_unless_tty(ProgressBar::new(total_size));
    pb.set_style(
        styled(
            "{spinner:.cyan} {msg} [{bar:25.cyan/dim}] {bytes}/{total_bytes} ({bytes_per_sec})",
            ProgressStyle::default_bar(),
        )
        .tick_chars(SPINNER_CHARS)
        .progress_chars("━━╺"),
    );
    pb
}

/// Create an indeterminate progress bar (when size is unknown)
pub fn download_bar_indeterminate() -> ProgressBar {
    let pb = hide_unless_tty(ProgressBar::new_spinner());
    pb.set_style(
        styled(
            "{spinner:.cyan} {msg} {bytes} ({bytes_per_sec})",
            ProgressStyle::default_spinner(),
        )
        .tick_chars(SPINNER_CHARS),
    );
    if is_tty() {
        pb.enable_steady_tick(Duration::from_millis(80));
    }
    pb
}

/// Print a success message with checkmark
pub fn success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red(), message);
}

/// Clear a progress bar without leaving a message
pub fn clear_bar(pb: &ProgressBar) {
    pb.finish_and_clear();
}
