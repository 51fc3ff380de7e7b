//! Utility functions for the CLI.

use indicatif::{ProgressBar, ProgressStyle};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Extension given to decompressed files whose name lacks the suffix.
pub const FALLBACK_EXTENSION: &str = ".out";

/// Create a progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░ ");
    pb.set_style(style);
    pb
}

/// Place `name` in `output_dir`, or next to `input` when no directory is given.
fn place(input: &Path, name: OsString, output_dir: Option<&Path>) -> PathBuf {
    match output_dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}

/// Output path for compressing `input`: its file name plus `suffix`.
pub fn compressed_path(input: &Path, suffix: &str, output_dir: Option<&Path>) -> PathBuf {
    let mut name = input.file_name().map(OsString::from).unwrap_or_default();
    name.push(suffix);
    place(input, name, output_dir)
}

/// Output path for decompressing `input`: `suffix` stripped from its file
/// name, or [`FALLBACK_EXTENSION`] appended when it doesn't carry it.
pub fn decompressed_path(input: &Path, suffix: &str, output_dir: Option<&Path>) -> PathBuf {
    let file_name = input.file_name().map(OsString::from).unwrap_or_default();
    let lossy = file_name.to_string_lossy();

    let name = match lossy.strip_suffix(suffix) {
        Some(stem) if !suffix.is_empty() && !stem.is_empty() => OsString::from(stem),
        _ => {
            let mut name = file_name.clone();
            name.push(FALLBACK_EXTENSION);
            name
        }
    };
    place(input, name, output_dir)
}

/// Compressed size as a percentage of the original.
pub fn percent(compressed: usize, original: usize) -> f64 {
    if original == 0 {
        return 0.0;
    }
    compressed as f64 / original as f64 * 100.0
}
