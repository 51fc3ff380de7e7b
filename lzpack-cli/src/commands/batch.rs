//! Parallel file-to-file processing shared by compress and decompress.

use crate::utils::{create_progress_bar, percent};
use log::{debug, error, info};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Options common to every batch command.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions<'a> {
    /// Directory receiving outputs; each output lands next to its input if `None`.
    pub output_dir: Option<&'a Path>,
    /// Overwrite existing outputs.
    pub force: bool,
    /// Show a progress bar.
    pub progress: bool,
}

/// A file that was processed successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub input_len: usize,
    pub output_len: usize,
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub succeeded: Vec<FileReport>,
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    /// Log every result and turn failures into an error.
    pub fn finish(&self, verb: &str) -> Result<(), Box<dyn std::error::Error>> {
        for report in &self.succeeded {
            info!(
                "{} -> {} ({} -> {} bytes, {:.1}%)",
                report.input.display(),
                report.output.display(),
                report.input_len,
                report.output_len,
                percent(report.output_len, report.input_len)
            );
        }
        for (path, err) in &self.failed {
            error!("{}: {}", path.display(), err);
        }

        let input_total: usize = self.succeeded.iter().map(|r| r.input_len).sum();
        let output_total: usize = self.succeeded.iter().map(|r| r.output_len).sum();
        println!(
            "{} {} of {} files ({} -> {} bytes)",
            verb,
            self.succeeded.len(),
            self.total(),
            input_total,
            output_total
        );

        if self.failed.is_empty() {
            Ok(())
        } else {
            Err(format!("{} of {} files failed", self.failed.len(), self.total()).into())
        }
    }
}

/// Apply `transform` to every file in parallel, writing each result to the
/// path `target` derives from the input.
pub fn run_batch<T, F>(
    files: &[PathBuf],
    options: &BatchOptions,
    target: T,
    transform: F,
) -> Result<BatchSummary, Box<dyn std::error::Error>>
where
    T: Fn(&Path) -> PathBuf + Sync,
    F: Fn(&[u8]) -> Result<Vec<u8>, String> + Sync,
{
    if let Some(dir) = options.output_dir {
        fs::create_dir_all(dir)?;
    }

    debug!(
        "processing {} files on {} threads",
        files.len(),
        rayon::current_num_threads()
    );

    let pb = create_progress_bar(files.len() as u64, options.progress);
    let results: Vec<_> = files
        .par_iter()
        .map(|input| {
            let output = target(input);
            let result = process_file(input, &output, options.force, &transform);
            pb.inc(1);
            (input, output, result)
        })
        .collect();
    pb.finish_and_clear();

    let mut summary = BatchSummary::default();
    for (input, output, result) in results {
        match result {
            Ok((input_len, output_len)) => summary.succeeded.push(FileReport {
                input: input.clone(),
                output,
                input_len,
                output_len,
            }),
            Err(err) => summary.failed.push((input.clone(), err)),
        }
    }
    Ok(summary)
}

fn process_file<F>(input: &Path, output: &Path, force: bool, transform: &F) -> Result<(usize, usize), String>
where
    F: Fn(&[u8]) -> Result<Vec<u8>, String>,
{
    if !force && output.exists() {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            output.display()
        ));
    }

    let data = fs::read(input).map_err(|e| e.to_string())?;
    let processed = transform(&data)?;
    fs::write(output, &processed).map_err(|e| format!("{}: {}", output.display(), e))?;
    Ok((data.len(), processed.len()))
}
