//! Compress command implementation.

use super::batch::{BatchOptions, run_batch};
use crate::utils::compressed_path;
use log::debug;
use lzpack_core::traits::Codec;
use lzpack_lzss::{Lzss, LzssConfig, MatchStrategy};
use std::path::PathBuf;

/// Largest input the 32-bit length header can describe.
const MAX_INPUT_LEN: u64 = u32::MAX as u64;

pub fn cmd_compress(
    files: &[PathBuf],
    options: &BatchOptions,
    strategy: MatchStrategy,
    suffix: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if suffix.is_empty() {
        return Err("suffix must not be empty".into());
    }

    let codec = Lzss::new(LzssConfig::new(strategy));
    let codec: &dyn Codec = &codec;
    debug!("{} codec, {} strategy", codec.name(), strategy);

    let summary = run_batch(
        files,
        options,
        |input| compressed_path(input, suffix, options.output_dir),
        |data| {
            if data.len() as u64 > MAX_INPUT_LEN {
                return Err(format!(
                    "input is {} bytes, the format holds at most {}",
                    data.len(),
                    MAX_INPUT_LEN
                ));
            }
            Ok(codec.compress(data))
        },
    )?;
    summary.finish("Compressed")
}
