//! Decompress command implementation.

use super::batch::{BatchOptions, run_batch};
use crate::utils::decompressed_path;
use lzpack_core::traits::Codec;
use lzpack_lzss::Lzss;
use std::path::PathBuf;

pub fn cmd_decompress(
    files: &[PathBuf],
    options: &BatchOptions,
    suffix: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let codec: &dyn Codec = &Lzss::default();

    let summary = run_batch(
        files,
        options,
        |input| decompressed_path(input, suffix, options.output_dir),
        |data| codec.decompress(data).map_err(|e| e.to_string()),
    )?;
    summary.finish("Decompressed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use lzpack_lzss::compress;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_decompress_strips_suffix() {
        let dir = tempdir().unwrap();
        let data = b"linksminkimos, linksminkimos, kol dar jauni esmi";
        fs::write(dir.path().join("text.lz"), compress(data)).unwrap();

        cmd_decompress(&[dir.path().join("text.lz")], &BatchOptions::default(), ".lz").unwrap();
        assert_eq!(fs::read(dir.path().join("text")).unwrap(), data);
    }

    #[test]
    fn test_decompress_into_output_dir() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out");
        fs::write(dir.path().join("blob.pak"), compress(&[9u8; 300])).unwrap();

        let options = BatchOptions {
            output_dir: Some(&out),
            ..BatchOptions::default()
        };
        cmd_decompress(&[dir.path().join("blob.pak")], &options, ".lz").unwrap();
        assert_eq!(fs::read(out.join("blob.pak.out")).unwrap(), vec![9u8; 300]);
    }

    #[test]
    fn test_decompress_reports_corrupt_stream() {
        let dir = tempdir().unwrap();
        let mut stream = compress(b"abcabcabcabc");
        stream.pop();
        fs::write(dir.path().join("bad.lz"), stream).unwrap();

        let result = cmd_decompress(&[dir.path().join("bad.lz")], &BatchOptions::default(), ".lz");
        assert!(result.is_err());
        assert!(!dir.path().join("bad").exists());
    }
}
