//! Test command implementation.

use log::info;
use lzpack_core::crc::Crc32;
use lzpack_lzss::LzssDecoder;
use std::fs;
use std::path::{Path, PathBuf};

/// Decode one file and return its decoded length and CRC-32.
fn test_file(path: &Path) -> Result<(usize, u32), String> {
    let data = fs::read(path).map_err(|e| e.to_string())?;
    let (output, info) = LzssDecoder::new()
        .decode_with_info(&data)
        .map_err(|e| e.to_string())?;
    if info.trailing_bytes > 0 {
        info!(
            "{}: {} trailing bytes ignored",
            path.display(),
            info.trailing_bytes
        );
    }
    Ok((output.len(), Crc32::compute(&output)))
}

pub fn cmd_test(files: &[PathBuf]) -> Result<(), Box<dyn std::error::Error>> {
    let mut ok_count = 0usize;
    let mut failed = 0usize;

    for path in files {
        match test_file(path) {
            Ok((len, crc)) => {
                ok_count += 1;
                println!("  OK: {} ({} bytes, crc32 {:08x})", path.display(), len, crc);
            }
            Err(e) => {
                println!("  FAILED: {} - {}", path.display(), e);
                failed += 1;
            }
        }
    }

    println!();
    println!("Test results:");
    println!("  Total files: {}", files.len());
    println!("  OK: {}", ok_count);
    println!("  Failed: {}", failed);

    if failed > 0 {
        return Err(format!("{} of {} files failed", failed, files.len()).into());
    }

    println!();
    println!("All files OK");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lzpack_lzss::compress;
    use tempfile::tempdir;

    #[test]
    fn test_file_reports_length_and_crc() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.lz");
        fs::write(&path, compress(b"123456789")).unwrap();
        assert_eq!(test_file(&path), Ok((9, 0xCBF43926)));
    }

    #[test]
    fn test_cmd_test_fails_if_any_file_fails() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.lz");
        let bad = dir.path().join("bad.lz");
        fs::write(&good, compress(&[1u8; 100])).unwrap();
        fs::write(&bad, [100, 0, 0, 0, 0x00]).unwrap();

        assert!(cmd_test(&[good.clone()]).is_ok());
        assert!(cmd_test(&[good, bad]).is_err());
        assert!(cmd_test(&[dir.path().join("missing.lz")]).is_err());
    }
}
