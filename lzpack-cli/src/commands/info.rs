//! Info command implementation.

use crate::utils::percent;
use log::debug;
use lzpack_core::crc::Crc32;
use lzpack_lzss::{LzssDecoder, StreamInfo, Token};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// One decoded token and the output position it was written at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum TokenJson {
    Literal { position: usize, byte: u8 },
    Match { position: usize, offset: u16, length: u8 },
}

/// Everything `info` reports about a stream.
#[derive(Debug, Serialize)]
struct InfoReport {
    file: String,
    original_size: usize,
    compressed_size: usize,
    ratio: f64,
    blocks: usize,
    literals: usize,
    matches: usize,
    matched_bytes: usize,
    longest_match: usize,
    trailing_bytes: usize,
    crc32: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    tokens: Option<Vec<TokenJson>>,
}

impl InfoReport {
    fn new(file: &Path, info: &StreamInfo, crc: u32, tokens: Option<Vec<TokenJson>>) -> Self {
        Self {
            file: file.display().to_string(),
            original_size: info.original_len,
            compressed_size: info.compressed_len,
            ratio: info.ratio(),
            blocks: info.blocks,
            literals: info.literals,
            matches: info.matches,
            matched_bytes: info.matched_bytes,
            longest_match: info.longest_match,
            trailing_bytes: info.trailing_bytes,
            crc32: format!("{:08x}", crc),
            tokens,
        }
    }
}

fn token_listing(tokens: &[Token]) -> Vec<TokenJson> {
    let mut position = 0;
    tokens
        .iter()
        .map(|token| {
            let entry = match *token {
                Token::Literal(byte) => TokenJson::Literal { position, byte },
                Token::Match { offset, length } => TokenJson::Match {
                    position,
                    offset,
                    length,
                },
            };
            position += token.output_len();
            entry
        })
        .collect()
}

fn print_report(report: &InfoReport) {
    println!("Stream Information");
    println!("==================");
    println!("File: {}", report.file);
    println!("Original size: {} bytes", report.original_size);
    println!("Compressed size: {} bytes", report.compressed_size);
    println!(
        "Compressed/original: {:.1}%",
        percent(report.compressed_size, report.original_size)
    );
    println!("CRC-32: {}", report.crc32);

    println!();
    println!("Tokens:");
    println!("  Blocks: {}", report.blocks);
    println!("  Literals: {}", report.literals);
    println!("  Matches: {}", report.matches);
    println!("  Matched bytes: {}", report.matched_bytes);
    println!("  Longest match: {}", report.longest_match);
    if report.trailing_bytes > 0 {
        println!("  Trailing bytes (ignored): {}", report.trailing_bytes);
    }

    if let Some(tokens) = &report.tokens {
        println!();
        println!("{:>10}  Token", "Position");
        println!("{}", "-".repeat(40));
        for token in tokens {
            match token {
                TokenJson::Literal { position, byte } => {
                    let shown = if byte.is_ascii_graphic() { *byte as char } else { '.' };
                    println!("{:>10}  literal 0x{:02x} '{}'", position, byte, shown);
                }
                TokenJson::Match {
                    position,
                    offset,
                    length,
                } => println!("{:>10}  match   offset={} length={}", position, offset, length),
            }
        }
    }
}

pub fn cmd_info(file: &Path, json: bool, show_tokens: bool) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(file)?;
    let decoder = LzssDecoder::new();

    let (output, info) = decoder.decode_with_info(&data)?;
    debug!("{}: {:?}", file.display(), info);

    let tokens = if show_tokens {
        Some(token_listing(&decoder.decode_tokens(&data)?))
    } else {
        None
    };

    let report = InfoReport::new(file, &info, Crc32::compute(&output), tokens);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}
