//! Benchmarks for lzpack-lzss
//!
//! This benchmark suite evaluates:
//! - Compression speed per match strategy
//! - Decompression speed
//! - Data patterns typical of packed maps (tile layers, collision masks)

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lzpack_lzss::{LzssConfig, MatchStrategy, compress, compress_with, decompress};
use std::hint::black_box;

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<u8>;

/// Generate test data patterns for benchmarking
mod test_data {
    /// Uniform data - all bytes are the same (best compression)
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    /// Random data - no patterns (worst compression)
    pub fn random(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Tile layer - 16-bit tile ids in rows, mostly a few repeated tiles
    pub fn tile_layer(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut i = 0usize;
        while data.len() < size {
            let row = i / 64;
            let tile: u16 = if row % 7 == 0 { 12 } else { ((i / 9) % 4) as u16 };
            data.extend_from_slice(&tile.to_le_bytes());
            i += 1;
        }
        data.truncate(size);
        data
    }

    /// Collision mask - one byte per cell, sparse solid regions
    pub fn collision(size: usize) -> Vec<u8> {
        (0..size)
            .map(|i| u8::from((i % 64) < 3 || (i / 64) % 16 == 15))
            .collect()
    }
}

/// Asset sizes: a small room, a level, a large overworld.
mod asset_sizes {
    pub const SMALL: usize = 2 * 1024;
    pub const MEDIUM: usize = 16 * 1024;
    pub const LARGE: usize = 64 * 1024;
}

const PATTERNS: [(&str, PatternGenerator); 4] = [
    ("uniform", test_data::uniform as PatternGenerator),
    ("random", test_data::random as PatternGenerator),
    ("tiles", test_data::tile_layer as PatternGenerator),
    ("collision", test_data::collision as PatternGenerator),
];

/// Benchmark compression speed for each strategy
fn bench_compression_speed(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression_speed");
    group.sample_size(10);

    for strategy in MatchStrategy::ALL {
        let config = LzssConfig::new(strategy);
        for (pattern_name, generator) in PATTERNS {
            let data = generator(asset_sizes::MEDIUM);
            let id = format!("{}/{}", strategy, pattern_name);

            group.throughput(Throughput::Bytes(data.len() as u64));
            group.bench_with_input(BenchmarkId::from_parameter(&id), &data, |b, data| {
                b.iter(|| black_box(compress_with(black_box(data), &config)));
            });
        }
    }

    group.finish();
}

/// Benchmark decompression speed
fn bench_decompression_speed(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompression_speed");

    let sizes = [
        ("small_2KB", asset_sizes::SMALL),
        ("medium_16KB", asset_sizes::MEDIUM),
        ("large_64KB", asset_sizes::LARGE),
    ];

    for (size_name, size) in sizes {
        for (pattern_name, generator) in PATTERNS {
            let compressed = compress(&generator(size));
            let id = format!("{}/{}", size_name, pattern_name);

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(
                BenchmarkId::from_parameter(&id),
                &compressed,
                |b, compressed| {
                    b.iter(|| black_box(decompress(black_box(compressed)).unwrap()));
                },
            );
        }
    }

    group.finish();
}

/// Print compressed sizes once so ratios show up next to the timings.
fn report_ratios(_c: &mut Criterion) {
    for strategy in MatchStrategy::ALL {
        let config = LzssConfig::new(strategy);
        for (pattern_name, generator) in PATTERNS {
            let data = generator(asset_sizes::MEDIUM);
            let compressed = compress_with(&data, &config);
            println!(
                "ratio {:>10}/{:<10} {:>6} -> {:>6} ({:.1}%)",
                strategy,
                pattern_name,
                data.len(),
                compressed.len(),
                compressed.len() as f64 / data.len() as f64 * 100.0
            );
        }
    }
}

criterion_group!(
    benches,
    bench_compression_speed,
    bench_decompression_speed,
    report_ratios
);
criterion_main!(benches);
