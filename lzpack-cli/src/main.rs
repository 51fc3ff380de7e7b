//! lzpack CLI - offline packer for LZSS-compressed game assets
//!
//! Compresses tile layers, collision masks and other small binary blobs into
//! the windowed LZSS stream format the runtime loader decodes.

mod commands;
mod utils;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use commands::{BatchOptions, cmd_compress, cmd_decompress, cmd_info, cmd_test};
use log::LevelFilter;
use lzpack_lzss::MatchStrategy;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lzpack")]
#[command(author, version, about = "Windowed LZSS packer for game assets")]
#[command(long_about = "
lzpack compresses asset blobs into a 2 KB-window LZSS stream
(4-byte length header, 8-token blocks, 3..34 byte matches).

Examples:
  lzpack compress level1.tiles level1.coll
  lzpack compress -s longest -o build/ maps/*.tiles
  lzpack decompress level1.tiles.lz
  lzpack info level1.tiles.lz
  lzpack info --json level1.tiles.lz
  lzpack test build/*.lz
")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress files
    #[command(alias = "c")]
    Compress {
        /// Files to compress
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output directory (next to each input if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Match search strategy
        #[arg(short, long, value_enum, default_value = "leftmost")]
        strategy: StrategyArg,

        /// Suffix appended to compressed file names
        #[arg(long, default_value = ".lz")]
        suffix: String,

        /// Overwrite existing output files
        #[arg(short, long)]
        force: bool,

        /// Show progress bar
        #[arg(short = 'P', long)]
        progress: bool,
    },

    /// Decompress files
    #[command(alias = "d")]
    Decompress {
        /// Files to decompress
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output directory (next to each input if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Suffix stripped from compressed file names
        #[arg(long, default_value = ".lz")]
        suffix: String,

        /// Overwrite existing output files
        #[arg(short, long)]
        force: bool,

        /// Show progress bar
        #[arg(short = 'P', long)]
        progress: bool,
    },

    /// Show information about a compressed stream
    #[command(alias = "i")]
    Info {
        /// Compressed file to inspect
        file: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,

        /// List every decoded token
        #[arg(short, long)]
        tokens: bool,
    },

    /// Test stream integrity
    #[command(alias = "t")]
    Test {
        /// Compressed files to test
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Generate a shell completion script
    Completions {
        /// Target shell
        shell: Shell,
    },
}

/// Match search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
enum StrategyArg {
    /// Output identical to the reference asset tool (default)
    #[default]
    Leftmost,
    /// Exhaustive longest-match search
    Longest,
    /// Hash chains, fastest
    HashChain,
}

impl From<StrategyArg> for MatchStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Leftmost => MatchStrategy::Leftmost,
            StrategyArg::Longest => MatchStrategy::Longest,
            StrategyArg::HashChain => MatchStrategy::HashChain,
        }
    }
}

fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// `RUST_LOG` overrides the level picked from the flags.
fn init_logging(verbose: u8, quiet: bool) {
    let _ = env_logger::builder()
        .filter_level(log_level(verbose, quiet))
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Compress {
            files,
            output,
            strategy,
            suffix,
            force,
            progress,
        } => {
            let options = BatchOptions {
                output_dir: output.as_deref(),
                force,
                progress,
            };
            cmd_compress(&files, &options, strategy.into(), &suffix)
        }
        Commands::Decompress {
            files,
            output,
            suffix,
            force,
            progress,
        } => {
            let options = BatchOptions {
                output_dir: output.as_deref(),
                force,
                progress,
            };
            cmd_decompress(&files, &options, &suffix)
        }
        Commands::Info { file, json, tokens } => cmd_info(&file, json, tokens),
        Commands::Test { files } => cmd_test(&files),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "lzpack", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
