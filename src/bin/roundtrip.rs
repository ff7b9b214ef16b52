use std::env;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::{error, info};

use lz12::naming::{compressed_path, decompressed_path};
use lz12::{decode_to, encode_to, EncoderOptions, MatchStrategy, WindowSize};

/// Compress a file next to itself as `<name>-compressed<.ext>`, then decompress that into
/// `<name>-decompressed<.ext>`.
#[derive(Parser)]
#[command(name = "roundtrip", version)]
struct Args {
    /// File to compress.
    input: PathBuf,
    /// Sliding window size, clamped to 1..=4095. Compression time grows with it.
    #[arg(default_value_t = 100)]
    window_size: usize,
    #[arg(short, long, default_value_t = MatchStrategy::WindowScan)]
    strategy: MatchStrategy,
}

fn remove_stale(path: &Path) -> lz12::Result<()> {
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}

fn run(args: &Args) -> lz12::Result<()> {
    let compressed = compressed_path(&args.input);
    let decompressed = decompressed_path(&args.input);
    remove_stale(&compressed)?;
    remove_stale(&decompressed)?;

    let options = EncoderOptions {
        window_size: WindowSize::clamped(args.window_size),
        strategy: args.strategy,
        ..Default::default()
    };

    info!("compression started, window {}", options.window_size);
    let start = Instant::now();
    let data = fs::read(&args.input)?;
    let n = encode_to(&data, &options, BufWriter::new(File::create(&compressed)?))?;
    info!(
        "compression done in {} ms: {} -> {} bytes, {}",
        start.elapsed().as_millis(),
        data.len(),
        n,
        compressed.display()
    );

    info!("decompression started");
    let start = Instant::now();
    let packed = fs::read(&compressed)?;
    decode_to(&packed, BufWriter::new(File::create(&decompressed)?))?;
    info!("decompression done in {} ms: {}", start.elapsed().as_millis(), decompressed.display());
    Ok(())
}

fn main() -> ExitCode {
    // info by default, RUST_LOG overrides
    let filters = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    pretty_env_logger::formatted_builder().parse_filters(&filters).init();
    let args = Args::parse();

    if !args.input.exists() {
        error!("file does not exist: {}", args.input.display());
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
