use std::io::{stdin, stdout, BufWriter, Read};
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use lz12::{encode_to, EncoderOptions, MatchStrategy, WindowSize};

/// Compress stdin to stdout.
#[derive(Parser)]
#[command(name = "encode", version)]
struct Args {
    /// Sliding window size, clamped to 1..=4095. Bigger windows compress better but slower.
    #[arg(short, long, default_value_t = 100)]
    window_size: usize,
    /// Match finder: window-scan or hash-chain (same output).
    #[arg(short, long, default_value_t = MatchStrategy::WindowScan)]
    strategy: MatchStrategy,
}

fn main() -> ExitCode {
    pretty_env_logger::init();
    let args = Args::parse();

    let options = EncoderOptions {
        window_size: WindowSize::clamped(args.window_size),
        strategy: args.strategy,
        ..Default::default()
    };

    let mut data = Vec::new();
    if let Err(err) = stdin().lock().read_to_end(&mut data) {
        error!("reading stdin: {}", err);
        return ExitCode::FAILURE;
    }

    let writer = BufWriter::new(stdout().lock());
    match encode_to(&data, &options, writer) {
        Ok(n) => {
            info!("{} -> {} bytes", data.len(), n);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
