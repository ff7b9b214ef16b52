use std::io::{stdin, stdout, BufWriter, Read};
use std::process::ExitCode;

use log::error;

use lz12::decode_to;

fn main() -> ExitCode {
    pretty_env_logger::init();

    let mut data = Vec::new();
    if let Err(err) = stdin().lock().read_to_end(&mut data) {
        error!("reading stdin: {}", err);
        return ExitCode::FAILURE;
    }

    let writer = BufWriter::new(stdout().lock());
    match decode_to(&data, writer) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
