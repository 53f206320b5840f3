//! Binary entrypoint for the `ble-uuid` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match ble_uuid::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
