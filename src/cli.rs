//! CLI argument definitions.

use clap::Parser;

/// Top-level CLI parser for `ble-uuid`.
#[derive(Debug, Parser)]
#[command(name = "ble-uuid", about = "Generate C++ BLE UUID macro line.", long_about = None)]
pub struct Cli {}
