// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Replycodec CLI
//!
//! Command-line front end for the reply codec.
//!
//! ## Usage
//!
//! ```sh
//! # Re-emit JSON in compact codec form
//! replycodec format reply.json
//!
//! # Validate JSON read from stdin
//! cat reply.json | replycodec check
//!
//! # Decode a reply envelope
//! replycodec reply reply.json --require-success
//! ```

mod cmd;
mod common;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use cmd::{CheckCmd, FormatCmd, ReplyCmd};
use common::{init_logging, CliConfig, Result};

/// Replycodec - JSON codec for reply envelopes
#[derive(Parser, Clone)]
#[command(name = "replycodec")]
#[command(about = "Encode, check and decode JSON reply envelopes", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "ArcheBase")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Clone)]
enum Commands {
    /// Parse JSON and print it in compact codec form
    Format(FormatCmd),

    /// Validate JSON syntax
    Check(CheckCmd),

    /// Decode a reply envelope
    Reply(ReplyCmd),
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = CliConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Format(cmd) => cmd.run(&config),
        Commands::Check(cmd) => cmd.run(&config),
        Commands::Reply(cmd) => cmd.run(&config),
    }
}

fn main() {
    let result = run();

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
