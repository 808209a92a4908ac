// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Format command - re-emit JSON through the encoder.

use std::io::Write as _;
use std::path::PathBuf;

use clap::Args;

use crate::common::{read_input, CliConfig, Result};
use replycodec::{encode, parse_with_config, CodecError};

/// Parse JSON and print it back in compact codec form.
#[derive(Args, Clone, Debug)]
pub struct FormatCmd {
    /// Input file (stdin if omitted or `-`)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
}

impl FormatCmd {
    pub fn run(self, config: &CliConfig) -> Result<()> {
        let text = read_input(self.input.as_ref())?;
        let value = parse_with_config(&text, &config.parser).map_err(CodecError::from)?;

        let mut out = std::io::stdout().lock();
        out.write_all(encode(&value).as_bytes())?;
        if config.output.trailing_newline {
            out.write_all(b"\n")?;
        }
        out.flush()?;
        Ok(())
    }
}
