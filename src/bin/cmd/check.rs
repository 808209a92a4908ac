// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Check command - validate JSON syntax.

use std::path::PathBuf;

use clap::Args;

use crate::common::{read_input, CliConfig, Result};
use replycodec::{parse_with_config, CodecError};

/// Parse JSON without printing it.
#[derive(Args, Clone, Debug)]
pub struct CheckCmd {
    /// Input file (stdin if omitted or `-`)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
}

impl CheckCmd {
    pub fn run(self, config: &CliConfig) -> Result<()> {
        let text = read_input(self.input.as_ref())?;
        let value = parse_with_config(&text, &config.parser).map_err(CodecError::from)?;
        tracing::debug!(kind = value.type_name(), "input is valid JSON");
        println!("ok");
        Ok(())
    }
}
