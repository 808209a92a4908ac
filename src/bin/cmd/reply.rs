// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Reply command - decode a server reply envelope.

use std::path::PathBuf;

use clap::Args;

use crate::common::{read_input, CliConfig, Result};
use replycodec::{encode, CodecError, JsonValue, ResponseEnvelope};

/// Decode a `{ReplyCode, ReplyText, ReplyData}` reply and summarize it.
#[derive(Args, Clone, Debug)]
pub struct ReplyCmd {
    /// Input file (stdin if omitted or `-`)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Fail when the reply code is not a success code
    #[arg(long)]
    require_success: bool,
}

impl ReplyCmd {
    pub fn run(self, config: &CliConfig) -> Result<()> {
        let text = read_input(self.input.as_ref())?;
        let reply = ResponseEnvelope::<JsonValue>::from_text(&text, &config.parser)?;

        if self.require_success && !reply.is_success() {
            return Err(CodecError::server_reported(reply.code, reply.message).into());
        }

        println!("code: {}", reply.code.value());
        println!("name: {}", reply.code.name());
        println!("bucket: {}", reply.bucket());
        println!("message: {}", reply.message);
        match &reply.data {
            Some(data) => println!("payload: {}", encode(data)),
            None => println!("payload: none"),
        }
        Ok(())
    }
}
