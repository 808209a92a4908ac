// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CLI subcommands.

mod check;
mod format;
mod reply;

pub use check::CheckCmd;
pub use format::FormatCmd;
pub use reply::ReplyCmd;
