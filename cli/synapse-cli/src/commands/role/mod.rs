// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Workspace role commands
//!
//! Role definitions and assignments live on each workspace's access-control
//! endpoint, so every command here takes `--workspace-name`. Role and
//! principal names are resolved to IDs before the primary call.

pub mod assignment;
pub mod definition;
pub mod error;
#[cfg(test)]
mod mock;
pub mod resolve;

use anyhow::Result;
use clap::Subcommand;

pub use assignment::RoleAssignmentCommand;
pub use definition::RoleDefinitionCommand;

use crate::commands::Context;

#[derive(Subcommand, Clone)]
pub enum RoleCommand {
    /// Manage role definitions
    #[command(alias = "def")]
    Definition {
        #[command(subcommand)]
        command: RoleDefinitionCommand,
    },
    /// Manage role assignments
    #[command(alias = "ra")]
    Assignment {
        #[command(subcommand)]
        command: RoleAssignmentCommand,
    },
}

impl RoleCommand {
    pub async fn run(self, ctx: &Context, use_json: bool) -> Result<()> {
        match self {
            Self::Definition { command } => command.run(ctx, use_json).await,
            Self::Assignment { command } => command.run(ctx, use_json).await,
        }
    }
}
