// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! CLI commands

pub mod firewall_rule;
pub mod profile;
pub mod role;
pub mod spark_pool;
pub mod sql_pool;
pub mod wait;
pub mod workspace;

pub use firewall_rule::FirewallRuleCommand;
pub use profile::ProfileCommand;
pub use role::RoleCommand;
pub use spark_pool::SparkPoolCommand;
pub use sql_pool::SqlPoolCommand;
pub use workspace::WorkspaceCommand;

use anyhow::Result;
use clap::Args;
use synapse_api::Tags;
use synapse_client::SynapseClient;

use crate::config::{self, Profile};

/// Everything a command needs to talk to the services
pub struct Context {
    pub client: SynapseClient,
    pub profile: Profile,
}

impl Context {
    pub fn new(profile: Profile) -> Result<Self> {
        let client = SynapseClient::new(config::client_config(&profile))?;
        Ok(Self { client, profile })
    }

    /// The resource group from the command line, else the profile default
    pub fn resource_group(&self, arg: Option<&str>) -> Result<String> {
        arg.or(self.profile.resource_group.as_deref())
            .map(str::to_string)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "No resource group given. Use --resource-group or set one in the profile."
                )
            })
    }
}

/// Selects a workspace by name
#[derive(Args, Clone, Debug)]
pub struct WorkspaceArgs {
    /// Workspace name
    #[arg(long, short = 'w')]
    pub workspace_name: String,
}

/// Selects a workspace within a resource group
#[derive(Args, Clone, Debug)]
pub struct WorkspaceScope {
    /// Resource group (defaults to the profile's)
    #[arg(long, short = 'g')]
    pub resource_group: Option<String>,

    /// Workspace name
    #[arg(long, short = 'w')]
    pub workspace_name: String,
}

impl WorkspaceScope {
    /// Resolve to (resource group, workspace)
    pub fn resolve(&self, ctx: &Context) -> Result<(String, String)> {
        Ok((
            ctx.resource_group(self.resource_group.as_deref())?,
            self.workspace_name.clone(),
        ))
    }
}

/// Parse `key=value` tag arguments
pub fn parse_tags(tags: &Option<Vec<String>>) -> Result<Option<Tags>> {
    let Some(tag_strings) = tags else {
        return Ok(None);
    };

    let mut map = Tags::new();
    for tag in tag_strings {
        if let Some((key, value)) = tag.split_once('=') {
            map.insert(key.to_string(), value.to_string());
        } else {
            return Err(anyhow::anyhow!(
                "Invalid tag format '{}', expected key=value",
                tag
            ));
        }
    }
    Ok(Some(map))
}

/// Ask before deleting unless `--yes` was given
pub fn confirm_delete(what: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    Ok(dialoguer::Confirm::new()
        .with_prompt(format!("Delete {}?", what))
        .default(false)
        .interact()?)
}
