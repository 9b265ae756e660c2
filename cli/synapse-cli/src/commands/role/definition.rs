// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Role definition commands

use anyhow::Result;
use clap::{Args, Subcommand};
use synapse_api::RoleDefinition;
use synapse_client::AccessControlApi;

use super::error::{self, AccessControlError};
use super::resolve::resolve_role_id;
use crate::commands::{Context, WorkspaceArgs};
use crate::output::{json, or_none, table};

/// Look up one role definition by name or ID
pub async fn get_role_definition(
    client: &dyn AccessControlApi,
    role: &str,
) -> error::Result<RoleDefinition> {
    let role_id = resolve_role_id(client, Some(role))
        .await?
        .ok_or_else(|| AccessControlError::InvalidArgument("A role name or ID is required.".to_string()))?;
    Ok(client.get_role_definition_by_id(&role_id).await?)
}

#[derive(Subcommand, Clone)]
pub enum RoleDefinitionCommand {
    /// List role definitions
    #[command(visible_alias = "ls")]
    List(DefinitionListArgs),
    /// Show a role definition
    Show(DefinitionShowArgs),
}

#[derive(Args, Clone)]
pub struct DefinitionListArgs {
    #[command(flatten)]
    pub workspace: WorkspaceArgs,
}

#[derive(Args, Clone)]
pub struct DefinitionShowArgs {
    #[command(flatten)]
    pub workspace: WorkspaceArgs,
    /// Role name or ID
    #[arg(long)]
    pub role: String,
}

impl RoleDefinitionCommand {
    pub async fn run(self, ctx: &Context, use_json: bool) -> Result<()> {
        match self {
            Self::List(args) => list(args, ctx, use_json).await,
            Self::Show(args) => show(args, ctx, use_json).await,
        }
    }
}

async fn list(args: DefinitionListArgs, ctx: &Context, use_json: bool) -> Result<()> {
    let client = ctx.client.access_control(&args.workspace.workspace_name)?;
    let definitions = client.get_role_definitions().await?;

    if use_json {
        json::print_json(&definitions)?;
    } else {
        let mut tbl = table::create_table(&["ID", "NAME", "BUILT-IN"]);
        for def in &definitions {
            tbl.add_row(vec![
                def.id.clone(),
                or_none(def.name.as_deref()),
                def.is_built_in.to_string(),
            ]);
        }
        table::print_table(tbl);
    }
    Ok(())
}

async fn show(args: DefinitionShowArgs, ctx: &Context, use_json: bool) -> Result<()> {
    let client = ctx.client.access_control(&args.workspace.workspace_name)?;
    let definition = get_role_definition(&client, &args.role).await?;

    if use_json {
        json::print_json(&definition)?;
    } else {
        table::print_details(&[
            ("ID", definition.id.clone()),
            ("Name", or_none(definition.name.as_deref())),
            ("Built-in", definition.is_built_in.to_string()),
        ]);
    }
    Ok(())
}
