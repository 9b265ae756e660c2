// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Workspace management commands

use anyhow::Result;
use clap::{Args, Subcommand};
use synapse_api::{
    CheckNameAvailabilityRequest, WORKSPACE_RESOURCE_TYPE, Workspace, WorkspaceCreateOptions,
    WorkspaceUpdateOptions,
};

use super::wait::WaitArgs;
use super::{Context, confirm_delete, parse_tags};
use crate::output::{json, or_none, table};

#[derive(Subcommand, Clone)]
pub enum WorkspaceCommand {
    /// List workspaces in a resource group, or the whole subscription
    #[command(visible_alias = "ls")]
    List(WorkspaceListArgs),
    /// Show a workspace
    Show(WorkspaceNameArgs),
    /// Create a workspace
    Create(WorkspaceCreateArgs),
    /// Update a workspace's tags or SQL administrator password
    Update(WorkspaceUpdateArgs),
    /// Delete a workspace
    #[command(visible_alias = "rm")]
    Delete(WorkspaceDeleteArgs),
    /// Check whether a workspace name is available
    CheckName(CheckNameArgs),
}

#[derive(Args, Clone)]
pub struct WorkspaceListArgs {
    /// Resource group (lists the whole subscription when omitted)
    #[arg(long, short = 'g')]
    pub resource_group: Option<String>,
}

#[derive(Args, Clone)]
pub struct WorkspaceNameArgs {
    /// Resource group (defaults to the profile's)
    #[arg(long, short = 'g')]
    pub resource_group: Option<String>,
    /// Workspace name
    #[arg(long, short = 'n')]
    pub name: String,
}

#[derive(Args, Clone)]
pub struct WorkspaceCreateArgs {
    #[command(flatten)]
    pub target: WorkspaceNameArgs,
    /// Data Lake Storage Gen2 account name or resource ID
    #[arg(long)]
    pub storage_account: String,
    /// File system (container) in the storage account
    #[arg(long)]
    pub file_system: String,
    /// SQL administrator login
    #[arg(long)]
    pub sql_admin_login_user: String,
    /// SQL administrator password
    #[arg(long)]
    pub sql_admin_login_password: String,
    /// Region
    #[arg(long, short = 'l')]
    pub location: String,
    /// Tags (key=value, multiple allowed)
    #[arg(short = 't', long = "tag")]
    pub tags: Option<Vec<String>>,
    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Clone)]
pub struct WorkspaceUpdateArgs {
    #[command(flatten)]
    pub target: WorkspaceNameArgs,
    /// New SQL administrator password
    #[arg(long)]
    pub sql_admin_login_password: Option<String>,
    /// Tags (key=value, multiple allowed; replaces existing tags)
    #[arg(short = 't', long = "tag")]
    pub tags: Option<Vec<String>>,
    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Clone)]
pub struct WorkspaceDeleteArgs {
    #[command(flatten)]
    pub target: WorkspaceNameArgs,
    /// Skip confirmation
    #[arg(long, short)]
    pub yes: bool,
    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Clone)]
pub struct CheckNameArgs {
    /// Workspace name to check
    #[arg(long, short = 'n')]
    pub name: String,
}

impl WorkspaceCommand {
    pub async fn run(self, ctx: &Context, use_json: bool) -> Result<()> {
        match self {
            Self::List(args) => list_workspaces(args, ctx, use_json).await,
            Self::Show(args) => show_workspace(args, ctx, use_json).await,
            Self::Create(args) => create_workspace(args, ctx, use_json).await,
            Self::Update(args) => update_workspace(args, ctx, use_json).await,
            Self::Delete(args) => delete_workspace(args, ctx).await,
            Self::CheckName(args) => check_name(args, ctx, use_json).await,
        }
    }
}

/// Reduce a storage account resource ID to the account name
///
/// Only full ARM IDs
/// (`/subscriptions/{sub}/resourceGroups/{rg}/providers/{ns}/{type}/{name}`)
/// are reduced; anything else passes through unchanged.
pub fn storage_account_name(value: &str) -> String {
    let segments: Vec<&str> = value.split('/').filter(|s| !s.is_empty()).collect();

    let is_resource_id = value.starts_with('/')
        && segments.len() >= 8
        && segments[0].eq_ignore_ascii_case("subscriptions")
        && segments[2].eq_ignore_ascii_case("resourceGroups")
        && segments[4].eq_ignore_ascii_case("providers");
    if !is_resource_id {
        return value.to_string();
    }

    // Child IDs (".../storageAccounts/{name}/blobServices/default") keep
    // the account segment
    segments
        .iter()
        .skip(5)
        .position(|s| s.eq_ignore_ascii_case("storageAccounts"))
        .and_then(|i| segments.get(5 + i + 1))
        .unwrap_or(&segments[7])
        .to_string()
}

fn print_workspace(workspace: &Workspace, use_json: bool) -> Result<()> {
    if use_json {
        return json::print_json(workspace);
    }

    let props = &workspace.properties;
    let storage = props.default_data_lake_storage.as_ref();
    let mut rows = vec![
        ("Name", or_none(workspace.name.as_deref())),
        ("ID", or_none(workspace.id.as_deref())),
        ("Location", workspace.location.clone()),
        ("State", or_none(props.provisioning_state)),
        ("Storage", or_none(storage.map(|s| s.account_url.as_str()))),
        ("File system", or_none(storage.map(|s| s.filesystem.as_str()))),
        ("SQL admin", or_none(props.sql_administrator_login.as_deref())),
        (
            "Managed RG",
            or_none(props.managed_resource_group_name.as_deref()),
        ),
    ];
    if let Some(endpoints) = &props.connectivity_endpoints {
        for (kind, url) in endpoints {
            rows.push((kind.as_str(), url.clone()));
        }
    }
    table::print_details(&rows);
    Ok(())
}

async fn list_workspaces(args: WorkspaceListArgs, ctx: &Context, use_json: bool) -> Result<()> {
    let workspaces = ctx
        .client
        .management()
        .list_workspaces(args.resource_group.as_deref())
        .await?;

    if use_json {
        json::print_json(&workspaces)?;
    } else {
        let mut tbl = table::create_table(&["NAME", "LOCATION", "STATE", "MANAGED RG"]);
        for ws in &workspaces {
            tbl.add_row(vec![
                or_none(ws.name.as_deref()),
                ws.location.clone(),
                or_none(ws.properties.provisioning_state),
                or_none(ws.properties.managed_resource_group_name.as_deref()),
            ]);
        }
        table::print_table(tbl);
    }
    Ok(())
}

async fn show_workspace(args: WorkspaceNameArgs, ctx: &Context, use_json: bool) -> Result<()> {
    let rg = ctx.resource_group(args.resource_group.as_deref())?;
    let workspace = ctx.client.management().get_workspace(&rg, &args.name).await?;
    print_workspace(&workspace, use_json)
}

async fn create_workspace(args: WorkspaceCreateArgs, ctx: &Context, use_json: bool) -> Result<()> {
    let rg = ctx.resource_group(args.target.resource_group.as_deref())?;
    let name = args.target.name.as_str();
    let mgmt = ctx.client.management();

    let options = WorkspaceCreateOptions {
        storage_account: storage_account_name(&args.storage_account),
        file_system: args.file_system,
        sql_admin_login_user: args.sql_admin_login_user,
        sql_admin_login_password: args.sql_admin_login_password,
        location: args.location,
        tags: parse_tags(&args.tags)?,
    };
    let body = options.into_workspace(&ctx.profile.storage_endpoint_suffix);

    let accepted = mgmt.create_or_update_workspace(&rg, name, &body).await?;
    let what = format!("workspace '{}'", name);
    let rg = rg.as_str();

    match args
        .wait
        .settle(&what, accepted, || mgmt.get_workspace(rg, name))
        .await?
    {
        Some(workspace) => print_workspace(&workspace, use_json),
        None => {
            println!("Creation of {} accepted", what);
            Ok(())
        }
    }
}

async fn update_workspace(args: WorkspaceUpdateArgs, ctx: &Context, use_json: bool) -> Result<()> {
    let rg = ctx.resource_group(args.target.resource_group.as_deref())?;
    let name = args.target.name.as_str();
    let mgmt = ctx.client.management();

    let options = WorkspaceUpdateOptions {
        sql_admin_login_password: args.sql_admin_login_password,
        tags: parse_tags(&args.tags)?,
    };

    let accepted = mgmt.update_workspace(&rg, name, &options.into()).await?;
    let what = format!("workspace '{}'", name);
    let rg = rg.as_str();

    match args
        .wait
        .settle(&what, accepted, || mgmt.get_workspace(rg, name))
        .await?
    {
        Some(workspace) => print_workspace(&workspace, use_json),
        None => {
            println!("Update of {} accepted", what);
            Ok(())
        }
    }
}

async fn delete_workspace(args: WorkspaceDeleteArgs, ctx: &Context) -> Result<()> {
    let rg = ctx.resource_group(args.target.resource_group.as_deref())?;
    let name = args.target.name.as_str();
    let what = format!("workspace '{}'", name);

    if !confirm_delete(&what, args.yes)? {
        return Ok(());
    }

    let mgmt = ctx.client.management();
    mgmt.delete_workspace(&rg, name).await?;

    let rg = rg.as_str();
    if args
        .wait
        .settle_deletion(&what, || mgmt.get_workspace(rg, name))
        .await?
    {
        println!("Deleted {}", what);
    } else {
        println!("Deletion of {} accepted", what);
    }
    Ok(())
}

async fn check_name(args: CheckNameArgs, ctx: &Context, use_json: bool) -> Result<()> {
    let request = CheckNameAvailabilityRequest {
        name: args.name,
        resource_type: WORKSPACE_RESOURCE_TYPE.to_string(),
    };
    let response = ctx
        .client
        .management()
        .check_name_availability(&request)
        .await?;

    if use_json {
        json::print_json(&response)?;
    } else {
        table::print_details(&[
            ("Name", request.name.clone()),
            ("Available", response.available.to_string()),
            ("Reason", or_none(response.reason.as_deref())),
            ("Message", or_none(response.message.as_deref())),
        ]);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("mystorage", "mystorage" ; "plain name")]
    #[test_case(
        "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Storage/storageAccounts/mystorage",
        "mystorage" ;
        "resource id"
    )]
    #[test_case(
        "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Storage/storageAccounts/mystorage/blobServices/default",
        "mystorage" ;
        "child resource id"
    )]
    #[test_case(
        "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Storage/accounts/lake",
        "lake" ;
        "other resource type takes its name"
    )]
    #[test_case("/some/other/thing", "/some/other/thing" ; "non arm path kept")]
    #[test_case(
        "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Storage",
        "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Storage" ;
        "truncated id kept"
    )]
    fn test_storage_account_name(input: &str, expected: &str) {
        assert_eq!(storage_account_name(input), expected);
    }
}
