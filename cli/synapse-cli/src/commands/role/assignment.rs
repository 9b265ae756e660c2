// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Role assignment commands

use anyhow::Result;
use clap::{Args, Subcommand};
use synapse_api::{RoleAssignment, RoleAssignmentOptions};
use synapse_client::{AccessControlApi, DirectoryApi};

use super::error::{self, AccessControlError};
use super::resolve::{resolve_object_id, resolve_role_id};
use crate::commands::{Context, WorkspaceArgs, confirm_delete};
use crate::output::{json, table};

/// Principal selectors: an object ID, or one of two directory names
#[derive(Args, Clone, Debug, Default)]
pub struct PrincipalArgs {
    /// Object ID of the user, group, or service principal
    #[arg(long)]
    pub object_id: Option<String>,

    /// Service principal name (bare names are looked up as http://<name>)
    #[arg(long)]
    pub service_principal_name: Option<String>,

    /// User principal name, e.g. someone@contoso.com
    #[arg(long)]
    pub user_principal_name: Option<String>,
}

fn given(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl PrincipalArgs {
    pub fn object_id(&self) -> Option<&str> {
        given(&self.object_id)
    }

    pub fn service_principal_name(&self) -> Option<&str> {
        given(&self.service_principal_name)
    }

    pub fn user_principal_name(&self) -> Option<&str> {
        given(&self.user_principal_name)
    }

    /// Listing accepts no selector at all, but never conflicting ones
    pub fn validate_for_list(&self) -> error::Result<()> {
        let spn = self.service_principal_name().is_some();
        let upn = self.user_principal_name().is_some();

        if self.object_id().is_some() {
            if spn || upn {
                return Err(AccessControlError::InvalidArgument(
                    "--service-principal-name or --user-principal-name are not required when --object-id is used."
                        .to_string(),
                ));
            }
        } else if spn && upn {
            return Err(AccessControlError::InvalidArgument(
                "--service-principal-name and --user-principal-name arguments should not be provided at the same time."
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Creation needs exactly one way of naming the principal
    pub fn validate_for_create(&self) -> error::Result<()> {
        let spn = self.service_principal_name().is_some();
        let upn = self.user_principal_name().is_some();

        let valid = if self.object_id().is_some() {
            !spn && !upn
        } else {
            spn ^ upn
        };

        if valid {
            Ok(())
        } else {
            Err(AccessControlError::InvalidArgument(
                "You should provide either --object-id or --service-principal-name/--user-principal-name arguments."
                    .to_string(),
            ))
        }
    }

    /// The principal's object ID, looked up in the directory if needed
    async fn resolve(&self, directory: &dyn DirectoryApi) -> error::Result<Option<String>> {
        match self.object_id() {
            Some(id) => Ok(Some(id.to_string())),
            None => {
                resolve_object_id(
                    directory,
                    self.user_principal_name(),
                    self.service_principal_name(),
                )
                .await
            }
        }
    }
}

/// List role assignments, optionally narrowed by role and principal
///
/// The service filters by role but cannot be relied on to filter by
/// principal, so the result is filtered again locally.
pub async fn list_role_assignments(
    client: &dyn AccessControlApi,
    directory: &dyn DirectoryApi,
    role: Option<&str>,
    principal: &PrincipalArgs,
) -> error::Result<Vec<RoleAssignment>> {
    principal.validate_for_list()?;

    let role_id = resolve_role_id(client, role).await?;
    let object_id = principal.resolve(directory).await?;

    let mut assignments = client
        .get_role_assignments(role_id.as_deref(), object_id.as_deref())
        .await?;

    if let Some(object_id) = &object_id {
        assignments.retain(|a| &a.principal_id == object_id);
    }

    Ok(assignments)
}

/// Assign a role to a principal
pub async fn create_role_assignment(
    client: &dyn AccessControlApi,
    directory: &dyn DirectoryApi,
    role: &str,
    principal: &PrincipalArgs,
) -> error::Result<RoleAssignment> {
    principal.validate_for_create()?;

    let role_id = resolve_role_id(client, Some(role))
        .await?
        .ok_or_else(|| AccessControlError::InvalidArgument("A role name or ID is required.".to_string()))?;

    let principal_id = principal.resolve(directory).await?.ok_or_else(|| {
        AccessControlError::InvalidArgument(
            "You should provide either --object-id or --service-principal-name/--user-principal-name arguments."
                .to_string(),
        )
    })?;

    let created = client
        .create_role_assignment(&RoleAssignmentOptions {
            role_id,
            principal_id,
        })
        .await?;
    Ok(created)
}

// ============================================================================
// CLI
// ============================================================================

#[derive(Subcommand, Clone)]
pub enum RoleAssignmentCommand {
    /// List role assignments
    #[command(visible_alias = "ls")]
    List(AssignmentListArgs),
    /// Show a role assignment
    Show(AssignmentShowArgs),
    /// Assign a role to a user or service principal
    Create(AssignmentCreateArgs),
    /// Delete role assignment(s)
    #[command(visible_alias = "rm")]
    Delete(AssignmentDeleteArgs),
}

#[derive(Args, Clone)]
pub struct AssignmentListArgs {
    #[command(flatten)]
    pub workspace: WorkspaceArgs,
    /// Role name or ID
    #[arg(long)]
    pub role: Option<String>,
    #[command(flatten)]
    pub principal: PrincipalArgs,
}

#[derive(Args, Clone)]
pub struct AssignmentShowArgs {
    #[command(flatten)]
    pub workspace: WorkspaceArgs,
    /// Role assignment ID
    #[arg(long)]
    pub id: String,
}

#[derive(Args, Clone)]
pub struct AssignmentCreateArgs {
    #[command(flatten)]
    pub workspace: WorkspaceArgs,
    /// Role name or ID
    #[arg(long)]
    pub role: String,
    #[command(flatten)]
    pub principal: PrincipalArgs,
}

#[derive(Args, Clone)]
pub struct AssignmentDeleteArgs {
    #[command(flatten)]
    pub workspace: WorkspaceArgs,
    /// Role assignment ID(s)
    #[arg(long = "id", required = true)]
    pub ids: Vec<String>,
    /// Skip confirmation
    #[arg(long, short)]
    pub yes: bool,
}

impl RoleAssignmentCommand {
    pub async fn run(self, ctx: &Context, use_json: bool) -> Result<()> {
        match self {
            Self::List(args) => list(args, ctx, use_json).await,
            Self::Show(args) => show(args, ctx, use_json).await,
            Self::Create(args) => create(args, ctx, use_json).await,
            Self::Delete(args) => delete(args, ctx).await,
        }
    }
}

fn print_assignments(assignments: &[RoleAssignment]) {
    let mut tbl = table::create_table(&["ID", "ROLE ID", "PRINCIPAL ID"]);
    for a in assignments {
        tbl.add_row(vec![a.id.as_str(), a.role_id.as_str(), a.principal_id.as_str()]);
    }
    table::print_table(tbl);
}

fn print_assignment(assignment: &RoleAssignment) {
    table::print_details(&[
        ("ID", assignment.id.clone()),
        ("Role ID", assignment.role_id.clone()),
        ("Principal ID", assignment.principal_id.clone()),
    ]);
}

async fn list(args: AssignmentListArgs, ctx: &Context, use_json: bool) -> Result<()> {
    // Validate before building any client
    args.principal.validate_for_list()?;

    let client = ctx.client.access_control(&args.workspace.workspace_name)?;
    let directory = ctx.client.directory();
    let assignments =
        list_role_assignments(&client, &directory, args.role.as_deref(), &args.principal).await?;

    if use_json {
        json::print_json(&assignments)?;
    } else {
        print_assignments(&assignments);
    }
    Ok(())
}

async fn show(args: AssignmentShowArgs, ctx: &Context, use_json: bool) -> Result<()> {
    let client = ctx.client.access_control(&args.workspace.workspace_name)?;
    let assignment = client.get_role_assignment_by_id(&args.id).await?;

    if use_json {
        json::print_json(&assignment)?;
    } else {
        print_assignment(&assignment);
    }
    Ok(())
}

async fn create(args: AssignmentCreateArgs, ctx: &Context, use_json: bool) -> Result<()> {
    args.principal.validate_for_create()?;

    let client = ctx.client.access_control(&args.workspace.workspace_name)?;
    let directory = ctx.client.directory();
    let assignment =
        create_role_assignment(&client, &directory, &args.role, &args.principal).await?;

    if use_json {
        json::print_json(&assignment)?;
    } else {
        println!("Created role assignment {}", assignment.id);
        print_assignment(&assignment);
    }
    Ok(())
}

async fn delete(args: AssignmentDeleteArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client.access_control(&args.workspace.workspace_name)?;

    for id in &args.ids {
        if !confirm_delete(&format!("role assignment '{}'", id), args.yes)? {
            continue;
        }
        client.delete_role_assignment_by_id(id).await?;
        println!("Deleted role assignment '{}'", id);
    }
    Ok(())
}
