// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! SQL pool management commands

use anyhow::Result;
use clap::{Args, Subcommand};
use synapse_api::{SqlPool, SqlPoolCreateOptions, SqlPoolUpdateOptions};

use super::wait::{POLL_INTERVAL, WaitArgs, wait_until};
use super::{Context, WorkspaceScope, confirm_delete, parse_tags};
use crate::output::{json, or_none, table};

#[derive(Subcommand, Clone)]
pub enum SqlPoolCommand {
    /// List SQL pools in a workspace
    #[command(visible_alias = "ls")]
    List(SqlPoolListArgs),
    /// Show a SQL pool
    Show(SqlPoolNameArgs),
    /// Create a SQL pool
    Create(SqlPoolCreateArgs),
    /// Update a SQL pool's performance level or tags
    Update(SqlPoolUpdateArgs),
    /// Delete a SQL pool
    #[command(visible_alias = "rm")]
    Delete(SqlPoolDeleteArgs),
    /// Pause a SQL pool
    Pause(SqlPoolActionArgs),
    /// Resume a paused SQL pool
    Resume(SqlPoolActionArgs),
}

#[derive(Args, Clone)]
pub struct SqlPoolListArgs {
    #[command(flatten)]
    pub scope: WorkspaceScope,
}

#[derive(Args, Clone)]
pub struct SqlPoolNameArgs {
    #[command(flatten)]
    pub scope: WorkspaceScope,
    /// SQL pool name
    #[arg(long, short = 'n')]
    pub name: String,
}

#[derive(Args, Clone)]
pub struct SqlPoolCreateArgs {
    #[command(flatten)]
    pub target: SqlPoolNameArgs,
    /// Performance level, e.g. DW1000c
    #[arg(long)]
    pub performance_level: String,
    /// Tags (key=value, multiple allowed)
    #[arg(short = 't', long = "tag")]
    pub tags: Option<Vec<String>>,
    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Clone)]
pub struct SqlPoolUpdateArgs {
    #[command(flatten)]
    pub target: SqlPoolNameArgs,
    /// New performance level
    #[arg(long)]
    pub sku_name: Option<String>,
    /// Tags (key=value, multiple allowed; replaces existing tags)
    #[arg(short = 't', long = "tag")]
    pub tags: Option<Vec<String>>,
    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Clone)]
pub struct SqlPoolDeleteArgs {
    #[command(flatten)]
    pub target: SqlPoolNameArgs,
    /// Skip confirmation
    #[arg(long, short)]
    pub yes: bool,
    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Clone)]
pub struct SqlPoolActionArgs {
    #[command(flatten)]
    pub target: SqlPoolNameArgs,
    #[command(flatten)]
    pub wait: WaitArgs,
}

impl SqlPoolCommand {
    pub async fn run(self, ctx: &Context, use_json: bool) -> Result<()> {
        match self {
            Self::List(args) => list_pools(args, ctx, use_json).await,
            Self::Show(args) => show_pool(args, ctx, use_json).await,
            Self::Create(args) => create_pool(args, ctx, use_json).await,
            Self::Update(args) => update_pool(args, ctx, use_json).await,
            Self::Delete(args) => delete_pool(args, ctx).await,
            Self::Pause(args) => pause_or_resume(args, ctx, PoolAction::Pause).await,
            Self::Resume(args) => pause_or_resume(args, ctx, PoolAction::Resume).await,
        }
    }
}

#[derive(Clone, Copy)]
enum PoolAction {
    Pause,
    Resume,
}

impl PoolAction {
    /// Pool status once the action completes
    fn target_status(self) -> &'static str {
        match self {
            Self::Pause => "Paused",
            Self::Resume => "Online",
        }
    }

    fn verb(self) -> &'static str {
        match self {
            Self::Pause => "Pause",
            Self::Resume => "Resume",
        }
    }
}

fn print_pool(pool: &SqlPool, use_json: bool) -> Result<()> {
    if use_json {
        return json::print_json(pool);
    }

    let props = &pool.properties;
    table::print_details(&[
        ("Name", or_none(pool.name.as_deref())),
        ("Location", pool.location.clone()),
        ("State", or_none(props.provisioning_state)),
        ("Status", or_none(props.status.as_deref())),
        (
            "Performance",
            or_none(pool.sku.as_ref().and_then(|s| s.name.as_deref())),
        ),
        ("Create mode", or_none(props.create_mode)),
        ("Collation", or_none(props.collation.as_deref())),
        ("Max size", or_none(props.max_size_bytes)),
    ]);
    Ok(())
}

async fn list_pools(args: SqlPoolListArgs, ctx: &Context, use_json: bool) -> Result<()> {
    let (rg, ws) = args.scope.resolve(ctx)?;
    let pools = ctx.client.management().list_sql_pools(&rg, &ws).await?;

    if use_json {
        json::print_json(&pools)?;
    } else {
        let mut tbl = table::create_table(&["NAME", "PERFORMANCE", "STATUS", "STATE"]);
        for pool in &pools {
            tbl.add_row(vec![
                or_none(pool.name.as_deref()),
                or_none(pool.sku.as_ref().and_then(|s| s.name.as_deref())),
                or_none(pool.properties.status.as_deref()),
                or_none(pool.properties.provisioning_state),
            ]);
        }
        table::print_table(tbl);
    }
    Ok(())
}

async fn show_pool(args: SqlPoolNameArgs, ctx: &Context, use_json: bool) -> Result<()> {
    let (rg, ws) = args.scope.resolve(ctx)?;
    let pool = ctx
        .client
        .management()
        .get_sql_pool(&rg, &ws, &args.name)
        .await?;
    print_pool(&pool, use_json)
}

async fn create_pool(args: SqlPoolCreateArgs, ctx: &Context, use_json: bool) -> Result<()> {
    let (rg, ws) = args.target.scope.resolve(ctx)?;
    let name = args.target.name.as_str();
    let mgmt = ctx.client.management();

    let options = SqlPoolCreateOptions {
        performance_level: args.performance_level,
        tags: parse_tags(&args.tags)?,
    };

    // The pool lives in its workspace's region
    let workspace = mgmt.get_workspace(&rg, &ws).await?;
    let body = options.into_pool(workspace.location);

    let accepted = mgmt.create_sql_pool(&rg, &ws, name, &body).await?;

    let what = format!("SQL pool '{}'", name);
    let (rg, ws) = (rg.as_str(), ws.as_str());
    match args
        .wait
        .settle(&what, accepted, || mgmt.get_sql_pool(rg, ws, name))
        .await?
    {
        Some(pool) => print_pool(&pool, use_json),
        None => {
            println!("Creation of {} accepted", what);
            Ok(())
        }
    }
}

async fn update_pool(args: SqlPoolUpdateArgs, ctx: &Context, use_json: bool) -> Result<()> {
    let (rg, ws) = args.target.scope.resolve(ctx)?;
    let name = args.target.name.as_str();
    let mgmt = ctx.client.management();

    let options = SqlPoolUpdateOptions {
        sku_name: args.sku_name,
        tags: parse_tags(&args.tags)?,
    };

    let accepted = mgmt
        .update_sql_pool(&rg, &ws, name, &options.into())
        .await?;

    let what = format!("SQL pool '{}'", name);
    let (rg, ws) = (rg.as_str(), ws.as_str());
    match args
        .wait
        .settle(&what, accepted, || mgmt.get_sql_pool(rg, ws, name))
        .await?
    {
        Some(pool) => print_pool(&pool, use_json),
        None => {
            println!("Update of {} accepted", what);
            Ok(())
        }
    }
}

async fn delete_pool(args: SqlPoolDeleteArgs, ctx: &Context) -> Result<()> {
    let (rg, ws) = args.target.scope.resolve(ctx)?;
    let name = args.target.name.as_str();
    let what = format!("SQL pool '{}'", name);

    if !confirm_delete(&what, args.yes)? {
        return Ok(());
    }

    let mgmt = ctx.client.management();
    mgmt.delete_sql_pool(&rg, &ws, name).await?;

    let (rg, ws) = (rg.as_str(), ws.as_str());
    if args
        .wait
        .settle_deletion(&what, || mgmt.get_sql_pool(rg, ws, name))
        .await?
    {
        println!("Deleted {}", what);
    } else {
        println!("Deletion of {} accepted", what);
    }
    Ok(())
}

async fn pause_or_resume(
    args: SqlPoolActionArgs,
    ctx: &Context,
    action: PoolAction,
) -> Result<()> {
    let (rg, ws) = args.target.scope.resolve(ctx)?;
    let name = args.target.name.as_str();
    let mgmt = ctx.client.management();

    match action {
        PoolAction::Pause => mgmt.pause_sql_pool(&rg, &ws, name).await?,
        PoolAction::Resume => mgmt.resume_sql_pool(&rg, &ws, name).await?,
    }

    let what = format!("SQL pool '{}'", name);
    if args.wait.no_wait {
        println!("{} of {} accepted", action.verb(), what);
        return Ok(());
    }

    let target = action.target_status();
    let (rg, ws) = (rg.as_str(), ws.as_str());
    wait_until(
        &what,
        args.wait.timeout(),
        POLL_INTERVAL,
        || mgmt.get_sql_pool(rg, ws, name),
        |pool: Option<&SqlPool>| match pool {
            Some(pool) => Ok(pool
                .properties
                .status
                .as_deref()
                .is_some_and(|s| s.eq_ignore_ascii_case(target))),
            None => Err(anyhow::anyhow!("{} no longer exists", what)),
        },
    )
    .await?;

    println!("{} is {}", what, target);
    Ok(())
}
