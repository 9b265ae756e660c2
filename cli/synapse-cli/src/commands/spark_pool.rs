// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Spark pool management commands

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Subcommand};
use synapse_api::{
    AutoPauseOptions, AutoScaleOptions, BigDataPool, DEFAULT_SPARK_EVENTS_FOLDER,
    DEFAULT_SPARK_LOG_FOLDER, LibraryRequirements, NodeSize, NodeSizeFamily,
    SparkPoolCreateOptions, SparkPoolUpdateOptions,
};

use super::wait::WaitArgs;
use super::{Context, WorkspaceScope, confirm_delete, parse_tags};
use crate::output::{json, or_none, table};

#[derive(Subcommand, Clone)]
pub enum SparkPoolCommand {
    /// List Spark pools in a workspace
    #[command(visible_alias = "ls")]
    List(SparkPoolListArgs),
    /// Show a Spark pool
    Show(SparkPoolNameArgs),
    /// Create a Spark pool
    Create(SparkPoolCreateArgs),
    /// Update a Spark pool
    Update(SparkPoolUpdateArgs),
    /// Delete a Spark pool
    #[command(visible_alias = "rm")]
    Delete(SparkPoolDeleteArgs),
}

#[derive(Args, Clone)]
pub struct SparkPoolListArgs {
    #[command(flatten)]
    pub scope: WorkspaceScope,
}

#[derive(Args, Clone)]
pub struct SparkPoolNameArgs {
    #[command(flatten)]
    pub scope: WorkspaceScope,
    /// Spark pool name
    #[arg(long, short = 'n')]
    pub name: String,
}

/// Auto-scale and auto-pause flags shared by create and update
#[derive(Args, Clone, Debug, Default)]
pub struct ScalingArgs {
    /// Enable or disable auto-scale
    #[arg(long)]
    pub enable_auto_scale: Option<bool>,
    /// Minimum node count for auto-scale
    #[arg(long)]
    pub min_node_count: Option<i32>,
    /// Maximum node count for auto-scale
    #[arg(long)]
    pub max_node_count: Option<i32>,
    /// Enable or disable auto-pause
    #[arg(long)]
    pub enable_auto_pause: Option<bool>,
    /// Idle minutes before the pool pauses
    #[arg(long)]
    pub delay: Option<i32>,
}

impl ScalingArgs {
    fn auto_scale(&self) -> AutoScaleOptions {
        AutoScaleOptions {
            enabled: self.enable_auto_scale,
            min_node_count: self.min_node_count,
            max_node_count: self.max_node_count,
        }
    }

    fn auto_pause(&self) -> AutoPauseOptions {
        AutoPauseOptions {
            enabled: self.enable_auto_pause,
            delay_in_minutes: self.delay,
        }
    }
}

#[derive(Args, Clone)]
pub struct SparkPoolCreateArgs {
    #[command(flatten)]
    pub target: SparkPoolNameArgs,
    /// Spark version, e.g. 2.4
    #[arg(long)]
    pub spark_version: String,
    /// Node size
    #[arg(long, value_enum)]
    pub node_size: NodeSize,
    /// Number of nodes
    #[arg(long)]
    pub node_count: i32,
    /// Node size family
    #[arg(long, value_enum, default_value_t = NodeSizeFamily::MemoryOptimized)]
    pub node_size_family: NodeSizeFamily,
    #[command(flatten)]
    pub scaling: ScalingArgs,
    /// Folder for Spark events
    #[arg(long, default_value = DEFAULT_SPARK_EVENTS_FOLDER)]
    pub spark_events_folder: String,
    /// Default folder for Spark logs
    #[arg(long, default_value = DEFAULT_SPARK_LOG_FOLDER)]
    pub spark_log_folder: String,
    /// Library requirements file (e.g. requirements.txt)
    #[arg(long)]
    pub library_requirements_file: Option<PathBuf>,
    /// Tags (key=value, multiple allowed)
    #[arg(short = 't', long = "tag")]
    pub tags: Option<Vec<String>>,
    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Clone)]
pub struct SparkPoolUpdateArgs {
    #[command(flatten)]
    pub target: SparkPoolNameArgs,
    /// Node size
    #[arg(long, value_enum)]
    pub node_size: Option<NodeSize>,
    /// Number of nodes
    #[arg(long)]
    pub node_count: Option<i32>,
    #[command(flatten)]
    pub scaling: ScalingArgs,
    /// Library requirements file (e.g. requirements.txt)
    #[arg(long)]
    pub library_requirements_file: Option<PathBuf>,
    /// Tags (key=value, multiple allowed; replaces existing tags)
    #[arg(short = 't', long = "tag")]
    pub tags: Option<Vec<String>>,
    /// Stop running jobs if the change requires it
    #[arg(long)]
    pub force: bool,
    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Clone)]
pub struct SparkPoolDeleteArgs {
    #[command(flatten)]
    pub target: SparkPoolNameArgs,
    /// Skip confirmation
    #[arg(long, short)]
    pub yes: bool,
    #[command(flatten)]
    pub wait: WaitArgs,
}

impl SparkPoolCommand {
    pub async fn run(self, ctx: &Context, use_json: bool) -> Result<()> {
        match self {
            Self::List(args) => list_pools(args, ctx, use_json).await,
            Self::Show(args) => show_pool(args, ctx, use_json).await,
            Self::Create(args) => create_pool(args, ctx, use_json).await,
            Self::Update(args) => update_pool(args, ctx, use_json).await,
            Self::Delete(args) => delete_pool(args, ctx).await,
        }
    }
}

/// Attach a local requirements file as `{filename, content}`
pub fn read_library_requirements(path: &Path) -> Result<LibraryRequirements> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read library requirements file '{}': {}",
            path.display(),
            e
        )
    })?;
    Ok(LibraryRequirements {
        filename: path.display().to_string(),
        content,
        time: None,
    })
}

fn print_pool(pool: &BigDataPool, use_json: bool) -> Result<()> {
    if use_json {
        return json::print_json(pool);
    }

    let props = &pool.properties;
    let auto_scale = props.auto_scale.clone().unwrap_or_default();
    let auto_pause = props.auto_pause.clone().unwrap_or_default();
    table::print_details(&[
        ("Name", or_none(pool.name.as_deref())),
        ("Location", pool.location.clone()),
        ("State", or_none(props.provisioning_state)),
        ("Spark version", or_none(props.spark_version.as_deref())),
        ("Node size", or_none(props.node_size)),
        ("Node family", or_none(props.node_size_family)),
        ("Node count", or_none(props.node_count)),
        ("Auto-scale", or_none(auto_scale.enabled)),
        ("Min nodes", or_none(auto_scale.min_node_count)),
        ("Max nodes", or_none(auto_scale.max_node_count)),
        ("Auto-pause", or_none(auto_pause.enabled)),
        ("Pause delay", or_none(auto_pause.delay_in_minutes)),
        (
            "Requirements",
            or_none(props.library_requirements.as_ref().map(|r| r.filename.as_str())),
        ),
    ]);
    Ok(())
}

async fn list_pools(args: SparkPoolListArgs, ctx: &Context, use_json: bool) -> Result<()> {
    let (rg, ws) = args.scope.resolve(ctx)?;
    let pools = ctx.client.management().list_big_data_pools(&rg, &ws).await?;

    if use_json {
        json::print_json(&pools)?;
    } else {
        let mut tbl = table::create_table(&["NAME", "VERSION", "SIZE", "NODES", "STATE"]);
        for pool in &pools {
            let props = &pool.properties;
            tbl.add_row(vec![
                or_none(pool.name.as_deref()),
                or_none(props.spark_version.as_deref()),
                or_none(props.node_size),
                or_none(props.node_count),
                or_none(props.provisioning_state),
            ]);
        }
        table::print_table(tbl);
    }
    Ok(())
}

async fn show_pool(args: SparkPoolNameArgs, ctx: &Context, use_json: bool) -> Result<()> {
    let (rg, ws) = args.scope.resolve(ctx)?;
    let pool = ctx
        .client
        .management()
        .get_big_data_pool(&rg, &ws, &args.name)
        .await?;
    print_pool(&pool, use_json)
}

async fn create_pool(args: SparkPoolCreateArgs, ctx: &Context, use_json: bool) -> Result<()> {
    let (rg, ws) = args.target.scope.resolve(ctx)?;
    let name = args.target.name.as_str();
    let mgmt = ctx.client.management();

    let library_requirements = args
        .library_requirements_file
        .as_deref()
        .map(read_library_requirements)
        .transpose()?;

    let mut options = SparkPoolCreateOptions::new(args.spark_version, args.node_size, args.node_count);
    options.node_size_family = args.node_size_family;
    options.auto_scale = args.scaling.auto_scale();
    options.auto_pause = args.scaling.auto_pause();
    options.spark_events_folder = args.spark_events_folder;
    options.default_spark_log_folder = args.spark_log_folder;
    options.library_requirements = library_requirements;
    options.tags = parse_tags(&args.tags)?;

    // The pool lives in its workspace's region
    let workspace = mgmt.get_workspace(&rg, &ws).await?;
    let body = options.into_pool(workspace.location);

    let accepted = mgmt
        .create_or_update_big_data_pool(&rg, &ws, name, &body, false)
        .await?;

    let what = format!("Spark pool '{}'", name);
    let (rg, ws) = (rg.as_str(), ws.as_str());
    match args
        .wait
        .settle(&what, accepted, || mgmt.get_big_data_pool(rg, ws, name))
        .await?
    {
        Some(pool) => print_pool(&pool, use_json),
        None => {
            println!("Creation of {} accepted", what);
            Ok(())
        }
    }
}

async fn update_pool(args: SparkPoolUpdateArgs, ctx: &Context, use_json: bool) -> Result<()> {
    let (rg, ws) = args.target.scope.resolve(ctx)?;
    let name = args.target.name.as_str();
    let mgmt = ctx.client.management();

    let options = SparkPoolUpdateOptions {
        node_size: args.node_size,
        node_count: args.node_count,
        auto_scale: args.scaling.auto_scale(),
        auto_pause: args.scaling.auto_pause(),
        library_requirements: args
            .library_requirements_file
            .as_deref()
            .map(read_library_requirements)
            .transpose()?,
        tags: parse_tags(&args.tags)?,
    };

    let mut pool = mgmt.get_big_data_pool(&rg, &ws, name).await?;
    options.apply(&mut pool);

    let accepted = mgmt
        .create_or_update_big_data_pool(&rg, &ws, name, &pool, args.force)
        .await?;

    let what = format!("Spark pool '{}'", name);
    let (rg, ws) = (rg.as_str(), ws.as_str());
    match args
        .wait
        .settle(&what, accepted, || mgmt.get_big_data_pool(rg, ws, name))
        .await?
    {
        Some(pool) => print_pool(&pool, use_json),
        None => {
            println!("Update of {} accepted", what);
            Ok(())
        }
    }
}

async fn delete_pool(args: SparkPoolDeleteArgs, ctx: &Context) -> Result<()> {
    let (rg, ws) = args.target.scope.resolve(ctx)?;
    let name = args.target.name.as_str();
    let what = format!("Spark pool '{}'", name);

    if !confirm_delete(&what, args.yes)? {
        return Ok(());
    }

    let mgmt = ctx.client.management();
    mgmt.delete_big_data_pool(&rg, &ws, name).await?;

    let (rg, ws) = (rg.as_str(), ws.as_str());
    if args
        .wait
        .settle_deletion(&what, || mgmt.get_big_data_pool(rg, ws, name))
        .await?
    {
        println!("Deleted {}", what);
    } else {
        println!("Deletion of {} accepted", what);
    }
    Ok(())
}
