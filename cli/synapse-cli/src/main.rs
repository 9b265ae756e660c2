// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Synapse CLI - manage analytics workspaces, their pools, and access control

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod output;

use commands::{
    Context, FirewallRuleCommand, ProfileCommand, RoleCommand, SparkPoolCommand, SqlPoolCommand,
    WorkspaceCommand,
};

#[derive(Parser)]
#[command(
    name = "synapse",
    version,
    about = "Synapse workspace management CLI",
    long_about = "Command-line interface for Synapse workspaces, Spark and SQL pools, \
                  firewall rules, and workspace role assignments"
)]
struct Cli {
    /// Profile to use
    #[arg(short, long, global = true, env = "SYNAPSE_PROFILE")]
    profile: Option<String>,

    /// Subscription ID override
    #[arg(short, long, global = true)]
    subscription: Option<String>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage connection profiles
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },

    /// Manage workspaces
    #[command(alias = "ws")]
    Workspace {
        #[command(subcommand)]
        command: WorkspaceCommand,
    },

    /// Manage Spark pools
    #[command(alias = "spark")]
    SparkPool {
        #[command(subcommand)]
        command: SparkPoolCommand,
    },

    /// Manage SQL pools
    #[command(alias = "sql")]
    SqlPool {
        #[command(subcommand)]
        command: SqlPoolCommand,
    },

    /// Manage workspace firewall rules
    #[command(alias = "fwrule")]
    FirewallRule {
        #[command(subcommand)]
        command: FirewallRuleCommand,
    },

    /// Manage workspace role definitions and assignments
    Role {
        #[command(subcommand)]
        command: RoleCommand,
    },
}

impl Cli {
    /// Resolve the profile and apply command-line overrides
    fn context(&self) -> Result<Context> {
        let mut profile = config::resolve_profile(self.profile.as_deref())?;
        if let Some(subscription) = &self.subscription {
            profile.subscription_id = subscription.clone();
        }
        tracing::debug!(
            profile = %profile.name,
            subscription = %profile.subscription_id,
            "using profile"
        );
        Context::new(profile)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so --json output stays parseable
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("synapse=debug,synapse_client=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    match &cli.command {
        Commands::Profile { command } => command.clone().run(cli.json),
        Commands::Workspace { command } => {
            let ctx = cli.context()?;
            command.clone().run(&ctx, cli.json).await
        }
        Commands::SparkPool { command } => {
            let ctx = cli.context()?;
            command.clone().run(&ctx, cli.json).await
        }
        Commands::SqlPool { command } => {
            let ctx = cli.context()?;
            command.clone().run(&ctx, cli.json).await
        }
        Commands::FirewallRule { command } => {
            let ctx = cli.context()?;
            command.clone().run(&ctx, cli.json).await
        }
        Commands::Role { command } => {
            let ctx = cli.context()?;
            command.clone().run(&ctx, cli.json).await
        }
    }
}
