// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Workspace firewall rule commands

use anyhow::Result;
use clap::{Args, Subcommand};
use synapse_api::{FirewallRule, FirewallRuleOptions};

use super::wait::WaitArgs;
use super::{Context, WorkspaceScope, confirm_delete};
use crate::output::{json, or_none, table};

#[derive(Subcommand, Clone)]
pub enum FirewallRuleCommand {
    /// List firewall rules of a workspace
    #[command(visible_alias = "ls")]
    List(FirewallRuleListArgs),
    /// Show a firewall rule
    Show(FirewallRuleNameArgs),
    /// Create a firewall rule
    Create(FirewallRuleCreateArgs),
    /// Change a firewall rule's address range
    Update(FirewallRuleUpdateArgs),
    /// Delete a firewall rule
    #[command(visible_alias = "rm")]
    Delete(FirewallRuleDeleteArgs),
}

#[derive(Args, Clone)]
pub struct FirewallRuleListArgs {
    #[command(flatten)]
    pub scope: WorkspaceScope,
}

#[derive(Args, Clone)]
pub struct FirewallRuleNameArgs {
    #[command(flatten)]
    pub scope: WorkspaceScope,
    /// Rule name
    #[arg(long, short = 'n')]
    pub name: String,
}

#[derive(Args, Clone)]
pub struct FirewallRuleCreateArgs {
    #[command(flatten)]
    pub target: FirewallRuleNameArgs,
    /// First IPv4 address of the allowed range
    #[arg(long)]
    pub start_ip_address: String,
    /// Last IPv4 address of the allowed range
    #[arg(long)]
    pub end_ip_address: String,
    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Clone)]
pub struct FirewallRuleUpdateArgs {
    #[command(flatten)]
    pub target: FirewallRuleNameArgs,
    /// First IPv4 address of the allowed range
    #[arg(long)]
    pub start_ip_address: Option<String>,
    /// Last IPv4 address of the allowed range
    #[arg(long)]
    pub end_ip_address: Option<String>,
    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Clone)]
pub struct FirewallRuleDeleteArgs {
    #[command(flatten)]
    pub target: FirewallRuleNameArgs,
    /// Skip confirmation
    #[arg(long, short)]
    pub yes: bool,
    #[command(flatten)]
    pub wait: WaitArgs,
}

impl FirewallRuleCommand {
    pub async fn run(self, ctx: &Context, use_json: bool) -> Result<()> {
        match self {
            Self::List(args) => list_rules(args, ctx, use_json).await,
            Self::Show(args) => show_rule(args, ctx, use_json).await,
            Self::Create(args) => {
                let options = FirewallRuleOptions {
                    start_ip_address: args.start_ip_address,
                    end_ip_address: args.end_ip_address,
                };
                put_rule(&args.target, options, &args.wait, ctx, use_json).await
            }
            Self::Update(args) => update_rule(args, ctx, use_json).await,
            Self::Delete(args) => delete_rule(args, ctx).await,
        }
    }
}

/// Fill omitted addresses from the stored rule
pub fn merge_update(
    existing: &FirewallRule,
    start_ip_address: Option<String>,
    end_ip_address: Option<String>,
) -> Result<FirewallRuleOptions> {
    let props = &existing.properties;
    let start_ip_address = start_ip_address
        .or_else(|| props.start_ip_address.clone())
        .ok_or_else(|| {
            anyhow::anyhow!("Firewall rule has no start address; pass --start-ip-address")
        })?;
    let end_ip_address = end_ip_address
        .or_else(|| props.end_ip_address.clone())
        .ok_or_else(|| anyhow::anyhow!("Firewall rule has no end address; pass --end-ip-address"))?;

    Ok(FirewallRuleOptions {
        start_ip_address,
        end_ip_address,
    })
}

fn print_rule(rule: &FirewallRule, use_json: bool) -> Result<()> {
    if use_json {
        return json::print_json(rule);
    }

    let props = &rule.properties;
    table::print_details(&[
        ("Name", or_none(rule.name.as_deref())),
        ("Start IP", or_none(props.start_ip_address.as_deref())),
        ("End IP", or_none(props.end_ip_address.as_deref())),
        ("State", or_none(props.provisioning_state)),
    ]);
    Ok(())
}

async fn list_rules(args: FirewallRuleListArgs, ctx: &Context, use_json: bool) -> Result<()> {
    let (rg, ws) = args.scope.resolve(ctx)?;
    let rules = ctx.client.management().list_firewall_rules(&rg, &ws).await?;

    if use_json {
        json::print_json(&rules)?;
    } else {
        let mut tbl = table::create_table(&["NAME", "START IP", "END IP", "STATE"]);
        for rule in &rules {
            tbl.add_row(vec![
                or_none(rule.name.as_deref()),
                or_none(rule.properties.start_ip_address.as_deref()),
                or_none(rule.properties.end_ip_address.as_deref()),
                or_none(rule.properties.provisioning_state),
            ]);
        }
        table::print_table(tbl);
    }
    Ok(())
}

async fn show_rule(args: FirewallRuleNameArgs, ctx: &Context, use_json: bool) -> Result<()> {
    let (rg, ws) = args.scope.resolve(ctx)?;
    let rule = ctx
        .client
        .management()
        .get_firewall_rule(&rg, &ws, &args.name)
        .await?;
    print_rule(&rule, use_json)
}

async fn put_rule(
    target: &FirewallRuleNameArgs,
    options: FirewallRuleOptions,
    wait: &WaitArgs,
    ctx: &Context,
    use_json: bool,
) -> Result<()> {
    let (rg, ws) = target.scope.resolve(ctx)?;
    let name = target.name.as_str();
    let mgmt = ctx.client.management();

    let accepted = mgmt
        .create_or_update_firewall_rule(&rg, &ws, name, &options.into())
        .await?;

    let what = format!("firewall rule '{}'", name);
    let (rg, ws) = (rg.as_str(), ws.as_str());
    match wait
        .settle(&what, accepted, || mgmt.get_firewall_rule(rg, ws, name))
        .await?
    {
        Some(rule) => print_rule(&rule, use_json),
        None => {
            println!("Request for {} accepted", what);
            Ok(())
        }
    }
}

async fn update_rule(args: FirewallRuleUpdateArgs, ctx: &Context, use_json: bool) -> Result<()> {
    let (rg, ws) = args.target.scope.resolve(ctx)?;

    let options = if let (Some(start), Some(end)) =
        (args.start_ip_address.clone(), args.end_ip_address.clone())
    {
        FirewallRuleOptions {
            start_ip_address: start,
            end_ip_address: end,
        }
    } else {
        let existing = ctx
            .client
            .management()
            .get_firewall_rule(&rg, &ws, &args.target.name)
            .await?;
        merge_update(&existing, args.start_ip_address, args.end_ip_address)?
    };

    put_rule(&args.target, options, &args.wait, ctx, use_json).await
}

async fn delete_rule(args: FirewallRuleDeleteArgs, ctx: &Context) -> Result<()> {
    let (rg, ws) = args.target.scope.resolve(ctx)?;
    let name = args.target.name.as_str();
    let what = format!("firewall rule '{}'", name);

    if !confirm_delete(&what, args.yes)? {
        return Ok(());
    }

    let mgmt = ctx.client.management();
    mgmt.delete_firewall_rule(&rg, &ws, name).await?;

    let (rg, ws) = (rg.as_str(), ws.as_str());
    if args
        .wait
        .settle_deletion(&what, || mgmt.get_firewall_rule(rg, ws, name))
        .await?
    {
        println!("Deleted {}", what);
    } else {
        println!("Deletion of {} accepted", what);
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use synapse_api::FirewallRuleProperties;

    fn stored() -> FirewallRule {
        FirewallRule {
            name: Some("office".to_string()),
            properties: FirewallRuleProperties {
                start_ip_address: Some("10.0.0.1".to_string()),
                end_ip_address: Some("10.0.0.255".to_string()),
                provisioning_state: None,
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_merge_keeps_stored_end() {
        let merged = merge_update(&stored(), Some("10.0.0.10".to_string()), None).unwrap();
        assert_eq!(merged.start_ip_address, "10.0.0.10");
        assert_eq!(merged.end_ip_address, "10.0.0.255");
    }

    #[test]
    fn test_merge_keeps_stored_start() {
        let merged = merge_update(&stored(), None, Some("10.0.1.0".to_string())).unwrap();
        assert_eq!(merged.start_ip_address, "10.0.0.1");
        assert_eq!(merged.end_ip_address, "10.0.1.0");
    }

    #[test]
    fn test_merge_without_stored_address_fails() {
        let rule = FirewallRule::default();
        let err = merge_update(&rule, None, Some("10.0.1.0".to_string())).unwrap_err();
        assert!(err.to_string().contains("--start-ip-address"));
    }
}
