// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Profile management commands

use anyhow::Result;
use clap::Subcommand;
use dialoguer::Input;

use crate::commands::confirm_delete;
use crate::config::{Config, ENV_PROFILE, Profile, env_profile, resolve_profile};
use crate::output::{json, or_none, table};

#[derive(Subcommand, Clone)]
pub enum ProfileCommand {
    /// List all profiles
    #[command(alias = "ls")]
    List,

    /// Show profile details
    Get {
        /// Profile name (defaults to the active profile)
        name: Option<String>,
    },

    /// Create a new profile
    Create {
        /// Profile name
        name: Option<String>,
        /// Subscription ID
        #[arg(long)]
        subscription_id: Option<String>,
        /// Directory tenant (domain or ID)
        #[arg(long)]
        tenant: Option<String>,
        /// Default resource group
        #[arg(long, short = 'g')]
        resource_group: Option<String>,
        /// Management endpoint
        #[arg(long)]
        management_endpoint: Option<String>,
        /// Access-control endpoint suffix
        #[arg(long)]
        dev_endpoint_suffix: Option<String>,
        /// Directory graph endpoint
        #[arg(long)]
        graph_endpoint: Option<String>,
        /// Storage endpoint suffix
        #[arg(long)]
        storage_endpoint_suffix: Option<String>,
        /// Make this the current profile
        #[arg(long)]
        current: bool,
    },

    /// Delete profile(s)
    #[command(alias = "rm")]
    Delete {
        /// Profile name(s)
        #[arg(required = true)]
        names: Vec<String>,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Set the current profile
    SetCurrent {
        /// Profile name (use '-' for previous)
        name: String,
    },
}

impl ProfileCommand {
    pub fn run(self, use_json: bool) -> Result<()> {
        match self {
            Self::List => list_profiles(use_json),
            Self::Get { name } => get_profile(name, use_json),
            Self::Create {
                name,
                subscription_id,
                tenant,
                resource_group,
                management_endpoint,
                dev_endpoint_suffix,
                graph_endpoint,
                storage_endpoint_suffix,
                current,
            } => {
                let name = match name {
                    Some(n) => n,
                    None => Input::new().with_prompt("Profile name").interact_text()?,
                };
                let subscription_id = match subscription_id {
                    Some(s) => s,
                    None => Input::new().with_prompt("Subscription ID").interact_text()?,
                };

                let mut profile = Profile::new(name, subscription_id);
                profile.resource_group = resource_group;
                if let Some(tenant) = tenant {
                    profile.tenant = tenant;
                }
                if let Some(endpoint) = management_endpoint {
                    profile.management_endpoint = endpoint;
                }
                if let Some(suffix) = dev_endpoint_suffix {
                    profile.dev_endpoint_suffix = suffix;
                }
                if let Some(endpoint) = graph_endpoint {
                    profile.graph_endpoint = endpoint;
                }
                if let Some(suffix) = storage_endpoint_suffix {
                    profile.storage_endpoint_suffix = suffix;
                }
                create_profile(profile, current)
            }
            Self::Delete { names, yes } => delete_profiles(&names, yes),
            Self::SetCurrent { name } => set_current_profile(&name),
        }
    }
}

fn list_profiles(use_json: bool) -> Result<()> {
    let current_name = resolve_profile(None).ok().map(|p| p.name);

    let mut profiles: Vec<Profile> = Vec::new();
    if let Ok(env) = env_profile() {
        profiles.push(env);
    }
    for name in Profile::list_all()? {
        match Profile::load(&name) {
            Ok(profile) => profiles.push(profile),
            Err(e) => tracing::warn!(profile = %name, error = %e, "skipping unreadable profile"),
        }
    }

    if use_json {
        json::print_json(&profiles)?;
    } else {
        let mut tbl =
            table::create_table(&["NAME", "CURR", "SUBSCRIPTION", "TENANT", "RESOURCE GROUP"]);
        for profile in &profiles {
            let marker = if current_name.as_deref() == Some(profile.name.as_str()) {
                "*"
            } else {
                ""
            };
            tbl.add_row(vec![
                profile.name.clone(),
                marker.to_string(),
                profile.subscription_id.clone(),
                profile.tenant.clone(),
                or_none(profile.resource_group.as_deref()),
            ]);
        }
        table::print_table(tbl);
    }
    Ok(())
}

fn get_profile(name: Option<String>, use_json: bool) -> Result<()> {
    let profile = match name.as_deref() {
        Some(ENV_PROFILE) => env_profile()?,
        Some(n) => Profile::load(n)?,
        None => resolve_profile(None)?,
    };

    if use_json {
        json::print_json(&profile)?;
    } else {
        table::print_details(&[
            ("Name", profile.name.clone()),
            ("Subscription", profile.subscription_id.clone()),
            ("Tenant", profile.tenant.clone()),
            ("Resource group", or_none(profile.resource_group.as_deref())),
            ("Management", profile.management_endpoint.clone()),
            ("Dev suffix", profile.dev_endpoint_suffix.clone()),
            ("Graph", profile.graph_endpoint.clone()),
            ("Storage suffix", profile.storage_endpoint_suffix.clone()),
        ]);
    }
    Ok(())
}

fn create_profile(profile: Profile, make_current: bool) -> Result<()> {
    if profile.name == ENV_PROFILE {
        return Err(anyhow::anyhow!(
            "'{}' is reserved for the environment profile",
            ENV_PROFILE
        ));
    }
    if Profile::list_all()?.contains(&profile.name) {
        return Err(anyhow::anyhow!("Profile '{}' already exists", profile.name));
    }

    profile.save()?;
    println!("Created profile '{}'", profile.name);

    // The first profile becomes current without asking
    let mut config = Config::load()?;
    if make_current || config.current_profile().is_none() {
        config.set_current_profile(&profile.name);
        config.save()?;
        println!("Set '{}' as current profile", profile.name);
    }
    Ok(())
}

fn delete_profiles(names: &[String], yes: bool) -> Result<()> {
    for name in names {
        if !confirm_delete(&format!("profile '{}'", name), yes)? {
            continue;
        }
        Profile::delete(name)?;
        println!("Deleted profile '{}'", name);
    }
    Ok(())
}

fn set_current_profile(name: &str) -> Result<()> {
    let mut config = Config::load()?;

    let name = if name == "-" {
        config
            .old_profile
            .clone()
            .ok_or_else(|| anyhow::anyhow!("No previous profile"))?
    } else {
        Profile::load(name)?;
        name.to_string()
    };

    config.set_current_profile(&name);
    config.save()?;
    println!("Current profile: {}", name);
    Ok(())
}
