// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Configuration management

pub mod paths;
pub mod profile;

pub use profile::{Config, Profile};

use anyhow::Result;
use secrecy::SecretString;
use synapse_client::{AuthConfig, ClientConfig};

/// Name of the implicit profile built from environment variables
pub const ENV_PROFILE: &str = "env";

/// Build an "env" profile from environment variables
pub fn env_profile() -> Result<Profile> {
    let subscription_id = std::env::var("SYNAPSE_SUBSCRIPTION_ID")
        .map_err(|_| anyhow::anyhow!("SYNAPSE_SUBSCRIPTION_ID must be set"))?;

    let mut profile = Profile::new(ENV_PROFILE.to_string(), subscription_id);

    if let Ok(tenant) = std::env::var("SYNAPSE_TENANT") {
        profile.tenant = tenant;
    }
    if let Ok(resource_group) = std::env::var("SYNAPSE_RESOURCE_GROUP") {
        profile.resource_group = Some(resource_group);
    }
    if let Ok(suffix) = std::env::var("SYNAPSE_STORAGE_ENDPOINT_SUFFIX") {
        profile.storage_endpoint_suffix = suffix;
    }

    Ok(profile)
}

/// Resolve which profile to use
///
/// Priority:
/// 1. CLI --profile argument
/// 2. SYNAPSE_PROFILE environment variable
/// 3. "env" if SYNAPSE_SUBSCRIPTION_ID is set
/// 4. Current profile from config.json
pub fn resolve_profile(cli_profile: Option<&str>) -> Result<Profile> {
    let named = cli_profile
        .map(str::to_string)
        .or_else(|| std::env::var("SYNAPSE_PROFILE").ok());

    if let Some(name) = named {
        if name == ENV_PROFILE {
            return env_profile();
        }
        return Profile::load(&name);
    }

    if std::env::var("SYNAPSE_SUBSCRIPTION_ID").is_ok() {
        return env_profile();
    }

    let config = Config::load()?;
    if let Some(name) = config.current_profile() {
        return Profile::load(name);
    }

    Err(anyhow::anyhow!(
        "No profile configured. Use 'synapse profile create' or set SYNAPSE_SUBSCRIPTION_ID."
    ))
}

fn env_token(var: &str) -> Option<SecretString> {
    std::env::var(var)
        .ok()
        .filter(|token| !token.is_empty())
        .map(SecretString::from)
}

/// Build client settings from a profile
///
/// Endpoint environment variables take precedence over the profile so a
/// stored profile can be pointed at a test server.
pub fn client_config(profile: &Profile) -> ClientConfig {
    ClientConfig {
        subscription_id: profile.subscription_id.clone(),
        tenant: profile.tenant.clone(),
        management_endpoint: std::env::var("SYNAPSE_MANAGEMENT_ENDPOINT")
            .unwrap_or_else(|_| profile.management_endpoint.clone()),
        dev_endpoint_suffix: profile.dev_endpoint_suffix.clone(),
        dev_endpoint: std::env::var("SYNAPSE_DEV_ENDPOINT").ok(),
        graph_endpoint: std::env::var("SYNAPSE_GRAPH_ENDPOINT")
            .unwrap_or_else(|_| profile.graph_endpoint.clone()),
        auth: AuthConfig {
            management: env_token("SYNAPSE_MANAGEMENT_TOKEN"),
            access_control: env_token("SYNAPSE_DEV_TOKEN"),
            graph: env_token("SYNAPSE_GRAPH_TOKEN"),
        },
    }
}
