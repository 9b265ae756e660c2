// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Profile management types

use serde::{Deserialize, Serialize};

use super::paths::ConfigDir;

/// Storage endpoint suffix of the public cloud
pub const DEFAULT_STORAGE_ENDPOINT_SUFFIX: &str = "core.windows.net";

fn default_tenant() -> String {
    synapse_client::DEFAULT_TENANT.to_string()
}

fn default_management_endpoint() -> String {
    synapse_client::DEFAULT_MANAGEMENT_ENDPOINT.to_string()
}

fn default_dev_endpoint_suffix() -> String {
    synapse_client::DEFAULT_DEV_ENDPOINT_SUFFIX.to_string()
}

fn default_graph_endpoint() -> String {
    synapse_client::DEFAULT_GRAPH_ENDPOINT.to_string()
}

fn default_storage_endpoint_suffix() -> String {
    DEFAULT_STORAGE_ENDPOINT_SUFFIX.to_string()
}

/// A connection profile
///
/// Profiles never hold credentials; tokens come from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Profile name
    pub name: String,

    /// Subscription all management requests are scoped to
    #[serde(rename = "subscriptionId")]
    pub subscription_id: String,

    /// Directory tenant used for principal lookups
    #[serde(default = "default_tenant")]
    pub tenant: String,

    /// Default resource group (optional)
    #[serde(rename = "resourceGroup", skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<String>,

    #[serde(rename = "managementEndpoint", default = "default_management_endpoint")]
    pub management_endpoint: String,

    /// Suffix of the per-workspace access-control endpoint
    #[serde(rename = "devEndpointSuffix", default = "default_dev_endpoint_suffix")]
    pub dev_endpoint_suffix: String,

    #[serde(rename = "graphEndpoint", default = "default_graph_endpoint")]
    pub graph_endpoint: String,

    /// Suffix used to build data lake account URLs
    #[serde(
        rename = "storageEndpointSuffix",
        default = "default_storage_endpoint_suffix"
    )]
    pub storage_endpoint_suffix: String,
}

impl Profile {
    /// Create a new profile with public cloud endpoints
    pub fn new(name: String, subscription_id: String) -> Self {
        Self {
            name,
            subscription_id,
            tenant: default_tenant(),
            resource_group: None,
            management_endpoint: default_management_endpoint(),
            dev_endpoint_suffix: default_dev_endpoint_suffix(),
            graph_endpoint: default_graph_endpoint(),
            storage_endpoint_suffix: default_storage_endpoint_suffix(),
        }
    }

    /// Load a profile from a file
    pub fn load(name: &str) -> anyhow::Result<Self> {
        let path = ConfigDir::locate()?.profile_file(name);
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Failed to read profile '{}': {}", name, e))?;
        let profile: Profile = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse profile '{}': {}", name, e))?;
        Ok(profile)
    }

    /// Save the profile to a file
    pub fn save(&self) -> anyhow::Result<()> {
        let dir = ConfigDir::locate()?;
        dir.create()?;
        let path = dir.profile_file(&self.name);
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Delete the profile file
    pub fn delete(name: &str) -> anyhow::Result<()> {
        let path = ConfigDir::locate()?.profile_file(name);
        std::fs::remove_file(&path)
            .map_err(|e| anyhow::anyhow!("Failed to delete profile '{}': {}", name, e))?;
        Ok(())
    }

    /// List all available profiles
    pub fn list_all() -> anyhow::Result<Vec<String>> {
        let profiles_dir = ConfigDir::locate()?.profiles_dir();
        if !profiles_dir.exists() {
            return Ok(vec![]);
        }

        let mut profiles = vec![];
        for entry in std::fs::read_dir(&profiles_dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json")
                && let Some(stem) = path.file_stem()
            {
                profiles.push(stem.to_string_lossy().to_string());
            }
        }
        profiles.sort();
        Ok(profiles)
    }
}

/// Main configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Current active profile name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Previous profile (for `synapse profile set-current -`)
    #[serde(rename = "oldProfile", skip_serializing_if = "Option::is_none")]
    pub old_profile: Option<String>,
}

impl Config {
    /// Load the main config file
    pub fn load() -> anyhow::Result<Self> {
        let path = ConfigDir::locate()?.config_file();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save the main config file
    pub fn save(&self) -> anyhow::Result<()> {
        let dir = ConfigDir::locate()?;
        dir.create()?;
        let path = dir.config_file();
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Get the current profile name
    pub fn current_profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    /// Set the current profile
    pub fn set_current_profile(&mut self, name: &str) {
        self.old_profile = self.profile.take();
        self.profile = Some(name.to_string());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_minimal_profile_gets_public_cloud_defaults() {
        let profile: Profile =
            serde_json::from_str(r#"{"name": "dev", "subscriptionId": "sub-1"}"#).unwrap();
        assert_eq!(profile, Profile::new("dev".into(), "sub-1".into()));
        assert_eq!(profile.tenant, "myorganization");
        assert_eq!(profile.storage_endpoint_suffix, "core.windows.net");
    }

    #[test]
    fn test_resource_group_omitted_when_unset() {
        let json = serde_json::to_value(Profile::new("dev".into(), "sub-1".into())).unwrap();
        assert!(json.get("resourceGroup").is_none());
        assert_eq!(json["subscriptionId"], "sub-1");
    }

    #[test]
    fn test_set_current_profile_remembers_previous() {
        let mut config = Config::default();
        config.set_current_profile("a");
        config.set_current_profile("b");
        assert_eq!(config.current_profile(), Some("b"));
        assert_eq!(config.old_profile.as_deref(), Some("a"));
    }
}
