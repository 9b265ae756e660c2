// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Typed options for building management requests
//!
//! Each create/update verb collects its inputs into one of these structures
//! and converts it into the wire body. Defaults match the service's own
//! defaults for new resources.

use crate::types::{
    AutoPauseProperties, AutoScaleProperties, BigDataPool, BigDataPoolProperties,
    DataLakeStorageAccountDetails, FirewallRule, FirewallRuleProperties, LibraryRequirements,
    ManagedIdentity, NodeSize, NodeSizeFamily, Sku, SqlCreateMode, SqlPool, SqlPoolPatchInfo,
    SqlPoolProperties, Tags, Workspace, WorkspacePatchInfo, WorkspacePatchProperties,
    WorkspaceProperties,
};

/// Default folder for Spark event logs
pub const DEFAULT_SPARK_EVENTS_FOLDER: &str = "/events";

/// Default folder for Spark driver logs
pub const DEFAULT_SPARK_LOG_FOLDER: &str = "/logs";

/// Inputs for creating a workspace
#[derive(Debug, Clone)]
pub struct WorkspaceCreateOptions {
    /// Storage account name (not a resource ID)
    pub storage_account: String,
    /// File system within the storage account
    pub file_system: String,
    /// SQL administrator login
    pub sql_admin_login_user: String,
    /// SQL administrator password
    pub sql_admin_login_password: String,
    /// Azure region
    pub location: String,
    /// Resource tags
    pub tags: Option<Tags>,
}

impl WorkspaceCreateOptions {
    /// DFS endpoint URL of the default storage account
    pub fn account_url(&self, storage_endpoint_suffix: &str) -> String {
        format!(
            "https://{}.dfs.{}",
            self.storage_account, storage_endpoint_suffix
        )
    }

    /// Build the workspace body with a system-assigned identity
    pub fn into_workspace(self, storage_endpoint_suffix: &str) -> Workspace {
        let account_url = self.account_url(storage_endpoint_suffix);
        Workspace {
            location: self.location,
            tags: self.tags,
            identity: Some(ManagedIdentity::system_assigned()),
            properties: WorkspaceProperties {
                default_data_lake_storage: Some(DataLakeStorageAccountDetails {
                    account_url,
                    filesystem: self.file_system,
                }),
                sql_administrator_login: Some(self.sql_admin_login_user),
                sql_administrator_login_password: Some(self.sql_admin_login_password),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Inputs for updating a workspace
#[derive(Debug, Clone, Default)]
pub struct WorkspaceUpdateOptions {
    /// New SQL administrator password
    pub sql_admin_login_password: Option<String>,
    /// Replacement tags
    pub tags: Option<Tags>,
}

impl From<WorkspaceUpdateOptions> for WorkspacePatchInfo {
    fn from(opts: WorkspaceUpdateOptions) -> Self {
        Self {
            tags: opts.tags,
            properties: opts
                .sql_admin_login_password
                .map(|password| WorkspacePatchProperties {
                    sql_administrator_login_password: Some(password),
                }),
        }
    }
}

/// Auto-scale inputs; `None` fields are left to the service
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoScaleOptions {
    pub enabled: Option<bool>,
    pub min_node_count: Option<i32>,
    pub max_node_count: Option<i32>,
}

/// Auto-pause inputs; `None` fields are left to the service
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoPauseOptions {
    pub enabled: Option<bool>,
    pub delay_in_minutes: Option<i32>,
}

impl From<AutoScaleOptions> for AutoScaleProperties {
    fn from(opts: AutoScaleOptions) -> Self {
        Self {
            enabled: opts.enabled,
            min_node_count: opts.min_node_count,
            max_node_count: opts.max_node_count,
        }
    }
}

impl From<AutoPauseOptions> for AutoPauseProperties {
    fn from(opts: AutoPauseOptions) -> Self {
        Self {
            enabled: opts.enabled,
            delay_in_minutes: opts.delay_in_minutes,
        }
    }
}

/// Inputs for creating a Spark pool
#[derive(Debug, Clone)]
pub struct SparkPoolCreateOptions {
    /// Spark version
    pub spark_version: String,
    /// Node size
    pub node_size: NodeSize,
    /// Node count
    pub node_count: i32,
    /// Node size family (default: MemoryOptimized)
    pub node_size_family: NodeSizeFamily,
    /// Auto-scale settings
    pub auto_scale: AutoScaleOptions,
    /// Auto-pause settings
    pub auto_pause: AutoPauseOptions,
    /// Spark events folder (default: /events)
    pub spark_events_folder: String,
    /// Default Spark log folder (default: /logs)
    pub default_spark_log_folder: String,
    /// Library requirements already read from disk
    pub library_requirements: Option<LibraryRequirements>,
    /// Resource tags
    pub tags: Option<Tags>,
}

impl SparkPoolCreateOptions {
    /// Options with the service defaults for everything but the required fields
    pub fn new(spark_version: impl Into<String>, node_size: NodeSize, node_count: i32) -> Self {
        Self {
            spark_version: spark_version.into(),
            node_size,
            node_count,
            node_size_family: NodeSizeFamily::default(),
            auto_scale: AutoScaleOptions::default(),
            auto_pause: AutoPauseOptions::default(),
            spark_events_folder: DEFAULT_SPARK_EVENTS_FOLDER.to_string(),
            default_spark_log_folder: DEFAULT_SPARK_LOG_FOLDER.to_string(),
            library_requirements: None,
            tags: None,
        }
    }

    /// Build the pool body in the given region
    pub fn into_pool(self, location: String) -> BigDataPool {
        BigDataPool {
            location,
            tags: self.tags,
            properties: BigDataPoolProperties {
                spark_version: Some(self.spark_version),
                node_size: Some(self.node_size),
                node_size_family: Some(self.node_size_family),
                node_count: Some(self.node_count),
                auto_scale: Some(self.auto_scale.into()),
                auto_pause: Some(self.auto_pause.into()),
                spark_events_folder: Some(self.spark_events_folder),
                default_spark_log_folder: Some(self.default_spark_log_folder),
                library_requirements: self.library_requirements,
                provisioning_state: None,
            },
            ..Default::default()
        }
    }
}

/// Inputs for updating a Spark pool; only supplied fields change
#[derive(Debug, Clone, Default)]
pub struct SparkPoolUpdateOptions {
    pub node_size: Option<NodeSize>,
    pub node_count: Option<i32>,
    pub auto_scale: AutoScaleOptions,
    pub auto_pause: AutoPauseOptions,
    pub library_requirements: Option<LibraryRequirements>,
    pub tags: Option<Tags>,
}

impl SparkPoolUpdateOptions {
    /// Patch an existing pool in place
    ///
    /// Existing auto-scale and auto-pause blocks are updated field by field;
    /// a missing block is created from the supplied options.
    pub fn apply(self, pool: &mut BigDataPool) {
        let props = &mut pool.properties;

        if let Some(node_size) = self.node_size {
            props.node_size = Some(node_size);
        }
        if let Some(node_count) = self.node_count {
            props.node_count = Some(node_count);
        }
        if let Some(requirements) = self.library_requirements {
            props.library_requirements = Some(requirements);
        }
        if let Some(tags) = self.tags {
            pool.tags = Some(tags);
        }

        match props.auto_scale.as_mut() {
            Some(auto_scale) => {
                if let Some(enabled) = self.auto_scale.enabled {
                    auto_scale.enabled = Some(enabled);
                }
                if let Some(min) = self.auto_scale.min_node_count {
                    auto_scale.min_node_count = Some(min);
                }
                if let Some(max) = self.auto_scale.max_node_count {
                    auto_scale.max_node_count = Some(max);
                }
            }
            None => props.auto_scale = Some(self.auto_scale.into()),
        }

        match props.auto_pause.as_mut() {
            Some(auto_pause) => {
                if let Some(enabled) = self.auto_pause.enabled {
                    auto_pause.enabled = Some(enabled);
                }
                if let Some(delay) = self.auto_pause.delay_in_minutes {
                    auto_pause.delay_in_minutes = Some(delay);
                }
            }
            None => props.auto_pause = Some(self.auto_pause.into()),
        }
    }
}

/// Inputs for creating a SQL pool
#[derive(Debug, Clone)]
pub struct SqlPoolCreateOptions {
    /// Performance level, used as the SKU name (e.g. "DW1000c")
    pub performance_level: String,
    /// Resource tags
    pub tags: Option<Tags>,
}

impl SqlPoolCreateOptions {
    /// Build the pool body in the given region
    pub fn into_pool(self, location: String) -> SqlPool {
        SqlPool {
            location,
            tags: self.tags,
            sku: Some(Sku::named(self.performance_level)),
            properties: SqlPoolProperties {
                create_mode: Some(SqlCreateMode::Default),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Inputs for updating a SQL pool
#[derive(Debug, Clone, Default)]
pub struct SqlPoolUpdateOptions {
    /// New performance level
    pub sku_name: Option<String>,
    /// Replacement tags
    pub tags: Option<Tags>,
}

impl From<SqlPoolUpdateOptions> for SqlPoolPatchInfo {
    fn from(opts: SqlPoolUpdateOptions) -> Self {
        Self {
            tags: opts.tags,
            sku: opts.sku_name.map(Sku::named),
        }
    }
}

/// Inputs for creating or replacing a firewall rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirewallRuleOptions {
    pub start_ip_address: String,
    pub end_ip_address: String,
}

impl From<FirewallRuleOptions> for FirewallRule {
    fn from(opts: FirewallRuleOptions) -> Self {
        Self {
            properties: FirewallRuleProperties {
                start_ip_address: Some(opts.start_ip_address),
                end_ip_address: Some(opts.end_ip_address),
                provisioning_state: None,
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_workspace_account_url() {
        let opts = WorkspaceCreateOptions {
            storage_account: "mystorage".to_string(),
            file_system: "fs".to_string(),
            sql_admin_login_user: "admin".to_string(),
            sql_admin_login_password: "secret".to_string(),
            location: "eastus".to_string(),
            tags: None,
        };
        let ws = opts.into_workspace("core.windows.net");
        let storage = ws.properties.default_data_lake_storage.unwrap();
        assert_eq!(storage.account_url, "https://mystorage.dfs.core.windows.net");
        assert_eq!(storage.filesystem, "fs");
        assert_eq!(ws.identity.unwrap().identity_type, "SystemAssigned");
    }

    #[test]
    fn test_spark_pool_defaults() {
        let pool = SparkPoolCreateOptions::new("2.4", NodeSize::Medium, 3).into_pool("westus".into());
        let props = pool.properties;
        assert_eq!(props.node_size_family, Some(NodeSizeFamily::MemoryOptimized));
        assert_eq!(props.spark_events_folder.as_deref(), Some("/events"));
        assert_eq!(props.default_spark_log_folder.as_deref(), Some("/logs"));
        assert_eq!(pool.location, "westus");
    }

    #[test]
    fn test_spark_pool_update_only_touches_supplied_fields() {
        let mut pool = SparkPoolCreateOptions::new("2.4", NodeSize::Small, 3).into_pool("westus".into());
        pool.properties.auto_scale = Some(AutoScaleProperties {
            enabled: Some(true),
            min_node_count: Some(3),
            max_node_count: Some(10),
        });

        let update = SparkPoolUpdateOptions {
            node_count: Some(5),
            auto_scale: AutoScaleOptions {
                max_node_count: Some(20),
                ..Default::default()
            },
            ..Default::default()
        };
        update.apply(&mut pool);

        assert_eq!(pool.properties.node_size, Some(NodeSize::Small));
        assert_eq!(pool.properties.node_count, Some(5));
        assert_eq!(
            pool.properties.auto_scale,
            Some(AutoScaleProperties {
                enabled: Some(true),
                min_node_count: Some(3),
                max_node_count: Some(20),
            })
        );
    }

    #[test]
    fn test_spark_pool_update_creates_missing_blocks() {
        let mut pool = BigDataPool::default();
        let update = SparkPoolUpdateOptions {
            auto_pause: AutoPauseOptions {
                enabled: Some(true),
                delay_in_minutes: Some(15),
            },
            ..Default::default()
        };
        update.apply(&mut pool);

        assert_eq!(
            pool.properties.auto_pause,
            Some(AutoPauseProperties {
                enabled: Some(true),
                delay_in_minutes: Some(15),
            })
        );
        assert_eq!(pool.properties.auto_scale, Some(AutoScaleProperties::default()));
    }

    #[test]
    fn test_sql_pool_body() {
        let pool = SqlPoolCreateOptions {
            performance_level: "DW1000c".to_string(),
            tags: None,
        }
        .into_pool("eastus".into());
        let body = serde_json::to_value(&pool).unwrap();
        assert_eq!(body["sku"]["name"], "DW1000c");
        assert_eq!(body["properties"]["createMode"], "Default");
    }

    #[test]
    fn test_sql_pool_patch_omits_missing_sku() {
        let patch: SqlPoolPatchInfo = SqlPoolUpdateOptions::default().into();
        let body = serde_json::to_value(&patch).unwrap();
        assert_eq!(body, serde_json::json!({}));
    }

    #[test]
    fn test_firewall_rule_body() {
        let rule: FirewallRule = FirewallRuleOptions {
            start_ip_address: "10.0.0.1".to_string(),
            end_ip_address: "10.0.0.255".to_string(),
        }
        .into();
        let body = serde_json::to_value(&rule).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "properties": {
                    "startIpAddress": "10.0.0.1",
                    "endIpAddress": "10.0.0.255"
                }
            })
        );
    }
}
