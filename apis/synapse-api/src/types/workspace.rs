// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Workspace types

use super::common::{ProvisioningState, Provisioned, Tags};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Synapse workspace
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    /// ARM resource ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Workspace name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// ARM resource type
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    /// Azure region
    pub location: String,
    /// Resource tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    /// Managed identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<ManagedIdentity>,
    /// Workspace properties
    #[serde(default)]
    pub properties: WorkspaceProperties,
}

/// Workspace properties
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceProperties {
    /// Default ADLS Gen2 account for the workspace
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_data_lake_storage: Option<DataLakeStorageAccountDetails>,
    /// SQL administrator login
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sql_administrator_login: Option<String>,
    /// SQL administrator password (write only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sql_administrator_login_password: Option<String>,
    /// Managed resource group name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed_resource_group_name: Option<String>,
    /// Provisioning state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<ProvisioningState>,
    /// Service endpoints (dev, sql, sqlOnDemand, web)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connectivity_endpoints: Option<BTreeMap<String, String>>,
}

/// Managed identity attached to a workspace
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedIdentity {
    /// Identity type
    #[serde(rename = "type")]
    pub identity_type: String,
    /// Principal ID of the identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal_id: Option<String>,
    /// Tenant ID of the identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

impl ManagedIdentity {
    /// The only identity type workspaces are created with
    pub fn system_assigned() -> Self {
        Self {
            identity_type: "SystemAssigned".to_string(),
            principal_id: None,
            tenant_id: None,
        }
    }
}

/// Default data lake storage account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataLakeStorageAccountDetails {
    /// DFS endpoint of the account
    pub account_url: String,
    /// File system (container) name
    pub filesystem: String,
}

/// Patch body for workspace updates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspacePatchInfo {
    /// Replacement tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    /// Patched properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<WorkspacePatchProperties>,
}

/// Patchable workspace properties
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspacePatchProperties {
    /// New SQL administrator password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sql_administrator_login_password: Option<String>,
}

/// Name availability request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckNameAvailabilityRequest {
    /// Candidate name
    pub name: String,
    /// ARM resource type
    #[serde(rename = "type")]
    pub resource_type: String,
}

/// Name availability response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckNameAvailabilityResponse {
    /// Whether the name can be used
    #[serde(default)]
    pub available: bool,
    /// Reason code when unavailable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Explanation when unavailable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Echoed name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Provisioned for Workspace {
    fn provisioning_state(&self) -> Option<ProvisioningState> {
        self.properties.provisioning_state
    }
}
