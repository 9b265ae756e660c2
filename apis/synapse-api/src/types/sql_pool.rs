// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! SQL pool types

use super::common::{ProvisioningState, Provisioned, Sku, Tags};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Dedicated SQL pool
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqlPool {
    /// ARM resource ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Pool name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Azure region, inherited from the workspace
    pub location: String,
    /// Resource tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    /// Performance level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<Sku>,
    /// Pool properties
    #[serde(default)]
    pub properties: SqlPoolProperties,
}

/// SQL pool properties
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqlPoolProperties {
    /// How the pool is created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_mode: Option<SqlCreateMode>,
    /// Runtime status ("Online", "Paused", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Maximum size in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size_bytes: Option<i64>,
    /// Collation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collation: Option<String>,
    /// Provisioning state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<ProvisioningState>,
}

/// SQL pool creation mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum SqlCreateMode {
    #[default]
    Default,
    PointInTimeRestore,
    Recovery,
    Restore,
}

/// Patch body for SQL pool updates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqlPoolPatchInfo {
    /// Replacement tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    /// New performance level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<Sku>,
}

impl Provisioned for SqlPool {
    fn provisioning_state(&self) -> Option<ProvisioningState> {
        self.properties.provisioning_state
    }
}
