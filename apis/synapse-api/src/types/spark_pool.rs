// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Spark (big data) pool types

use super::common::{ProvisioningState, Provisioned, Tags};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Spark pool ("big data pool" in ARM)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BigDataPool {
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
    /// Pool properties
    #[serde(default)]
    pub properties: BigDataPoolProperties,
}

/// Spark pool properties
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BigDataPoolProperties {
    /// Spark version, e.g. "2.4"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spark_version: Option<String>,
    /// Node size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_size: Option<NodeSize>,
    /// Node size family
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_size_family: Option<NodeSizeFamily>,
    /// Node count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_count: Option<i32>,
    /// Auto-scale settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_scale: Option<AutoScaleProperties>,
    /// Auto-pause settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_pause: Option<AutoPauseProperties>,
    /// Spark events folder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spark_events_folder: Option<String>,
    /// Default Spark log folder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_spark_log_folder: Option<String>,
    /// Library requirements (e.g. requirements.txt)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_requirements: Option<LibraryRequirements>,
    /// Provisioning state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<ProvisioningState>,
}

/// Spark pool node size
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    clap::ValueEnum,
)]
pub enum NodeSize {
    None,
    Small,
    Medium,
    Large,
    XLarge,
    XXLarge,
}

/// Spark pool node size family
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    clap::ValueEnum,
)]
pub enum NodeSizeFamily {
    None,
    #[default]
    MemoryOptimized,
}

/// Auto-scale settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoScaleProperties {
    /// Whether auto-scale is enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Minimum node count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_node_count: Option<i32>,
    /// Maximum node count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_node_count: Option<i32>,
}

/// Auto-pause settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoPauseProperties {
    /// Whether auto-pause is enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Idle minutes before the pool pauses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_in_minutes: Option<i32>,
}

/// Library requirements file attached to a pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryRequirements {
    /// Original file name
    pub filename: String,
    /// File contents
    pub content: String,
    /// Last update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl Provisioned for BigDataPool {
    fn provisioning_state(&self) -> Option<ProvisioningState> {
        self.properties.provisioning_state
    }
}
