// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Workspace firewall rule types

use super::common::{ProvisioningState, Provisioned};
use serde::{Deserialize, Serialize};

/// Workspace IP firewall rule
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirewallRule {
    /// ARM resource ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Rule name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Rule properties
    #[serde(default)]
    pub properties: FirewallRuleProperties,
}

/// Firewall rule properties
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirewallRuleProperties {
    /// First IPv4 address of the allowed range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_ip_address: Option<String>,
    /// Last IPv4 address of the allowed range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_ip_address: Option<String>,
    /// Provisioning state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<ProvisioningState>,
}

impl Provisioned for FirewallRule {
    fn provisioning_state(&self) -> Option<ProvisioningState> {
        self.properties.provisioning_state
    }
}
