// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Workspace access-control types

use serde::{Deserialize, Serialize};

/// Role definition (a named permission set)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDefinition {
    /// Role ID
    pub id: String,
    /// Display name, matched case-insensitively
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether the role ships with the service
    #[serde(default)]
    pub is_built_in: bool,
}

/// Binding of a role to a principal within a workspace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignment {
    /// Assignment ID
    pub id: String,
    /// Assigned role ID
    pub role_id: String,
    /// Object ID of the user or service principal
    pub principal_id: String,
}

/// Request body for creating a role assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignmentOptions {
    /// Role ID
    pub role_id: String,
    /// Principal object ID
    pub principal_id: String,
}
