// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Synapse API type definitions
//!
//! This crate defines the request and response bodies for the three remote
//! services the Synapse CLI talks to:
//!
//! - The Azure Resource Manager (ARM) management API for Synapse workspaces,
//!   Spark pools, SQL pools, and workspace firewall rules
//! - The per-workspace access-control API (role definitions and role
//!   assignments)
//! - The identity directory (users and service principals)
//!
//! It also carries the typed option structures used to build management
//! requests from command-line input (see [`options`]).

pub mod options;
pub mod types;

pub use options::*;
pub use types::*;

/// `api-version` for the Microsoft.Synapse resource provider
pub const MANAGEMENT_API_VERSION: &str = "2019-06-01-preview";

/// `api-version` for the workspace access-control endpoints
pub const ACCESS_CONTROL_API_VERSION: &str = "2020-02-01-preview";

/// `api-version` for the directory graph endpoints
pub const GRAPH_API_VERSION: &str = "1.6";

/// ARM resource type used for workspace name availability checks
pub const WORKSPACE_RESOURCE_TYPE: &str = "Microsoft.Synapse/workspaces";
