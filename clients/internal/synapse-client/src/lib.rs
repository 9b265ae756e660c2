// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Synapse Client Library
//!
//! This client provides typed access to the three services behind the
//! Synapse CLI:
//!
//! - the Azure Resource Manager API for workspaces, Spark pools, SQL pools,
//!   and firewall rules ([`ManagementClient`])
//! - the per-workspace access-control API ([`AccessControlClient`])
//! - the identity directory ([`GraphClient`])
//!
//! ## Usage
//!
//! ```ignore
//! use synapse_client::{AuthConfig, ClientConfig, SynapseClient};
//!
//! let client = SynapseClient::new(ClientConfig {
//!     subscription_id: "00000000-0000-0000-0000-000000000000".into(),
//!     auth: AuthConfig {
//!         management: Some(std::env::var("SYNAPSE_MANAGEMENT_TOKEN")?.into()),
//!         ..Default::default()
//!     },
//!     ..ClientConfig::default()
//! })?;
//!
//! let workspaces = client.management().list_workspaces(Some("my-rg")).await?;
//!
//! // The access-control API lives on each workspace's own endpoint
//! use synapse_client::AccessControlApi;
//! let roles = client.access_control("my-workspace")?.get_role_definitions().await?;
//! ```

pub mod access_control;
pub mod auth;
pub mod directory;
pub mod error;
pub mod management;
mod rest;

use std::sync::Arc;

pub use access_control::{AccessControlApi, AccessControlClient};
pub use auth::{Audience, AuthConfig};
pub use directory::{DirectoryApi, GraphClient};
pub use error::{Error, Result};
pub use management::ManagementClient;

// Re-export the wire types for convenience
pub use synapse_api as types;

use rest::RestClient;

/// Public cloud management endpoint
pub const DEFAULT_MANAGEMENT_ENDPOINT: &str = "https://management.azure.com";

/// Suffix of per-workspace access-control endpoints
pub const DEFAULT_DEV_ENDPOINT_SUFFIX: &str = "dev.azuresynapse.net";

/// Public cloud directory graph endpoint
pub const DEFAULT_GRAPH_ENDPOINT: &str = "https://graph.windows.net";

/// Tenant alias for the signed-in user's directory
pub const DEFAULT_TENANT: &str = "myorganization";

/// Connection settings for [`SynapseClient`]
#[derive(Debug)]
pub struct ClientConfig {
    /// Subscription ARM requests are scoped to
    pub subscription_id: String,
    /// Directory tenant (domain or ID)
    pub tenant: String,
    /// ARM endpoint
    pub management_endpoint: String,
    /// Suffix appended to the workspace name for access-control requests
    pub dev_endpoint_suffix: String,
    /// Full access-control base URL, replacing the per-workspace endpoint
    pub dev_endpoint: Option<String>,
    /// Directory graph endpoint
    pub graph_endpoint: String,
    /// Bearer tokens
    pub auth: AuthConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            subscription_id: String::new(),
            tenant: DEFAULT_TENANT.to_string(),
            management_endpoint: DEFAULT_MANAGEMENT_ENDPOINT.to_string(),
            dev_endpoint_suffix: DEFAULT_DEV_ENDPOINT_SUFFIX.to_string(),
            dev_endpoint: None,
            graph_endpoint: DEFAULT_GRAPH_ENDPOINT.to_string(),
            auth: AuthConfig::default(),
        }
    }
}

/// Entry point holding one HTTP connection pool for all three services
///
/// The management client is built up front; access-control and directory
/// clients are cheap views created on demand.
pub struct SynapseClient {
    http: reqwest::Client,
    auth: Arc<AuthConfig>,
    tenant: String,
    dev_endpoint_suffix: String,
    dev_endpoint: Option<String>,
    graph_endpoint: String,
    management: ManagementClient,
}

impl SynapseClient {
    /// Create a new client
    ///
    /// # Errors
    /// Fails if the HTTP client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = build_http_client()?;
        let auth = Arc::new(config.auth);

        let management = ManagementClient::new(
            RestClient::new(
                http.clone(),
                config.management_endpoint,
                synapse_api::MANAGEMENT_API_VERSION,
                Audience::Management,
                Arc::clone(&auth),
            ),
            config.subscription_id,
        );

        Ok(Self {
            http,
            auth,
            tenant: config.tenant,
            dev_endpoint_suffix: config.dev_endpoint_suffix,
            dev_endpoint: config.dev_endpoint,
            graph_endpoint: config.graph_endpoint,
            management,
        })
    }

    /// Management (ARM) client
    pub fn management(&self) -> &ManagementClient {
        &self.management
    }

    /// Access-control client for a workspace
    ///
    /// # Errors
    /// Fails if the workspace name does not form a valid endpoint URL.
    pub fn access_control(&self, workspace_name: &str) -> Result<AccessControlClient> {
        let base_url = match &self.dev_endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!("https://{}.{}", workspace_name, self.dev_endpoint_suffix),
        };
        url::Url::parse(&base_url)?;

        Ok(AccessControlClient::new(RestClient::new(
            self.http.clone(),
            base_url,
            synapse_api::ACCESS_CONTROL_API_VERSION,
            Audience::AccessControl,
            Arc::clone(&self.auth),
        )))
    }

    /// Directory client for the configured tenant
    pub fn directory(&self) -> GraphClient {
        let base_url = format!(
            "{}/{}",
            self.graph_endpoint.trim_end_matches('/'),
            rest::segment(&self.tenant)
        );
        GraphClient::new(RestClient::new(
            self.http.clone(),
            base_url,
            synapse_api::GRAPH_API_VERSION,
            Audience::Graph,
            Arc::clone(&self.auth),
        ))
    }
}

/// Build the shared reqwest client
///
/// reqwest is built with `rustls-no-provider`, so the ring provider must be
/// installed before the first client exists. Installing twice is harmless.
pub(crate) fn build_http_client() -> Result<reqwest::Client> {
    let _ = rustls::crypto::ring::default_provider().install_default();

    reqwest::Client::builder()
        .user_agent(concat!("synapse-cli/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(Error::Transport)
}
