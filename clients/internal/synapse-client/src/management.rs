// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Management (ARM) client for the Microsoft.Synapse resource provider

use reqwest::Method;
use synapse_api::{
    BigDataPool, CheckNameAvailabilityRequest, CheckNameAvailabilityResponse, FirewallRule,
    SqlPool, SqlPoolPatchInfo, Workspace, WorkspacePatchInfo,
};

use crate::error::Result;
use crate::rest::{RestClient, segment};

/// Client for workspace, Spark pool, SQL pool, and firewall rule resources
///
/// Mutating calls start long-running operations; they return whatever body
/// the service sent with its `200`/`201`/`202` answer, which is `None` for
/// an empty `202 Accepted`.
#[derive(Clone)]
pub struct ManagementClient {
    rest: RestClient,
    subscription_id: String,
}

impl ManagementClient {
    pub(crate) fn new(rest: RestClient, subscription_id: String) -> Self {
        Self {
            rest,
            subscription_id,
        }
    }

    fn provider_path(&self, resource_group: Option<&str>) -> String {
        match resource_group {
            Some(rg) => format!(
                "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Synapse",
                segment(&self.subscription_id),
                segment(rg)
            ),
            None => format!(
                "/subscriptions/{}/providers/Microsoft.Synapse",
                segment(&self.subscription_id)
            ),
        }
    }

    fn workspace_path(&self, resource_group: &str, workspace: &str) -> String {
        format!(
            "{}/workspaces/{}",
            self.provider_path(Some(resource_group)),
            segment(workspace)
        )
    }

    fn child_path(&self, resource_group: &str, workspace: &str, kind: &str, name: &str) -> String {
        format!(
            "{}/{}/{}",
            self.workspace_path(resource_group, workspace),
            kind,
            segment(name)
        )
    }

    // ========================================================================
    // Workspaces
    // ========================================================================

    /// List workspaces in a resource group, or the whole subscription
    pub async fn list_workspaces(&self, resource_group: Option<&str>) -> Result<Vec<Workspace>> {
        let url = self
            .rest
            .url(&format!("{}/workspaces", self.provider_path(resource_group)), &[])?;
        self.rest.get_paged(url).await
    }

    pub async fn get_workspace(&self, resource_group: &str, workspace: &str) -> Result<Workspace> {
        let url = self.rest.url(&self.workspace_path(resource_group, workspace), &[])?;
        self.rest.get(url).await
    }

    pub async fn create_or_update_workspace(
        &self,
        resource_group: &str,
        workspace: &str,
        body: &Workspace,
    ) -> Result<Option<Workspace>> {
        let url = self.rest.url(&self.workspace_path(resource_group, workspace), &[])?;
        self.rest.send_optional(Method::PUT, url, Some(body)).await
    }

    pub async fn update_workspace(
        &self,
        resource_group: &str,
        workspace: &str,
        patch: &WorkspacePatchInfo,
    ) -> Result<Option<Workspace>> {
        let url = self.rest.url(&self.workspace_path(resource_group, workspace), &[])?;
        self.rest.send_optional(Method::PATCH, url, Some(patch)).await
    }

    pub async fn delete_workspace(&self, resource_group: &str, workspace: &str) -> Result<()> {
        let url = self.rest.url(&self.workspace_path(resource_group, workspace), &[])?;
        self.rest.send_empty::<()>(Method::DELETE, url, None).await
    }

    /// Check whether a workspace name is free
    pub async fn check_name_availability(
        &self,
        request: &CheckNameAvailabilityRequest,
    ) -> Result<CheckNameAvailabilityResponse> {
        let url = self.rest.url(
            &format!("{}/checkNameAvailability", self.provider_path(None)),
            &[],
        )?;
        let response = self.rest.send(Method::POST, url, Some(request)).await?;
        crate::rest::decode(response).await
    }

    // ========================================================================
    // Spark pools
    // ========================================================================

    pub async fn list_big_data_pools(
        &self,
        resource_group: &str,
        workspace: &str,
    ) -> Result<Vec<BigDataPool>> {
        let url = self.rest.url(
            &format!("{}/bigDataPools", self.workspace_path(resource_group, workspace)),
            &[],
        )?;
        self.rest.get_paged(url).await
    }

    pub async fn get_big_data_pool(
        &self,
        resource_group: &str,
        workspace: &str,
        pool: &str,
    ) -> Result<BigDataPool> {
        let url = self.rest.url(
            &self.child_path(resource_group, workspace, "bigDataPools", pool),
            &[],
        )?;
        self.rest.get(url).await
    }

    /// Create or replace a Spark pool
    ///
    /// `force` lets the service stop running jobs when the change needs it.
    pub async fn create_or_update_big_data_pool(
        &self,
        resource_group: &str,
        workspace: &str,
        pool: &str,
        body: &BigDataPool,
        force: bool,
    ) -> Result<Option<BigDataPool>> {
        let force = if force { "true" } else { "false" };
        let url = self.rest.url(
            &self.child_path(resource_group, workspace, "bigDataPools", pool),
            &[("force", force)],
        )?;
        self.rest.send_optional(Method::PUT, url, Some(body)).await
    }

    pub async fn delete_big_data_pool(
        &self,
        resource_group: &str,
        workspace: &str,
        pool: &str,
    ) -> Result<()> {
        let url = self.rest.url(
            &self.child_path(resource_group, workspace, "bigDataPools", pool),
            &[],
        )?;
        self.rest.send_empty::<()>(Method::DELETE, url, None).await
    }

    // ========================================================================
    // SQL pools
    // ========================================================================

    pub async fn list_sql_pools(&self, resource_group: &str, workspace: &str) -> Result<Vec<SqlPool>> {
        let url = self.rest.url(
            &format!("{}/sqlPools", self.workspace_path(resource_group, workspace)),
            &[],
        )?;
        self.rest.get_paged(url).await
    }

    pub async fn get_sql_pool(
        &self,
        resource_group: &str,
        workspace: &str,
        pool: &str,
    ) -> Result<SqlPool> {
        let url = self.rest.url(
            &self.child_path(resource_group, workspace, "sqlPools", pool),
            &[],
        )?;
        self.rest.get(url).await
    }

    pub async fn create_sql_pool(
        &self,
        resource_group: &str,
        workspace: &str,
        pool: &str,
        body: &SqlPool,
    ) -> Result<Option<SqlPool>> {
        let url = self.rest.url(
            &self.child_path(resource_group, workspace, "sqlPools", pool),
            &[],
        )?;
        self.rest.send_optional(Method::PUT, url, Some(body)).await
    }

    pub async fn update_sql_pool(
        &self,
        resource_group: &str,
        workspace: &str,
        pool: &str,
        patch: &SqlPoolPatchInfo,
    ) -> Result<Option<SqlPool>> {
        let url = self.rest.url(
            &self.child_path(resource_group, workspace, "sqlPools", pool),
            &[],
        )?;
        self.rest.send_optional(Method::PATCH, url, Some(patch)).await
    }

    pub async fn delete_sql_pool(&self, resource_group: &str, workspace: &str, pool: &str) -> Result<()> {
        let url = self.rest.url(
            &self.child_path(resource_group, workspace, "sqlPools", pool),
            &[],
        )?;
        self.rest.send_empty::<()>(Method::DELETE, url, None).await
    }

    pub async fn pause_sql_pool(&self, resource_group: &str, workspace: &str, pool: &str) -> Result<()> {
        self.sql_pool_action(resource_group, workspace, pool, "pause").await
    }

    pub async fn resume_sql_pool(&self, resource_group: &str, workspace: &str, pool: &str) -> Result<()> {
        self.sql_pool_action(resource_group, workspace, pool, "resume").await
    }

    async fn sql_pool_action(
        &self,
        resource_group: &str,
        workspace: &str,
        pool: &str,
        action: &str,
    ) -> Result<()> {
        let url = self.rest.url(
            &format!(
                "{}/{}",
                self.child_path(resource_group, workspace, "sqlPools", pool),
                action
            ),
            &[],
        )?;
        self.rest.send_empty::<()>(Method::POST, url, None).await
    }

    // ========================================================================
    // Firewall rules
    // ========================================================================

    pub async fn list_firewall_rules(
        &self,
        resource_group: &str,
        workspace: &str,
    ) -> Result<Vec<FirewallRule>> {
        let url = self.rest.url(
            &format!("{}/firewallRules", self.workspace_path(resource_group, workspace)),
            &[],
        )?;
        self.rest.get_paged(url).await
    }

    pub async fn get_firewall_rule(
        &self,
        resource_group: &str,
        workspace: &str,
        rule: &str,
    ) -> Result<FirewallRule> {
        let url = self.rest.url(
            &self.child_path(resource_group, workspace, "firewallRules", rule),
            &[],
        )?;
        self.rest.get(url).await
    }

    pub async fn create_or_update_firewall_rule(
        &self,
        resource_group: &str,
        workspace: &str,
        rule: &str,
        body: &FirewallRule,
    ) -> Result<Option<FirewallRule>> {
        let url = self.rest.url(
            &self.child_path(resource_group, workspace, "firewallRules", rule),
            &[],
        )?;
        self.rest.send_optional(Method::PUT, url, Some(body)).await
    }

    pub async fn delete_firewall_rule(
        &self,
        resource_group: &str,
        workspace: &str,
        rule: &str,
    ) -> Result<()> {
        let url = self.rest.url(
            &self.child_path(resource_group, workspace, "firewallRules", rule),
            &[],
        )?;
        self.rest.send_empty::<()>(Method::DELETE, url, None).await
    }
}
