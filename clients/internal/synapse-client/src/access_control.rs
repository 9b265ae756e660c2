// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Workspace access-control client

use async_trait::async_trait;
use reqwest::Method;
use synapse_api::{RoleAssignment, RoleAssignmentOptions, RoleDefinition};

use crate::error::Result;
use crate::rest::{self, RestClient, segment};

/// Response header carrying the token for the next page of assignments
const CONTINUATION_HEADER: &str = "x-ms-continuation";

/// Trait abstraction for the access-control API of one workspace.
#[async_trait]
pub trait AccessControlApi: Send + Sync {
    async fn get_role_definitions(&self) -> Result<Vec<RoleDefinition>>;

    async fn get_role_definition_by_id(&self, role_id: &str) -> Result<RoleDefinition>;

    /// List assignments, filtered server-side by role and principal
    async fn get_role_assignments(
        &self,
        role_id: Option<&str>,
        principal_id: Option<&str>,
    ) -> Result<Vec<RoleAssignment>>;

    async fn get_role_assignment_by_id(&self, assignment_id: &str) -> Result<RoleAssignment>;

    async fn create_role_assignment(
        &self,
        options: &RoleAssignmentOptions,
    ) -> Result<RoleAssignment>;

    async fn delete_role_assignment_by_id(&self, assignment_id: &str) -> Result<()>;
}

/// Access-control client bound to a single workspace's dev endpoint
#[derive(Clone)]
pub struct AccessControlClient {
    rest: RestClient,
}

impl AccessControlClient {
    pub(crate) fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// Workspace endpoint requests are sent to
    pub fn endpoint(&self) -> &str {
        self.rest.base_url()
    }
}

#[async_trait]
impl AccessControlApi for AccessControlClient {
    async fn get_role_definitions(&self) -> Result<Vec<RoleDefinition>> {
        let url = self.rest.url("/rbac/roles", &[])?;
        self.rest.get_paged(url).await
    }

    async fn get_role_definition_by_id(&self, role_id: &str) -> Result<RoleDefinition> {
        let url = self
            .rest
            .url(&format!("/rbac/roles/{}", segment(role_id)), &[])?;
        self.rest.get(url).await
    }

    async fn get_role_assignments(
        &self,
        role_id: Option<&str>,
        principal_id: Option<&str>,
    ) -> Result<Vec<RoleAssignment>> {
        let mut assignments = Vec::new();
        let mut continuation: Option<String> = None;

        loop {
            let url = {
                let mut query = Vec::new();
                if let Some(role_id) = role_id {
                    query.push(("roleId", role_id));
                }
                if let Some(principal_id) = principal_id {
                    query.push(("principalId", principal_id));
                }
                if let Some(token) = continuation.as_deref() {
                    query.push(("continuationToken", token));
                }
                self.rest.url("/rbac/roleAssignments", &query)?
            };
            let response = self.rest.send::<()>(Method::GET, url, None).await?;
            let next = response
                .headers()
                .get(CONTINUATION_HEADER)
                .and_then(|v| v.to_str().ok())
                .filter(|v| !v.is_empty())
                .map(str::to_string);

            let page: Vec<RoleAssignment> = rest::decode(response).await?;
            assignments.extend(page);

            match next {
                Some(token) => continuation = Some(token),
                None => break,
            }
        }

        Ok(assignments)
    }

    async fn get_role_assignment_by_id(&self, assignment_id: &str) -> Result<RoleAssignment> {
        let url = self.rest.url(
            &format!("/rbac/roleAssignments/{}", segment(assignment_id)),
            &[],
        )?;
        self.rest.get(url).await
    }

    async fn create_role_assignment(
        &self,
        options: &RoleAssignmentOptions,
    ) -> Result<RoleAssignment> {
        let url = self.rest.url("/rbac/roleAssignments", &[])?;
        let response = self.rest.send(Method::POST, url, Some(options)).await?;
        rest::decode(response).await
    }

    async fn delete_role_assignment_by_id(&self, assignment_id: &str) -> Result<()> {
        let url = self.rest.url(
            &format!("/rbac/roleAssignments/{}", segment(assignment_id)),
            &[],
        )?;
        self.rest.send_empty::<()>(Method::DELETE, url, None).await
    }
}
