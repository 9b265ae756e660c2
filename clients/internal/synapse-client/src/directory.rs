// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Identity directory (graph) client

use async_trait::async_trait;
use synapse_api::{DirectoryUser, Page, ServicePrincipal};

use crate::error::Result;
use crate::rest::{RestClient, segment};

/// Trait abstraction for the directory lookups used to resolve principals.
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    /// Look up a user by user principal name or object ID
    async fn get_user(&self, upn_or_object_id: &str) -> Result<DirectoryUser>;

    /// List service principals matching an OData `$filter`
    async fn list_service_principals(&self, filter: &str) -> Result<Vec<ServicePrincipal>>;
}

/// Directory client scoped to one tenant
#[derive(Clone)]
pub struct GraphClient {
    rest: RestClient,
}

impl GraphClient {
    pub(crate) fn new(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl DirectoryApi for GraphClient {
    async fn get_user(&self, upn_or_object_id: &str) -> Result<DirectoryUser> {
        let url = self
            .rest
            .url(&format!("/users/{}", segment(upn_or_object_id)), &[])?;
        self.rest.get(url).await
    }

    // Only the first page is read; the directory links further pages
    // relative to the tenant, and callers only ever use the first match.
    async fn list_service_principals(&self, filter: &str) -> Result<Vec<ServicePrincipal>> {
        let url = self.rest.url("/servicePrincipals", &[("$filter", filter)])?;
        let page: Page<ServicePrincipal> = self.rest.get(url).await?;
        Ok(page.value)
    }
}
