// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! In-memory access-control and directory clients for unit tests

#![allow(clippy::unwrap_used)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use synapse_api::{
    DirectoryUser, RoleAssignment, RoleAssignmentOptions, RoleDefinition, ServicePrincipal,
};
use synapse_client::{AccessControlApi, DirectoryApi, Error, Result};

use super::resolve::service_principal_filter;

fn not_found(what: &str) -> Error {
    Error::Api {
        status: 404,
        code: "NotFound".to_string(),
        message: format!("{} not found", what),
    }
}

/// Access-control API backed by fixed data
///
/// Like the real service, the assignment listing honours the role filter
/// but may return assignments of other principals.
#[derive(Default)]
pub struct MockAccessControl {
    pub definitions: Vec<RoleDefinition>,
    pub assignments: Vec<RoleAssignment>,
    definition_list_calls: AtomicUsize,
    calls: AtomicUsize,
    assignment_queries: Mutex<Vec<(Option<String>, Option<String>)>>,
    created: Mutex<Vec<RoleAssignmentOptions>>,
}

impl MockAccessControl {
    pub fn with_roles(roles: &[(&str, &str)]) -> Self {
        Self::with_definitions(
            roles
                .iter()
                .map(|(name, id)| RoleDefinition {
                    id: id.to_string(),
                    name: Some(name.to_string()),
                    is_built_in: true,
                })
                .collect(),
        )
    }

    pub fn with_definitions(definitions: Vec<RoleDefinition>) -> Self {
        Self {
            definitions,
            ..Default::default()
        }
    }

    pub fn with_assignment(mut self, id: &str, role_id: &str, principal_id: &str) -> Self {
        self.assignments.push(RoleAssignment {
            id: id.to_string(),
            role_id: role_id.to_string(),
            principal_id: principal_id.to_string(),
        });
        self
    }

    pub fn definition_list_calls(&self) -> usize {
        self.definition_list_calls.load(Ordering::SeqCst)
    }

    /// Total number of remote calls of any kind
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn assignment_queries(&self) -> Vec<(Option<String>, Option<String>)> {
        self.assignment_queries.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<RoleAssignmentOptions> {
        self.created.lock().unwrap().clone()
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl AccessControlApi for MockAccessControl {
    async fn get_role_definitions(&self) -> Result<Vec<RoleDefinition>> {
        self.record_call();
        self.definition_list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.definitions.clone())
    }

    async fn get_role_definition_by_id(&self, role_id: &str) -> Result<RoleDefinition> {
        self.record_call();
        self.definitions
            .iter()
            .find(|d| d.id == role_id)
            .cloned()
            .ok_or_else(|| not_found("role"))
    }

    async fn get_role_assignments(
        &self,
        role_id: Option<&str>,
        principal_id: Option<&str>,
    ) -> Result<Vec<RoleAssignment>> {
        self.record_call();
        self.assignment_queries.lock().unwrap().push((
            role_id.map(str::to_string),
            principal_id.map(str::to_string),
        ));
        Ok(self
            .assignments
            .iter()
            .filter(|a| role_id.is_none_or(|r| a.role_id == r))
            .cloned()
            .collect())
    }

    async fn get_role_assignment_by_id(&self, assignment_id: &str) -> Result<RoleAssignment> {
        self.record_call();
        self.assignments
            .iter()
            .find(|a| a.id == assignment_id)
            .cloned()
            .ok_or_else(|| not_found("role assignment"))
    }

    async fn create_role_assignment(
        &self,
        options: &RoleAssignmentOptions,
    ) -> Result<RoleAssignment> {
        self.record_call();
        self.created.lock().unwrap().push(options.clone());
        Ok(RoleAssignment {
            id: "new-assignment".to_string(),
            role_id: options.role_id.clone(),
            principal_id: options.principal_id.clone(),
        })
    }

    async fn delete_role_assignment_by_id(&self, assignment_id: &str) -> Result<()> {
        self.record_call();
        if self.assignments.iter().any(|a| a.id == assignment_id) {
            Ok(())
        } else {
            Err(not_found("role assignment"))
        }
    }
}

/// Directory backed by fixed users and service principals
#[derive(Default)]
pub struct MockDirectory {
    users: Vec<DirectoryUser>,
    principals: Vec<ServicePrincipal>,
    filters: Mutex<Vec<String>>,
    user_lookups: Mutex<Vec<String>>,
}

impl MockDirectory {
    pub fn with_user(mut self, upn: &str, object_id: &str) -> Self {
        self.users.push(DirectoryUser {
            object_id: object_id.to_string(),
            user_principal_name: Some(upn.to_string()),
            display_name: None,
        });
        self
    }

    pub fn with_service_principal(mut self, spn: &str, object_id: &str) -> Self {
        self.principals.push(ServicePrincipal {
            object_id: object_id.to_string(),
            app_id: None,
            display_name: None,
            service_principal_names: vec![spn.to_string()],
        });
        self
    }

    pub fn filters(&self) -> Vec<String> {
        self.filters.lock().unwrap().clone()
    }

    pub fn user_lookups(&self) -> Vec<String> {
        self.user_lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl DirectoryApi for MockDirectory {
    async fn get_user(&self, upn_or_object_id: &str) -> Result<DirectoryUser> {
        self.user_lookups
            .lock()
            .unwrap()
            .push(upn_or_object_id.to_string());
        self.users
            .iter()
            .find(|u| {
                u.user_principal_name.as_deref() == Some(upn_or_object_id)
                    || u.object_id == upn_or_object_id
            })
            .cloned()
            .ok_or_else(|| not_found("user"))
    }

    async fn list_service_principals(&self, filter: &str) -> Result<Vec<ServicePrincipal>> {
        self.filters.lock().unwrap().push(filter.to_string());
        Ok(self
            .principals
            .iter()
            .filter(|p| {
                p.service_principal_names
                    .iter()
                    .any(|name| service_principal_filter(name) == filter)
            })
            .cloned()
            .collect())
    }
}
