// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Role and principal name resolution
//!
//! The access-control API only accepts role IDs and principal object IDs.
//! These helpers turn the names users type into those IDs, skipping the
//! remote lookup whenever the input already is an ID.

use std::collections::HashMap;

use synapse_client::{AccessControlApi, DirectoryApi};

use super::error::{AccessControlError, Result};

/// Whether a value parses as a GUID
pub fn is_guid(value: &str) -> bool {
    uuid::Uuid::parse_str(value).is_ok()
}

/// Resolve a role name or ID to a role ID
///
/// GUIDs are returned unchanged without a remote call. Names are matched
/// case-insensitively against the workspace's role definitions.
pub async fn resolve_role_id(
    client: &dyn AccessControlApi,
    role: Option<&str>,
) -> Result<Option<String>> {
    let Some(role) = role.filter(|r| !r.is_empty()) else {
        return Ok(None);
    };

    if is_guid(role) {
        return Ok(Some(role.to_string()));
    }

    let definitions = client.get_role_definitions().await?;
    let by_name: HashMap<String, String> = definitions
        .into_iter()
        .filter_map(|def| def.name.map(|name| (name.to_lowercase(), def.id)))
        .collect();

    match by_name.get(&role.to_lowercase()) {
        Some(id) => Ok(Some(id.clone())),
        None => Err(AccessControlError::NotFound(format!(
            "Role '{}' doesn't exist.",
            role
        ))),
    }
}

/// Canonical form of a service principal name
///
/// Bare app names are registered as `http://<name>`; names that already
/// carry the scheme and app IDs are left alone.
pub fn normalize_service_principal_name(name: &str) -> String {
    if name.contains("http://") || is_guid(name) {
        name.to_string()
    } else {
        format!("http://{}", name)
    }
}

/// OData filter matching service principals registered under `name`
pub fn service_principal_filter(name: &str) -> String {
    format!(
        "servicePrincipalNames/any(x:x eq '{}')",
        name.replace('\'', "''")
    )
}

/// Resolve a user or service principal name to its directory object ID
///
/// Mutual exclusion of the two names is the caller's job; when both are
/// given the service principal name is used.
pub async fn resolve_object_id(
    directory: &dyn DirectoryApi,
    user_principal_name: Option<&str>,
    service_principal_name: Option<&str>,
) -> Result<Option<String>> {
    if let Some(spn) = service_principal_name {
        let spn = normalize_service_principal_name(spn);
        let matches = directory
            .list_service_principals(&service_principal_filter(&spn))
            .await?;

        if matches.len() > 1 {
            tracing::warn!(
                spn = %spn,
                count = matches.len(),
                "service principal name matched more than one principal, using the first"
            );
        }

        return match matches.into_iter().next() {
            Some(principal) => Ok(Some(principal.object_id)),
            None => Err(AccessControlError::NotFound(format!(
                "Service Principal Name '{}' doesn't exist.",
                spn
            ))),
        };
    }

    if let Some(upn) = user_principal_name {
        let user = directory.get_user(upn).await?;
        return Ok(Some(user.object_id));
    }

    Ok(None)
}
