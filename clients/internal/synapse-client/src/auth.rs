// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Authentication support for Synapse requests
//!
//! Tokens are acquired outside this library (e.g. `az account
//! get-access-token`) and handed in through [`AuthConfig`]. Each remote
//! service expects a token issued for its own audience, so the
//! configuration carries one token per service.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::error::{Error, Result};

/// The remote service a request is addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    /// Azure Resource Manager
    Management,
    /// Workspace access-control (dev) endpoint
    AccessControl,
    /// Identity directory graph
    Graph,
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Management => write!(f, "the management API"),
            Self::AccessControl => write!(f, "the access-control API"),
            Self::Graph => write!(f, "the directory graph"),
        }
    }
}

/// Bearer tokens per audience
#[derive(Debug, Default)]
pub struct AuthConfig {
    pub management: Option<SecretString>,
    pub access_control: Option<SecretString>,
    pub graph: Option<SecretString>,
}

impl AuthConfig {
    /// Token for the given audience, if configured
    pub fn token(&self, audience: Audience) -> Option<&SecretString> {
        match audience {
            Audience::Management => self.management.as_ref(),
            Audience::AccessControl => self.access_control.as_ref(),
            Audience::Graph => self.graph.as_ref(),
        }
    }
}

/// Add the `Authorization` header for the request's audience
///
/// # Errors
/// Returns [`Error::MissingToken`] when no token is configured for the
/// audience. The check happens per request so commands that never touch an
/// audience do not need its token.
pub fn add_auth_headers(
    auth_config: &AuthConfig,
    audience: Audience,
    request: reqwest::RequestBuilder,
) -> Result<reqwest::RequestBuilder> {
    let token = auth_config
        .token(audience)
        .ok_or(Error::MissingToken(audience))?;
    Ok(request.bearer_auth(token.expose_secret()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_lookup_by_audience() {
        let config = AuthConfig {
            graph: Some(SecretString::from("graph-token".to_string())),
            ..Default::default()
        };
        assert!(config.token(Audience::Graph).is_some());
        assert!(config.token(Audience::Management).is_none());
    }

    #[test]
    fn test_missing_token_is_an_error() {
        let config = AuthConfig::default();
        let Ok(http) = crate::build_http_client() else {
            panic!("failed to build HTTP client");
        };
        let request = http.get("http://localhost/");
        let err = add_auth_headers(&config, Audience::AccessControl, request)
            .err()
            .map(|e| e.to_string());
        assert_eq!(
            err.as_deref(),
            Some("No access token configured for the access-control API")
        );
    }
}
