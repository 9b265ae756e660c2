// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for synapse-client

use synapse_api::ErrorResponse;
use thiserror::Error;

use crate::auth::Audience;

/// Result alias used throughout the client
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the remote services
#[derive(Error, Debug)]
pub enum Error {
    /// The request never produced an HTTP response
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("{code}: {message} (HTTP {status})")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// The response body did not match the expected shape
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// A body was required but the service returned none
    #[error("Empty response body from {0}")]
    EmptyBody(String),

    /// No bearer token for the service being called
    #[error("No access token configured for {0}")]
    MissingToken(Audience),

    /// Endpoint configuration produced an unusable URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Build an API error from a failed response's status and body
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|e| e.code_and_message());

        match parsed {
            Some((code, message)) if !code.is_empty() => Self::Api {
                status,
                code,
                message,
            },
            Some((_, message)) => Self::Api {
                status,
                code: default_code(status),
                message,
            },
            None => Self::Api {
                status,
                code: default_code(status),
                message: body.trim().to_string(),
            },
        }
    }

    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the service reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

fn default_code(status: u16) -> String {
    match status {
        400 => "BadRequest",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "NotFound",
        409 => "Conflict",
        429 => "TooManyRequests",
        500..=599 => "ServerError",
        _ => "RequestFailed",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_arm_error_body() {
        let err = Error::from_response(
            404,
            r#"{"error":{"code":"ResourceNotFound","message":"Workspace 'ws' not found"}}"#,
        );
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "ResourceNotFound: Workspace 'ws' not found (HTTP 404)"
        );
    }

    #[test]
    fn test_from_plain_text_body() {
        let err = Error::from_response(503, "upstream unavailable\n");
        assert!(!err.is_not_found());
        assert_eq!(
            err.to_string(),
            "ServerError: upstream unavailable (HTTP 503)"
        );
    }

    #[test]
    fn test_non_api_errors_have_no_status() {
        let err = Error::EmptyBody("http://localhost/".to_string());
        assert_eq!(err.status(), None);
    }
}
