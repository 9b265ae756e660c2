// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Common types used across the Synapse APIs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{Display, EnumString};

/// ARM resource tags
pub type Tags = BTreeMap<String, String>;

/// One page of a list response
///
/// ARM list endpoints and the role definition listing wrap results in a
/// `value` array and link to the following page with `nextLink`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
    /// Absolute URL of the next page, if any
    #[serde(
        default,
        rename = "nextLink",
        alias = "odata.nextLink",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_link: Option<String>,
}

/// ARM provisioning state
///
/// Unrecognised states deserialize to `Unknown` so a new server-side state
/// never breaks a poll loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum ProvisioningState {
    Provisioning,
    Creating,
    Updating,
    Deleting,
    Succeeded,
    Failed,
    Canceled,
    DeleteError,
    #[serde(other)]
    Unknown,
}

impl ProvisioningState {
    /// Whether the last operation on the resource failed
    pub fn is_failure(self) -> bool {
        matches!(self, Self::Failed | Self::Canceled | Self::DeleteError)
    }
}

/// Resources that report an ARM provisioning state
pub trait Provisioned {
    /// Current provisioning state, if the server reported one
    fn provisioning_state(&self) -> Option<ProvisioningState>;
}

/// SKU of a resource (SQL pool performance level)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sku {
    /// SKU name, e.g. "DW100c"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Service tier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    /// Capacity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,
}

impl Sku {
    /// SKU with only a name set
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            tier: None,
            capacity: None,
        }
    }
}

/// Error envelope returned by the remote services
///
/// ARM and the access-control API wrap errors as
/// `{"error": {"code", "message"}}` (the access-control API sometimes
/// returns the fields at the top level). The directory uses
/// `{"odata.error": {"code", "message": {"value"}}}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// ARM style error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
    /// Directory style error
    #[serde(
        default,
        rename = "odata.error",
        skip_serializing_if = "Option::is_none"
    )]
    pub odata_error: Option<ODataError>,
    /// Top-level error code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Top-level error message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// ARM error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Error code (e.g., "ResourceNotFound")
    pub code: String,
    /// Human-readable error message
    #[serde(default)]
    pub message: String,
}

/// Directory error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ODataError {
    /// Error code (e.g., "Request_ResourceNotFound")
    pub code: String,
    /// Localized message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<ODataMessage>,
}

/// Localized directory error message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ODataMessage {
    /// Message text
    #[serde(default)]
    pub value: String,
}

impl ErrorResponse {
    /// Extract the error code and message, whichever envelope was used
    pub fn code_and_message(&self) -> Option<(String, String)> {
        if let Some(detail) = &self.error {
            return Some((detail.code.clone(), detail.message.clone()));
        }
        if let Some(odata) = &self.odata_error {
            let message = odata
                .message
                .as_ref()
                .map(|m| m.value.clone())
                .unwrap_or_default();
            return Some((odata.code.clone(), message));
        }
        match (&self.code, &self.message) {
            (Some(code), message) => Some((code.clone(), message.clone().unwrap_or_default())),
            (None, Some(message)) => Some((String::new(), message.clone())),
            (None, None) => None,
        }
    }
}
