// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Errors raised by role resolution and role assignment operations

use thiserror::Error;

/// Failure of a role or role assignment operation
#[derive(Debug, Error)]
pub enum AccessControlError {
    /// Conflicting or missing selectors, raised before any remote call
    #[error("{0}")]
    InvalidArgument(String),

    /// A role or principal name did not resolve
    #[error("{0}")]
    NotFound(String),

    /// A remote call failed; the client error is passed through unchanged
    #[error(transparent)]
    Remote(#[from] synapse_client::Error),
}

pub type Result<T> = std::result::Result<T, AccessControlError>;
