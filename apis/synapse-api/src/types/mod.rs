// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Synapse API type definitions

pub mod access_control;
pub mod common;
pub mod directory;
pub mod firewall;
pub mod spark_pool;
pub mod sql_pool;
pub mod workspace;

pub use access_control::*;
pub use common::*;
pub use directory::*;
pub use firewall::*;
pub use spark_pool::*;
pub use sql_pool::*;
pub use workspace::*;
