// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Test helpers for synapse-cli integration tests
//!
//! This module provides:
//! - Running the CLI with an isolated config directory
//! - A local stub server standing in for the management, access-control,
//!   and directory APIs

// Allow unused code - not every test file uses every helper
// Allow deprecated - cargo_bin is standard for CLI testing
#![allow(dead_code, deprecated)]

pub mod stub;

use assert_cmd::Command;
use std::ffi::OsStr;
use std::path::Path;

/// Subscription used by every test that needs a profile
pub const TEST_SUBSCRIPTION: &str = "00000000-0000-0000-0000-000000000001";

/// Get a Command for running the synapse CLI binary
///
/// The command never sees the developer's own profiles or credentials.
pub fn synapse_cmd(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("synapse").expect("Failed to find synapse binary");
    cmd.env("SYNAPSE_CONFIG_DIR", config_dir);
    for var in [
        "SYNAPSE_PROFILE",
        "SYNAPSE_SUBSCRIPTION_ID",
        "SYNAPSE_TENANT",
        "SYNAPSE_RESOURCE_GROUP",
        "SYNAPSE_STORAGE_ENDPOINT_SUFFIX",
        "SYNAPSE_MANAGEMENT_ENDPOINT",
        "SYNAPSE_DEV_ENDPOINT",
        "SYNAPSE_GRAPH_ENDPOINT",
        "SYNAPSE_MANAGEMENT_TOKEN",
        "SYNAPSE_DEV_TOKEN",
        "SYNAPSE_GRAPH_TOKEN",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// A command using the environment profile, with no reachable services
pub fn offline_cmd(config_dir: &Path) -> Command {
    let mut cmd = synapse_cmd(config_dir);
    cmd.env("SYNAPSE_SUBSCRIPTION_ID", TEST_SUBSCRIPTION);
    cmd
}

/// A command pointed at a running stub server for every service
pub fn stubbed_cmd(config_dir: &Path, base_url: &str) -> Command {
    let mut cmd = offline_cmd(config_dir);
    cmd.env("SYNAPSE_MANAGEMENT_ENDPOINT", base_url)
        .env("SYNAPSE_DEV_ENDPOINT", base_url)
        .env("SYNAPSE_GRAPH_ENDPOINT", base_url)
        .env("SYNAPSE_MANAGEMENT_TOKEN", "management-token")
        .env("SYNAPSE_DEV_TOKEN", "dev-token")
        .env("SYNAPSE_GRAPH_TOKEN", "graph-token");
    cmd
}

/// Run a command and return (stdout, stderr, success)
pub fn run<I, S>(mut cmd: Command, args: I) -> (String, String, bool)
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = cmd.args(args).output().expect("Failed to execute synapse");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (stdout, stderr, output.status.success())
}
