// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Profile CLI tests
//!
//! Every test runs against its own config directory.

// Allow deprecated - cargo_bin is standard for CLI testing
#![allow(deprecated)]

mod common;

use common::{TEST_SUBSCRIPTION, offline_cmd, run, synapse_cmd};
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::path::Path;

fn create(dir: &Path, name: &str, extra: &[&str]) {
    let mut args = vec!["profile", "create", name, "--subscription-id", TEST_SUBSCRIPTION];
    args.extend_from_slice(extra);
    let (_, stderr, success) = run(synapse_cmd(dir), args);
    assert!(success, "profile create failed: {}", stderr);
}

fn get_json(dir: &Path, name: Option<&str>) -> Value {
    let mut args = vec!["profile", "get", "--json"];
    args.extend(name);
    let (stdout, stderr, success) = run(synapse_cmd(dir), args);
    assert!(success, "profile get failed: {}", stderr);
    serde_json::from_str(&stdout).expect("profile JSON")
}

#[test]
fn test_profile_get_env() {
    let dir = tempfile::tempdir().expect("tempdir");

    let mut cmd = offline_cmd(dir.path());
    cmd.env("SYNAPSE_TENANT", "contoso.onmicrosoft.com")
        .env("SYNAPSE_RESOURCE_GROUP", "analytics");

    let (stdout, stderr, success) = run(cmd, ["profile", "get", "env", "--json"]);

    assert!(success, "stderr: {}", stderr);
    let profile: Value = serde_json::from_str(&stdout).expect("profile JSON");
    assert_eq!(profile["name"], "env");
    assert_eq!(profile["subscriptionId"], TEST_SUBSCRIPTION);
    assert_eq!(profile["tenant"], "contoso.onmicrosoft.com");
    assert_eq!(profile["resourceGroup"], "analytics");
}

#[test]
fn test_profile_get_env_missing_vars() {
    let dir = tempfile::tempdir().expect("tempdir");

    let (_, stderr, success) = run(synapse_cmd(dir.path()), ["profile", "get", "env"]);

    assert!(!success);
    assert!(stderr.contains("SYNAPSE_SUBSCRIPTION_ID"), "stderr: {}", stderr);
}

#[test]
fn test_profile_list_empty() {
    let dir = tempfile::tempdir().expect("tempdir");

    let (stdout, stderr, success) = run(synapse_cmd(dir.path()), ["profile", "list", "--json"]);

    assert!(success, "stderr: {}", stderr);
    let profiles: Vec<Value> = serde_json::from_str(&stdout).expect("JSON array");
    assert!(profiles.is_empty());
}

#[test]
fn test_profile_list_shows_env() {
    let dir = tempfile::tempdir().expect("tempdir");

    let (stdout, _, success) = run(offline_cmd(dir.path()), ["profile", "ls"]);

    assert!(success);
    assert!(stdout.contains("env"));
    assert!(stdout.contains(TEST_SUBSCRIPTION));
}

#[test]
fn test_first_profile_becomes_current() {
    let dir = tempfile::tempdir().expect("tempdir");

    create(dir.path(), "dev", &["-g", "dev-rg"]);
    create(dir.path(), "prod", &[]);

    let current = get_json(dir.path(), None);
    assert_eq!(current["name"], "dev");
    assert_eq!(current["resourceGroup"], "dev-rg");
    assert_eq!(current["tenant"], "myorganization");
}

#[test]
fn test_profile_create_with_endpoints() {
    let dir = tempfile::tempdir().expect("tempdir");

    create(
        dir.path(),
        "sovereign",
        &[
            "--management-endpoint",
            "https://management.example.net",
            "--dev-endpoint-suffix",
            "dev.example.net",
            "--storage-endpoint-suffix",
            "core.example.net",
        ],
    );

    let profile = get_json(dir.path(), Some("sovereign"));
    assert_eq!(profile["managementEndpoint"], "https://management.example.net");
    assert_eq!(profile["devEndpointSuffix"], "dev.example.net");
    assert_eq!(profile["storageEndpointSuffix"], "core.example.net");
}

#[test]
fn test_profile_create_duplicate() {
    let dir = tempfile::tempdir().expect("tempdir");
    create(dir.path(), "dev", &[]);

    let (_, stderr, success) = run(
        synapse_cmd(dir.path()),
        ["profile", "create", "dev", "--subscription-id", TEST_SUBSCRIPTION],
    );

    assert!(!success);
    assert!(stderr.contains("already exists"), "stderr: {}", stderr);
}

#[test]
fn test_profile_create_reserved_name() {
    let dir = tempfile::tempdir().expect("tempdir");

    let (_, stderr, success) = run(
        synapse_cmd(dir.path()),
        ["profile", "create", "env", "--subscription-id", TEST_SUBSCRIPTION],
    );

    assert!(!success);
    assert!(stderr.contains("reserved"), "stderr: {}", stderr);
}

#[test]
fn test_set_current_and_back() {
    let dir = tempfile::tempdir().expect("tempdir");
    create(dir.path(), "dev", &[]);
    create(dir.path(), "prod", &[]);

    let (_, _, success) = run(synapse_cmd(dir.path()), ["profile", "set-current", "prod"]);
    assert!(success);
    assert_eq!(get_json(dir.path(), None)["name"], "prod");

    let (_, _, success) = run(synapse_cmd(dir.path()), ["profile", "set-current", "-"]);
    assert!(success);
    assert_eq!(get_json(dir.path(), None)["name"], "dev");
}

#[test]
fn test_set_current_unknown_profile() {
    let dir = tempfile::tempdir().expect("tempdir");

    let (_, _, success) = run(synapse_cmd(dir.path()), ["profile", "set-current", "nope"]);

    assert!(!success);
}

#[test]
fn test_profile_delete() {
    let dir = tempfile::tempdir().expect("tempdir");
    create(dir.path(), "dev", &[]);

    let (stdout, stderr, success) = run(
        synapse_cmd(dir.path()),
        ["profile", "delete", "dev", "--yes"],
    );
    assert!(success, "stderr: {}", stderr);
    assert!(stdout.contains("Deleted profile 'dev'"));

    let (stdout, _, _) = run(synapse_cmd(dir.path()), ["profile", "list", "--json"]);
    let profiles: Vec<Value> = serde_json::from_str(&stdout).expect("JSON array");
    assert!(profiles.is_empty());
}
