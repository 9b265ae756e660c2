// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Location of profiles and the main config file
//!
//! ```text
//! <root>/config.json            current and previous profile names
//! <root>/profiles.d/<name>.json one file per profile
//! ```

use std::path::PathBuf;

use anyhow::Result;

/// Overrides the configuration root
pub const CONFIG_DIR_VAR: &str = "SYNAPSE_CONFIG_DIR";

const PROFILES_SUBDIR: &str = "profiles.d";
const CONFIG_FILE: &str = "config.json";

/// Root of the on-disk configuration
#[derive(Debug, Clone)]
pub struct ConfigDir {
    root: PathBuf,
}

impl ConfigDir {
    /// `$SYNAPSE_CONFIG_DIR`, else an existing `~/.synapse`, else
    /// `synapse/` under the platform config dir
    pub fn locate() -> Result<Self> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_VAR).filter(|d| !d.is_empty()) {
            return Ok(Self::at(dir));
        }
        dirs::home_dir()
            .map(|home| home.join(".synapse"))
            .filter(|dot_dir| dot_dir.is_dir())
            .or_else(|| dirs::config_dir().map(|dir| dir.join("synapse")))
            .map(Self::at)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Cannot find a configuration directory; set {}",
                    CONFIG_DIR_VAR
                )
            })
    }

    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn profiles_dir(&self) -> PathBuf {
        self.root.join(PROFILES_SUBDIR)
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub fn profile_file(&self, name: &str) -> PathBuf {
        self.profiles_dir().join(format!("{}.json", name))
    }

    /// Create the root and profile directories if missing
    pub fn create(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.profiles_dir())
    }
}
