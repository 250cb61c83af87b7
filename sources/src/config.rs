//! Configuration for the store endpoint, loaded through the shared `ConfigFile`
//! engine from `config.hcl`.
//!

use std::fs;
use std::io;
use std::path::Path;

use eyre::Result;
use serde::Deserialize;
use tracing::trace;

use bousai_common::{ConfigFile, Versioned};

use crate::Auth;

/// Current config.hcl version
const CVERSION: usize = 1;

/// Connection parameters for the document store.
///
#[derive(Clone, Debug, Default, Deserialize)]
pub struct StoreParams {
    /// Base URL (to avoid repeating)
    pub base_url: String,
    /// Credentials
    #[serde(default)]
    pub auth: Auth,
}

/// Configuration for the CLI tool: the store endpoint and a few display
/// defaults.
///
#[derive(Clone, Debug, Default, Deserialize)]
pub struct StoreConfig {
    /// Version number for safety
    pub version: usize,
    /// The one store endpoint we talk to
    pub store: StoreParams,
    /// Map recenters here when no district is selected
    pub default_district: Option<String>,
}

impl Versioned for StoreConfig {
    const VERSION: usize = CVERSION;

    fn version(&self) -> usize {
        self.version
    }
}

impl StoreConfig {
    /// Load from the given file or the default location.
    ///
    #[tracing::instrument]
    pub fn load(fname: Option<&str>) -> Result<Self> {
        trace!("loading store config");
        let cfg = ConfigFile::<StoreConfig>::load(fname)?;
        Ok(cfg.inner().clone())
    }

    /// Install default files
    ///
    #[tracing::instrument]
    pub fn install_defaults(dir: &Path) -> io::Result<()> {
        // Create config directory if needed
        //
        if !dir.exists() {
            fs::create_dir_all(dir)?
        }

        // Copy content of `config.hcl` into place.
        //
        let fname = dir.join("config.hcl");
        let content = include_str!("config.hcl");
        fs::write(fname, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let data = include_str!("config.hcl");
        let cfg: StoreConfig = hcl::from_str(data).unwrap();
        assert_eq!(CVERSION, cfg.version());
        assert!(!cfg.store.base_url.is_empty());
        assert_eq!(Auth::Anon, cfg.store.auth);
    }
}
