//! This is the `ConfigFile` struct.
//!
//! This is for finding the right default locations for the various configuration files of
//! `bousai`.  This is a configuration file/struct neutral loading engine, storing only the
//! base directory and with `load()` read the proper file or the default one.
//!
//! The actual configuration struct is available with `.inner()`.
//!

use std::fmt::Debug;
use std::path::PathBuf;
use std::{env, fs};

use directories::BaseDirs;
use eyre::{eyre, Result};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

/// Config filename
const CONFIG: &str = "config.hcl";

/// Main name for the directory base
const TAG: &str = "bousai";

/// Every configuration file carries a version number so we can detect stale files.
///
pub trait Versioned {
    /// Expected version for the current code.
    const VERSION: usize;

    /// Version found in the loaded file.
    fn version(&self) -> usize;
}

/// Generic loader for the configuration file, keeping track of where it was found.
///
#[derive(Debug)]
pub struct ConfigFile<T: Debug + DeserializeOwned + Versioned> {
    /// Tag is the project name.
    tag: String,
    /// This is the base directory for all files.
    basedir: PathBuf,
    inner: Option<T>,
}

/// Where the project configuration lives, whether or not a file exists there
/// yet (based on $HOME or $LOCALAPPDATA).
///
pub fn default_config_dir() -> PathBuf {
    match BaseDirs::new() {
        Some(base) => {
            #[cfg(unix)]
            let base = base.home_dir().join(".config");

            #[cfg(windows)]
            let base = base.data_local_dir().to_path_buf();

            debug!("base = {base:?}");
            base.join(TAG)
        }
        None => {
            #[cfg(unix)]
            let homedir = env::var("HOME").map_err(|_| "No HOME defined").unwrap();

            #[cfg(windows)]
            let homedir = env::var("LOCALAPPDATA")
                .map_err(|_| "No LOCALAPPDATA defined")
                .unwrap();

            debug!("base = {homedir}");

            #[cfg(unix)]
            let base = PathBuf::from(homedir).join(".config").join(TAG);

            #[cfg(windows)]
            let base = PathBuf::from(homedir).join(TAG);

            base
        }
    }
}

impl<T> ConfigFile<T>
where
    T: Debug + DeserializeOwned + Versioned,
{
    #[tracing::instrument]
    fn new() -> Self {
        ConfigFile {
            tag: String::from(TAG),
            basedir: default_config_dir(),
            inner: None,
        }
    }

    /// Returns the path of the default config directory
    ///
    pub fn config_path(&self) -> PathBuf {
        self.basedir.clone()
    }

    /// Returns the path of the default config file
    ///
    pub fn default_file(&self) -> PathBuf {
        let cfg = self.config_path().join(CONFIG);
        debug!("default = {cfg:?}");
        cfg
    }

    /// Load the file and return a struct T in the right format.
    ///
    /// Use the following search path:
    /// - file specified on CLI
    /// - default basedir (based on $HOME or $LOCALAPPDATA)
    ///
    #[tracing::instrument]
    pub fn load(fname: Option<&str>) -> Result<ConfigFile<T>> {
        let mut cfg = ConfigFile::<T>::new();

        let fname = match fname {
            Some(fname) => PathBuf::from(fname),
            None => cfg.default_file(),
        };

        // Use a full path
        //
        let fname = if fname.exists() {
            fname.canonicalize()?
        } else {
            return Err(eyre!(
                "Unknown config file {:?} and no default in {:?}",
                fname,
                cfg.default_file()
            ));
        };

        trace!("Loading config file {fname:?} from {:?}", cfg.config_path());

        let data = fs::read_to_string(fname)?;
        let data: T = hcl::from_str(&data)?;
        debug!("struct data = {data:?}");

        if data.version() != T::VERSION {
            return Err(eyre!(
                "Bad configuration file version {} (expected {})",
                data.version(),
                T::VERSION
            ));
        }

        cfg.inner = Some(data);
        Ok(cfg)
    }

    /// Return the inner configuration struct
    ///
    pub fn inner(&self) -> &T {
        self.inner.as_ref().unwrap()
    }

    /// Return the tag aka project name
    ///
    pub fn tag(&self) -> &str {
        &self.tag
    }
}
