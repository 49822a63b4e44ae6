use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{AppError, ServiceEndpoints};

/// UI defaults baked in at build time.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UiConfig {
    /// Language tag used for default control texts, e.g. `es` or `en-US`.
    #[serde(default)]
    pub locale: Option<String>,
}

/// Top-level config file structure matching `config.toml`.
///
/// Every table is optional so that a missing or empty file still yields a
/// usable configuration; environment variables fill in the rest.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub endpoints: ServiceEndpoints,
    #[serde(default)]
    pub ui: UiConfig,
}

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, AppError> {
        toml::from_str(contents).map_err(|e| AppError::config_parse(e.to_string()))
    }
}

/// Name of the optional config file.
pub const CONFIG_FILE: &str = "config.toml";

/// Name of the optional dotenv file.
pub const DOTENV_FILE: &str = ".env";

/// Every `.env` and `config.toml` location a build may read, in lookup
/// order, whether or not the file exists yet.
pub fn config_inputs(dirs: &[PathBuf]) -> Vec<PathBuf> {
    let mut inputs: Vec<PathBuf> = dirs.iter().map(|dir| dir.join(DOTENV_FILE)).collect();
    inputs.extend(dirs.iter().map(|dir| dir.join(CONFIG_FILE)));
    inputs
}

/// The first existing `config.toml` among `dirs`.
pub fn find_config(dirs: &[PathBuf]) -> Option<PathBuf> {
    dirs.iter()
        .map(|dir| dir.join(CONFIG_FILE))
        .find(|path| Path::exists(path))
}
