//! Configuration loading.
//!
//! Layers, later ones winning: built-in defaults, the user config file
//! (`~/.config/lifecal/config.toml` on Linux), `./config.toml` or the file
//! given with `--config`, then `LIFECAL_*` environment variables.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{Datelike, Local};
use chrono_tz::Tz;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use lifecal_core::tz::parse_tz;
use lifecal_core::{CategoryPriority, CategoryStyle};
use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG_FILE: &str = "config.toml";
const DEFAULT_DATA_FOLDER: &str = "data";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Years to process, in order.
    pub years: Vec<i32>,
    /// Folder holding one sub-folder of CSV files per year.
    pub data_folder: PathBuf,
    /// IANA zone used to decide today's date; the system zone when unset.
    pub timezone: Option<String>,
    /// Priority and style per category name.
    pub categories: BTreeMap<String, CategoryStyle>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            years: vec![Local::now().year()],
            data_folder: PathBuf::from(DEFAULT_DATA_FOLDER),
            timezone: None,
            categories: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file instead of `./config.toml`.
    #[allow(clippy::result_large_err)]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        Self::load_layers(dirs_config_path().as_deref(), config_path)
    }

    #[allow(clippy::result_large_err)]
    fn load_layers(
        user_dir: Option<&Path>,
        config_path: Option<&Path>,
    ) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = user_dir {
            figment = figment.merge(Toml::file(config_dir.join(DEFAULT_CONFIG_FILE)));
        }

        let local = config_path.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
        figment = figment.merge(Toml::file(local));

        figment = figment.merge(Env::prefixed("LIFECAL_"));

        figment.extract()
    }

    /// The data folder, falling back to `./data` when the configured folder is missing.
    pub fn data_folder_with_fallback(&self) -> PathBuf {
        if self.data_folder.exists() {
            return self.data_folder.clone();
        }

        let default = Path::new(DEFAULT_DATA_FOLDER);
        if self.data_folder != default && default.exists() {
            tracing::debug!(
                configured = %self.data_folder.display(),
                "data folder missing, using ./data"
            );
            return default.to_path_buf();
        }

        self.data_folder.clone()
    }

    /// Category priorities for the resolver.
    pub fn priorities(&self) -> CategoryPriority {
        CategoryPriority::new(self.categories.clone())
    }

    /// The configured timezone, if any.
    pub fn tz(&self) -> lifecal_core::Result<Option<Tz>> {
        self.timezone.as_deref().map(parse_tz).transpose()
    }
}

/// Returns the platform-specific config directory for lifecal.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("lifecal"))
}
