//! Layered configuration loading.
//!
//! Sources, lowest precedence first:
//! 1. Built-in defaults ([`ViewConfig::default`])
//! 2. `fieldview.toml` in the project directory
//! 3. `fieldview.local.toml` (gitignored, local overrides)
//! 4. Environment variables (`FIELDVIEW_*`, nested keys split on `__`)
//!
//! `[filters]` tables merge key by key, so a file only has to list the views
//! it adds or overrides. View names read from files should be lowercase.

use crate::config::{ConfigFile, ViewConfig};
use crate::error::ConfigError;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Project-level configuration file name.
pub const PROJECT_CONFIG_FILE: &str = "fieldview.toml";

/// Local override file name.
pub const LOCAL_CONFIG_FILE: &str = "fieldview.local.toml";

/// Configuration loader with builder pattern
pub struct ConfigLoader {
    project_dir: PathBuf,
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new config loader with default project directory (current dir)
    pub fn new() -> Self {
        Self {
            project_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            env_prefix: "FIELDVIEW".to_string(),
        }
    }

    /// Set the project directory
    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the environment variable prefix (default: "FIELDVIEW")
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources with proper precedence
    pub fn load(self) -> Result<ViewConfig, ConfigError> {
        let mut builder = config::Config::builder();

        // 1. Built-in defaults
        let defaults = ViewConfig::default();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        // 2. Project config, 3. local overrides
        for name in [PROJECT_CONFIG_FILE, LOCAL_CONFIG_FILE] {
            let file = self.project_dir.join(name);
            if file.exists() {
                debug!(path = %file.display(), "Adding configuration source");
                builder = builder.add_source(
                    config::File::from(file)
                        .required(false)
                        .format(config::FileFormat::Toml),
                );
            }
        }

        // 4. Environment variables
        builder = builder.add_source(
            config::Environment::with_prefix(&self.env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let file: ConfigFile = builder.build()?.try_deserialize()?;
        let view_config = ViewConfig::try_from(file)?;

        debug!(
            views = view_config.views().count(),
            log_enabled = view_config.log_enabled(),
            "Loaded view configuration"
        );

        Ok(view_config)
    }

    /// Load configuration or return defaults if not found
    pub fn load_or_default(self) -> ViewConfig {
        self.load().unwrap_or_default()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
