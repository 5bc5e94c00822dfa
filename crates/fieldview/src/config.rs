//! View configuration.
//!
//! A [`ViewConfig`] maps each [`ViewId`] to the access tag fields must carry
//! to survive a trim into that view. It is built once, extended through
//! by-value builders and then shared read-only (it is `Send + Sync`; wrap it
//! in an `Arc` or clone it to hand it out).
//!
//! ```
//! use fieldview::{ViewConfig, ViewId};
//!
//! const PURCHASER: ViewId = ViewId::custom("purchaser");
//!
//! let config = ViewConfig::default()
//!     .extend([(PURCHASER, "purchaserOnly")])
//!     .enable_logs();
//!
//! assert_eq!(config.tag_for(&ViewId::Public), Some("pub"));
//! assert_eq!(config.tag_for(&PURCHASER), Some("purchaserOnly"));
//! assert!(config.log_enabled());
//! ```

use crate::annotation::{DELIMITER, TagMatch};
use crate::error::ConfigError;
use crate::view::ViewId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Mapping from views to access tags, plus logging and matching preferences.
///
/// Deserializing follows the same rules as [`ViewConfig::from_toml_str`]:
/// `filters` extend the built-in views and invalid tags are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConfigFile")]
pub struct ViewConfig {
    log_enabled: bool,
    match_mode: TagMatch,
    filters: HashMap<ViewId, String>,
}

impl Default for ViewConfig {
    /// Create→`create`, Update→`update`, Public→`pub`, Private→`priv`,
    /// logging off, token matching.
    fn default() -> Self {
        let filters = ViewId::BUILT_IN
            .into_iter()
            .map(|view| {
                let tag = view.name().to_string();
                (view, tag)
            })
            .collect();

        Self {
            log_enabled: false,
            match_mode: TagMatch::Token,
            filters,
        }
    }
}

impl ViewConfig {
    /// Same as [`ViewConfig::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration with no views at all.
    pub fn empty() -> Self {
        Self {
            log_enabled: false,
            match_mode: TagMatch::Token,
            filters: HashMap::new(),
        }
    }

    /// Inserts or overwrites the tag of every view in `additions`.
    ///
    /// Custom views named after a built-in view (`ViewId::custom("pub")`)
    /// overwrite that built-in view. If `additions` yields the same view
    /// twice, the last one yielded wins. When the source is itself an
    /// unordered map that order is unspecified.
    pub fn extend<I, T>(mut self, additions: I) -> Self
    where
        I: IntoIterator<Item = (ViewId, T)>,
        T: Into<String>,
    {
        for (view, tag) in additions {
            self.filters.insert(view.canonical(), tag.into());
        }
        self
    }

    /// Turns on per-field diagnostic logging during trims.
    pub fn enable_logs(mut self) -> Self {
        self.log_enabled = true;
        self
    }

    /// Selects how tags are matched against annotations.
    pub fn with_match_mode(mut self, mode: TagMatch) -> Self {
        self.match_mode = mode;
        self
    }

    /// Returns the tag configured for `view`.
    pub fn tag_for(&self, view: &ViewId) -> Option<&str> {
        let tag = match view {
            ViewId::Custom(name) => match ViewId::built_in_named(name) {
                Some(built_in) => self.filters.get(&built_in),
                None => self.filters.get(view),
            },
            _ => self.filters.get(view),
        };
        tag.map(String::as_str)
    }

    /// Iterates over every configured view and its tag, sorted by view.
    pub fn views(&self) -> impl Iterator<Item = (&ViewId, &str)> {
        let mut views: Vec<_> = self
            .filters
            .iter()
            .map(|(view, tag)| (view, tag.as_str()))
            .collect();
        views.sort_by(|a, b| a.0.cmp(b.0));
        views.into_iter()
    }

    pub fn log_enabled(&self) -> bool {
        self.log_enabled
    }

    pub fn match_mode(&self) -> TagMatch {
        self.match_mode
    }

    /// Parses a single TOML document.
    ///
    /// `[filters]` entries extend the built-in views rather than replacing
    /// them; scalar keys override the defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(source)?;
        Self::try_from(file)
    }

    /// Reads and parses a TOML file. See [`ViewConfig::from_toml_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Loading view configuration");
        Self::from_toml_str(&source)
    }

    /// Rejects tags that could never match a field, or that only match
    /// because matching ignores their surrounding whitespace.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (view, tag) in &self.filters {
            if tag.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "view '{view}' has an empty access tag"
                )));
            }
            if tag.trim() != tag {
                return Err(ConfigError::ValidationError(format!(
                    "view '{view}' tag '{tag}' has surrounding whitespace"
                )));
            }
            if self.match_mode == TagMatch::Token && tag.contains(DELIMITER) {
                return Err(ConfigError::ValidationError(format!(
                    "view '{view}' tag '{tag}' contains the delimiter '{DELIMITER}'"
                )));
            }
        }
        Ok(())
    }
}

/// On-disk shape of a view configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct ConfigFile {
    log_enabled: Option<bool>,
    match_mode: Option<TagMatch>,
    filters: HashMap<ViewId, String>,
}

impl ConfigFile {
    fn apply(self, base: ViewConfig) -> ViewConfig {
        let mut config = base.extend(self.filters);
        if let Some(log_enabled) = self.log_enabled {
            config.log_enabled = log_enabled;
        }
        if let Some(mode) = self.match_mode {
            config.match_mode = mode;
        }
        config
    }
}

impl TryFrom<ConfigFile> for ViewConfig {
    type Error = ConfigError;

    fn try_from(file: ConfigFile) -> Result<Self, Self::Error> {
        let config = file.apply(ViewConfig::default());
        config.validate()?;
        Ok(config)
    }
}
