//! Serving configuration loader for the seed resolver.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::models::{Filter, GroupCatalog, GroupDescriptor, ModuleRegistry};
use crate::seed::Seeder;

/// File name searched for by [`SeedConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "loader.config.json";

/// Top-level serving configuration, loaded once at startup and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeedConfig {
    /// URL prefix for modules served outside any named group.
    pub base: String,
    /// Combo endpoint advertised to the client loader.
    pub combo_base: String,
    /// Separator used by the combo endpoint.
    pub combo_sep: String,
    /// Root prefix advertised to the client loader.
    pub root: String,
    /// Whether the client loader may combine requests for the default group.
    pub combine: bool,
    /// File suffix filter for unregistered modules.
    pub filter: Filter,
    /// Named serving groups.
    pub groups: BTreeMap<String, GroupDescriptor>,
    /// Module registry keyed by module name.
    pub modules: ModuleRegistry,
    /// Modules every page is seeded with.
    pub seed: Vec<String>,
    /// Browser global receiving the runtime loader configuration.
    pub config_global: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            base: "/static/".into(),
            combo_base: "/combo~".into(),
            combo_sep: "~".into(),
            root: String::new(),
            combine: true,
            filter: Filter::Min,
            groups: BTreeMap::new(),
            modules: ModuleRegistry::new(),
            seed: vec!["loader".into()],
            config_global: "LOADER_CONFIG".into(),
        }
    }
}

/// Errors raised while loading or validating a [`SeedConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    Io {
        /// Path that caused the error.
        path: PathBuf,
        /// Source I/O error.
        source: std::io::Error,
    },
    /// Failed to parse a JSON configuration file.
    Json {
        /// Path that caused the error.
        path: PathBuf,
        /// Source parse error.
        source: serde_json::Error,
    },
    /// Failed to parse a YAML configuration file.
    Yaml {
        /// Path that caused the error.
        path: PathBuf,
        /// Source parse error.
        source: serde_yaml::Error,
    },
    /// A registered module names a group that is not configured.
    UnknownGroup {
        /// Module carrying the dangling reference.
        module: String,
        /// Group name that could not be found.
        group: String,
    },
    /// A combinable group has no combo endpoint.
    MissingComboBase {
        /// Offending group.
        group: String,
    },
}

impl SeedConfig {
    /// Attempt to load configuration from the provided directory.
    ///
    /// A missing or malformed file yields the defaults so callers can still render a seed.
    pub fn discover(dir: &Path) -> Self {
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        match Self::from_path(&candidate) {
            Ok(config) => config,
            Err(ConfigError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(err) => {
                tracing::warn!(error = %err, "falling back to default seed configuration");
                Self::default()
            }
        }
    }

    /// Read configuration from a JSON or YAML file, chosen by extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        if is_yaml {
            serde_yaml::from_str(&contents).map_err(|source| ConfigError::Yaml {
                path: path.to_path_buf(),
                source,
            })
        } else {
            serde_json::from_str(&contents).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    /// Check that every registry entry points at a configured group and that combinable groups
    /// have somewhere to combine to.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (module, entry) in &self.modules {
            if !self.groups.contains_key(&entry.group) {
                return Err(ConfigError::UnknownGroup {
                    module: module.clone(),
                    group: entry.group.clone(),
                });
            }
        }

        for (name, group) in &self.groups {
            if group.combine && group.combo_base.is_empty() {
                return Err(ConfigError::MissingComboBase {
                    group: name.clone(),
                });
            }
        }

        Ok(())
    }

    /// Descriptor applied to modules that are not in the registry.
    ///
    /// Mirrors the top-level serving settings but never combines.
    pub fn default_group(&self) -> GroupDescriptor {
        GroupDescriptor {
            base: self.base.clone(),
            combine: false,
            combo_base: self.combo_base.clone(),
            combo_sep: self.combo_sep.clone(),
            root: self.root.clone(),
        }
    }

    /// Group catalog with the implicit default descriptor and every named group.
    pub fn catalog(&self) -> GroupCatalog {
        GroupCatalog {
            default: Some(self.default_group()),
            groups: self.groups.clone(),
        }
    }

    /// Validate the configuration and build the shared [`Seeder`].
    pub fn seeder(&self) -> Result<Seeder, ConfigError> {
        self.validate()?;
        Ok(Seeder::new(
            self.modules.clone(),
            self.catalog(),
            self.filter,
            self.seed.clone(),
        ))
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            Self::Json { path, source } => {
                write!(f, "failed to parse {}: {}", path.display(), source)
            }
            Self::Yaml { path, source } => {
                write!(f, "failed to parse {}: {}", path.display(), source)
            }
            Self::UnknownGroup { module, group } => {
                write!(f, "module '{module}' references unknown group '{group}'")
            }
            Self::MissingComboBase { group } => {
                write!(f, "group '{group}' combines but has no comboBase")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Yaml { source, .. } => Some(source),
            Self::UnknownGroup { .. } | Self::MissingComboBase { .. } => None,
        }
    }
}
