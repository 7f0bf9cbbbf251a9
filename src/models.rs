//! Data structures describing modules, serving groups and the emitted script list.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// File-suffix transformation applied to unregistered module paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Filter {
  /// Unprocessed sources, no suffix.
  Raw,
  /// Minified sources, `-min` suffix.
  #[default]
  Min,
  /// Debug builds, `-debug` suffix.
  Debug,
}

impl Filter {
  /// Interpret a filter name, falling back to [`Filter::Min`] for anything unrecognised.
  pub fn from_name(name: &str) -> Self {
    match name.trim().to_ascii_lowercase().as_str() {
      "raw" => Self::Raw,
      "debug" => Self::Debug,
      _ => Self::Min,
    }
  }

  /// Canonical lowercase name of the filter.
  pub fn name(self) -> &'static str {
    match self {
      Self::Raw => "raw",
      Self::Min => "min",
      Self::Debug => "debug",
    }
  }

  /// Suffix inserted before the `.js` extension.
  pub fn suffix(self) -> &'static str {
    match self {
      Self::Raw => "",
      Self::Min => "-min",
      Self::Debug => "-debug",
    }
  }
}

impl std::fmt::Display for Filter {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.name())
  }
}

impl Serialize for Filter {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.name())
  }
}

impl<'de> Deserialize<'de> for Filter {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let name = String::deserialize(deserializer)?;
    Ok(Self::from_name(&name))
  }
}

/// Serving policy shared by one or more modules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupDescriptor {
  /// URL prefix for single-module requests.
  pub base: String,
  /// Whether modules of this group may be merged into a combo URL.
  pub combine: bool,
  /// URL prefix of the combo endpoint.
  pub combo_base: String,
  /// Separator placed between module paths inside a combo URL.
  pub combo_sep: String,
  /// Prefix prepended to each module path inside a combo URL.
  pub root: String,
}

impl GroupDescriptor {
  /// Two groups can share a combo URL when both combine through the same endpoint and separator.
  pub fn is_compatible_with(&self, other: &GroupDescriptor) -> bool {
    self.combine
      && other.combine
      && self.combo_base == other.combo_base
      && self.combo_sep == other.combo_sep
  }
}

/// Registry record locating a module within a group.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ModuleEntry {
  /// Name of the group serving the module.
  pub group: String,
  /// Path of the module relative to the group base.
  pub path: String,
}

/// Module name to registry record.
pub type ModuleRegistry = BTreeMap<String, ModuleEntry>;

/// Named groups plus the implicit descriptor used for unregistered modules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupCatalog {
  /// Descriptor applied to modules missing from the registry.
  pub default: Option<GroupDescriptor>,
  /// Explicitly configured groups keyed by name.
  pub groups: BTreeMap<String, GroupDescriptor>,
}

impl GroupCatalog {
  /// Create a catalog with the given fallback descriptor and no named groups.
  pub fn with_default(default: GroupDescriptor) -> Self {
    Self {
      default: Some(default),
      groups: BTreeMap::new(),
    }
  }

  /// Register a named group, replacing any previous descriptor with the same name.
  pub fn insert(&mut self, name: impl Into<String>, group: GroupDescriptor) {
    self.groups.insert(name.into(), group);
  }

  /// Look up a named group.
  pub fn group(&self, name: &str) -> Option<&GroupDescriptor> {
    self.groups.get(name)
  }

  /// Descriptor used for unregistered modules, if one is configured.
  pub fn default_group(&self) -> Option<&GroupDescriptor> {
    self.default.as_ref()
  }
}

/// A single `<script>` source emitted for the page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScriptDescriptor {
  /// URL of the script, either a single module or a combo request.
  pub src: String,
}

impl ScriptDescriptor {
  /// Wrap an already built URL.
  pub fn new(src: impl Into<String>) -> Self {
    Self { src: src.into() }
  }
}
