//! Immutable seeding state shared across requests plus the per-request module list.

use crate::models::{Filter, GroupCatalog, ModuleRegistry, ScriptDescriptor};
use crate::seed::resolver::resolve_seed;

/// Configuration resolved once at startup and shared read-only by every request.
///
/// There is no empty seeder: build one from a [`crate::SeedConfig`] or pass a catalog
/// explicitly.
///
/// ```compile_fail
/// let seeder = loader_seed::Seeder::default();
/// ```
#[derive(Debug, Clone)]
pub struct Seeder {
  registry: ModuleRegistry,
  catalog: GroupCatalog,
  filter: Filter,
  default_seed: Vec<String>,
}

impl Seeder {
  /// Assemble a seeder from already validated parts.
  pub fn new(
    registry: ModuleRegistry,
    catalog: GroupCatalog,
    filter: Filter,
    default_seed: Vec<String>,
  ) -> Self {
    Self {
      registry,
      catalog,
      filter,
      default_seed,
    }
  }

  /// Copy of this seeder using a different filter.
  pub fn with_filter(mut self, filter: Filter) -> Self {
    self.filter = filter;
    self
  }

  /// Active filter.
  pub fn filter(&self) -> Filter {
    self.filter
  }

  /// Module registry consulted during resolution.
  pub fn registry(&self) -> &ModuleRegistry {
    &self.registry
  }

  /// Group catalog consulted during resolution.
  pub fn catalog(&self) -> &GroupCatalog {
    &self.catalog
  }

  /// Modules every request starts with.
  pub fn default_seed(&self) -> &[String] {
    &self.default_seed
  }

  /// Resolve an arbitrary module list against this configuration.
  pub fn resolve<S: AsRef<str>>(&self, module_names: &[S]) -> Vec<ScriptDescriptor> {
    resolve_seed(module_names, &self.registry, &self.catalog, self.filter)
  }

  /// Start a request-scoped module list pre-populated with the default seed.
  pub fn request(&self) -> SeedRequest<'_> {
    let mut request = SeedRequest {
      seeder: self,
      modules: Vec::with_capacity(self.default_seed.len()),
    };
    request.extend(self.default_seed.iter().map(String::as_str));
    request
  }
}

/// Ordered module list accumulated while handling a single request.
#[derive(Debug, Clone)]
pub struct SeedRequest<'a> {
  seeder: &'a Seeder,
  modules: Vec<String>,
}

impl<'a> SeedRequest<'a> {
  /// Append a module; names already present keep their original position.
  pub fn add(&mut self, name: &str) -> &mut Self {
    let name = name.trim();
    if !name.is_empty() && !self.modules.iter().any(|existing| existing == name) {
      self.modules.push(name.to_string());
    }
    self
  }

  /// Append several modules in order.
  pub fn extend<'n>(&mut self, names: impl IntoIterator<Item = &'n str>) -> &mut Self {
    for name in names {
      self.add(name);
    }
    self
  }

  /// Modules requested so far.
  pub fn modules(&self) -> &[String] {
    &self.modules
  }

  /// Resolve the accumulated modules into script descriptors.
  pub fn resolve(&self) -> Vec<ScriptDescriptor> {
    self.seeder.resolve(&self.modules)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::{GroupDescriptor, ModuleEntry};

  fn seeder() -> Seeder {
    let mut catalog = GroupCatalog::with_default(GroupDescriptor {
      base: "/static/".into(),
      combine: false,
      combo_base: "/combo~".into(),
      combo_sep: "~".into(),
      root: String::new(),
    });
    catalog.insert("app", GroupDescriptor {
      base: "/app/".into(),
      combine: true,
      combo_base: "/combo~".into(),
      combo_sep: "~".into(),
      root: "app/".into(),
    });

    let mut registry = ModuleRegistry::new();
    registry.insert("menu".into(), ModuleEntry {
      group: "app".into(),
      path: "menu.js".into(),
    });
    registry.insert("tabs".into(), ModuleEntry {
      group: "app".into(),
      path: "tabs.js".into(),
    });

    Seeder::new(registry, catalog, Filter::Min, vec!["loader".into()])
  }

  #[test]
  fn requests_start_from_default_seed() {
    let seeder = seeder();
    let request = seeder.request();
    assert_eq!(request.modules(), ["loader".to_string()]);
  }

  #[test]
  fn ignores_duplicates_and_blank_names() {
    let seeder = seeder();
    let mut request = seeder.request();
    request.add("menu").add(" ").add("loader").extend(["tabs", "menu"]);
    assert_eq!(request.modules(), [
      "loader".to_string(),
      "menu".to_string(),
      "tabs".to_string()
    ]);
  }

  #[test]
  fn requests_do_not_leak_into_each_other() {
    let seeder = seeder();
    let mut first = seeder.request();
    first.add("menu");
    let second = seeder.request();

    assert_eq!(first.resolve().len(), 2);
    assert_eq!(second.resolve(), vec![ScriptDescriptor::new(
      "/static/loader/loader-min.js"
    )]);
  }

  #[test]
  fn resolves_accumulated_modules() {
    let seeder = seeder().with_filter(Filter::Debug);
    let mut request = seeder.request();
    request.extend(["menu", "tabs"]);

    let srcs: Vec<String> = request
      .resolve()
      .into_iter()
      .map(|script| script.src)
      .collect();
    assert_eq!(srcs, vec![
      "/static/loader/loader-debug.js".to_string(),
      "/combo~app/menu.js~app/tabs.js".to_string(),
    ]);
  }
}
