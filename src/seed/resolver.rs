//! Turn an ordered list of module names into the script descriptors that load them.

use crate::models::{Filter, GroupCatalog, GroupDescriptor, ModuleRegistry, ScriptDescriptor};
use crate::seed::combo::ComboRun;

/// Path used for a module that has no registry entry: `name/name{suffix}.js`.
pub fn default_module_path(name: &str, filter: Filter) -> String {
  format!("{name}/{name}{}.js", filter.suffix())
}

/// Resolve a module to its serving group and path.
///
/// Registered modules must name a group present in the catalog. Unregistered modules use the
/// catalog default with a filter-derived path. `None` means the module cannot be served.
pub fn resolve_module<'a>(
  name: &str,
  registry: &ModuleRegistry,
  catalog: &'a GroupCatalog,
  filter: Filter,
) -> Option<(&'a GroupDescriptor, String)> {
  match registry.get(name) {
    Some(entry) => catalog
      .group(&entry.group)
      .map(|group| (group, entry.path.clone())),
    None => catalog
      .default_group()
      .map(|group| (group, default_module_path(name, filter))),
  }
}

/// Produce the ordered, combo-optimised script list for `module_names`.
///
/// Consecutive modules whose groups are compatible and combinable are merged into a single
/// combo descriptor placed where the first of them appears. Non-combinable modules are emitted
/// as `group.base + path` and always terminate the pending run. Modules that cannot be resolved
/// are skipped with a warning.
pub fn resolve_seed<S: AsRef<str>>(
  module_names: &[S],
  registry: &ModuleRegistry,
  catalog: &GroupCatalog,
  filter: Filter,
) -> Vec<ScriptDescriptor> {
  let mut scripts = Vec::new();
  let mut run = ComboRun::new();

  for name in module_names {
    let name = name.as_ref();
    let Some((group, path)) = resolve_module(name, registry, catalog, filter) else {
      match registry.get(name) {
        Some(entry) => tracing::warn!(
          module = name,
          group = %entry.group,
          "skipping seed module registered to an unknown group"
        ),
        None => tracing::warn!(
          module = name,
          "skipping unregistered seed module, no default group configured"
        ),
      }
      continue;
    };

    if !run.accepts(group) {
      scripts.extend(run.flush());
    }

    if group.combine {
      run.push(group, &path);
    } else {
      scripts.push(ScriptDescriptor::new(format!("{}{}", group.base, path)));
    }
  }

  scripts.extend(run.flush());
  scripts
}
