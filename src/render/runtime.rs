//! Client-side loader configuration emitted alongside the seed.

use serde_json::{Value, json};

use crate::config::SeedConfig;

/// Build the configuration object handed to the client loader.
pub fn runtime_config(config: &SeedConfig) -> Value {
  json!({
    "base": config.base,
    "comboBase": config.combo_base,
    "comboSep": config.combo_sep,
    "root": config.root,
    "combine": config.combine,
    "filter": config.filter,
    "groups": config.groups,
    "modules": config.modules,
  })
}

/// Render an inline script assigning the runtime configuration to the configured global.
///
/// Characters that could close the script element or break JavaScript string parsing are
/// emitted as unicode escapes.
pub fn render_runtime_config(config: &SeedConfig) -> String {
  let payload = escape_inline_json(&runtime_config(config).to_string());
  format!(
    "<script>{global}={payload};</script>",
    global = config.config_global
  )
}

fn escape_inline_json(json: &str) -> String {
  let mut escaped = String::with_capacity(json.len());
  for ch in json.chars() {
    match ch {
      '<' => escaped.push_str("\\u003c"),
      '>' => escaped.push_str("\\u003e"),
      '&' => escaped.push_str("\\u0026"),
      '\u{2028}' => escaped.push_str("\\u2028"),
      '\u{2029}' => escaped.push_str("\\u2029"),
      _ => escaped.push(ch),
    }
  }
  escaped
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::{Filter, GroupDescriptor, ModuleEntry};

  fn config() -> SeedConfig {
    let mut config = SeedConfig {
      filter: Filter::Debug,
      ..SeedConfig::default()
    };
    config.groups.insert("app".into(), GroupDescriptor {
      base: "/app/".into(),
      combine: true,
      combo_base: "/combo?".into(),
      combo_sep: "&".into(),
      root: "app/".into(),
    });
    config.modules.insert("menu".into(), ModuleEntry {
      group: "app".into(),
      path: "menu.js".into(),
    });
    config
  }

  #[test]
  fn exposes_serving_settings_groups_and_modules() {
    let value = runtime_config(&config());
    assert_eq!(value["base"], "/static/");
    assert_eq!(value["filter"], "debug");
    assert_eq!(value["groups"]["app"]["comboBase"], "/combo?");
    assert_eq!(value["modules"]["menu"]["path"], "menu.js");
  }

  #[test]
  fn escapes_markup_inside_inline_script() {
    let mut config = config();
    config.root = "</script><b>".into();
    let rendered = render_runtime_config(&config);

    assert!(rendered.starts_with("<script>LOADER_CONFIG={"));
    assert!(rendered.ends_with("};</script>"));
    assert_eq!(rendered.matches("</script>").count(), 1);
    assert!(rendered.contains("\\u003c/script\\u003e\\u003cb\\u003e"));
    assert!(rendered.contains("\"comboSep\":\"\\u0026\""));
  }

  #[test]
  fn escaped_payload_is_still_valid_json() {
    let mut config = config();
    config.base = "/<&>\u{2028}/".into();
    let rendered = render_runtime_config(&config);
    let payload = rendered
      .trim_start_matches("<script>LOADER_CONFIG=")
      .trim_end_matches(";</script>");

    let value: Value = serde_json::from_str(payload).unwrap();
    assert_eq!(value["base"], "/<&>\u{2028}/");
  }
}
