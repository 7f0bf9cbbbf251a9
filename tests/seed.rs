use std::fs;

use loader_seed::render::{SEED_PLACEHOLDER, inject_seed, render_runtime_config, render_script_tags};
use loader_seed::{Filter, SeedConfig};
use tempfile::tempdir;

const CONFIG: &str = r#"{
  "base": "/static/",
  "comboBase": "/combo~",
  "comboSep": "~",
  "filter": "min",
  "groups": {
    "app": {"base": "/app/", "combine": true, "comboBase": "/combo~", "comboSep": "~", "root": "app/"},
    "shared": {"base": "/shared/", "combine": true, "comboBase": "/combo~", "comboSep": "~", "root": "shared/"},
    "cdn": {"base": "https://cdn.example.com/", "combine": false}
  },
  "modules": {
    "menu": {"group": "app", "path": "menu.js"},
    "tabs": {"group": "shared", "path": "tabs.js"},
    "analytics": {"group": "cdn", "path": "analytics.js"},
    "charts": {"group": "app", "path": "charts.js"}
  },
  "seed": ["loader"]
}"#;

fn load() -> SeedConfig {
  let temp = tempdir().expect("failed to create temp dir");
  let path = temp.path().join("loader.config.json");
  fs::write(&path, CONFIG).expect("failed to write configuration");
  SeedConfig::from_path(&path).expect("configuration should load")
}

#[test]
fn renders_seed_for_a_page() {
  let config = load();
  let seeder = config.seeder().expect("configuration should validate");

  let mut request = seeder.request();
  request.extend(["menu", "tabs", "analytics", "charts", "widgets"]);
  let scripts = request.resolve();

  let srcs: Vec<&str> = scripts.iter().map(|script| script.src.as_str()).collect();
  assert_eq!(srcs, vec![
    "/static/loader/loader-min.js",
    "/combo~app/menu.js~shared/tabs.js",
    "https://cdn.example.com/analytics.js",
    "/combo~app/charts.js",
    "/static/widgets/widgets-min.js",
  ]);

  let page = format!("<html><body><main></main>{SEED_PLACEHOLDER}</body></html>");
  let block = format!("{}\n{}", render_runtime_config(&config), render_script_tags(&scripts));
  let html = inject_seed(&page, &block);

  assert!(html.contains("<script>LOADER_CONFIG={"));
  assert!(html.contains("<script src=\"/combo~app/menu.js~shared/tabs.js\"></script>"));
  assert!(!html.contains(SEED_PLACEHOLDER));
}

#[test]
fn concurrent_requests_share_one_seeder() {
  let config = load();
  let seeder = config
    .seeder()
    .expect("configuration should validate")
    .with_filter(Filter::Debug);

  let results: Vec<Vec<String>> = std::thread::scope(|scope| {
    let handles: Vec<_> = (0..4)
      .map(|index| {
        let seeder = &seeder;
        scope.spawn(move || {
          let mut request = seeder.request();
          if index % 2 == 0 {
            request.add("menu");
          }
          request
            .resolve()
            .into_iter()
            .map(|script| script.src)
            .collect::<Vec<String>>()
        })
      })
      .collect();
    handles
      .into_iter()
      .map(|handle| handle.join().expect("resolver thread panicked"))
      .collect()
  });

  for (index, srcs) in results.iter().enumerate() {
    let mut expected = vec!["/static/loader/loader-debug.js".to_string()];
    if index % 2 == 0 {
      expected.push("/combo~app/menu.js".to_string());
    }
    assert_eq!(srcs, &expected);
  }
}
