use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use loader_seed::render::{inject_seed, render_runtime_config, render_script_tags};
use loader_seed::{Filter, SeedConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
  name = "loader-seed",
  about = "Resolve loader seed modules into script tags for server-rendered pages"
)]
struct Cli {
  /// Configuration file (JSON or YAML); omit to discover loader.config.json in the working directory.
  #[arg(short, long)]
  config: Option<PathBuf>,

  /// Override the configured file filter.
  #[arg(short, long, value_enum)]
  filter: Option<FilterArg>,

  /// Page to inject the seed into; omit to print the seed on its own.
  #[arg(long)]
  html: Option<PathBuf>,

  /// Output destination; omit for stdout.
  #[arg(short, long)]
  output: Option<PathBuf>,

  /// Print the resolved script list as JSON instead of tags.
  #[arg(long, conflicts_with_all = ["html", "runtime_config"])]
  json: bool,

  /// Prepend the inline runtime loader configuration to the tags.
  #[arg(long)]
  runtime_config: bool,

  /// Modules to load after the configured seed.
  modules: Vec<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FilterArg {
  Raw,
  Min,
  Debug,
}

impl From<FilterArg> for Filter {
  fn from(arg: FilterArg) -> Self {
    match arg {
      FilterArg::Raw => Filter::Raw,
      FilterArg::Min => Filter::Min,
      FilterArg::Debug => Filter::Debug,
    }
  }
}

fn load_config(path: Option<&PathBuf>) -> Result<SeedConfig> {
  match path {
    Some(path) => SeedConfig::from_path(path)
      .with_context(|| format!("failed to load configuration from {}", path.display())),
    None => {
      let cwd = std::env::current_dir().context("failed to resolve working directory")?;
      Ok(SeedConfig::discover(&cwd))
    }
  }
}

fn main() -> Result<()> {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "loader_seed=warn".into()),
    )
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .init();

  let args = Cli::parse();
  let config = load_config(args.config.as_ref())?;
  let mut seeder = config.seeder().context("invalid seed configuration")?;
  if let Some(filter) = args.filter {
    seeder = seeder.with_filter(filter.into());
  }

  let mut request = seeder.request();
  request.extend(args.modules.iter().map(String::as_str));
  let scripts = request.resolve();
  tracing::debug!(
    modules = request.modules().len(),
    scripts = scripts.len(),
    "resolved seed"
  );

  let rendered = if args.json {
    serde_json::to_string_pretty(&scripts)?
  } else {
    let mut block = render_script_tags(&scripts);
    if args.runtime_config {
      let runtime = render_runtime_config(&config);
      block = if block.is_empty() {
        runtime
      } else {
        format!("{runtime}\n{block}")
      };
    }

    match &args.html {
      Some(page) => {
        let html = fs::read_to_string(page)
          .with_context(|| format!("failed to read {}", page.display()))?;
        inject_seed(&html, &block)
      }
      None => block,
    }
  };

  match &args.output {
    Some(path) => fs::write(path, &rendered)
      .with_context(|| format!("failed to write {}", path.display()))?,
    None => {
      let mut stdout = std::io::stdout().lock();
      writeln!(stdout, "{rendered}")?;
    }
  }

  Ok(())
}
