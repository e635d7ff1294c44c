//! Print the option record the CSS extract plugin hands to the build engine.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use serde_json::json;

use css_extract_options::config::PluginConfig;
use css_extract_options::plugin::RecordingEngine;

#[derive(Debug, Parser)]
#[command(name = "css-extract-options", version, about)]
struct Cli {
  /// Configuration file to load.
  #[arg(long, value_name = "PATH", conflicts_with = "dir")]
  config: Option<PathBuf>,

  /// Directory searched for `css-extract.config.json` (defaults to the working directory).
  #[arg(long, value_name = "DIR")]
  dir: Option<PathBuf>,

  /// Pretty-print the JSON output.
  #[arg(long)]
  pretty: bool,

  /// Also print the build settings after the plugin adjusted them.
  #[arg(long)]
  show_build: bool,
}

fn main() -> Result<()> {
  env_logger::init();
  let cli = Cli::parse();

  let config = match &cli.config {
    Some(path) => PluginConfig::load_from_path(path)
      .with_context(|| format!("failed to load {}", path.display()))?,
    None => {
      let dir = cli.dir.clone().unwrap_or_else(|| PathBuf::from("."));
      PluginConfig::discover(&dir)
        .with_context(|| format!("failed to discover configuration in {}", dir.display()))?
    }
  };

  let (mut plugin, mut build) = config.into_parts();
  let mut engine = RecordingEngine::new();
  plugin.apply(&mut build, &mut engine)?;

  let record = engine
    .last_options()
    .ok_or_else(|| anyhow!("plugin did not register with the engine"))?;
  let mut output = serde_json::to_value(record).context("failed to serialize option record")?;
  if cli.show_build {
    output = json!({ "options": output, "build": build });
  }

  let text = if cli.pretty {
    serde_json::to_string_pretty(&output)?
  } else {
    serde_json::to_string(&output)?
  };
  println!("{text}");

  Ok(())
}
