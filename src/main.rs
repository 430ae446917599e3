use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use planpin::{init_logging, Config, ReplayScript};

#[derive(Parser)]
#[command(
    name = "planpin",
    about = "Replay a recorded pointer script and print the confirmed pin placement"
)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"))]
struct Cli {
    /// Script file (.json or .toml)
    script: PathBuf,

    /// Engine configuration file (.json or .toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => match Config::default_path() {
            Ok(path) => Ok(Config::load_or_default(&path)?),
            Err(err) => {
                tracing::debug!(%err, "no config directory, using defaults");
                Ok(Config::default())
            }
        },
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    let config = load_config(cli.config.as_deref())?;
    let script = ReplayScript::load_from_file(&cli.script)?;
    let placement = script.replay(&config)?;

    println!("{}", serde_json::to_string_pretty(&placement)?);
    Ok(())
}
