//! Command-line front end: reads a route file and prints every robot's end position.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::info;
use traveler::{Coordinator, TravelerConfig};

#[derive(Parser, Debug)]
#[command(name = "traveler", version, about = "Compute robot end positions from route files")]
struct Cli {
    /// Route file to read.
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// TOML file overriding the default markers and step length.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// One `X=.. Y=.. D=..` line per robot.
    Text,
    /// A JSON array of `{x, y, direction}` objects.
    Json,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => TravelerConfig::default(),
    };
    let coordinator = Coordinator::new(&config).context("invalid configuration")?;

    info!(input = %cli.input.display(), "reading routes");
    let raw = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let triples = coordinator.run(&raw)?;

    match cli.format {
        Format::Text => {
            for triple in &triples {
                println!("{triple}");
            }
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&triples)?),
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<TravelerConfig> {
    info!(path = %path.display(), "loading configuration");
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse config {}", path.display()))
}
