//! Authoring tool for content packs.
//!
//! Loads a pack the same way the runtime does and answers metadata lookups
//! or renders tokenized text against it.
//! Run with: `cargo run -p patch-inspect -- <command>`

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Character, Object, Output, Quest, Render, Tokens};
use patch_runtime::{PatchRuntime, RuntimeConfig};

/// Inspect content pack tokens and metadata overrides
#[derive(Parser)]
#[command(name = "patch-inspect")]
#[command(about = "Inspect content pack tokens and metadata overrides", long_about = None)]
#[command(version)]
struct Cli {
    /// Content pack directory (defaults to $PATCH_DATA_DIR or the platform data dir)
    #[arg(short, long, value_name = "DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Look up the object override for a sprite
    Object(Object),

    /// Look up the character override for a name and target type
    Character(Character),

    /// Look up the Adventurer's Guild quest for a monster
    Quest(Quest),

    /// List registered tokens and their preview values
    Tokens(Tokens),

    /// Render tokenized text with the pack's preview context
    Render(Render),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for PATCH_DATA_DIR and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match cli.data_dir {
        Some(dir) => RuntimeConfig::new(dir),
        None => RuntimeConfig::from_env(),
    };
    let data_dir = config.data_dir.clone();
    let runtime = PatchRuntime::start(config)
        .with_context(|| format!("Failed to load content pack: {}", data_dir.display()))?;
    let snapshot = runtime
        .snapshot()
        .context("Runtime started without publishing content")?;

    let output = if cli.json { Output::Json } else { Output::Text };

    match cli.command {
        Command::Object(cmd) => cmd.execute(&snapshot, output),
        Command::Character(cmd) => cmd.execute(&snapshot, output),
        Command::Quest(cmd) => cmd.execute(&snapshot, output),
        Command::Tokens(cmd) => cmd.execute(&snapshot, output),
        Command::Render(cmd) => cmd.execute(&snapshot, output),
    }
}
