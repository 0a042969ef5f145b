//! Writes a synthetic gallery markup file.

use anyhow::{Context, Result};
use clap::Parser;
use minigallery::generate_gallery;
use minigallery::virtual_gallery::DEFAULT_SEED;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate gallery markup for the viewer", long_about = None)]
struct Cli {
    /// Output markup file
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Random seed
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Number of panels (one link each)
    #[arg(long, default_value_t = 5)]
    panels: usize,

    /// Maximum items per panel
    #[arg(long, default_value_t = 6)]
    max_items: usize,
}

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    let markup = generate_gallery(cli.seed, cli.panels, cli.max_items);

    let file = File::create(&cli.output)
        .with_context(|| format!("Failed to create {}", cli.output.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &markup)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    info!(
        path = %cli.output.display(),
        panels = markup.panels.len(),
        items = markup.item_count(),
        "Wrote gallery markup"
    );
    Ok(())
}
