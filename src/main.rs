use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use icongen::{collect_icons, write_header_file, HEADER_FILE_NAME};

/// Generate Icons.h from an icon font's character map.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Path to the icon font file.
    font: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let icons = collect_icons(&cli.font)
        .with_context(|| format!("failed to collect icons from '{}'", cli.font.display()))?;
    log::info!("collected {} icons from '{}'", icons.len(), cli.font.display());

    write_header_file(&icons, Path::new(HEADER_FILE_NAME))
        .with_context(|| format!("failed to write {HEADER_FILE_NAME}"))?;
    Ok(())
}
