use std::path::PathBuf;

use clap::Parser;

/// Terminal album player.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "encore", version, about)]
pub struct Cli {
    /// Album slug to open. Defaults to the first album in the catalog.
    pub slug: Option<String>,

    /// Play the audio files in a directory as an album instead of the catalog.
    #[arg(long, value_name = "PATH", conflicts_with = "slug")]
    pub dir: Option<PathBuf>,

    /// Catalog file to read, overriding the configured one.
    #[arg(long, value_name = "PATH", env = "ENCORE_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Print the catalog's album slugs and exit.
    #[arg(long, conflicts_with = "dir")]
    pub list: bool,
}
