//! Error types shared across the player.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// No album in the catalog carries the requested slug.
    #[error("album not found: {0}")]
    NotFound(String),

    /// The album exists but has nothing to play.
    #[error("album has no tracks: {0}")]
    EmptyAlbum(String),

    /// The catalog file could not be parsed.
    #[error("invalid catalog {path}: {source}")]
    Catalog {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// No usable audio output device.
    #[error("audio output error: {0}")]
    AudioOutput(String),

    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
