use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{Error, Result};

/// A single playable audio item.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Track {
    pub title: String,
    pub audio_src: PathBuf,
    /// Duration in seconds as last known from the source metadata.
    #[serde(default)]
    pub duration: f64,
}

/// An ordered collection of tracks with shared metadata.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Album {
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub release_info: String,
    /// Image reference for the cover art, if any.
    #[serde(default)]
    pub cover: Option<String>,
    pub slug: String,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl Album {
    #[cfg(test)]
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Index of the final track, derived from the live track count.
    pub fn last_index(&self) -> Option<usize> {
        self.tracks.len().checked_sub(1)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub albums: Vec<Album>,
}

impl Catalog {
    pub fn new(albums: Vec<Album>) -> Self {
        Self { albums }
    }

    /// Look up an album by slug.
    pub fn find(&self, slug: &str) -> Result<&Album> {
        self.albums
            .iter()
            .find(|a| a.slug == slug)
            .ok_or_else(|| Error::NotFound(slug.to_string()))
    }

    pub fn first(&self) -> Option<&Album> {
        self.albums.first()
    }

    #[cfg(test)]
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.albums.iter().map(|a| a.slug.as_str())
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }
}
