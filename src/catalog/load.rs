use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

use super::model::Catalog;

/// Catalog file loading.
///
/// File format: TOML, one `[[albums]]` table per album with nested
/// `[[albums.tracks]]`. Relative `audio_src` paths are resolved against the
/// directory containing the catalog file.
impl Catalog {
    pub fn from_toml_str(s: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let mut catalog = Self::from_toml_str(&text).map_err(|source| Error::Catalog {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(base) = path.parent() {
            catalog.resolve_relative_to(base);
        }

        tracing::debug!(path = %path.display(), albums = catalog.albums.len(), "catalog loaded");
        Ok(catalog)
    }

    fn resolve_relative_to(&mut self, base: &Path) {
        for track in self.albums.iter_mut().flat_map(|a| a.tracks.iter_mut()) {
            if track.audio_src.is_relative() {
                track.audio_src = base.join(&track.audio_src);
            }
        }
    }
}
