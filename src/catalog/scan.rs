use std::io;
use std::path::Path;

use lofty::prelude::{Accessor, AudioFile, TaggedFileExt};
use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::error::Result;

use super::model::{Album, Track};

const COVER_NAMES: [&str; 4] = ["cover.jpg", "cover.png", "folder.jpg", "folder.png"];

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Turn a directory name into a URL-ish slug: lowercase ASCII alphanumerics
/// separated by single dashes.
pub(crate) fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        "album".to_string()
    } else {
        slug
    }
}

struct Scanned {
    number: Option<u32>,
    file_name: String,
    track: Track,
    artist: Option<String>,
    album: Option<String>,
}

fn read_track(path: &Path) -> Scanned {
    let file_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string();
    let mut title = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("UNKNOWN")
        .to_string();
    let mut duration = 0.0;
    let mut number = None;
    let mut artist = None;
    let mut album = None;

    match lofty::read_from_path(path) {
        Ok(tagged) => {
            duration = tagged.properties().duration().as_secs_f64();

            if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
                if let Some(v) = tag.title().filter(|v| !v.trim().is_empty()) {
                    title = v.trim().to_string();
                }
                artist = tag
                    .artist()
                    .map(|v| v.trim().to_string())
                    .filter(|v| !v.is_empty());
                album = tag
                    .album()
                    .map(|v| v.trim().to_string())
                    .filter(|v| !v.is_empty());
                number = tag.track();
            }
        }
        Err(e) => tracing::debug!(path = %path.display(), error = %e, "no readable tags"),
    }

    Scanned {
        number,
        file_name,
        track: Track {
            title,
            audio_src: path.to_path_buf(),
            duration,
        },
        artist,
        album,
    }
}

/// Build an album from the audio files under `dir`. Subdirectories are
/// walked only when `settings.recursive` is set.
///
/// Album title and artist come from the first tagged track and fall back to
/// the directory name. Tracks are ordered by tag track number, then by file
/// name.
pub fn scan_album(dir: &Path, settings: &LibrarySettings) -> Result<Album> {
    if !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("not a directory: {}", dir.display()),
        )
        .into());
    }

    let walker = WalkDir::new(dir)
        .follow_links(settings.follow_links)
        .max_depth(if settings.recursive { usize::MAX } else { 1 });

    let mut scanned: Vec<Scanned> = walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file() && is_audio_file(entry.path(), settings))
        .map(|entry| read_track(entry.path()))
        .collect();

    scanned.sort_by(|a, b| {
        a.number
            .unwrap_or(u32::MAX)
            .cmp(&b.number.unwrap_or(u32::MAX))
            .then_with(|| a.file_name.to_lowercase().cmp(&b.file_name.to_lowercase()))
    });

    let dir_name = dir
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("Unknown Album")
        .to_string();

    let title = scanned
        .iter()
        .find_map(|s| s.album.clone())
        .unwrap_or_else(|| dir_name.clone());
    let artist = scanned
        .iter()
        .find_map(|s| s.artist.clone())
        .unwrap_or_else(|| "Unknown Artist".to_string());

    let cover = COVER_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.is_file())
        .map(|p| p.display().to_string());

    let tracks: Vec<Track> = scanned.into_iter().map(|s| s.track).collect();
    tracing::info!(dir = %dir.display(), tracks = tracks.len(), "scanned album directory");

    Ok(Album {
        release_info: format!("{} tracks", tracks.len()),
        slug: slugify(&dir_name),
        title,
        artist,
        cover,
        tracks,
    })
}
