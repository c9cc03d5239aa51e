use std::path::PathBuf;

use super::model::{Album, Catalog, Track};

fn track(title: &str, file: &str, duration: f64) -> Track {
    Track {
        title: title.to_string(),
        audio_src: PathBuf::from("music").join(file),
        duration,
    }
}

/// The catalog used when no catalog file is configured.
///
/// Audio sources are relative to the working directory.
pub fn builtin_catalog() -> Catalog {
    Catalog::new(vec![
        Album {
            title: "The Colors".to_string(),
            artist: "Pablo Picasso".to_string(),
            release_info: "1909 Picasso Music".to_string(),
            cover: Some("music/the-colors.png".to_string()),
            slug: "the-colors".to_string(),
            tracks: vec![
                track("Blue", "blue.mp3", 161.71),
                track("Green", "green.mp3", 103.96),
                track("Red", "red.mp3", 268.45),
                track("Pink", "pink.mp3", 153.14),
                track("Magenta", "magenta.mp3", 374.22),
            ],
        },
        Album {
            title: "The Telephone".to_string(),
            artist: "Guglielmo Marconi".to_string(),
            release_info: "1909 EM Records".to_string(),
            cover: Some("music/the-telephone.png".to_string()),
            slug: "the-telephone".to_string(),
            tracks: vec![
                track("Ring", "ring.mp3", 192.0),
                track("Hold", "hold.mp3", 244.0),
                track("Dial Tone", "dial-tone.mp3", 131.0),
            ],
        },
    ])
}
