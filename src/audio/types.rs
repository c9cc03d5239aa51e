//! Audio-related small types and handles.
//!
//! This module defines the media element contract, its notifications and the
//! commands/state shared with the audio thread.

use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Kinds of notification a media element emits.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MediaEventKind {
    TimeUpdate,
    DurationChange,
    Ended,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MediaEvent {
    /// Playback position advanced (seconds from the start of the source).
    TimeUpdate(f64),
    /// The source's duration became known or changed (seconds).
    DurationChange(f64),
    /// The source played to its end.
    Ended,
}

impl MediaEvent {
    pub fn kind(&self) -> MediaEventKind {
        match self {
            MediaEvent::TimeUpdate(_) => MediaEventKind::TimeUpdate,
            MediaEvent::DurationChange(_) => MediaEventKind::DurationChange,
            MediaEvent::Ended => MediaEventKind::Ended,
        }
    }
}

/// Token returned by `MediaElement::add_listener`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

/// A stateful playable-media resource.
///
/// Commands return immediately; the element performs I/O on its own and
/// reports progress through listeners. Failures are not surfaced to callers.
pub trait MediaElement {
    /// Point the element at a new source, or clear it with `None`.
    /// Playback stops and the position returns to zero.
    fn set_source(&mut self, src: Option<&Path>);
    fn source(&self) -> Option<&Path>;
    fn play(&mut self);
    fn pause(&mut self);
    /// Seconds elapsed in the current source.
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, secs: f64);
    /// Duration of the current source, once known.
    fn duration(&self) -> Option<f64>;
    fn volume(&self) -> f64;
    fn set_volume(&mut self, level: f64);
    fn add_listener(&mut self, kind: MediaEventKind, tx: Sender<MediaEvent>) -> ListenerId;
    /// Returns false when `id` was not registered.
    fn remove_listener(&mut self, id: ListenerId) -> bool;
}

#[derive(Debug)]
pub(crate) enum AudioCmd {
    /// Replace the current source; the new sink starts paused.
    Load(PathBuf),
    /// Drop the current source.
    Unload,
    Play,
    Pause,
    /// Jump to an absolute position in the current source.
    Seek(Duration),
    SetVolume(f32),
    /// Stop output and exit the audio thread.
    Quit,
}

/// Runtime playback information shared with the element's owner.
#[derive(Debug, Clone, Default)]
pub(crate) struct PlaybackInfo {
    pub position: Duration,
    pub duration: Option<Duration>,
    pub playing: bool,
}

pub(crate) type PlaybackHandle = Arc<Mutex<PlaybackInfo>>;

impl<E: MediaElement + ?Sized> MediaElement for &mut E {
    fn set_source(&mut self, src: Option<&Path>) {
        (**self).set_source(src);
    }

    fn source(&self) -> Option<&Path> {
        (**self).source()
    }

    fn play(&mut self) {
        (**self).play();
    }

    fn pause(&mut self) {
        (**self).pause();
    }

    fn current_time(&self) -> f64 {
        (**self).current_time()
    }

    fn set_current_time(&mut self, secs: f64) {
        (**self).set_current_time(secs);
    }

    fn duration(&self) -> Option<f64> {
        (**self).duration()
    }

    fn volume(&self) -> f64 {
        (**self).volume()
    }

    fn set_volume(&mut self, level: f64) {
        (**self).set_volume(level);
    }

    fn add_listener(&mut self, kind: MediaEventKind, tx: Sender<MediaEvent>) -> ListenerId {
        (**self).add_listener(kind, tx)
    }

    fn remove_listener(&mut self, id: ListenerId) -> bool {
        (**self).remove_listener(id)
    }
}
