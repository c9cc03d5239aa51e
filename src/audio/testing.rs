//! A scripted `MediaElement` for tests.

use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;

use super::listeners::Listeners;
use super::types::{ListenerId, MediaElement, MediaEvent, MediaEventKind};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    SetSource(Option<PathBuf>),
    Play,
    Pause,
    Seek(f64),
    Volume(f64),
}

/// Records every command and lets tests fire notifications by hand.
#[derive(Default)]
pub(crate) struct FakeElement {
    pub source: Option<PathBuf>,
    pub playing: bool,
    pub time: f64,
    pub duration: Option<f64>,
    pub volume: f64,
    pub calls: Vec<Call>,
    listeners: Listeners,
}

impl FakeElement {
    pub fn new() -> Self {
        Self {
            volume: 1.0,
            ..Self::default()
        }
    }

    /// Deliver a notification to the registered listeners.
    pub fn fire(&self, event: MediaEvent) {
        self.listeners.emit(event);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn source_changes(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::SetSource(_)))
            .count()
    }
}

impl MediaElement for FakeElement {
    fn set_source(&mut self, src: Option<&Path>) {
        self.source = src.map(Path::to_path_buf);
        self.playing = false;
        self.time = 0.0;
        self.duration = None;
        self.calls.push(Call::SetSource(self.source.clone()));
    }

    fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    fn play(&mut self) {
        self.playing = true;
        self.calls.push(Call::Play);
    }

    fn pause(&mut self) {
        self.playing = false;
        self.calls.push(Call::Pause);
    }

    fn current_time(&self) -> f64 {
        self.time
    }

    fn set_current_time(&mut self, secs: f64) {
        self.time = secs;
        self.calls.push(Call::Seek(secs));
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, level: f64) {
        self.volume = level;
        self.calls.push(Call::Volume(level));
    }

    fn add_listener(&mut self, kind: MediaEventKind, tx: Sender<MediaEvent>) -> ListenerId {
        self.listeners.add(kind, tx)
    }

    fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }
}
