use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::error::Result;

use super::listeners::Listeners;
use super::thread::spawn_audio_thread;
use super::types::{
    AudioCmd, ListenerId, MediaElement, MediaEvent, MediaEventKind, PlaybackHandle, PlaybackInfo,
};

/// A `MediaElement` backed by a rodio sink on a dedicated audio thread.
pub struct RodioElement {
    tx: Sender<AudioCmd>,
    info: PlaybackHandle,
    listeners: Listeners,
    source: Option<PathBuf>,
    volume: f64,
    join: Option<JoinHandle<()>>,
}

impl RodioElement {
    /// Open the default output device.
    pub fn open() -> Result<Self> {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let info: PlaybackHandle = Arc::new(Mutex::new(PlaybackInfo::default()));
        let listeners = Listeners::default();
        let volume = 1.0;

        let join = spawn_audio_thread(rx, info.clone(), listeners.clone(), volume as f32)?;
        tracing::info!("audio output opened");

        Ok(Self {
            tx,
            info,
            listeners,
            source: None,
            volume,
            join: Some(join),
        })
    }

    fn send(&self, cmd: AudioCmd) {
        if let Err(e) = self.tx.send(cmd) {
            tracing::warn!(cmd = ?e.0, "audio thread is gone");
        }
    }

    fn snapshot(&self) -> PlaybackInfo {
        self.info.lock().map(|i| i.clone()).unwrap_or_default()
    }
}

impl MediaElement for RodioElement {
    fn set_source(&mut self, src: Option<&Path>) {
        self.source = src.map(Path::to_path_buf);
        match &self.source {
            Some(path) => self.send(AudioCmd::Load(path.clone())),
            None => self.send(AudioCmd::Unload),
        }
    }

    fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    fn play(&mut self) {
        self.send(AudioCmd::Play);
    }

    fn pause(&mut self) {
        self.send(AudioCmd::Pause);
    }

    fn current_time(&self) -> f64 {
        self.snapshot().position.as_secs_f64()
    }

    fn set_current_time(&mut self, secs: f64) {
        let secs = if secs.is_finite() { secs.max(0.0) } else { 0.0 };
        self.send(AudioCmd::Seek(Duration::from_secs_f64(secs)));
    }

    fn duration(&self) -> Option<f64> {
        self.snapshot().duration.map(|d| d.as_secs_f64())
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, level: f64) {
        self.volume = level.clamp(0.0, 1.0);
        self.send(AudioCmd::SetVolume(self.volume as f32));
    }

    fn add_listener(&mut self, kind: MediaEventKind, tx: Sender<MediaEvent>) -> ListenerId {
        self.listeners.add(kind, tx)
    }

    fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }
}

impl Drop for RodioElement {
    fn drop(&mut self) {
        let _ = self.tx.send(AudioCmd::Quit);
        if let Some(h) = self.join.take() {
            let _ = h.join();
        }
    }
}
