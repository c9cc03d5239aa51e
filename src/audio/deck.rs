//! Playback decisions of the audio thread.
//!
//! `Deck` owns the current voice and decides when to rebuild it, where the
//! playhead is and when a source has ended. The sound device sits behind
//! `Output`/`Voice` so these rules run the same against rodio and in tests.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rodio::{OutputStream, Sink};

use super::listeners::Listeners;
use super::sink::{SinkError, create_sink_at};
use super::types::{MediaEvent, PlaybackHandle, PlaybackInfo};

/// One decoded source feeding the output.
pub(super) trait Voice {
    fn play(&self);
    fn pause(&self);
    fn stop(&self);
    fn set_volume(&self, volume: f32);
    /// Nothing left to play.
    fn empty(&self) -> bool;
    /// Position since the voice was built.
    fn get_pos(&self) -> Duration;
    fn try_seek(&self, to: Duration) -> Result<(), String>;
}

/// Something that turns a file into a paused `Voice`.
pub(super) trait Output {
    type Voice: Voice;

    /// Build a paused voice for `path` starting at `start_at`, plus the
    /// source's total duration when the decoder knows it.
    fn open(
        &self,
        path: &Path,
        start_at: Duration,
        volume: f32,
    ) -> Result<(Self::Voice, Option<Duration>), SinkError>;
}

impl Voice for Sink {
    fn play(&self) {
        Sink::play(self);
    }

    fn pause(&self) {
        Sink::pause(self);
    }

    fn stop(&self) {
        Sink::stop(self);
    }

    fn set_volume(&self, volume: f32) {
        Sink::set_volume(self, volume);
    }

    fn empty(&self) -> bool {
        Sink::empty(self)
    }

    fn get_pos(&self) -> Duration {
        Sink::get_pos(self)
    }

    fn try_seek(&self, to: Duration) -> Result<(), String> {
        Sink::try_seek(self, to).map_err(|e| e.to_string())
    }
}

impl Output for OutputStream {
    type Voice = Sink;

    fn open(
        &self,
        path: &Path,
        start_at: Duration,
        volume: f32,
    ) -> Result<(Sink, Option<Duration>), SinkError> {
        create_sink_at(self, path, start_at, volume).map(|loaded| (loaded.sink, loaded.total))
    }
}

pub(super) struct Deck<O: Output> {
    pub(super) output: O,
    voice: Option<O::Voice>,
    path: Option<PathBuf>,
    /// Where the current voice was built, when it had to start mid-file.
    offset: Duration,
    volume: f32,
    playing: bool,
    info: PlaybackHandle,
    listeners: Listeners,
}

impl<O: Output> Deck<O> {
    pub(super) fn new(output: O, info: PlaybackHandle, listeners: Listeners, volume: f32) -> Self {
        Self {
            output,
            voice: None,
            path: None,
            offset: Duration::ZERO,
            volume,
            playing: false,
            info,
            listeners,
        }
    }

    pub(super) fn position(&self) -> Duration {
        self.offset + self.voice.as_ref().map_or(Duration::ZERO, Voice::get_pos)
    }

    #[cfg(test)]
    pub(super) fn is_playing(&self) -> bool {
        self.playing
    }

    fn publish(&self, update: impl FnOnce(&mut PlaybackInfo)) {
        if let Ok(mut info) = self.info.lock() {
            update(&mut info);
        }
    }

    fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
        self.publish(|info| info.playing = playing);
    }

    /// Replace the voice with a fresh one for the current path, starting at
    /// `at`. Keeps playing if the deck was playing. Returns false when there
    /// is no path or it cannot be opened.
    fn rebuild(&mut self, at: Duration) -> bool {
        let Some(path) = self.path.clone() else {
            return false;
        };
        if let Some(old) = self.voice.take() {
            old.stop();
        }
        match self.output.open(&path, at, self.volume) {
            Ok((voice, total)) => {
                if self.playing {
                    voice.play();
                }
                self.voice = Some(voice);
                self.offset = at;
                self.publish(|info| {
                    info.position = at;
                    info.duration = total;
                });
                true
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot open source");
                self.set_playing(false);
                false
            }
        }
    }

    pub(super) fn unload(&mut self) {
        if let Some(v) = self.voice.take() {
            v.stop();
        }
        self.path = None;
        self.offset = Duration::ZERO;
        self.playing = false;
        self.publish(|info| *info = PlaybackInfo::default());
    }

    pub(super) fn load(&mut self, path: PathBuf) {
        self.unload();
        match self.output.open(&path, Duration::ZERO, self.volume) {
            Ok((voice, total)) => {
                tracing::debug!(path = %path.display(), total = ?total, "source loaded");
                self.voice = Some(voice);
                self.publish(|info| info.duration = total);
                self.listeners.emit(MediaEvent::TimeUpdate(0.0));
                if let Some(total) = total {
                    self.listeners
                        .emit(MediaEvent::DurationChange(total.as_secs_f64()));
                }
            }
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "cannot load source"),
        }
        self.path = Some(path);
    }

    /// Start or resume. A source that played to its end starts over from 0.
    pub(super) fn play(&mut self) {
        if self.voice.as_ref().is_none_or(Voice::empty) {
            if !self.rebuild(Duration::ZERO) {
                return;
            }
            self.listeners.emit(MediaEvent::TimeUpdate(0.0));
        }
        let Some(voice) = self.voice.as_ref() else {
            return;
        };
        voice.play();
        self.set_playing(true);
    }

    pub(super) fn pause(&mut self) {
        let Some(voice) = self.voice.as_ref() else {
            return;
        };
        voice.pause();
        self.set_playing(false);
    }

    pub(super) fn seek(&mut self, to: Duration) {
        let in_place = match self.voice.as_ref() {
            Some(voice) if !voice.empty() => match voice.try_seek(to) {
                Ok(()) => true,
                Err(e) => {
                    // Not every decoder can seek in place; rebuild and skip into the file.
                    tracing::debug!(error = %e, "in-place seek failed, rebuilding");
                    false
                }
            },
            _ => false,
        };

        if in_place {
            self.offset = Duration::ZERO;
            self.publish(|info| info.position = to);
        } else if !self.rebuild(to) {
            return;
        }
        self.listeners.emit(MediaEvent::TimeUpdate(to.as_secs_f64()));
    }

    pub(super) fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        if let Some(v) = self.voice.as_ref() {
            v.set_volume(volume);
        }
    }

    /// Periodic progress report and end-of-source detection.
    pub(super) fn tick(&mut self) {
        if !self.playing {
            return;
        }
        let Some(voice) = self.voice.as_ref() else {
            return;
        };

        if voice.empty() {
            self.set_playing(false);
            self.listeners.emit(MediaEvent::Ended);
            return;
        }

        let pos = self.position();
        self.publish(|info| info.position = pos);
        self.listeners.emit(MediaEvent::TimeUpdate(pos.as_secs_f64()));
    }
}
