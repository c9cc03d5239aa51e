//! `AlbumPlayer` and `PlaybackState`.
//!
//! The player owns the media element. Every transport operation commands the
//! element and mirrors the result into `PlaybackState`; notifications from
//! the element flow back in through `pump_events`.

use std::sync::mpsc::{self, Receiver};

use crate::audio::{ListenerId, MediaElement, MediaEvent, MediaEventKind};
use crate::catalog::{Album, Catalog, Track};
use crate::error::{Error, Result};

use super::action::{Action, PlaybackStatus, RowIcon};

/// The UI-owned record of what is selected and playing.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    /// Index of the current track in the album.
    pub current: usize,
    /// Seconds elapsed in the current track.
    pub current_time: f64,
    /// Seconds; the track metadata until the element reports a duration.
    pub duration: f64,
    pub is_playing: bool,
    pub hovered: Option<usize>,
    /// Output level in `[0, 1]`.
    pub volume: f64,
}

/// Listener registrations made on mount, released on unmount.
struct Subscription {
    ids: Vec<ListenerId>,
    rx: Receiver<MediaEvent>,
}

const SUBSCRIBED_KINDS: [MediaEventKind; 3] = [
    MediaEventKind::TimeUpdate,
    MediaEventKind::DurationChange,
    MediaEventKind::Ended,
];

fn clamp_unit(v: f64) -> f64 {
    if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 }
}

pub struct AlbumPlayer<E: MediaElement> {
    album: Album,
    state: PlaybackState,
    element: E,
    subscription: Option<Subscription>,
    redraw: bool,
}

impl<E: MediaElement> AlbumPlayer<E> {
    /// Open the album called `slug`, bound to its first track.
    pub fn new(catalog: &Catalog, slug: &str, element: E, volume: f64) -> Result<Self> {
        let album = catalog.find(slug)?.clone();
        Self::with_album(album, element, volume)
    }

    pub fn with_album(album: Album, mut element: E, volume: f64) -> Result<Self> {
        let Some(first) = album.tracks.first() else {
            return Err(Error::EmptyAlbum(album.slug.clone()));
        };

        let volume = clamp_unit(volume);
        element.set_source(Some(&first.audio_src));
        element.set_volume(volume);

        let state = PlaybackState {
            current: 0,
            current_time: 0.0,
            duration: first.duration,
            is_playing: false,
            hovered: None,
            volume,
        };

        tracing::info!(slug = %album.slug, tracks = album.tracks.len(), "album opened");
        Ok(Self {
            album,
            state,
            element,
            subscription: None,
            redraw: true,
        })
    }

    pub fn album(&self) -> &Album {
        &self.album
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    #[cfg(test)]
    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn current_track(&self) -> &Track {
        &self.album.tracks[self.state.current]
    }

    pub fn status(&self) -> PlaybackStatus {
        if self.state.is_playing {
            PlaybackStatus::Playing
        } else {
            PlaybackStatus::Paused
        }
    }

    fn last_index(&self) -> usize {
        self.album.last_index().unwrap_or(0)
    }

    fn mark_redraw(&mut self) {
        self.redraw = true;
    }

    /// Return and clear the "state changed since last draw" flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    // -- lifecycle ---------------------------------------------------------

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Subscribe to the element's notifications. Mounting twice is a no-op.
    pub fn mount(&mut self) {
        if self.subscription.is_some() {
            return;
        }
        let (tx, rx) = mpsc::channel();
        let ids: Vec<ListenerId> = SUBSCRIBED_KINDS
            .iter()
            .map(|&kind| self.element.add_listener(kind, tx.clone()))
            .collect();
        self.subscription = Some(Subscription { ids, rx });
        tracing::debug!("player mounted");
    }

    /// Clear the element's source and release every subscription made on
    /// mount. Notifications still in flight are discarded with the receiver.
    pub fn unmount(&mut self) {
        self.element.set_source(None);
        self.state.is_playing = false;
        if let Some(sub) = self.subscription.take() {
            for id in sub.ids {
                if !self.element.remove_listener(id) {
                    tracing::warn!(?id, "listener was already gone on unmount");
                }
            }
        }
        tracing::debug!("player unmounted");
    }

    /// Apply pending element notifications. Returns whether any state changed.
    pub fn pump_events(&mut self) -> bool {
        let events: Vec<MediaEvent> = match &self.subscription {
            Some(sub) => sub.rx.try_iter().collect(),
            None => return false,
        };

        let mut changed = false;
        for event in events {
            changed |= self.apply(event);
        }
        if changed {
            self.mark_redraw();
        }
        changed
    }

    fn apply(&mut self, event: MediaEvent) -> bool {
        match event {
            MediaEvent::TimeUpdate(t) if t.is_finite() && t >= 0.0 => {
                let changed = self.state.current_time != t;
                self.state.current_time = t;
                changed
            }
            MediaEvent::DurationChange(d) if d.is_finite() && d > 0.0 => {
                let changed = self.state.duration != d;
                self.state.duration = d;
                changed
            }
            MediaEvent::Ended => {
                tracing::debug!(track = self.state.current, "track ended");
                let changed = self.state.is_playing;
                self.state.is_playing = false;
                changed
            }
            _ => false,
        }
    }

    // -- transport ---------------------------------------------------------

    /// Re-source the element to track `index`. Position starts over; the
    /// caller decides whether to play. Out-of-range indices are ignored.
    pub fn select_track(&mut self, index: usize) {
        let Some(track) = self.album.tracks.get(index) else {
            tracing::warn!(index, "ignoring selection of missing track");
            return;
        };
        self.element.set_source(Some(&track.audio_src));
        // Progress still queued from the previous source no longer applies.
        if let Some(sub) = &self.subscription {
            sub.rx.try_iter().for_each(drop);
        }
        self.state.current = index;
        self.state.current_time = 0.0;
        self.state.duration = track.duration;
        tracing::debug!(index, title = %track.title, "track selected");
        self.mark_redraw();
    }

    pub fn play(&mut self) {
        self.element.play();
        self.state.is_playing = true;
        self.mark_redraw();
    }

    pub fn pause(&mut self) {
        self.element.pause();
        self.state.is_playing = false;
        self.mark_redraw();
    }

    /// Row/button toggle: pause the playing current track, resume the paused
    /// one, or switch to another track and play it.
    pub fn activate(&mut self, index: usize) {
        if index >= self.album.tracks.len() {
            return;
        }
        let same = index == self.state.current;
        if same && self.state.is_playing {
            self.pause();
        } else {
            if !same {
                self.select_track(index);
            }
            self.play();
        }
    }

    /// Move to the previous track (clamped at the first) and play it.
    pub fn previous(&mut self) {
        let index = self.state.current.saturating_sub(1);
        self.select_track(index);
        self.play();
    }

    /// Move to the next track (clamped at the last) and play it.
    pub fn next(&mut self) {
        let index = (self.state.current + 1).min(self.last_index());
        self.select_track(index);
        self.play();
    }

    /// Jump to `fraction` of the current duration.
    pub fn seek(&mut self, fraction: f64) {
        let new_time = self.state.duration.max(0.0) * clamp_unit(fraction);
        self.seek_to(new_time);
    }

    fn seek_to(&mut self, new_time: f64) {
        self.element.set_current_time(new_time);
        self.state.current_time = new_time;
        self.mark_redraw();
    }

    /// Scrub by `seconds` relative to the current position.
    pub fn seek_by(&mut self, seconds: f64) {
        let duration = self.state.duration;
        if !(duration.is_finite() && duration > 0.0) {
            return;
        }
        let target = (self.state.current_time + seconds).clamp(0.0, duration);
        self.seek_to(target);
    }

    pub fn set_volume(&mut self, level: f64) {
        let level = clamp_unit(level);
        self.element.set_volume(level);
        self.state.volume = level;
        self.mark_redraw();
    }

    pub fn nudge_volume(&mut self, delta: f64) {
        self.set_volume(self.state.volume + delta);
    }

    // -- rows --------------------------------------------------------------

    pub fn hover(&mut self, index: Option<usize>) {
        let index = index.filter(|&i| i < self.album.tracks.len());
        if self.state.hovered != index {
            self.state.hovered = index;
            self.mark_redraw();
        }
    }

    /// Keyboard cursor down; starts from the current track.
    pub fn hover_next(&mut self) {
        let next = match self.state.hovered {
            Some(i) => (i + 1).min(self.last_index()),
            None => self.state.current,
        };
        self.hover(Some(next));
    }

    /// Keyboard cursor up; starts from the current track.
    pub fn hover_previous(&mut self) {
        let prev = match self.state.hovered {
            Some(i) => i.saturating_sub(1),
            None => self.state.current,
        };
        self.hover(Some(prev));
    }

    /// Activate the hovered row, or the current track when nothing is hovered.
    pub fn activate_hovered(&mut self) {
        let index = self.state.hovered.unwrap_or(self.state.current);
        self.activate(index);
    }

    pub fn row_display(&self, index: usize) -> RowIcon {
        if index == self.state.current && self.state.is_playing {
            RowIcon::Pause
        } else if self.state.hovered == Some(index) {
            RowIcon::Play
        } else {
            RowIcon::Number(index + 1)
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::ActivateCurrent => self.activate(self.state.current),
            Action::Previous => self.previous(),
            Action::Next => self.next(),
            Action::Seek(fraction) => self.seek(fraction),
            Action::Volume(level) => self.set_volume(level),
            Action::ActivateRow(index) => self.activate(index),
            Action::Hover(index) => self.hover(index),
        }
    }
}

impl<E: MediaElement> Drop for AlbumPlayer<E> {
    fn drop(&mut self) {
        self.unmount();
    }
}
