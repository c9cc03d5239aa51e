//! Audio playback: the media element abstraction and its rodio backend.
//!
//! A `MediaElement` is the one playable resource an album player owns. It
//! accepts fire-and-forget commands (source, play, pause, seek, volume) and
//! reports progress through notifications delivered to registered listeners.

mod deck;
mod element;
mod listeners;
mod sink;
mod thread;
mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use element::RodioElement;
pub use listeners::Listeners;
pub use types::*;
