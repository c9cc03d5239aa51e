//! Album playback: the state owner behind the album view.
//!
//! `AlbumPlayer` holds the single source of truth for what is selected,
//! whether it is playing, where playback is and how loud. Views read it and
//! send `Action`s back.

mod action;
mod model;
mod time;

pub use action::*;
pub use model::*;
pub use time::format_time;

#[cfg(test)]
mod tests;
