/// What the number column of a track row shows.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RowIcon {
    /// The row is the current track and it is playing.
    Pause,
    /// The row is hovered.
    Play,
    /// 1-based track number.
    Number(usize),
}

/// Coarse transport status, as reported to media-key clients.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    #[default]
    Paused,
    Playing,
}

/// A user interaction routed back to the player.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Action {
    /// Play/pause button: toggle the current track.
    ActivateCurrent,
    Previous,
    Next,
    /// Seek bar moved to a fraction of the duration.
    Seek(f64),
    /// Volume bar moved to a level.
    Volume(f64),
    /// Track row clicked.
    ActivateRow(usize),
    /// Pointer entered a row (`Some`) or left the table (`None`).
    Hover(Option<usize>),
}
