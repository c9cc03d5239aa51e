//! UI rendering helpers for the terminal user interface.
//!
//! Rendering is a pure function of the player: `draw` reads the player and
//! returns the screen rectangles of everything clickable so the event loop
//! can hit-test mouse input.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::audio::MediaElement;
use crate::config::{PlayerSettings, UiSettings};
use crate::player::AlbumPlayer;

mod album;
mod hit;
mod player_bar;

pub use hit::{Grab, Hitboxes};
pub use player_bar::{PlayerBarProps, quantize, seek_ratio};

/// View state kept between frames.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    /// First track row shown in the table.
    pub track_offset: usize,
}

/// Render the controls help text, incorporating scrub seconds.
fn controls_text(scrub_seconds: u64) -> String {
    [
        "[j/k] up/down".to_string(),
        "[enter] play row".to_string(),
        "[space/p] play/pause".to_string(),
        "[h/l] prev/next".to_string(),
        format!("[H/L] scrub -/+{scrub_seconds}s"),
        "[+/-] volume".to_string(),
        "[q] quit".to_string(),
    ]
    .join(" | ")
}

/// Render the whole screen and return the hit-test map for this frame.
pub fn draw<E: MediaElement>(
    frame: &mut Frame,
    player: &AlbumPlayer<E>,
    ui_settings: &UiSettings,
    player_settings: &PlayerSettings,
    view: &mut ViewState,
) -> Hitboxes {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(if ui_settings.show_cover { 6 } else { 5 }),
            Constraint::Min(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    album::render_header(frame, chunks[1], player.album(), ui_settings.show_cover);
    let rows = album::render_tracks(frame, chunks[2], player, &mut view.track_offset);

    let props = PlayerBarProps::from_player(player);
    let bar = player_bar::render(frame, chunks[3], &props);

    let footer = Paragraph::new(controls_text(player_settings.scrub_seconds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);

    Hitboxes {
        rows,
        prev: bar.prev,
        toggle: bar.toggle,
        next: bar.next,
        seek: bar.seek,
        volume: bar.volume,
    }
}
