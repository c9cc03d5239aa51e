//! Transport controls: previous / play-pause / next, seek bar, volume bar.
//!
//! Stateless. Everything drawn comes from `PlayerBarProps`; the only output
//! is where each control landed on screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Span,
    widgets::{Block, Gauge, Padding, Paragraph},
};

use crate::audio::MediaElement;
use crate::player::{AlbumPlayer, format_time};

/// Range controls move in steps of this size over `[0, 1]`.
pub const RANGE_STEP: f64 = 0.01;

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerBarProps<'a> {
    pub is_playing: bool,
    pub title: &'a str,
    pub current_time: f64,
    pub duration: f64,
    pub volume: f64,
}

impl<'a> PlayerBarProps<'a> {
    pub fn from_player<E: MediaElement>(player: &'a AlbumPlayer<E>) -> Self {
        let state = player.state();
        Self {
            is_playing: state.is_playing,
            title: &player.current_track().title,
            current_time: state.current_time,
            duration: state.duration,
            volume: state.volume,
        }
    }
}

/// Fraction of the track played. Unknown or zero durations read as 0.
pub fn seek_ratio(current_time: f64, duration: f64) -> f64 {
    if !(duration.is_finite() && duration > 0.0) || !current_time.is_finite() {
        return 0.0;
    }
    (current_time / duration).clamp(0.0, 1.0)
}

/// Snap a range value to `RANGE_STEP`, clamped to `[0, 1]`.
pub fn quantize(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    ((value.clamp(0.0, 1.0) / RANGE_STEP).round() * RANGE_STEP).clamp(0.0, 1.0)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlayerBarAreas {
    pub prev: Rect,
    pub toggle: Rect,
    pub next: Rect,
    pub seek: Rect,
    pub volume: Rect,
}

fn button(frame: &mut Frame, area: Rect, label: &str) {
    let par = Paragraph::new(label).alignment(Alignment::Center).bold();
    frame.render_widget(par, area);
}

pub fn render(frame: &mut Frame, area: Rect, props: &PlayerBarProps<'_>) -> PlayerBarAreas {
    let block = Block::bordered()
        .title(" now playing ")
        .padding(Padding {
            left: 1,
            right: 1,
            top: 0,
            bottom: 0,
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    // Buttons and title.
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(lines[0]);
    button(frame, top[0], "[|<]");
    button(frame, top[1], if props.is_playing { "[❚❚]" } else { "[▶]" });
    button(frame, top[2], "[>|]");
    frame.render_widget(Paragraph::new(props.title), top[4]);

    // Elapsed, seek bar, total.
    let mid = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Min(1),
            Constraint::Length(7),
        ])
        .split(lines[1]);
    frame.render_widget(Paragraph::new(format_time(props.current_time)), mid[0]);
    let seek = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan))
        .use_unicode(true)
        .label(Span::raw(""))
        .ratio(seek_ratio(props.current_time, props.duration));
    frame.render_widget(seek, mid[1]);
    frame.render_widget(
        Paragraph::new(format_time(props.duration)).alignment(Alignment::Right),
        mid[2],
    );

    // Volume.
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(20),
            Constraint::Length(6),
            Constraint::Min(0),
        ])
        .split(lines[2]);
    frame.render_widget(Paragraph::new("vol"), bottom[0]);
    let volume = quantize(props.volume);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Green))
        .use_unicode(true)
        .label(Span::raw(""))
        .ratio(volume);
    frame.render_widget(gauge, bottom[1]);
    frame.render_widget(
        Paragraph::new(format!("{:>4}%", (volume * 100.0).round() as u32)),
        bottom[2],
    );

    PlayerBarAreas {
        prev: top[0],
        toggle: top[1],
        next: top[2],
        seek: mid[1],
        volume: bottom[1],
    }
}
