use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph, Row, Table},
};

use crate::audio::MediaElement;
use crate::catalog::Album;
use crate::player::{AlbumPlayer, RowIcon, format_time};

/// First visible row after moving the window as little as possible to keep
/// `focus` on screen. A focus already in view leaves the window where it is.
pub(crate) fn keep_in_view(offset: usize, total: usize, height: usize, focus: usize) -> usize {
    if height == 0 || total <= height {
        return 0;
    }
    let offset = if focus < offset {
        focus
    } else if focus >= offset + height {
        focus + 1 - height
    } else {
        offset
    };
    offset.min(total - height)
}

pub(crate) fn icon_text(icon: RowIcon) -> String {
    match icon {
        RowIcon::Pause => "❚❚".to_string(),
        RowIcon::Play => "▶".to_string(),
        RowIcon::Number(n) => n.to_string(),
    }
}

pub fn render_header(frame: &mut Frame, area: Rect, album: &Album, show_cover: bool) {
    let mut lines = vec![
        Line::from(album.title.as_str()).bold(),
        Line::from(album.artist.as_str()),
        Line::from(album.release_info.as_str()).dim(),
    ];
    if show_cover {
        let cover = album.cover.as_deref().unwrap_or("-");
        lines.push(Line::from(format!("cover: {cover}")).dim());
    }

    let par = Paragraph::new(lines).block(
        Block::bordered()
            .padding(Padding {
                left: 1,
                right: 0,
                top: 0,
                bottom: 0,
            })
            .title(" album "),
    );
    frame.render_widget(par, area);
}

/// Render the track table scrolled from `offset`, updating it to keep the
/// hovered row (or the current track) visible. Returns one rectangle per
/// visible row, paired with the track index it shows.
pub fn render_tracks<E: MediaElement>(
    frame: &mut Frame,
    area: Rect,
    player: &AlbumPlayer<E>,
    offset: &mut usize,
) -> Vec<(Rect, usize)> {
    let block = Block::default().borders(Borders::ALL).title(" tracks ");
    let inner = block.inner(area);

    let tracks = &player.album().tracks;
    let state = player.state();
    // One line goes to the column header.
    let body_height = inner.height.saturating_sub(1) as usize;
    let focus = state.hovered.unwrap_or(state.current);
    *offset = keep_in_view(*offset, tracks.len(), body_height, focus);
    let start = *offset;
    let end = (start + body_height).min(tracks.len());

    let rows: Vec<Row> = (start..end)
        .map(|i| {
            let track = &tracks[i];
            let mut style = Style::default();
            if i == state.current {
                style = style.add_modifier(Modifier::BOLD);
            }
            if state.hovered == Some(i) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Row::new(vec![
                icon_text(player.row_display(i)),
                track.title.clone(),
                format_time(track.duration),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Min(10),
            Constraint::Length(7),
        ],
    )
    .header(Row::new(vec!["#", "title", "time"]).dim())
    .block(block);
    frame.render_widget(table, area);

    (start..end)
        .enumerate()
        .map(|(k, i)| {
            let rect = Rect {
                x: inner.x,
                y: inner.y + 1 + k as u16,
                width: inner.width,
                height: 1,
            };
            (rect, i)
        })
        .collect()
}
