use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::audio::MediaElement;
use crate::config;
use crate::mpris::{ControlCmd, MprisHandle};
use crate::player::{Action, AlbumPlayer};
use crate::runtime::mpris_sync::{Published, update_mpris};
use crate::ui::{self, Grab, Hitboxes, ViewState};

const POLL: Duration = Duration::from_millis(50);

/// State tracked by the runtime event loop across iterations.
#[derive(Debug, Default)]
pub struct EventLoopState {
    /// Clickable areas from the last frame.
    pub hits: Hitboxes,
    /// Table scroll position.
    pub view: ViewState,
    /// Range control held by the left mouse button.
    pub grab: Option<Grab>,
    /// Force a draw even if the player reports no change (resize).
    pub force_redraw: bool,
    /// Last state emitted to MPRIS.
    pub published: Published,
}

/// Main terminal event loop: handles input, drawing, element notifications
/// and MPRIS. Returns `Ok(())` when shutdown is requested.
pub fn run<E: MediaElement>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    player: &mut AlbumPlayer<E>,
    mpris: Option<&MprisHandle>,
    control_rx: &mpsc::Receiver<ControlCmd>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        player.pump_events();

        if let Some(mpris) = mpris {
            update_mpris(mpris, player, &mut state.published);
        }

        if player.take_redraw() || std::mem::take(&mut state.force_redraw) {
            let mut hits = Hitboxes::default();
            let view = &mut state.view;
            terminal.draw(|f| hits = ui::draw(f, player, &settings.ui, &settings.player, view))?;
            state.hits = hits;
        }

        while let Ok(cmd) = control_rx.try_recv() {
            if handle_control_cmd(cmd, player) {
                return Ok(());
            }
        }

        if !event::poll(POLL)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, player) {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) if settings.ui.mouse => {
                handle_mouse_event(mouse, player, state);
            }
            Event::Resize(_, _) => state.force_redraw = true,
            _ => {}
        }
    }
}

/// Apply a media-key command. Returns `true` when the app should quit.
pub fn handle_control_cmd<E: MediaElement>(cmd: ControlCmd, player: &mut AlbumPlayer<E>) -> bool {
    tracing::debug!(?cmd, "media key");
    match cmd {
        ControlCmd::Quit => return true,
        ControlCmd::Play => {
            if !player.state().is_playing {
                player.play();
            }
        }
        ControlCmd::Pause => {
            if player.state().is_playing {
                player.pause();
            }
        }
        ControlCmd::PlayPause => player.dispatch(Action::ActivateCurrent),
        ControlCmd::Stop => {
            player.pause();
            player.seek(0.0);
        }
        ControlCmd::Next => player.next(),
        ControlCmd::Prev => player.previous(),
    }
    false
}

/// Apply a key press. Returns `true` when the app should quit.
pub fn handle_key_event<E: MediaElement>(
    key: KeyEvent,
    settings: &config::Settings,
    player: &mut AlbumPlayer<E>,
) -> bool {
    let scrub = settings.player.scrub_seconds as f64;
    let step = settings.player.volume_step;

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('j') | KeyCode::Down => player.hover_next(),
        KeyCode::Char('k') | KeyCode::Up => player.hover_previous(),
        KeyCode::Enter => player.activate_hovered(),
        KeyCode::Char(' ') | KeyCode::Char('p') => player.dispatch(Action::ActivateCurrent),
        KeyCode::Char('h') | KeyCode::Left => player.previous(),
        KeyCode::Char('l') | KeyCode::Right => player.next(),
        KeyCode::Char('H') => player.seek_by(-scrub),
        KeyCode::Char('L') => player.seek_by(scrub),
        KeyCode::Char('+') | KeyCode::Char('=') => player.nudge_volume(step),
        KeyCode::Char('-') => player.nudge_volume(-step),
        _ => {}
    }
    false
}

pub fn handle_mouse_event<E: MediaElement>(
    mouse: MouseEvent,
    player: &mut AlbumPlayer<E>,
    state: &mut EventLoopState,
) {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            state.grab = state.hits.grab(column, row);
            if let Some(action) = state.hits.click(column, row) {
                player.dispatch(action);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some(grab) = state.grab {
                player.dispatch(state.hits.drag(grab, column));
            }
        }
        MouseEventKind::Up(MouseButton::Left) => state.grab = None,
        MouseEventKind::Moved => player.dispatch(state.hits.hover(column, row)),
        _ => {}
    }
}
