use std::io;
use std::sync::mpsc;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::audio::RodioElement;
use crate::config;
use crate::mpris::{ControlCmd, spawn_mpris};
use crate::player::AlbumPlayer;

mod cli;
mod event_loop;
mod logging;
mod mpris_sync;
mod settings;
mod startup;

use cli::Cli;

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)
}

/// Run `setup`, calling `restore` if it fails part way.
fn or_restore<T, E>(setup: impl FnOnce() -> Result<T, E>, restore: impl FnOnce()) -> Result<T, E> {
    setup().inspect_err(|_| restore())
}

fn enter_terminal(mouse: bool) -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    or_restore(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            if mouse {
                execute!(stdout, EnableMouseCapture)?;
            }
            Terminal::new(CrosstermBackend::new(stdout))
        },
        || {
            let _ = restore_terminal();
        },
    )
}

/// Put the terminal back if anything panics while the UI owns it.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let _log_guard = config::state_home()
        .map(|home| home.join("encore"))
        .and_then(|dir| logging::init_logging(&dir).ok());
    let settings = settings::load_settings();

    if cli.list {
        let catalog = startup::load_catalog(&cli, &settings)?;
        for album in &catalog.albums {
            println!("{}\t{} - {}", album.slug, album.artist, album.title);
        }
        return Ok(());
    }

    let (catalog, slug) = startup::resolve_album(&cli, &settings)?;
    let element = RodioElement::open()?;
    let mut player = AlbumPlayer::new(&catalog, &slug, element, settings.player.default_volume)?;
    player.mount();

    let (control_tx, control_rx) = mpsc::channel::<ControlCmd>();
    let mpris = if settings.media_keys.enabled {
        Some(spawn_mpris(control_tx))
    } else {
        None
    };

    install_panic_hook();
    let mut terminal = enter_terminal(settings.ui.mouse)?;

    let mut state = event_loop::EventLoopState {
        force_redraw: true,
        ..Default::default()
    };
    let run_result = event_loop::run(
        &mut terminal,
        &settings,
        &mut player,
        mpris.as_ref(),
        &control_rx,
        &mut state,
    );

    player.unmount();
    restore_terminal()?;
    terminal.show_cursor()?;
    tracing::info!("shutdown");

    run_result
}
