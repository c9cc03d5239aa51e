use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use rodio::OutputStreamBuilder;

use crate::error::{Error, Result};

use super::deck::Deck;
use super::listeners::Listeners;
use super::types::{AudioCmd, PlaybackHandle};

/// How often position notifications are emitted while playing.
const TICK: Duration = Duration::from_millis(250);

/// Spawn the thread that owns the output stream. Returns once the stream is
/// open, or with `Error::AudioOutput` when no device is usable.
pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    info: PlaybackHandle,
    listeners: Listeners,
    volume: f32,
) -> Result<JoinHandle<()>> {
    let (ready_tx, ready_rx) = mpsc::sync_channel::<Result<()>>(1);

    let handle = thread::Builder::new()
        .name("encore-audio".to_string())
        .spawn(move || {
            let mut stream = match OutputStreamBuilder::open_default_stream() {
                Ok(s) => s,
                Err(e) => {
                    let _ = ready_tx.send(Err(Error::AudioOutput(e.to_string())));
                    return;
                }
            };
            // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
            // but noisy for a TUI app.
            stream.log_on_drop(false);
            let _ = ready_tx.send(Ok(()));

            let mut deck = Deck::new(stream, info, listeners, volume);

            loop {
                match rx.recv_timeout(TICK) {
                    Ok(AudioCmd::Load(path)) => deck.load(path),
                    Ok(AudioCmd::Unload) => deck.unload(),
                    Ok(AudioCmd::Play) => deck.play(),
                    Ok(AudioCmd::Pause) => deck.pause(),
                    Ok(AudioCmd::Seek(to)) => deck.seek(to),
                    Ok(AudioCmd::SetVolume(v)) => deck.set_volume(v),
                    Ok(AudioCmd::Quit) | Err(RecvTimeoutError::Disconnected) => {
                        deck.unload();
                        break;
                    }
                    Err(RecvTimeoutError::Timeout) => deck.tick(),
                }
            }
            tracing::debug!("audio thread exiting");
        })?;

    match ready_rx.recv() {
        Ok(Ok(())) => Ok(handle),
        Ok(Err(e)) => {
            let _ = handle.join();
            Err(e)
        }
        Err(_) => Err(Error::AudioOutput("audio thread exited during startup".to_string())),
    }
}
