//! Utilities for creating `rodio` sinks from audio files.
//!
//! The helper here encapsulates opening/decoding a file and preparing a
//! paused `Sink` at the requested start position.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::time::Duration;

use rodio::decoder::DecoderError;
use rodio::{Decoder, OutputStream, Sink, Source};
use thiserror::Error;

#[derive(Error, Debug)]
pub(super) enum SinkError {
    #[error("failed to open: {0}")]
    Open(#[from] io::Error),
    #[error("failed to decode: {0}")]
    Decode(#[from] DecoderError),
}

/// A paused sink plus the source's total duration, when the decoder knows it.
pub(super) struct LoadedSink {
    pub sink: Sink,
    pub total: Option<Duration>,
}

/// Create a paused `Sink` for `path` that starts playback at `start_at`.
pub(super) fn create_sink_at(
    stream: &OutputStream,
    path: &Path,
    start_at: Duration,
    volume: f32,
) -> Result<LoadedSink, SinkError> {
    let file = File::open(path)?;
    let decoder = Decoder::new(BufReader::new(file))?;
    let total = decoder.total_duration();

    let sink = Sink::connect_new(stream.mixer());
    sink.set_volume(volume);
    // `skip_duration` is the fallback seeking primitive; even Duration::ZERO is fine.
    sink.append(decoder.skip_duration(start_at));
    sink.pause();
    Ok(LoadedSink { sink, total })
}
