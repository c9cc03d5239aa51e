use crate::audio::MediaElement;
use crate::mpris::MprisHandle;
use crate::player::{AlbumPlayer, PlaybackStatus};

/// What was last published, so metadata is only rebuilt on change.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Published {
    pub index: Option<usize>,
    pub status: PlaybackStatus,
}

pub fn update_mpris<E: MediaElement>(
    mpris: &MprisHandle,
    player: &AlbumPlayer<E>,
    last: &mut Published,
) {
    let state = player.state();
    mpris.set_progress(state.current_time, state.volume);

    let now = Published {
        index: Some(state.current),
        status: player.status(),
    };
    if now == *last {
        return;
    }
    if now.index != last.index {
        mpris.set_now_playing(Some((state.current, player.album(), player.current_track())));
    }
    mpris.set_status(now.status);
    *last = now;
}
