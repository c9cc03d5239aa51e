use super::*;
use crate::audio::testing::{Call, FakeElement};
use crate::audio::{MediaElement, MediaEvent};
use crate::catalog::{Album, Catalog, Track};
use crate::error::Error;
use std::path::PathBuf;

fn t(n: usize, duration: f64) -> Track {
    Track {
        title: format!("Track {n}"),
        audio_src: PathBuf::from(format!("/music/{n}.mp3")),
        duration,
    }
}

fn album(len: usize) -> Album {
    Album {
        title: "Test Album".into(),
        artist: "Test Artist".into(),
        release_info: "2024".into(),
        cover: None,
        slug: "test-album".into(),
        tracks: (0..len).map(|n| t(n, 100.0 + n as f64)).collect(),
    }
}

fn player(len: usize) -> AlbumPlayer<FakeElement> {
    let mut p = AlbumPlayer::with_album(album(len), FakeElement::new(), 0.8).unwrap();
    p.mount();
    p
}

fn src(n: usize) -> Option<PathBuf> {
    Some(PathBuf::from(format!("/music/{n}.mp3")))
}

#[test]
fn format_time_examples() {
    assert_eq!(format_time(0.0), "00:00");
    assert_eq!(format_time(65.0), "01:05");
    assert_eq!(format_time(3661.0), "61:01");
    assert_eq!(format_time(59.99), "00:59");
    assert_eq!(format_time(-3.0), "00:00");
    assert_eq!(format_time(f64::NAN), "00:00");
    assert_eq!(format_time(f64::INFINITY), "00:00");
    assert_eq!(format_time(6000.0), "100:00");
}

#[test]
fn new_resolves_album_by_slug_and_binds_first_track() {
    let catalog = Catalog::new(vec![album(3)]);
    let p = AlbumPlayer::new(&catalog, "test-album", FakeElement::new(), 0.8).unwrap();

    let s = p.state();
    assert_eq!(s.current, 0);
    assert_eq!(s.current_time, 0.0);
    assert_eq!(s.duration, 100.0);
    assert!(!s.is_playing);
    assert_eq!(s.hovered, None);
    assert_eq!(s.volume, 0.8);

    assert_eq!(p.element().source, src(0));
    assert_eq!(p.element().volume, 0.8);
    assert!(!p.element().playing);
    assert_eq!(p.status(), PlaybackStatus::Paused);
}

#[test]
fn new_with_unknown_slug_is_not_found() {
    let catalog = Catalog::new(vec![album(3)]);
    match AlbumPlayer::new(&catalog, "nope", FakeElement::new(), 0.8) {
        Err(Error::NotFound(slug)) => assert_eq!(slug, "nope"),
        Err(other) => panic!("unexpected error {other:?}"),
        Ok(_) => panic!("lookup of unknown slug succeeded"),
    }
}

#[test]
fn empty_album_is_rejected() {
    assert!(matches!(
        AlbumPlayer::with_album(album(0), FakeElement::new(), 0.8),
        Err(Error::EmptyAlbum(_))
    ));
}

#[test]
fn end_to_end_three_tracks() {
    let mut p = player(3);
    assert_eq!((p.state().current, p.state().is_playing), (0, false));

    p.activate(0);
    assert_eq!((p.state().current, p.state().is_playing), (0, true));

    p.next();
    assert_eq!((p.state().current, p.state().is_playing), (1, true));

    p.next();
    assert_eq!((p.state().current, p.state().is_playing), (2, true));

    p.next();
    assert_eq!((p.state().current, p.state().is_playing), (2, true));
    assert_eq!(p.element().source, src(2));
}

#[test]
fn next_is_bounded_by_live_track_count() {
    for len in [1usize, 2, 5, 7, 12] {
        for start in 0..len {
            let mut p = player(len);
            p.select_track(start);
            p.next();
            assert_eq!(p.state().current, (start + 1).min(len - 1), "len {len} start {start}");
            assert!(p.state().is_playing);
            assert_eq!(p.element().source, src(p.state().current));
        }
    }
}

#[test]
fn previous_clamps_at_first_track() {
    let mut p = player(3);
    p.previous();
    assert_eq!(p.state().current, 0);
    assert!(p.state().is_playing);

    p.select_track(2);
    p.previous();
    assert_eq!(p.state().current, 1);
}

#[test]
fn prev_and_next_play_even_when_stopped() {
    let mut p = player(3);
    assert!(!p.state().is_playing);
    p.next();
    assert!(p.state().is_playing);
    assert!(p.element().playing);
}

#[test]
fn activating_current_toggles_without_reselecting() {
    let mut p = player(3);
    p.activate(0);
    p.element().fire(MediaEvent::TimeUpdate(30.0));
    p.pump_events();
    let sources_before = p.element().source_changes();

    p.activate(0);
    assert!(!p.state().is_playing);
    assert_eq!(p.state().current, 0);
    assert!(!p.element().playing);

    p.activate(0);
    assert!(p.state().is_playing);
    assert_eq!(p.state().current_time, 30.0);
    assert_eq!(p.element().source_changes(), sources_before);
    assert_eq!(p.element().calls.last(), Some(&Call::Play));
}

#[test]
fn activating_another_track_plays_it() {
    let mut p = player(3);
    p.activate(0);
    p.activate(2);
    assert_eq!(p.state().current, 2);
    assert!(p.state().is_playing);
    assert_eq!(p.element().source, src(2));

    p.pause();
    p.activate(1);
    assert_eq!(p.state().current, 1);
    assert!(p.state().is_playing);
}

#[test]
fn activating_missing_row_is_ignored() {
    let mut p = player(2);
    p.activate(9);
    assert_eq!(p.state().current, 0);
    assert!(!p.state().is_playing);
}

#[test]
fn select_track_resets_time_and_uses_metadata_duration() {
    let mut p = player(3);
    p.element().fire(MediaEvent::TimeUpdate(12.0));
    p.element().fire(MediaEvent::DurationChange(180.0));
    p.pump_events();
    assert_eq!(p.state().duration, 180.0);

    p.select_track(1);
    assert_eq!(p.state().current_time, 0.0);
    assert_eq!(p.state().duration, 101.0);
    assert!(!p.state().is_playing);
}

#[test]
fn seek_half_of_two_hundred_is_one_hundred() {
    let mut p = player(1);
    p.element().fire(MediaEvent::DurationChange(200.0));
    p.pump_events();

    p.seek(0.5);
    assert_eq!(p.state().current_time, 100.0);
    assert_eq!(p.element().calls.last(), Some(&Call::Seek(100.0)));
}

#[test]
fn seek_clamps_fraction() {
    let mut p = player(1);
    p.seek(1.7);
    assert_eq!(p.state().current_time, 100.0);
    p.seek(-0.3);
    assert_eq!(p.state().current_time, 0.0);
    p.seek(f64::NAN);
    assert_eq!(p.state().current_time, 0.0);
}

#[test]
fn seek_by_scrubs_within_track() {
    let mut p = player(1);
    p.seek_by(30.0);
    assert_eq!(p.state().current_time, 30.0);
    p.seek_by(-45.0);
    assert_eq!(p.state().current_time, 0.0);
    p.seek_by(500.0);
    assert_eq!(p.state().current_time, 100.0);
}

#[test]
fn volume_is_clamped_and_mirrored() {
    let mut p = player(1);
    p.set_volume(0.3);
    assert_eq!(p.state().volume, 0.3);
    assert_eq!(p.element().volume, 0.3);

    p.set_volume(4.0);
    assert_eq!(p.state().volume, 1.0);
    assert_eq!(p.element().volume(), 1.0);

    p.nudge_volume(-2.0);
    assert_eq!(p.state().volume, 0.0);
    assert_eq!(p.element().calls.last(), Some(&Call::Volume(0.0)));
}

#[test]
fn notifications_mirror_element_state() {
    let mut p = player(2);
    p.element().fire(MediaEvent::TimeUpdate(5.5));
    p.element().fire(MediaEvent::DurationChange(222.0));
    assert!(p.pump_events());
    assert_eq!(p.state().current_time, 5.5);
    assert_eq!(p.state().duration, 222.0);

    // Unknown durations keep the last known value.
    p.element().fire(MediaEvent::DurationChange(f64::NAN));
    assert!(!p.pump_events());
    assert_eq!(p.state().duration, 222.0);
}

#[test]
fn ended_returns_to_stopped_on_same_track() {
    let mut p = player(2);
    p.activate(1);
    p.element().fire(MediaEvent::Ended);
    p.pump_events();
    assert_eq!(p.state().current, 1);
    assert!(!p.state().is_playing);
    assert_eq!(p.status(), PlaybackStatus::Paused);
}

#[test]
fn mount_registers_listeners_once() {
    let mut p = player(1);
    assert!(p.is_mounted());
    assert_eq!(p.element().listener_count(), 3);
    p.mount();
    assert_eq!(p.element().listener_count(), 3);
}

#[test]
fn unmount_releases_listeners_and_clears_source() {
    let mut p = player(2);
    p.activate(1);
    p.unmount();

    assert!(!p.is_mounted());
    assert_eq!(p.element().listener_count(), 0);
    assert_eq!(p.element().source, None);
    assert_eq!(p.element().calls.last(), Some(&Call::SetSource(None)));
}

#[test]
fn stale_notifications_after_unmount_do_not_mutate_state() {
    let mut p = player(2);
    // Queued before teardown, never applied.
    p.element().fire(MediaEvent::TimeUpdate(42.0));
    p.unmount();
    p.element().fire(MediaEvent::DurationChange(999.0));

    let before = p.state().clone();
    assert!(!p.pump_events());
    assert_eq!(p.state(), &before);
}

#[test]
fn row_display_prefers_pause_then_hover_then_number() {
    let mut p = player(3);
    assert_eq!(p.row_display(0), RowIcon::Number(1));
    assert_eq!(p.row_display(2), RowIcon::Number(3));

    p.hover(Some(1));
    assert_eq!(p.row_display(1), RowIcon::Play);

    p.activate(1);
    assert_eq!(p.row_display(1), RowIcon::Pause);

    p.pause();
    assert_eq!(p.row_display(1), RowIcon::Play);

    p.hover(None);
    assert_eq!(p.row_display(1), RowIcon::Number(2));
}

#[test]
fn hover_ignores_missing_rows_and_has_no_playback_effect() {
    let mut p = player(2);
    p.hover(Some(7));
    assert_eq!(p.state().hovered, None);
    p.hover(Some(1));
    assert_eq!(p.state().hovered, Some(1));
    assert!(p.element().calls.iter().all(|c| !matches!(c, Call::Play | Call::Pause)));
}

#[test]
fn keyboard_cursor_starts_at_current_and_clamps() {
    let mut p = player(3);
    p.select_track(1);
    p.hover_next();
    assert_eq!(p.state().hovered, Some(1));
    p.hover_next();
    p.hover_next();
    assert_eq!(p.state().hovered, Some(2));
    p.hover_previous();
    p.hover_previous();
    p.hover_previous();
    assert_eq!(p.state().hovered, Some(0));

    p.activate_hovered();
    assert_eq!(p.state().current, 0);
    assert!(p.state().is_playing);
}

#[test]
fn dispatch_routes_player_bar_actions() {
    let mut p = player(3);
    p.dispatch(Action::ActivateCurrent);
    assert!(p.state().is_playing);
    p.dispatch(Action::Next);
    assert_eq!(p.state().current, 1);
    p.dispatch(Action::Previous);
    assert_eq!(p.state().current, 0);
    p.dispatch(Action::Volume(0.25));
    assert_eq!(p.state().volume, 0.25);
    p.dispatch(Action::Seek(0.5));
    assert_eq!(p.state().current_time, 50.0);
    p.dispatch(Action::ActivateRow(2));
    assert_eq!(p.state().current, 2);
    p.dispatch(Action::Hover(Some(0)));
    assert_eq!(p.state().hovered, Some(0));
}

#[test]
fn redraw_flag_is_raised_by_changes_and_cleared_on_take() {
    let mut p = player(2);
    assert!(p.take_redraw());
    assert!(!p.take_redraw());

    p.hover(None);
    assert!(!p.take_redraw());

    p.play();
    assert!(p.take_redraw());

    p.element().fire(MediaEvent::TimeUpdate(1.0));
    p.pump_events();
    assert!(p.take_redraw());
}

#[test]
fn ended_track_plays_again_when_activated() {
    let mut p = player(2);
    p.activate(1);
    p.element().fire(MediaEvent::TimeUpdate(101.0));
    p.element().fire(MediaEvent::Ended);
    p.pump_events();
    assert!(!p.state().is_playing);

    p.activate(1);
    assert!(p.state().is_playing);
    assert_eq!(p.state().current, 1);
    assert_eq!(p.element().calls.last(), Some(&Call::Play));

    // The element restarts an ended source and reports the new position.
    p.element().fire(MediaEvent::TimeUpdate(0.0));
    p.pump_events();
    assert_eq!(p.state().current_time, 0.0);
    assert_eq!(p.row_display(1), RowIcon::Pause);
}

#[test]
fn progress_from_previous_track_is_discarded_on_select() {
    let mut p = player(3);
    p.activate(0);
    p.element().fire(MediaEvent::TimeUpdate(42.0));
    p.element().fire(MediaEvent::DurationChange(999.0));

    p.next();
    assert!(!p.pump_events());
    assert_eq!(p.state().current, 1);
    assert_eq!(p.state().current_time, 0.0);
    assert_eq!(p.state().duration, 101.0);

    // Reports for the new source still apply.
    p.element().fire(MediaEvent::TimeUpdate(2.0));
    assert!(p.pump_events());
    assert_eq!(p.state().current_time, 2.0);
}

#[test]
fn dropping_an_unmounted_player_clears_the_source() {
    let mut el = FakeElement::new();
    let p = AlbumPlayer::with_album(album(2), &mut el, 0.8).unwrap();
    assert!(!p.is_mounted());
    drop(p);

    assert_eq!(el.source, None);
    assert_eq!(el.calls.last(), Some(&Call::SetSource(None)));
}

#[test]
fn dropping_a_mounted_player_releases_listeners() {
    let mut el = FakeElement::new();
    let mut p = AlbumPlayer::with_album(album(2), &mut el, 0.8).unwrap();
    p.mount();
    drop(p);

    assert_eq!(el.listener_count(), 0);
    assert_eq!(el.source, None);
}
