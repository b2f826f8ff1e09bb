//! gui/update/playback.rs
//! Playback State Controller.
//!
//! Reacts to engine notifications (play/pause/timeupdate) and keeps each
//! widget's visual state in sync: playing flag, status icon, progress
//! transforms, time label. Owns the transition-specific behavior, like
//! the deferred progress reset after an end-of-track pause.
//!
//! Design goals:
//! - GUI never touches rodio/symphonia directly.
//! - State changes happen on events, not optimistically on button press.

use iced::Task;

use super::super::state::{Message, PlaybackPhase, Soundbite};
use crate::core::playback::{PlayerCommand, PlayerEvent};
use crate::core::types::PlayerAction;
use crate::gui::player::icon::set_action_icon;
use crate::gui::player::progress::{progress_percentage, set_progress};
use crate::gui::player::time_label::set_time_label;

/// Drain pending engine events for every widget.
pub(crate) fn drain_events(state: &mut Soundbite) -> Task<Message> {
    let mut tasks = Vec::new();

    for index in 0..state.players.len() {
        let mut drained: Vec<PlayerEvent> = Vec::new();
        {
            // Receiver::try_recv only needs &self, so borrow() is enough.
            let rx = state.players[index].events.borrow();
            while let Ok(ev) = rx.try_recv() {
                drained.push(ev);
            }
        }

        for ev in drained {
            tasks.push(handle_event(state, index, ev));
        }
    }

    Task::batch(tasks)
}

/// One animation frame: recompute progress for every playing widget from
/// its live playhead. Widgets that stopped playing are skipped; the loop
/// declines to do further work rather than cancelling pending frames.
pub(crate) fn animation_tick(state: &mut Soundbite) -> Task<Message> {
    let task = drain_events(state);

    for widget in &mut state.players {
        if widget.phase != PlaybackPhase::Playing {
            continue;
        }

        if let Some(pct) = progress_percentage(widget.playhead.current_ms(), widget.duration_ms) {
            set_progress(pct, widget);
        }
    }

    task
}

pub(crate) fn toggle_play_pause(state: &mut Soundbite, index: usize) -> Task<Message> {
    let Some(widget) = state.players.get(index) else {
        return Task::none();
    };

    // Visuals follow the engine's notification, not the click.
    let cmd = match widget.phase {
        PlaybackPhase::Playing => PlayerCommand::Pause,
        _ => PlayerCommand::Play,
    };
    widget.controller.send(cmd);

    Task::none()
}

pub(crate) fn handle_event(state: &mut Soundbite, index: usize, event: PlayerEvent) -> Task<Message> {
    #[cfg(debug_assertions)]
    if let PlayerEvent::Error(e) = &event {
        eprintln!("[GUI] widget {index} engine error: {e}");
    }

    match event {
        PlayerEvent::Playing {
            position_ms,
            duration_ms,
        } => on_play(state, index, position_ms, duration_ms),
        PlayerEvent::Paused {
            position_ms,
            duration_ms,
        } => on_pause(state, index, position_ms, duration_ms),
        PlayerEvent::Position {
            position_ms,
            duration_ms,
        } => on_time_update(state, index, position_ms, duration_ms),
        PlayerEvent::Error(err) => {
            state.status = format!("Playback error: {err}");
            Task::none()
        }
    }
}

/// `play` notification: mark the container playing, swap in the pause
/// icon, and let the animation loop pick the widget up on the next frame
/// (the subscription switches to frame cadence because of the phase).
fn on_play(
    state: &mut Soundbite,
    index: usize,
    position_ms: u64,
    duration_ms: Option<u64>,
) -> Task<Message> {
    let Some(widget) = state.players.get_mut(index) else {
        return Task::none();
    };

    widget.duration_ms = duration_ms;
    widget.playhead.set(position_ms, true);

    widget.playing = true;
    set_action_icon(widget, PlayerAction::Pause);
    widget.phase = PlaybackPhase::Playing;

    set_time_label(widget, &state.settings);

    Task::none()
}

/// `pause` notification: clear the playing flag, swap in the play icon.
/// A pause at the exact end is the Ended transition, which schedules the
/// progress reset after the configured delay, sequenced behind the pause
/// visuals so the bar doesn't snap back before the icon repaints.
fn on_pause(
    state: &mut Soundbite,
    index: usize,
    position_ms: u64,
    duration_ms: Option<u64>,
) -> Task<Message> {
    let Some(widget) = state.players.get_mut(index) else {
        return Task::none();
    };

    if duration_ms.is_some() {
        widget.duration_ms = duration_ms;
    }
    widget.playhead.set(position_ms, false);

    widget.playing = false;
    set_action_icon(widget, PlayerAction::Play);
    widget.phase = phase_after_pause(position_ms, widget.duration_ms);

    set_time_label(widget, &state.settings);

    if widget.phase == PlaybackPhase::Ended {
        let delay = state.settings.reset_delay;
        return Task::perform(tokio::time::sleep(delay), move |_| {
            Message::ResetProgress(index)
        });
    }

    Task::none()
}

/// `timeupdate` notification: re-anchor the playhead and refresh the
/// label. Fires many times per second while playing.
fn on_time_update(
    state: &mut Soundbite,
    index: usize,
    position_ms: u64,
    duration_ms: Option<u64>,
) -> Task<Message> {
    let Some(widget) = state.players.get_mut(index) else {
        return Task::none();
    };

    if duration_ms.is_some() {
        widget.duration_ms = duration_ms;
    }
    widget
        .playhead
        .set(position_ms, widget.phase == PlaybackPhase::Playing);

    set_time_label(widget, &state.settings);

    Task::none()
}

/// Where a pause lands: the exact end is Ended, anywhere else is
/// PausedMidway. An unknown duration can never compare equal, so those
/// pauses stay midway and the progress bar keeps its last state.
pub(crate) fn phase_after_pause(position_ms: u64, duration_ms: Option<u64>) -> PlaybackPhase {
    match duration_ms {
        Some(duration_ms) if position_ms == duration_ms => PlaybackPhase::Ended,
        _ => PlaybackPhase::PausedMidway,
    }
}

/// The deferred end-of-track reset. Applies only if the widget is still
/// Ended; a replay started during the delay wins.
pub(crate) fn reset_progress(state: &mut Soundbite, index: usize) -> Task<Message> {
    if let Some(widget) = state.players.get_mut(index) {
        if widget.phase == PlaybackPhase::Ended {
            set_progress(0.0, widget);
        }
    }

    Task::none()
}

/// Display-mode toggle: flip the shared setting and refresh every label
/// immediately so the polarity change doesn't wait for the next tick.
pub(crate) fn toggle_remaining_time(state: &mut Soundbite, show: bool) -> Task<Message> {
    state.settings.show_remaining_time = show;

    let settings = state.settings;
    for widget in &mut state.players {
        set_time_label(widget, &settings);
    }

    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{PlayerAction, PlayerSize};
    use crate::gui::player::icon::IconVariant;
    use crate::gui::player::progress::set_progress;
    use crate::gui::state::{DisplaySettings, PlayerWidget, Soundbite};

    fn app_with(players: Vec<PlayerWidget>) -> Soundbite {
        Soundbite {
            status: String::new(),
            settings: DisplaySettings::default(),
            players,
        }
    }

    fn playing_event(position_ms: u64) -> PlayerEvent {
        PlayerEvent::Playing {
            position_ms,
            duration_ms: Some(180_000),
        }
    }

    fn paused_event(position_ms: u64) -> PlayerEvent {
        PlayerEvent::Paused {
            position_ms,
            duration_ms: Some(180_000),
        }
    }

    #[test]
    fn play_notification_marks_widget_playing() {
        let mut app = app_with(vec![PlayerWidget::detached(PlayerSize::Big)]);

        let _ = handle_event(&mut app, 0, playing_event(0));

        let w = &app.players[0];
        assert!(w.playing);
        assert_eq!(w.phase, PlaybackPhase::Playing);
        assert_eq!(w.icon.action, PlayerAction::Pause);
        assert_eq!(w.icon.variant, IconVariant::Stroke);
        assert_eq!(w.duration_ms, Some(180_000));
    }

    #[test]
    fn small_widget_pause_icon_is_solid() {
        let mut app = app_with(vec![PlayerWidget::detached(PlayerSize::Small)]);

        let _ = handle_event(&mut app, 0, playing_event(0));

        assert_eq!(app.players[0].icon.variant, IconVariant::Solid);
    }

    #[test]
    fn pause_midway_keeps_progress() {
        let mut app = app_with(vec![PlayerWidget::detached(PlayerSize::Small)]);

        let _ = handle_event(&mut app, 0, playing_event(0));
        set_progress(50.0, &mut app.players[0]);

        let _ = handle_event(&mut app, 0, paused_event(90_000));

        let w = &app.players[0];
        assert!(!w.playing);
        assert_eq!(w.phase, PlaybackPhase::PausedMidway);
        assert_eq!(w.icon.action, PlayerAction::Play);
        // progress indicator NOT reset
        assert_eq!(w.progress.indicator_offset_pct, -50.0);
    }

    #[tokio::test]
    async fn pause_at_exact_end_transitions_to_ended() {
        let mut app = app_with(vec![PlayerWidget::detached(PlayerSize::Small)]);

        let _ = handle_event(&mut app, 0, playing_event(0));
        let _ = handle_event(&mut app, 0, paused_event(180_000));

        assert_eq!(app.players[0].phase, PlaybackPhase::Ended);
        assert_eq!(app.players[0].icon.action, PlayerAction::Play);
    }

    #[tokio::test]
    async fn deferred_reset_applies_only_while_ended() {
        let mut app = app_with(vec![PlayerWidget::detached(PlayerSize::Small)]);

        let _ = handle_event(&mut app, 0, playing_event(0));
        set_progress(100.0, &mut app.players[0]);
        let _ = handle_event(&mut app, 0, paused_event(180_000));

        let _ = reset_progress(&mut app, 0);
        assert_eq!(app.players[0].progress.indicator_offset_pct, -100.0);

        // A replay started before the delayed reset fires wins.
        let _ = handle_event(&mut app, 0, playing_event(0));
        set_progress(10.0, &mut app.players[0]);
        let _ = reset_progress(&mut app, 0);
        assert_eq!(app.players[0].progress.indicator_offset_pct, -90.0);
    }

    #[test]
    fn animation_skips_widgets_that_stopped_playing() {
        let mut app = app_with(vec![PlayerWidget::detached(PlayerSize::Small)]);

        let _ = handle_event(&mut app, 0, playing_event(0));
        let _ = handle_event(&mut app, 0, paused_event(90_000));
        set_progress(50.0, &mut app.players[0]);

        let _ = animation_tick(&mut app);

        // no further renderer calls from the loop once paused
        assert_eq!(app.players[0].progress.indicator_offset_pct, -50.0);
    }

    #[test]
    fn animation_advances_playing_widgets() {
        let mut app = app_with(vec![PlayerWidget::detached(PlayerSize::Small)]);

        let _ = handle_event(&mut app, 0, playing_event(45_000));
        let _ = animation_tick(&mut app);

        // ceil(45s / 180s * 100) = 25 -> offset -75, or a hair past it
        // if the wall clock ticked between anchor and frame.
        let offset = app.players[0].progress.indicator_offset_pct;
        assert!((-75.0..=-74.0).contains(&offset), "offset = {offset}");
    }

    #[test]
    fn phase_after_pause_table() {
        assert_eq!(
            phase_after_pause(180_000, Some(180_000)),
            PlaybackPhase::Ended
        );
        assert_eq!(
            phase_after_pause(90_000, Some(180_000)),
            PlaybackPhase::PausedMidway
        );
        assert_eq!(phase_after_pause(90_000, None), PlaybackPhase::PausedMidway);
    }

    #[test]
    fn timeupdate_refreshes_the_label() {
        let mut app = app_with(vec![PlayerWidget::detached(PlayerSize::Small)]);

        let _ = handle_event(&mut app, 0, playing_event(0));
        let _ = handle_event(
            &mut app,
            0,
            PlayerEvent::Position {
                position_ms: 45_000,
                duration_ms: Some(180_000),
            },
        );
        assert_eq!(app.players[0].time_label, "0:45");

        let _ = toggle_remaining_time(&mut app, true);
        assert_eq!(app.players[0].time_label, "-2:15");
    }

    #[tokio::test]
    async fn end_of_track_label_reads_as_reset() {
        let mut app = app_with(vec![PlayerWidget::detached(PlayerSize::Small)]);

        let _ = handle_event(&mut app, 0, playing_event(0));
        let _ = handle_event(&mut app, 0, paused_event(180_000));
        assert_eq!(app.players[0].time_label, "0:00");

        let _ = toggle_remaining_time(&mut app, true);
        assert_eq!(app.players[0].time_label, "-3:00");
    }
}
