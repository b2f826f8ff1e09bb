//! gui/player/time_label.rs
//! Time Label Updater: playback position -> elapsed/remaining text.

use crate::gui::state::{DisplaySettings, PlayerWidget};
use crate::gui::util::fmt_duration;

/// Compute the label text for a playback position.
///
/// Reaching the exact end counts as elapsed 0: the label flips to the
/// reset reading immediately, before the progress bar snaps back.
/// Remaining mode shows `duration - elapsed` with a `-` prefix.
pub(crate) fn time_label(position_ms: u64, duration_ms: Option<u64>, show_remaining: bool) -> String {
    let Some(duration_ms) = duration_ms else {
        // Remaining time needs a duration; until the media is probed we
        // can only show elapsed.
        return fmt_duration(position_ms);
    };

    // The extrapolated playhead can overshoot between engine reports.
    let position_ms = position_ms.min(duration_ms);

    let did_reach_the_end = position_ms == duration_ms;
    let time_elapsed = if did_reach_the_end { 0 } else { position_ms };

    if show_remaining {
        format!("-{}", fmt_duration(duration_ms - time_elapsed))
    } else {
        fmt_duration(time_elapsed)
    }
}

/// Write the current label into the widget. Called on every position
/// notification, so it stays cheap.
pub(crate) fn set_time_label(widget: &mut PlayerWidget, settings: &DisplaySettings) {
    widget.time_label = time_label(
        widget.playhead.current_ms(),
        widget.duration_ms,
        settings.show_remaining_time,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: Option<u64> = Some(180_000);

    #[test]
    fn elapsed_mode_shows_position() {
        assert_eq!(time_label(45_000, DURATION, false), "0:45");
    }

    #[test]
    fn remaining_mode_shows_negative_countdown() {
        assert_eq!(time_label(45_000, DURATION, true), "-2:15");
    }

    #[test]
    fn exact_end_resets_elapsed_to_zero() {
        assert_eq!(time_label(180_000, DURATION, false), "0:00");
    }

    #[test]
    fn exact_end_in_remaining_mode_shows_full_duration() {
        assert_eq!(time_label(180_000, DURATION, true), "-3:00");
    }

    #[test]
    fn unknown_duration_falls_back_to_elapsed() {
        assert_eq!(time_label(45_000, None, true), "0:45");
        assert_eq!(time_label(45_000, None, false), "0:45");
    }
}
