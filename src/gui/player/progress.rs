//! gui/player/progress.rs
//! Progress Renderer: playback position -> indicator transforms.
//!
//! The primary indicator slides left-to-right by a percentage offset:
//! a full bar sits at 0, an empty one at -100. Big widgets also carry a
//! bar-style indicator positioned by an absolute pixel offset.

use crate::gui::state::PlayerWidget;

/// Cached visual state of the two progress indicators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ProgressTransforms {
    /// Horizontal translation of the primary indicator, in percent of its
    /// own width. `percentage - 100`, so 0% progress -> -100 (hidden) and
    /// 100% -> 0 (fully shown).
    pub indicator_offset_pct: f32,
    /// Absolute pixel offset of the secondary bar indicator; None when
    /// the widget has no bar.
    pub bar_offset_px: Option<f32>,
}

impl Default for ProgressTransforms {
    fn default() -> Self {
        Self {
            indicator_offset_pct: -100.0,
            bar_offset_px: None,
        }
    }
}

/// Progress percentage from a live playback position.
///
/// Returns None while the duration is unknown or zero (media not probed
/// yet) so the caller skips the update instead of rendering NaN.
pub(crate) fn progress_percentage(position_ms: u64, duration_ms: Option<u64>) -> Option<f32> {
    let duration_ms = duration_ms?;
    if duration_ms == 0 {
        return None;
    }

    let pct = (position_ms as f64 / duration_ms as f64 * 100.0).ceil();
    Some(pct.clamp(0.0, 100.0) as f32)
}

/// Write `percentage` into the widget's indicator transforms.
/// Idempotent; tolerates the bar indicator being absent.
pub(crate) fn set_progress(percentage: f32, widget: &mut PlayerWidget) {
    widget.progress.indicator_offset_pct = percentage - 100.0;
    widget.progress.bar_offset_px = widget.bar_width.map(|w| w * percentage / 100.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::PlayerSize;
    use crate::gui::state::PlayerWidget;

    fn widget(size: PlayerSize) -> PlayerWidget {
        let mut w = PlayerWidget::detached(size);
        w.bar_width = match size {
            PlayerSize::Big => Some(420.0),
            PlayerSize::Small => None,
        };
        w
    }

    #[test]
    fn indicator_offset_is_percentage_minus_100() {
        let mut w = widget(PlayerSize::Small);
        for p in 0..=100 {
            set_progress(p as f32, &mut w);
            assert_eq!(w.progress.indicator_offset_pct, p as f32 - 100.0);
        }
    }

    #[test]
    fn bar_offset_scales_with_parent_width() {
        let mut w = widget(PlayerSize::Big);
        set_progress(50.0, &mut w);
        assert_eq!(w.progress.bar_offset_px, Some(210.0));

        set_progress(0.0, &mut w);
        assert_eq!(w.progress.bar_offset_px, Some(0.0));

        set_progress(100.0, &mut w);
        assert_eq!(w.progress.bar_offset_px, Some(420.0));
    }

    #[test]
    fn absent_bar_indicator_is_a_noop() {
        let mut w = widget(PlayerSize::Small);
        set_progress(75.0, &mut w);
        assert_eq!(w.progress.bar_offset_px, None);
        assert_eq!(w.progress.indicator_offset_pct, -25.0);
    }

    #[test]
    fn repeated_calls_are_idempotent() {
        let mut w = widget(PlayerSize::Big);
        set_progress(33.0, &mut w);
        let first = w.progress;
        set_progress(33.0, &mut w);
        assert_eq!(w.progress, first);
    }

    #[test]
    fn percentage_rounds_up() {
        // 1ms into 3 minutes is not 0%.
        assert_eq!(progress_percentage(1, Some(180_000)), Some(1.0));
        assert_eq!(progress_percentage(45_000, Some(180_000)), Some(25.0));
        assert_eq!(progress_percentage(180_000, Some(180_000)), Some(100.0));
        assert_eq!(progress_percentage(0, Some(180_000)), Some(0.0));
    }

    #[test]
    fn unknown_or_zero_duration_yields_none() {
        assert_eq!(progress_percentage(1_000, None), None);
        assert_eq!(progress_percentage(1_000, Some(0)), None);
    }
}
