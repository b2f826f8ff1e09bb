//! gui/view/player.rs
//! Renders one preview widget from its cached visual state.
//!
//! Emits only Messages; all synchronization happens in update/playback.

use iced::widget::{Row, Space, button, column, progress_bar, row, text};
use iced::{Alignment, Element, Length};

use super::constants::{BAR_W, ICON_BIG, ICON_SMALL, LABEL_TEXT, ROW_SPACING, TIME_TEXT};
use crate::core::types::PlayerSize;
use crate::gui::state::{Message, PlayerWidget};

pub(crate) fn build_player_row(widget: &PlayerWidget, index: usize) -> Row<'_, Message> {
    let icon_size = match widget.size {
        PlayerSize::Big => ICON_BIG,
        PlayerSize::Small => ICON_SMALL,
    };

    // Play button holding the current status icon.
    let play_btn = button(text(widget.icon.glyph()).size(icon_size))
        .on_press(Message::TogglePlayPause(index));

    // The playing class flag, rendered as a label marker.
    let marker = if widget.playing { "♪ " } else { "" };
    let label = text(format!("{marker}{}", widget.label)).size(LABEL_TEXT);

    // Primary indicator: the transform offset maps straight back to a
    // fill percentage (offset + 100).
    let fill = widget.progress.indicator_offset_pct + 100.0;
    let indicator = progress_bar(0.0..=100.0, fill).length(Length::Fixed(BAR_W));

    // Secondary bar-style indicator, positioned by its pixel offset.
    let progress_column = match widget.progress.bar_offset_px {
        Some(px) => {
            // iced 0.14: Space is built with new() + builder methods.
            let bar_marker = row![
                Space::new().width(Length::Fixed(px)),
                text("▮").size(TIME_TEXT)
            ];
            column![label, indicator, bar_marker].spacing(2)
        }
        None => column![label, indicator].spacing(2),
    };

    // Progress-status wrapper: indicators first, time label second.
    let time_label: Element<'_, Message> = text(&widget.time_label).size(TIME_TEXT).into();

    row![play_btn, progress_column, time_label]
        .spacing(ROW_SPACING)
        .align_y(Alignment::Center)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::player::progress::set_progress;
    use crate::gui::state::PlayerWidget;

    #[test]
    fn builds_rows_for_both_sizes() {
        let small = PlayerWidget::detached(PlayerSize::Small);
        let _ = build_player_row(&small, 0);

        // Big widgets take the bar-marker path.
        let mut big = PlayerWidget::detached(PlayerSize::Big);
        set_progress(50.0, &mut big);
        assert!(big.progress.bar_offset_px.is_some());
        let _ = build_player_row(&big, 1);
    }
}
