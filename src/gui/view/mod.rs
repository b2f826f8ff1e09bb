//! GUI renderer (reads state, produces widgets; no mutation).

pub(crate) mod constants;
mod player;

use iced::Length;
use iced::widget::{Column, checkbox, column, scrollable, text};

use super::state::{Message, Soundbite};
use constants::PAGE_SPACING;

pub(crate) fn view(state: &Soundbite) -> Column<'_, Message> {
    // iced 0.14: the checkbox constructor takes only the checked state.
    let remaining_toggle = checkbox(state.settings.show_remaining_time)
        .label("Show remaining time")
        .on_toggle(Message::ToggleRemainingTime);

    let mut players = column![];
    for (i, widget) in state.players.iter().enumerate() {
        players = players.push(player::build_player_row(widget, i));
    }

    column![
        text("Soundbite"),
        text(&state.status),
        remaining_toggle,
        scrollable(players.spacing(PAGE_SPACING)).height(Length::Fill),
    ]
    .spacing(PAGE_SPACING)
    .padding(12)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::PlayerSize;
    use crate::gui::state::{DisplaySettings, PlayerWidget, Soundbite};

    #[test]
    fn renders_a_page_with_widgets() {
        let state = Soundbite {
            status: "ready".into(),
            settings: DisplaySettings::default(),
            players: vec![
                PlayerWidget::detached(PlayerSize::Small),
                PlayerWidget::detached(PlayerSize::Big),
            ],
        };

        let _ = view(&state);
    }
}
