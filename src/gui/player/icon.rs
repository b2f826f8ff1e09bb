//! gui/player/icon.rs
//! Icon Swapper: build and swap the play button's status icon.

use crate::core::types::{PlayerAction, PlayerSize};
use crate::gui::state::PlayerWidget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IconVariant {
    Solid,
    Stroke,
}

/// The status icon currently sitting inside a widget's play button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ActionIcon {
    pub action: PlayerAction,
    pub variant: IconVariant,
}

impl ActionIcon {
    pub fn glyph(&self) -> &'static str {
        match (self.action, self.variant) {
            (PlayerAction::Play, IconVariant::Solid) => "▶",
            (PlayerAction::Play, IconVariant::Stroke) => "▷",
            (PlayerAction::Pause, IconVariant::Solid) => "⏸",
            (PlayerAction::Pause, IconVariant::Stroke) => "‖",
        }
    }
}

/// Icon factory: big widgets get the stroke variant, everything else the
/// solid one.
pub(crate) fn action_icon(action: PlayerAction, size: PlayerSize) -> ActionIcon {
    let variant = match size {
        PlayerSize::Big => IconVariant::Stroke,
        PlayerSize::Small => IconVariant::Solid,
    };

    ActionIcon { action, variant }
}

/// Replace the widget's status icon with a fresh one for `action`.
/// Exactly one replacement per call; the old icon is discarded.
pub(crate) fn set_action_icon(widget: &mut PlayerWidget, action: PlayerAction) {
    widget.icon = action_icon(action, widget.size);
}
