//! GUI state + messages.
//! Pure data definitions used by update + view.

use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use crate::core::playback::{
    PlaybackController, PlayerCommand, PlayerEvent, create_audio_element,
};
use crate::core::types::{PlayerAction, PlayerSize, SourceSet};
use crate::gui::player::icon::{ActionIcon, action_icon};
use crate::gui::player::playhead::Playhead;
use crate::gui::player::progress::ProgressTransforms;
use crate::gui::util::filename_stem;
use crate::gui::view::constants::BAR_W;

/// Default delay before the progress indicator snaps back to 0 after a
/// track reaches its end. Lets the pause visuals paint first.
pub(crate) const RESET_DELAY_MS: u64 = 100;

/// Explicit playback state for one widget, driven by engine events.
/// "Ended" is a pause whose position equals the duration exactly; it is
/// the only state from which the deferred progress reset fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PlaybackPhase {
    Idle,
    Playing,
    PausedMidway,
    Ended,
}

/// Display preferences shared by every widget on the page.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DisplaySettings {
    pub show_remaining_time: bool,
    pub reset_delay: Duration,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_remaining_time: false,
            reset_delay: Duration::from_millis(RESET_DELAY_MS),
        }
    }
}

/// One inline preview player.
///
/// Visual state is cached here once per instance instead of being looked
/// up on every update: the status icon, the progress transforms, the
/// label text, and the playing flag that drives the widget chrome.
pub(crate) struct PlayerWidget {
    pub label: String,
    pub size: PlayerSize,

    // Playback primitive (created once, lives as long as the widget)
    pub controller: PlaybackController,
    // Receiver::try_recv only needs &self; RefCell lets drain borrow it
    // while update mutates the rest of the widget.
    pub events: RefCell<Receiver<PlayerEvent>>,

    // Synchronized visual state
    pub phase: PlaybackPhase,
    pub playing: bool,
    pub icon: ActionIcon,
    pub progress: ProgressTransforms,
    pub time_label: String,

    // Live position model
    pub playhead: Playhead,
    pub duration_ms: Option<u64>,

    /// Width of the secondary bar-style indicator, when the widget has
    /// one (big players only).
    pub bar_width: Option<f32>,
}

impl PlayerWidget {
    pub fn new(path: PathBuf, size: PlayerSize) -> Self {
        let label = filename_stem(&path);
        let sources = SourceSet::for_path(path);
        let (controller, events) = create_audio_element(sources);

        Self::with_channels(label, size, controller, events)
    }

    /// Wire a widget to an already-built controller/event pair.
    /// `new` uses the real engine; tests use a bare channel.
    pub fn with_channels(
        label: String,
        size: PlayerSize,
        controller: PlaybackController,
        events: Receiver<PlayerEvent>,
    ) -> Self {
        let bar_width = match size {
            PlayerSize::Big => Some(BAR_W),
            PlayerSize::Small => None,
        };

        Self {
            label,
            size,
            controller,
            events: RefCell::new(events),
            phase: PlaybackPhase::Idle,
            playing: false,
            icon: action_icon(PlayerAction::Play, size),
            progress: ProgressTransforms::default(),
            time_label: String::new(),
            playhead: Playhead::default(),
            duration_ms: None,
            bar_width,
        }
    }
}

#[cfg(test)]
impl PlayerWidget {
    /// Widget wired to dead channels: no engine, no audio device.
    pub fn detached(size: PlayerSize) -> Self {
        let (controller, _commands) = crate::core::playback::test_controller();
        let (_event_tx, events) = std::sync::mpsc::channel();
        Self::with_channels("clip".into(), size, controller, events)
    }
}

impl Drop for PlayerWidget {
    // The primitive lives exactly as long as its widget.
    fn drop(&mut self) {
        self.controller.send(PlayerCommand::Shutdown);
    }
}

/// Startup options parsed from the command line.
#[derive(Debug, Clone, Default)]
pub(crate) struct Options {
    pub paths: Vec<PathBuf>,
    pub big: bool,
    pub show_remaining_time: bool,
    pub reset_delay_ms: Option<u64>,
}

/// App state: one page of preview widgets.
pub(crate) struct Soundbite {
    pub status: String,
    pub settings: DisplaySettings,
    pub players: Vec<PlayerWidget>,
}

impl Soundbite {
    pub fn new(options: Options) -> Self {
        let size = if options.big {
            PlayerSize::Big
        } else {
            PlayerSize::Small
        };

        let players: Vec<PlayerWidget> = options
            .paths
            .iter()
            .cloned()
            .map(|p| PlayerWidget::new(p, size))
            .collect();

        let status = if players.is_empty() {
            "No sounds. Pass audio file paths on the command line.".to_string()
        } else {
            format!("{} preview(s) loaded.", players.len())
        };

        let settings = DisplaySettings {
            show_remaining_time: options.show_remaining_time,
            reset_delay: Duration::from_millis(options.reset_delay_ms.unwrap_or(RESET_DELAY_MS)),
        };

        Self {
            status,
            settings,
            players,
        }
    }
}

/// Message = something happened.
#[derive(Debug, Clone)]
pub(crate) enum Message {
    /// Slow poll while nothing is playing: drain engine events.
    TickPlayback,
    /// Frame-cadence tick while at least one widget is playing.
    AnimationTick,

    /// Play button of widget `i`.
    TogglePlayPause(usize),
    /// Deferred progress reset after an end-of-track pause.
    ResetProgress(usize),

    /// Display-mode checkbox.
    ToggleRemainingTime(bool),
}
