//! core/playback/mod.rs
//! Playback primitive: one engine thread per widget.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use crate::core::types::SourceSet;

mod decoder;
mod engine;

pub use engine::PlaybackEngine;

/// Command handle for one widget's engine.
#[derive(Clone)]
pub struct PlaybackController {
    command_tx: Sender<PlayerCommand>,
}

impl PlaybackController {
    /// Best-effort send. If the engine died, the command is dropped.
    pub fn send(&self, cmd: PlayerCommand) {
        let _ = self.command_tx.send(cmd);
    }
}

#[derive(Debug)]
pub enum PlayerCommand {
    Play,
    Pause,
    Shutdown,
}

/// Notifications from the playback primitive, mirroring the media-element
/// events the widget reacts to: play, pause, timeupdate. Positions are
/// clamped to the known duration, so "ended" arrives as
/// `Paused { position_ms == duration_ms }`.
#[derive(Debug, Clone)]
pub enum PlayerEvent {
    Playing {
        position_ms: u64,
        duration_ms: Option<u64>,
    },
    Paused {
        position_ms: u64,
        duration_ms: Option<u64>,
    },
    Position {
        position_ms: u64,
        duration_ms: Option<u64>,
    },
    Error(String),
}

/// Element Factory: spawns the engine thread for one widget, with its two
/// encoded-source candidates attached, and returns:
/// - PlaybackController (store on the widget)
/// - Receiver<PlayerEvent> (drained by the GUI subscription)
///
/// The engine lives until it receives `Shutdown` or the controller is
/// dropped. Construction failures surface as an `Error` event.
pub fn create_audio_element(sources: SourceSet) -> (PlaybackController, Receiver<PlayerEvent>) {
    let (command_tx, command_rx) = mpsc::channel::<PlayerCommand>();
    let (event_tx, event_rx) = mpsc::channel::<PlayerEvent>();

    thread::spawn(move || {
        let mut engine = match PlaybackEngine::new(sources, event_tx.clone()) {
            Ok(e) => e,
            Err(msg) => {
                let _ = event_tx.send(PlayerEvent::Error(msg));
                return;
            }
        };

        engine.run(command_rx);
    });

    (PlaybackController { command_tx }, event_rx)
}

/// Controller backed by a bare channel, for exercising the GUI-side
/// state machine without an audio device.
#[cfg(test)]
pub fn test_controller() -> (PlaybackController, Receiver<PlayerCommand>) {
    let (command_tx, command_rx) = mpsc::channel::<PlayerCommand>();
    (PlaybackController { command_tx }, command_rx)
}
