//! core/playback/engine.rs
//! Playback engine (rodio owner) for one preview widget.
//!
//! Owns:
//! - OutputStream (must stay alive)
//! - Sink (per playback run)
//! - the widget's two source candidates
//! - command loop + periodic position ticks
//!
//! Emits PlayerEvent back via a channel. No Iced imports.

use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};

use super::decoder;
use super::{PlayerCommand, PlayerEvent};
use crate::core::types::SourceSet;

/// Position tick period; "timeupdate" cadence while playing.
const TICK_MS: u64 = 200;

pub struct PlaybackEngine {
    // Keep this alive for the lifetime of the engine!
    stream: OutputStream,

    sources: SourceSet,

    // Current playback run
    sink: Option<Sink>,
    duration_ms: Option<u64>,

    event_tx: Sender<PlayerEvent>,
}

impl PlaybackEngine {
    pub fn new(sources: SourceSet, event_tx: Sender<PlayerEvent>) -> Result<Self, String> {
        // rodio 0.21.x: build/open the default output stream via OutputStreamBuilder
        let stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| format!("Failed to init audio output: {e}"))?;

        Ok(Self {
            stream,
            sources,
            sink: None,
            duration_ms: None,
            event_tx,
        })
    }

    pub fn run(&mut self, command_rx: Receiver<PlayerCommand>) {
        let tick = Duration::from_millis(TICK_MS);

        loop {
            match command_rx.recv_timeout(tick) {
                Ok(cmd) => {
                    if self.handle_command(cmd) {
                        break;
                    }
                    while let Ok(cmd) = command_rx.try_recv() {
                        if self.handle_command(cmd) {
                            return;
                        }
                    }
                }
                Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
                Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
            }

            self.tick();
        }

        self.stop_internal();
    }

    /// Returns true on Shutdown.
    fn handle_command(&mut self, cmd: PlayerCommand) -> bool {
        match cmd {
            PlayerCommand::Play => match &self.sink {
                Some(sink) if sink.is_paused() => {
                    sink.play();
                    let position_ms = self.clamped_position();
                    let _ = self.event_tx.send(PlayerEvent::Playing {
                        position_ms,
                        duration_ms: self.duration_ms,
                    });
                }
                Some(_) => {} // already playing
                None => {
                    if let Err(e) = self.play_from_start() {
                        let _ = self.event_tx.send(PlayerEvent::Error(e));
                    }
                }
            },
            PlayerCommand::Pause => {
                if let Some(sink) = &self.sink {
                    sink.pause();
                    let position_ms = self.clamped_position();
                    let _ = self.event_tx.send(PlayerEvent::Paused {
                        position_ms,
                        duration_ms: self.duration_ms,
                    });
                }
            }
            PlayerCommand::Shutdown => return true,
        }

        false
    }

    fn tick(&mut self) {
        let Some(sink) = &self.sink else { return };

        if sink.is_paused() {
            return;
        }

        let position_ms = self.clamped_position();
        let _ = self.event_tx.send(PlayerEvent::Position {
            position_ms,
            duration_ms: self.duration_ms,
        });

        // The sink drained: the track reached its end. Report a final
        // position followed by a pause at the exact end, then release the
        // sink so the next Play restarts from the beginning.
        if sink.empty() {
            let end_ms = self.duration_ms.unwrap_or(position_ms);
            let _ = self.event_tx.send(PlayerEvent::Position {
                position_ms: end_ms,
                duration_ms: self.duration_ms,
            });
            let _ = self.event_tx.send(PlayerEvent::Paused {
                position_ms: end_ms,
                duration_ms: self.duration_ms,
            });
            self.stop_internal();
        }
    }

    /// Open the first source candidate that decodes, in preference order
    /// (mp3, then ogg), and start playing it from the top.
    fn play_from_start(&mut self) -> Result<(), String> {
        let mut last_err = "No source candidates attached.".to_string();

        for path in self.sources.candidates().cloned().collect::<Vec<_>>() {
            match decoder::open_source(&path) {
                Ok((source, duration_ms)) => {
                    #[cfg(debug_assertions)]
                    eprintln!(
                        "[engine] playing {} duration_ms={:?}",
                        path.display(),
                        duration_ms
                    );

                    // rodio 0.21.x: Sink is created from the stream's mixer
                    let sink = Sink::connect_new(self.stream.mixer());
                    sink.append(source);
                    sink.play();

                    self.duration_ms = duration_ms;
                    self.sink = Some(sink);

                    let _ = self.event_tx.send(PlayerEvent::Playing {
                        position_ms: 0,
                        duration_ms,
                    });
                    return Ok(());
                }
                Err(e) => {
                    last_err = format!("{}: {e}", path.display());
                }
            }
        }

        Err(last_err)
    }

    /// Current sink position, clamped so it never overshoots the known
    /// duration. Keeps the "ended" comparison an exact equality upstream.
    fn clamped_position(&self) -> u64 {
        let position_ms = self
            .sink
            .as_ref()
            .map(|s| s.get_pos().as_millis() as u64)
            .unwrap_or(0);

        match self.duration_ms {
            Some(total) => position_ms.min(total),
            None => position_ms,
        }
    }

    fn stop_internal(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        self.duration_ms = None;
    }
}
