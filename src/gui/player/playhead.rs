//! gui/player/playhead.rs
//! Live position model for one widget.
//!
//! The engine reports positions a few times per second; the animation
//! loop runs at frame cadence. Between reports the playhead extrapolates
//! by wall clock, so every frame reads a live, moving position.

use std::time::Instant;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Playhead {
    base_ms: u64,
    /// Set while playback is advancing; the anchor of the extrapolation.
    anchored_at: Option<Instant>,
}

impl Default for Playhead {
    fn default() -> Self {
        Self {
            base_ms: 0,
            anchored_at: None,
        }
    }
}

impl Playhead {
    /// Re-anchor on an engine report. `running` keeps the clock moving.
    pub fn set(&mut self, position_ms: u64, running: bool) {
        self.base_ms = position_ms;
        self.anchored_at = running.then(Instant::now);
    }

    /// Current position in ms, extrapolated while running.
    pub fn current_ms(&self) -> u64 {
        match self.anchored_at {
            Some(anchor) => self.base_ms + anchor.elapsed().as_millis() as u64,
            None => self.base_ms,
        }
    }
}
