//! gui/subscription.rs
//! Drives the animation loop and event polling.
//!
//! While any widget is playing we tick at frame cadence so progress moves
//! every rendered frame; otherwise a slow poll keeps draining engine
//! events. The loop "terminates" by this gate flipping back to the slow
//! poll; a pending tick is never cancelled, which bounds staleness to
//! one frame.

use iced::{Subscription, time};
use std::time::Duration;

use super::state::{Message, PlaybackPhase, Soundbite};

const FRAME_TICK: Duration = Duration::from_millis(16);
const IDLE_POLL: Duration = Duration::from_millis(200);

pub(crate) fn subscription(state: &Soundbite) -> Subscription<Message> {
    if state.players.is_empty() {
        return Subscription::none();
    }

    let any_playing = state
        .players
        .iter()
        .any(|p| p.phase == PlaybackPhase::Playing);

    if any_playing {
        time::every(FRAME_TICK).map(|_| Message::AnimationTick)
    } else {
        time::every(IDLE_POLL).map(|_| Message::TickPlayback)
    }
}
