//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::state::{Message, Soundbite};

mod playback;

pub(crate) fn update(state: &mut Soundbite, message: Message) -> Task<Message> {
    match message {
        // Ticks
        Message::TickPlayback => playback::drain_events(state),
        Message::AnimationTick => playback::animation_tick(state),

        // Widget controls
        Message::TogglePlayPause(i) => playback::toggle_play_pause(state, i),
        Message::ResetProgress(i) => playback::reset_progress(state, i),

        // Page settings
        Message::ToggleRemainingTime(v) => playback::toggle_remaining_time(state, v),
    }
}
