//! gui/player/mod.rs
//! Per-widget synchronization leaves: progress math, time label, status
//! icon, and the live playhead model. Pure logic; no iced widgets here.

pub(crate) mod icon;
pub(crate) mod playhead;
pub(crate) mod progress;
pub(crate) mod time_label;
