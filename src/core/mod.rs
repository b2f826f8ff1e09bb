//! core/mod.rs
//!
//! Everything below the GUI:
//! - plain data types for the widgets (`types`)
//! - the per-widget playback engine and its factory (`playback`)
//!
//! The GUI never touches rodio/symphonia directly; it only sends
//! `PlayerCommand`s and drains `PlayerEvent`s.

pub mod playback;
pub mod types;
