//! gui/mod.rs
//!
//! This folder contains ONLY frontend concerns:
//! - app state ('Soundbite'), widget state ('PlayerWidget')
//! - messages ('Message')
//! - update logic ('update()')
//! - view layout ('view()')
//! - subscriptions (animation loop + event polling)
//! - per-widget sync leaves ('player')
//! - small UI helpers ('util')

pub(crate) mod player;
pub(crate) mod state;
pub(crate) mod subscription;
pub(crate) mod update;
pub(crate) mod util;
pub(crate) mod view;

// Re-export the entry points main.rs needs.
pub(crate) use state::{Options, Soundbite};
pub(crate) use subscription::subscription;
pub(crate) use update::update;
pub(crate) use view::view;
