//! Soundbite
//!
//! Inline audio-preview players, desktop rendition. Each file passed on
//! the command line becomes one widget: a play/pause button with a
//! size-dependent status icon, a progress indicator animated every frame
//! while playing, and an elapsed/remaining time label.
//!
//! Flow: the Element Factory spawns one playback engine per widget; the
//! engine emits play/pause/timeupdate events over a channel; the update
//! loop drains them and keeps each widget's cached visual state in sync;
//! view() renders from that state.
//!
//! Usage:
//!   soundbite [--big] [--remaining] [--reset-delay-ms N] <files...>

mod core;
mod gui;

use std::path::PathBuf;

use gui::{Options, Soundbite};

fn main() -> iced::Result {
    let options = parse_args();

    iced::application(
        move || Soundbite::new(options.clone()),
        gui::update,
        gui::view,
    )
    .subscription(gui::subscription)
    .title("Soundbite")
    .run()
}

fn parse_args() -> Options {
    let mut options = Options::default();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--big" => options.big = true,
            "--remaining" => options.show_remaining_time = true,
            "--reset-delay-ms" => {
                options.reset_delay_ms = args.next().and_then(|v| v.parse().ok());
            }
            _ => options.paths.push(PathBuf::from(arg)),
        }
    }

    options
}
