//! Small pure helper functions used by the GUI.
//! - no UI widgets or state mutation

use std::path::Path;

/// Format a position/duration in ms as `m:ss`.
pub(crate) fn fmt_duration(ms: u64) -> String {
    let s = ms / 1000;
    let m = s / 60;
    let s = s % 60;
    format!("{m}:{s:02}")
}

/// Gets filename without extension, used as the widget label.
/// Ex: 'clip.mp3' -> 'clip'
pub(crate) fn filename_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Unknown sound")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn fmt_duration_renders_minutes_and_padded_seconds() {
        assert_eq!(fmt_duration(0), "0:00");
        assert_eq!(fmt_duration(45_000), "0:45");
        assert_eq!(fmt_duration(135_000), "2:15");
        assert_eq!(fmt_duration(180_000), "3:00");
        assert_eq!(fmt_duration(3_601_000), "60:01");
    }

    #[test]
    fn filename_stem_drops_the_extension() {
        assert_eq!(filename_stem(&PathBuf::from("sounds/clip.mp3")), "clip");
    }
}
