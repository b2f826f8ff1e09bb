//! Core data types shared between core logic and the UI.
//!
//! Rule of thumb:
//! - These structs should be boring bags of data
//! - No GUI code
//! - No audio code

use std::path::PathBuf;

/// Widget size. Big players get the stroke icon variant and the
/// secondary bar-style progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerSize {
    Big,
    Small,
}

/// The action a status icon represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Play,
    Pause,
}

/// The two encoded-source candidates for one preview.
///
/// Preference order is fixed: mp3 first, then ogg. The engine attaches
/// both and plays the first one that probes and decodes.
#[derive(Debug, Clone)]
pub struct SourceSet {
    pub mp3: Option<PathBuf>,
    pub ogg: Option<PathBuf>,
}

impl SourceSet {
    /// Build a source set from one path, deriving the sibling alternate
    /// format by swapping the extension.
    ///
    /// Ex: `clip.ogg` -> mp3 candidate `clip.mp3`, ogg candidate `clip.ogg`.
    /// A path with any other extension becomes the mp3 candidate alone.
    pub fn for_path(path: PathBuf) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("ogg") => Self {
                mp3: Some(path.with_extension("mp3")),
                ogg: Some(path),
            },
            Some("mp3") => Self {
                ogg: Some(path.with_extension("ogg")),
                mp3: Some(path),
            },
            _ => Self {
                mp3: Some(path),
                ogg: None,
            },
        }
    }

    /// Candidates in preference order: lossy-compressed format first,
    /// then the open alternative.
    pub fn candidates(&self) -> impl Iterator<Item = &PathBuf> {
        self.mp3.iter().chain(self.ogg.iter())
    }
}
