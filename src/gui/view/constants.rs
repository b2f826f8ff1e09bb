//! View constants (layout/sizing).

/// Width of the progress area; also the laid-out width of the secondary
/// bar indicator on big players.
pub(crate) const BAR_W: f32 = 420.0;

pub(crate) const ICON_BIG: f32 = 28.0;
pub(crate) const ICON_SMALL: f32 = 16.0;

pub(crate) const LABEL_TEXT: f32 = 14.0;
pub(crate) const TIME_TEXT: f32 = 12.0;

pub(crate) const ROW_SPACING: f32 = 10.0;
pub(crate) const PAGE_SPACING: f32 = 12.0;
