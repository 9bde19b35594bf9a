//! Status chip colors

use crate::entry::Status;

/// Background and text color of a status chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipStyle {
    pub background: &'static str,
    pub text: &'static str,
}

const GREEN: &str = "#4CAF50";
const YELLOW: &str = "#FFEB3B";
const RED: &str = "#F44336";
const WHITE: &str = "white";
const DARK_GREY: &str = "#212121";

/// Chip colors for a status label
pub fn chip_style(status: Status) -> ChipStyle {
    let (background, text) = match status {
        Status::Complete | Status::Completed | Status::CompleteLower => (GREEN, WHITE),
        Status::Dispatched => (GREEN, "#fff"),
        Status::InProgress | Status::New => (YELLOW, DARK_GREY),
        Status::Saved => ("#FFA726", WHITE),
        Status::Pending | Status::PendingLower => (RED, WHITE),
        Status::Shipped => ("#3F51B5", WHITE),
        Status::Delivered => ("#8BC34A", WHITE),
        Status::NewRequest => ("#FF7043", WHITE),
        Status::Accepted => ("#E91E63", WHITE),
        Status::PartiallyAccepted => ("#9C27B0", WHITE),
        Status::Rejected => ("#607D8B", WHITE),
    };
    ChipStyle { background, text }
}

/// Chip colors for a raw status string
pub fn chip_style_for(status: &str) -> crate::Result<ChipStyle> {
    status.parse().map(chip_style)
}
