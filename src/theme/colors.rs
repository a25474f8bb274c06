//! Color constants for the run card.
//!
//! Light parchment card on a dark stage, throne-green labels.

#![allow(dead_code)]

// === STAGE (window background) ===
pub const STAGE_DARK: &str = "#1c1c1c";

// === CARD SURFACE ===
pub const CARD_SURFACE: &str = "#f0f1ea";
pub const CARD_BORDER: &str = "#d7d8cf";

// === LABELS ===
pub const LABEL_GREEN: &str = "rgba(0, 222, 0, 0.31)";
pub const LABEL_TEXT: &str = "#ffffff";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#202020";
pub const TEXT_SECONDARY: &str = "#5a5a5a";

// === SLOTS ===
pub const SLOT_PLACEHOLDER: &str = "#e2e3da";
pub const SLOT_PLACEHOLDER_TEXT: &str = "#9a9b92";
