//! Color palette.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const POPUP_BG: Color = Color::Rgb(28, 30, 36); // Modal/popup backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Rgb(249, 115, 22); // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(249, 115, 22); // Mautic orange
pub const CONTRAST_FG: Color = Color::Black; // Text drawn on the accent

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Success, copied notice
pub const STATUS_RED: Color = Color::Red; // Webhook/clipboard errors
pub const STATUS_YELLOW: Color = Color::Yellow; // Validation, in-flight request

// --- Effects ---
pub const SHADOW: Color = Color::Black;
