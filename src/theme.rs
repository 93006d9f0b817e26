//! Styles built from the configured palette, plus the spinner frames.
//!
//! No style sets a background, so the terminal's own background shows
//! through everywhere except the dimmed modal backdrop.

use ratatui::style::{Color, Modifier, Style};

use crate::config::{self, Palette};

fn palette() -> &'static Palette {
    &config::get().theme.palette
}

// ─── Raw colours ────────────────────────────────────────────────────────────

/// Primary accent: headers, active borders, keys in the hint bar.
pub fn accent() -> Color {
    palette().accent_primary
}

/// Secondary accent: focused control, modal border.
pub fn accent_secondary() -> Color {
    palette().accent_secondary
}

pub fn text_dim() -> Color {
    palette().text_dim
}

// ─── Composite styles ───────────────────────────────────────────────────────

/// Title / header style.
pub fn title() -> Style {
    Style::default().fg(accent()).add_modifier(Modifier::BOLD)
}

/// Normal list item.
pub fn list_item() -> Style {
    Style::default().fg(palette().text_primary)
}

/// Dimmed / secondary label.
pub fn dim() -> Style {
    Style::default().fg(text_dim())
}

/// Currently selected row.
pub fn selected() -> Style {
    Style::default()
        .fg(accent_secondary())
        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
}

/// The control that currently has keyboard focus.
pub fn focused() -> Style {
    Style::default()
        .fg(accent_secondary())
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// A control holding a non-default value (an active filter).
pub fn active_value() -> Style {
    Style::default().fg(palette().success)
}

/// Head-count column.
pub fn number() -> Style {
    Style::default().fg(palette().success)
}

pub fn error() -> Style {
    Style::default()
        .fg(palette().accent_error)
        .add_modifier(Modifier::BOLD)
}

pub fn border_active() -> Style {
    Style::default().fg(accent())
}

pub fn border_inactive() -> Style {
    Style::default().fg(palette().border_inactive)
}

/// Applied over the whole screen behind an open modal.
pub fn backdrop() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

// ─── Spinner frames ─────────────────────────────────────────────────────────

/// Braille-dot spinner frames for the loading indicator.
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Get the current spinner frame for a given tick count.
pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()]
}
