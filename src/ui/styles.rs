//! Style definitions for the NovaSphere panels.

use ratatui::style::{Color, Modifier, Style};

/// Neon cyan accent used for titles and author names.
const ACCENT: Color = Color::Cyan;

/// Ghost-mode purple.
const GHOST: Color = Color::Magenta;

pub fn title_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn panel_border_style() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn focused_border_style() -> Style {
    Style::default().fg(ACCENT)
}

// =============================================================================
// Messages
// =============================================================================

pub fn author_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn message_time_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn message_text_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn ghost_text_style() -> Style {
    Style::default().fg(GHOST)
}

pub fn ghost_countdown_style() -> Style {
    Style::default().fg(GHOST).add_modifier(Modifier::DIM)
}

pub fn reaction_style() -> Style {
    Style::default().bg(Color::DarkGray)
}

pub fn selected_message_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

pub fn typing_dot_style() -> Style {
    Style::default().fg(ACCENT)
}

/// Ash particles dim as they fade out.
pub fn ash_style(fade_progress: f32) -> Style {
    if fade_progress < 0.5 {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

// =============================================================================
// Composer, widgets, admin
// =============================================================================

pub fn ghost_badge_style(enabled: bool) -> Style {
    if enabled {
        Style::default()
            .fg(Color::White)
            .bg(GHOST)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn input_prompt_style() -> Style {
    Style::default().fg(ACCENT)
}

pub fn input_placeholder_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn widget_active_style() -> Style {
    Style::default().fg(Color::Black).bg(ACCENT)
}

pub fn widget_inactive_style() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn widget_highlight_style() -> Style {
    Style::default().fg(Color::Green)
}

pub fn notice_style() -> Style {
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
}
