//! Help overlay: keybinding reference.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::config;
use crate::theme;

use super::key_bar::key_label;

/// Render the help overlay.
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 80, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(" Keybindings ", theme::title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::accent_secondary()));

    let kb = &config::get().keys;
    let keybindings = vec![
        (
            "Navigation",
            vec![
                (format!("{} / ↓", key_label(kb.nav_down)), "Move cursor down"),
                (format!("{} / ↑", key_label(kb.nav_up)), "Move cursor up"),
                (key_label(kb.jump_top), "Jump to top"),
                (key_label(kb.jump_bottom), "Jump to bottom"),
                (key_label(kb.open), "Show company details"),
            ],
        ),
        (
            "Filters & Sorting",
            vec![
                ("Tab / S-Tab".to_string(), "Move focus between controls"),
                (
                    format!("{} / {}", key_label(kb.prev_option), key_label(kb.next_option)),
                    "Change focused control",
                ),
                (key_label(kb.cycle_country), "Cycle country filter"),
                (key_label(kb.cycle_industry), "Cycle industry filter"),
                (key_label(kb.toggle_sort_field), "Toggle sort field"),
                (key_label(kb.toggle_sort_order), "Toggle sort order"),
                (key_label(kb.clear_filters), "Clear both filters"),
            ],
        ),
        (
            "Other",
            vec![
                (key_label(kb.help), "Toggle this help"),
                (key_label(kb.quit), "Quit"),
                ("Esc".to_string(), "Close details / dismiss"),
            ],
        ),
    ];

    let mut lines = vec![Line::from("")];

    for (section, bindings) in keybindings {
        lines.push(Line::from(Span::styled(
            format!("  ── {section} ──"),
            Style::default()
                .fg(theme::accent())
                .add_modifier(Modifier::BOLD),
        )));

        for (key, desc) in bindings {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("    {key:<14}"),
                    Style::default()
                        .fg(theme::accent_secondary())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(desc, theme::list_item()),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "  Press ESC to close",
        theme::dim(),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Compute a centered rectangle (safe, no raw indexing).
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = (area.width as u32 * percent_x.min(100) as u32 / 100) as u16;
    let height = (area.height as u32 * percent_y.min(100) as u32 / 100) as u16;
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect { x, y, width, height }
}
