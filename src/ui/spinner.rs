//! Animated loading indicator.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::theme;

/// Render a spinner followed by `label` on the first line of `area`.
pub fn render(frame: &mut Frame, tick: u64, area: Rect, label: &str) {
    let spinner_char = theme::spinner_frame(tick);
    let line = Line::from(vec![
        Span::styled(
            format!(" {spinner_char} "),
            Style::default()
                .fg(theme::accent())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(label, Style::default().fg(theme::accent_secondary())),
    ]);

    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
