//! Company detail modal.
//!
//! A fixed-size box centred on the screen. Its geometry is exposed so mouse
//! clicks can be routed to the close control or the backdrop.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::config;
use crate::fetch::types::Company;
use crate::listing::format_thousands;
use crate::theme;

/// Text of the close control.
pub const CLOSE_LABEL: &str = "[ Close ]";

const WIDTH: u16 = 60;
/// Borders plus: blank, country, industry, employees, blank, close control.
const HEIGHT: u16 = 8;
const CLOSE_LINE: u16 = 5;
const INDENT: u16 = 2;

/// Where the modal sits for a given frame area.
pub fn modal_area(area: Rect) -> Rect {
    let width = WIDTH.min(area.width);
    let height = HEIGHT.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// The clickable close control inside `modal`.
pub fn close_button_area(modal: Rect) -> Rect {
    let inner = Block::default().borders(Borders::ALL).inner(modal);
    let x = inner.x.saturating_add(INDENT).min(inner.right());
    let y = inner.y.saturating_add(CLOSE_LINE);
    if y >= inner.bottom() {
        return Rect::new(x, inner.y, 0, 0);
    }
    Rect {
        x,
        y,
        width: (CLOSE_LABEL.chars().count() as u16).min(inner.right() - x),
        height: 1,
    }
}

fn field<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {label:<11}"), theme::dim()),
        Span::styled(value, theme::list_item()),
    ])
}

/// Render the modal for `company` over whatever is already drawn.
pub fn render(frame: &mut Frame, company: &Company) {
    let area = modal_area(frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(format!(" {} ", company.name), theme::title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::accent_secondary()));

    let separator = &config::get().display.thousands_separator;
    let lines = vec![
        Line::from(""),
        field("Country:", company.country.clone()),
        field("Industry:", company.industry.clone()),
        field(
            "Employees:",
            format_thousands(company.number_of_employees, separator),
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw(" ".repeat(INDENT as usize)),
            Span::styled(
                CLOSE_LABEL,
                theme::title().add_modifier(Modifier::REVERSED),
            ),
            Span::styled("  Esc / click outside to close", theme::dim()),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    use ratatui::layout::Position;

    #[test]
    fn centred_in_the_frame() {
        let m = modal_area(Rect::new(0, 0, 100, 30));
        assert_eq!(m, Rect::new(20, 11, 60, 8));
    }

    #[test]
    fn shrinks_to_small_frames() {
        let m = modal_area(Rect::new(0, 0, 30, 5));
        assert_eq!(m, Rect::new(0, 0, 30, 5));
    }

    #[test]
    fn close_control_sits_on_the_last_inner_line() {
        let m = modal_area(Rect::new(0, 0, 100, 30));
        let close = close_button_area(m);
        assert_eq!(close, Rect::new(23, 17, 9, 1));
        assert!(m.contains(Position::new(close.x, close.y)));
    }

    #[test]
    fn close_control_vanishes_when_clipped() {
        let m = modal_area(Rect::new(0, 0, 30, 5));
        assert_eq!(close_button_area(m).area(), 0);
    }
}
