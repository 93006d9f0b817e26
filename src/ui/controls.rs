//! Control bar at the top of the screen: the two filters and the two sort
//! selectors, each showing its current value.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, Control};
use crate::theme;

fn block() -> Block<'static> {
    Block::default()
        .title(Span::styled(" companyscope ", theme::title()))
        .borders(Borders::ALL)
        .border_style(theme::border_active())
}

/// One cell per select control, left to right, on the bar's inner line.
pub fn control_areas(area: Rect) -> [Rect; 4] {
    let inner = block().inner(area);
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(inner);
    [cells[0], cells[1], cells[2], cells[3]]
}

/// Which control sits under `pos`, if any.
pub fn control_at(area: Rect, pos: Position) -> Option<Control> {
    control_areas(area)
        .iter()
        .zip(Control::SELECTS)
        .find(|(cell, _)| cell.contains(pos))
        .map(|(_, control)| control)
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    frame.render_widget(block(), area);

    for (cell, control) in control_areas(area).into_iter().zip(Control::SELECTS) {
        let (value, filtering) = match control {
            Control::Country => (app.country.display().to_string(), app.country.value().is_some()),
            Control::Industry => (app.industry.display().to_string(), app.industry.value().is_some()),
            Control::SortField => (app.sort_field.to_string(), false),
            Control::SortOrder => (app.sort_order.to_string(), false),
            Control::List => continue,
        };

        let label_style = if app.focus == control {
            theme::focused()
        } else {
            theme::dim()
        };
        let value_style = if filtering {
            theme::active_value()
        } else {
            theme::list_item()
        };

        let line = Line::from(vec![
            Span::styled(format!(" {}: ", control.label()), label_style),
            Span::styled(value, value_style),
            Span::styled(" ▾", theme::dim()),
        ]);
        frame.render_widget(Paragraph::new(line), cell);
    }
}
