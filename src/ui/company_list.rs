//! Company table, or whatever stands in for it: the loading indicator, the
//! load error, or the no-results placeholder.

use ratatui::layout::{Constraint, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::app::{App, LoadState, LOAD_ERROR_MESSAGE, NO_RESULTS_MESSAGE};
use crate::config;
use crate::listing::format_thousands;
use crate::theme;

use super::spinner;

const HIGHLIGHT_SYMBOL: &str = "▸ ";

/// Area holding the data rows: inside the border, below the header line.
pub fn rows_area(list: Rect) -> Rect {
    let inner = Block::default().borders(Borders::ALL).inner(list);
    Rect {
        x: inner.x,
        y: inner.y.saturating_add(1),
        width: inner.width,
        height: inner.height.saturating_sub(1),
    }
}

/// Screen row (relative to the first drawn data row) under `pos`.
pub fn row_at(list: Rect, pos: Position) -> Option<usize> {
    let rows = rows_area(list);
    rows.contains(pos).then(|| (pos.y - rows.y) as usize)
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    // The count label only means something once the data is in.
    let title = match app.load_state {
        LoadState::Loaded => format!(" {} ", app.list_label),
        _ => " Companies ".to_string(),
    };
    let block = Block::default()
        .title(Span::styled(title, theme::title()))
        .borders(Borders::ALL)
        .border_style(if app.scroll_locked() {
            theme::border_inactive()
        } else {
            theme::border_active()
        });

    match &app.load_state {
        LoadState::Loading => {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            spinner::render(frame, app.tick_count, inner, "Loading companies…");
            return;
        }
        LoadState::Error => {
            let message = Paragraph::new(Line::from(Span::styled(
                format!("  {LOAD_ERROR_MESSAGE}"),
                theme::error(),
            )))
            .block(block);
            frame.render_widget(message, area);
            return;
        }
        LoadState::Loaded => {}
    }

    if app.visible.is_empty() {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            format!("  {NO_RESULTS_MESSAGE}"),
            theme::dim(),
        )))
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let separator = &config::get().display.thousands_separator;
    let rows: Vec<Row> = app
        .visible
        .iter()
        .map(|company| {
            Row::new(vec![
                Cell::from(company.name.as_str()).style(theme::list_item()),
                Cell::from(company.country.as_str()).style(theme::dim()),
                Cell::from(company.industry.as_str()).style(theme::dim()),
                Cell::from(
                    Line::from(format_thousands(company.number_of_employees, separator))
                        .right_aligned(),
                )
                .style(theme::number()),
            ])
        })
        .collect();

    let header = Row::new(vec![
        Cell::from("Name"),
        Cell::from("Country"),
        Cell::from("Industry"),
        Cell::from(Line::from("Employees").right_aligned()),
    ])
    .style(theme::title());

    let name_pct = config::get().display.name_column_percent;
    let rest = 100u16.saturating_sub(name_pct);
    let widths = [
        Constraint::Percentage(name_pct),
        Constraint::Percentage(rest * 3 / 10),
        Constraint::Percentage(rest * 4 / 10),
        Constraint::Percentage(rest * 3 / 10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(theme::selected())
        .highlight_symbol(HIGHLIGHT_SYMBOL);

    let mut state = TableState::default()
        .with_offset(app.list_offset)
        .with_selected(Some(app.selected_index));

    frame.render_stateful_widget(table, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_start_below_border_and_header() {
        let list = Rect::new(0, 3, 100, 26);
        assert_eq!(rows_area(list), Rect::new(1, 5, 98, 23));
    }

    #[test]
    fn hit_testing_rows() {
        let list = Rect::new(0, 3, 100, 26);
        assert_eq!(row_at(list, Position::new(10, 5)), Some(0));
        assert_eq!(row_at(list, Position::new(10, 7)), Some(2));
        // Header line and border are not rows.
        assert_eq!(row_at(list, Position::new(10, 4)), None);
        assert_eq!(row_at(list, Position::new(0, 6)), None);
    }

    #[test]
    fn degenerate_list_has_no_rows() {
        assert_eq!(rows_area(Rect::new(0, 0, 10, 2)).height, 0);
        assert_eq!(row_at(Rect::new(0, 0, 10, 2), Position::new(1, 1)), None);
    }
}
