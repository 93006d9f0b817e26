//! Top-level UI render dispatch.
//!
//! Splits the terminal frame into three regions:
//! - Control bar (top, 3 lines): country, industry, sort field, sort order
//! - Company table (fills the middle)
//! - Key hints bar (bottom, 1 line)
//!
//! The detail modal and the help overlay are drawn last, on top of everything.
//! Layout helpers are public so `App` can hit-test mouse clicks against the
//! same geometry that was drawn.

pub mod company_list;
pub mod controls;
pub mod help;
pub mod key_bar;
pub mod modal;
pub mod spinner;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use crate::app::{App, InputMode};
use crate::theme;

/// Screen regions for a given frame area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub controls: Rect,
    pub list: Rect,
    pub key_bar: Rect,
}

pub fn regions(area: Rect) -> Regions {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // control bar
            Constraint::Min(0),    // company table
            Constraint::Length(1), // key hints bar
        ])
        .split(area);

    Regions {
        controls: outer[0],
        list: outer[1],
        key_bar: outer[2],
    }
}

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    let regions = regions(frame.area());

    controls::render(frame, app, regions.controls);
    company_list::render(frame, app, regions.list);
    key_bar::render(frame, app, regions.key_bar);

    // ── Overlays (rendered last so they sit on top) ─────────────────────
    match app.input_mode {
        InputMode::Modal => {
            if let Some(company) = &app.modal {
                let area = frame.area();
                frame.buffer_mut().set_style(area, theme::backdrop());
                modal::render(frame, company);
            }
        }
        InputMode::Help => help::render(frame),
        InputMode::Normal => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    use crate::app::tests::{company, loaded_app};
    use crate::app::{LOAD_ERROR_MESSAGE, NO_RESULTS_MESSAGE};
    use crate::fetch::types::FetchEvent;

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    /// Draw `app` into a 100x30 test terminal and return the screen text.
    fn draw(app: &mut App) -> String {
        draw_sized(app, 100, 30)
    }

    fn draw_sized(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let area = terminal.draw(|frame| render(frame, app)).unwrap().area;
        app.set_viewport(area);
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn regions_stack_vertically() {
        let r = regions(Rect::new(0, 0, 100, 30));
        assert_eq!(r.controls, Rect::new(0, 0, 100, 3));
        assert_eq!(r.list, Rect::new(0, 3, 100, 26));
        assert_eq!(r.key_bar, Rect::new(0, 29, 100, 1));
    }

    #[test]
    fn loading_shows_the_indicator() {
        let mut app = App::new();
        let screen = draw(&mut app);
        assert!(screen.contains("Loading companies"));
        assert!(!screen.contains(LOAD_ERROR_MESSAGE));
    }

    #[test]
    fn failed_fetch_shows_the_error_message_and_no_rows() {
        let mut app = App::new();
        app.handle_fetch_event(FetchEvent::Failed("HTTP error! status: 500 - Internal Server Error".into()));
        let screen = draw(&mut app);
        assert!(screen.contains(LOAD_ERROR_MESSAGE));
        assert!(!screen.contains("Loading companies"));
        assert!(!screen.contains("500"));
    }

    #[test]
    fn rows_show_every_column_with_grouped_head_count() {
        let mut app = loaded_app();
        let screen = draw(&mut app);
        assert!(screen.contains("Companies list showing 3 results"));
        assert!(screen.contains("Northern Bytes"));
        assert!(screen.contains("Technology"));
        assert!(screen.contains("12,345"));
        assert!(screen.contains("All countries"));
    }

    #[test]
    fn filtered_view_renders_only_matches() {
        let mut app = loaded_app();
        app.country.select("Canada");
        app.update_display();
        let screen = draw(&mut app);
        assert!(screen.contains("Companies list showing 2 results"));
        assert!(screen.contains("Maple Works"));
        assert!(!screen.contains("Outback Data"));
    }

    #[test]
    fn empty_view_renders_the_placeholder() {
        let mut app = loaded_app();
        app.country.select("Australia");
        app.industry.select("Manufacturing");
        app.update_display();
        let screen = draw(&mut app);
        assert!(screen.contains(NO_RESULTS_MESSAGE));
        assert!(screen.contains("Companies list showing 0 results"));
    }

    #[test]
    fn modal_shows_title_and_fields() {
        let mut app = loaded_app();
        app.selected_index = 1;
        app.open_selected();
        let screen = draw(&mut app);
        assert!(screen.contains("Northern Bytes"));
        assert!(screen.contains("Country:"));
        assert!(screen.contains("Canada"));
        assert!(screen.contains("Employees:"));
        assert!(screen.contains("12,345"));
        assert!(screen.contains(modal::CLOSE_LABEL));
    }

    #[test]
    fn modal_disappears_after_closing() {
        let mut app = loaded_app();
        app.open_selected();
        assert!(draw(&mut app).contains(modal::CLOSE_LABEL));
        app.close_modal();
        assert!(!draw(&mut app).contains(modal::CLOSE_LABEL));
    }

    #[test]
    fn help_lists_the_bindings() {
        let mut app = loaded_app();
        app.input_mode = InputMode::Help;
        let screen = draw(&mut app);
        assert!(screen.contains("Keybindings"));
        assert!(screen.contains("Cycle country filter"));
    }

    #[test]
    fn clicked_row_matches_the_drawn_row_after_a_resize() {
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

        let mut app = App::new();
        let many = (0..40)
            .map(|i| company(&format!("Company {i:02}"), "Canada", "Technology", i))
            .collect();
        app.handle_fetch_event(FetchEvent::Loaded(many));
        draw(&mut app);
        app.handle_key(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::NONE));
        draw(&mut app);

        let screen = draw_sized(&mut app, 100, 14);
        let rows = company_list::rows_area(regions(app.viewport).list);
        let first_drawn = screen.lines().nth(rows.y as usize).unwrap_or_default();
        assert!(first_drawn.contains("Company 33"), "{first_drawn}");

        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: rows.x + 4,
            row: rows.y,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.modal.as_ref().map(|c| c.name.as_str()), Some("Company 33"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut app = App::new();
        app.handle_fetch_event(FetchEvent::Loaded(vec![company("A", "B", "C", 1)]));
        app.open_selected();
        assert!(app.modal.is_some());
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();
    }
}
