//! Persistent key instruction bar at the bottom of the screen.
//!
//! Shows the bindings that apply in the current input mode, using the keys
//! from the config rather than hard-coded letters.

use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, Control, InputMode, LoadState};
use crate::config;
use crate::theme;

/// Render the key-hint bar into the given area.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let spans = match app.input_mode {
        InputMode::Normal => normal_hints(app),
        InputMode::Modal => modal_hints(),
        InputMode::Help => help_hints(),
    };

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Human-readable name for a configured key.
pub fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Enter => "⏎".into(),
        KeyCode::Esc => "Esc".into(),
        KeyCode::Tab => "Tab".into(),
        KeyCode::BackTab => "S-Tab".into(),
        KeyCode::Backspace => "⌫".into(),
        KeyCode::Up => "↑".into(),
        KeyCode::Down => "↓".into(),
        KeyCode::Left => "←".into(),
        KeyCode::Right => "→".into(),
        KeyCode::Home => "Home".into(),
        KeyCode::End => "End".into(),
        KeyCode::PageUp => "PgUp".into(),
        KeyCode::PageDown => "PgDn".into(),
        KeyCode::Delete => "Del".into(),
        KeyCode::Insert => "Ins".into(),
        KeyCode::Char(' ') => "Space".into(),
        KeyCode::Char(c) => c.to_string(),
        _ => "—".into(),
    }
}

/// Key style: accented, bold.
fn key(s: String) -> Span<'static> {
    Span::styled(
        s,
        Style::default()
            .fg(theme::accent())
            .add_modifier(Modifier::BOLD),
    )
}

/// Description style: dimmed.
fn desc(s: &'static str) -> Span<'static> {
    Span::styled(s, Style::default().fg(theme::text_dim()))
}

/// Separator between groups.
fn sep() -> Span<'static> {
    Span::styled("  │  ", Style::default().fg(theme::accent_secondary()))
}

fn normal_hints(app: &App) -> Vec<Span<'static>> {
    let kb = &config::get().keys;
    let mut hints: Vec<Span<'static>> = Vec::with_capacity(32);

    hints.push(Span::raw(" "));

    if app.load_state == LoadState::Loaded {
        hints.push(key(format!("{}/{}", key_label(kb.nav_down), key_label(kb.nav_up))));
        hints.push(desc(" Navigate "));

        hints.push(key(key_label(kb.open)));
        hints.push(desc(match app.focus {
            Control::List => " Details ",
            _ => " Change ",
        }));

        hints.push(sep());
    }

    hints.push(key("Tab".into()));
    hints.push(desc(" Focus "));

    hints.push(key(format!("{}/{}", key_label(kb.prev_option), key_label(kb.next_option))));
    hints.push(desc(" Value "));

    hints.push(sep());

    hints.push(key(key_label(kb.cycle_country)));
    hints.push(desc(" Country "));
    hints.push(key(key_label(kb.cycle_industry)));
    hints.push(desc(" Industry "));
    hints.push(key(key_label(kb.toggle_sort_field)));
    hints.push(desc(" Sort "));
    hints.push(key(key_label(kb.toggle_sort_order)));
    hints.push(desc(" Order "));
    hints.push(key(key_label(kb.clear_filters)));
    hints.push(desc(" Clear "));

    hints.push(sep());

    hints.push(key(key_label(kb.help)));
    hints.push(desc(" Help "));
    hints.push(key(key_label(kb.quit)));
    hints.push(desc(" Quit "));

    hints
}

fn modal_hints() -> Vec<Span<'static>> {
    vec![
        Span::raw(" "),
        key("Esc".into()),
        desc(" Close "),
        sep(),
        key(key_label(config::get().keys.open)),
        desc(" Close "),
        sep(),
        desc("Click outside to close"),
    ]
}

fn help_hints() -> Vec<Span<'static>> {
    vec![
        Span::raw(" "),
        key("Esc".into()),
        desc(" Dismiss "),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_labels() {
        assert_eq!(key_label(KeyCode::Enter), "⏎");
        assert_eq!(key_label(KeyCode::Char('G')), "G");
        assert_eq!(key_label(KeyCode::Char(' ')), "Space");
        assert_eq!(key_label(KeyCode::Null), "—");
    }
}
