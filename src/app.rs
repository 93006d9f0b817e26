//! Application state and input handling.
//!
//! `App` is the single source of truth for the whole TUI: the fetched
//! companies, the current filter/sort selection, the derived view and the
//! modal. It is created once in `main`, owned by the event loop, and only
//! mutated from there.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use tracing::{debug, info, warn};

use crate::config;
use crate::fetch::types::{Company, FetchEvent};
use crate::listing::{distinct_sorted, filter_companies, sort_companies, SortField, SortOrder};
use crate::ui;

/// Shown in place of the loading indicator once the fetch has failed.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading data. Please try again later.";

/// Shown in place of the rows when the filters match nothing.
pub const NO_RESULTS_MESSAGE: &str = "No companies found for specific criteria";

// ─── Loading / input modes ──────────────────────────────────────────────────

/// Progress of the one startup fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    /// Terminal for the session.
    Error,
}

/// Which layer receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Controls and list navigation.
    Normal,
    /// The company detail modal is open; the list underneath is frozen.
    Modal,
    /// Help overlay.
    Help,
}

// ─── Controls ───────────────────────────────────────────────────────────────

/// Focusable elements, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Country,
    Industry,
    SortField,
    SortOrder,
    List,
}

impl Control {
    pub const ALL: [Control; 5] = [
        Control::Country,
        Control::Industry,
        Control::SortField,
        Control::SortOrder,
        Control::List,
    ];

    /// The four value-bearing controls shown in the control bar.
    pub const SELECTS: [Control; 4] = [
        Control::Country,
        Control::Industry,
        Control::SortField,
        Control::SortOrder,
    ];

    fn position(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            Control::Country => "Country",
            Control::Industry => "Industry",
            Control::SortField => "Sort by",
            Control::SortOrder => "Order",
            Control::List => "Companies",
        }
    }
}

/// A select-style filter: "no filter" plus the values seeded from the data.
#[derive(Debug, Clone)]
pub struct FilterSelect {
    all_label: &'static str,
    options: Vec<String>,
    /// `None` means "no filter".
    selected: Option<usize>,
}

impl FilterSelect {
    pub fn new(all_label: &'static str) -> Self {
        Self {
            all_label,
            options: Vec::new(),
            selected: None,
        }
    }

    /// Replace the option list. The selection resets to "no filter".
    pub fn set_options(&mut self, options: Vec<String>) {
        self.options = options;
        self.selected = None;
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Current filter value, `None` when unfiltered.
    pub fn value(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }

    /// Text shown in the control bar.
    pub fn display(&self) -> &str {
        self.value().unwrap_or(self.all_label)
    }

    /// Step through "no filter" → first option → … → last option → "no filter".
    pub fn cycle(&mut self, forward: bool) {
        let len = self.options.len();
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = match (self.selected, forward) {
            (None, true) => Some(0),
            (None, false) => Some(len - 1),
            (Some(i), true) if i + 1 < len => Some(i + 1),
            (Some(_), true) => None,
            (Some(0), false) => None,
            (Some(i), false) => Some(i - 1),
        };
    }

    /// Select an option by value. Returns `false` (and leaves the selection
    /// alone) when the value is not one of the options.
    pub fn select(&mut self, value: &str) -> bool {
        match self.options.iter().position(|o| o == value) {
            Some(i) => {
                self.selected = Some(i);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

// ─── Actions produced by input handling ─────────────────────────────────────

/// Actions that the main loop should execute after processing input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Quit,
    /// The event was consumed; nothing else to do.
    Consumed,
}

// ─── App state ──────────────────────────────────────────────────────────────

pub struct App {
    /// Fetched listing. Never modified after it arrives.
    pub companies: Vec<Company>,
    pub load_state: LoadState,
    pub country: FilterSelect,
    pub industry: FilterSelect,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    pub focus: Control,
    /// Derived view: `companies` filtered then sorted.
    pub visible: Vec<Company>,
    /// Descriptive count label, used as the list title.
    pub list_label: String,
    /// Index into `visible`.
    pub selected_index: usize,
    /// First row drawn in the table.
    pub list_offset: usize,
    /// Company shown in the detail modal, if it is open.
    pub modal: Option<Company>,
    pub input_mode: InputMode,
    /// Area of the last drawn frame, for mouse hit testing.
    pub viewport: Rect,
    /// Monotonic tick counter for the loading spinner.
    pub tick_count: u64,
    pub running: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        let display = &config::get().display;
        Self {
            companies: Vec::new(),
            load_state: LoadState::Loading,
            country: FilterSelect::new("All countries"),
            industry: FilterSelect::new("All industries"),
            sort_field: display.default_sort_field,
            sort_order: display.default_sort_order,
            focus: Control::List,
            visible: Vec::new(),
            list_label: count_label(0),
            selected_index: 0,
            list_offset: 0,
            modal: None,
            input_mode: InputMode::Normal,
            viewport: Rect::default(),
            tick_count: 0,
            running: true,
        }
    }

    // ── Derived view ────────────────────────────────────────────────────

    /// Recompute the visible list from the current selection: filter, then
    /// sort. Called after every control change.
    pub fn update_display(&mut self) {
        let filtered = filter_companies(&self.companies, self.country.value(), self.industry.value());
        self.visible = sort_companies(&filtered, self.sort_field, self.sort_order);
        self.list_label = count_label(self.visible.len());
        self.selected_index = 0;
        self.list_offset = 0;
        debug!(
            "View: country={:?} industry={:?} sort={:?}/{:?} -> {} rows",
            self.country.value(),
            self.industry.value(),
            self.sort_field,
            self.sort_order,
            self.visible.len()
        );
    }

    /// The currently selected company (if any).
    pub fn selected_company(&self) -> Option<&Company> {
        self.visible.get(self.selected_index)
    }

    /// Background scrolling is frozen while the modal is open.
    pub fn scroll_locked(&self) -> bool {
        self.modal.is_some()
    }

    // ── Fetch events ────────────────────────────────────────────────────

    /// Apply the outcome of the startup fetch.
    pub fn handle_fetch_event(&mut self, event: FetchEvent) {
        if self.load_state != LoadState::Loading {
            warn!("Ignoring fetch event after load settled");
            return;
        }
        match event {
            FetchEvent::Loaded(companies) => {
                info!("Loaded {} companies", companies.len());
                self.companies = companies;
                self.initialize_filters();
                self.load_state = LoadState::Loaded;
                self.update_display();
            }
            FetchEvent::Failed(diagnostic) => {
                warn!("Showing load error: {diagnostic}");
                self.visible.clear();
                self.list_label = count_label(0);
                self.load_state = LoadState::Error;
            }
        }
    }

    /// Seed the filter controls with the distinct values present in the data.
    fn initialize_filters(&mut self) {
        self.country
            .set_options(distinct_sorted(self.companies.iter().map(|c| c.country.as_str())));
        self.industry
            .set_options(distinct_sorted(self.companies.iter().map(|c| c.industry.as_str())));
        debug!(
            "Seeded {} countries and {} industries",
            self.country.options().len(),
            self.industry.options().len()
        );
    }

    // ── Tick handling ───────────────────────────────────────────────────

    pub fn on_tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }

    // ── Controls ────────────────────────────────────────────────────────

    /// Step `control` to its next (or previous) value and re-render.
    pub fn change_control(&mut self, control: Control, forward: bool) {
        match control {
            Control::Country => self.country.cycle(forward),
            Control::Industry => self.industry.cycle(forward),
            Control::SortField => self.sort_field = self.sort_field.toggled(),
            Control::SortOrder => self.sort_order = self.sort_order.toggled(),
            Control::List => return,
        }
        self.update_display();
    }

    pub fn clear_filters(&mut self) {
        self.country.clear();
        self.industry.clear();
        self.update_display();
    }

    // ── Modal ───────────────────────────────────────────────────────────

    /// Open the detail modal for the selected row.
    pub fn open_selected(&mut self) {
        if let Some(company) = self.selected_company().cloned() {
            debug!("Opening details for {company}");
            self.modal = Some(company);
            self.input_mode = InputMode::Modal;
        }
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
        self.input_mode = InputMode::Normal;
    }

    // ── List navigation ─────────────────────────────────────────────────

    fn select_next(&mut self) {
        let len = self.visible.len();
        if len > 0 {
            self.selected_index = (self.selected_index + 1).min(len - 1);
        }
        self.scroll_into_view();
    }

    fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
        self.scroll_into_view();
    }

    fn select_first(&mut self) {
        self.selected_index = 0;
        self.scroll_into_view();
    }

    fn select_last(&mut self) {
        self.selected_index = self.visible.len().saturating_sub(1);
        self.scroll_into_view();
    }

    /// Record the frame area and re-fit the scroll window to it, the same way
    /// the table widget does when it draws. Row clicks map through
    /// `list_offset`, so it has to match what is on screen.
    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
        self.scroll_into_view();
    }

    /// Keep the selected row inside the drawn window of the table.
    fn scroll_into_view(&mut self) {
        let rows = ui::company_list::rows_area(ui::regions(self.viewport).list).height as usize;
        if rows == 0 {
            return;
        }
        if self.selected_index < self.list_offset {
            self.list_offset = self.selected_index;
        } else if self.selected_index >= self.list_offset + rows {
            self.list_offset = self.selected_index + 1 - rows;
        }
    }

    // ── Input handling ──────────────────────────────────────────────────

    /// Process a key event and return an action for the main loop.
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        // Ctrl+C always quits (system convention, non-configurable).
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return AppAction::Quit;
        }

        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Modal => self.handle_modal_key(key),
            InputMode::Help => self.handle_help_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> AppAction {
        let kb = &config::get().keys;

        match key.code {
            c if c == kb.quit => return AppAction::Quit,

            // ── Focus ───────────────────────────────────────────────────
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),

            // ── Navigation ──────────────────────────────────────────────
            c if c == kb.nav_down || c == KeyCode::Down => self.select_next(),
            c if c == kb.nav_up || c == KeyCode::Up => self.select_prev(),
            c if c == kb.jump_top || c == KeyCode::Home => self.select_first(),
            c if c == kb.jump_bottom || c == KeyCode::End => self.select_last(),

            // ── Control values ──────────────────────────────────────────
            c if c == kb.next_option || c == KeyCode::Right => self.change_control(self.focus, true),
            c if c == kb.prev_option || c == KeyCode::Left => self.change_control(self.focus, false),
            c if c == kb.cycle_country => self.change_control(Control::Country, true),
            c if c == kb.cycle_industry => self.change_control(Control::Industry, true),
            c if c == kb.toggle_sort_field => self.change_control(Control::SortField, true),
            c if c == kb.toggle_sort_order => self.change_control(Control::SortOrder, true),
            c if c == kb.clear_filters => self.clear_filters(),

            // ── Activation ──────────────────────────────────────────────
            c if c == kb.open => match self.focus {
                Control::List => self.open_selected(),
                control => self.change_control(control, true),
            },

            c if c == kb.help => self.input_mode = InputMode::Help,

            _ => {}
        }
        AppAction::Consumed
    }

    /// Everything except the close keys is swallowed while the modal is up.
    fn handle_modal_key(&mut self, key: KeyEvent) -> AppAction {
        let kb = &config::get().keys;
        match key.code {
            KeyCode::Esc => self.close_modal(),
            c if c == kb.open || c == kb.quit => self.close_modal(),
            _ => {}
        }
        AppAction::Consumed
    }

    fn handle_help_key(&mut self, key: KeyEvent) -> AppAction {
        let kb = &config::get().keys;
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.input_mode = InputMode::Normal,
            c if c == kb.quit || c == kb.help => self.input_mode = InputMode::Normal,
            _ => {}
        }
        AppAction::Consumed
    }

    /// Process a mouse event against the layout of the last drawn frame.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> AppAction {
        let pos = Position::new(mouse.column, mouse.row);
        let left_click = mouse.kind == MouseEventKind::Down(MouseButton::Left);

        match self.input_mode {
            InputMode::Modal => {
                if left_click {
                    let modal = ui::modal::modal_area(self.viewport);
                    // Close control, or anywhere on the backdrop.
                    if ui::modal::close_button_area(modal).contains(pos) || !modal.contains(pos) {
                        self.close_modal();
                    }
                }
            }
            InputMode::Help => {
                if left_click {
                    self.input_mode = InputMode::Normal;
                }
            }
            InputMode::Normal => match mouse.kind {
                MouseEventKind::ScrollDown => self.select_next(),
                MouseEventKind::ScrollUp => self.select_prev(),
                MouseEventKind::Down(MouseButton::Left) => self.click(pos),
                _ => {}
            },
        }
        AppAction::Consumed
    }

    fn click(&mut self, pos: Position) {
        let regions = ui::regions(self.viewport);

        if let Some(control) = ui::controls::control_at(regions.controls, pos) {
            self.focus = control;
            self.change_control(control, true);
            return;
        }

        if self.load_state != LoadState::Loaded {
            return;
        }
        if let Some(row) = ui::company_list::row_at(regions.list, pos) {
            let index = self.list_offset + row;
            if index < self.visible.len() {
                self.focus = Control::List;
                self.selected_index = index;
                self.open_selected();
            }
        }
    }
}

fn count_label(n: usize) -> String {
    format!("Companies list showing {n} results")
}
