//! companyscope: a terminal browser for the company directory listing.
//!
//! Architecture:
//! - **UI thread** (main): runs the ratatui render loop, owns `App`, and
//!   dispatches key, mouse, tick and fetch events to it one at a time.
//! - **Fetch worker** (tokio task): performs the single startup GET and sends
//!   one `FetchEvent` back over an `mpsc` channel, then exits.
//!
//! The UI thread never touches the network. The worker never touches the terminal.

mod app;
mod config;
mod event;
mod fetch;
mod listing;
mod theme;
mod tui;
mod ui;

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use color_eyre::Result;
use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use app::{App, AppAction};
use event::Event;
use fetch::types::FetchEvent;
use fetch::CompanyClient;

#[tokio::main]
async fn main() -> Result<()> {
    // ── Error handling, logging & config ────────────────────────────────
    color_eyre::install()?;
    init_logging();
    config::init()?;

    info!("companyscope starting");

    // ── Spawn fetch worker ──────────────────────────────────────────────
    let (fetch_tx, fetch_rx) = mpsc::channel::<FetchEvent>(1);
    let client = CompanyClient::new(config::get().source.url.clone());
    tokio::spawn(async move {
        fetch::worker::run(client, fetch_tx).await;
    });

    // ── Initialise terminal ─────────────────────────────────────────────
    let mut terminal = tui::init(config::get().general.mouse)?;

    // ── App state ───────────────────────────────────────────────────────
    let mut app = App::new();
    let mut events = event::EventHandler::new(fetch_rx);

    // ── Main event loop ─────────────────────────────────────────────────
    while app.running {
        // Render, remembering the frame area for mouse hit testing.
        let area = terminal.draw(|frame| ui::render(frame, &app))?.area;
        app.set_viewport(area);

        match events.next().await? {
            Event::Key(key) => {
                if app.handle_key(key) == AppAction::Quit {
                    app.running = false;
                }
            }
            Event::Mouse(mouse) => {
                app.handle_mouse(mouse);
            }
            Event::Tick => {
                app.on_tick();
            }
            Event::Fetch(fetch_event) => {
                app.handle_fetch_event(fetch_event);
            }
            Event::Resize(width, height) => {
                app.set_viewport(Rect::new(0, 0, width, height));
            }
        }
    }

    // ── Cleanup ─────────────────────────────────────────────────────────
    tui::restore()?;
    info!("companyscope exiting");
    Ok(())
}

/// The TUI owns stdout and stderr would scribble over the alternate screen,
/// so logs go to `companyscope.log` in the cache directory. If that file
/// cannot be opened, logs are dropped.
fn init_logging() {
    let log_file = config::project_dirs().and_then(|dirs| {
        let dir = dirs.cache_dir();
        fs::create_dir_all(dir).ok()?;
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join("companyscope.log"))
            .ok()
    });

    let writer = match log_file {
        Some(file) => BoxMakeWriter::new(Mutex::new(file)),
        None => BoxMakeWriter::new(std::io::sink),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
}
