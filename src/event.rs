//! Unified event loop that merges crossterm terminal events, the fetch
//! worker's result, and a fixed-rate tick into a single async stream.
//!
//! The TUI main loop awaits `EventHandler::next()` to process all three
//! sources without blocking the render path.

use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind, MouseEvent};
use futures::StreamExt;
use tokio::sync::mpsc;

use crate::fetch::types::FetchEvent;

/// Unified event type consumed by the TUI main loop.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed (only `Press` kind; release/repeat are ignored on
    /// platforms that emit them).
    Key(KeyEvent),
    /// Mouse press, release, drag or wheel.
    Mouse(MouseEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Spinner / redraw tick.
    Tick,
    /// The outcome of the startup fetch.
    Fetch(FetchEvent),
}

/// Multiplexes crossterm events, a tick timer, and the fetch channel into a
/// single `Event` stream.
pub struct EventHandler {
    crossterm_stream: EventStream,
    tick_interval: tokio::time::Interval,
    /// Receiver end of the fetch worker → UI channel.
    fetch_rx: mpsc::Receiver<FetchEvent>,
}

impl EventHandler {
    pub fn new(fetch_rx: mpsc::Receiver<FetchEvent>) -> Self {
        let tick_ms = crate::config::get().general.tick_rate_ms;
        let mut tick_interval = tokio::time::interval(Duration::from_millis(tick_ms));
        // Don't try to "catch up" missed ticks, just keep going.
        tick_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        Self {
            crossterm_stream: EventStream::new(),
            tick_interval,
            fetch_rx,
        }
    }

    /// Await the next event from any source.
    pub async fn next(&mut self) -> Result<Event> {
        loop {
            tokio::select! {
                // ── Fetch result (highest priority) ─────────────────────
                // Once the worker has sent its one event and dropped the
                // sender, `recv()` yields `None` and this branch is skipped.
                Some(fetch_event) = self.fetch_rx.recv() => {
                    return Ok(Event::Fetch(fetch_event));
                }

                // ── Terminal events ─────────────────────────────────────
                Some(ct_result) = self.crossterm_stream.next() => {
                    match ct_result? {
                        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                            return Ok(Event::Key(key));
                        }
                        CrosstermEvent::Mouse(mouse) => return Ok(Event::Mouse(mouse)),
                        CrosstermEvent::Resize(w, h) => return Ok(Event::Resize(w, h)),
                        // Swallow key release/repeat, focus and paste events.
                        _ => continue,
                    }
                }

                // ── Tick timer ──────────────────────────────────────────
                _ = self.tick_interval.tick() => {
                    return Ok(Event::Tick);
                }
            }
        }
    }
}
