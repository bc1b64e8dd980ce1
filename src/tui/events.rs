//! Event handling for the main loop

use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::error::Result;

/// Events the main loop reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    /// Key press
    Key(KeyEvent),

    /// Terminal resize notification from the input backend
    Resize(u16, u16),

    /// Nothing happened within the poll interval; gives the loop a chance
    /// to look at the signal flags
    Tick,
}

/// Polls the terminal for input, one event per call.
pub struct EventLoop {
    tick_rate: Duration,
}

impl EventLoop {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Blocks for at most the tick interval and returns the next event.
    pub fn poll_event(&self) -> Result<TuiEvent> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(TuiEvent::Key(key));
                }
                Event::Resize(width, height) => return Ok(TuiEvent::Resize(width, height)),
                _ => {}
            }
        }
        Ok(TuiEvent::Tick)
    }
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}
