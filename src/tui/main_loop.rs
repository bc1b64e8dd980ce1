//! Input state machine driving panel selection and resize handling

use std::sync::atomic::Ordering;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::Backend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::error::{PentaptychError, Result};
use crate::signals::SignalFlags;

use super::events::{EventLoop, TuiEvent};
use super::keys;
use super::panel_manager::PanelManager;

/// Shown at the top-left while the layout does not fit.
const TOO_SMALL_MESSAGE: &str = "Terminal too small to fit user interface.";

/// Where the loop is in the two-key panel-choice sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    Normal,
    /// The go key was pressed; the next key picks a panel or cancels.
    AwaitingPanelChoice,
}

/// Processes events and user input until stopped.
///
/// All panel mutation happens here, on the thread that runs the loop; the
/// signal watcher only raises flags, which the loop drains once per
/// iteration. While `invalid_resize` is set the panels are gone and every
/// key except quit is ignored until a resize produces a layout that fits.
pub struct MainLoop {
    state: InputState,
    done: bool,
    invalid_resize: bool,
    /// Selection to restore when a failed resize recovers.
    resume_index: usize,
    flags: SignalFlags,
}

impl MainLoop {
    pub fn new(flags: SignalFlags) -> Self {
        Self {
            state: InputState::Normal,
            done: false,
            invalid_resize: false,
            resume_index: 0,
            flags,
        }
    }

    /// Runs until the quit key, a stop signal, or an unrecoverable error.
    pub fn run<B: Backend>(
        &mut self,
        manager: &mut PanelManager,
        events: &EventLoop,
        backend: &mut B,
    ) -> Result<()> {
        while !self.done {
            self.drain_signals(manager, backend)?;
            if self.done {
                break;
            }

            let event = events.poll_event()?;
            self.handle_event(event, manager, backend)?;
        }
        Ok(())
    }

    /// Acts on signal flags raised by the watcher thread. Each flag is
    /// drained with a `swap`, so a given signal is handled exactly once
    /// and only ever on this thread.
    pub fn drain_signals<B: Backend>(
        &mut self,
        manager: &mut PanelManager,
        backend: &mut B,
    ) -> Result<()> {
        if self.flags.stop.swap(false, Ordering::SeqCst) {
            self.done = true;
            return Ok(());
        }
        if self.flags.resize.swap(false, Ordering::SeqCst) {
            let size = backend.size()?;
            self.handle_event(TuiEvent::Resize(size.width, size.height), manager, backend)?;
        }
        Ok(())
    }

    /// Feeds one event through the state machine.
    pub fn handle_event<B: Backend>(
        &mut self,
        event: TuiEvent,
        manager: &mut PanelManager,
        backend: &mut B,
    ) -> Result<()> {
        match event {
            TuiEvent::Key(key) => self.handle_key(key, manager, backend),
            TuiEvent::Resize(..) => self.handle_resize(manager, backend),
            TuiEvent::Tick => Ok(()),
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn state(&self) -> InputState {
        self.state
    }

    pub fn invalid_resize(&self) -> bool {
        self.invalid_resize
    }

    fn handle_key<B: Backend>(
        &mut self,
        key: KeyEvent,
        manager: &mut PanelManager,
        backend: &mut B,
    ) -> Result<()> {
        if is_quit_key(&key) {
            self.done = true;
            return Ok(());
        }
        if self.invalid_resize {
            // Nothing to act on until a resize makes the layout fit again.
            return Ok(());
        }

        match self.state {
            InputState::Normal => {
                if key.code == KeyCode::Char(keys::GO) {
                    manager.deselect(manager.selected_index())?;
                    self.state = InputState::AwaitingPanelChoice;
                    self.try_update(manager, backend)?;
                }
            }
            InputState::AwaitingPanelChoice => {
                let choice = match key.code {
                    KeyCode::Char(c) => keys::panel_index(c),
                    _ => None,
                };
                match choice {
                    Some(index) => manager.select(index)?,
                    // Anything else (the go key included) cancels back to
                    // the previous selection.
                    None => manager.select(manager.last_selected_index())?,
                }
                self.state = InputState::Normal;
                self.try_update(manager, backend)?;
            }
        }
        Ok(())
    }

    fn handle_resize<B: Backend>(
        &mut self,
        manager: &mut PanelManager,
        backend: &mut B,
    ) -> Result<()> {
        if !self.invalid_resize {
            return self.try_update(manager, backend);
        }

        // Retry from scratch: the panels were destroyed when the layout
        // stopped fitting.
        manager.create();
        if self.resume_index != 0 {
            manager.deselect(0)?;
            manager.select(self.resume_index)?;
        }
        match manager.update(backend) {
            Ok(()) => {
                self.invalid_resize = false;
                tracing::debug!("layout restored after resize");
                Ok(())
            }
            Err(PentaptychError::TerminalTooSmall) => {
                manager.destroy();
                Self::show_too_small(backend)
            }
            Err(err) => Err(err),
        }
    }

    /// Redraws, degrading to the too-small holding state instead of
    /// propagating a layout failure.
    fn try_update<B: Backend>(
        &mut self,
        manager: &mut PanelManager,
        backend: &mut B,
    ) -> Result<()> {
        match manager.update(backend) {
            Ok(()) => Ok(()),
            Err(PentaptychError::TerminalTooSmall) => {
                tracing::warn!("terminal too small, destroying panels until next resize");
                self.invalid_resize = true;
                self.resume_index = manager.last_selected_index();
                self.state = InputState::Normal;
                manager.destroy();
                Self::show_too_small(backend)
            }
            Err(err) => Err(err),
        }
    }

    fn show_too_small<B: Backend>(backend: &mut B) -> Result<()> {
        backend.clear()?;
        let size = backend.size()?;
        let width = (TOO_SMALL_MESSAGE.len() as u16).min(size.width);
        if width > 0 && size.height > 0 {
            let mut message = Buffer::empty(Rect::new(0, 0, width, 1));
            message.set_string(0, 0, TOO_SMALL_MESSAGE, Style::default());
            let content = message.content.iter().enumerate().map(|(i, cell)| {
                let (x, y) = message.pos_of(i);
                (x, y, cell)
            });
            backend.draw(content)?;
        }
        backend.hide_cursor()?;
        backend.flush()?;
        Ok(())
    }
}

fn is_quit_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char(keys::QUIT))
        || matches!(
            (key.code, key.modifiers),
            (KeyCode::Char('c'), KeyModifiers::CONTROL)
        )
}
