//! Terminal user interface
//!
//! Five bordered panels tile the viewport: a full-height panel on each
//! side and three stacked in the center column. One panel is always
//! focused; pressing the go key and then a digit moves the focus. The
//! pieces fit together as:
//!
//! - [`PanelLayout`] computes the five geometry slots from the terminal
//!   size, all-or-nothing
//! - [`Panel`] owns one render surface and paints its border, title, and
//!   index label into it
//! - [`PanelManager`] owns the panels and slots and orchestrates relayout
//! - [`MainLoop`] turns key and resize events into panel operations
//! - [`TerminalManager`] holds raw mode / alternate screen for the
//!   duration and restores them on drop

mod dimensions;
mod events;
mod keys;
mod layout;
mod main_loop;
mod panel;
mod panel_manager;
mod terminal;

pub use dimensions::Dimensions;
pub use events::{EventLoop, TuiEvent};
pub use layout::{PanelLayout, Slot};
pub use main_loop::{InputState, MainLoop};
pub use panel::Panel;
pub use panel_manager::{PanelManager, PANEL_TITLES};
pub use terminal::{TerminalConfig, TerminalManager};

use crate::error::Result;
use crate::signals::SignalFlags;
#[cfg(unix)]
use crate::signals::SignalWatcher;

/// Runtime options for the UI.
#[derive(Debug, Clone, Copy)]
pub struct TuiOptions {
    /// Show the bracketed index labels in the panel title bars
    pub show_panel_labels: bool,
}

impl Default for TuiOptions {
    fn default() -> Self {
        Self {
            show_panel_labels: true,
        }
    }
}

/// Initializes the screen and runs the UI until quit.
///
/// The very first layout attempt must fit the terminal; its failure is
/// fatal and surfaces to the caller for logging and a non-zero exit.
/// Every later layout failure is handled inside the loop by waiting for
/// a resize that fits.
pub fn start(options: TuiOptions) -> Result<()> {
    let mut terminal = TerminalManager::new(TerminalConfig::default())?;

    let flags = SignalFlags::default();
    #[cfg(unix)]
    let _signal_watcher = SignalWatcher::spawn(flags.clone())?;

    let mut manager = PanelManager::new();
    manager.create();
    if !options.show_panel_labels {
        manager.disable_index_labels();
    }

    if let Err(err) = manager.update(terminal.backend_mut()) {
        tracing::error!("{err}");
        return Err(err);
    }

    let events = EventLoop::default();
    let mut main_loop = MainLoop::new(flags);
    let result = main_loop.run(&mut manager, &events, terminal.backend_mut());
    if let Err(err) = &result {
        tracing::error!("{err}");
    }

    manager.destroy();
    result
}
