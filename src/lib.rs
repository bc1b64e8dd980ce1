//! Pentaptych - Five-Panel Terminal Workspace
//!
//! A terminal UI shell that tiles the viewport into five bordered,
//! titled panels and routes focus between them with a two-key modal
//! sequence (the go key, then the panel digit). Resizes that no longer
//! fit the layout degrade to a holding state instead of crashing, and a
//! later resize that fits restores the panels and the selection.
//!
//! # Architecture
//!
//! - **tui**: panel geometry, render surfaces, the panel manager, and the
//!   input state machine
//! - **signals**: SIGINT/SIGWINCH delivered as atomic flags from a
//!   watcher thread
//! - **error**: structured error types; layout failures are ordinary
//!   control flow, not panics

pub mod error;
pub mod signals;
pub mod tui;

// Re-export commonly used types
pub use error::{PentaptychError, Result};
pub use tui::{PanelManager, TuiOptions};
