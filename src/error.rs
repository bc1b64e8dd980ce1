//! Error types for the pentaptych terminal workspace
//!
//! Structured error definitions with thiserror; anyhow is used only at the
//! binary rim for propagation. Layout failures are routine control flow
//! (expected on every terminal resize), so they are ordinary variants
//! rather than panics.

use thiserror::Error;

/// Main error type for pentaptych operations
#[derive(Error, Debug)]
pub enum PentaptychError {
    /// Computed panel layout does not fit the current terminal size.
    /// Recoverable inside the main loop; fatal only on the very first
    /// layout attempt at startup.
    #[error("terminal too small to fit user interface")]
    TerminalTooSmall,

    /// A panel was drawn or refreshed before its render surface existed.
    /// Always a sequencing bug in the caller, never user-triggerable.
    #[error("panel `{0}` has no render surface")]
    NoSurface(&'static str),

    /// Panel index outside the fixed five-panel collection
    #[error("panel index {0} out of range")]
    IndexOutOfRange(usize),

    /// Cursor position outside the panel interior (border rows and
    /// columns are reserved)
    #[error("cursor position ({x}, {y}) outside panel interior")]
    CursorOutOfBounds { x: u16, y: u16 },

    /// Terminal backend I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for pentaptych operations
pub type Result<T> = std::result::Result<T, PentaptychError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PentaptychError::TerminalTooSmall;
        assert_eq!(err.to_string(), "terminal too small to fit user interface");

        let err = PentaptychError::NoSurface("Left");
        assert_eq!(err.to_string(), "panel `Left` has no render surface");

        let err = PentaptychError::IndexOutOfRange(7);
        assert_eq!(err.to_string(), "panel index 7 out of range");
    }

    #[test]
    fn test_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: PentaptychError = io_err.into();
        assert!(matches!(err, PentaptychError::Io(_)));
    }
}
