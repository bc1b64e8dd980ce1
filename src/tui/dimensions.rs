//! Rectangle value type for panel geometry

use ratatui::layout::Rect;

/// Position and size of one panel, in terminal cells.
///
/// A `Dimensions` is only usable for creating or resizing a render surface
/// when both extents are at least 1; callers must check [`is_valid`] (or go
/// through the layout validation, which checks the whole set at once)
/// before building a surface from it.
///
/// [`is_valid`]: Dimensions::is_valid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dimensions {
    pub height: u16,
    pub width: u16,
    pub y: u16,
    pub x: u16,
}

impl Dimensions {
    pub fn new(height: u16, width: u16, y: u16, x: u16) -> Self {
        Self {
            height,
            width,
            y,
            x,
        }
    }

    /// A zero-height or zero-width rectangle cannot back a render surface.
    pub fn is_valid(&self) -> bool {
        self.height >= 1 && self.width >= 1
    }

    pub fn as_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}
