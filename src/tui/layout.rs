//! Five-slot panel layout computation
//!
//! The viewport is tiled into three columns: a full-height panel on each
//! side, and a center column stacked into three panels. Side widths are a
//! fixed ratio of the terminal width; the upper and middle center panels
//! have fixed small heights and the lower center panel takes the rest.
//!
//! Validation is all-or-nothing: a layout is either usable for every slot
//! or rejected as a whole, before any panel surface is touched.

use crate::error::{PentaptychError, Result};

use super::dimensions::Dimensions;

/// Width of each side panel as a fraction of the terminal width.
pub const SIDE_WIDTH_RATIO: f64 = 2.7;

/// Fixed height of the upper center panel.
pub const MIDDLE_UPPER_HEIGHT: u16 = 3;

/// Fixed height of the middle center panel.
pub const MIDDLE_MIDDLE_HEIGHT: u16 = 3;

/// Usability floor for the lower center panel; anything shorter leaves no
/// usable interior under the fixed-height panels above it.
pub const MIDDLE_LOWER_MIN_HEIGHT: u16 = 3;

/// Identifies one of the five fixed layout regions.
///
/// Panels refer to their region by this tag (never by reference), and
/// re-read the region's dimensions on every layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    LargeLeft,
    MiddleUpper,
    LargeRight,
    MiddleMiddle,
    MiddleLower,
}

impl Slot {
    pub const COUNT: usize = 5;

    /// All slots in display order (the order panels are created and
    /// numbered in).
    pub const ALL: [Slot; Slot::COUNT] = [
        Slot::LargeLeft,
        Slot::MiddleUpper,
        Slot::LargeRight,
        Slot::MiddleMiddle,
        Slot::MiddleLower,
    ];

    pub fn index(self) -> usize {
        match self {
            Slot::LargeLeft => 0,
            Slot::MiddleUpper => 1,
            Slot::LargeRight => 2,
            Slot::MiddleMiddle => 3,
            Slot::MiddleLower => 4,
        }
    }
}

/// The set of five [`Dimensions`] computed from one terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    slots: [Dimensions; Slot::COUNT],
}

impl PanelLayout {
    /// Computes the layout for a `cols` x `lines` terminal.
    ///
    /// Returns [`PentaptychError::TerminalTooSmall`] if any slot would end
    /// up with a non-positive extent or the lower center panel would fall
    /// below its usability floor. Nothing is partially applied on failure;
    /// the caller receives either a fully valid layout or none at all.
    pub fn compute(cols: u16, lines: u16) -> Result<Self> {
        let side_width = (f64::from(cols) / SIDE_WIDTH_RATIO) as u16;
        let middle_width = cols.saturating_sub(2 * side_width);
        let middle_lower_height = lines
            .checked_sub(MIDDLE_UPPER_HEIGHT + MIDDLE_MIDDLE_HEIGHT)
            .ok_or(PentaptychError::TerminalTooSmall)?;

        let large_left = Dimensions::new(lines, side_width, 0, 0);
        let middle_upper = Dimensions::new(MIDDLE_UPPER_HEIGHT, middle_width, 0, side_width);
        let large_right =
            Dimensions::new(lines, side_width, 0, side_width + middle_width);
        let middle_middle = Dimensions::new(
            MIDDLE_MIDDLE_HEIGHT,
            middle_width,
            MIDDLE_UPPER_HEIGHT,
            side_width,
        );
        let middle_lower = Dimensions::new(
            middle_lower_height,
            middle_width,
            MIDDLE_UPPER_HEIGHT + MIDDLE_MIDDLE_HEIGHT,
            side_width,
        );

        let slots = [
            large_left,
            middle_upper,
            large_right,
            middle_middle,
            middle_lower,
        ];

        if slots.iter().any(|dims| !dims.is_valid())
            || middle_lower.height < MIDDLE_LOWER_MIN_HEIGHT
        {
            return Err(PentaptychError::TerminalTooSmall);
        }

        Ok(Self { slots })
    }

    pub fn slot(&self, slot: Slot) -> Dimensions {
        self.slots[slot.index()]
    }
}
