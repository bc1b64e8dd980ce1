//! Owns the fixed five-panel collection and its layout slots

use ratatui::backend::Backend;

use crate::error::{PentaptychError, Result};

use super::dimensions::Dimensions;
use super::layout::{PanelLayout, Slot};
use super::panel::Panel;

/// Canonical panel titles, in display order.
pub const PANEL_TITLES: [&str; Slot::COUNT] = ["Left", "Upper", "Right", "Middle", "Lower"];

/// Owns the five panels, their geometry slots, and the selection
/// bookkeeping.
///
/// This is an explicit context object: one instance is created by the
/// entry point and threaded through the main loop. Whenever `panels` is
/// non-empty, `selected_index` and `last_selected_index` are valid
/// indices into it and at most one panel carries the selected flag.
#[derive(Debug, Default)]
pub struct PanelManager {
    slots: [Dimensions; Slot::COUNT],
    panels: Vec<Panel>,
    selected_index: usize,
    last_selected_index: usize,
}

impl PanelManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)instantiates the five panels with canonical titles and no
    /// surfaces, resets the selection bookkeeping, and selects panel 0.
    pub fn create(&mut self) {
        self.panels = Slot::ALL
            .iter()
            .zip(PANEL_TITLES)
            .enumerate()
            .map(|(index, (&slot, title))| Panel::new(slot, title, index))
            .collect();
        self.selected_index = 0;
        self.last_selected_index = 0;
        if let Some(panel) = self.panels.first_mut() {
            panel.select();
        }
    }

    /// Recomputes the layout for the backend's current size and redraws
    /// everything.
    ///
    /// On success every panel gets fresh dimensions, is drawn, and is
    /// flushed after one full-screen clear; the selected panel is flushed
    /// last so its interior cursor is the one the terminal ends up
    /// showing. On layout failure nothing is mutated and
    /// [`PentaptychError::TerminalTooSmall`] propagates to the caller.
    pub fn update<B: Backend>(&mut self, backend: &mut B) -> Result<()> {
        let size = backend.size()?;
        let layout = PanelLayout::compute(size.width, size.height)?;
        for slot in Slot::ALL {
            self.slots[slot.index()] = layout.slot(slot);
        }

        for panel in &mut self.panels {
            let dims = self.slots[panel.slot().index()];
            panel.update_dimensions(dims)?;
            panel.draw()?;
        }

        backend.clear()?;
        for (index, panel) in self.panels.iter().enumerate() {
            if index != self.selected_index {
                panel.refresh(backend)?;
            }
        }
        if let Some(panel) = self.panels.get(self.selected_index) {
            panel.refresh(backend)?;
        }

        Ok(())
    }

    /// Marks the panel at `index` selected and records it in the
    /// bookkeeping. Visible after the next update.
    pub fn select(&mut self, index: usize) -> Result<()> {
        let panel = self
            .panels
            .get_mut(index)
            .ok_or(PentaptychError::IndexOutOfRange(index))?;
        panel.select();
        self.selected_index = index;
        self.last_selected_index = index;
        Ok(())
    }

    /// Clears the selected flag on the panel at `index`. The bookkeeping
    /// keeps pointing at it so a cancelled selection can be restored.
    pub fn deselect(&mut self, index: usize) -> Result<()> {
        let panel = self
            .panels
            .get_mut(index)
            .ok_or(PentaptychError::IndexOutOfRange(index))?;
        panel.deselect();
        Ok(())
    }

    /// Releases all panels and their surfaces; idempotent.
    pub fn destroy(&mut self) {
        self.panels.clear();
    }

    pub fn enable_index_labels(&mut self) {
        for panel in &mut self.panels {
            panel.enable_index_label();
        }
    }

    pub fn disable_index_labels(&mut self) {
        for panel in &mut self.panels {
            panel.disable_index_label();
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn last_selected_index(&self) -> usize {
        self.last_selected_index
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}
