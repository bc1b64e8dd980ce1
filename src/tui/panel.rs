//! One bordered display region owning its render surface

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Widget};

use crate::error::{PentaptychError, Result};

use super::dimensions::Dimensions;
use super::layout::Slot;

/// One rectangular display region with a border, a title, and an owned
/// render surface.
///
/// A panel never owns its geometry: it carries the [`Slot`] tag of the
/// layout region it occupies and is handed that region's freshly computed
/// [`Dimensions`] on every layout pass. The surface is `None` until the
/// first successful [`update_dimensions`] and is replaced wholesale on
/// each one after that, so a panel holds at most one live surface.
///
/// [`update_dimensions`]: Panel::update_dimensions
#[derive(Debug)]
pub struct Panel {
    slot: Slot,
    title: &'static str,
    index: usize,
    selected: bool,
    index_label_visible: bool,
    cursor: Position,
    area: Rect,
    surface: Option<Buffer>,
}

impl Panel {
    /// Creates the panel without a surface; nothing can be drawn until
    /// [`update_dimensions`](Panel::update_dimensions) succeeds.
    pub fn new(slot: Slot, title: &'static str, index: usize) -> Self {
        Self {
            slot,
            title,
            index,
            selected: false,
            index_label_visible: true,
            cursor: Position::new(1, 1),
            area: Rect::default(),
            surface: None,
        }
    }

    pub fn slot(&self) -> Slot {
        self.slot
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Rebuilds the render surface from freshly computed dimensions,
    /// releasing any previous surface.
    ///
    /// The validity check here is independent of the aggregate layout
    /// validation; a caller handing over an unusable rectangle gets
    /// [`PentaptychError::TerminalTooSmall`] and the old surface stays.
    pub fn update_dimensions(&mut self, dims: Dimensions) -> Result<()> {
        if !dims.is_valid() {
            return Err(PentaptychError::TerminalTooSmall);
        }
        self.area = dims.as_rect();
        self.surface = Some(Buffer::empty(self.area));

        // Keep the stored cursor inside the (possibly smaller) interior.
        let max_x = self.area.width.saturating_sub(2).max(1);
        let max_y = self.area.height.saturating_sub(2).max(1);
        self.cursor.x = self.cursor.x.clamp(1, max_x);
        self.cursor.y = self.cursor.y.clamp(1, max_y);

        Ok(())
    }

    /// Paints the border, the title (emphasized while selected), and the
    /// bracketed index label into the owned surface.
    pub fn draw(&mut self) -> Result<()> {
        let title = self.title;
        let surface = self
            .surface
            .as_mut()
            .ok_or(PentaptychError::NoSurface(title))?;
        surface.reset();

        let title_style = if self.selected {
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default()
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(Line::from(Span::styled(title, title_style)));
        if self.index_label_visible {
            block = block.title_top(Line::from(format!("[{}]", self.index + 1)).right_aligned());
        }
        block.render(self.area, surface);

        Ok(())
    }

    /// Flushes the surface to the terminal. While selected, also parks the
    /// terminal cursor at the panel's stored interior position, which is
    /// why the manager refreshes the selected panel last.
    pub fn refresh<B: ratatui::backend::Backend>(&self, backend: &mut B) -> Result<()> {
        let surface = self
            .surface
            .as_ref()
            .ok_or(PentaptychError::NoSurface(self.title))?;

        let content = surface.content.iter().enumerate().map(|(i, cell)| {
            let (x, y) = surface.pos_of(i);
            (x, y, cell)
        });
        backend.draw(content)?;

        if self.selected {
            backend.set_cursor_position(Position::new(
                self.area.x + self.cursor.x,
                self.area.y + self.cursor.y,
            ))?;
            backend.show_cursor()?;
        }
        backend.flush()?;

        Ok(())
    }

    /// Visual effect only; takes effect on the next draw.
    pub fn select(&mut self) {
        self.selected = true;
    }

    pub fn deselect(&mut self) {
        self.selected = false;
    }

    /// Moves the stored interior cursor. Positions on the border rows and
    /// columns (or beyond) are rejected.
    pub fn set_cursor_position(&mut self, position: Position) -> Result<()> {
        let max_x = self.area.width.saturating_sub(2);
        let max_y = self.area.height.saturating_sub(2);
        if position.x < 1 || position.x > max_x || position.y < 1 || position.y > max_y {
            return Err(PentaptychError::CursorOutOfBounds {
                x: position.x,
                y: position.y,
            });
        }
        self.cursor = position;
        Ok(())
    }

    pub fn cursor_position(&self) -> Position {
        self.cursor
    }

    pub fn enable_index_label(&mut self) {
        self.index_label_visible = true;
    }

    pub fn disable_index_label(&mut self) {
        self.index_label_visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::{Backend, TestBackend};

    fn drawn_panel() -> Panel {
        let mut panel = Panel::new(Slot::LargeLeft, "Left", 0);
        panel
            .update_dimensions(Dimensions::new(12, 20, 0, 0))
            .expect("valid dimensions");
        panel.draw().expect("draw");
        panel
    }

    fn row_string(buffer: &Buffer, y: u16) -> String {
        let area = buffer.area;
        (area.x..area.x + area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_draw_before_surface_fails() {
        let mut panel = Panel::new(Slot::MiddleUpper, "Upper", 1);
        assert!(matches!(
            panel.draw(),
            Err(PentaptychError::NoSurface("Upper"))
        ));

        let mut backend = TestBackend::new(10, 10);
        assert!(matches!(
            panel.refresh(&mut backend),
            Err(PentaptychError::NoSurface("Upper"))
        ));
    }

    #[test]
    fn test_invalid_dimensions_rejected() {
        let mut panel = Panel::new(Slot::MiddleUpper, "Upper", 1);
        assert!(matches!(
            panel.update_dimensions(Dimensions::new(0, 20, 0, 0)),
            Err(PentaptychError::TerminalTooSmall)
        ));
        assert!(!panel.has_surface());
    }

    #[test]
    fn test_draw_renders_border_and_title() {
        let panel = drawn_panel();
        let surface = panel.surface.as_ref().expect("surface");

        let top = row_string(surface, 0);
        assert!(top.starts_with('┌'), "top row: {top}");
        assert!(top.ends_with('┐'), "top row: {top}");
        assert!(top.contains("Left"), "top row: {top}");
        assert!(top.contains("[1]"), "top row: {top}");

        let bottom = row_string(surface, 11);
        assert!(bottom.starts_with('└'), "bottom row: {bottom}");
        assert!(bottom.ends_with('┘'), "bottom row: {bottom}");
    }

    #[test]
    fn test_index_label_toggle() {
        let mut panel = drawn_panel();
        panel.disable_index_label();
        panel.draw().expect("draw");
        let top = row_string(panel.surface.as_ref().unwrap(), 0);
        assert!(!top.contains("[1]"), "top row: {top}");

        panel.enable_index_label();
        panel.draw().expect("draw");
        let top = row_string(panel.surface.as_ref().unwrap(), 0);
        assert!(top.contains("[1]"), "top row: {top}");
    }

    #[test]
    fn test_selected_title_emphasis() {
        let mut panel = drawn_panel();
        panel.select();
        panel.draw().expect("draw");

        // The first top title starts right after the corner cell.
        let surface = panel.surface.as_ref().unwrap();
        assert_eq!(surface[(1, 0)].symbol(), "L");
        let style = surface[(1, 0)].style();
        assert!(style.add_modifier.contains(Modifier::BOLD));
        assert!(style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_refresh_flushes_to_backend() {
        let panel = drawn_panel();
        let mut backend = TestBackend::new(40, 12);
        panel.refresh(&mut backend).expect("refresh");

        let screen = backend.buffer();
        assert_eq!(screen[(0, 0)].symbol(), "┌");
        assert_eq!(screen[(19, 0)].symbol(), "┐");
        // Cells outside the panel are untouched.
        assert_eq!(screen[(25, 0)].symbol(), " ");
    }

    #[test]
    fn test_selected_refresh_positions_cursor() {
        let mut panel = Panel::new(Slot::MiddleMiddle, "Middle", 3);
        panel
            .update_dimensions(Dimensions::new(8, 16, 2, 4))
            .expect("valid dimensions");
        panel.select();
        panel
            .set_cursor_position(Position::new(3, 2))
            .expect("cursor in bounds");
        panel.draw().expect("draw");

        let mut backend = TestBackend::new(40, 12);
        panel.refresh(&mut backend).expect("refresh");
        let cursor = backend.get_cursor_position().expect("cursor");
        assert_eq!(cursor, Position::new(7, 4));
    }

    #[test]
    fn test_cursor_bounds() {
        let mut panel = drawn_panel();
        // Interior of a 12x20 panel is [1, 18] x [1, 10].
        assert!(panel.set_cursor_position(Position::new(1, 1)).is_ok());
        assert!(panel.set_cursor_position(Position::new(18, 10)).is_ok());
        assert!(matches!(
            panel.set_cursor_position(Position::new(19, 10)),
            Err(PentaptychError::CursorOutOfBounds { x: 19, y: 10 })
        ));
        assert!(matches!(
            panel.set_cursor_position(Position::new(0, 5)),
            Err(PentaptychError::CursorOutOfBounds { .. })
        ));
        assert!(panel.set_cursor_position(Position::new(5, 11)).is_err());
    }

    #[test]
    fn test_cursor_clamped_on_shrink() {
        let mut panel = drawn_panel();
        panel
            .set_cursor_position(Position::new(18, 10))
            .expect("cursor in bounds");
        panel
            .update_dimensions(Dimensions::new(5, 8, 0, 0))
            .expect("valid dimensions");
        assert_eq!(panel.cursor_position(), Position::new(6, 3));
    }
}
