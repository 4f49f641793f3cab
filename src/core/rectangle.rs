use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Block,
    Frame,
};

/// Movement direction for [`Rectangle::shift`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A colored rectangle with built-in movement and highlight helpers.
///
/// The color set at construction time is remembered as the default, so a
/// highlight can always be undone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rectangle {
    pub rect: Rect,
    pub color: Color,
    default_color: Color,
}

impl Rectangle {
    /// Build from corner coordinates: `(x1, y1)` top-left, `(x2, y2)`
    /// bottom-right.
    pub fn new(x1: u16, y1: u16, x2: u16, y2: u16, color: Color) -> Self {
        Self::from_rect(
            Rect::new(x1, y1, x2.saturating_sub(x1), y2.saturating_sub(y1)),
            color,
        )
    }

    /// Build from an existing [`Rect`].
    pub fn from_rect(rect: Rect, color: Color) -> Self {
        Self {
            rect,
            color,
            default_color: color,
        }
    }

    /// Set a temporary color, e.g. while the rectangle is selected.
    pub fn highlight(&mut self, color: Color) {
        self.color = color;
    }

    /// Restore the default color.
    pub fn unhighlight(&mut self) {
        self.color = self.default_color;
    }

    /// Move by `distance` cells, then clamp so the rectangle stays fully
    /// inside `bounds`.
    pub fn shift(&mut self, direction: Direction, distance: u16, bounds: Rect) {
        match direction {
            Direction::Up => self.rect.y = self.rect.y.saturating_sub(distance),
            Direction::Down => self.rect.y = self.rect.y.saturating_add(distance),
            Direction::Left => self.rect.x = self.rect.x.saturating_sub(distance),
            Direction::Right => self.rect.x = self.rect.x.saturating_add(distance),
        }
        self.clamp_to(bounds);
    }

    /// Pin the rectangle inside `bounds`. A rectangle larger than the bounds
    /// ends up pinned at the near edge.
    pub fn clamp_to(&mut self, bounds: Rect) {
        let max_x = bounds.right().saturating_sub(self.rect.width).max(bounds.x);
        let max_y = bounds.bottom().saturating_sub(self.rect.height).max(bounds.y);
        self.rect.x = self.rect.x.clamp(bounds.x, max_x);
        self.rect.y = self.rect.y.clamp(bounds.y, max_y);
    }

    /// Draw at the current position in the current color.
    pub fn redraw(&self, frame: &mut Frame) {
        frame.render_widget(
            Block::default().style(Style::default().bg(self.color)),
            self.rect,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    #[test]
    fn corner_constructor_computes_size() {
        let r = Rectangle::new(4, 2, 10, 5, Color::White);
        assert_eq!(r.rect, Rect::new(4, 2, 6, 3));
    }

    #[test]
    fn shift_moves_in_each_direction() {
        let mut r = Rectangle::new(10, 10, 14, 14, Color::White);
        r.shift(Direction::Right, 3, bounds());
        r.shift(Direction::Down, 2, bounds());
        assert_eq!((r.rect.x, r.rect.y), (13, 12));

        r.shift(Direction::Left, 3, bounds());
        r.shift(Direction::Up, 2, bounds());
        assert_eq!((r.rect.x, r.rect.y), (10, 10));
    }

    #[test]
    fn shift_clamps_at_the_near_edge() {
        let mut r = Rectangle::new(1, 1, 5, 5, Color::White);
        r.shift(Direction::Left, 100, bounds());
        r.shift(Direction::Up, 100, bounds());
        assert_eq!((r.rect.x, r.rect.y), (0, 0));
    }

    #[test]
    fn shift_clamps_at_the_far_edge() {
        let mut r = Rectangle::new(0, 0, 4, 4, Color::White);
        r.shift(Direction::Right, 1000, bounds());
        r.shift(Direction::Down, 1000, bounds());
        assert_eq!((r.rect.x, r.rect.y), (76, 20));
    }

    #[test]
    fn oversized_rectangle_pins_at_the_origin() {
        let mut r = Rectangle::from_rect(Rect::new(5, 5, 200, 100), Color::White);
        r.clamp_to(bounds());
        assert_eq!((r.rect.x, r.rect.y), (0, 0));
    }

    #[test]
    fn clamp_respects_offset_bounds() {
        let inner = Rect::new(1, 1, 78, 22);
        let mut r = Rectangle::from_rect(Rect::new(0, 0, 4, 4), Color::White);
        r.clamp_to(inner);
        assert_eq!((r.rect.x, r.rect.y), (1, 1));
    }

    #[test]
    fn highlight_and_unhighlight_restore_default() {
        let mut r = Rectangle::new(0, 0, 4, 4, Color::White);
        r.highlight(Color::Blue);
        assert_eq!(r.color, Color::Blue);
        r.unhighlight();
        assert_eq!(r.color, Color::White);
    }
}
