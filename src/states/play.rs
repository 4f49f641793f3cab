use crossterm::event::{Event, KeyCode};
use ratatui::{
    layout::{Alignment, Rect},
    style::Color,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::config;
use crate::core::rectangle::{Direction, Rectangle};
use crate::core::state::{GameState, Transition};

const STEP: u16 = 1;
const HIGHLIGHT_COLOR: Color = Color::Blue;

/// The arena: a player square moved with the arrow keys, kept inside the
/// drawable area.
pub struct PlayState {
    player: Rectangle,
    area: Rect,
    highlighted: bool,
}

impl PlayState {
    pub const NAME: &'static str = "play";

    pub fn new() -> Self {
        Self {
            player: Rectangle::new(4, 2, 10, 5, Color::White),
            // Replaced by the real frame area on the first redraw.
            area: Rect::new(1, 1, config::WINDOW_WIDTH - 2, config::WINDOW_HEIGHT - 2),
            highlighted: false,
        }
    }

    pub fn player(&self) -> &Rectangle {
        &self.player
    }
}

impl Default for PlayState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for PlayState {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn update(&mut self, events: &[Event]) -> Option<Transition> {
        for event in events {
            if let Event::Key(key) = event {
                match key.code {
                    KeyCode::Up => self.player.shift(Direction::Up, STEP, self.area),
                    KeyCode::Down => self.player.shift(Direction::Down, STEP, self.area),
                    KeyCode::Left => self.player.shift(Direction::Left, STEP, self.area),
                    KeyCode::Right => self.player.shift(Direction::Right, STEP, self.area),
                    KeyCode::Char(' ') => {
                        if self.highlighted {
                            self.player.unhighlight();
                        } else {
                            self.player.highlight(HIGHLIGHT_COLOR);
                        }
                        self.highlighted = !self.highlighted;
                    }
                    KeyCode::Esc => return Some(Transition::Switch(super::menu::MenuState::NAME)),
                    KeyCode::Char('q') => return Some(Transition::Quit),
                    _ => {}
                }
            }
        }
        None
    }

    fn redraw(&mut self, f: &mut Frame) {
        let outer = Block::default().title(" ARENA ").borders(Borders::ALL);
        self.area = outer.inner(f.area());
        self.player.clamp_to(self.area);

        f.render_widget(outer, f.area());
        self.player.redraw(f);

        let footer = Rect::new(
            f.area().x,
            f.area().bottom().saturating_sub(1),
            f.area().width,
            1,
        );
        f.render_widget(
            Paragraph::new("[Arrows] Move  [Space] Highlight  [Esc] Menu  [Q] Quit")
                .alignment(Alignment::Center),
            footer,
        );
    }
}
