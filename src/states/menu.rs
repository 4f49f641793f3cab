use crossterm::event::{Event, KeyCode};
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::core::state::{GameState, Transition};
use crate::states::play::PlayState;

const ENTRIES: [(&str, &str); 2] = [
    ("Play", "Move your square around the arena"),
    ("Quit", "Exit the client"),
];

/// Entry screen: pick where to go next.
pub struct MenuState {
    selected: usize,
}

impl MenuState {
    pub const NAME: &'static str = "menu";

    pub fn new() -> Self {
        Self { selected: 0 }
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for MenuState {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn update(&mut self, events: &[Event]) -> Option<Transition> {
        for event in events {
            if let Event::Key(key) = event {
                match key.code {
                    KeyCode::Up => self.selected = self.selected.saturating_sub(1),
                    KeyCode::Down => self.selected = (self.selected + 1).min(ENTRIES.len() - 1),
                    KeyCode::Enter => {
                        return match self.selected {
                            0 => Some(Transition::Switch(PlayState::NAME)),
                            _ => Some(Transition::Quit),
                        };
                    }
                    KeyCode::Char('q') | KeyCode::Esc => return Some(Transition::Quit),
                    _ => {}
                }
            }
        }
        None
    }

    fn redraw(&mut self, f: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .margin(2)
        .split(f.area());

        f.render_widget(
            Paragraph::new(" NETTERM ")
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            chunks[0],
        );

        let items: Vec<ListItem> = ENTRIES
            .iter()
            .enumerate()
            .map(|(i, (name, description))| {
                let style = if i == self.selected {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(format!(" » {name} : {description}")).style(style)
            })
            .collect();

        f.render_widget(
            List::new(items).block(Block::default().title(" MENU ").borders(Borders::ALL)),
            chunks[1],
        );

        f.render_widget(
            Paragraph::new("[↑/↓] Navigate  [Enter] Select  [Q] Quit").alignment(Alignment::Center),
            chunks[2],
        );
    }
}
