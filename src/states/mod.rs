pub mod menu;
pub mod play;

use crate::core::engine::StateRunner;
use menu::MenuState;
use play::PlayState;

/// Every screen the client knows about, starting at the menu.
pub fn default_runner() -> StateRunner {
    let mut runner = StateRunner::new(MenuState::NAME);
    runner.register(Box::new(MenuState::new()));
    runner.register(Box::new(PlayState::new()));
    runner
}
