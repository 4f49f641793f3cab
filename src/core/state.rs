/// Core screen interface for the netterm client
use crossterm::event::Event;
use ratatui::Frame;

/// A screen/mode of the client (menu, play). Each state owns its own update
/// and redraw behavior; the [`StateRunner`](crate::core::engine::StateRunner)
/// drives one redraw + one update per frame.
pub trait GameState {
    /// Name this state is registered under.
    fn name(&self) -> &'static str;

    /// Consume the input events gathered since the last frame.
    ///
    /// Returns `Some` when the client should switch screens or quit,
    /// `None` to stay on this state.
    fn update(&mut self, events: &[Event]) -> Option<Transition>;

    /// Redraws the elements of this state.
    fn redraw(&mut self, frame: &mut Frame);
}

/// Requested by a state at the end of an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Hand control to the state registered under this name.
    Switch(&'static str),
    /// Leave the client loop entirely.
    Quit,
}
