//! Component trait — the interface every panel implements.
//!
//! Components are self-contained: they own their visual state and render
//! themselves from the shared `AppState`, which they never mutate. Key
//! handling returns `Vec<Action>` for the App loop to dispatch.

use ratatui::crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::action::{Action, ComponentId};
use crate::app_state::AppState;

pub trait Component {
    fn id(&self) -> ComponentId;

    /// Handle a key event. Returns actions to be dispatched.
    fn handle_key(&mut self, _key: KeyEvent, _state: &AppState) -> Vec<Action> {
        Vec::new()
    }

    /// Receive an action dispatched by the App.
    fn on_action(&mut self, _action: &Action, _state: &AppState) -> Vec<Action> {
        Vec::new()
    }

    /// Render the component into `area`. Pure projection of `AppState` —
    /// no I/O, same state renders the same pixels.
    fn draw(&mut self, frame: &mut Frame, area: Rect, state: &AppState);
}
