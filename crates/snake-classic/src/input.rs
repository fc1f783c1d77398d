use macroquad::prelude::*;

use snake_rules::Direction;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    Turn(Direction),
    TogglePause,
    Restart,
    Quit,
}

/// Translates this frame's key edges into actions.
pub struct InputHandler;

impl InputHandler {
    pub fn poll() -> Vec<Action> {
        let mut actions = Vec::new();

        if is_key_pressed(KeyCode::Up) || is_key_pressed(KeyCode::W) {
            actions.push(Action::Turn(Direction::Up));
        }
        if is_key_pressed(KeyCode::Down) || is_key_pressed(KeyCode::S) {
            actions.push(Action::Turn(Direction::Down));
        }
        if is_key_pressed(KeyCode::Left) || is_key_pressed(KeyCode::A) {
            actions.push(Action::Turn(Direction::Left));
        }
        if is_key_pressed(KeyCode::Right) || is_key_pressed(KeyCode::D) {
            actions.push(Action::Turn(Direction::Right));
        }

        if is_key_pressed(KeyCode::P) {
            actions.push(Action::TogglePause);
        }
        if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::R) {
            actions.push(Action::Restart);
        }

        // the browser owns Escape; only native builds quit on it
        #[cfg(not(target_arch = "wasm32"))]
        if is_key_pressed(KeyCode::Escape) {
            actions.push(Action::Quit);
        }

        actions
    }
}
