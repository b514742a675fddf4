use super::config::GameConfig;
use super::renderer::SnakeRenderer;
use super::state::{GameState, TickOutcome};
use crate::core::game::Game;
use crate::core::input::KeyMap;
use crossterm::event::KeyCode;
use std::time::Instant;
use tracing::{debug, info};

/// Binds the snake state machine to the engine loop
pub struct SnakeGame {
    state: GameState,
    keys: KeyMap,
}

impl SnakeGame {
    pub fn new(config: &GameConfig) -> Self {
        Self::with_state(GameState::new(config), KeyMap::default())
    }

    pub fn with_state(state: GameState, keys: KeyMap) -> Self {
        info!(
            grid = ?state.grid_size(),
            head = ?state.head(),
            food = ?state.food(),
            "new snake game"
        );
        Self { state, keys }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
}

impl Game for SnakeGame {
    fn handle_input(&mut self, pressed: &[KeyCode]) {
        if let Some(direction) = self.keys.resolve(pressed) {
            if direction != self.state.direction() && self.state.set_direction(direction) {
                debug!(?direction, "direction changed");
            }
        }
    }

    fn on_frame(&mut self, now: Instant) {
        match self.state.tick(now) {
            TickOutcome::Ate => {
                info!(score = self.state.score(), len = self.state.len(), food = ?self.state.food(), "food eaten");
            }
            TickOutcome::Crashed => {
                let snapshot = self.state.snapshot();
                info!(
                    score = snapshot.score,
                    final_state = %serde_json::to_string(&snapshot).unwrap_or_default(),
                    "game over"
                );
            }
            TickOutcome::Moved | TickOutcome::Waiting | TickOutcome::Finished => {}
        }
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        SnakeRenderer::render(frame, &self.state.snapshot());
    }
}
