/// Core game interface driven by the engine loop
use crossterm::event::KeyCode;
use std::time::{Duration, Instant};

/// Main game trait that all games must implement.
/// The engine calls `handle_input` then `on_frame` once per frame, then `render`.
pub trait Game {
    /// Keys pressed since the previous frame, in arrival order
    fn handle_input(&mut self, pressed: &[KeyCode]);

    /// Advance the simulation; games gate their own tick cadence on `now`
    fn on_frame(&mut self, now: Instant);

    /// Draw the current state into the Ratatui Frame
    fn render(&self, frame: &mut ratatui::Frame);

    /// How long the engine sleeps between frames
    fn frame_interval(&self) -> Duration {
        Duration::from_millis(16)
    }
}
