use crate::core::game::Game;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    /// Runs the frame loop until a quit key is pressed, then hands the game back.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<G> {
        let frame_interval = self.game.frame_interval();
        info!(?frame_interval, "engine started");

        loop {
            terminal.draw(|f| self.game.render(f))?;

            // INPUT (Non-blocking): drain everything queued since the last frame
            let mut pressed = Vec::new();
            while event::poll(Duration::from_millis(0))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if is_quit(&key) {
                        info!("quit requested");
                        return Ok(self.game);
                    }
                    pressed.push(key.code);
                }
            }
            if !pressed.is_empty() {
                debug!(?pressed, "keys this frame");
            }

            self.game.handle_input(&pressed);
            self.game.on_frame(Instant::now());

            tokio::time::sleep(frame_interval).await;
        }
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        // raw mode swallows SIGINT
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
