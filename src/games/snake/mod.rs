/// Snake game module: the state machine plus its terminal front-end
pub mod config;
pub mod game;
pub mod renderer;
pub mod state;

pub use config::{FoodSpawn, GameConfig, ReversalPolicy};
pub use game::SnakeGame;
pub use renderer::SnakeRenderer;
pub use state::{Cell, Direction, GameState, Snapshot, TickOutcome};
