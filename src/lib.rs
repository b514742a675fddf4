pub mod core {
	pub mod engine;
	pub mod game;
	pub mod input;
}

pub mod cli;
pub mod games;

// Re-export for convenience
pub use crate::core::engine::Engine;
pub use crate::core::game::Game;
