use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// What `set_direction` does with a request that would step onto the neck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReversalPolicy {
    /// Store it anyway; the next tick is a self-collision
    #[default]
    Allow,
    /// Drop it and keep the current heading
    Ignore,
}

/// Where new food may land
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FoodSpawn {
    /// Any cell in the grid, the body included
    #[default]
    Anywhere,
    /// Only cells the snake does not occupy
    FreeCell,
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid, in cells
    pub grid_width: u16,
    /// Height of the game grid, in cells
    pub grid_height: u16,
    /// Snake moves per second
    pub ticks_per_second: u32,
    pub reversal: ReversalPolicy,
    pub food_spawn: FoodSpawn,
    /// Fixed seed for food placement; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        // 640x480 window at 20px per cell
        Self {
            grid_width: 32,
            grid_height: 24,
            ticks_per_second: 6,
            reversal: ReversalPolicy::Allow,
            food_spawn: FoodSpawn::Anywhere,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Read a JSON config file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_width == 0 || self.grid_height == 0 {
            bail!(
                "grid must be at least 1x1, got {}x{}",
                self.grid_width,
                self.grid_height
            );
        }
        if self.ticks_per_second == 0 {
            bail!("ticks_per_second must be positive");
        }
        Ok(())
    }

    /// Minimum time between two snake moves
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second.max(1)
    }

    /// Create a small seeded grid for testing
    pub fn small() -> Self {
        Self {
            seed: Some(7),
            ..Self::new(10, 10)
        }
    }
}
