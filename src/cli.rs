use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;

use crate::games::snake::{FoodSpawn, GameConfig, ReversalPolicy};

#[derive(Parser, Debug)]
#[command(name = "termsnake")]
#[command(version, about = "🐍 Classic Snake in the terminal")]
pub struct Cli {
    /// JSON config file; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    pub width: Option<u16>,

    /// Grid height in cells
    #[arg(long)]
    pub height: Option<u16>,

    /// Snake moves per second
    #[arg(long)]
    pub tps: Option<u32>,

    /// Seed for food placement
    #[arg(long)]
    pub seed: Option<u64>,

    /// Ignore turns that would reverse into the snake's own neck
    #[arg(long)]
    pub no_reverse: bool,

    /// Only spawn food on cells the snake does not occupy
    #[arg(long)]
    pub free_food: bool,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(long)]
    pub log: Option<PathBuf>,

    /// Log verbosity: -v info, -vv debug, -vvv trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Defaults, then the config file, then flags. The result is validated.
    pub fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(tps) = self.tps {
            config.ticks_per_second = tps;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.no_reverse {
            config.reversal = ReversalPolicy::Ignore;
        }
        if self.free_food {
            config.food_spawn = FoodSpawn::FreeCell;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// Install the file logger if `--log` was given
    pub fn init_logging(&self) -> Result<()> {
        let Some(path) = &self.log else {
            return Ok(());
        };
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;

        tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_max_level(self.log_level())
            .init();
        Ok(())
    }
}
