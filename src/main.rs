use anyhow::Result;
use clap::Parser;
use termsnake::cli::Cli;
use termsnake::games::snake::SnakeGame;
use termsnake::Engine;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_logging()?;

    // Fail on bad config before taking over the terminal
    let config = cli.game_config()?;
    info!(?config, "starting");

    let terminal = ratatui::init();
    let result = Engine::new(SnakeGame::new(&config)).run(terminal).await;
    ratatui::restore();

    let game = result?;
    let state = game.state();
    if state.is_over() {
        println!("Game over! Score: {}", state.score());
    } else {
        println!("Quit with score {}", state.score());
    }
    Ok(())
}
