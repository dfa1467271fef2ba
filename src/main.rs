use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use yahtzee_scorepad::engine::commands::setup_command;
use yahtzee_scorepad::engine::models::GameState;
use yahtzee_scorepad::engine::transitions::apply;
use yahtzee_scorepad::ui::session::Session;

#[derive(Parser)]
#[command(name = "scorepad", about = "Score sheet for a Yahtzee-style dice game")]
struct Cli {
    /// Comma-separated player names; skips the setup screen
    #[arg(long, value_delimiter = ',', env = "SCOREPAD_PLAYERS")]
    players: Option<Vec<String>>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let state = match cli.players {
        Some(ref names) => {
            let action = setup_command(names).map_err(|e| format!("--players: {e}"))?;
            let state = apply(&GameState::default(), &action);
            tracing::info!(players = state.players.len(), "game started from the command line");
            state
        }
        None => GameState::default(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::with_state(state, stdin.lock(), stdout.lock());
    session.run()?;

    Ok(())
}
