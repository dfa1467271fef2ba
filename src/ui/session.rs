//! Interactive session — owns the state and walks the three screens.
//!
//! Reads line commands from any `BufRead` and writes to any `Write`, so
//! tests can drive it with in-memory buffers. All validation goes through
//! `engine::commands`; the session itself never inspects raw input beyond
//! splitting off its own keywords.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::engine::commands::{category_command, score_command, setup_command, MAX_PLAYERS};
use crate::engine::models::{Action, GameState};
use crate::engine::transitions::apply;

use super::render;

enum Flow {
    Continue,
    Quit,
}

pub struct Session<R, W> {
    state: GameState,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::with_state(GameState::default(), input, output)
    }

    /// Start from a prepared state (the `--players` flag skips setup).
    pub fn with_state(state: GameState, input: R, output: W) -> Self {
        Self {
            state,
            input,
            output,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run until the user quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let flow = if !self.state.game_started {
                self.run_setup()?
            } else if self.state.game_ended {
                self.run_results()?
            } else {
                self.run_board()?
            };
            if let Flow::Quit = flow {
                return Ok(());
            }
        }
    }

    /// Collect names until a blank line (or the sheet is full), then start
    /// the game. Rejected lists are reported and collected again; nothing
    /// changes until a list passes.
    fn run_setup(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "{}", render::setup_screen())?;
        loop {
            let mut names: Vec<String> = Vec::new();
            loop {
                if names.len() == MAX_PLAYERS {
                    writeln!(self.output, "The sheet is full ({MAX_PLAYERS} players).")?;
                    break;
                }
                write!(self.output, "Player {}: ", names.len() + 1)?;
                self.output.flush()?;
                let line = match self.read_line()? {
                    Some(line) => line,
                    None => return Ok(Flow::Quit),
                };
                let name = line.trim();
                if name.is_empty() {
                    break;
                }
                names.push(name.to_string());
            }
            match setup_command(&names) {
                Ok(action) => {
                    self.state = apply(&self.state, &action);
                    info!(players = self.state.players.len(), "game started");
                    return Ok(Flow::Continue);
                }
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    fn run_board(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "{}", render::board_screen(&self.state))?;
        write!(self.output, "> ")?;
        self.output.flush()?;
        let line = match self.read_line()? {
            Some(line) => line,
            None => return Ok(Flow::Quit),
        };
        match line.trim() {
            "" => Ok(Flow::Continue),
            "quit" => Ok(Flow::Quit),
            "new" => {
                self.state = apply(&self.state, &Action::Reset);
                info!("game reset");
                Ok(Flow::Continue)
            }
            "table" => {
                self.state = apply(&self.state, &Action::ToggleScoreboard);
                Ok(Flow::Continue)
            }
            code => self.score_entry(code),
        }
    }

    /// Two-step entry like a paper sheet: pick the row, then write the
    /// number. A blank value cancels without touching the card.
    fn score_entry(&mut self, code: &str) -> io::Result<Flow> {
        let category = match category_command(&self.state, code) {
            Ok(category) => category,
            Err(e) => {
                writeln!(self.output, "{e}")?;
                return Ok(Flow::Continue);
            }
        };
        write!(
            self.output,
            "Score for {} ({}): ",
            category.label(),
            category.code()
        )?;
        self.output.flush()?;
        let line = match self.read_line()? {
            Some(line) => line,
            None => return Ok(Flow::Quit),
        };
        let raw = line.trim();
        if raw.is_empty() {
            writeln!(self.output, "Cancelled.")?;
            return Ok(Flow::Continue);
        }
        match score_command(&self.state, category, raw) {
            Ok(action) => {
                debug!(
                    player = %self.state.current_player().name,
                    category = category.code(),
                    value = raw,
                    "score assigned"
                );
                self.state = apply(&self.state, &action);
                if self.state.game_ended {
                    info!("all cards complete, game over");
                }
                // The turn always moves on after a score, ended or not.
                self.state = apply(&self.state, &Action::AdvanceTurn);
                Ok(Flow::Continue)
            }
            Err(e) => {
                writeln!(self.output, "{e}")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn run_results(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "{}", render::results_screen(&self.state))?;
        write!(self.output, "'new' starts another game, 'quit' leaves: ")?;
        self.output.flush()?;
        let line = match self.read_line()? {
            Some(line) => line,
            None => return Ok(Flow::Quit),
        };
        match line.trim() {
            "new" => {
                self.state = apply(&self.state, &Action::Reset);
                info!("game reset");
                Ok(Flow::Continue)
            }
            "quit" => Ok(Flow::Quit),
            _ => Ok(Flow::Continue),
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
