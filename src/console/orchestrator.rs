//! Game orchestration between players.

use super::Console;
use super::players::Player;
use crate::games::tictactoe::{Game, Mark, Outcome, rules};
use anyhow::{Context, Result};
use tracing::{debug, info, instrument};

/// Orchestrates gameplay between two players on one shared game.
pub struct Orchestrator {
    game: Game,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    human: Option<Mark>,
    empty_glyph: char,
}

impl Orchestrator {
    /// Creates an orchestrator with no human seat.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>) -> Self {
        Self {
            game: Game::new(),
            player_x,
            player_o,
            human: None,
            empty_glyph: '-',
        }
    }

    /// Marks which side the human plays, for the banner and end messages.
    pub fn with_human(mut self, mark: Mark) -> Self {
        self.human = Some(mark);
        self
    }

    /// Sets the glyph drawn for empty cells.
    pub fn with_empty_glyph(mut self, glyph: char) -> Self {
        self.empty_glyph = glyph;
        self
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs one game to completion and returns how it ended.
    #[instrument(skip_all, fields(human = ?self.human))]
    pub fn run(&mut self, console: &mut Console<'_>) -> Result<Outcome> {
        info!("Starting game orchestration");
        self.announce(console)?;
        self.show_board(console)?;

        while !self.game.is_over() {
            let mark = self.game.to_move();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            debug!(player = %player.name(), %mark, "Waiting for move");
            let mv = player.choose_move(&mut self.game, console)?;
            self.game
                .place(mv)
                .with_context(|| format!("{} chose an illegal move", player.name()))?;

            self.show_board(console)?;

            for mark in [Mark::O, Mark::X] {
                if rules::winner(self.game.board(), mark) {
                    info!(
                        winner = %mark,
                        line = ?rules::winning_line(self.game.board(), mark),
                        "Game won"
                    );
                    console.say(self.victory_message(mark))?;
                    return Ok(Outcome::Won(mark));
                }
            }
        }

        info!("Game drawn");
        console.say("It's a draw!")?;
        Ok(Outcome::Draw)
    }

    /// Clears the board so the same players can start again.
    pub fn restart(&mut self) {
        self.game.reset();
    }

    fn announce(&self, console: &mut Console<'_>) -> Result<()> {
        console.say("Welcome to Tic-Tac-Toe!")?;
        if let Some(human) = self.human {
            console.say(format!(
                "You are '{}' and the computer is '{}'.",
                human,
                human.opponent()
            ))?;
        }
        Ok(())
    }

    fn show_board(&self, console: &mut Console<'_>) -> Result<()> {
        console.say(self.game.board().display_with(self.empty_glyph))?;
        console.say("")?;
        Ok(())
    }

    fn victory_message(&self, winner: Mark) -> String {
        match self.human {
            Some(human) if human == winner => "Congratulations! You win!".to_string(),
            Some(_) => "Computer wins!".to_string(),
            None => format!("{} wins!", winner),
        }
    }
}
