//! Tests for the console game loop, driven by scripted input.

use anyhow::Result;
use minimax_tictactoe::{
    Console, ConsolePlayer, Game, HumanPlayer, Mark, MinimaxPlayer, Move, Orchestrator, Outcome,
};
use std::io::Cursor;

/// Row/column pairs for every cell in row-major order, twice over, so a
/// human "player" always finds an empty cell by retrying.
fn sweep_script() -> String {
    let mut script = String::new();
    for _ in 0..2 {
        for index in 0..9 {
            script.push_str(&format!("{}\n{}\n", index / 3, index % 3));
        }
    }
    script
}

fn run(orchestrator: &mut Orchestrator, script: &str) -> (Result<Outcome>, String) {
    let mut input = Cursor::new(script.to_string());
    let mut output = Vec::new();
    let mut console = Console::new(&mut input, &mut output);
    let result = orchestrator.run(&mut console);
    drop(console);
    (result, String::from_utf8(output).expect("utf-8 output"))
}

/// Plays a fixed list of moves regardless of the position.
struct ScriptedPlayer {
    moves: Vec<Move>,
}

impl ConsolePlayer for ScriptedPlayer {
    fn choose_move(&mut self, _game: &mut Game, _console: &mut Console<'_>) -> Result<Move> {
        Ok(self.moves.remove(0))
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}

#[test]
fn test_human_as_o_never_beats_computer() {
    let mut orchestrator = Orchestrator::new(
        Box::new(MinimaxPlayer::new("Computer")),
        Box::new(HumanPlayer::new("You")),
    )
    .with_human(Mark::O);

    let (result, output) = run(&mut orchestrator, &sweep_script());
    let outcome = result.expect("game completes");

    assert_ne!(outcome, Outcome::Won(Mark::O));
    assert!(output.starts_with("Welcome to Tic-Tac-Toe!\nYou are 'O' and the computer is 'X'.\n"));
    assert!(output.contains("Computer's turn:"));
    assert!(output.contains("Your turn! Enter row and column (0, 1, or 2)."));
    // The computer opens in the top-left corner, so the human's first try is taken.
    assert!(output.contains("Cell is already occupied! Try again."));
    assert!(output.contains("Computer wins!") || output.contains("It's a draw!"));
}

#[test]
fn test_human_as_x_with_custom_glyph() {
    let mut orchestrator = Orchestrator::new(
        Box::new(HumanPlayer::new("You")),
        Box::new(MinimaxPlayer::new("Computer")),
    )
    .with_human(Mark::X)
    .with_empty_glyph('.');

    let (result, output) = run(&mut orchestrator, &sweep_script());
    assert_ne!(result.expect("game completes"), Outcome::Won(Mark::X));
    assert!(output.contains("You are 'X' and the computer is 'O'."));
    assert!(output.contains(".|.|.\n-+-+-\n.|.|.\n-+-+-\n.|.|.\n\n"));
    assert!(output.contains("X|.|.\n"));
}

#[test]
fn test_human_win_is_congratulated() {
    let computer = ScriptedPlayer {
        moves: vec![
            Move::new(0, 0).unwrap(),
            Move::new(0, 1).unwrap(),
            Move::new(2, 2).unwrap(),
        ],
    };
    let mut orchestrator =
        Orchestrator::new(Box::new(computer), Box::new(HumanPlayer::new("You"))).with_human(Mark::O);

    let (result, output) = run(&mut orchestrator, "1\n0\n1\n1\n1\n2\n");
    assert_eq!(result.unwrap(), Outcome::Won(Mark::O));
    assert!(output.trim_end().ends_with("Congratulations! You win!"));
    assert_eq!(orchestrator.game().history().len(), 6);
}

#[test]
fn test_computer_self_play_draws() {
    let mut orchestrator = Orchestrator::new(
        Box::new(MinimaxPlayer::new("Computer X")),
        Box::new(MinimaxPlayer::new("Computer O")),
    );

    let (result, output) = run(&mut orchestrator, "");
    assert_eq!(result.unwrap(), Outcome::Draw);
    assert!(output.trim_end().ends_with("It's a draw!"));
    assert!(!output.contains("You are"));
    assert_eq!(output.matches("Computer X's turn:").count(), 5);
    assert_eq!(output.matches("Computer O's turn:").count(), 4);
}

#[test]
fn test_restart_starts_a_fresh_board() {
    let mut orchestrator = Orchestrator::new(
        Box::new(MinimaxPlayer::new("Computer X")),
        Box::new(MinimaxPlayer::new("Computer O")),
    );
    run(&mut orchestrator, "").0.unwrap();
    assert!(orchestrator.game().is_over());

    orchestrator.restart();
    assert!(orchestrator.game().history().is_empty());
    assert_eq!(orchestrator.game().outcome(), Outcome::Ongoing);
}

#[test]
fn test_closed_input_aborts_game() {
    let mut orchestrator = Orchestrator::new(
        Box::new(MinimaxPlayer::new("Computer")),
        Box::new(HumanPlayer::new("You")),
    )
    .with_human(Mark::O);

    let (result, _) = run(&mut orchestrator, "1\n");
    assert!(result.is_err());
}
