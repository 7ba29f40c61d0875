//! Text console front end.
//!
//! The console owns no game logic. It reads lines, prints prompts and
//! boards, and hands every decision to the engine in
//! [`crate::games::tictactoe`].

mod orchestrator;
pub mod players;

pub use orchestrator::Orchestrator;

use std::io::{self, BufRead, Write};
use tracing::{instrument, trace};

/// Line-oriented terminal I/O shared by the players and the game loop.
///
/// Input and output are borrowed trait objects so the same loop runs
/// against stdin/stdout or in-memory buffers.
pub struct Console<'a> {
    input: &'a mut dyn BufRead,
    output: &'a mut dyn Write,
}

impl<'a> Console<'a> {
    /// Creates a console over the given reader and writer.
    pub fn new(input: &'a mut dyn BufRead, output: &'a mut dyn Write) -> Self {
        Self { input, output }
    }

    /// Writes one line of text.
    pub fn say(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", text.as_ref())
    }

    /// Writes `prompt` without a newline and reads the reply.
    ///
    /// Returns `None` once input is exhausted.
    #[instrument(skip(self))]
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            trace!("Input exhausted");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Asks whether to start another game. End of input counts as no.
    pub fn confirm_play_again(&mut self) -> io::Result<bool> {
        let answer = self.ask("Play again? (y/n): ")?;
        Ok(matches!(
            answer.as_deref().map(str::to_ascii_lowercase).as_deref(),
            Some("y" | "yes")
        ))
    }
}
