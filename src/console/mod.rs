//! Text frontend over any reader/writer pair (stdin/stdout in the binary).
//!
//! Malformed input is handled here by asking again; it never reaches a
//! session. Everything else is formatting of [`GameEvent`]s.

pub mod input;
mod menu;

pub use menu::run_menu;

use std::io::{BufRead, Write};

use crate::core::{Board, Glyphs, Side, ROWS};
use crate::error::{InputError, SessionError};
use crate::games::{HexapawnMove, Placement};
use crate::learning::LearningReport;
use crate::rules::{EndReason, GameResult};
use crate::session::{Frontend, GameEvent};

use input::{is_yes, parse_hexapawn_move, parse_placement};

/// Line-oriented console.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write a line.
    pub fn say(&mut self, text: &str) -> Result<(), SessionError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Write `text` without a newline and read the answer.
    ///
    /// End of input is reported as [`SessionError::InputClosed`].
    pub fn prompt(&mut self, text: &str) -> Result<String, SessionError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn print_board(&mut self, board: &Board, glyphs: &Glyphs) -> Result<(), SessionError> {
        writeln!(self.output)?;
        for row in 0..ROWS {
            let line: Vec<String> = board
                .row(row)
                .iter()
                .map(|&cell| char::from(glyphs.glyph(cell)).to_string())
                .collect();
            writeln!(self.output, "{} ", line.join(" "))?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    fn print_game_over(&mut self, result: GameResult, reason: EndReason) -> Result<(), SessionError> {
        let text = match (result, reason) {
            (GameResult::Winner(Side::Player), EndReason::Forfeit) => {
                "AI has no good moves. Player wins!"
            }
            (GameResult::Winner(Side::Player), _) => "Player wins!",
            (GameResult::Winner(Side::Opponent), _) => "AI wins!",
            (GameResult::Draw, _) => "It's a draw!",
        };
        self.say(text)
    }

    fn print_learning(&mut self, report: LearningReport) -> Result<(), SessionError> {
        let text = match report {
            LearningReport::Pruned { .. } => "AI has learned from loss and adjusted its strategy.",
            LearningReport::Kept(GameResult::Draw) => {
                "Game ended in a draw. AI keeps its current knowledge."
            }
            LearningReport::Kept(_) => "AI wins and retains its strategy.",
            LearningReport::Observed(_) => "(The AI notes the result but keeps its strategy.)",
        };
        self.say(text)
    }

    fn print_input_error(&mut self, error: &InputError) -> Result<(), SessionError> {
        match error {
            InputError::TokenCount { .. } => self.say("Invalid format, try again."),
            InputError::NotNumeric(_) => self.say("Invalid input, try again."),
        }
    }
}

impl<R: BufRead, W: Write> Frontend<HexapawnMove> for Console<R, W> {
    fn request_move(&mut self, _board: &Board) -> Result<HexapawnMove, SessionError> {
        loop {
            let line = self.prompt("Your move (format: fromRow fromCol toRow toCol): ")?;
            match parse_hexapawn_move(&line) {
                Ok(mv) => return Ok(mv),
                Err(error) => self.print_input_error(&error)?,
            }
        }
    }

    fn report(&mut self, event: GameEvent<HexapawnMove>) -> Result<(), SessionError> {
        match event {
            GameEvent::Started | GameEvent::Moved { side: Side::Player, .. } => Ok(()),
            GameEvent::Board(board) => self.print_board(&board, &Glyphs::HEXAPAWN),
            GameEvent::Moved { side: Side::Opponent, mv } => self.say(&format!(
                "AI moved from {},{} to {},{}",
                mv.from_row, mv.from_col, mv.to_row, mv.to_col
            )),
            GameEvent::IllegalMove { .. } => self.say("Invalid move, try again."),
            GameEvent::GameOver { result, reason } => self.print_game_over(result, reason),
            GameEvent::Learned(report) => self.print_learning(report),
        }
    }

    fn request_replay(&mut self) -> Result<bool, SessionError> {
        Ok(is_yes(&self.prompt("Play Hexapawn again? (yes/no): ")?))
    }
}

impl<R: BufRead, W: Write> Frontend<Placement> for Console<R, W> {
    fn request_move(&mut self, _board: &Board) -> Result<Placement, SessionError> {
        loop {
            let line = self.prompt("Enter your move (row col, 0-based): ")?;
            match parse_placement(&line) {
                Ok(placement) => return Ok(placement),
                Err(_) => self.say("Invalid input.")?,
            }
        }
    }

    fn report(&mut self, event: GameEvent<Placement>) -> Result<(), SessionError> {
        match event {
            GameEvent::Started | GameEvent::Moved { side: Side::Player, .. } => Ok(()),
            GameEvent::Board(board) => self.print_board(&board, &Glyphs::TICTACTOE),
            GameEvent::Moved { side: Side::Opponent, mv } => {
                self.say(&format!("AI moves at ({}, {})", mv.row, mv.col))
            }
            GameEvent::IllegalMove { .. } => self.say("Invalid move, try again."),
            GameEvent::GameOver { result, reason } => self.print_game_over(result, reason),
            GameEvent::Learned(report) => self.print_learning(report),
        }
    }

    fn request_replay(&mut self) -> Result<bool, SessionError> {
        Ok(is_yes(&self.prompt("Play Tic Tac Toe again? (y/n): ")?))
    }
}
