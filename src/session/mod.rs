//! Game loops: turn order, termination and the frontend boundary.
//!
//! A session owns one game's [`AdaptiveAi`](crate::learning::AdaptiveAi) and
//! runs playthroughs against a [`Frontend`], which supplies the human's moves
//! and receives structured [`GameEvent`]s. Formatting is entirely the
//! frontend's concern.
//!
//! Human moves are validated here, never trusted: an illegal move is reported
//! back as [`GameEvent::IllegalMove`] and the frontend is asked again.

mod hexapawn;
mod hub;
mod tictactoe;

pub use hexapawn::HexapawnSession;
pub use hub::Hub;
pub use tictactoe::TicTacToeSession;

use tracing::debug;

use crate::core::{Board, Side};
use crate::error::{MoveError, SessionError};
use crate::learning::{AdaptiveAi, LearningReport, Picker};
use crate::rules::{EndReason, GameResult, RulesEngine};

/// Facts a session reports to its frontend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent<M> {
    /// A playthrough started.
    Started,
    /// The board after a change.
    Board(Board),
    /// A side made a move.
    Moved { side: Side, mv: M },
    /// The human's move was rejected; another will be requested.
    IllegalMove { mv: M, error: MoveError },
    /// The playthrough ended.
    GameOver { result: GameResult, reason: EndReason },
    /// What the AI did with the result.
    Learned(LearningReport),
}

/// The I/O boundary of a session.
pub trait Frontend<M> {
    /// Ask the human for a move. It will be validated before it is applied.
    fn request_move(&mut self, board: &Board) -> Result<M, SessionError>;

    /// Receive an event.
    fn report(&mut self, event: GameEvent<M>) -> Result<(), SessionError>;

    /// Ask whether to play again. Called once per finished playthrough.
    fn request_replay(&mut self) -> Result<bool, SessionError>;
}

/// Results of the playthroughs in one call to `play`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub player_wins: u32,
    pub ai_wins: u32,
    pub draws: u32,
}

impl Tally {
    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Winner(Side::Player) => self.player_wins += 1,
            GameResult::Winner(Side::Opponent) => self.ai_wins += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    #[must_use]
    pub fn games(&self) -> u32 {
        self.player_wins + self.ai_wins + self.draws
    }
}

/// Ask for human moves until one is legal.
fn request_legal_move<E, F>(
    engine: &E,
    board: &Board,
    frontend: &mut F,
) -> Result<E::Move, SessionError>
where
    E: RulesEngine,
    F: Frontend<E::Move> + ?Sized,
{
    loop {
        let mv = frontend.request_move(board)?;
        match engine.check_move(board, &mv, Side::Player) {
            Ok(()) => return Ok(mv),
            Err(error) => {
                debug!(game = engine.name(), %mv, %error, "rejected human move");
                frontend.report(GameEvent::IllegalMove { mv, error })?;
            }
        }
    }
}

/// Apply a validated move and report it with the new board.
fn play_move<E, F>(
    engine: &E,
    board: &mut Board,
    mv: E::Move,
    side: Side,
    frontend: &mut F,
) -> Result<(), SessionError>
where
    E: RulesEngine,
    F: Frontend<E::Move> + ?Sized,
{
    engine.apply_move(board, &mv, side);
    frontend.report(GameEvent::Moved { side, mv })?;
    frontend.report(GameEvent::Board(*board))
}

/// Report the end of a playthrough and let the AI learn from it.
fn finish_round<E, P, F>(
    ai: &mut AdaptiveAi<E, P>,
    result: GameResult,
    reason: EndReason,
    frontend: &mut F,
) -> Result<GameResult, SessionError>
where
    E: RulesEngine,
    P: Picker,
    F: Frontend<E::Move> + ?Sized,
{
    frontend.report(GameEvent::GameOver { result, reason })?;
    let report = ai.finish_game(result);
    frontend.report(GameEvent::Learned(report))?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally() {
        let mut tally = Tally::default();
        tally.record(GameResult::Winner(Side::Player));
        tally.record(GameResult::Winner(Side::Opponent));
        tally.record(GameResult::Winner(Side::Opponent));
        tally.record(GameResult::Draw);

        assert_eq!(
            tally,
            Tally {
                player_wins: 1,
                ai_wins: 2,
                draws: 1
            }
        );
        assert_eq!(tally.games(), 4);
    }
}
