//! Hexapawn rules.

use crate::core::{Board, Cell, Glyphs, Side, COLS, ROWS};
use crate::error::MoveError;
use crate::rules::{EndReason, GameResult, RulesEngine};

/// A pawn move from one square to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HexapawnMove {
    pub from_row: usize,
    pub from_col: usize,
    pub to_row: usize,
    pub to_col: usize,
}

impl HexapawnMove {
    #[must_use]
    pub const fn new(from_row: usize, from_col: usize, to_row: usize, to_col: usize) -> Self {
        Self {
            from_row,
            from_col,
            to_row,
            to_col,
        }
    }

    /// Whether the move changes column (a capture, when legal).
    #[must_use]
    pub const fn is_diagonal(&self) -> bool {
        self.from_col != self.to_col
    }
}

impl std::fmt::Display for HexapawnMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{} -> {},{}",
            self.from_row, self.from_col, self.to_row, self.to_col
        )
    }
}

/// Hexapawn rules engine.
///
/// The human's pawns start on row 0 and advance toward row 2; the computer's
/// start on row 2 and advance toward row 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct Hexapawn;

impl Hexapawn {
    pub fn new() -> Self {
        Self
    }

    /// Row a side's pawns start on.
    #[must_use]
    pub const fn home_row(side: Side) -> usize {
        match side {
            Side::Player => 0,
            Side::Opponent => ROWS - 1,
        }
    }

    /// Row a side must reach to win: the opponent's home row.
    #[must_use]
    pub const fn goal_row(side: Side) -> usize {
        Self::home_row(side.other())
    }

    /// The row one step forward from `row` for `side`, if it is on the board.
    #[must_use]
    pub fn step_row(row: usize, side: Side) -> Option<usize> {
        match side {
            Side::Player => (row + 1 < ROWS).then_some(row + 1),
            Side::Opponent => row.checked_sub(1),
        }
    }

    /// Whether `side` has no legal move.
    #[must_use]
    pub fn has_no_moves(&self, board: &Board, side: Side) -> bool {
        self.legal_moves(board, side).is_empty()
    }

    /// Decide the game after `mover` has moved.
    ///
    /// The mover wins by reaching its goal row, or by leaving the other side
    /// without a move. Hexapawn has no draws.
    #[must_use]
    pub fn outcome_after(&self, board: &Board, mover: Side) -> Option<(GameResult, EndReason)> {
        if self.has_won(board, mover) {
            Some((GameResult::Winner(mover), EndReason::GoalRow))
        } else if self.has_no_moves(board, mover.other()) {
            Some((GameResult::Winner(mover), EndReason::Stalemate))
        } else {
            None
        }
    }
}

impl RulesEngine for Hexapawn {
    type Move = HexapawnMove;

    fn name(&self) -> &'static str {
        "hexapawn"
    }

    fn glyphs(&self) -> &'static Glyphs {
        &Glyphs::HEXAPAWN
    }

    fn initial_board(&self) -> Board {
        let mut board = Board::new();
        for col in 0..COLS {
            board.set(Self::home_row(Side::Player), col, Cell::Player);
            board.set(Self::home_row(Side::Opponent), col, Cell::Opponent);
        }
        board
    }

    fn legal_moves(&self, board: &Board, side: Side) -> Vec<HexapawnMove> {
        let mine = side.mark();
        let theirs = side.other().mark();
        let mut moves = Vec::new();

        for row in 0..ROWS {
            for col in 0..COLS {
                if board.get(row, col) != mine {
                    continue;
                }
                let Some(next) = Self::step_row(row, side) else {
                    continue;
                };

                if board.get(next, col).is_empty() {
                    moves.push(HexapawnMove::new(row, col, next, col));
                }
                if col > 0 && board.get(next, col - 1) == theirs {
                    moves.push(HexapawnMove::new(row, col, next, col - 1));
                }
                if col + 1 < COLS && board.get(next, col + 1) == theirs {
                    moves.push(HexapawnMove::new(row, col, next, col + 1));
                }
            }
        }

        moves
    }

    fn check_move(&self, board: &Board, mv: &HexapawnMove, side: Side) -> Result<(), MoveError> {
        let from = board.try_get(mv.from_row, mv.from_col).ok_or(MoveError::OutOfBounds {
            row: mv.from_row,
            col: mv.from_col,
        })?;
        let to = board.try_get(mv.to_row, mv.to_col).ok_or(MoveError::OutOfBounds {
            row: mv.to_row,
            col: mv.to_col,
        })?;

        if from != side.mark() {
            return Err(MoveError::NotOwnPiece {
                side,
                row: mv.from_row,
                col: mv.from_col,
            });
        }
        if Self::step_row(mv.from_row, side) != Some(mv.to_row) {
            return Err(MoveError::IllegalStep);
        }

        let occupied = MoveError::Occupied {
            row: mv.to_row,
            col: mv.to_col,
        };
        match mv.from_col.abs_diff(mv.to_col) {
            0 if to.is_empty() => Ok(()),
            0 => Err(occupied),
            1 if to == side.other().mark() => Ok(()),
            1 if to == side.mark() => Err(occupied),
            _ => Err(MoveError::IllegalStep),
        }
    }

    fn apply_move(&self, board: &mut Board, mv: &HexapawnMove, side: Side) {
        debug_assert!(self.is_legal(board, mv, side), "illegal move {mv} for {side}");
        board.set(mv.to_row, mv.to_col, side.mark());
        board.set(mv.from_row, mv.from_col, Cell::Empty);
    }

    fn has_won(&self, board: &Board, side: Side) -> bool {
        board
            .row(Self::goal_row(side))
            .iter()
            .any(|&cell| cell == side.mark())
    }
}
