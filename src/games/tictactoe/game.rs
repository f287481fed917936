//! TicTacToe rules.

use crate::core::board::{coords, in_bounds, index};
use crate::core::{Board, Glyphs, Side, CELLS};
use crate::error::MoveError;
use crate::rules::{EndReason, GameResult, RulesEngine};

/// Placing a mark on one cell.
///
/// Compared by cell; `Placement::from_index(4)` and `Placement::new(1, 1)` are
/// the same move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
}

impl Placement {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Placement on a row-major cell index.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        let (row, col) = coords(index);
        Self { row, col }
    }

    /// Row-major cell index.
    #[must_use]
    pub const fn index(&self) -> usize {
        index(self.row, self.col)
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The eight winning lines as cell indices: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// TicTacToe rules engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct TicTacToe;

impl TicTacToe {
    pub fn new() -> Self {
        Self
    }

    /// Whether no empty cell remains.
    #[must_use]
    pub fn is_full(&self, board: &Board) -> bool {
        board.is_full()
    }

    /// Decide the game after `mover` has placed a mark.
    ///
    /// A win is checked before the full board, so a last mark that completes
    /// a line is a win rather than a draw.
    #[must_use]
    pub fn outcome_after(&self, board: &Board, mover: Side) -> Option<(GameResult, EndReason)> {
        if self.has_won(board, mover) {
            Some((GameResult::Winner(mover), EndReason::ThreeInRow))
        } else if self.is_full(board) {
            Some((GameResult::Draw, EndReason::BoardFull))
        } else {
            None
        }
    }
}

impl RulesEngine for TicTacToe {
    type Move = Placement;

    fn name(&self) -> &'static str {
        "tictactoe"
    }

    fn glyphs(&self) -> &'static Glyphs {
        &Glyphs::TICTACTOE
    }

    fn initial_board(&self) -> Board {
        Board::new()
    }

    /// Empty cells in ascending index order. Either side may fill any of them.
    fn legal_moves(&self, board: &Board, _side: Side) -> Vec<Placement> {
        board.empty_indices().map(Placement::from_index).collect()
    }

    fn check_move(&self, board: &Board, mv: &Placement, _side: Side) -> Result<(), MoveError> {
        if !in_bounds(mv.row, mv.col) {
            return Err(MoveError::OutOfBounds {
                row: mv.row,
                col: mv.col,
            });
        }
        if !board.get(mv.row, mv.col).is_empty() {
            return Err(MoveError::Occupied {
                row: mv.row,
                col: mv.col,
            });
        }
        Ok(())
    }

    fn apply_move(&self, board: &mut Board, mv: &Placement, side: Side) {
        debug_assert!(mv.index() < CELLS && board.at(mv.index()).is_empty());
        board.set(mv.row, mv.col, side.mark());
    }

    fn has_won(&self, board: &Board, side: Side) -> bool {
        let mark = side.mark();
        LINES
            .iter()
            .any(|line| line.iter().all(|&i| board.at(i) == mark))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;

    fn board(text: &str) -> Board {
        Board::from_glyphs(text, &Glyphs::TICTACTOE).unwrap()
    }

    #[test]
    fn test_placement_index() {
        assert_eq!(Placement::from_index(4), Placement::new(1, 1));
        assert_eq!(Placement::new(2, 0).index(), 6);
        assert_eq!(Placement::new(0, 2).to_string(), "(0, 2)");
    }

    #[test]
    fn test_legal_moves_ascending_empty_cells() {
        let game = TicTacToe::new();
        let b = board("X.. .O. ..X");

        let moves: Vec<usize> = game
            .legal_moves(&b, Side::Opponent)
            .iter()
            .map(Placement::index)
            .collect();
        assert_eq!(moves, vec![1, 2, 3, 5, 6, 7]);
    }

    #[test]
    fn test_check_move() {
        let game = TicTacToe::new();
        let b = board("X.. ... ...");

        assert!(game.is_legal(&b, &Placement::new(1, 1), Side::Player));
        assert_eq!(
            game.check_move(&b, &Placement::new(0, 0), Side::Opponent),
            Err(MoveError::Occupied { row: 0, col: 0 })
        );
        assert_eq!(
            game.check_move(&b, &Placement::new(0, 3), Side::Player),
            Err(MoveError::OutOfBounds { row: 0, col: 3 })
        );
    }

    #[test]
    fn test_no_winner_empty_board() {
        let game = TicTacToe::new();
        let b = Board::new();
        assert!(!game.has_won(&b, Side::Player));
        assert!(!game.has_won(&b, Side::Opponent));
        assert!(!game.is_full(&b));
    }

    #[test]
    fn test_winner_top_row() {
        let game = TicTacToe::new();
        let b = board("XXX OO. ...");
        assert!(game.has_won(&b, Side::Player));
        assert!(!game.has_won(&b, Side::Opponent));
    }

    #[test]
    fn test_winner_diagonal() {
        let game = TicTacToe::new();
        let b = board("X.O XO. O.X");
        assert!(game.has_won(&b, Side::Opponent));
    }

    #[test]
    fn test_full_board_draw() {
        let game = TicTacToe::new();
        let b = board("XOX XOO OXX");

        assert!(game.is_full(&b));
        assert_eq!(
            game.outcome_after(&b, Side::Player),
            Some((GameResult::Draw, EndReason::BoardFull))
        );
    }

    #[test]
    fn test_win_beats_full_board() {
        let game = TicTacToe::new();
        let b = board("XOX OXO OXX");

        assert!(game.is_full(&b));
        assert_eq!(
            game.outcome_after(&b, Side::Player),
            Some((GameResult::Winner(Side::Player), EndReason::ThreeInRow))
        );
    }

    #[test]
    fn test_apply_move() {
        let game = TicTacToe::new();
        let mut b = Board::new();
        game.try_apply(&mut b, &Placement::from_index(4), Side::Opponent)
            .unwrap();

        assert_eq!(b.get(1, 1), Cell::Opponent);
        assert!(game.try_apply(&mut b, &Placement::from_index(4), Side::Player).is_err());
        assert_eq!(b.get(1, 1), Cell::Opponent);
    }
}
