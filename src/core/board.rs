//! The 3×3 board shared by both games, and its state-key encoding.
//!
//! ## Board
//!
//! A fixed grid of [`Cell`]s stored row-major. Both games use the same
//! geometry; only the initial configuration and the rules differ.
//!
//! ## State keys
//!
//! A [`StateKey`] is the board's cells in row-major order, one glyph byte per
//! cell. Two boards with the same cells always produce byte-identical keys.
//! The key carries nothing else (no side to move, no history), so the move
//! memory must only ever be consulted with the board in the same phase.
//!
//! ```
//! use adaptive_games::core::{Board, Cell, Glyphs};
//!
//! let mut board = Board::new();
//! board.set(1, 1, Cell::Opponent);
//! board.set(2, 2, Cell::Player);
//! assert_eq!(board.state_key(&Glyphs::TICTACTOE).as_str(), "....O...X");
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::player::Side;
use crate::error::BoardParseError;

/// Number of rows.
pub const ROWS: usize = 3;
/// Number of columns.
pub const COLS: usize = 3;
/// Number of cells.
pub const CELLS: usize = ROWS * COLS;

/// Contents of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    /// Holds a human mark.
    Player,
    /// Holds a computer mark.
    Opponent,
}

impl Cell {
    /// The side owning this cell, if any.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Player => Some(Side::Player),
            Cell::Opponent => Some(Side::Opponent),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Row-major index of `(row, col)`.
#[must_use]
pub const fn index(row: usize, col: usize) -> usize {
    row * COLS + col
}

/// `(row, col)` of a row-major index.
#[must_use]
pub const fn coords(index: usize) -> (usize, usize) {
    (index / COLS, index % COLS)
}

/// Whether `(row, col)` lies on the board.
#[must_use]
pub const fn in_bounds(row: usize, col: usize) -> bool {
    row < ROWS && col < COLS
}

/// Per-game glyph set used for state keys and rendering.
///
/// Glyphs must be ASCII so that a key is exactly one byte per cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub empty: u8,
    pub player: u8,
    pub opponent: u8,
}

impl Glyphs {
    /// Hexapawn pawns: `P` for the human, `A` for the computer.
    pub const HEXAPAWN: Glyphs = Glyphs {
        empty: b'.',
        player: b'P',
        opponent: b'A',
    };

    /// TicTacToe marks: `X` for the human, `O` for the computer.
    pub const TICTACTOE: Glyphs = Glyphs {
        empty: b'.',
        player: b'X',
        opponent: b'O',
    };

    /// Glyph byte for a cell.
    #[must_use]
    pub const fn glyph(&self, cell: Cell) -> u8 {
        match cell {
            Cell::Empty => self.empty,
            Cell::Player => self.player,
            Cell::Opponent => self.opponent,
        }
    }

    /// Cell for a glyph byte, if it belongs to this set.
    #[must_use]
    pub fn cell(&self, glyph: u8) -> Option<Cell> {
        if glyph == self.empty {
            Some(Cell::Empty)
        } else if glyph == self.player {
            Some(Cell::Player)
        } else if glyph == self.opponent {
            Some(Cell::Opponent)
        } else {
            None
        }
    }
}

/// A 3×3 game board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board from row-major cells.
    #[must_use]
    pub const fn from_cells(cells: [Cell; CELLS]) -> Self {
        Self { cells }
    }

    /// Build a board from a glyph string such as `"PPP...AAA"`.
    ///
    /// Whitespace is ignored so rows may be written on separate lines.
    pub fn from_glyphs(text: &str, glyphs: &Glyphs) -> Result<Self, BoardParseError> {
        let bytes: Vec<u8> = text.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
        if bytes.len() != CELLS {
            return Err(BoardParseError::Length(bytes.len()));
        }

        let mut cells = [Cell::Empty; CELLS];
        for (cell, &glyph) in cells.iter_mut().zip(&bytes) {
            *cell = glyphs
                .cell(glyph)
                .ok_or(BoardParseError::UnknownGlyph(char::from(glyph)))?;
        }
        Ok(Self { cells })
    }

    /// Cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are off the board.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(in_bounds(row, col), "({row}, {col}) is off the board");
        self.cells[index(row, col)]
    }

    /// Cell at `(row, col)`, or `None` off the board.
    #[must_use]
    pub fn try_get(&self, row: usize, col: usize) -> Option<Cell> {
        in_bounds(row, col).then(|| self.cells[index(row, col)])
    }

    /// Cell at a row-major index.
    #[must_use]
    pub fn at(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Set the cell at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        assert!(in_bounds(row, col), "({row}, {col}) is off the board");
        self.cells[index(row, col)] = cell;
    }

    /// Set the cell at a row-major index.
    pub fn set_at(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    /// All cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// One row of cells.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[index(row, 0)..index(row, 0) + COLS]
    }

    /// Number of cells holding `cell`.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Row-major indices of the empty cells, ascending.
    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| i)
    }

    /// Whether every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Encode the board as a state key with the given glyphs.
    #[must_use]
    pub fn state_key(&self, glyphs: &Glyphs) -> StateKey {
        let mut bytes = [0u8; CELLS];
        for (byte, &cell) in bytes.iter_mut().zip(&self.cells) {
            *byte = glyphs.glyph(cell);
        }
        StateKey(bytes)
    }
}

/// Canonical encoding of a board's cells, used to index the move memory.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateKey([u8; CELLS]);

impl StateKey {
    /// Raw key bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; CELLS] {
        &self.0
    }

    /// The key as text. Keys are always ASCII.
    #[must_use]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or("?????????")
    }
}

impl FromStr for StateKey {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(c) = s.chars().find(|c| !c.is_ascii()) {
            return Err(BoardParseError::UnknownGlyph(c));
        }
        let bytes: [u8; CELLS] = s
            .as_bytes()
            .try_into()
            .map_err(|_| BoardParseError::Length(s.len()))?;
        Ok(StateKey(bytes))
    }
}

impl std::fmt::Display for StateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for StateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "StateKey({:?})", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.count(Cell::Empty), CELLS);
        assert!(!board.is_full());
        assert_eq!(board.empty_indices().count(), CELLS);
    }

    #[test]
    fn test_index_coords_roundtrip() {
        for i in 0..CELLS {
            let (row, col) = coords(i);
            assert_eq!(index(row, col), i);
        }
        assert_eq!(coords(5), (1, 2));
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new();
        board.set(2, 1, Cell::Player);
        assert_eq!(board.get(2, 1), Cell::Player);
        assert_eq!(board.at(7), Cell::Player);
        assert_eq!(board.try_get(3, 0), None);
        assert_eq!(board.row(2), &[Cell::Empty, Cell::Player, Cell::Empty]);
    }

    #[test]
    fn test_state_key_is_row_major() {
        let board = Board::from_glyphs("PPP ... AAA", &Glyphs::HEXAPAWN).unwrap();
        assert_eq!(board.state_key(&Glyphs::HEXAPAWN).as_str(), "PPP...AAA");
        assert_eq!(board.state_key(&Glyphs::TICTACTOE).as_str(), "XXX...OOO");
    }

    #[test]
    fn test_identical_boards_identical_keys() {
        let mut a = Board::new();
        let mut b = Board::new();
        a.set(0, 0, Cell::Player);
        a.set(1, 2, Cell::Opponent);
        b.set(1, 2, Cell::Opponent);
        b.set(0, 0, Cell::Player);
        assert_eq!(
            a.state_key(&Glyphs::TICTACTOE).as_bytes(),
            b.state_key(&Glyphs::TICTACTOE).as_bytes()
        );
    }

    #[test]
    fn test_from_glyphs_errors() {
        assert_eq!(
            Board::from_glyphs("PP", &Glyphs::HEXAPAWN),
            Err(BoardParseError::Length(2))
        );
        assert_eq!(
            Board::from_glyphs("PPP...AAX", &Glyphs::HEXAPAWN),
            Err(BoardParseError::UnknownGlyph('X'))
        );
    }

    #[test]
    fn test_state_key_parse() {
        let key: StateKey = "....O...X".parse().unwrap();
        assert_eq!(key.to_string(), "....O...X");
        assert_eq!(format!("{key:?}"), "StateKey(\"....O...X\")");
        assert!("....".parse::<StateKey>().is_err());
    }
}
