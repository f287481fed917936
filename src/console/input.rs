//! Parsing the human's typed moves.

use crate::error::InputError;
use crate::games::{HexapawnMove, Placement};

/// Parse exactly `N` whitespace-separated coordinates.
fn parse_coords<const N: usize>(line: &str) -> Result<[usize; N], InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != N {
        return Err(InputError::TokenCount {
            expected: N,
            found: tokens.len(),
        });
    }

    let mut coords = [0usize; N];
    for (slot, token) in coords.iter_mut().zip(&tokens) {
        *slot = token
            .parse()
            .map_err(|_| InputError::NotNumeric((*token).to_string()))?;
    }
    Ok(coords)
}

/// Parse `fromRow fromCol toRow toCol`.
///
/// Only the shape is checked; whether the move is legal is up to the rules.
pub fn parse_hexapawn_move(line: &str) -> Result<HexapawnMove, InputError> {
    let [from_row, from_col, to_row, to_col] = parse_coords::<4>(line)?;
    Ok(HexapawnMove::new(from_row, from_col, to_row, to_col))
}

/// Parse `row col`.
pub fn parse_placement(line: &str) -> Result<Placement, InputError> {
    let [row, col] = parse_coords::<2>(line)?;
    Ok(Placement::new(row, col))
}

/// Whether a yes/no answer means yes.
pub fn is_yes(answer: &str) -> bool {
    answer.trim().to_lowercase().starts_with('y')
}
