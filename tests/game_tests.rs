//! Rules-level playthroughs of both games.

use adaptive_games::core::{Board, Cell, Glyphs, Side};
use adaptive_games::error::MoveError;
use adaptive_games::games::{Hexapawn, HexapawnMove, Placement, TicTacToe};
use adaptive_games::rules::{EndReason, GameResult, RulesEngine};

fn hexapawn_board(text: &str) -> Board {
    Board::from_glyphs(text, &Glyphs::HEXAPAWN).unwrap()
}

fn tictactoe_board(text: &str) -> Board {
    Board::from_glyphs(text, &Glyphs::TICTACTOE).unwrap()
}

#[test]
fn test_hexapawn_opening_forward_move() {
    let game = Hexapawn::new();
    let mut board = game.initial_board();

    let mv = HexapawnMove::new(0, 1, 1, 1);
    game.try_apply(&mut board, &mv, Side::Player).unwrap();

    assert_eq!(board, hexapawn_board("P.P.P.AAA"));
    assert!(!game.has_won(&board, Side::Player));
    assert!(!game.has_no_moves(&board, Side::Opponent));
    assert_eq!(game.outcome_after(&board, Side::Player), None);
}

#[test]
fn test_hexapawn_rejected_moves_leave_board_untouched() {
    let game = Hexapawn::new();
    let mut board = game.initial_board();
    let before = board;

    let cases = [
        (HexapawnMove::new(0, 0, 2, 0), MoveError::IllegalStep),
        (HexapawnMove::new(0, 0, 1, 1), MoveError::IllegalStep),
        (
            HexapawnMove::new(1, 0, 2, 0),
            MoveError::NotOwnPiece {
                side: Side::Player,
                row: 1,
                col: 0,
            },
        ),
        (
            HexapawnMove::new(0, 2, 1, 3),
            MoveError::OutOfBounds { row: 1, col: 3 },
        ),
    ];

    for (mv, expected) in cases {
        assert_eq!(game.try_apply(&mut board, &mv, Side::Player), Err(expected));
        assert_eq!(board, before);
    }
}

#[test]
fn test_hexapawn_capture_into_goal_row_wins() {
    let game = Hexapawn::new();
    let mut board = hexapawn_board("P.PAP..AA");

    let capture = HexapawnMove::new(1, 1, 2, 2);
    assert!(game.legal_moves(&board, Side::Player).contains(&capture));

    game.apply_move(&mut board, &capture, Side::Player);
    assert_eq!(board.get(2, 2), Cell::Player);
    assert_eq!(
        game.outcome_after(&board, Side::Player),
        Some((GameResult::Winner(Side::Player), EndReason::GoalRow))
    );
}

#[test]
fn test_hexapawn_blocked_side_loses() {
    let game = Hexapawn::new();
    // Every pawn faces another pawn head on and nothing can be captured.
    let board = hexapawn_board("P.PA.A...");

    assert!(game.has_no_moves(&board, Side::Opponent));
    assert_eq!(
        game.outcome_after(&board, Side::Player),
        Some((GameResult::Winner(Side::Player), EndReason::Stalemate))
    );
}

#[test]
fn test_tictactoe_full_game_to_a_win() {
    let game = TicTacToe::new();
    let mut board = game.initial_board();

    let script = [
        (Side::Player, Placement::new(1, 1)),
        (Side::Opponent, Placement::new(0, 0)),
        (Side::Player, Placement::new(0, 2)),
        (Side::Opponent, Placement::new(0, 1)),
    ];
    for (side, mv) in script {
        game.try_apply(&mut board, &mv, side).unwrap();
        assert_eq!(game.outcome_after(&board, side), None);
    }

    game.try_apply(&mut board, &Placement::new(2, 0), Side::Player)
        .unwrap();
    assert_eq!(board, tictactoe_board("OOX.X.X.."));
    assert_eq!(
        game.outcome_after(&board, Side::Player),
        Some((GameResult::Winner(Side::Player), EndReason::ThreeInRow))
    );
}

#[test]
fn test_tictactoe_last_cell_win_beats_draw() {
    let game = TicTacToe::new();
    let mut board = tictactoe_board("XOXXOOO.X");

    game.apply_move(&mut board, &Placement::new(2, 1), Side::Player);
    assert!(game.is_full(&board));
    assert_eq!(
        game.outcome_after(&board, Side::Player),
        Some((GameResult::Draw, EndReason::BoardFull))
    );

    let mut board = tictactoe_board("XOXXOOO.X");
    game.apply_move(&mut board, &Placement::new(2, 1), Side::Opponent);
    assert_eq!(
        game.outcome_after(&board, Side::Opponent),
        Some((GameResult::Winner(Side::Opponent), EndReason::ThreeInRow))
    );
}

#[test]
fn test_tictactoe_rejects_taken_and_off_board_cells() {
    let game = TicTacToe::new();
    let mut board = tictactoe_board("....X....");

    assert_eq!(
        game.try_apply(&mut board, &Placement::new(1, 1), Side::Opponent),
        Err(MoveError::Occupied { row: 1, col: 1 })
    );
    assert_eq!(
        game.try_apply(&mut board, &Placement::new(0, 3), Side::Opponent),
        Err(MoveError::OutOfBounds { row: 0, col: 3 })
    );
    assert_eq!(board, tictactoe_board("....X...."));
}

#[test]
fn test_state_keys_use_each_games_glyphs() {
    let mut board = Board::new();
    board.set(1, 1, Cell::Opponent);
    board.set(2, 2, Cell::Player);

    assert_eq!(TicTacToe::new().state_key(&board).as_str(), "....O...X");
    assert_eq!(Hexapawn::new().state_key(&board).as_str(), "....A...P");
}
