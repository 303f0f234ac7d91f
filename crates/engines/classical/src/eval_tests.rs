use super::*;
use chess_core::{Piece, Square};

fn s(row: i8, col: i8) -> Square {
    Square::new(row, col).unwrap()
}

#[test]
fn test_evaluate_board() {
    // A knight for player 1 against a bishop for player 2.
    let mut game = GameState::empty();
    game.place_piece(Piece::new(PieceKind::Knight, Player::Player1, s(3, 4)));
    game.place_piece(Piece::new(PieceKind::Bishop, Player::Player2, s(2, 5)));

    assert_eq!(evaluate_board(&game, Player::Player1), 0);
}

#[test]
fn test_empty_and_start_positions_are_level() {
    assert_eq!(evaluate_board(&GameState::empty(), Player::Player1), 0);
    assert_eq!(evaluate_board(&GameState::new(), Player::Player1), 0);
    assert_eq!(evaluate_board(&GameState::new(), Player::Player2), 0);
}

#[test]
fn test_sign_follows_perspective() {
    let mut game = GameState::new();
    game.remove_piece(s(7, 4)); // player 2's queen
    assert_eq!(evaluate_board(&game, Player::Player1), 900);
    assert_eq!(evaluate_board(&game, Player::Player2), -900);
}

#[test]
fn test_evaluation_does_not_mutate_and_is_deterministic() {
    let mut game = GameState::new();
    game.move_piece(s(1, 4), s(3, 4), false).unwrap();
    let before = game.board().clone();
    let first = evaluate_board(&game, Player::Player2);
    let second = evaluate_board(&game, Player::Player2);
    assert_eq!(first, second);
    assert_eq!(game.board(), &before);
}

#[test]
fn test_kings_carry_no_material() {
    let mut game = GameState::empty();
    game.place_piece(Piece::new(PieceKind::King, Player::Player1, s(0, 3)));
    game.place_piece(Piece::new(PieceKind::Rook, Player::Player1, s(0, 0)));
    assert_eq!(evaluate_board(&game, Player::Player1), piece_value(PieceKind::Rook));
}
