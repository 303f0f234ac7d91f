use super::*;
use crate::board::CastlingRights;

fn s(row: i8, col: i8) -> Square {
    Square::new(row, col).unwrap()
}

fn put(b: &mut Board, kind: PieceKind, player: Player, row: i8, col: i8) {
    b.place(Piece::new(kind, player, s(row, col)));
}

fn destinations(b: &Board, from: Square) -> Vec<Square> {
    let mut tmp = b.clone();
    let mut moves = Vec::new();
    legal_moves_from(&mut tmp, from, &mut moves);
    moves.into_iter().map(|m| m.to).collect()
}

#[test]
fn test_startpos_moves() {
    let b = Board::startpos();
    let moves = legal_moves(&b);
    // Starting position has 20 legal moves
    assert_eq!(moves.len(), 20);
}

#[test]
fn test_legal_moves_are_idempotent() {
    let b = Board::startpos();
    assert_eq!(legal_moves(&b), legal_moves(&b));
}

#[test]
fn test_pinned_piece_cannot_move() {
    let mut b = Board::empty();
    put(&mut b, PieceKind::King, Player::Player1, 0, 3);
    put(&mut b, PieceKind::Knight, Player::Player1, 1, 3);
    put(&mut b, PieceKind::Rook, Player::Player2, 7, 3);
    put(&mut b, PieceKind::King, Player::Player2, 7, 7);

    let knight = b.piece_at(s(1, 3)).unwrap();
    assert!(!knight.get_valid_moves(&b).is_empty());
    assert!(destinations(&b, s(1, 3)).is_empty());
}

#[test]
fn test_only_blocking_moves_answer_a_check() {
    let mut b = Board::empty();
    put(&mut b, PieceKind::King, Player::Player1, 0, 3);
    put(&mut b, PieceKind::Pawn, Player::Player1, 1, 2);
    put(&mut b, PieceKind::Pawn, Player::Player1, 1, 4);
    put(&mut b, PieceKind::Pawn, Player::Player1, 0, 2);
    put(&mut b, PieceKind::Pawn, Player::Player1, 0, 4);
    put(&mut b, PieceKind::Rook, Player::Player1, 2, 0);
    put(&mut b, PieceKind::Rook, Player::Player2, 7, 3);
    put(&mut b, PieceKind::King, Player::Player2, 7, 7);
    assert!(b.in_check(Player::Player1));

    assert_eq!(destinations(&b, s(2, 0)), vec![s(2, 3)]);
    // The king itself can only step to (1, 3), which the rook still sees.
    assert!(destinations(&b, s(0, 3)).is_empty());
    assert_eq!(legal_moves(&b), vec![Move::new(s(2, 0), s(2, 3))]);
}

#[test]
fn test_king_may_not_step_into_attack() {
    let mut b = Board::empty();
    put(&mut b, PieceKind::King, Player::Player1, 0, 0);
    put(&mut b, PieceKind::Rook, Player::Player2, 7, 1);
    put(&mut b, PieceKind::King, Player::Player2, 7, 7);
    let dests = destinations(&b, s(0, 0));
    assert_eq!(dests, vec![s(1, 0)]);
}

#[test]
fn test_legal_moves_for_player_not_to_move() {
    let b = Board::startpos();
    let mut tmp = b.clone();
    let mut out = Vec::new();
    legal_moves_for(&mut tmp, Player::Player2, &mut out);
    assert_eq!(out.len(), 20);
    assert!(out.iter().all(|m| b.piece_at(m.from).unwrap().player() == Player::Player2));
    assert_eq!(tmp, b);
}

#[test]
fn test_castling_both_sides_when_clear() {
    let mut b = Board::startpos();
    for col in [1, 2, 4, 5, 6] {
        b.remove(s(0, col));
    }
    let dests = destinations(&b, s(0, 3));
    assert!(dests.contains(&s(0, 1)));
    assert!(dests.contains(&s(0, 5)));
}

#[test]
fn test_no_castling_through_attacked_square() {
    let mut b = Board::empty();
    b.set_castling(CastlingRights::ALL);
    put(&mut b, PieceKind::King, Player::Player1, 0, 3);
    put(&mut b, PieceKind::Rook, Player::Player1, 0, 0);
    put(&mut b, PieceKind::Rook, Player::Player1, 0, 7);
    put(&mut b, PieceKind::King, Player::Player2, 7, 7);
    put(&mut b, PieceKind::Rook, Player::Player2, 7, 2);

    let dests = destinations(&b, s(0, 3));
    assert!(!dests.contains(&s(0, 1)));
    assert!(dests.contains(&s(0, 5)));
}

#[test]
fn test_no_castling_out_of_check_or_without_rights() {
    let mut b = Board::empty();
    b.set_castling(CastlingRights::ALL);
    put(&mut b, PieceKind::King, Player::Player1, 0, 3);
    put(&mut b, PieceKind::Rook, Player::Player1, 0, 0);
    put(&mut b, PieceKind::Rook, Player::Player1, 0, 7);
    put(&mut b, PieceKind::King, Player::Player2, 7, 7);
    put(&mut b, PieceKind::Rook, Player::Player2, 6, 3);
    let dests = destinations(&b, s(0, 3));
    assert!(!dests.contains(&s(0, 1)));
    assert!(!dests.contains(&s(0, 5)));

    b.remove(s(6, 3));
    b.set_castling(CastlingRights::NONE);
    let dests = destinations(&b, s(0, 3));
    assert!(!dests.contains(&s(0, 1)));
    assert!(!dests.contains(&s(0, 5)));
}

#[test]
fn test_promotions_expand_to_four_moves() {
    let mut b = Board::empty();
    put(&mut b, PieceKind::King, Player::Player1, 0, 3);
    put(&mut b, PieceKind::King, Player::Player2, 7, 7);
    put(&mut b, PieceKind::Pawn, Player::Player1, 6, 0);
    let mut tmp = b.clone();
    let mut moves = Vec::new();
    legal_moves_from(&mut tmp, s(6, 0), &mut moves);
    assert_eq!(moves.len(), 4);
    for kind in PieceKind::PROMOTIONS {
        assert!(moves.contains(&Move::with_promo(s(6, 0), s(7, 0), kind)));
    }
}

#[test]
fn test_has_legal_move_matches_generation() {
    let b = Board::startpos();
    let mut tmp = b.clone();
    assert!(has_legal_move(&mut tmp));
    assert_eq!(tmp, b);
}
