use chess_core::{Board, CastlingRights, Piece, PieceKind, Player, Square, perft};

const FULL_PERFT_ENV: &str = "FULL_PERFT";

fn s(row: i8, col: i8) -> Square {
    Square::new(row, col).unwrap()
}

#[test]
fn perft_from_start_position() {
    let mut board = Board::startpos();
    let expected = [(1, 20), (2, 400), (3, 8_902)];
    for (depth, nodes) in expected {
        assert_eq!(perft(&mut board, depth), nodes, "depth {depth}");
    }
    assert_eq!(board, Board::startpos(), "perft must leave the board untouched");
}

#[test]
fn perft_from_start_position_depth_4() {
    // Slow in debug builds; opt in with FULL_PERFT=1.
    if std::env::var(FULL_PERFT_ENV).is_err() {
        return;
    }
    let mut board = Board::startpos();
    assert_eq!(perft(&mut board, 4), 197_281);
}

#[test]
fn perft_depth_zero_is_one() {
    let mut board = Board::empty();
    assert_eq!(perft(&mut board, 0), 1);
}

#[test]
fn perft_kings_and_rooks_with_castling() {
    // Kings and rooks on their start squares, every castling right intact.
    let mut board = Board::empty();
    board.set_castling(CastlingRights::ALL);
    for player in [Player::Player1, Player::Player2] {
        let home = player.home_row();
        board.place(Piece::new(PieceKind::King, player, s(home, 3)));
        board.place(Piece::new(PieceKind::Rook, player, s(home, 0)));
        board.place(Piece::new(PieceKind::Rook, player, s(home, 7)));
    }
    // King: (0,2), (0,4), (1,2), (1,3), (1,4) plus two castles = 7.
    // Rook on (0,0): (0,1), (0,2) and (1,0)..(6,0) plus capture (7,0) = 9.
    // Rook on (0,7): (0,6), (0,5), (0,4) and (1,7)..(6,7) plus capture (7,7) = 10.
    assert_eq!(perft(&mut board, 1), 26);
}
