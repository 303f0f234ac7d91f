use super::*;
use chess_core::{GameStatus, Square};

fn s(row: i8, col: i8) -> Square {
    Square::new(row, col).unwrap()
}

#[test]
fn test_search_returns_legal_move() {
    let game = GameState::new();
    let mut ai = ChessAi::new();
    let result = ai.search(&game, 2);
    let mv = result.best_move.expect("start position has moves");
    assert!(game.all_legal_moves(game.whose_turn()).contains(&mv));
    assert_eq!(result.depth, 2);
    assert!(result.nodes > 0);
}

#[test]
fn test_ai_move_can_be_played() {
    let mut game = GameState::new();
    let mut ai = ChessAi::new();
    for _ in 0..4 {
        let mv = ai.search(&game, 2).best_move.unwrap();
        game.move_piece_with_promotion(mv.from, mv.to, mv.promo, true).unwrap();
    }
    assert_eq!(game.move_log().filter(|r| r.by_ai).count(), 4);
}

#[test]
fn test_search_after_mate_reports_nothing() {
    let mut game = GameState::new();
    for (from, to) in [((1, 2), (2, 2)), ((6, 3), (5, 3)), ((1, 1), (3, 1)), ((7, 4), (3, 0))] {
        game.move_piece(s(from.0, from.1), s(to.0, to.1), false).unwrap();
    }
    assert!(game.checkmate_stalemate_checker().is_over());
    let result = ChessAi::new().search(&game, 2);
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, 0);
    assert_ne!(game.checkmate_stalemate_checker(), GameStatus::Ongoing);
}
