use super::*;
use chess_core::{Move, SearchResult, Square};
use classical_engine::ChessAi;
use random_engine::RandomEngine;

/// Plays the same fixed move every turn.
struct Stubborn(Option<Move>);

impl Engine for Stubborn {
    fn search(&mut self, _state: &GameState, _depth: u8) -> SearchResult {
        SearchResult {
            best_move: self.0,
            ..Default::default()
        }
    }

    fn name(&self) -> &str {
        "stubborn"
    }
}

fn s(row: i8, col: i8) -> Square {
    Square::new(row, col).unwrap()
}

#[test]
fn test_self_play() {
    let mut engine1 = ChessAi::new();
    let mut engine2 = ChessAi::new();

    let config = MatchConfig {
        num_games: 2,
        depth: 1,
        max_moves: 40,
        verbose: false,
        ..Default::default()
    };

    let runner = MatchRunner::new(config);
    let report = runner.run_match(&mut engine1, &mut engine2);

    // Self-play should complete without panic
    assert_eq!(report.result.total_games(), 2);
    assert_eq!(report.games.len(), 2);
    assert!(report.games.iter().all(|g| g.plies <= 40));
}

#[test]
fn test_random_games_respect_move_limit() {
    let mut engine1 = RandomEngine::with_seed(1);
    let mut engine2 = RandomEngine::with_seed(2);
    let config = MatchConfig {
        num_games: 3,
        max_moves: 60,
        verbose: false,
        ..Default::default()
    };
    let report = MatchRunner::new(config).run_match(&mut engine1, &mut engine2);
    assert_eq!(report.result.total_games(), 3);
    for game in &report.games {
        assert!(game.plies <= 60);
        if game.end == GameEnd::MoveLimit {
            assert_eq!(game.plies, 60);
            assert_eq!(game.result, GameResult::Draw);
        }
    }
}

#[test]
fn test_illegal_move_forfeits() {
    let mut cheat = Stubborn(Some(Move::new(s(0, 0), s(5, 0))));
    let mut honest = RandomEngine::with_seed(3);
    let runner = MatchRunner::new(MatchConfig {
        verbose: false,
        ..Default::default()
    });

    let record = runner.play_game(&mut cheat, &mut honest);
    assert_eq!(record.end, GameEnd::Forfeit);
    assert_eq!(record.result, GameResult::Loss);
    assert_eq!(record.plies, 0);
}

#[test]
fn test_giving_up_forfeits_and_colors_alternate() {
    let mut quitter = Stubborn(None);
    let mut honest = RandomEngine::with_seed(4);
    let runner = MatchRunner::new(MatchConfig {
        num_games: 2,
        verbose: false,
        ..Default::default()
    });

    let report = runner.run_match(&mut quitter, &mut honest);
    assert_eq!(report.result.losses, 2);
    assert_eq!(report.games[0].player1, "stubborn");
    assert_eq!(report.games[1].player2, "stubborn");
    assert_eq!(report.games[1].result, GameResult::Win);
    assert_eq!(report.games[1].plies, 1);
}

#[test]
fn test_quick_match_totals() {
    let mut a = RandomEngine::with_seed(5);
    let mut b = RandomEngine::with_seed(6);
    let result = quick_match(&mut a, &mut b, 2, 1);
    assert_eq!(result.total_games(), 2);
}
