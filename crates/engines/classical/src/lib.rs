//! Classical Chess Engine
//!
//! Alpha-beta search with material-based evaluation.
//! This is the baseline opponent for the random engine in tournaments.

mod eval;
mod search;

use chess_core::{Engine, GameState, SearchResult};
use tracing::debug;

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u8 = 3;

/// Classical chess engine using negamax with alpha-beta pruning.
///
/// This engine uses:
/// - Negamax search with alpha-beta pruning
/// - Simple material evaluation
/// - Mate scores that prefer the shortest mate
#[derive(Debug, Clone, Default)]
pub struct ChessAi {
    /// Node counter for statistics
    nodes: u64,
}

impl ChessAi {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for ChessAi {
    fn search(&mut self, state: &GameState, depth: u8) -> SearchResult {
        self.nodes = 0;

        let best = search::pick_best_move(state.board(), depth, &mut self.nodes);
        debug!(
            side = %state.whose_turn(),
            depth,
            nodes = self.nodes,
            best = ?best.map(|(mv, score)| (mv.to_string(), score)),
            "search finished"
        );

        SearchResult {
            best_move: best.map(|(mv, _)| mv),
            score: best.map(|(_, s)| s).unwrap_or(0),
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Classical v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use eval::{evaluate_board, evaluate_position, piece_value};
pub use search::{pick_best_move, MATE_SCORE};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
