//! Random Move Chess Engine
//!
//! A simple engine that selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Smoke-testing the match runner end to end
//! - Baseline comparisons (the classical engine should easily beat this)
//! - Stress testing move generation

use chess_core::{Engine, GameState, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::trace;


/// A chess engine that plays random legal moves.
///
/// This engine provides no evaluation. Seed it with [`RandomEngine::with_seed`]
/// to replay the same game.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    nodes: u64,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, state: &GameState, _depth: u8) -> SearchResult {
        let moves = state.all_legal_moves(state.whose_turn());
        self.nodes = 1;

        let best_move = moves.choose(&mut self.rng).copied();
        trace!(candidates = moves.len(), ?best_move, "random pick");

        SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
