pub mod board;
pub mod error;
pub mod game_state;
pub mod movegen;
pub mod perft;
pub mod piece;
pub mod status;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::MoveError;
pub use game_state::*;
pub use movegen::*;
pub use perft::perft;
pub use piece::*;
pub use status::*;
pub use types::*;

// =============================================================================
// Engine trait — implemented by every move-selection strategy
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation score in centipawns from the mover's perspective
    pub score: i32,
    /// Search depth reached
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
}

/// Trait that all chess engines must implement.
///
/// Engines only read the game; the caller applies the returned move with
/// `GameState::move_piece`.
pub trait Engine: Send {
    /// Search the position to the given depth.
    ///
    /// # Arguments
    /// * `state` - The game to pick a move in, for the side to move
    /// * `depth` - Search depth in plies
    ///
    /// # Returns
    /// SearchResult containing best move, score, and statistics
    fn search(&mut self, state: &GameState, depth: u8) -> SearchResult;

    /// Returns the engine's name for logs and match reports
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
