//! Material-based position evaluation

use chess_core::{Board, GameState, PieceKind, Player};

/// Material values in centipawns, indexed by PieceKind::idx().
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
const PIECE_VALUES: [i32; 6] = [100, 300, 300, 500, 900, 0];

/// Returns the material value of a piece in centipawns.
#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    PIECE_VALUES[kind.idx()]
}

/// Evaluates the game from `perspective`'s point of view.
///
/// Returns a score in centipawns:
/// - Positive = `perspective` is ahead in material
/// - Negative = `perspective` is behind
/// - 0 = equal material, including an empty board
///
/// Reads the board only, so the same board always scores the same, and
/// swapping the perspective negates the score.
pub fn evaluate_board(state: &GameState, perspective: Player) -> i32 {
    evaluate_position(state.board(), perspective)
}

/// Board-level form of [`evaluate_board`], used at search leaves.
pub fn evaluate_position(board: &Board, perspective: Player) -> i32 {
    board
        .pieces()
        .map(|pc| {
            let v = piece_value(pc.kind());
            if pc.player() == perspective {
                v
            } else {
                -v
            }
        })
        .sum()
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
