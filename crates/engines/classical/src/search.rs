//! Negamax search with alpha-beta pruning

use chess_core::{legal_moves_into, Board, Move};

use crate::eval::evaluate_position;

/// Score of a side that has been mated at the root. Mates found deeper in
/// the tree score slightly less, so shorter mates win ties.
pub const MATE_SCORE: i32 = 100_000;

/// Searches the position and returns the best move with its score from the
/// mover's point of view.
///
/// # Arguments
/// * `board` - The position to search
/// * `depth` - Maximum search depth in plies
/// * `nodes` - Counter for nodes searched (for statistics)
///
/// # Returns
/// `None` when the side to move has no legal move
pub fn pick_best_move(board: &Board, depth: u8, nodes: &mut u64) -> Option<(Move, i32)> {
    let mut tmp = board.clone();
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut moves);

    let mut best: Option<(Move, i32)> = None;
    let mut alpha = -MATE_SCORE - 1;
    let beta = MATE_SCORE + 1;

    for mv in moves {
        let undo = tmp.make_move(mv);
        *nodes += 1;

        let score = -negamax(&mut tmp, depth.saturating_sub(1), 1, -beta, -alpha, nodes);

        tmp.unmake_move(mv, undo);

        // Strict comparison keeps the first of equally scored moves.
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((mv, score));
        }
        alpha = alpha.max(score);
    }

    best
}

/// Recursive negamax search with alpha-beta pruning.
fn negamax(
    board: &mut Board,
    depth: u8,
    ply: i32,
    mut alpha: i32,
    beta: i32,
    nodes: &mut u64,
) -> i32 {
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(board, &mut moves);

    if moves.is_empty() {
        if board.in_check(board.side_to_move()) {
            return -MATE_SCORE + ply;
        }
        return 0; // Stalemate
    }

    if depth == 0 {
        return evaluate_position(board, board.side_to_move());
    }

    let mut best = -MATE_SCORE - 1;

    for mv in moves {
        let undo = board.make_move(mv);
        *nodes += 1;

        let score = -negamax(board, depth - 1, ply + 1, -beta, -alpha, nodes);

        board.unmake_move(mv, undo);

        if score > best {
            best = score;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta {
            break; // Beta cutoff
        }
    }

    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
