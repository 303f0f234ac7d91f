use thiserror::Error;

use crate::types::{PieceKind, Player, Square};

/// Why a move request was refused. A refused request leaves the game untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no piece on {0}")]
    EmptySquare(Square),
    #[error("piece on {square} belongs to {owner}, not the side to move")]
    NotYourPiece { square: Square, owner: Player },
    #[error("{from} -> {to} is not a legal move")]
    IllegalDestination { from: Square, to: Square },
    #[error("cannot promote to {0:?}")]
    InvalidPromotion(PieceKind),
    #[error("no move to undo")]
    NothingToUndo,
}
