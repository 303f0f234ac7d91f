use crate::board::Board;
use crate::movegen::has_legal_move;
use crate::types::Player;

/// Terminal status of a position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Checkmate { loser: Player },
    Stalemate,
    Ongoing,
}

impl GameStatus {
    /// Integer encoding: 0 player 1 mated, 1 player 2 mated, 2 stalemate,
    /// 3 still going.
    pub fn code(self) -> u8 {
        match self {
            GameStatus::Checkmate {
                loser: Player::Player1,
            } => 0,
            GameStatus::Checkmate {
                loser: Player::Player2,
            } => 1,
            GameStatus::Stalemate => 2,
            GameStatus::Ongoing => 3,
        }
    }

    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Checkmate { loser } => Some(loser.other()),
            _ => None,
        }
    }
}

/// Checkmate or stalemate when the side to move has no king-safe move,
/// told apart by whether its king is attacked right now.
pub fn game_status(board: &mut Board) -> GameStatus {
    if has_legal_move(board) {
        return GameStatus::Ongoing;
    }
    let mover = board.side_to_move();
    if board.in_check(mover) {
        GameStatus::Checkmate { loser: mover }
    } else {
        GameStatus::Stalemate
    }
}
