//! A game in progress: the board plus the log of moves played on it.

use std::fmt;

use tracing::{debug, warn};

use crate::board::{Board, Undo};
use crate::error::MoveError;
use crate::movegen::{legal_moves_for, legal_moves_from};
use crate::piece::{BoardView, MoveGenerator, Occupant, Piece};
use crate::status::{GameStatus, game_status};
use crate::types::*;

/// One applied move, as kept in the game's move log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// The mover before the move.
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promotion: Option<PieceKind>,
    pub castle: bool,
    pub en_passant: bool,
    /// Whether a search process, rather than a person, chose the move.
    pub by_ai: bool,
}

#[derive(Clone, Debug)]
struct Played {
    mv: Move,
    undo: Undo,
    record: MoveRecord,
}

#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    history: Vec<Played>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard starting position, player 1 to move.
    pub fn new() -> Self {
        Self::from_board(Board::startpos())
    }

    /// No pieces at all; fixtures place what they need.
    pub fn empty() -> Self {
        Self::from_board(Board::empty())
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn whose_turn(&self) -> Player {
        self.board.side_to_move()
    }

    /// The occupant at `(row, col)`, or `None` off the board.
    pub fn get_piece(&self, row: i8, col: i8) -> Option<Occupant> {
        BoardView::get_piece(&self.board, row, col)
    }

    pub fn place_piece(&mut self, piece: Piece) -> Option<Piece> {
        self.board.place(piece)
    }

    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        self.board.remove(square)
    }

    /// Raw destinations for the piece on `square`: the union of its peaceful
    /// moves and takes, with no king-safety filtering. Empty for a vacant
    /// square.
    pub fn get_valid_moves(&self, square: Square) -> Vec<Square> {
        match self.board.piece_at(square) {
            Some(pc) => pc.get_valid_moves(self),
            None => Vec::new(),
        }
    }

    /// Destinations the piece on `square` may legally move to, castling
    /// included. Promotion choices collapse onto their single destination.
    pub fn get_legal_moves(&self, square: Square) -> Vec<Square> {
        let mut scratch = self.board.clone();
        let mut moves = Vec::with_capacity(32);
        legal_moves_from(&mut scratch, square, &mut moves);
        let mut out: Vec<Square> = Vec::with_capacity(moves.len());
        for mv in moves {
            if !out.contains(&mv.to) {
                out.push(mv.to);
            }
        }
        out
    }

    /// Every legal move for `player`, promotions expanded per piece kind.
    pub fn all_legal_moves(&self, player: Player) -> Vec<Move> {
        let mut scratch = self.board.clone();
        let mut out = Vec::with_capacity(64);
        legal_moves_for(&mut scratch, player, &mut out);
        out
    }

    pub fn is_in_check(&self, player: Player) -> bool {
        self.board.in_check(player)
    }

    /// Move the piece on `from` to `to` for the side to move. A pawn reaching
    /// the far row becomes a queen.
    pub fn move_piece(
        &mut self,
        from: Square,
        to: Square,
        is_ai_move: bool,
    ) -> Result<MoveRecord, MoveError> {
        self.move_piece_with_promotion(from, to, None, is_ai_move)
    }

    pub fn move_piece_with_promotion(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
        is_ai_move: bool,
    ) -> Result<MoveRecord, MoveError> {
        let piece = self.board.piece_at(from).ok_or(MoveError::EmptySquare(from))?;
        if piece.player() != self.whose_turn() {
            return Err(MoveError::NotYourPiece {
                square: from,
                owner: piece.player(),
            });
        }
        if !self.get_legal_moves(from).contains(&to) {
            warn!(%from, %to, piece = %piece, "rejected illegal move");
            return Err(MoveError::IllegalDestination { from, to });
        }

        // The promotion choice only matters for a pawn reaching the far row.
        let promotes =
            piece.kind() == PieceKind::Pawn && to.row() == piece.player().promotion_row();
        let promotion = if promotes { promotion } else { None };
        if let Some(kind) = promotion
            && matches!(kind, PieceKind::Pawn | PieceKind::King)
        {
            return Err(MoveError::InvalidPromotion(kind));
        }
        let mv = Move {
            from,
            to,
            promo: promotion,
        };
        let undo = self.board.make_move(mv);
        let record = MoveRecord {
            from,
            to,
            piece,
            captured: undo.captured,
            promotion: promotes.then(|| promotion.unwrap_or(PieceKind::Queen)),
            castle: undo.is_castle(),
            en_passant: undo.en_passant_capture,
            by_ai: is_ai_move,
        };
        debug!(%mv, by_ai = is_ai_move, captured = ?record.captured, "applied move");
        self.history.push(Played { mv, undo, record });
        Ok(record)
    }

    /// Take back the last move, restoring the exact prior state.
    pub fn undo_move(&mut self) -> Result<MoveRecord, MoveError> {
        let played = self.history.pop().ok_or(MoveError::NothingToUndo)?;
        self.board.unmake_move(played.mv, played.undo);
        debug!(mv = %played.mv, "undid move");
        Ok(played.record)
    }

    /// Moves played so far, oldest first.
    pub fn move_log(&self) -> impl Iterator<Item = &MoveRecord> + '_ {
        self.history.iter().map(|p| &p.record)
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last().map(|p| &p.record)
    }

    /// Status for the side to move, computed fresh on every call.
    pub fn checkmate_stalemate_checker(&self) -> GameStatus {
        let mut scratch = self.board.clone();
        game_status(&mut scratch)
    }
}

impl BoardView for GameState {
    fn get_piece(&self, row: i8, col: i8) -> Option<Occupant> {
        GameState::get_piece(self, row, col)
    }

    fn en_passant_target(&self) -> Option<Square> {
        self.board.en_passant()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

#[cfg(test)]
#[path = "game_state_tests.rs"]
mod game_state_tests;
