//! Pieces and the board view their move generators read from.

use std::fmt;

use crate::movegen;
use crate::types::{PieceKind, Player, Square};

/// What sits on an on-board square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Occupant {
    Empty,
    Piece(Piece),
}

/// Read access to a board, as seen by piece move generators.
pub trait BoardView {
    /// `None` for coordinates off the board, which callers must treat as a
    /// hard stop and never as an empty square.
    fn get_piece(&self, row: i8, col: i8) -> Option<Occupant>;

    /// Square a pawn may capture onto en passant, if the last move was a
    /// two-step pawn advance.
    fn en_passant_target(&self) -> Option<Square> {
        None
    }
}

/// Geometry-only move generation. Nothing here consults king safety.
pub trait MoveGenerator {
    /// Empty squares the piece can reach.
    fn get_valid_peaceful_moves(&self, view: &impl BoardView) -> Vec<Square>;

    /// Squares holding an opposing piece the piece can capture.
    fn get_valid_piece_takes(&self, view: &impl BoardView) -> Vec<Square>;

    /// Union of peaceful moves and takes.
    fn get_valid_moves(&self, view: &impl BoardView) -> Vec<Square> {
        movegen::union_moves(
            self.get_valid_peaceful_moves(view),
            self.get_valid_piece_takes(view),
        )
    }
}

/// A piece together with the square it stands on. The stored square must
/// match the cell holding the piece; `Board` keeps the two in step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    player: Player,
    row: i8,
    col: i8,
}

impl Piece {
    pub fn new(kind: PieceKind, player: Player, square: Square) -> Self {
        Self {
            kind,
            player,
            row: square.row(),
            col: square.col(),
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn row(&self) -> i8 {
        self.row
    }

    pub fn col(&self) -> i8 {
        self.col
    }

    pub fn square(&self) -> Square {
        Square::at(self.row, self.col)
    }

    /// Display letter: uppercase for player 1, lowercase for player 2.
    pub fn symbol(&self) -> char {
        match self.player {
            Player::Player1 => self.kind.symbol().to_ascii_uppercase(),
            Player::Player2 => self.kind.symbol(),
        }
    }

    pub(crate) fn relocate(&mut self, to: Square) {
        self.row = to.row();
        self.col = to.col();
    }

    pub(crate) fn promote(&mut self, kind: PieceKind) {
        debug_assert_eq!(self.kind, PieceKind::Pawn);
        self.kind = kind;
    }
}

impl MoveGenerator for Piece {
    fn get_valid_peaceful_moves(&self, view: &impl BoardView) -> Vec<Square> {
        let mut out = Vec::with_capacity(16);
        movegen::peaceful_moves_into(self, view, &mut out);
        out
    }

    fn get_valid_piece_takes(&self, view: &impl BoardView) -> Vec<Square> {
        let mut out = Vec::with_capacity(8);
        movegen::piece_takes_into(self, view, &mut out);
        out
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.symbol(), self.square())
    }
}

#[cfg(test)]
#[path = "piece_tests.rs"]
mod piece_tests;
