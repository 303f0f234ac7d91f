use std::fmt;

use crate::piece::{BoardView, Occupant, Piece};
use crate::types::*;

/// Back rank from column 0 to column 7. Both players share the same column
/// order, so the kings face each other on column 3.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::King,
    PieceKind::Queen,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Column of both kings in the starting position.
pub const KING_START_COL: i8 = 3;

/// Castling toward column 0 (short) and toward column 7 (long), per player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CastlingRights {
    pub short: [bool; 2],
    pub long: [bool; 2],
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        short: [true; 2],
        long: [true; 2],
    };
    pub const NONE: CastlingRights = CastlingRights {
        short: [false; 2],
        long: [false; 2],
    };

    pub fn short(&self, p: Player) -> bool {
        self.short[p.idx()]
    }

    pub fn long(&self, p: Player) -> bool {
        self.long[p.idx()]
    }

    fn clear(&mut self, p: Player) {
        self.short[p.idx()] = false;
        self.long[p.idx()] = false;
    }

    /// Drop the right tied to a rook leaving (or being captured on) `sq`.
    fn clear_corner(&mut self, p: Player, sq: Square) {
        if sq.row() != p.home_row() {
            return;
        }
        match sq.col() {
            0 => self.short[p.idx()] = false,
            c if c == BOARD_SIZE - 1 => self.long[p.idx()] = false,
            _ => {}
        }
    }
}

/// Everything needed to revert one `make_move`.
#[derive(Clone, Copy, Debug)]
pub struct Undo {
    /// The mover as it stood before the move (pre-promotion kind, old square).
    pub moved_piece: Piece,
    pub captured: Option<Piece>,
    /// Differs from the destination only for en passant.
    pub captured_at: Square,
    /// (rook_from, rook_to) for castling.
    pub rook_move: Option<(Square, Square)>,
    pub en_passant_capture: bool,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
}

impl Undo {
    pub fn is_castle(&self) -> bool {
        self.rook_move.is_some()
    }
}

/// The 8×8 grid plus the side to move and the rights that depend on history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
    side_to_move: Player,
    castling: CastlingRights,
    en_passant: Option<Square>,
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board {
    pub fn startpos() -> Self {
        let mut b = Board::empty();
        for player in [Player::Player1, Player::Player2] {
            for (col, &kind) in BACK_RANK.iter().enumerate() {
                let col = col as i8;
                b.place(Piece::new(kind, player, Square::at(player.home_row(), col)));
                b.place(Piece::new(
                    PieceKind::Pawn,
                    player,
                    Square::at(player.pawn_row(), col),
                ));
            }
        }
        b.castling = CastlingRights::ALL;
        b
    }

    /// No pieces, player 1 to move, no castling rights.
    pub fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
            side_to_move: Player::Player1,
            castling: CastlingRights::NONE,
            en_passant: None,
        }
    }

    pub fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    pub fn set_side_to_move(&mut self, p: Player) {
        self.side_to_move = p;
    }

    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    pub fn set_castling(&mut self, rights: CastlingRights) {
        self.castling = rights;
    }

    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    fn set_cell(&mut self, sq: Square, pc: Option<Piece>) {
        self.cells[sq.row() as usize][sq.col() as usize] = pc;
    }

    /// Put a piece on the square it carries, replacing any occupant.
    pub fn place(&mut self, piece: Piece) -> Option<Piece> {
        debug_assert!(
            piece.kind() != PieceKind::King
                || self
                    .king_square(piece.player())
                    .is_none_or(|k| k == piece.square()),
            "second king for {}",
            piece.player()
        );
        let previous = self.piece_at(piece.square());
        self.set_cell(piece.square(), Some(piece));
        previous
    }

    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        let previous = self.piece_at(sq);
        self.set_cell(sq, None);
        previous
    }

    /// Occupied squares and their pieces, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.cells.iter().flatten().filter_map(|c| *c)
    }

    pub fn king_square(&self, p: Player) -> Option<Square> {
        self.pieces()
            .find(|pc| pc.player() == p && pc.kind() == PieceKind::King)
            .map(|pc| pc.square())
    }

    pub fn in_check(&self, p: Player) -> bool {
        match self.king_square(p) {
            Some(ksq) => self.is_square_attacked(ksq, p.other()),
            None => false,
        }
    }

    /// Whether any piece of `by` attacks `target`, whatever occupies it.
    pub fn is_square_attacked(&self, target: Square, by: Player) -> bool {
        let attacker_at = |d_row: i8, d_col: i8, kinds: &[PieceKind]| {
            target
                .offset(d_row, d_col)
                .and_then(|s| self.piece_at(s))
                .is_some_and(|pc| pc.player() == by && kinds.contains(&pc.kind()))
        };

        // Pawns of `by` sit one row behind the target from their point of view.
        let back = -by.forward();
        if attacker_at(back, -1, &[PieceKind::Pawn]) || attacker_at(back, 1, &[PieceKind::Pawn]) {
            return true;
        }

        if crate::movegen::KNIGHT_DELTAS
            .iter()
            .any(|&(dr, dc)| attacker_at(dr, dc, &[PieceKind::Knight]))
        {
            return true;
        }

        if crate::movegen::KING_DELTAS
            .iter()
            .any(|&(dr, dc)| attacker_at(dr, dc, &[PieceKind::King]))
        {
            return true;
        }

        let rays: [(&[(i8, i8)], [PieceKind; 2]); 2] = [
            (
                &crate::movegen::DIAGONALS,
                [PieceKind::Bishop, PieceKind::Queen],
            ),
            (
                &crate::movegen::ORTHOGONALS,
                [PieceKind::Rook, PieceKind::Queen],
            ),
        ];
        for (dirs, kinds) in rays {
            for &(dr, dc) in dirs {
                let mut cur = target.offset(dr, dc);
                while let Some(s) = cur {
                    if let Some(pc) = self.piece_at(s) {
                        if pc.player() == by && kinds.contains(&pc.kind()) {
                            return true;
                        }
                        break;
                    }
                    cur = s.offset(dr, dc);
                }
            }
        }

        false
    }

    /// Apply a move without checking legality.
    ///
    /// # Panics
    ///
    /// Panics if no piece stands on `mv.from`. Checked callers go through
    /// `GameState::move_piece`.
    pub fn make_move(&mut self, mv: Move) -> Undo {
        let original = self
            .piece_at(mv.from)
            .expect("make_move: no piece on from-square");
        let prev_castling = self.castling;
        let prev_ep = self.en_passant;

        let mut captured = self.piece_at(mv.to);
        let mut captured_at = mv.to;
        let mut en_passant_capture = false;
        let mover = original.player();
        self.en_passant = None;

        // A pawn moving diagonally onto an empty square captures en passant.
        if original.kind() == PieceKind::Pawn
            && captured.is_none()
            && mv.from.col() != mv.to.col()
        {
            let cs = Square::at(mv.from.row(), mv.to.col());
            captured = self.remove(cs);
            captured_at = cs;
            en_passant_capture = true;
        }

        let mut moved = original;
        moved.relocate(mv.to);
        if moved.kind() == PieceKind::Pawn && mv.to.row() == mover.promotion_row() {
            moved.promote(mv.promo.unwrap_or(PieceKind::Queen));
        }
        self.set_cell(mv.from, None);
        self.set_cell(mv.to, Some(moved));

        // Castling: the king moves two columns, the rook jumps over it.
        let mut rook_move = None;
        if original.kind() == PieceKind::King && (mv.to.col() - mv.from.col()).abs() == 2 {
            let (rook_col, rook_to_col) = if mv.to.col() < mv.from.col() {
                (0, mv.to.col() + 1)
            } else {
                (BOARD_SIZE - 1, mv.to.col() - 1)
            };
            let rf = Square::at(mv.from.row(), rook_col);
            let rt = Square::at(mv.from.row(), rook_to_col);
            if let Some(mut rook) = self.remove(rf) {
                rook.relocate(rt);
                self.set_cell(rt, Some(rook));
                rook_move = Some((rf, rt));
            }
        }

        if original.kind() == PieceKind::King {
            self.castling.clear(mover);
        }
        if original.kind() == PieceKind::Rook {
            self.castling.clear_corner(mover, mv.from);
        }
        if let Some(cp) = captured
            && cp.kind() == PieceKind::Rook
        {
            self.castling.clear_corner(cp.player(), captured_at);
        }

        if original.kind() == PieceKind::Pawn && (mv.to.row() - mv.from.row()).abs() == 2 {
            self.en_passant = Square::new((mv.from.row() + mv.to.row()) / 2, mv.from.col());
        }

        self.side_to_move = self.side_to_move.other();
        debug_assert!(self.coordinates_consistent());

        Undo {
            moved_piece: original,
            captured,
            captured_at,
            rook_move,
            en_passant_capture,
            castling: prev_castling,
            en_passant: prev_ep,
        }
    }

    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        self.side_to_move = self.side_to_move.other();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;

        if let Some((rf, rt)) = undo.rook_move
            && let Some(mut rook) = self.remove(rt)
        {
            rook.relocate(rf);
            self.set_cell(rf, Some(rook));
        }

        self.set_cell(mv.to, None);
        self.set_cell(mv.from, Some(undo.moved_piece));
        if let Some(cp) = undo.captured {
            self.set_cell(undo.captured_at, Some(cp));
        }
        debug_assert!(self.coordinates_consistent());
    }

    /// Every piece's stored square matches the cell holding it.
    pub fn coordinates_consistent(&self) -> bool {
        Square::all().all(|sq| self.piece_at(sq).is_none_or(|pc| pc.square() == sq))
    }
}

impl BoardView for Board {
    fn get_piece(&self, row: i8, col: i8) -> Option<Occupant> {
        let sq = Square::new(row, col)?;
        Some(match self.piece_at(sq) {
            Some(pc) => Occupant::Piece(pc),
            None => Occupant::Empty,
        })
    }

    fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..BOARD_SIZE).rev() {
            write!(f, "{row} ")?;
            for col in 0..BOARD_SIZE {
                let c = self
                    .piece_at(Square::at(row, col))
                    .map_or('.', |pc| pc.symbol());
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  01234567")
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
