use crate::board::{Board, KING_START_COL};
use crate::piece::{BoardView, MoveGenerator, Occupant, Piece};
use crate::types::*;

pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[derive(Clone, Copy, PartialEq, Eq)]
enum Targets {
    Peaceful,
    Takes,
}

/// Set union of two destination lists, first-seen order preserved.
pub fn union_moves(mut peaceful: Vec<Square>, takes: Vec<Square>) -> Vec<Square> {
    for sq in takes {
        if !peaceful.contains(&sq) {
            peaceful.push(sq);
        }
    }
    peaceful
}

pub(crate) fn peaceful_moves_into(piece: &Piece, view: &impl BoardView, out: &mut Vec<Square>) {
    gen_geometry(piece, view, Targets::Peaceful, out);
}

pub(crate) fn piece_takes_into(piece: &Piece, view: &impl BoardView, out: &mut Vec<Square>) {
    gen_geometry(piece, view, Targets::Takes, out);
}

fn gen_geometry(piece: &Piece, view: &impl BoardView, targets: Targets, out: &mut Vec<Square>) {
    match piece.kind() {
        PieceKind::Pawn => match targets {
            Targets::Peaceful => gen_pawn_pushes(piece, view, out),
            Targets::Takes => gen_pawn_takes(piece, view, out),
        },
        PieceKind::Knight => gen_leaper(piece, view, &KNIGHT_DELTAS, targets, out),
        PieceKind::King => gen_leaper(piece, view, &KING_DELTAS, targets, out),
        PieceKind::Bishop => gen_slider(piece, view, &DIAGONALS, targets, out),
        PieceKind::Rook => gen_slider(piece, view, &ORTHOGONALS, targets, out),
        PieceKind::Queen => {
            gen_slider(piece, view, &DIAGONALS, targets, out);
            gen_slider(piece, view, &ORTHOGONALS, targets, out);
        }
    }
}

fn gen_leaper(
    piece: &Piece,
    view: &impl BoardView,
    deltas: &[(i8, i8)],
    targets: Targets,
    out: &mut Vec<Square>,
) {
    for &(dr, dc) in deltas {
        let (r, c) = (piece.row() + dr, piece.col() + dc);
        let Some(to) = Square::new(r, c) else {
            continue;
        };
        match view.get_piece(r, c) {
            Some(Occupant::Empty) if targets == Targets::Peaceful => out.push(to),
            Some(Occupant::Piece(other))
                if targets == Targets::Takes && other.player() != piece.player() =>
            {
                out.push(to)
            }
            _ => {}
        }
    }
}

fn gen_slider(
    piece: &Piece,
    view: &impl BoardView,
    dirs: &[(i8, i8)],
    targets: Targets,
    out: &mut Vec<Square>,
) {
    for &(dr, dc) in dirs {
        let mut r = piece.row() + dr;
        let mut c = piece.col() + dc;
        while let Some(to) = Square::new(r, c) {
            match view.get_piece(r, c) {
                None => break,
                Some(Occupant::Empty) => {
                    if targets == Targets::Peaceful {
                        out.push(to);
                    }
                }
                Some(Occupant::Piece(other)) => {
                    if targets == Targets::Takes && other.player() != piece.player() {
                        out.push(to);
                    }
                    break;
                }
            }
            r += dr;
            c += dc;
        }
    }
}

fn is_empty(view: &impl BoardView, sq: Square) -> bool {
    view.get_piece(sq.row(), sq.col()) == Some(Occupant::Empty)
}

fn gen_pawn_pushes(piece: &Piece, view: &impl BoardView, out: &mut Vec<Square>) {
    let dir = piece.player().forward();
    let Some(one) = piece.square().offset(dir, 0) else {
        return;
    };
    if !is_empty(view, one) {
        return;
    }
    out.push(one);

    if piece.row() == piece.player().pawn_row()
        && let Some(two) = one.offset(dir, 0)
        && is_empty(view, two)
    {
        out.push(two);
    }
}

fn gen_pawn_takes(piece: &Piece, view: &impl BoardView, out: &mut Vec<Square>) {
    let dir = piece.player().forward();
    for dc in [-1, 1] {
        let Some(to) = piece.square().offset(dir, dc) else {
            continue;
        };
        match view.get_piece(to.row(), to.col()) {
            Some(Occupant::Piece(other)) if other.player() != piece.player() => out.push(to),
            Some(Occupant::Empty) if view.en_passant_target() == Some(to) => {
                // The pawn being passed must be an opposing pawn beside us.
                if let Some(Occupant::Piece(passed)) = view.get_piece(piece.row(), to.col())
                    && passed.kind() == PieceKind::Pawn
                    && passed.player() != piece.player()
                {
                    out.push(to);
                }
            }
            _ => {}
        }
    }
}

/// Geometry moves from `from` as board moves, expanding promotions and adding
/// castling for a king. King safety is not checked.
pub fn pseudo_moves_from(board: &Board, from: Square, out: &mut Vec<Move>) {
    let Some(pc) = board.piece_at(from) else {
        return;
    };
    for to in pc.get_valid_moves(board) {
        if pc.kind() == PieceKind::Pawn && to.row() == pc.player().promotion_row() {
            for kind in PieceKind::PROMOTIONS {
                out.push(Move::with_promo(from, to, kind));
            }
        } else {
            out.push(Move::new(from, to));
        }
    }
    if pc.kind() == PieceKind::King {
        gen_castle(board, &pc, out);
    }
}

fn gen_castle(board: &Board, king: &Piece, out: &mut Vec<Move>) {
    let p = king.player();
    let home = p.home_row();
    let from = king.square();
    if from != Square::at(home, KING_START_COL) {
        return;
    }
    let rights = board.castling();
    if !rights.short(p) && !rights.long(p) {
        return;
    }
    // Can't castle out of check.
    if board.in_check(p) {
        return;
    }

    let enemy = p.other();
    let own_rook = |col: i8| {
        board
            .piece_at(Square::at(home, col))
            .is_some_and(|pc| pc.player() == p && pc.kind() == PieceKind::Rook)
    };
    let clear = |cols: &[i8]| cols.iter().all(|&c| board.piece_at(Square::at(home, c)).is_none());
    let safe = |cols: &[i8]| {
        cols.iter()
            .all(|&c| !board.is_square_attacked(Square::at(home, c), enemy))
    };

    // Short: king 3 -> 1, rook 0 -> 2.
    if rights.short(p) && own_rook(0) && clear(&[1, 2]) && safe(&[2, 1]) {
        out.push(Move::new(from, Square::at(home, KING_START_COL - 2)));
    }
    // Long: king 3 -> 5, rook 7 -> 4.
    if rights.long(p) && own_rook(BOARD_SIZE - 1) && clear(&[4, 5, 6]) && safe(&[4, 5]) {
        out.push(Move::new(from, Square::at(home, KING_START_COL + 2)));
    }
}

/// Legal moves for the piece on `from`: pseudo moves that do not leave its
/// owner's king attacked. Works whichever side is to move.
pub fn legal_moves_from(board: &mut Board, from: Square, out: &mut Vec<Move>) {
    out.clear();
    let Some(pc) = board.piece_at(from) else {
        return;
    };
    pseudo_moves_from(board, from, out);
    retain_king_safe(board, pc.player(), out);
}

/// All legal moves for `player`, whether or not it is that player's turn.
pub fn legal_moves_for(board: &mut Board, player: Player, out: &mut Vec<Move>) {
    out.clear();
    let own: Vec<Square> = board
        .pieces()
        .filter(|pc| pc.player() == player)
        .map(|pc| pc.square())
        .collect();
    for from in own {
        pseudo_moves_from(board, from, out);
    }
    retain_king_safe(board, player, out);
}

/// Generate all legal moves for the side to move into the provided buffer,
/// reusing it across calls.
pub fn legal_moves_into(board: &mut Board, out: &mut Vec<Move>) {
    let mover = board.side_to_move();
    legal_moves_for(board, mover, out);
}

/// Generate all legal moves, returning a freshly allocated vector.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut tmp = board.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Whether the side to move has at least one legal move. Stops at the first.
pub fn has_legal_move(board: &mut Board) -> bool {
    let mover = board.side_to_move();
    let own: Vec<Square> = board
        .pieces()
        .filter(|pc| pc.player() == mover)
        .map(|pc| pc.square())
        .collect();
    let mut buf = Vec::with_capacity(32);
    for from in own {
        buf.clear();
        pseudo_moves_from(board, from, &mut buf);
        if buf.iter().any(|&mv| is_king_safe(board, mover, mv)) {
            return true;
        }
    }
    false
}

fn is_king_safe(board: &mut Board, mover: Player, mv: Move) -> bool {
    let undo = board.make_move(mv);
    let exposed = board.in_check(mover);
    board.unmake_move(mv, undo);
    !exposed
}

fn retain_king_safe(board: &mut Board, mover: Player, out: &mut Vec<Move>) {
    // Filter illegal moves in-place by playing them on the mutable board.
    out.retain(|&mv| is_king_safe(board, mover, mv));
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
