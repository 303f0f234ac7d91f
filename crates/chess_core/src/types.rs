use std::fmt;

/// Board dimension along both axes.
pub const BOARD_SIZE: i8 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Player::Player1 => 0,
            Player::Player2 => 1,
        }
    }

    /// Row delta of a pawn advance.
    pub fn forward(self) -> i8 {
        match self {
            Player::Player1 => 1,
            Player::Player2 => -1,
        }
    }

    /// Row holding this player's back rank in the starting position.
    pub fn home_row(self) -> i8 {
        match self {
            Player::Player1 => 0,
            Player::Player2 => BOARD_SIZE - 1,
        }
    }

    /// Row this player's pawns start on (and may double-step from).
    pub fn pawn_row(self) -> i8 {
        self.home_row() + self.forward()
    }

    /// Row on which this player's pawns promote.
    pub fn promotion_row(self) -> i8 {
        self.other().home_row()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Player1 => write!(f, "player 1"),
            Player::Player2 => write!(f, "player 2"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Kinds a pawn may promote to, strongest first.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    pub fn idx(self) -> usize {
        self as usize
    }

    pub fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

/// A square on the board. Only on-board squares can be constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: i8,
    col: i8,
}

impl Square {
    /// Returns `None` when `(row, col)` falls outside the board.
    pub fn new(row: i8, col: i8) -> Option<Square> {
        if on_board(row, col) {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// For coordinates known to be on the board (home rows, castling squares).
    pub(crate) const fn at(row: i8, col: i8) -> Square {
        debug_assert!(row >= 0 && row < BOARD_SIZE && col >= 0 && col < BOARD_SIZE);
        Square { row, col }
    }

    pub fn row(self) -> i8 {
        self.row
    }

    pub fn col(self) -> i8 {
        self.col
    }

    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        Square::new(self.row + d_row, self.col + d_col)
    }

    /// Row-major index in `0..64`.
    pub fn index(self) -> usize {
        (self.row as usize) * (BOARD_SIZE as usize) + self.col as usize
    }

    /// Every square, row-major from `(0, 0)`.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

pub fn on_board(row: i8, col: i8) -> bool {
    (0..BOARD_SIZE).contains(&row) && (0..BOARD_SIZE).contains(&col)
}

/// A from/to pair as applied to the board. `promo` is only meaningful for a
/// pawn reaching its promotion row; `None` there promotes to a queen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promo: Option<PieceKind>,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promo: None,
        }
    }

    pub fn with_promo(from: Square, to: Square, promo: PieceKind) -> Self {
        Self {
            from,
            to,
            promo: Some(promo),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)?;
        if let Some(kind) = self.promo {
            write!(f, "={}", kind.symbol())?;
        }
        Ok(())
    }
}
