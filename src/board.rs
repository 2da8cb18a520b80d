//! Board geometry: cells, knight moves, and algebraic notation.
//!
//! A [`Board`] is an immutable n×n grid. It defines knight adjacency via
//! [`Board::valid_moves`] and the bijection between [`Cell`] coordinates and
//! algebraic notation ("a1".."h8" on a standard board, with rank numbers
//! counted from the bottom edge).

use crate::common::BoardError;

/// A single square, 0-indexed from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }
}

/// The eight knight offsets, kept in a fixed order so move generation is
/// deterministic.
const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// An n×n chessboard. Immutable once constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
}

impl Board {
    /// Create a board with the given side length.
    pub fn new(size: usize) -> Self {
        Board { size }
    }

    /// Side length of the board.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` when both coordinates lie in `[0, size)`.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// Bounds-checked cell constructor.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        let cell = Cell::new(row, col);
        if self.contains(cell) {
            Ok(cell)
        } else {
            Err(BoardError::OutOfBounds {
                row,
                col,
                size: self.size,
            })
        }
    }

    /// All cells reachable from `cell` by one knight move, in a fixed order.
    pub fn valid_moves(&self, cell: Cell) -> Vec<Cell> {
        let mut moves = Vec::with_capacity(8);
        for &(dr, dc) in KNIGHT_OFFSETS.iter() {
            let row = cell.row as isize + dr;
            let col = cell.col as isize + dc;
            if row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size {
                moves.push(Cell::new(row as usize, col as usize));
            }
        }
        moves
    }

    /// Algebraic notation for an in-bounds cell: file letter from the
    /// column, rank number `size - row`.
    pub fn to_notation(&self, cell: Cell) -> String {
        debug_assert!(self.contains(cell));
        let file = (b'a' + cell.col as u8) as char;
        format!("{}{}", file, self.size - cell.row)
    }

    /// Parse algebraic notation back into a cell.
    ///
    /// The input must be exactly one lowercase file letter within the board's
    /// files followed by a rank number in `1..=size`, with no leading zeros
    /// and no trailing characters. Anything else is rejected before any
    /// coordinate arithmetic happens.
    pub fn from_notation(&self, input: &str) -> Result<Cell, BoardError> {
        let invalid = || BoardError::InvalidNotation {
            input: input.to_string(),
            size: self.size,
        };

        let mut chars = input.chars();
        let file = chars.next().ok_or_else(invalid)?;
        if !file.is_ascii_lowercase() {
            return Err(invalid());
        }
        let col = (file as u8 - b'a') as usize;
        if col >= self.size {
            return Err(invalid());
        }

        let rank_str = chars.as_str();
        if rank_str.is_empty()
            || rank_str.starts_with('0')
            || !rank_str.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        let rank: usize = rank_str.parse().map_err(|_| invalid())?;
        if rank > self.size {
            return Err(invalid());
        }

        Ok(Cell::new(self.size - rank, col))
    }
}
