use std::fmt;

use itertools::iproduct;
use thiserror::Error;

pub const SIDE: usize = 3;
pub const NUM_TILES: usize = SIDE * SIDE;

/// The tile value that marks the blank cell.
pub const BLANK: u8 = 0;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("tile {0} is not on the board")]
    TileNotFound(u8),
}

/// A [Board] is a 3x3 sliding-puzzle board.
/// Each cell contains a value in 0..=8 where 0 means the blank cell.
/// Boards are plain values: compared and hashed by content, copied on every
/// move application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    // Tiles are ordered by rows, first left-to-right, then top-to-bottom.
    tiles: [u8; NUM_TILES],
}

impl Board {
    /// Builds a board from nine values in row-major order.
    ///
    /// The values are not validated: callers are responsible for supplying a
    /// permutation of 0..=8. Anything else gives undefined heuristic results.
    #[inline]
    pub fn new(tiles: [u8; NUM_TILES]) -> Self {
        Board { tiles }
    }

    /// The solved configuration: cell `(row, col)` holds `3*row + col`, with
    /// the blank in the top-left corner.
    pub fn goal() -> Self {
        let mut tiles = [0; NUM_TILES];
        for (row, col) in iproduct!(0..SIDE, 0..SIDE) {
            tiles[Self::index(row, col)] = (SIDE * row + col) as u8;
        }
        Board { tiles }
    }

    fn index(row: usize, col: usize) -> usize {
        assert!(row < SIDE && col < SIDE);
        row * SIDE + col
    }

    #[inline]
    pub fn tile(&self, row: usize, col: usize) -> u8 {
        self.tiles[Self::index(row, col)]
    }

    /// Returns the `(row, col)` position of `tile`, scanning in row-major
    /// order. Fails if the tile is not on the board.
    pub fn locate(&self, tile: u8) -> Result<(usize, usize), BoardError> {
        iproduct!(0..SIDE, 0..SIDE)
            .find(|&(row, col)| self.tiles[Self::index(row, col)] == tile)
            .ok_or(BoardError::TileNotFound(tile))
    }

    /// Position of the blank cell.
    ///
    /// Panics if the board has no blank, which only happens for boards that
    /// violate the permutation contract of [Board::new].
    pub fn blank_position(&self) -> (usize, usize) {
        self.locate(BLANK).unwrap()
    }

    /// Returns a new board with the cells at `a` and `b` exchanged. The
    /// receiver is left untouched.
    pub(crate) fn swapped(&self, a: (usize, usize), b: (usize, usize)) -> Board {
        let mut tiles = self.tiles;
        tiles.swap(Self::index(a.0, a.1), Self::index(b.0, b.1));
        Board { tiles }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIDE {
            for col in 0..SIDE {
                let tile = self.tile(row, col);
                if tile == BLANK {
                    write!(f, " _")?;
                } else {
                    write!(f, " {}", tile)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_layout() {
        let goal = Board::goal();
        for (row, col) in iproduct!(0..SIDE, 0..SIDE) {
            assert_eq!((SIDE * row + col) as u8, goal.tile(row, col));
        }
    }

    #[test]
    fn locate_finds_every_tile() {
        let board = Board::new([7, 2, 4, 5, 0, 6, 8, 3, 1]);
        assert_eq!(Ok((0, 0)), board.locate(7));
        assert_eq!(Ok((1, 1)), board.locate(0));
        assert_eq!(Ok((2, 2)), board.locate(1));
    }

    #[test]
    fn locate_is_repeatable() {
        let board = Board::new([7, 2, 4, 5, 0, 6, 8, 3, 1]);
        assert_eq!(board.locate(3), board.locate(3));
    }

    #[test]
    fn locate_missing_tile() {
        // Construction doesn't validate, so a board without some value is
        // representable. Looking that value up must fail loudly.
        let board = Board::new([1; NUM_TILES]);
        assert_eq!(Err(BoardError::TileNotFound(0)), board.locate(0));
        assert_eq!(Err(BoardError::TileNotFound(2)), board.locate(2));
    }

    #[test]
    fn blank_position_of_goal() {
        assert_eq!((0, 0), Board::goal().blank_position());
    }

    #[test]
    fn equality_is_by_content() {
        let a = Board::new([7, 2, 4, 5, 0, 6, 8, 3, 1]);
        let b = Board::new([7, 2, 4, 5, 0, 6, 8, 3, 1]);
        let c = Board::new([7, 2, 4, 5, 0, 6, 8, 1, 3]);
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_ne!(a, c);
    }

    #[test]
    fn swapped_leaves_receiver_untouched() {
        let board = Board::goal();
        let moved = board.swapped((0, 0), (0, 1));
        assert_eq!(Board::goal(), board);
        assert_eq!(1, moved.tile(0, 0));
        assert_eq!(0, moved.tile(0, 1));
    }

    #[test]
    fn display_marks_the_blank() {
        let board = Board::new([1, 0, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(" 1 _ 2\n 3 4 5\n 6 7 8\n", board.to_string());
    }

    #[test]
    fn random_round_trip() {
        use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

        let mut rng = StdRng::seed_from_u64(0);
        let mut tiles: [u8; NUM_TILES] = [0, 1, 2, 3, 4, 5, 6, 7, 8];
        tiles.shuffle(&mut rng);
        let board = Board::new(tiles);
        for (row, col) in iproduct!(0..SIDE, 0..SIDE) {
            assert_eq!(tiles[row * SIDE + col], board.tile(row, col));
            assert_eq!(Ok((row, col)), board.locate(tiles[row * SIDE + col]));
        }
    }
}
