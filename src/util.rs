//! This module contains utility functionality needed for this crate. Most
//! prominently, it contains the definition of the [SquareSet] used by the
//! solver to remember which squares the current path has visited.

use crate::{Board, Location};
use crate::error::{KnightError, KnightResult};

/// A set of the squares of a board with fixed dimensions that is implemented
/// as a bit vector. Each square is represented by one bit in a vector of
/// numbers, in the same left-to-right, top-to-bottom order as
/// [Board::cells]. This generally has better performance than a `HashSet`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SquareSet {
    width: u8,
    height: u8,
    len: usize,
    content: Vec<u64>
}

impl SquareSet {

    /// Creates a new, empty set for the squares of a board with the given
    /// dimensions.
    pub fn new(width: u8, height: u8) -> SquareSet {
        let squares = width as usize * height as usize;

        SquareSet {
            width,
            height,
            len: 0,
            content: vec![0u64; (squares + 63) / 64]
        }
    }

    /// Creates a new, empty set for the squares of the given board.
    pub fn for_board(board: &Board) -> SquareSet {
        SquareSet::new(board.width(), board.height())
    }

    fn bit(&self, location: Location) -> Option<(usize, u64)> {
        let x = location.x();
        let y = location.y();

        if x == 0 || x > self.width || y == 0 || y > self.height {
            return None;
        }

        let index = (y as usize - 1) * self.width as usize + x as usize - 1;
        Some((index / 64, 1u64 << (index % 64)))
    }

    /// Indicates whether the given location is contained in this set. Any
    /// location outside the board's dimensions is never contained.
    pub fn contains(&self, location: Location) -> bool {
        self.bit(location)
            .map_or(false, |(word, mask)| self.content[word] & mask != 0)
    }

    /// Inserts the given location into this set. Returns `true` if it was not
    /// contained before.
    ///
    /// # Errors
    ///
    /// If the location lies outside the board's dimensions. In that case,
    /// `KnightError::OutOfRange` is returned.
    pub fn insert(&mut self, location: Location) -> KnightResult<bool> {
        let (word, mask) = self.bit(location)
            .ok_or(KnightError::OutOfRange(location))?;
        let inserted = self.content[word] & mask == 0;

        if inserted {
            self.content[word] |= mask;
            self.len += 1;
        }

        Ok(inserted)
    }

    /// Removes the given location from this set. Returns `true` if it was
    /// contained before.
    ///
    /// # Errors
    ///
    /// If the location lies outside the board's dimensions. In that case,
    /// `KnightError::OutOfRange` is returned.
    pub fn remove(&mut self, location: Location) -> KnightResult<bool> {
        let (word, mask) = self.bit(location)
            .ok_or(KnightError::OutOfRange(location))?;
        let removed = self.content[word] & mask != 0;

        if removed {
            self.content[word] &= !mask;
            self.len -= 1;
        }

        Ok(removed)
    }

    /// Gets the number of locations in this set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Indicates whether this set contains no locations.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
