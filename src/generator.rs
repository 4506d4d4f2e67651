//! This module contains logic for generating random boards.
//!
//! A [Generator] decides independently for every square whether it is void,
//! and then places the starting and ending location on two distinct random
//! squares. The result is always a valid board, but there is no guarantee
//! that it has a solution. Combine it with a
//! [Solver](crate::solver::Solver) if solvable boards are required.

use crate::{Board, Location, SquareKind};
use crate::error::{KnightError, KnightResult};

use rand::Rng;
use rand::rngs::ThreadRng;

use rand_distr::{Bernoulli, Distribution};

use tracing::debug;

/// A generator randomly generates a [Board] with a given size. It uses a
/// random number generator to decide which squares are void and where the
/// starting and ending location are. For most cases, sensible defaults are
/// provided by [Generator::new_default].
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to generate the random
    /// boards.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

fn location_at(width: u8, index: usize) -> Location {
    let width = width as usize;
    Location::new((index % width + 1) as u8, (index / width + 1) as u8)
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator to
    /// generate random boards.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    fn pick_endpoints(&mut self, width: u8, height: u8)
            -> (Location, Location) {
        let squares = width as usize * height as usize;
        let start = self.rng.gen_range(0..squares);
        let mut end = self.rng.gen_range(0..(squares - 1));

        if end >= start {
            end += 1;
        }

        (location_at(width, start), location_at(width, end))
    }

    /// Generates a new random [Board] with the given dimensions.
    ///
    /// It is guaranteed that [Board::validate] on the result succeeds.
    /// However, the board may not have any solution.
    ///
    /// # Arguments
    ///
    /// * `width`: The number of columns of the board. Must be at least
    /// [MINIMUM_BOARD_SIZE](crate::MINIMUM_BOARD_SIZE).
    /// * `height`: The number of rows of the board. Must be at least
    /// [MINIMUM_BOARD_SIZE](crate::MINIMUM_BOARD_SIZE).
    /// * `density`: The probability with which any square other than the
    /// starting and ending location is passable. A density of 0 yields a
    /// board where only those two squares are passable, a density of 1 yields
    /// a board without void squares. Must be in the range `[0, 1]`.
    ///
    /// # Errors
    ///
    /// * `KnightError::InvalidDimensions` If `width` or `height` is less than
    /// the minimum size.
    /// * `KnightError::InvalidDensity` If `density` is not in the range
    /// `[0, 1]`, including if it is NaN.
    pub fn generate(&mut self, width: u8, height: u8, density: f64)
            -> KnightResult<Board> {
        let mut board = Board::with_size(width, height)?;
        let passable = Bernoulli::new(density)
            .map_err(|_| KnightError::InvalidDensity(density))?;

        for location in board.locations() {
            if passable.sample(&mut self.rng) {
                board.set(location, SquareKind::derive(location))?;
            }
        }

        let (start, end) = self.pick_endpoints(width, height);
        board.set_start(start)?;
        board.set_end(end)?;

        debug!(width, height, density, %start, %end, "generated board");

        Ok(board)
    }
}
