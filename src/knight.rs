//! This module contains the [Knight], which walks across a [Board], and the
//! [Move]s it makes.
//!
//! A knight borrows the board it stands on, so the board cannot change while
//! the knight is in use. Every move is checked against the board and the
//! knight's movement rule.

use crate::{Board, Location};
use crate::error::{Endpoint, KnightError, KnightResult};

use serde::{Deserialize, Serialize};

use std::cell::OnceCell;
use std::fmt::{self, Display, Formatter};

/// The eight `(dx, dy)` steps of a knight, in the order in which
/// [Knight::valid_moves] reports their targets.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1)
];

/// Indicates whether `to` is exactly one knight's move away from `from`.
pub fn is_knight_step(from: Location, to: Location) -> bool {
    KNIGHT_OFFSETS.iter().any(|&(dx, dy)| from.offset(dx, dy) == Some(to))
}

/// A single step of the knight from one location to another.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Eq,
    Hash,
    PartialEq,
    Serialize
)]
pub struct Move {
    start: Location,
    end: Location
}

impl Move {

    /// Creates a new move from `start` to `end`. Whether this is a legal
    /// knight's move is not checked.
    pub fn new(start: Location, end: Location) -> Move {
        Move {
            start,
            end
        }
    }

    /// Gets the location of the knight before this move.
    pub fn start(&self) -> Location {
        self.start
    }

    /// Gets the location of the knight after this move.
    pub fn end(&self) -> Location {
        self.end
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.start, self.end)
    }
}

/// A knight standing on a [Board]. It starts on the board's starting location
/// and can then be moved around using [Knight::move_to].
///
/// The targets the knight can reach from its current location are computed
/// on first request and cached until the knight moves.
#[derive(Clone, Debug)]
pub struct Knight<'b> {
    board: &'b Board,
    location: Location,
    valid_moves: OnceCell<Vec<Location>>
}

impl<'b> Knight<'b> {

    /// Creates a new knight which stands on the starting location of the
    /// given board.
    ///
    /// # Errors
    ///
    /// * `KnightError::Uninitialized` If the board has no squares.
    /// * `KnightError::MissingEndpoint` If the board has no starting location.
    pub fn new(board: &'b Board) -> KnightResult<Knight<'b>> {
        if !board.is_initialized() {
            return Err(KnightError::Uninitialized);
        }

        let start = board.start()
            .ok_or(KnightError::MissingEndpoint(Endpoint::Start))?;

        Ok(Knight {
            board,
            location: start,
            valid_moves: OnceCell::new()
        })
    }

    /// Binds this knight to another board and places it on that board's
    /// starting location. See [Knight::new] for the errors. If an error
    /// occurs, the knight is not changed.
    pub fn initialize(&mut self, board: &'b Board) -> KnightResult<()> {
        *self = Knight::new(board)?;
        Ok(())
    }

    /// Gets the board this knight stands on.
    pub fn board(&self) -> &'b Board {
        self.board
    }

    /// Gets the current location of this knight.
    pub fn location(&self) -> Location {
        self.location
    }

    /// Gets every location the knight can move to from its current location,
    /// that is, every valid target square of the board one knight's move
    /// away. The targets are ordered as the steps in [KNIGHT_OFFSETS].
    pub fn valid_moves(&self) -> &[Location] {
        self.valid_moves.get_or_init(|| {
            KNIGHT_OFFSETS.iter()
                .filter_map(|&(dx, dy)| self.location.offset(dx, dy))
                .filter(|&target| self.board.is_valid_target(target))
                .collect()
        })
    }

    /// Moves the knight to the given location and returns the [Move] that
    /// was made.
    ///
    /// # Errors
    ///
    /// * `KnightError::OutOfRange` If `target` is not a valid target square
    /// of the board, i.e. it is not on the board or void.
    /// * `KnightError::IllegalMove` If `target` is not one knight's move away
    /// from the current location.
    ///
    /// In both cases, the knight stays where it is.
    pub fn move_to(&mut self, target: Location) -> KnightResult<Move> {
        if !self.board.is_valid_target(target) {
            return Err(KnightError::OutOfRange(target));
        }

        if !is_knight_step(self.location, target) {
            return Err(KnightError::IllegalMove {
                from: self.location,
                to: target
            });
        }

        let step = Move::new(self.location, target);
        self.location = target;
        self.valid_moves.take();
        Ok(step)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::SquareKind;

    // The eight squares around the centre a knight can reach, plus the
    // centre itself.
    const STAR_MAP: [&str; 5] = [
        ".X.X.",
        "X...X",
        "..S..",
        "X...X",
        ".X.E."
    ];

    fn star_board() -> Board {
        Board::parse(&STAR_MAP).unwrap()
    }

    fn open_board() -> Board {
        let mut board = Board::with_size(5, 5).unwrap();

        for location in board.locations().collect::<Vec<_>>() {
            board.set(location, SquareKind::derive(location)).unwrap();
        }

        board.set_start(Location::new(1, 1)).unwrap();
        board.set_end(Location::new(5, 5)).unwrap();
        board
    }

    fn locations(coordinates: &[(u8, u8)]) -> Vec<Location> {
        coordinates.iter().map(|&(x, y)| Location::new(x, y)).collect()
    }

    #[test]
    fn move_display_and_equality() {
        let step = Move::new(Location::new(1, 2), Location::new(3, 3));

        assert_eq!("(1,2) => (3,3)", step.to_string());
        assert_eq!(Move::new(Location::new(1, 2), Location::new(3, 3)), step);
        assert_ne!(Move::new(Location::new(3, 3), Location::new(1, 2)), step);
    }

    #[test]
    fn knight_step() {
        let centre = Location::new(3, 3);

        assert!(is_knight_step(centre, Location::new(1, 2)));
        assert!(is_knight_step(centre, Location::new(4, 5)));
        assert!(!is_knight_step(centre, Location::new(3, 3)));
        assert!(!is_knight_step(centre, Location::new(4, 4)));
        assert!(!is_knight_step(centre, Location::new(5, 5)));
        assert!(!is_knight_step(Location::new(1, 1), Location::new(255, 2)));
    }

    #[test]
    fn new_starts_on_start() {
        let board = star_board();
        let knight = Knight::new(&board).unwrap();

        assert_eq!(Location::new(3, 3), knight.location());
        assert_eq!(board, *knight.board());
    }

    #[test]
    fn new_requires_initialized_board() {
        assert!(matches!(Knight::new(&Board::new()),
            Err(KnightError::Uninitialized)));
    }

    #[test]
    fn new_requires_start() {
        let board = Board::with_size(5, 5).unwrap();

        assert!(matches!(Knight::new(&board),
            Err(KnightError::MissingEndpoint(Endpoint::Start))));
    }

    #[test]
    fn initialize_rebinds() {
        let star = star_board();
        let open = open_board();
        let mut knight = Knight::new(&star).unwrap();
        knight.initialize(&open).unwrap();

        assert_eq!(Location::new(1, 1), knight.location());
        assert_eq!(locations(&[(3, 2), (2, 3)]), knight.valid_moves());
    }

    #[test]
    fn valid_moves_in_offset_order() {
        let board = star_board();
        let knight = Knight::new(&board).unwrap();

        assert_eq!(locations(&[
            (1, 2), (2, 1), (4, 1), (5, 2), (5, 4), (4, 5), (2, 5), (1, 4)
        ]), knight.valid_moves());
    }

    #[test]
    fn valid_moves_skip_void_and_out_of_bounds() {
        let board = star_board();
        let mut knight = Knight::new(&board).unwrap();
        knight.move_to(Location::new(1, 2)).unwrap();

        // (2,4) and (3,1) are void, the other targets are off the board.
        assert_eq!(locations(&[(3, 3)]), knight.valid_moves());
    }

    #[test]
    fn valid_moves_recomputed_after_move() {
        let board = open_board();
        let mut knight = Knight::new(&board).unwrap();

        assert_eq!(locations(&[(3, 2), (2, 3)]), knight.valid_moves());

        knight.move_to(Location::new(3, 2)).unwrap();

        assert_eq!(locations(&[(1, 1), (5, 1), (5, 3), (4, 4), (2, 4),
            (1, 3)]), knight.valid_moves());
    }

    #[test]
    fn move_returns_step() {
        let board = star_board();
        let mut knight = Knight::new(&board).unwrap();
        let step = knight.move_to(Location::new(5, 4)).unwrap();

        assert_eq!(Move::new(Location::new(3, 3), Location::new(5, 4)), step);
        assert_eq!(Location::new(5, 4), knight.location());
    }

    #[test]
    fn move_and_back_restores_location() {
        let board = open_board();
        let mut knight = Knight::new(&board).unwrap();
        let forward = knight.move_to(Location::new(2, 3)).unwrap();
        let back = knight.move_to(forward.start()).unwrap();

        assert_eq!(Location::new(1, 1), knight.location());
        assert_eq!(forward.end(), back.start());
        assert_eq!(locations(&[(3, 2), (2, 3)]), knight.valid_moves());
    }

    #[test]
    fn move_to_void_square() {
        let board = star_board();
        let mut knight = Knight::new(&board).unwrap();

        assert!(matches!(knight.move_to(Location::new(2, 2)),
            Err(KnightError::OutOfRange(_))));
        assert!(matches!(knight.move_to(Location::new(6, 4)),
            Err(KnightError::OutOfRange(_))));
        assert_eq!(Location::new(3, 3), knight.location());
    }

    #[test]
    fn move_not_a_knight_step() {
        let board = open_board();
        let mut knight = Knight::new(&board).unwrap();
        let target = Location::new(2, 2);

        assert!(matches!(knight.move_to(target),
            Err(KnightError::IllegalMove { from, to })
                if from == Location::new(1, 1) && to == target));
        assert_eq!(Location::new(1, 1), knight.location());
    }
}
