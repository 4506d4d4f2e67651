// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_codeblock_attributes)]

//! This crate finds paths for a chess knight across a partially blocked,
//! rectangular board. It supports the following key features:
//!
//! * Parsing and printing boards from a simple text map
//! * Moving a [Knight](knight::Knight) across a board, checking every move
//! * Searching for the first, the shortest or all paths from the starting to
//! the ending location using a backtracking algorithm
//! * Generating random boards
//!
//! # Parsing boards
//!
//! A board is described by a list of rows of equal length, each character
//! describing one square: `.` is a void square which the knight may never
//! enter, `X` is a regular square, `S` is the starting location and `E` is
//! the ending location. There must be exactly one `S` and one `E`. See
//! [Board::parse] for the details.
//!
//! ```
//! use knight_maze::{Board, Location, SquareKind};
//!
//! let board = Board::parse(&[
//!     ".S.X.",
//!     "X...X",
//!     "..X..",
//!     "X...X",
//!     ".X.E."
//! ]).unwrap();
//!
//! assert_eq!(Some(Location::new(2, 1)), board.start());
//! assert_eq!(Some(Location::new(4, 5)), board.end());
//! assert_eq!(SquareKind::Void, board.get(Location::new(1, 1)).unwrap());
//! assert_eq!(SquareKind::White, board.get(Location::new(3, 3)).unwrap());
//! ```
//!
//! Coordinates are 1-based: `x` counts columns from the left, `y` counts rows
//! from the top.
//!
//! # Solving boards
//!
//! The [Solver](solver::Solver) trait describes anything that can find knight
//! paths. [BacktrackingSolver](solver::BacktrackingSolver) is the provided
//! implementation. It searches depth-first and never visits a square twice
//! within one path. One of three [SearchMode](solver::SearchMode)s has to be
//! chosen:
//!
//! * `First` stops at the first path found.
//! * `Shortest` keeps all paths of minimal length and prunes every branch
//! that is already longer than the best path found so far.
//! * `Full` finds every path.
//!
//! ```
//! use knight_maze::Board;
//! use knight_maze::solver::{BacktrackingSolver, SearchMode, Solver};
//!
//! let board = Board::parse(&[
//!     "S.XX.",
//!     ".XX.X",
//!     "X.X.X",
//!     ".XXX.",
//!     "..X.E"
//! ]).unwrap();
//! let result = BacktrackingSolver.solve(&board, SearchMode::Shortest)
//!     .unwrap();
//!
//! assert_eq!(2, result.solutions().len());
//! assert!(result.solutions().iter().all(|solution| solution.len() == 4));
//! ```
//!
//! # Note regarding performance
//!
//! The search is exhaustive, so `Full` mode on large, open boards may take a
//! very long time. `First` and `Shortest` mode usually terminate quickly in
//! practice. As with any backtracking search, it is strongly recommended to
//! use at least `opt-level = 2`, even in tests.

pub mod error;
pub mod generator;
pub mod knight;
pub mod render;
pub mod solver;
pub mod util;

#[cfg(test)]
mod maze_tests;

#[cfg(test)]
mod random_tests;

use error::{
    BoardParseError,
    BoardParseResult,
    Endpoint,
    KnightError,
    KnightResult
};

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Formatter};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// The smallest width and height a [Board] accepts unless configured
/// otherwise using [Board::with_minimum_size].
pub const MINIMUM_BOARD_SIZE: u8 = 5;

/// The character representing a void square in a board map.
pub const VOID_CHAR: char = '.';

/// The character representing a passable square in a board map.
pub const SQUARE_CHAR: char = 'X';

/// The character representing the starting location in a board map.
pub const START_CHAR: char = 'S';

/// The character representing the ending location in a board map.
pub const END_CHAR: char = 'E';

/// A square on a board, given by its 1-based column `x` and row `y`. A
/// location by itself is never validated, checking whether it lies on some
/// board is the responsibility of that [Board].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize
)]
pub struct Location {
    x: u8,
    y: u8
}

impl Location {

    /// Creates a new location from the 1-based column `x` and row `y`.
    pub fn new(x: u8, y: u8) -> Location {
        Location {
            x,
            y
        }
    }

    /// Gets the 1-based column of this location.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Gets the 1-based row of this location.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Gets the location which is `dx` columns and `dy` rows away from this
    /// one. If that location cannot be represented, i.e. one of its
    /// coordinates would be negative or exceed 255, `None` is returned.
    pub fn offset(&self, dx: i8, dy: i8) -> Option<Location> {
        Some(Location::new(self.x.checked_add_signed(dx)?,
            self.y.checked_add_signed(dy)?))
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// The content of a single square of a [Board].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Eq,
    Hash,
    PartialEq,
    Serialize
)]
pub enum SquareKind {

    /// A square the knight can never enter.
    #[default]
    Void,

    /// A passable, black square.
    Black,

    /// A passable, white square.
    White
}

impl SquareKind {

    /// Gets the colour a passable square at the given location has. The
    /// colours follow the usual checkerboard pattern where the top-left
    /// square `(1,1)` is white: on odd rows the odd columns are white, on
    /// even rows the even columns are.
    pub fn derive(location: Location) -> SquareKind {
        if location.x() % 2 == location.y() % 2 {
            SquareKind::White
        }
        else {
            SquareKind::Black
        }
    }

    /// Indicates whether a knight can stand on a square of this kind, that is,
    /// whether it is not [SquareKind::Void].
    pub fn is_passable(self) -> bool {
        self != SquareKind::Void
    }
}

/// A rectangular board of squares, some of which are void, with an optional
/// starting and ending location for the knight.
///
/// A board is created empty (see [Board::new]) and then either initialized to
/// an all-void grid of a given size (see [Board::initialize]) or loaded from a
/// text map (see [Board::load_map]). After initializing, the starting and
/// ending locations can be assigned manually.
///
/// Boards are serialized as their text map, see [Board::to_rows].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "Vec<String>")]
#[serde(try_from = "Vec<String>")]
pub struct Board {
    width: u8,
    height: u8,
    minimum_size: u8,
    cells: Vec<SquareKind>,
    start: Option<Location>,
    end: Option<Location>
}

/// Splits a text into map rows. Line endings may be `\n` or `\r\n`, trailing
/// empty lines are dropped.
pub(crate) fn map_rows(text: &str) -> Vec<&str> {
    let mut rows: Vec<&str> = text.lines().collect();

    while let Some(last) = rows.last() {
        if last.is_empty() {
            rows.pop();
        }
        else {
            break;
        }
    }

    rows
}

impl Board {

    /// Creates a new, empty board. It has no squares and neither a starting
    /// nor an ending location. Its minimum size is [MINIMUM_BOARD_SIZE].
    pub fn new() -> Board {
        Board::with_minimum_size(MINIMUM_BOARD_SIZE)
    }

    /// Creates a new, empty board which accepts any width and height of at
    /// least `minimum_size`. Since a board always needs at least one square,
    /// a minimum of 0 is treated as 1.
    pub fn with_minimum_size(minimum_size: u8) -> Board {
        Board {
            width: 0,
            height: 0,
            minimum_size: minimum_size.max(1),
            cells: Vec::new(),
            start: None,
            end: None
        }
    }

    /// Creates a new board of the given size where every square is void. See
    /// [Board::initialize].
    ///
    /// # Errors
    ///
    /// If `width` or `height` is less than [MINIMUM_BOARD_SIZE]. In that
    /// case, `KnightError::InvalidDimensions` is returned.
    pub fn with_size(width: u8, height: u8) -> KnightResult<Board> {
        let mut board = Board::new();
        board.initialize(width, height)?;
        Ok(board)
    }

    /// Parses a board from a text map with the default minimum size. Each
    /// entry of `rows` is one row of the board, top to bottom, and each
    /// character one square, left to right. The characters have the following
    /// meaning:
    ///
    /// * `.`: A void square.
    /// * `X`: A passable square.
    /// * `S`: The starting location, which is passable.
    /// * `E`: The ending location, which is passable.
    ///
    /// Passable squares get the colour given by [SquareKind::derive].
    ///
    /// # Errors
    ///
    /// * `BoardParseError::TooManyRows` If there are more than 255 rows.
    /// * `BoardParseError::TooFewRows` If there are less rows than the
    /// minimum size.
    /// * `BoardParseError::RowTooShort` If the first row is shorter than the
    /// minimum size.
    /// * `BoardParseError::RowTooLong` If the first row is longer than 255
    /// characters.
    /// * `BoardParseError::InconsistentRowLength` If any row does not have the
    /// length of the first one.
    /// * `BoardParseError::InvalidCharacter` If any character is not one of
    /// the four listed above.
    /// * `BoardParseError::DuplicateStart` or `BoardParseError::DuplicateEnd`
    /// If there is more than one `S` or `E`.
    /// * `BoardParseError::MissingStart` or `BoardParseError::MissingEnd` If
    /// there is no `S` or `E`.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> BoardParseResult<Board> {
        Board::parse_with_minimum_size(rows, MINIMUM_BOARD_SIZE)
    }

    fn parse_with_minimum_size<S: AsRef<str>>(rows: &[S], minimum_size: u8)
            -> BoardParseResult<Board> {
        let mut board = Board::with_minimum_size(minimum_size);
        let minimum_size = board.minimum_size as usize;

        if rows.len() > u8::MAX as usize {
            return Err(BoardParseError::TooManyRows);
        }

        if rows.len() < minimum_size {
            return Err(BoardParseError::TooFewRows(board.minimum_size));
        }

        let width = rows[0].as_ref().chars().count();

        if width < minimum_size {
            return Err(BoardParseError::RowTooShort(board.minimum_size));
        }

        if width > u8::MAX as usize {
            return Err(BoardParseError::RowTooLong);
        }

        board.width = width as u8;
        board.height = rows.len() as u8;
        board.cells = vec![SquareKind::Void; width * rows.len()];

        for (row, y) in rows.iter().zip(1..=board.height) {
            let row = row.as_ref();

            if row.chars().count() != width {
                return Err(BoardParseError::InconsistentRowLength { row: y });
            }

            for (character, x) in row.chars().zip(1..=board.width) {
                board.parse_square(character, Location::new(x, y))?;
            }
        }

        if board.start.is_none() {
            return Err(BoardParseError::MissingStart);
        }

        if board.end.is_none() {
            return Err(BoardParseError::MissingEnd);
        }

        Ok(board)
    }

    fn parse_square(&mut self, character: char, location: Location)
            -> BoardParseResult<()> {
        let index = self.index(location);

        match character {
            START_CHAR => {
                if self.start.replace(location).is_some() {
                    return Err(BoardParseError::DuplicateStart);
                }

                self.cells[index] = SquareKind::derive(location);
            },
            END_CHAR => {
                if self.end.replace(location).is_some() {
                    return Err(BoardParseError::DuplicateEnd);
                }

                self.cells[index] = SquareKind::derive(location);
            },
            SQUARE_CHAR => self.cells[index] = SquareKind::derive(location),
            VOID_CHAR => self.cells[index] = SquareKind::Void,
            _ => return Err(BoardParseError::InvalidCharacter {
                character,
                location
            })
        }

        Ok(())
    }

    /// Reads a board map from the file at the given path and parses it as
    /// specified in [Board::parse]. Trailing empty lines are ignored.
    ///
    /// # Errors
    ///
    /// * `KnightError::Io` If the file cannot be read.
    /// * `KnightError::InvalidFormat` If its content is not a valid map.
    pub fn from_file(path: impl AsRef<Path>) -> KnightResult<Board> {
        let mut board = Board::new();
        board.load_file(path)?;
        Ok(board)
    }

    /// Allocates a new grid of the given size where every square is void. Any
    /// previous squares as well as the starting and ending location are
    /// discarded.
    ///
    /// # Errors
    ///
    /// If `width` or `height` is less than the minimum size of this board. In
    /// that case, `KnightError::InvalidDimensions` is returned and the board
    /// is not changed.
    pub fn initialize(&mut self, width: u8, height: u8) -> KnightResult<()> {
        if width < self.minimum_size || height < self.minimum_size {
            return Err(KnightError::InvalidDimensions {
                width,
                height,
                minimum: self.minimum_size
            });
        }

        self.width = width;
        self.height = height;
        self.cells = vec![SquareKind::Void; width as usize * height as usize];
        self.start = None;
        self.end = None;
        Ok(())
    }

    /// Replaces the content of this board by the one described in the given
    /// map. See [Board::parse] for the format. The minimum size of this board
    /// is kept and applies to the map.
    ///
    /// # Errors
    ///
    /// Any `BoardParseError` wrapped in `KnightError::InvalidFormat`. In
    /// that case, the board is not changed.
    pub fn load_map<S: AsRef<str>>(&mut self, rows: &[S]) -> KnightResult<()> {
        *self = Board::parse_with_minimum_size(rows, self.minimum_size)?;
        tracing::debug!(width = self.width, height = self.height,
            "loaded board map");
        Ok(())
    }

    /// Replaces the content of this board by the map read from the file at
    /// the given path. See [Board::from_file].
    ///
    /// # Errors
    ///
    /// * `KnightError::Io` If the file cannot be read.
    /// * `KnightError::InvalidFormat` If its content is not a valid map.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> KnightResult<()> {
        let text = fs::read_to_string(path)?;
        self.load_map(&map_rows(&text))
    }

    /// Gets the number of columns of this board. This is 0 if the board has
    /// not been initialized.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Gets the number of rows of this board. This is 0 if the board has not
    /// been initialized.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Gets the smallest width and height this board accepts.
    pub fn minimum_size(&self) -> u8 {
        self.minimum_size
    }

    /// Indicates whether the squares of this board have been allocated, i.e.
    /// whether it has been initialized or loaded.
    pub fn is_initialized(&self) -> bool {
        !self.cells.is_empty()
    }

    /// Gets the starting location of the knight, if one has been set.
    pub fn start(&self) -> Option<Location> {
        self.start
    }

    /// Gets the location the knight has to reach, if one has been set.
    pub fn end(&self) -> Option<Location> {
        self.end
    }

    /// Gets the squares of this board in left-to-right, top-to-bottom order,
    /// where rows are together.
    pub fn cells(&self) -> &[SquareKind] {
        &self.cells
    }

    pub(crate) fn index(&self, location: Location) -> usize {
        (location.y() as usize - 1) * self.width as usize +
            location.x() as usize - 1
    }

    /// Indicates whether the given location lies on this board, that is,
    /// `1 ≤ x ≤ width` and `1 ≤ y ≤ height`.
    pub fn is_in_bounds(&self, location: Location) -> bool {
        location.x() > 0 && location.x() <= self.width &&
            location.y() > 0 && location.y() <= self.height
    }

    /// Indicates whether the knight may stand on the given location, that is,
    /// whether it lies on this board and is not void.
    pub fn is_valid_target(&self, location: Location) -> bool {
        self.is_in_bounds(location) &&
            self.cells.get(self.index(location))
                .map_or(false, |kind| kind.is_passable())
    }

    /// Gets the kind of the square at the given location.
    ///
    /// # Errors
    ///
    /// * `KnightError::OutOfRange` If the location does not lie on this
    /// board.
    /// * `KnightError::Uninitialized` If the squares have not been allocated.
    pub fn get(&self, location: Location) -> KnightResult<SquareKind> {
        if !self.is_in_bounds(location) {
            return Err(KnightError::OutOfRange(location));
        }

        self.cells.get(self.index(location))
            .copied()
            .ok_or(KnightError::Uninitialized)
    }

    /// Sets the kind of the square at the given location. Note that this does
    /// not check whether the colour matches [SquareKind::derive] and allows
    /// voiding the starting or ending location, which will be reported by
    /// [Board::validate].
    ///
    /// # Errors
    ///
    /// * `KnightError::OutOfRange` If the location does not lie on this
    /// board.
    /// * `KnightError::Uninitialized` If the squares have not been allocated.
    pub fn set(&mut self, location: Location, kind: SquareKind)
            -> KnightResult<()> {
        if !self.is_in_bounds(location) {
            return Err(KnightError::OutOfRange(location));
        }

        let index = self.index(location);
        let cell = self.cells.get_mut(index)
            .ok_or(KnightError::Uninitialized)?;
        *cell = kind;
        Ok(())
    }

    fn set_endpoint(&mut self, endpoint: Endpoint, location: Location)
            -> KnightResult<()> {
        let other = match endpoint {
            Endpoint::Start => self.end,
            Endpoint::End => self.start
        };

        if !self.is_in_bounds(location) {
            return Err(KnightError::OutOfRange(location));
        }

        if other == Some(location) {
            return Err(KnightError::StartEqualsEnd(location));
        }

        self.set(location, SquareKind::derive(location))?;

        match endpoint {
            Endpoint::Start => self.start = Some(location),
            Endpoint::End => self.end = Some(location)
        }

        Ok(())
    }

    /// Sets the starting location of the knight. The square at that location
    /// is made passable, even if it was void before.
    ///
    /// # Errors
    ///
    /// * `KnightError::OutOfRange` If the location does not lie on this
    /// board.
    /// * `KnightError::StartEqualsEnd` If the location is the ending location.
    pub fn set_start(&mut self, location: Location) -> KnightResult<()> {
        self.set_endpoint(Endpoint::Start, location)
    }

    /// Sets the location the knight has to reach. The square at that location
    /// is made passable, even if it was void before.
    ///
    /// # Errors
    ///
    /// * `KnightError::OutOfRange` If the location does not lie on this
    /// board.
    /// * `KnightError::StartEqualsEnd` If the location is the starting
    /// location.
    pub fn set_end(&mut self, location: Location) -> KnightResult<()> {
        self.set_endpoint(Endpoint::End, location)
    }

    /// Checks this board for consistency and returns a message for every
    /// violated rule. The rules are, in this order:
    ///
    /// * The width is at least the minimum size.
    /// * The height is at least the minimum size.
    /// * The squares have been allocated.
    /// * There are exactly `width · height` squares.
    /// * The starting location exists and is a valid target.
    /// * The ending location exists and is a valid target.
    /// * The starting location is not the ending location.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let minimum_size = self.minimum_size;
        let rules = [
            (self.width >= minimum_size,
                format!("board is less than the minimum width of {}",
                    minimum_size)),
            (self.height >= minimum_size,
                format!("board is less than the minimum height of {}",
                    minimum_size)),
            (self.is_initialized(),
                String::from("board data must be initialized")),
            (self.is_initialized() &&
                    self.cells.len() ==
                        self.width as usize * self.height as usize,
                String::from(
                    "board data is incorrect size for specified width and \
                    height")),
            (self.start.map_or(false, |start| self.is_valid_target(start)),
                String::from("starting location is invalid")),
            (self.end.map_or(false, |end| self.is_valid_target(end)),
                String::from("ending location is invalid")),
            (self.start != self.end,
                String::from(
                    "starting location must not equal ending location"))
        ];
        let messages: Vec<String> = rules.into_iter()
            .filter(|(satisfied, _)| !satisfied)
            .map(|(_, message)| message)
            .collect();

        if messages.is_empty() {
            Ok(())
        }
        else {
            Err(messages)
        }
    }

    /// Indicates whether this board satisfies all rules checked by
    /// [Board::validate].
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Gets every location on this board in left-to-right, top-to-bottom
    /// order, where rows are together.
    pub fn locations(&self) -> impl Iterator<Item = Location> {
        let width = self.width;

        (1..=self.height)
            .flat_map(move |y| (1..=width).map(move |x| Location::new(x, y)))
    }

    /// Converts this board into the map format accepted by [Board::parse],
    /// one `String` per row. A valid board that is converted and parsed again
    /// will not change, as is illustrated below.
    ///
    /// ```
    /// use knight_maze::{Board, Location};
    ///
    /// let mut board = Board::with_size(5, 6).unwrap();
    /// board.set_start(Location::new(1, 1)).unwrap();
    /// board.set_end(Location::new(4, 6)).unwrap();
    ///
    /// let board_parsed = Board::parse(&board.to_rows()).unwrap();
    /// assert_eq!(board, board_parsed);
    /// ```
    pub fn to_rows(&self) -> Vec<String> {
        (1..=self.height)
            .map(|y| (1..=self.width)
                .map(|x| self.map_char(Location::new(x, y)))
                .collect())
            .collect()
    }

    fn map_char(&self, location: Location) -> char {
        if self.start == Some(location) {
            START_CHAR
        }
        else if self.end == Some(location) {
            END_CHAR
        }
        else if self.is_valid_target(location) {
            SQUARE_CHAR
        }
        else {
            VOID_CHAR
        }
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_rows().join("\n").as_str())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> BoardParseResult<Board> {
        Board::parse(&map_rows(s))
    }
}

impl From<Board> for Vec<String> {
    fn from(board: Board) -> Vec<String> {
        board.to_rows()
    }
}

impl TryFrom<Vec<String>> for Board {
    type Error = BoardParseError;

    fn try_from(rows: Vec<String>) -> BoardParseResult<Board> {
        Board::parse(&rows)
    }
}
