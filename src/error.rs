//! This module contains some error and result definitions used in this crate.

use crate::Location;

use std::fmt::{self, Display, Formatter};
use std::io;

use thiserror::Error;

/// Names one of the two distinguished squares of a [Board](crate::Board).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Endpoint {

    /// The square the knight starts on.
    Start,

    /// The square the knight has to reach.
    End
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "starting location"),
            Endpoint::End => write!(f, "ending location")
        }
    }
}

/// Miscellaneous errors that can occur on the methods of this crate. This
/// does not exclude errors that occur when parsing a board map, see
/// [BoardParseError] for that. Parse errors are wrapped in
/// [KnightError::InvalidFormat] whenever a method can fail both ways.
#[derive(Debug, Error)]
pub enum KnightError {

    /// Indicates that a location lies outside the board in question, that is,
    /// one of its coordinates is 0 or greater than the board's width or
    /// height respectively. Also raised when a knight is asked to move onto a
    /// square which is not a valid target.
    #[error("location {0} is out of range")]
    OutOfRange(Location),

    /// Indicates that the dimensions specified for a board are smaller than
    /// the board's minimum size.
    #[error("invalid board size {width}x{height}, board must be at least \
        {minimum} in each dimension")]
    InvalidDimensions {

        /// The requested width.
        width: u8,

        /// The requested height.
        height: u8,

        /// The minimum size the board accepts in each dimension.
        minimum: u8
    },

    /// Indicates that a knight was asked to move to a square which is not one
    /// knight's move away from its current location.
    #[error("invalid move from {from} to {to}")]
    IllegalMove {

        /// The knight's location before the attempted move.
        from: Location,

        /// The requested target.
        to: Location
    },

    /// Indicates that the starting and ending location of a board would
    /// coincide.
    #[error("starting and ending location cannot both be {0}")]
    StartEqualsEnd(Location),

    /// Indicates that a board has no starting or ending location.
    #[error("board has no {0}")]
    MissingEndpoint(Endpoint),

    /// Indicates that the starting or ending location of a board is a void
    /// square.
    #[error("{0} {1} is a void square")]
    VoidEndpoint(Endpoint, Location),

    /// Indicates that a search was requested for a knight which is not
    /// standing on the starting location of its board.
    #[error("knight is at {knight} instead of the starting location {start}")]
    KnightNotAtStart {

        /// Where the knight actually is.
        knight: Location,

        /// The board's starting location.
        start: Location
    },

    /// Indicates that the board data was never allocated, i.e. the board was
    /// neither initialized with a size nor loaded from a map.
    #[error("board data is uninitialized")]
    Uninitialized,

    /// Indicates that a board map could not be parsed.
    #[error("invalid board data: {0}")]
    InvalidFormat(#[from] BoardParseError),

    /// Indicates that a board violates one or more consistency rules. Every
    /// violated rule contributes one message.
    #[error("invalid board: {}", .0.join("; "))]
    InvalidBoard(Vec<String>),

    /// Indicates that a density for random board generation is not a
    /// probability, i.e. it is not in the range `[0, 1]`.
    #[error("density {0} is not in the range [0, 1]")]
    InvalidDensity(f64),

    /// Indicates that a string does not name a
    /// [SearchMode](crate::solver::SearchMode).
    #[error("unknown search mode '{0}'")]
    UnknownSearchMode(String),

    /// Indicates that a board file could not be read.
    #[error("error reading board data")]
    Io(#[from] io::Error)
}

/// Syntactic sugar for `Result<V, KnightError>`.
pub type KnightResult<V> = Result<V, KnightError>;

/// An enumeration of the errors that may occur when parsing a
/// [Board](crate::Board) from its textual map.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum BoardParseError {

    /// Indicates that the map has less rows than the board's minimum size.
    #[error("board must have at least {0} rows")]
    TooFewRows(u8),

    /// Indicates that the map has more rows than a coordinate can address.
    #[error("row count exceeds the 255 square limit")]
    TooManyRows,

    /// Indicates that the first row is shorter than the board's minimum size.
    #[error("board must have at least {0} columns")]
    RowTooShort(u8),

    /// Indicates that the first row is longer than a coordinate can address.
    #[error("line length exceeds the 255 square limit")]
    RowTooLong,

    /// Indicates that some row does not have the same length as the first
    /// one. The wrapped value is the 1-based index of the offending row.
    #[error("inconsistent line length in row {row}")]
    InconsistentRowLength {

        /// The 1-based index of the offending row.
        row: u8
    },

    /// Indicates that the map contains a character other than `.`, `X`, `S`
    /// and `E`.
    #[error("invalid character '{character}' at {location}")]
    InvalidCharacter {

        /// The unexpected character.
        character: char,

        /// Where it was found.
        location: Location
    },

    /// Indicates that the map contains more than one `S`.
    #[error("only one starting location may be specified")]
    DuplicateStart,

    /// Indicates that the map contains more than one `E`.
    #[error("only one ending location may be specified")]
    DuplicateEnd,

    /// Indicates that the map contains no `S`.
    #[error("no starting location specified")]
    MissingStart,

    /// Indicates that the map contains no `E`.
    #[error("no ending location specified")]
    MissingEnd
}

/// Syntactic sugar for `Result<V, BoardParseError>`.
pub type BoardParseResult<V> = Result<V, BoardParseError>;
