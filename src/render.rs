//! This module converts boards and search results into human-readable text.
//! Every function returns a `String` where each line, including the last
//! one, is terminated by `\n`.

use crate::{
    Board,
    Location,
    SquareKind,
    END_CHAR,
    SQUARE_CHAR,
    START_CHAR,
    VOID_CHAR
};
use crate::knight::Move;
use crate::solver::SolveResult;

/// The character used for black squares when rendering in colour.
pub const BLACK_CHAR: char = 'B';

/// The character used for white squares when rendering in colour.
pub const WHITE_CHAR: char = 'W';

/// The text rendered by [solutions] if there are none.
pub const NO_SOLUTIONS: &str = "No solutions found";

/// Renders the given board with one line per row. The starting and ending
/// location are shown as `S` and `E` and void squares as `.`. Other squares
/// are shown as `B` or `W` according to their colour, unless `monochrome` is
/// set, in which case they are all shown as `X`.
///
/// In monochrome, the output of a valid board is a map that can be parsed by
/// [Board::parse] again.
pub fn board(board: &Board, monochrome: bool) -> String {
    let mut text = String::new();

    for y in 1..=board.height() {
        for x in 1..=board.width() {
            let location = Location::new(x, y);

            let c = if board.start() == Some(location) {
                START_CHAR
            }
            else if board.end() == Some(location) {
                END_CHAR
            }
            else {
                match board.get(location) {
                    Ok(SquareKind::Black) if monochrome => SQUARE_CHAR,
                    Ok(SquareKind::White) if monochrome => SQUARE_CHAR,
                    Ok(SquareKind::Black) => BLACK_CHAR,
                    Ok(SquareKind::White) => WHITE_CHAR,
                    Ok(SquareKind::Void) | Err(_) => VOID_CHAR
                }
            };

            text.push(c);
        }

        text.push('\n');
    }

    text
}

/// Renders a single path as one line, its moves separated by `", "`.
pub fn solution(moves: &[Move]) -> String {
    let line = moves.iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    format!("{}\n", line)
}

/// Renders every given path, each one preceded by a `Solution i of n` header
/// and followed by an empty line. If there are no paths, [NO_SOLUTIONS] is
/// rendered instead.
pub fn solutions(solutions: &[Vec<Move>]) -> String {
    if solutions.is_empty() {
        return format!("{}\n", NO_SOLUTIONS);
    }

    let count = solutions.len();
    let mut text = String::new();

    for (i, moves) in solutions.iter().enumerate() {
        text.push_str(&format!("Solution {} of {}\n", i + 1, count));
        text.push_str(&solution(moves));
        text.push('\n');
    }

    text
}

/// Renders the statistics of a search result as a single line.
pub fn summary(result: &SolveResult) -> String {
    let length = |value: Option<usize>| value
        .map_or_else(|| String::from("-"), |length| length.to_string());

    format!("solutions: {}, moves evaluated: {}, longest chain evaluated: {}, \
        shortest solution: {}, longest solution: {}\n",
        result.solutions().len(),
        result.moves_evaluated(),
        result.longest_chain_evaluated(),
        length(result.shortest_solution()),
        length(result.longest_solution()))
}
