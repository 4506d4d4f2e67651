//! This module contains the logic for finding knight paths.
//!
//! Most importantly, this module contains the definition of the
//! [Solver](trait.Solver.html) trait and the
//! [BacktrackingSolver](struct.BacktrackingSolver.html) as a generally usable
//! implementation.

use crate::{Board, Location};
use crate::error::{Endpoint, KnightError, KnightResult};
use crate::knight::{Knight, Move};
use crate::util::SquareSet;

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Formatter};
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, trace};

/// An enumeration of the different kinds of searches a [Solver] can perform.
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
pub enum SearchMode {

    /// Stop as soon as one path to the ending location has been found.
    #[default]
    First,

    /// Find every path of minimal length.
    Shortest,

    /// Find every path to the ending location which does not visit any square
    /// twice.
    Full
}

impl Display for SearchMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::First => write!(f, "first"),
            SearchMode::Shortest => write!(f, "shortest"),
            SearchMode::Full => write!(f, "full")
        }
    }
}

impl FromStr for SearchMode {
    type Err = KnightError;

    fn from_str(s: &str) -> KnightResult<SearchMode> {
        match s.to_ascii_lowercase().as_str() {
            "first" => Ok(SearchMode::First),
            "shortest" => Ok(SearchMode::Shortest),
            "full" | "all" => Ok(SearchMode::Full),
            _ => Err(KnightError::UnknownSearchMode(s.to_owned()))
        }
    }
}

/// The outcome of a search. It holds the paths found, ordered by ascending
/// number of moves, where paths of equal length keep the order in which they
/// were found. Additionally, some statistics about the search are provided.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SolveResult {
    solutions: Vec<Vec<Move>>,
    moves_evaluated: u64,
    longest_chain_evaluated: usize,
    shortest_solution: Option<usize>,
    longest_solution: Option<usize>
}

impl SolveResult {

    /// Gets the paths found by the search. Each path is the sequence of moves
    /// from the starting to the ending location.
    pub fn solutions(&self) -> &[Vec<Move>] {
        &self.solutions
    }

    /// Converts this result into the paths it holds.
    pub fn into_solutions(self) -> Vec<Vec<Move>> {
        self.solutions
    }

    /// Indicates whether at least one path was found.
    pub fn is_solved(&self) -> bool {
        !self.solutions.is_empty()
    }

    /// Gets the number of moves the knight made during the search, not
    /// counting the moves that took it back.
    pub fn moves_evaluated(&self) -> u64 {
        self.moves_evaluated
    }

    /// Gets the largest number of moves in any path the search reached,
    /// whether or not it led to the ending location.
    pub fn longest_chain_evaluated(&self) -> usize {
        self.longest_chain_evaluated
    }

    /// Gets the number of moves of the shortest path found, if any.
    pub fn shortest_solution(&self) -> Option<usize> {
        self.shortest_solution
    }

    /// Gets the number of moves of the longest path found, if any.
    pub fn longest_solution(&self) -> Option<usize> {
        self.longest_solution
    }
}

/// A trait for structs which have the ability to find paths for a knight from
/// the starting to the ending location of a [Board].
pub trait Solver {

    /// Searches the given board for knight paths as specified by `mode`.
    ///
    /// # Errors
    ///
    /// If the board is not ready for a search, e.g. because it has no
    /// starting location. Implementers must report such problems before
    /// starting to search.
    fn solve(&self, board: &Board, mode: SearchMode)
        -> KnightResult<SolveResult>;

    /// Parses the board from the given map (see [Board::parse]) and solves
    /// it using [Solver::solve].
    ///
    /// # Errors
    ///
    /// `KnightError::InvalidFormat` if the map is invalid, otherwise any
    /// error of [Solver::solve].
    fn solve_rows<S: AsRef<str>>(&self, rows: &[S], mode: SearchMode)
            -> KnightResult<SolveResult> {
        let board = Board::parse(rows)?;
        self.solve(&board, mode)
    }

    /// Reads the board from the file at the given path (see
    /// [Board::from_file]) and solves it using [Solver::solve].
    ///
    /// # Errors
    ///
    /// `KnightError::Io` if the file cannot be read,
    /// `KnightError::InvalidFormat` if its content is not a valid map,
    /// otherwise any error of [Solver::solve].
    fn solve_file(&self, path: impl AsRef<Path>, mode: SearchMode)
            -> KnightResult<SolveResult> {
        let board = Board::from_file(path)?;
        self.solve(&board, mode)
    }
}

/// A [Solver] which tries every move of the knight depth-first, taking it
/// back once the branch is explored. Pending moves are kept on a heap-allocated
/// stack, so paths may be as long as the number of passable squares. This
/// means two things:
///
/// * Its worst-case runtime is exponential, i.e. it may be very slow in
/// `Full` mode on large, open boards.
/// * It finds every path which does not visit any square twice, so its
/// results are exact for every [SearchMode].
///
/// The starting location is never re-entered. In `Shortest` mode, any path
/// that is already longer than the best path found so far is abandoned.
#[derive(Clone, Copy, Debug, Default)]
pub struct BacktrackingSolver;

fn check_preconditions(knight: &Knight<'_>)
        -> KnightResult<(Location, Location)> {
    let board = knight.board();

    if board.width() == 0 || board.height() == 0 || !board.is_initialized() {
        return Err(KnightError::Uninitialized);
    }

    let start = board.start()
        .ok_or(KnightError::MissingEndpoint(Endpoint::Start))?;
    let end = board.end()
        .ok_or(KnightError::MissingEndpoint(Endpoint::End))?;

    if knight.location() != start {
        return Err(KnightError::KnightNotAtStart {
            knight: knight.location(),
            start
        });
    }

    if !board.get(start)?.is_passable() {
        return Err(KnightError::VoidEndpoint(Endpoint::Start, start));
    }

    if !board.get(end)?.is_passable() {
        return Err(KnightError::VoidEndpoint(Endpoint::End, end));
    }

    Ok((start, end))
}

// The moves still to try from one location on the current path, and the
// index of the next one.
struct Frame {
    targets: Vec<Location>,
    next: usize
}

impl Frame {
    fn new(knight: &Knight<'_>) -> Frame {
        Frame {
            targets: knight.valid_moves().to_vec(),
            next: 0
        }
    }

    fn next_target(&mut self) -> Option<Location> {
        let target = self.targets.get(self.next).copied();
        self.next += 1;
        target
    }
}

// Depth-first search state. `frames` holds one frame per location on the
// path, including the start, so it is always one longer than `path` while
// the search runs.
struct Search<'k, 'b> {
    knight: &'k mut Knight<'b>,
    mode: SearchMode,
    start: Location,
    end: Location,
    path: Vec<Move>,
    frames: Vec<Frame>,
    visited: SquareSet,
    solutions: Vec<Vec<Move>>,
    moves_evaluated: u64,
    longest_chain_evaluated: usize
}

impl<'k, 'b> Search<'k, 'b> {
    fn new(knight: &'k mut Knight<'b>, mode: SearchMode, start: Location,
            end: Location) -> Search<'k, 'b> {
        let visited = SquareSet::for_board(knight.board());

        Search {
            knight,
            mode,
            start,
            end,
            path: Vec::new(),
            frames: Vec::new(),
            visited,
            solutions: Vec::new(),
            moves_evaluated: 0,
            longest_chain_evaluated: 0
        }
    }

    fn best_length(&self) -> Option<usize> {
        self.solutions.first().map(Vec::len)
    }

    // Runs the search and afterwards takes back every move still on the
    // path, even if the search failed.
    fn run(&mut self) -> KnightResult<()> {
        let outcome = self.search();
        let restored = self.unwind();
        outcome.and(restored)
    }

    fn search(&mut self) -> KnightResult<()> {
        self.frames.push(Frame::new(self.knight));

        while let Some(frame) = self.frames.last_mut() {
            let target = match frame.next_target() {
                Some(target) => target,
                None => {
                    self.frames.pop();

                    if !self.frames.is_empty() {
                        self.undo()?;
                    }

                    continue;
                }
            };

            if target == self.start || self.visited.contains(target) {
                continue;
            }

            self.advance(target)?;

            if self.is_pruned() {
                self.undo()?;
            }
            else if target == self.end {
                self.record_solution();

                if self.mode == SearchMode::First {
                    return Ok(());
                }

                self.undo()?;
            }
            else {
                self.frames.push(Frame::new(self.knight));
            }
        }

        Ok(())
    }

    fn advance(&mut self, target: Location) -> KnightResult<()> {
        let step = self.knight.move_to(target)?;
        self.path.push(step);
        self.visited.insert(target)?;
        debug_assert_eq!(self.visited.len(), self.path.len());

        let length = self.path.len();
        self.moves_evaluated += 1;
        self.longest_chain_evaluated =
            self.longest_chain_evaluated.max(length);
        Ok(())
    }

    // Every move on the path is taken back through here, so the knight, the
    // path and the visited squares change together.
    fn undo(&mut self) -> KnightResult<()> {
        if let Some(step) = self.path.pop() {
            self.knight.move_to(step.start())?;
            self.visited.remove(step.end())?;
        }

        Ok(())
    }

    fn unwind(&mut self) -> KnightResult<()> {
        self.frames.clear();

        while !self.path.is_empty() {
            self.undo()?;
        }

        debug_assert!(self.visited.is_empty());
        Ok(())
    }

    fn is_pruned(&self) -> bool {
        let length = self.path.len();

        self.mode == SearchMode::Shortest &&
            self.best_length().map_or(false, |best| length > best)
    }

    fn record_solution(&mut self) {
        let length = self.path.len();

        if self.mode == SearchMode::Shortest &&
                self.best_length().map_or(false, |best| length < best) {
            self.solutions.clear();
        }

        trace!(length, "found solution");
        self.solutions.push(self.path.clone());
    }

    fn into_result(self) -> SolveResult {
        let mut solutions = self.solutions;
        solutions.sort_by_key(Vec::len);

        SolveResult {
            shortest_solution: solutions.first().map(Vec::len),
            longest_solution: solutions.last().map(Vec::len),
            solutions,
            moves_evaluated: self.moves_evaluated,
            longest_chain_evaluated: self.longest_chain_evaluated
        }
    }
}

impl BacktrackingSolver {

    /// Searches paths for the given knight, which must stand on the starting
    /// location of its board. During the search the knight is moved around,
    /// but afterwards it is back on the starting location.
    ///
    /// # Errors
    ///
    /// Before the search starts, the following is checked:
    ///
    /// * `KnightError::Uninitialized` If the board has no squares.
    /// * `KnightError::MissingEndpoint` If the board has no starting or no
    /// ending location.
    /// * `KnightError::KnightNotAtStart` If the knight is not on the starting
    /// location.
    /// * `KnightError::VoidEndpoint` If the starting or ending location is
    /// void.
    pub fn solve_knight(&self, knight: &mut Knight<'_>, mode: SearchMode)
            -> KnightResult<SolveResult> {
        let (start, end) = check_preconditions(knight)?;
        let board = knight.board();

        debug!(%mode, width = board.width(), height = board.height(),
            %start, %end, "starting search");

        let mut search = Search::new(knight, mode, start, end);
        search.run()?;
        let result = search.into_result();

        debug!(%mode, solutions = result.solutions().len(),
            moves_evaluated = result.moves_evaluated(),
            longest_chain = result.longest_chain_evaluated(),
            "search finished");

        Ok(result)
    }
}

impl Solver for BacktrackingSolver {
    fn solve(&self, board: &Board, mode: SearchMode)
            -> KnightResult<SolveResult> {
        let mut knight = Knight::new(board)?;
        self.solve_knight(&mut knight, mode)
    }
}
