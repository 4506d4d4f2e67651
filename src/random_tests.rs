use crate::{Board, Location};
use crate::generator::Generator;
use crate::knight::{is_knight_step, Knight, Move};
use crate::solver::{BacktrackingSolver, SearchMode, Solver};

use rand::SeedableRng;

use rand_chacha::ChaCha8Rng;

use std::collections::HashSet;

const ITERATIONS: usize = 60;
const SEED: u64 = 0x6d617a65;

fn for_each_random_board(density: f64, mut test: impl FnMut(&Board)) {
    let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(SEED));

    for i in 0..ITERATIONS {
        let width = 5 + (i % 2) as u8;
        let height = 5 + (i % 3 / 2) as u8;
        let board = generator.generate(width, height, density).unwrap();
        test(&board);
    }
}

/// Asserts that `solution` leads from the starting to the ending location of
/// `board` by legal knight moves without entering any square twice.
pub(crate) fn assert_is_simple_path(board: &Board, solution: &[Move]) {
    let start = board.start().unwrap();
    let mut visited = HashSet::new();
    let mut location = start;
    visited.insert(start);

    for (i, step) in solution.iter().enumerate() {
        assert_eq!(location, step.start(),
            "Move {} does not continue the path.", i);
        assert!(is_knight_step(step.start(), step.end()));
        assert!(board.is_valid_target(step.end()));
        assert!(visited.insert(step.end()),
            "Square {} visited twice.", step.end());
        location = step.end();
    }

    assert_eq!(board.end(), Some(location));
}

#[test]
fn random_boards_valid_and_reparsable() {
    for_each_random_board(0.5, |board| {
        assert!(board.is_valid());
        assert_eq!(*board, Board::parse(&board.to_rows()).unwrap());
    });
}

#[test]
fn random_boards_valid_moves() {
    for_each_random_board(0.6, |board| {
        for location in board.locations() {
            if !board.is_valid_target(location) {
                continue;
            }

            let mut knight = Knight::new(board).unwrap();
            let start = knight.location();

            if !knight.valid_moves().contains(&location) {
                assert!(!is_knight_step(start, location));
                continue;
            }

            let forward = knight.move_to(location).unwrap();
            assert_eq!(Move::new(start, location), forward);
            assert!(knight.valid_moves().contains(&start));

            knight.move_to(start).unwrap();
            assert_eq!(start, knight.location());
        }
    });
}

#[test]
fn random_boards_valid_moves_are_knight_steps() {
    for_each_random_board(0.7, |board| {
        let mut knight = Knight::new(board).unwrap();

        // Walk along the first valid move a few times.
        for _ in 0..10 {
            let targets = knight.valid_moves().to_vec();

            for &target in &targets {
                assert!(is_knight_step(knight.location(), target));
                assert!(board.is_valid_target(target));
            }

            match targets.first() {
                Some(&target) => { knight.move_to(target).unwrap(); },
                None => break
            }
        }
    });
}

#[test]
fn random_boards_solutions_consistent() {
    let solver = BacktrackingSolver;

    for_each_random_board(0.55, |board| {
        let first = solver.solve(board, SearchMode::First).unwrap();
        let shortest = solver.solve(board, SearchMode::Shortest).unwrap();
        let full = solver.solve(board, SearchMode::Full).unwrap();

        assert!(first.solutions().len() <= 1);
        assert_eq!(first.is_solved(), full.is_solved());
        assert_eq!(shortest.is_solved(), full.is_solved());
        assert_eq!(full.shortest_solution(), shortest.shortest_solution());
        assert_eq!(shortest.shortest_solution(),
            shortest.longest_solution());
        assert!(first.moves_evaluated() <= full.moves_evaluated());
        assert!(shortest.moves_evaluated() <= full.moves_evaluated());

        let minimal: Vec<&Vec<Move>> = full.solutions().iter()
            .filter(|s| Some(s.len()) == full.shortest_solution())
            .collect();
        let shortest_solutions: Vec<&Vec<Move>> =
            shortest.solutions().iter().collect();
        assert_eq!(minimal, shortest_solutions);

        for result in &[&first, &shortest, &full] {
            for solution in result.solutions() {
                assert_is_simple_path(board, solution);
            }

            assert!(result.solutions().windows(2)
                .all(|w| w[0].len() <= w[1].len()));
        }

        if let Some(solution) = first.solutions().first() {
            assert!(full.solutions().contains(solution));
        }
    });
}

#[test]
fn random_boards_knight_restored() {
    for_each_random_board(0.6, |board| {
        let mut knight = Knight::new(board).unwrap();

        for &mode in &[SearchMode::First, SearchMode::Shortest] {
            BacktrackingSolver.solve_knight(&mut knight, mode).unwrap();
            assert_eq!(board.start(), Some(knight.location()));
        }
    });
}

#[test]
fn random_sparse_boards_rarely_solvable() {
    let mut solved = 0;

    for_each_random_board(0.0, |board| {
        let result = BacktrackingSolver.solve(board, SearchMode::Full)
            .unwrap();

        // Only the two endpoints are passable.
        let start = board.start().unwrap();
        let end = board.end().unwrap();
        assert_eq!(is_knight_step(start, end), result.is_solved());

        if result.is_solved() {
            solved += 1;
            assert_eq!(vec![vec![Move::new(start, end)]], result.solutions());
        }
    });

    assert!(solved < ITERATIONS);
}

#[test]
fn random_board_out_of_range_locations() {
    for_each_random_board(0.5, |board| {
        let outside = [
            Location::new(0, 1),
            Location::new(1, 0),
            Location::new(board.width() + 1, 1),
            Location::new(1, board.height() + 1)
        ];

        for &location in &outside {
            assert!(!board.is_in_bounds(location));
            assert!(!board.is_valid_target(location));
            assert!(board.get(location).is_err());
        }
    });
}
