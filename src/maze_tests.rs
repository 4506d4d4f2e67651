use crate::{Board, Location};
use crate::random_tests::assert_is_simple_path;
use crate::solver::{BacktrackingSolver, SearchMode, SolveResult, Solver};

const MAZE: [&str; 13] = [
    "EXXXXXXXXXX.XX.X....X....X.........X...X..",
    ".............X.X.X.....X.........X...X...X",
    ".XXXXXXXXXXXX....X...X...XX..X.X..X.X...X.",
    "................X..........X.X.X........X.",
    ".XX.X.X.X..XX...X..XX..X...X......X.X.X...",
    "............X....XX..X.....X...XX.........",
    "XXX.XX.XXX.XX..........XX..X.X..X..X...XXX",
    "...............X........XXX..X..X..X...X..",
    "XXXXXXXXXXX.X.....X.XX...........X...X.XX.",
    "................X.X....X.........X...X..X.",
    "XX.XX.XXXXXXX...X.X..X...X.X.X............",
    "X...........XXXX...X.X...X.X.X.X.XX..XXX..",
    "XX.XXXXXXXX.X..X...X...X......XX...XXX.X.S"
];

fn maze() -> Board {
    Board::parse(&MAZE).unwrap()
}

fn solve_maze(mode: SearchMode) -> SolveResult {
    BacktrackingSolver.solve(&maze(), mode).unwrap()
}

#[test]
fn maze_dimensions() {
    let board = maze();

    assert_eq!(42, board.width());
    assert_eq!(13, board.height());
    assert_eq!(Some(Location::new(42, 13)), board.start());
    assert_eq!(Some(Location::new(1, 1)), board.end());
    assert!(board.is_valid());
}

#[test]
fn maze_first() {
    let board = maze();
    let result = solve_maze(SearchMode::First);

    assert_eq!(1, result.solutions().len());
    assert_eq!(59, result.solutions()[0].len());
    assert_eq!(72, result.moves_evaluated());
    assert_is_simple_path(&board, &result.solutions()[0]);
}

#[test]
fn maze_shortest() {
    let board = maze();
    let result = solve_maze(SearchMode::Shortest);

    assert_eq!(28, result.solutions().len());
    assert_eq!(Some(41), result.shortest_solution());
    assert_eq!(Some(41), result.longest_solution());
    assert_eq!(103925, result.moves_evaluated());
    assert_eq!(60, result.longest_chain_evaluated());

    for solution in result.solutions() {
        assert_is_simple_path(&board, solution);
    }
}

#[test]
fn maze_from_text() {
    let text = MAZE.join("\n") + "\n\n";
    let board: Board = text.parse().unwrap();
    let result = BacktrackingSolver.solve(&board, SearchMode::First).unwrap();

    assert_eq!(maze(), board);
    assert_eq!(59, result.solutions()[0].len());
}

#[test]
fn maze_mirrored() {
    // Swapping start and end does not change the length of the shortest path.
    let rows: Vec<String> = MAZE.iter()
        .map(|row| row.chars()
            .map(|c| match c {
                'S' => 'E',
                'E' => 'S',
                c => c
            })
            .collect())
        .collect();
    let result = BacktrackingSolver.solve_rows(&rows, SearchMode::Shortest)
        .unwrap();

    assert_eq!(Some(41), result.shortest_solution());
    assert_eq!(28, result.solutions().len());
}
