//! Exhaustive status evaluation tests over every 3^9 board.

use std::str::FromStr;
use tictactoe_core::{
    Board, Cell, Mark, Outcome, ShapeErrorKind, WINNING_LINES, WinningLine, evaluate, evaluate_cells,
};

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

fn all_boards() -> impl Iterator<Item = [Cell; 9]> {
    (0..3usize.pow(9)).map(|mut n| {
        let mut cells = [Cell::Empty; 9];
        for cell in &mut cells {
            *cell = match n % 3 {
                0 => Cell::Empty,
                1 => Cell::Cross,
                _ => Cell::Circle,
            };
            n /= 3;
        }
        cells
    })
}

fn first_uniform_line(cells: &[Cell; 9]) -> Option<(Cell, [usize; 3])> {
    LINES
        .iter()
        .find(|[a, b, c]| cells[*a] != Cell::Empty && cells[*a] == cells[*b] && cells[*a] == cells[*c])
        .map(|line| (cells[line[0]], *line))
}

#[test]
fn test_line_table_order() {
    let indices: Vec<[usize; 3]> = WINNING_LINES.iter().map(|l| l.indices()).collect();
    assert_eq!(indices, LINES.to_vec());
}

#[test]
fn test_win_reports_first_uniform_line() {
    let mut wins = 0;
    for cells in all_boards() {
        let Some((cell, line)) = first_uniform_line(&cells) else {
            continue;
        };
        wins += 1;
        let board = Board::from_cells(&cells).unwrap();
        let line = WinningLine::from_indices(&line).unwrap();
        let expected = match cell {
            Cell::Cross => Outcome::CrossWins(line),
            Cell::Circle => Outcome::CircleWins(line),
            Cell::Empty => unreachable!("empty cells never form a line"),
        };
        assert_eq!(evaluate(&board), expected, "board:\n{board}");
    }
    assert!(wins > 0);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut draws = 0;
    for cells in all_boards() {
        if cells.contains(&Cell::Empty) || first_uniform_line(&cells).is_some() {
            continue;
        }
        draws += 1;
        let board = Board::from_cells(&cells).unwrap();
        assert_eq!(evaluate(&board), Outcome::Draw, "board:\n{board}");
    }
    assert!(draws > 0);
}

#[test]
fn test_open_board_without_line_is_playing() {
    for cells in all_boards() {
        if !cells.contains(&Cell::Empty) || first_uniform_line(&cells).is_some() {
            continue;
        }
        let board = Board::from_cells(&cells).unwrap();
        assert_eq!(evaluate(&board), Outcome::Playing, "board:\n{board}");
    }
}

#[test]
fn test_filled_draw_layout() {
    // X O X / O X O / O X O
    let board: Board = "XOX/OXO/OXO".parse().unwrap();
    assert_eq!(evaluate(&board), Outcome::Draw);
}

#[test]
fn test_outcome_winner_matches_line_owner() {
    let board: Board = "OOO/XX./X..".parse().unwrap();
    let outcome = evaluate(&board);
    assert_eq!(outcome.winner(), Some(Mark::Circle));
    assert_eq!(outcome.winning_line().map(|l| l.indices()), Some([0, 1, 2]));
}

#[test]
fn test_shape_errors_point_at_caller() {
    let err = evaluate_cells(&[Cell::Empty; 7]).unwrap_err();
    assert_eq!(err.kind(), &ShapeErrorKind::BoardLength(7));
    assert_eq!(err.file, file!());

    let err = Board::from_str("XO").unwrap_err();
    assert_eq!(err.kind(), &ShapeErrorKind::BoardLength(2));
    assert_eq!(err.file, file!());

    let err = Board::from_str("XQ.").unwrap_err();
    assert_eq!(err.kind(), &ShapeErrorKind::UnknownSymbol('Q'));
    assert_eq!(err.file, file!());

    let err = WinningLine::from_indices(&[0, 4, 9]).unwrap_err();
    assert_eq!(err.kind(), &ShapeErrorKind::IndexOutOfRange(9));
    assert_eq!(err.file, file!());
}
