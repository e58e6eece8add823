use crate::board::{Board, Mark};
use std::fmt::{Display, Formatter};

/// Side length of the grid.
pub const SIZE: usize = 3;

/// All eight winning lines: rows first, then columns, then the two diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// A cell coordinate, zero-based.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns `true` if the coordinate lies on the board.
    pub fn is_on_board(&self) -> bool {
        self.row < SIZE && self.col < SIZE
    }
}

/// An implementation of the `Board` trait for the game of Tic-Tac-Toe.
///
/// The board is a 3x3 grid where `None` marks an empty cell. Moves are
/// `Position`s and are generated in row-major order.
#[derive(Debug, Default, PartialEq, Eq, Hash, Copy, Clone)]
pub struct TicTacToeBoard {
    field: [[Option<Mark>; SIZE]; SIZE],
}

impl TicTacToeBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from its rows, top to bottom.
    pub fn from_rows(field: [[Option<Mark>; SIZE]; SIZE]) -> Self {
        Self { field }
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Option<Mark>; SIZE]; SIZE] {
        &self.field
    }

    /// Returns the content of a cell. `pos` must be on the board.
    pub fn get(&self, pos: Position) -> Option<Mark> {
        self.field[pos.row][pos.col]
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Counts the cells occupied by `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.field
            .iter()
            .flatten()
            .filter(|cell| **cell == Some(mark))
            .count()
    }
}

impl Board for TicTacToeBoard {
    type Move = Position;

    fn has_won(&self, mark: Mark) -> bool {
        LINES.iter().any(|line| {
            line.iter()
                .all(|&(row, col)| self.field[row][col] == Some(mark))
        })
    }

    fn is_draw(&self) -> bool {
        self.field.iter().flatten().all(|cell| cell.is_some())
    }

    fn available_moves(&self) -> Vec<Self::Move> {
        (0..SIZE)
            .flat_map(|row| (0..SIZE).map(move |col| Position::new(row, col)))
            .filter(|&pos| self.is_empty_at(pos))
            .collect()
    }

    fn place(&mut self, b_move: Self::Move, mark: Mark) {
        self.field[b_move.row][b_move.col] = Some(mark);
    }

    fn clear(&mut self, b_move: Self::Move) {
        self.field[b_move.row][b_move.col] = None;
    }
}

impl Display for TicTacToeBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.field.iter().enumerate() {
            if i > 0 {
                writeln!(f, "-----------")?;
            }
            let cells: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Some(mark) => mark.to_string(),
                    None => " ".to_string(),
                })
                .collect();
            writeln!(f, "   |   |")?;
            writeln!(f, " {} | {} | {}", cells[0], cells[1], cells[2])?;
            writeln!(f, "   |   |")?;
        }
        Ok(())
    }
}
