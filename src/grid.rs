// Static maze connectivity.
//
// A GridModel is immutable after construction: dimensions are fixed for the
// lifetime of a game and a cell's open/blocked status never changes at
// runtime. Everything else in the crate queries the maze through this type.

use crate::types::{Direction, Position};

/// Fixed rows x columns open/blocked matrix with 4-directional adjacency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridModel {
    rows: i32,
    cols: i32,
    /// Row-major, true = open
    cells: Vec<bool>,
}

/// The classic maze layout, 15 rows x 19 columns, 1 = open
const CLASSIC_MAZE: [[u8; 19]; 15] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    [0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0],
    [0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    [0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 1, 0],
    [0, 1, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 1, 1, 0],
    [0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0],
    [0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    [0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0],
    [0, 1, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 1, 1, 0],
    [0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 1, 0],
    [0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    [0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0],
    [0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
];

impl GridModel {
    /// Builds a grid from a matrix of cells, nonzero = open
    pub fn from_matrix(matrix: &[Vec<u8>]) -> GridModel {
        let rows = matrix.len() as i32;
        let cols = matrix.first().map_or(0, |r| r.len()) as i32;
        let mut cells = Vec::with_capacity((rows * cols) as usize);
        for row in matrix {
            for &cell in row {
                cells.push(cell != 0);
            }
        }
        GridModel { rows, cols, cells }
    }

    /// The fixed maze used by live games
    pub fn classic_maze() -> GridModel {
        let matrix: Vec<Vec<u8>> = CLASSIC_MAZE.iter().map(|r| r.to_vec()).collect();
        GridModel::from_matrix(&matrix)
    }

    /// A fully open grid, useful for small test scenarios
    pub fn open(rows: i32, cols: i32) -> GridModel {
        GridModel {
            rows,
            cols,
            cells: vec![true; (rows * cols) as usize],
        }
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    fn in_bounds(&self, pos: &Position) -> bool {
        pos.row >= 0 && pos.row < self.rows && pos.col >= 0 && pos.col < self.cols
    }

    /// Whether the cell is open; positions outside the grid are never open
    pub fn is_open(&self, pos: &Position) -> bool {
        self.in_bounds(pos) && self.cells[(pos.row * self.cols + pos.col) as usize]
    }

    /// Open, in-bounds cells adjacent to `pos`, in canonical direction order
    pub fn neighbors(&self, pos: &Position) -> Vec<Position> {
        Direction::all()
            .iter()
            .map(|dir| dir.apply(pos))
            .filter(|next| self.is_open(next))
            .collect()
    }

    /// All open cells in row-major order
    pub fn open_cells(&self) -> Vec<Position> {
        let mut open = Vec::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                let pos = Position { row, col };
                if self.is_open(&pos) {
                    open.push(pos);
                }
            }
        }
        open
    }

    /// Matrix form for snapshots, 1 = open
    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .map(|col| self.cells[(row * self.cols + col) as usize] as u8)
                    .collect()
            })
            .collect()
    }
}
