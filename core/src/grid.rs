use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::{Cell, GameError, Result};

/// Single axis index used for row and column positions.
pub type Coord = u8;

/// Two-dimensional grid coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Fixed-size matrix of guessed letters. Dimensions are set at creation and
/// never change; every update returns a new grid, the receiver is left
/// untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    pub fn new(rows: Coord, cols: Coord) -> Self {
        Self {
            cells: Array2::default((rows, cols).to_nd_index()),
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, cols) = self.size();
        if coords.0 < rows && coords.1 < cols {
            Ok(coords)
        } else {
            Err(GameError::OutOfRange)
        }
    }

    /// Reads one cell. Out-of-range coordinates are an invariant breach and
    /// panic; use `validate_coords` at trust boundaries.
    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    /// Copy of this grid with one cell overwritten.
    pub fn with_cell_set(&self, coords: Coord2, cell: Cell) -> Result<Self> {
        let coords = self.validate_coords(coords)?;
        let mut next = self.clone();
        next.cells[coords.to_nd_index()] = cell;
        Ok(next)
    }

    pub fn row_cells(&self, row: Coord) -> impl Iterator<Item = Cell> + '_ {
        self.cells.row(row.into()).into_iter().copied()
    }
}
