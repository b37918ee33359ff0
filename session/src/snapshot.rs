use palabrita_core::{Cell, Coord, GameError, GameState, Grid, PlayEngine, TargetWord};
use serde::{Deserialize, Serialize};

/// Persisted form of one day's progress. The field names are part of the
/// stored format and must stay stable across releases.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub rows: Vec<Vec<String>>,
    pub curr_row: Coord,
    pub curr_col: Coord,
    pub game_state: GameState,
}

impl Snapshot {
    pub fn capture(engine: &PlayEngine) -> Self {
        let grid = engine.grid();
        let rows = (0..grid.rows())
            .map(|row| {
                grid.row_cells(row)
                    .map(|cell| cell.letter().map(String::from).unwrap_or_default())
                    .collect()
            })
            .collect();
        let (curr_row, curr_col) = engine.cursor();

        Self {
            rows,
            curr_row,
            curr_col,
            game_state: engine.state(),
        }
    }

    /// Rebuilds an engine for `target` from this snapshot. Shape or content
    /// mismatches surface as errors; callers fall back to a fresh game.
    pub fn restore(&self, target: TargetWord) -> Result<PlayEngine, GameError> {
        let row_count: Coord = self
            .rows
            .len()
            .try_into()
            .map_err(|_| GameError::ShapeMismatch)?;
        if row_count == 0 {
            return Err(GameError::ShapeMismatch);
        }
        let col_count = target.len();

        let mut grid = Grid::new(row_count, col_count);
        for (row, letters) in self.rows.iter().enumerate() {
            if letters.len() != usize::from(col_count) {
                return Err(GameError::ShapeMismatch);
            }
            for (col, letter) in letters.iter().enumerate() {
                let cell = parse_cell(letter)?;
                if !cell.is_empty() {
                    grid = grid.with_cell_set((row as Coord, col as Coord), cell)?;
                }
            }
        }

        PlayEngine::from_parts(target, grid, (self.curr_row, self.curr_col), self.game_state)
    }
}

fn parse_cell(value: &str) -> Result<Cell, GameError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Ok(Cell::Empty),
        (Some(letter), None) => Ok(Cell::Letter(letter.to_ascii_lowercase())),
        _ => Err(GameError::InvalidCell),
    }
}
