use alloc::collections::BTreeSet;
use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::feedback::classify;
use crate::*;

/// Lifecycle of one day's puzzle.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Playing
    }
}

/// One action from the keyboard collaborator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyInput {
    Letter(char),
    Clear,
    Enter,
}

/// State machine for a single game: owns the grid, the cursor, and the
/// win/loss state. Rows below the cursor are committed and immutable; only
/// the cursor row ever changes, and only while the game is still playing.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayEngine {
    target: TargetWord,
    grid: Grid,
    curr_row: Coord,
    curr_col: Coord,
    state: GameState,
}

impl PlayEngine {
    pub fn new(target: TargetWord, config: GameConfig) -> Self {
        let grid = Grid::new(config.tries, target.len());
        Self {
            target,
            grid,
            curr_row: 0,
            curr_col: 0,
            state: GameState::default(),
        }
    }

    /// Rebuilds an engine from previously captured state. The grid must
    /// match the target word's length and the cursor must lie inside it.
    pub fn from_parts(
        target: TargetWord,
        grid: Grid,
        (curr_row, curr_col): Coord2,
        state: GameState,
    ) -> Result<Self> {
        if grid.rows() == 0 || grid.cols() != target.len() {
            return Err(GameError::ShapeMismatch);
        }
        if curr_row > grid.rows() || curr_col > grid.cols() {
            return Err(GameError::OutOfRange);
        }

        Ok(Self {
            target,
            grid,
            curr_row,
            curr_col,
            state,
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn target(&self) -> &TargetWord {
        &self.target
    }

    /// `(row, col)` of the next editable cell.
    pub fn cursor(&self) -> Coord2 {
        (self.curr_row, self.curr_col)
    }

    pub fn word_len(&self) -> Coord {
        self.grid.cols()
    }

    pub fn tries(&self) -> Coord {
        self.grid.rows()
    }

    /// Processes one keyboard action. Input the cursor cannot accept, and
    /// any input after the game has ended, is discarded as `NoChange`.
    pub fn handle_key(&mut self, key: KeyInput) -> Result<KeyOutcome> {
        use KeyOutcome::*;

        if !self.state.is_playing() {
            return Ok(NoChange);
        }

        match key {
            KeyInput::Clear => {
                if self.curr_col == 0 {
                    return Ok(NoChange);
                }

                let prev_col = self.curr_col - 1;
                self.grid = self
                    .grid
                    .with_cell_set((self.curr_row, prev_col), Cell::Empty)?;
                self.curr_col = prev_col;
                Ok(Edited)
            }
            KeyInput::Enter => {
                if self.curr_col < self.grid.cols() {
                    return Ok(NoChange);
                }

                self.curr_row += 1;
                self.curr_col = 0;
                Ok(self.evaluate_commit())
            }
            KeyInput::Letter(letter) => {
                if self.curr_col >= self.grid.cols() {
                    return Ok(NoChange);
                }

                let cell = Cell::Letter(letter.to_ascii_lowercase());
                self.grid = self
                    .grid
                    .with_cell_set((self.curr_row, self.curr_col), cell)?;
                self.curr_col += 1;
                Ok(Edited)
            }
        }
    }

    /// Win/loss check for the row the cursor just moved past. Won is checked
    /// first, so filling the last row with the target word still wins.
    fn evaluate_commit(&mut self) -> KeyOutcome {
        let committed_row = self.curr_row - 1;

        if self.row_matches_target(committed_row) {
            self.end_game(true);
            KeyOutcome::Won
        } else if self.curr_row == self.grid.rows() {
            self.end_game(false);
            KeyOutcome::Lost
        } else {
            KeyOutcome::Committed
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won { GameState::Won } else { GameState::Lost };
        log::debug!("game over after row {}: {:?}", self.curr_row, self.state);
    }

    fn row_matches_target(&self, row: Coord) -> bool {
        self.grid
            .row_cells(row)
            .zip(self.target.letters())
            .all(|(cell, letter)| cell.letter() == Some(letter))
    }

    /// Derived color of one cell; a pure function of the grid, the target
    /// word, and the cursor row.
    pub fn color_at(&self, coords: Coord2) -> Result<CellColor> {
        let (row, col) = self.grid.validate_coords(coords)?;
        let committed = row < self.curr_row;
        Ok(classify(
            self.grid.cell_at((row, col)),
            col,
            &self.target,
            committed,
        ))
    }

    /// All letters whose derived color equals `color`, across the whole
    /// grid. A letter can appear in several per-color sets when it scored
    /// differently in different rows; no precedence is applied.
    pub fn letters_with_color(&self, color: CellColor) -> BTreeSet<char> {
        let (rows, cols) = self.grid.size();
        let mut letters = BTreeSet::new();

        for row in 0..rows {
            let committed = row < self.curr_row;
            for col in 0..cols {
                let cell = self.grid.cell_at((row, col));
                if classify(cell, col, &self.target, committed) == color
                    && let Some(letter) = cell.letter()
                {
                    letters.insert(letter);
                }
            }
        }

        letters
    }

    /// Share rendering of the committed rows, one emoji line per row.
    pub fn emoji_grid(&self) -> String {
        let mut out = String::new();

        for row in 0..self.curr_row {
            if row > 0 {
                out.push('\n');
            }
            for col in 0..self.grid.cols() {
                let color = classify(self.grid.cell_at((row, col)), col, &self.target, true);
                out.push(color.to_emoji());
            }
        }

        out
    }
}
