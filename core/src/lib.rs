#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use feedback::*;
pub use grid::*;
pub use word::*;

mod cell;
mod engine;
mod error;
mod feedback;
mod grid;
mod word;

/// How many guess rows a game gets. The word length comes from the target
/// word itself.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub tries: Coord,
}

impl GameConfig {
    pub const fn new_unchecked(tries: Coord) -> Self {
        Self { tries }
    }

    pub fn new(tries: Coord) -> Self {
        Self::new_unchecked(tries.clamp(1, Coord::MAX))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(6)
    }
}

/// What one key press changed, if anything.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum KeyOutcome {
    NoChange,
    Edited,
    Committed,
    Won,
    Lost,
}

impl KeyOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Edited | Self::Committed | Self::Won | Self::Lost => true,
        }
    }

    pub const fn ends_game(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}
