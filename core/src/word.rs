use hashbrown::HashSet;
use smallvec::SmallVec;

use crate::{Coord, GameError, Result};

/// Hidden answer for one day's puzzle. Letters are lowercased once at
/// construction and membership checks go through a prebuilt letter set.
#[derive(Clone, Debug)]
pub struct TargetWord {
    letters: SmallVec<[char; 8]>,
    letter_set: HashSet<char>,
}

impl TargetWord {
    pub fn new(word: &str) -> Result<Self> {
        let letters: SmallVec<[char; 8]> = word
            .chars()
            .map(|letter| letter.to_ascii_lowercase())
            .collect();

        if letters.is_empty() {
            return Err(GameError::EmptyWord);
        }
        if letters.len() > usize::from(Coord::MAX) {
            return Err(GameError::WordTooLong);
        }

        let letter_set = letters.iter().copied().collect();
        Ok(Self {
            letters,
            letter_set,
        })
    }

    pub fn len(&self) -> Coord {
        self.letters.len().try_into().unwrap()
    }

    pub fn letter_at(&self, col: Coord) -> char {
        self.letters[usize::from(col)]
    }

    pub fn contains(&self, letter: char) -> bool {
        self.letter_set.contains(&letter)
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }
}

impl PartialEq for TargetWord {
    fn eq(&self, other: &Self) -> bool {
        self.letters == other.letters
    }
}

impl Eq for TargetWord {}
