use serde::{Deserialize, Serialize};

use crate::{Cell, Coord, TargetWord};

/// Derived classification of one grid cell against the target word. Never
/// stored; recomputed from the grid and target on every read.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellColor {
    Default,
    Correct,
    Present,
    Absent,
}

impl CellColor {
    pub const fn is_revealed(self) -> bool {
        !matches!(self, Self::Default)
    }

    /// Share-grid glyph. Unrevealed cells render like absent ones.
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Default | Self::Absent => '⬛',
        }
    }
}

impl Default for CellColor {
    fn default() -> Self {
        Self::Default
    }
}

/// Classifies one cell. Committed rows score each cell on its own: exact
/// match, then plain letter-set membership, then absent. Duplicate letters
/// in a guess are NOT budgeted against their count in the target word.
pub(crate) fn classify(cell: Cell, col: Coord, target: &TargetWord, committed: bool) -> CellColor {
    if !committed {
        return CellColor::Default;
    }

    let Some(letter) = cell.letter() else {
        return CellColor::Absent;
    };

    if target.letter_at(col) == letter {
        CellColor::Correct
    } else if target.contains(letter) {
        CellColor::Present
    } else {
        CellColor::Absent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> TargetWord {
        TargetWord::new("hello").unwrap()
    }

    #[test]
    fn uncommitted_cells_stay_default() {
        let color = classify(Cell::Letter('h'), 0, &target(), false);

        assert_eq!(color, CellColor::Default);
        assert!(!color.is_revealed());
    }

    #[test]
    fn exact_position_match_is_correct() {
        assert_eq!(
            classify(Cell::Letter('l'), 3, &target(), true),
            CellColor::Correct
        );
    }

    #[test]
    fn wrong_position_member_is_present() {
        assert_eq!(
            classify(Cell::Letter('o'), 0, &target(), true),
            CellColor::Present
        );
    }

    #[test]
    fn non_member_is_absent() {
        assert_eq!(
            classify(Cell::Letter('w'), 0, &target(), true),
            CellColor::Absent
        );
    }

    #[test]
    fn duplicate_letters_use_plain_membership() {
        // "arara" against "crane": every 'a' and the second 'r' still count
        // as present, there is no per-letter budget.
        let target = TargetWord::new("crane").unwrap();
        let guess = ['a', 'r', 'a', 'r', 'a'];

        let colors: alloc::vec::Vec<CellColor> = guess
            .iter()
            .enumerate()
            .map(|(col, &letter)| classify(Cell::Letter(letter), col as Coord, &target, true))
            .collect();

        assert_eq!(
            colors,
            [
                CellColor::Present,
                CellColor::Correct,
                CellColor::Present,
                CellColor::Present,
                CellColor::Present,
            ]
        );
    }

    #[test]
    fn classification_is_idempotent() {
        for _ in 0..3 {
            assert_eq!(
                classify(Cell::Letter('e'), 0, &target(), true),
                CellColor::Present
            );
        }
    }

    #[test]
    fn emoji_glyphs_cover_all_colors() {
        assert_eq!(CellColor::Correct.to_emoji(), '🟩');
        assert_eq!(CellColor::Present.to_emoji(), '🟨');
        assert_eq!(CellColor::Absent.to_emoji(), '⬛');
        assert_eq!(CellColor::Default.to_emoji(), '⬛');
    }
}
