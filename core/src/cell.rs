use serde::{Deserialize, Serialize};

use crate::types::Wire;

/// Content of a single puzzle cell.
///
/// Wire encoding: `0` is empty, `-1` a path cell, `-2` a wall, and any
/// `n >= 1` a clue worth `n` points. No other integer is valid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellMode {
    Empty,
    Path,
    Wall,
    Clue(u32),
}

impl CellMode {
    pub const fn from_wire(value: Wire) -> Option<Self> {
        match value {
            0 => Some(Self::Empty),
            -1 => Some(Self::Path),
            -2 => Some(Self::Wall),
            n if n >= 1 => Some(Self::Clue(n as u32)),
            _ => None,
        }
    }

    pub const fn to_wire(self) -> Wire {
        match self {
            Self::Empty => 0,
            Self::Path => -1,
            Self::Wall => -2,
            Self::Clue(n) => n as Wire,
        }
    }

    /// Reads a manually typed cell entry. A blank or whitespace-only
    /// entry counts as [`CellMode::Empty`]; anything else must be an
    /// integer the wire encoding accepts.
    pub fn from_entry(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Some(Self::Empty);
        }
        trimmed.parse::<Wire>().ok().and_then(Self::from_wire)
    }

    /// Single manual-edit transition: `Empty -> Path -> Wall -> Empty`.
    /// Clue cells never take part in the cycle.
    pub const fn cycled(self) -> Self {
        match self {
            Self::Empty => Self::Path,
            Self::Path => Self::Wall,
            Self::Wall => Self::Empty,
            clue => clue,
        }
    }

    pub const fn is_clue(self) -> bool {
        matches!(self, Self::Clue(_))
    }
}

impl Default for CellMode {
    fn default() -> Self {
        Self::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_encoding_round_trips() {
        for value in [-2, -1, 0, 1, 7, 120] {
            let mode = CellMode::from_wire(value).unwrap();
            assert_eq!(mode.to_wire(), value);
        }
    }

    #[test]
    fn values_below_wall_are_invalid() {
        assert_eq!(CellMode::from_wire(-3), None);
        assert_eq!(CellMode::from_wire(Wire::MIN), None);
    }

    #[test]
    fn blank_entry_defaults_to_empty() {
        assert_eq!(CellMode::from_entry(""), Some(CellMode::Empty));
        assert_eq!(CellMode::from_entry("   "), Some(CellMode::Empty));
        assert_eq!(CellMode::from_entry(" 5 "), Some(CellMode::Clue(5)));
        assert_eq!(CellMode::from_entry("x"), None);
        assert_eq!(CellMode::from_entry("-4"), None);
    }

    #[test]
    fn cycle_returns_after_three_steps() {
        for start in [CellMode::Empty, CellMode::Path, CellMode::Wall] {
            assert_eq!(start.cycled().cycled().cycled(), start);
        }
        assert_eq!(CellMode::Clue(4).cycled(), CellMode::Clue(4));
    }
}
