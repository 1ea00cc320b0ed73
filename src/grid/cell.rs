use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two walls a cell stores. A cell's left and top walls are not
/// stored; they belong to the neighboring cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Right,
    Bottom,
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Wall::Right => write!(f, "right"),
            Wall::Bottom => write!(f, "bottom"),
        }
    }
}

/// One grid position. `true` means the wall is present and movement through
/// it is blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    right: bool,
    bottom: bool,
}

impl Cell {
    /// Cell with both walls up.
    pub const fn closed() -> Cell {
        Cell {
            right: true,
            bottom: true,
        }
    }

    pub fn has_wall(&self, wall: Wall) -> bool {
        match wall {
            Wall::Right => self.right,
            Wall::Bottom => self.bottom,
        }
    }

    pub fn right_wall(&self) -> bool {
        self.right
    }

    pub fn bottom_wall(&self) -> bool {
        self.bottom
    }

    pub(crate) fn open(&mut self, wall: Wall) {
        match wall {
            Wall::Right => self.right = false,
            Wall::Bottom => self.bottom = false,
        }
    }
}
