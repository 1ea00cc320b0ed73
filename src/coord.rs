use std::ops::{Add, AddAssign, Sub};

use serde::{Deserialize, Serialize};

/// Grid coordinate. `row` grows downward, `col` grows to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowCol {
    pub row: i32,
    pub col: i32,
}

impl RowCol {
    pub const fn new(row: i32, col: i32) -> RowCol {
        RowCol { row, col }
    }

    pub fn manhattan_distance(self, other: RowCol) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }
}

impl Add for RowCol {
    type Output = RowCol;

    fn add(self, other: RowCol) -> RowCol {
        RowCol::new(self.row + other.row, self.col + other.col)
    }
}

impl Sub for RowCol {
    type Output = RowCol;

    fn sub(self, other: RowCol) -> RowCol {
        RowCol::new(self.row - other.row, self.col - other.col)
    }
}

impl AddAssign for RowCol {
    fn add_assign(&mut self, other: RowCol) {
        self.row += other.row;
        self.col += other.col;
    }
}

impl From<(i32, i32)> for RowCol {
    fn from(tuple: (i32, i32)) -> Self {
        RowCol::new(tuple.0, tuple.1)
    }
}

impl From<RowCol> for (i32, i32) {
    fn from(val: RowCol) -> Self {
        (val.row, val.col)
    }
}

/// Movement direction between two 4-adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Right,
    Left,
    Down,
    Up,
}

impl Dir {
    /// Directions in the order the solver expands them. Part of the solver's
    /// contract: among equal-length paths, earlier directions win.
    pub const fn in_order() -> [Dir; 4] {
        [Dir::Right, Dir::Left, Dir::Down, Dir::Up]
    }

    pub const fn offset(self) -> RowCol {
        match self {
            Dir::Right => RowCol::new(0, 1),
            Dir::Left => RowCol::new(0, -1),
            Dir::Down => RowCol::new(1, 0),
            Dir::Up => RowCol::new(-1, 0),
        }
    }
}
