use std::ops;

use crate::array::Array2D;
use crate::coord::RowCol;
use crate::grid::cell::{Cell, Wall};

/// Rectangular maze grid. Pure data: each cell stores its right and bottom
/// wall, and `generated` says whether the grid holds a finished maze.
///
/// A grid is replaced wholesale by generation or loading; the only in-place
/// mutation is [`Grid::open`] while a maze is being carved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2D<Cell>,
    generated: bool,
}

impl Grid {
    /// Grid with every wall up and `generated` unset.
    pub fn closed(rows: usize, cols: usize) -> Grid {
        Grid {
            cells: Array2D::new(Cell::closed(), rows, cols),
            generated: false,
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.rows()
    }

    pub fn cols(&self) -> usize {
        self.cells.cols()
    }

    pub fn is_generated(&self) -> bool {
        self.generated
    }

    pub fn set_generated(&mut self, generated: bool) {
        self.generated = generated;
    }

    pub fn is_in_bounds(&self, pos: RowCol) -> bool {
        0 <= pos.row
            && pos.row < self.rows() as i32
            && 0 <= pos.col
            && pos.col < self.cols() as i32
    }

    pub fn cell(&self, pos: RowCol) -> Option<&Cell> {
        self.cells.get(pos)
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = RowCol> + '_ {
        self.cells.iter_pos()
    }

    /// Opens a passage. Out-of-bounds positions are ignored.
    pub fn open(&mut self, pos: RowCol, wall: Wall) {
        if let Some(cell) = self.cells.get_mut(pos) {
            cell.open(wall);
        }
    }

    /// Whether a single step from `from` to `to` is legal: `to` must be in
    /// bounds and 4-adjacent, and the wall between the two cells open.
    /// Moving right or down checks `from`'s wall, moving left or up checks
    /// `to`'s.
    pub fn can_move(&self, from: RowCol, to: RowCol) -> bool {
        if !self.is_in_bounds(from) || !self.is_in_bounds(to) {
            return false;
        }

        match (to.row - from.row, to.col - from.col) {
            (0, 1) => !self.cells[from].right_wall(),
            (0, -1) => !self.cells[to].right_wall(),
            (1, 0) => !self.cells[from].bottom_wall(),
            (-1, 0) => !self.cells[to].bottom_wall(),
            _ => false,
        }
    }
}

impl ops::Index<RowCol> for Grid {
    type Output = Cell;

    fn index(&self, index: RowCol) -> &Cell {
        &self.cells[index]
    }
}
