//! Perfect-maze generation and shortest-path queries on a rectangular grid.
//!
//! A [`Grid`] stores one right and one bottom wall flag per cell. [`Ellers`]
//! carves a random spanning tree over the cells row by row, [`solve`]
//! answers shortest-path queries by breadth-first search, and [`grid::ser`]
//! speaks the text format the surrounding application stores mazes in.

pub mod algorithms;
pub mod array;
pub mod coord;
pub mod grid;
pub mod solver;

pub use algorithms::{generate, Ellers, GenerateError, MazeGenerator, Random};
pub use coord::{Dir, RowCol};
pub use grid::{Cell, Grid, Wall};
pub use solver::{solve, Path};
