pub mod cell;
pub use cell::{Cell, Wall};
pub mod grid;
pub use grid::Grid;

pub mod ser;
