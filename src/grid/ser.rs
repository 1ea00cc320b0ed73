//! Text form of a maze: a `rows cols` header line, then the right-wall
//! matrix and the bottom-wall matrix as space-separated `0`/`1` values,
//! separated by a blank line. Reading is token-based, so any whitespace
//! layout parses.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::coord::RowCol;
use crate::grid::{Grid, Wall};

/// Largest edge length the loader accepts. This is the surrounding
/// application's policy bound; the generator itself only rejects zero.
pub const MAX_DIM: usize = 50;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read dimensions")]
    Header,
    #[error("invalid dimensions: {rows}x{cols} (max {MAX_DIM}x{MAX_DIM})")]
    Dimensions { rows: i64, cols: i64 },
    #[error("unexpected end of file at {matrix} wall [{row},{col}]")]
    Truncated { matrix: Wall, row: usize, col: usize },
    #[error("invalid value {value} at {matrix} wall [{row},{col}]")]
    Value {
        value: String,
        matrix: Wall,
        row: usize,
        col: usize,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("no maze data to save")]
    NotGenerated,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Parses a maze document. A successfully parsed grid comes back with
/// `generated` set; any structural defect is rejected here so the rest of
/// the crate never sees a half-populated grid.
pub fn read_grid<R: Read>(mut reader: R) -> Result<Grid, ParseError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut tokens = text.split_whitespace();
    let mut header = || -> Option<i64> { tokens.next().and_then(|t| t.parse().ok()) };
    let rows = header().ok_or(ParseError::Header)?;
    let cols = header().ok_or(ParseError::Header)?;

    if rows < 1 || cols < 1 || rows > MAX_DIM as i64 || cols > MAX_DIM as i64 {
        return Err(ParseError::Dimensions { rows, cols });
    }
    let (rows, cols) = (rows as usize, cols as usize);

    let mut grid = Grid::closed(rows, cols);
    for matrix in [Wall::Right, Wall::Bottom] {
        for row in 0..rows {
            for col in 0..cols {
                let token = tokens
                    .next()
                    .ok_or(ParseError::Truncated { matrix, row, col })?;
                match token {
                    "1" => {}
                    "0" => grid.open(RowCol::new(row as i32, col as i32), matrix),
                    _ => {
                        return Err(ParseError::Value {
                            value: token.to_string(),
                            matrix,
                            row,
                            col,
                        })
                    }
                }
            }
        }
    }

    grid.set_generated(true);
    Ok(grid)
}

/// Writes a maze document. Refuses a grid that holds no finished maze.
pub fn write_grid<W: Write>(mut writer: W, grid: &Grid) -> Result<(), WriteError> {
    if !grid.is_generated() {
        return Err(WriteError::NotGenerated);
    }

    writeln!(writer, "{} {}", grid.rows(), grid.cols())?;
    write_matrix(&mut writer, grid, Wall::Right)?;
    writeln!(writer)?;
    write_matrix(&mut writer, grid, Wall::Bottom)?;

    Ok(())
}

fn write_matrix<W: Write>(writer: &mut W, grid: &Grid, wall: Wall) -> std::io::Result<()> {
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let pos = RowCol::new(row as i32, col as i32);
            if col > 0 {
                write!(writer, " ")?;
            }
            write!(writer, "{}", grid[pos].has_wall(wall) as u8)?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

pub fn load<P: AsRef<Path>>(path: P) -> Result<Grid, ParseError> {
    let grid = read_grid(BufReader::new(File::open(path.as_ref())?))?;
    debug!(
        "loaded {}x{} maze from {}",
        grid.rows(),
        grid.cols(),
        path.as_ref().display()
    );

    Ok(grid)
}

pub fn save<P: AsRef<Path>>(path: P, grid: &Grid) -> Result<(), WriteError> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    write_grid(&mut writer, grid)?;
    writer.flush()?;
    debug!(
        "saved {}x{} maze to {}",
        grid.rows(),
        grid.cols(),
        path.as_ref().display()
    );

    Ok(())
}
