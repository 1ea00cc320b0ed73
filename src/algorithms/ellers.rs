use hashbrown::HashMap;
use rand::{seq::SliceRandom as _, Rng as _};

use super::{GenerateError, MazeGenerator, Random};
use crate::coord::RowCol;
use crate::grid::{Grid, Wall};

/// Eller's algorithm: carves the maze one row at a time, labelling each
/// column of the current row with the id of the connected set it belongs to.
/// Transient state never exceeds one row.
#[derive(Debug)]
pub struct Ellers;

impl MazeGenerator for Ellers {
    fn generate(
        &self,
        rows: usize,
        cols: usize,
        rng: &mut Random,
    ) -> Result<Grid, GenerateError> {
        if rows == 0 || cols == 0 {
            return Err(GenerateError::InvalidSize { rows, cols });
        }

        let mut grid = Grid::closed(rows, cols);

        // 0 marks a column not yet connected to anything in the current row
        let mut sets = vec![0u64; cols];
        let mut next_set = 1u64;

        for row in 0..rows {
            for set in sets.iter_mut() {
                if *set == 0 {
                    *set = next_set;
                    next_set += 1;
                }
            }

            if row == rows - 1 {
                // last row: join every remaining pair of adjacent distinct
                // sets, leaving all bottom walls up
                for col in 0..cols - 1 {
                    if sets[col] != sets[col + 1] {
                        grid.open(RowCol::new(row as i32, col as i32), Wall::Right);
                        let (old, new) = (sets[col + 1], sets[col]);
                        relabel(&mut sets, old, new);
                    }
                }
            } else {
                merge_random_right(&mut grid, &mut sets, row, rng);
                open_bottom_passages(&mut grid, &sets, row, rng);
                carry_sets_down(&grid, &mut sets, row);
            }
        }

        grid.set_generated(true);
        Ok(grid)
    }
}

fn relabel(sets: &mut [u64], old: u64, new: u64) {
    for set in sets.iter_mut() {
        if *set == old {
            *set = new;
        }
    }
}

/// Coin-flips a horizontal merge for each adjacent column pair in distinct
/// sets. Merging cells already in one set would close a cycle, so those
/// pairs are skipped.
fn merge_random_right(grid: &mut Grid, sets: &mut [u64], row: usize, rng: &mut Random) {
    for col in 0..sets.len() - 1 {
        if sets[col] != sets[col + 1] && rng.gen_bool(0.5) {
            grid.open(RowCol::new(row as i32, col as i32), Wall::Right);
            let (old, new) = (sets[col + 1], sets[col]);
            relabel(sets, old, new);
        }
    }
}

/// Opens the bottom wall of one shuffled member per set unconditionally, so
/// every set survives into the next row, and of each other member with
/// probability one half. Sets are visited in first-seen column order; a
/// seeded run must always replay the same maze.
fn open_bottom_passages(grid: &mut Grid, sets: &[u64], row: usize, rng: &mut Random) {
    let mut groups: Vec<Vec<usize>> = Vec::new();
    let mut slots: HashMap<u64, usize> = HashMap::new();

    for (col, &set) in sets.iter().enumerate() {
        let slot = *slots.entry(set).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(col);
    }

    for group in &mut groups {
        group.shuffle(rng);

        grid.open(RowCol::new(row as i32, group[0] as i32), Wall::Bottom);
        for &col in &group[1..] {
            if rng.gen_bool(0.5) {
                grid.open(RowCol::new(row as i32, col as i32), Wall::Bottom);
            }
        }
    }
}

/// A column stays in its set only while linked downward; a closed bottom
/// wall resets it to receive a fresh id in the next row.
fn carry_sets_down(grid: &Grid, sets: &mut [u64], row: usize) {
    for (col, set) in sets.iter_mut().enumerate() {
        if grid[RowCol::new(row as i32, col as i32)].bottom_wall() {
            *set = 0;
        }
    }
}
