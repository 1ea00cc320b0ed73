//! Spanning-tree properties of generated mazes, across a spread of sizes.

use std::collections::VecDeque;

use rand::SeedableRng as _;

use gridmaze::{generate, Dir, Ellers, GenerateError, Grid, MazeGenerator, Random, RowCol};

fn generate_seeded(rows: usize, cols: usize, seed: u64) -> Grid {
    let mut rng = Random::seed_from_u64(seed);
    Ellers.generate(rows, cols, &mut rng).unwrap()
}

/// Cells reachable from (0, 0) through open passages.
fn count_reachable(grid: &Grid) -> usize {
    let mut visited = vec![vec![false; grid.cols()]; grid.rows()];
    let mut queue = VecDeque::new();

    visited[0][0] = true;
    queue.push_back(RowCol::new(0, 0));
    let mut count = 1;

    while let Some(pos) = queue.pop_front() {
        for dir in Dir::in_order() {
            let next = pos + dir.offset();
            if grid.can_move(pos, next) && !visited[next.row as usize][next.col as usize] {
                visited[next.row as usize][next.col as usize] = true;
                count += 1;
                queue.push_back(next);
            }
        }
    }

    count
}

/// Open internal walls. A perfect maze has exactly `cells - 1` of them.
fn count_passages(grid: &Grid) -> usize {
    let mut passages = 0;

    for pos in grid.iter_pos() {
        let cell = &grid[pos];
        if (pos.col as usize) + 1 < grid.cols() && !cell.right_wall() {
            passages += 1;
        }
        if (pos.row as usize) + 1 < grid.rows() && !cell.bottom_wall() {
            passages += 1;
        }
    }

    passages
}

fn boundary_closed(grid: &Grid) -> bool {
    let last_row = grid.rows() as i32 - 1;
    let last_col = grid.cols() as i32 - 1;

    (0..grid.rows() as i32).all(|row| grid[RowCol::new(row, last_col)].right_wall())
        && (0..grid.cols() as i32).all(|col| grid[RowCol::new(last_row, col)].bottom_wall())
}

#[test]
fn dimensions_match_request() {
    for (rows, cols) in [(5, 5), (5, 10), (10, 5), (20, 20), (50, 50)] {
        let grid = generate_seeded(rows, cols, 1);

        assert_eq!(grid.rows(), rows);
        assert_eq!(grid.cols(), cols);
        assert!(grid.is_generated());
    }
}

#[test]
fn boundary_walls_are_closed() {
    for (rows, cols) in [(5, 5), (10, 15), (1, 10), (10, 1)] {
        let grid = generate_seeded(rows, cols, 2);
        assert!(boundary_closed(&grid), "boundary open in {rows}x{cols}");
    }
}

#[test]
fn every_cell_is_reachable() {
    for (rows, cols) in [(3, 3), (10, 10), (7, 13), (20, 20), (50, 50)] {
        let grid = generate_seeded(rows, cols, 3);
        assert_eq!(count_reachable(&grid), rows * cols);
    }
}

#[test]
fn passage_count_is_cells_minus_one() {
    for (rows, cols) in [(3, 3), (10, 10), (15, 8), (20, 20)] {
        let grid = generate_seeded(rows, cols, 4);
        assert_eq!(count_passages(&grid), rows * cols - 1);
    }
}

#[test]
fn single_cell_keeps_both_walls() {
    let grid = generate_seeded(1, 1, 5);

    assert!(grid[RowCol::new(0, 0)].right_wall());
    assert!(grid[RowCol::new(0, 0)].bottom_wall());
    assert_eq!(count_reachable(&grid), 1);
    assert_eq!(count_passages(&grid), 0);
}

#[test]
fn single_row_is_one_corridor() {
    let grid = generate_seeded(1, 10, 6);

    // connected horizontally: no internal right walls, boundary intact
    for col in 0..9 {
        assert!(!grid[RowCol::new(0, col)].right_wall(), "wall at col {col}");
    }
    assert!(grid[RowCol::new(0, 9)].right_wall());
    for col in 0..10 {
        assert!(grid[RowCol::new(0, col)].bottom_wall());
    }

    assert_eq!(count_reachable(&grid), 10);
    assert_eq!(count_passages(&grid), 9);
}

#[test]
fn single_column_is_one_corridor() {
    let grid = generate_seeded(10, 1, 7);

    for row in 0..9 {
        assert!(!grid[RowCol::new(row, 0)].bottom_wall(), "wall at row {row}");
    }
    assert!(grid[RowCol::new(9, 0)].bottom_wall());
    for row in 0..10 {
        assert!(grid[RowCol::new(row, 0)].right_wall());
    }

    assert_eq!(count_reachable(&grid), 10);
    assert_eq!(count_passages(&grid), 9);
}

#[test]
fn zero_dimensions_are_rejected() {
    let mut rng = Random::seed_from_u64(8);

    assert_eq!(
        Ellers.generate(0, 5, &mut rng),
        Err(GenerateError::InvalidSize { rows: 0, cols: 5 })
    );
    assert_eq!(
        Ellers.generate(5, 0, &mut rng),
        Err(GenerateError::InvalidSize { rows: 5, cols: 0 })
    );
}

#[test]
fn same_seed_replays_same_maze() {
    assert_eq!(generate_seeded(10, 10, 42), generate_seeded(10, 10, 42));
    assert_eq!(generate(10, 10, Some(42)), generate(10, 10, Some(42)));
}

#[test]
fn different_seeds_differ() {
    assert_ne!(generate_seeded(10, 10, 42), generate_seeded(10, 10, 43));
}

#[test]
fn fresh_entropy_still_yields_a_valid_maze() {
    let grid = generate(10, 10, None).unwrap();

    assert!(grid.is_generated());
    assert!(boundary_closed(&grid));
    assert_eq!(count_reachable(&grid), 100);
    assert_eq!(count_passages(&grid), 99);
}

#[test]
fn many_sizes_stay_valid() {
    for i in 0..100usize {
        let rows = 5 + i % 20;
        let cols = 5 + (i * 7) % 20;
        let grid = generate_seeded(rows, cols, i as u64);

        assert!(grid.is_generated(), "iteration {i}: not generated");
        assert!(boundary_closed(&grid), "iteration {i}: boundary open");
        assert_eq!(count_reachable(&grid), rows * cols, "iteration {i}");
        assert_eq!(count_passages(&grid), rows * cols - 1, "iteration {i}");
    }
}
