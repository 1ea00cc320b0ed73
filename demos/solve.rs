use std::env;

use hashbrown::HashSet;
use rand::{thread_rng, Rng as _, SeedableRng as _};

use gridmaze::{solve, Ellers, Grid, MazeGenerator, Random, RowCol};

fn main() {
    let args = env::args()
        .skip(1)
        .take(3)
        .map(|s| s.parse())
        .collect::<Result<Vec<i128>, _>>()
        .expect("Expected 2 integers");

    assert!(
        args.len() == 2 || args.len() == 3,
        "Expected 2 or 3 integers"
    );

    let input_seed = args.get(2).copied().map(|seed| seed as u64);
    let seed = input_seed.unwrap_or_else(|| thread_rng().gen());
    let mut rng = Random::seed_from_u64(seed);

    if input_seed.is_none() {
        println!("Seed: {}", seed);
    }

    let (rows, cols) = (args[0] as usize, args[1] as usize);
    let grid = Ellers
        .generate(rows, cols, &mut rng)
        .expect("Expected positive dimensions");

    let start = RowCol::new(0, 0);
    let end = RowCol::new(rows as i32 - 1, cols as i32 - 1);
    let path = solve(&grid, start, end);

    print!("{}", render(&grid, &path));
    println!("path length: {}", path.len());
}

fn render(grid: &Grid, path: &[RowCol]) -> String {
    let on_path: HashSet<RowCol> = path.iter().copied().collect();

    let mut out = String::from("+");
    for _ in 0..grid.cols() {
        out.push_str("--+");
    }
    out.push('\n');

    for row in 0..grid.rows() {
        out.push('|');
        for col in 0..grid.cols() {
            let pos = RowCol::new(row as i32, col as i32);
            out.push_str(if on_path.contains(&pos) { "::" } else { "  " });
            out.push(if grid[pos].right_wall() { '|' } else { ' ' });
        }
        out.push('\n');

        out.push('+');
        for col in 0..grid.cols() {
            let pos = RowCol::new(row as i32, col as i32);
            out.push_str(if grid[pos].bottom_wall() { "--" } else { "  " });
            out.push('+');
        }
        out.push('\n');
    }

    out
}
