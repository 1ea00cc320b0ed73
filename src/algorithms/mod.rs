pub mod ellers;

use std::fmt;

use rand::{thread_rng, Rng as _, SeedableRng as _};
use thiserror::Error;

use crate::grid::Grid;

pub use ellers::Ellers;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("invalid maze size: {rows}x{cols}")]
    InvalidSize { rows: usize, cols: usize },
}

/// A maze generation algorithm. An implementation must produce a perfect
/// maze: every cell reachable from every other, exactly `rows * cols - 1`
/// open passages, and the outer boundary fully walled.
pub trait MazeGenerator: fmt::Debug + Sync + Send {
    fn generate(&self, rows: usize, cols: usize, rng: &mut Random)
        -> Result<Grid, GenerateError>;
}

/// Generates a maze with [`Ellers`], seeded from `seed` or from fresh
/// entropy when none is given. The same seed always yields the same maze.
pub fn generate(rows: usize, cols: usize, seed: Option<u64>) -> Result<Grid, GenerateError> {
    let seed = seed.unwrap_or_else(|| thread_rng().gen());
    log::debug!("generating {}x{} maze, seed {}", rows, cols, seed);

    let mut rng = Random::seed_from_u64(seed);
    Ellers.generate(rows, cols, &mut rng)
}
