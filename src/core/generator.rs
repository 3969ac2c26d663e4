use rand::Rng;
use crate::core::error::MazeResult;
use crate::core::grid::Grid;
use crate::core::models::{Coord, Side};

/// One attempt per cell on average.
pub fn default_wall_attempts(width: i32, height: i32) -> usize {
    (width.max(0) as usize) * (height.max(0) as usize)
}

/// Clears `grid` to `width` x `height`, then runs `wall_attempts` trials that
/// each pick a uniformly random cell and side and try to wall it off.
///
/// Connectivity is not tracked: any region, including the destination, may end
/// up sealed off. Returns the number of trials that placed a new wall.
pub fn generate<R>(
    grid: &mut Grid,
    width: i32,
    height: i32,
    wall_attempts: usize,
    rng: &mut R,
) -> MazeResult<usize>
where
    R: Rng + ?Sized,
{
    grid.resize(width, height)?;

    let mut placed = 0;
    for _ in 0..wall_attempts {
        let cell = Coord {
            x: rng.random_range(0..width),
            y: rng.random_range(0..height),
        };
        let side = Side::ALL[rng.random_range(0..Side::ALL.len())];

        let before = grid.has_wall(cell, side)?;
        grid.add_wall(cell, side)?;
        if !before && grid.has_wall(cell, side)? {
            placed += 1;
        }
    }

    Ok(placed)
}

/// Builds a fresh grid instead of reusing one.
pub fn generate_new<R>(width: i32, height: i32, wall_attempts: usize, rng: &mut R) -> MazeResult<Grid>
where
    R: Rng + ?Sized,
{
    let mut grid = Grid::new(width, height)?;
    generate(&mut grid, width, height, wall_attempts, rng)?;
    Ok(grid)
}
