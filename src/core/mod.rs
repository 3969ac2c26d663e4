mod bounded_grid;
mod bounds;
mod error;
mod generator;
mod grid;
mod models;
mod pathfinder;

pub use bounded_grid::BoundedGrid;
pub use bounds::BoundsOriginRoot;
pub use error::{MazeError, MazeResult};
pub use generator::{default_wall_attempts, generate, generate_new};
pub use grid::Grid;
pub use models::{CellWalls, Coord, Side};
pub use pathfinder::{shortest_path, PathResult};
