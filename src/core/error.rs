use crate::core::models::Coord;
use thiserror::Error;

/// Integration errors raised by the grid, generator and path finder.
///
/// An unreachable destination is not an error, see `PathResult::Unreachable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MazeError {
    /// A grid was requested with a non-positive width or height.
    #[error("invalid grid dimensions {width}x{height}, both must be at least 1")]
    InvalidDimension { width: i32, height: i32 },

    /// A coordinate outside the current grid was used.
    #[error("cell {cell} is outside the {width}x{height} grid")]
    OutOfBounds { cell: Coord, width: i32, height: i32 },
}

pub type MazeResult<T> = Result<T, MazeError>;
