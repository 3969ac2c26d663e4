use crate::core::bounded_grid::BoundedGrid;
use crate::core::error::{MazeError, MazeResult};
use crate::core::models::{CellWalls, Coord, Side};

/// Rectangular table of cells and the walls between them.
///
/// A wall between two cells is stored on both of them, so it can be read from
/// either side. Boundary cells never carry a wall on their outward side; the
/// grid edge is closed by absence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: BoundedGrid<CellWalls>,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> MazeResult<Grid> {
        check_dimensions(width, height)?;
        Ok(Grid {
            cells: BoundedGrid::new_with_size(width, height, CellWalls::default()),
        })
    }

    /// Rebuilds the grid with the given dimensions and no walls.
    ///
    /// On error the grid is left untouched.
    pub fn resize(&mut self, width: i32, height: i32) -> MazeResult<()> {
        check_dimensions(width, height)?;
        self.cells = BoundedGrid::new_with_size(width, height, CellWalls::default());
        Ok(())
    }

    pub fn width(&self) -> i32 {
        self.cells.size().extent.x
    }

    pub fn height(&self) -> i32 {
        self.cells.size().extent.y
    }

    pub fn contains(&self, cell: &Coord) -> bool {
        self.cells.contains(cell)
    }

    pub fn has_wall(&self, cell: Coord, side: Side) -> MazeResult<bool> {
        Ok(self.checked(cell)?.get(side))
    }

    /// Places a wall on `side` of `cell` and on the matching side of the
    /// neighbor. Does nothing when `side` faces the grid boundary.
    pub fn add_wall(&mut self, cell: Coord, side: Side) -> MazeResult<()> {
        self.checked(cell)?;
        let neighbor = cell.step(side);
        if !self.cells.contains(&neighbor) {
            return Ok(());
        }

        self.cells[&cell].set(side);
        self.cells[&neighbor].set(side.opposite());
        Ok(())
    }

    /// Adjacent cells reachable from `cell` without crossing a wall, in
    /// `Side::ALL` order.
    pub fn neighbors(&self, cell: Coord) -> MazeResult<Vec<Coord>> {
        let walls = *self.checked(cell)?;
        Ok(Side::ALL
            .iter()
            .filter(|&&side| !walls.get(side))
            .map(|&side| cell.step(side))
            .filter(|neighbor| self.cells.contains(neighbor))
            .collect())
    }

    pub fn walls(&self, cell: &Coord) -> Option<&CellWalls> {
        self.cells.get(cell)
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord, &CellWalls)> {
        self.cells.iter()
    }

    /// Number of distinct interior walls. Each wall is stored twice, so only the
    /// down and right sides are counted.
    pub fn wall_count(&self) -> usize {
        self.iter_cells()
            .map(|(_, walls)| walls.down as usize + walls.right as usize)
            .sum()
    }

    pub fn corners(&self) -> (Coord, Coord) {
        (Coord::new(0, 0), Coord::new(self.width() - 1, self.height() - 1))
    }

    fn checked(&self, cell: Coord) -> MazeResult<&CellWalls> {
        self.cells.get(&cell).ok_or(MazeError::OutOfBounds {
            cell,
            width: self.width(),
            height: self.height(),
        })
    }
}

/// Both sides positive and the cell count representable as an `i32`.
fn check_dimensions(width: i32, height: i32) -> MazeResult<()> {
    if width <= 0 || height <= 0 || width.checked_mul(height).is_none() {
        return Err(MazeError::InvalidDimension { width, height });
    }
    Ok(())
}
