use crate::core::bounds::BoundsOriginRoot;
use crate::core::models::Coord;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedGrid<T> {
    bounds: BoundsOriginRoot,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    pub fn new_with_size(width: i32, height: i32, default: T) -> Self
    where
        T: Clone,
    {
        let bounds = BoundsOriginRoot::new(width, height);
        BoundedGrid::new(bounds, default)
    }

    pub fn new(bounds: BoundsOriginRoot, default: T) -> Self
    where
        T: Clone,
    {
        let cells = vec![default; bounds.area().max(0) as usize];
        BoundedGrid {
            bounds,
            cells,
        }
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.bounds
    }

    pub fn contains(&self, pos: &Coord) -> bool {
        self.bounds.contains(pos)
    }

    pub fn get(&self, pos: &Coord) -> Option<&T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&self[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> {
        self.bounds.iter().zip(self.cells.iter())
    }
}

impl<T> std::ops::Index<&Coord> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: &Coord) -> &Self::Output {
        &self.cells[(index.y * self.bounds.extent.x + index.x) as usize]
    }
}

impl<T> std::ops::IndexMut<&Coord> for BoundedGrid<T> {
    fn index_mut(&mut self, index: &Coord) -> &mut Self::Output {
        &mut self.cells[(index.y * self.bounds.extent.x + index.x) as usize]
    }
}
