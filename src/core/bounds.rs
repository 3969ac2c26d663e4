use crate::core::models::Coord;

/// A bounding box with one corner fixed at 0,0 and assumed to have positive extent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundsOriginRoot {
    pub extent: Coord,
}

impl BoundsOriginRoot {
    pub fn new(x: i32, y: i32) -> BoundsOriginRoot {
        BoundsOriginRoot {
            extent: Coord { x, y },
        }
    }

    pub fn contains(&self, pos: &Coord) -> bool {
        pos.x >= 0 && pos.x < self.extent.x && pos.y >= 0 && pos.y < self.extent.y
    }

    pub fn area(&self) -> i32 {
        self.extent.x * self.extent.y
    }

    /// Every position inside the bounds, row by row.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + use<> {
        let extent = self.extent;
        (0..extent.y).flat_map(move |y| (0..extent.x).map(move |x| Coord { x, y }))
    }
}
