use petgraph::graph::{NodeIndex, UnGraph};
use crate::core::{BoundedGrid, Coord, Grid, Side};

/// Builds an undirected graph with one node per cell and one edge per open
/// interior side. The returned lookup maps each cell to its node.
pub fn to_petgraph(grid: &Grid) -> (UnGraph<Coord, ()>, BoundedGrid<NodeIndex>) {
    let mut graph = UnGraph::with_capacity(
        (grid.width() * grid.height()) as usize,
        (2 * grid.width() * grid.height()) as usize,
    );
    let mut nodes = BoundedGrid::new_with_size(grid.width(), grid.height(), NodeIndex::end());
    for (cell, _) in grid.iter_cells() {
        nodes[&cell] = graph.add_node(cell);
    }

    // Only look down and right so every open side is added once.
    for (cell, walls) in grid.iter_cells() {
        for side in [Side::Down, Side::Right] {
            let neighbor = cell.step(side);
            if walls.get(side) || !grid.contains(&neighbor) {
                continue;
            }
            graph.add_edge(nodes[&cell], nodes[&neighbor], ());
        }
    }

    (graph, nodes)
}

/// Number of regions of the grid that cannot reach each other.
pub fn region_count(grid: &Grid) -> usize {
    let (graph, _) = to_petgraph(grid);
    petgraph::algo::connected_components(&graph)
}
