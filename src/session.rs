use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use crate::config::MazeConfig;
use crate::core::{generate, shortest_path, Coord, Grid, MazeError, MazeResult, PathResult};
use crate::maze_graph::region_count;

/// Grid dimensions that fit a surface of the given logical size.
///
/// Each dimension is clamped to at least one cell.
pub fn grid_dimensions(surface_width: i32, surface_height: i32, cell_size: i32, margin: i32) -> (i32, i32) {
    let cell_size = cell_size.max(1);
    let fit = |surface: i32| (surface.saturating_sub(margin.saturating_mul(2)) / cell_size).max(1);
    (fit(surface_width), fit(surface_height))
}

/// Discrete requests from the front end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MazeEvent {
    Regenerate,
    TogglePath,
    SetStart(Coord),
    SetDestination(Coord),
    /// First selection picks the start, the next one picks the destination.
    SelectCell(Coord),
    /// The drawing surface changed size, in logical units.
    Resize { width: i32, height: i32 },
    ChangeCellSize(i32),
}

/// Everything the interactive maze needs between two events.
pub struct MazeSession {
    config: MazeConfig,
    rng: StdRng,
    seed: Option<u64>,
    surface: (i32, i32),
    cell_size: i32,
    grid: Grid,
    start: Coord,
    destination: Coord,
    path: PathResult,
    show_path: bool,
    awaiting_destination: bool,
    regions: usize,
}

impl MazeSession {
    /// Creates the session on first sizing and generates the first maze.
    pub fn new(config: MazeConfig, surface_width: i32, surface_height: i32) -> MazeResult<MazeSession> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let cell_size = config.cell_size.max(config.min_cell_size());
        let mut session = MazeSession {
            seed: config.seed,
            config,
            rng,
            surface: (surface_width, surface_height),
            cell_size,
            grid: Grid::new(1, 1)?,
            start: Coord::default(),
            destination: Coord::default(),
            path: PathResult::Found(vec![Coord::default()]),
            show_path: true,
            awaiting_destination: false,
            regions: 1,
        };
        info!("session started with seed {:?}", session.seed);
        session.regenerate()?;
        Ok(session)
    }

    /// Creates a session with fixed grid dimensions, ignoring surface sizing.
    pub fn with_grid_size(config: MazeConfig, width: i32, height: i32) -> MazeResult<MazeSession> {
        if width <= 0 || height <= 0 {
            return Err(MazeError::InvalidDimension { width, height });
        }
        let cell_size = config.cell_size.max(config.min_cell_size());
        let margin = config.margin;
        let surface = |cells: i32| cells.checked_mul(cell_size)?.checked_add(margin.checked_mul(2)?);
        match (surface(width), surface(height)) {
            (Some(surface_width), Some(surface_height)) => MazeSession::new(config, surface_width, surface_height),
            _ => Err(MazeError::InvalidDimension { width, height }),
        }
    }

    pub fn apply(&mut self, event: MazeEvent) -> MazeResult<()> {
        debug!("applying {:?}", event);
        let result = match event {
            MazeEvent::Regenerate => self.regenerate(),
            MazeEvent::TogglePath => {
                self.show_path = !self.show_path;
                Ok(())
            }
            MazeEvent::SetStart(cell) => self.set_start(cell),
            MazeEvent::SetDestination(cell) => self.set_destination(cell),
            MazeEvent::SelectCell(cell) if self.awaiting_destination => self.set_destination(cell),
            MazeEvent::SelectCell(cell) => {
                let result = self.set_start(cell);
                if result.is_ok() {
                    self.awaiting_destination = true;
                }
                result
            }
            MazeEvent::Resize { width, height } => {
                self.surface = (width, height);
                self.regenerate()
            }
            MazeEvent::ChangeCellSize(delta) => {
                self.cell_size = self.cell_size.saturating_add(delta).max(self.config.min_cell_size());
                self.regenerate()
            }
        };
        if let Err(err) = &result {
            warn!("rejected {:?}: {}", event, err);
        }
        result
    }

    /// Builds a fresh maze for the current surface and resets the request to
    /// opposite corners.
    pub fn regenerate(&mut self) -> MazeResult<()> {
        let (width, height) = grid_dimensions(self.surface.0, self.surface.1, self.cell_size, self.config.margin);
        let attempts = self.config.wall_attempts(width, height);
        let placed = generate(&mut self.grid, width, height, attempts, &mut self.rng)?;

        let (start, destination) = self.grid.corners();
        self.start = start;
        self.destination = destination;
        self.awaiting_destination = false;
        self.regions = region_count(&self.grid);
        info!(
            "generated {}x{} maze, {} of {} attempts placed a wall, {} regions",
            width, height, placed, attempts, self.regions
        );
        self.recompute_path()
    }

    pub fn set_start(&mut self, cell: Coord) -> MazeResult<()> {
        self.check(cell)?;
        self.start = cell;
        self.recompute_path()
    }

    pub fn set_destination(&mut self, cell: Coord) -> MazeResult<()> {
        self.check(cell)?;
        self.destination = cell;
        self.awaiting_destination = false;
        self.recompute_path()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn path(&self) -> &PathResult {
        &self.path
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn destination(&self) -> Coord {
        self.destination
    }

    pub fn show_path(&self) -> bool {
        self.show_path
    }

    pub fn awaiting_destination(&self) -> bool {
        self.awaiting_destination
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn region_count(&self) -> usize {
        self.regions
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    fn recompute_path(&mut self) -> MazeResult<()> {
        self.path = shortest_path(&self.grid, self.start, self.destination)?;
        match &self.path {
            PathResult::Found(cells) => info!("path {} -> {} has {} cells", self.start, self.destination, cells.len()),
            PathResult::Unreachable => info!("no path from {} to {}", self.start, self.destination),
        }
        Ok(())
    }

    fn check(&self, cell: Coord) -> MazeResult<()> {
        if self.grid.contains(&cell) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                cell,
                width: self.grid.width(),
                height: self.grid.height(),
            })
        }
    }
}
