use crate::core::{Coord, PathResult};
use crate::session::MazeSession;

/// Cells that get a glyph of their own when a maze is drawn.
#[derive(Default, Clone, Copy)]
pub struct CellMarks<'a> {
    pub start: Option<Coord>,
    pub destination: Option<Coord>,
    pub path: Option<&'a PathResult>,
}

impl<'a> CellMarks<'a> {
    /// Start, destination and, when shown, the current path.
    pub fn from_session(session: &'a MazeSession) -> Self {
        CellMarks {
            start: Some(session.start()),
            destination: Some(session.destination()),
            path: session.show_path().then(|| session.path()),
        }
    }
}

pub struct MazeRenderState<'a> {
    pub session: &'a MazeSession,
    pub cursor: Option<Coord>,
    pub message: Option<String>,
}
