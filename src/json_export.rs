use serde::{Deserialize, Serialize};
use crate::core::Coord;
use crate::session::MazeSession;

#[derive(Serialize, Deserialize, Debug)]
struct JsonMaze {
    width: i32,
    height: i32,
    cells: Vec<JsonCell>,
    start: Coord,
    destination: Coord,
    /// `None` when the destination cannot be reached.
    path: Option<Vec<Coord>>,
    regions: usize,
}

#[derive(Serialize, Deserialize, Debug)]
struct JsonCell {
    x: i32,
    y: i32,
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

pub fn get_json_data(session: &MazeSession) -> Result<String, serde_json::Error> {
    let grid = session.grid();
    let cells = grid.iter_cells().map(|(cell, walls)| {
        JsonCell {
            x: cell.x,
            y: cell.y,
            up: walls.up,
            down: walls.down,
            left: walls.left,
            right: walls.right,
        }
    }).collect();

    let json_data = JsonMaze {
        width: grid.width(),
        height: grid.height(),
        cells,
        start: session.start(),
        destination: session.destination(),
        path: session.path().cells().map(|cells| cells.to_vec()),
        regions: session.region_count(),
    };
    serde_json::to_string_pretty(&json_data)
}

/// Writes the export next to the other files under the export directory.
pub fn write_json_export(session: &MazeSession) -> Result<(), Box<dyn std::error::Error>> {
    let path = &session.config().export_path;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, get_json_data(session)?)?;
    log::info!("maze exported to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::MazeConfig;

    fn session(width: i32, height: i32, ratio: f64) -> MazeSession {
        let config = MazeConfig {
            seed: Some(3),
            wall_attempts_per_cell: ratio,
            ..MazeConfig::default()
        };
        MazeSession::with_grid_size(config, width, height).unwrap()
    }

    #[test]
    fn export_lists_every_cell_and_the_path() {
        let session = session(3, 2, 0.0);
        let json: serde_json::Value = serde_json::from_str(&get_json_data(&session).unwrap()).unwrap();

        assert_eq!(json["width"], 3);
        assert_eq!(json["height"], 2);
        assert_eq!(json["cells"].as_array().unwrap().len(), 6);
        assert_eq!(json["start"], serde_json::json!({ "x": 0, "y": 0 }));
        assert_eq!(json["destination"], serde_json::json!({ "x": 2, "y": 1 }));
        assert_eq!(json["path"].as_array().unwrap().len(), 4);
        assert_eq!(json["regions"], 1);
    }

    #[test]
    fn unreachable_path_is_null() {
        // 100 trials on a 2x1 grid; each hits the only interior edge with probability 1/4.
        let session = session(2, 1, 50.0);
        let json: serde_json::Value = serde_json::from_str(&get_json_data(&session).unwrap()).unwrap();

        assert!(json["path"].is_null());
        assert_eq!(json["regions"], 2);
    }
}
