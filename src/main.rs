// Interactive maze with shortest path display, drawn with ratatui.
// Controls: r regenerate, s toggle path, +/- cell size, arrows move the cursor,
// Enter or a mouse click selects the start then the destination, e export, q quit.
// Tiles: 'S' start, 'D' destination, '*' path, '|' and '-' walls.

use std::io;
use log::{error, info};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use wall_maze::config::{parse_args, MazeConfig, RunMode};
use wall_maze::console_interface::ConsoleInput::*;
use wall_maze::console_interface::{
    cell_at, cleanup_terminal, handle_input, render_maze, render_maze_to_string, setup_terminal,
    surface_size,
};
use wall_maze::core::{Coord, PathResult};
use wall_maze::json_export::write_json_export;
use wall_maze::logging::init_file_logger;
use wall_maze::models::{CellMarks, MazeRenderState};
use wall_maze::session::{MazeEvent, MazeSession};

const DEFAULT_PRINT_SIZE: (i32, i32) = (16, 8);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (mode, config) = parse_args(std::env::args().skip(1))?;
    init_file_logger(&config.log_path)?;
    info!("starting in {:?} mode", mode);

    match mode {
        RunMode::Interactive => {
            let mut terminal = setup_terminal()?;
            let result = run_interactive(config, &mut terminal);
            cleanup_terminal()?;
            if let Err(err) = &result {
                error!("interactive session failed: {}", err);
            }
            result?;
        }
        RunMode::Print => {
            run_print(config)?;
        }
        RunMode::Export => {
            let (width, height) = config.size.unwrap_or(DEFAULT_PRINT_SIZE);
            let session = MazeSession::with_grid_size(config, width, height)?;
            write_json_export(&session)?;
            println!("Maze exported to {}", session.config().export_path.display());
        }
    }

    Ok(())
}

fn run_print(config: MazeConfig) -> Result<(), Box<dyn std::error::Error>> {
    let (width, height) = config.size.unwrap_or(DEFAULT_PRINT_SIZE);
    let session = MazeSession::with_grid_size(config, width, height)?;
    let marks = CellMarks::from_session(&session);
    print!("{}", render_maze_to_string(session.grid(), &marks));
    match session.path() {
        PathResult::Found(cells) => println!(
            "Shortest path from {} to {}: {} cells",
            session.start(),
            session.destination(),
            cells.len()
        ),
        PathResult::Unreachable => println!(
            "No path from {} to {}",
            session.start(),
            session.destination()
        ),
    }
    Ok(())
}

fn run_interactive(
    config: MazeConfig,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut area = terminal_area(terminal)?;
    let (surface_width, surface_height) = surface_size(area);
    let mut session = MazeSession::new(config, surface_width, surface_height)?;
    let mut cursor = Coord::default();
    let mut message = None;
    let mut needs_render = true;

    loop {
        if needs_render {
            cursor = clamp_to_grid(&session, cursor);
            render_maze(terminal, &MazeRenderState {
                session: &session,
                cursor: Some(cursor),
                message: message.take(),
            })?;
        }

        let input = handle_input()?;
        needs_render = !matches!(input, Timeout);
        let result = match input {
            Quit => break,
            Maze(event) => session.apply(event),
            MoveCursor(side) => {
                cursor = clamp_to_grid(&session, cursor.step(side));
                Ok(())
            }
            SelectCursor => session.apply(MazeEvent::SelectCell(cursor)),
            Click { column, row } => match cell_at(area, session.grid(), column, row) {
                Some(cell) => {
                    cursor = cell;
                    session.apply(MazeEvent::SelectCell(cell))
                }
                None => Ok(()),
            },
            Resized => {
                area = terminal_area(terminal)?;
                let (width, height) = surface_size(area);
                session.apply(MazeEvent::Resize { width, height })
            }
            Export => {
                match write_json_export(&session) {
                    Ok(()) => message = Some(format!("exported to {}", session.config().export_path.display())),
                    Err(err) => message = Some(format!("export failed: {}", err)),
                }
                Ok(())
            }
            Timeout | Unknown => Ok(()),
        };

        if let Err(err) = result {
            message = Some(err.to_string());
        }
    }

    Ok(())
}

fn terminal_area(terminal: &Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<Rect> {
    let size = terminal.size()?;
    Ok(Rect::new(0, 0, size.width, size.height))
}

fn clamp_to_grid(session: &MazeSession, cell: Coord) -> Coord {
    let grid = session.grid();
    Coord {
        x: cell.x.clamp(0, grid.width() - 1),
        y: cell.y.clamp(0, grid.height() - 1),
    }
}
