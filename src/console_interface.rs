use crate::core::{Coord, Grid, MazeResult, PathResult, Side};
use crate::models::{CellMarks, MazeRenderState};
use crate::session::MazeEvent;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

const START: char = 'S';
const DESTINATION: char = 'D';
const PATH: char = '*';

pub struct ParsedMaze {
    pub grid: Grid,
    pub start: Option<Coord>,
    pub destination: Option<Coord>,
}

/// Reads a maze drawn in the format produced by `render_maze_to_string`.
///
/// Only interior walls and the `S`/`D` markers are read; the outer frame is
/// implied. Blank lines around the drawing are ignored.
pub fn parse_maze(s: &str) -> MazeResult<ParsedMaze> {
    let lines: Vec<Vec<char>> = s
        .trim_matches('\n')
        .lines()
        .map(|line| line.chars().collect())
        .collect();
    let max_width = lines.iter().map(|line| line.len()).max().unwrap_or(0);
    let width = (max_width as i32 - 1) / 2;
    let height = (lines.len() as i32 - 1) / 2;

    let mut grid = Grid::new(width, height)?;
    let mut start = None;
    let mut destination = None;
    let char_at = |row: i32, col: i32| -> char {
        lines
            .get(row as usize)
            .and_then(|line| line.get(col as usize))
            .copied()
            .unwrap_or(' ')
    };

    for y in 0..height {
        for x in 0..width {
            let cell = Coord { x, y };
            match char_at(2 * y + 1, 2 * x + 1) {
                START => start = Some(cell),
                DESTINATION => destination = Some(cell),
                _ => {}
            }
            if x + 1 < width && char_at(2 * y + 1, 2 * x + 2) == '|' {
                grid.add_wall(cell, Side::Right)?;
            }
            if y + 1 < height && char_at(2 * y + 2, 2 * x + 1) == '-' {
                grid.add_wall(cell, Side::Down)?;
            }
        }
    }

    Ok(ParsedMaze { grid, start, destination })
}

/// Draws the grid as `(2w+1) x (2h+1)` characters: `+` corners, `-` and `|`
/// walls, and one glyph per cell.
pub fn render_maze_to_string(grid: &Grid, marks: &CellMarks) -> String {
    let mut result = String::new();
    for y in 0..=grid.height() {
        for x in 0..grid.width() {
            result.push('+');
            let closed = y == 0
                || y == grid.height()
                || grid.walls(&Coord { x, y: y - 1 }).is_some_and(|w| w.down);
            result.push(if closed { '-' } else { ' ' });
        }
        result.push('+');
        result.push('\n');

        if y == grid.height() {
            break;
        }
        for x in 0..grid.width() {
            let closed = x == 0 || grid.walls(&Coord { x: x - 1, y }).is_some_and(|w| w.right);
            result.push(if closed { '|' } else { ' ' });
            result.push(cell_glyph(&Coord { x, y }, marks));
        }
        result.push('|');
        result.push('\n');
    }
    result
}

fn cell_glyph(cell: &Coord, marks: &CellMarks) -> char {
    if marks.start == Some(*cell) {
        START
    } else if marks.destination == Some(*cell) {
        DESTINATION
    } else if marks.path.is_some_and(|path| path.contains(cell)) {
        PATH
    } else {
        ' '
    }
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(
        io::stdout(),
        crossterm::terminal::EnterAlternateScreen,
        crossterm::event::EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(
        io::stdout(),
        crossterm::event::DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    )?;
    Ok(())
}

/// Splits the terminal into the maze panel and the instruction panel.
pub fn layout_chunks(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(4)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Area inside the maze panel border, where the drawing starts.
pub fn maze_area(area: Rect) -> Rect {
    let (maze_chunk, _) = layout_chunks(area);
    Block::default().borders(Borders::ALL).inner(maze_chunk)
}

/// Logical surface size handed to the session. One unit per terminal cell,
/// less the closing frame column and row.
pub fn surface_size(area: Rect) -> (i32, i32) {
    let inner = maze_area(area);
    (inner.width as i32 - 1, inner.height as i32 - 1)
}

/// Maps a terminal position to the maze cell drawn there, if any.
pub fn cell_at(area: Rect, grid: &Grid, column: u16, row: u16) -> Option<Coord> {
    let inner = maze_area(area);
    if column < inner.x || row < inner.y {
        return None;
    }
    let cell = Coord {
        x: ((column - inner.x).saturating_sub(1) / 2) as i32,
        y: ((row - inner.y).saturating_sub(1) / 2) as i32,
    };
    grid.contains(&cell).then_some(cell)
}

pub fn render_maze(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &MazeRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let (maze_chunk, instructions_chunk) = layout_chunks(f.area());

        let session = state.session;
        let marks = CellMarks::from_session(session);
        let maze_text = render_maze_to_string(session.grid(), &marks);
        let maze_paragraph = Paragraph::new(style_maze_lines(&maze_text, state.cursor))
            .block(Block::default().borders(Borders::ALL).title("Maze"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Left);
        f.render_widget(maze_paragraph, maze_chunk);

        let controls = "r regenerate | s show path | +/- cell size | arrows move | enter/click select | e export | q quit";
        let status = status_line(state);
        let instruction_paragraph = Paragraph::new(vec![Line::from(controls), Line::from(status)])
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, instructions_chunk);
    })?;
    Ok(())
}

pub fn status_line(state: &MazeRenderState) -> String {
    let session = state.session;
    let grid = session.grid();
    let path = match session.path() {
        PathResult::Found(cells) => format!("path {} cells", cells.len()),
        PathResult::Unreachable => "no path".to_string(),
    };
    let seed = match session.seed() {
        Some(seed) => format!("seed {}", seed),
        None => "random seed".to_string(),
    };
    let mut status = format!(
        "{}x{} | cell size {} | {} -> {} {} | {} regions | {}",
        grid.width(),
        grid.height(),
        session.cell_size(),
        session.start(),
        session.destination(),
        path,
        session.region_count(),
        seed
    );
    if !session.show_path() {
        status.push_str(" | path hidden");
    }
    if session.awaiting_destination() {
        status.push_str(" | select destination");
    }
    if let Some(message) = &state.message {
        status.push_str(" | ");
        status.push_str(message);
    }
    status
}

fn style_maze_lines(text: &str, cursor: Option<Coord>) -> Vec<Line<'static>> {
    let cursor_position = cursor.map(|c| ((2 * c.y + 1) as usize, (2 * c.x + 1) as usize));
    text.lines()
        .enumerate()
        .map(|(row, line)| {
            let spans: Vec<Span> = line
                .chars()
                .enumerate()
                .map(|(col, ch)| {
                    let mut style = match ch {
                        START | DESTINATION | PATH => Style::default().fg(Color::Red),
                        _ => Style::default(),
                    };
                    if cursor_position == Some((row, col)) {
                        style = style.bg(Color::Cyan);
                    }
                    Span::styled(ch.to_string(), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

pub enum ConsoleInput {
    Maze(MazeEvent),
    MoveCursor(Side),
    SelectCursor,
    Click { column: u16, row: u16 },
    Resized,
    Export,
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        return Ok(match event::read()? {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => map_key(code),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Up(MouseButton::Left),
                column,
                row,
                ..
            }) => ConsoleInput::Click { column, row },
            Event::Resize(_, _) => ConsoleInput::Resized,
            _ => ConsoleInput::Unknown,
        });
    }
    Ok(ConsoleInput::Timeout)
}

pub fn map_key(code: KeyCode) -> ConsoleInput {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::Maze(MazeEvent::Regenerate),
        KeyCode::Char('s') | KeyCode::Char('S') => ConsoleInput::Maze(MazeEvent::TogglePath),
        KeyCode::Char('+') | KeyCode::Char('=') => ConsoleInput::Maze(MazeEvent::ChangeCellSize(1)),
        KeyCode::Char('-') | KeyCode::Char('_') => ConsoleInput::Maze(MazeEvent::ChangeCellSize(-1)),
        KeyCode::Char('e') | KeyCode::Char('E') => ConsoleInput::Export,
        KeyCode::Enter | KeyCode::Char(' ') => ConsoleInput::SelectCursor,
        KeyCode::Up => ConsoleInput::MoveCursor(Side::Up),
        KeyCode::Down => ConsoleInput::MoveCursor(Side::Down),
        KeyCode::Left => ConsoleInput::MoveCursor(Side::Left),
        KeyCode::Right => ConsoleInput::MoveCursor(Side::Right),
        _ => ConsoleInput::Unknown,
    }
}
