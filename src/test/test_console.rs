mod test {
    use crossterm::event::KeyCode;
    use ratatui::layout::Rect;
    use crate::config::MazeConfig;
    use crate::console_interface::*;
    use crate::core::*;
    use crate::models::{CellMarks, MazeRenderState};
    use crate::session::{MazeEvent, MazeSession};
    use crate::test::test_util::MazeTestState;

    #[test]
    fn renders_open_grid_with_frame_only() {
        let grid = Grid::new(2, 1).unwrap();
        let actual = render_maze_to_string(&grid, &CellMarks::default());
        assert_eq_text!("+-+-+\n|   |\n+-+-+\n", actual.as_str());
    }

    #[test]
    fn renders_interior_walls_once() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.add_wall(Coord::new(0, 0), Side::Right).unwrap();
        grid.add_wall(Coord::new(1, 1), Side::Up).unwrap();
        let marks = CellMarks {
            start: Some(Coord::new(0, 1)),
            destination: Some(Coord::new(1, 0)),
            path: None,
        };
        let actual = render_maze_to_string(&grid, &marks);
        assert_eq_text!(r#"
+-+-+
| |D|
+ +-+
|S  |
+-+-+
"#.trim_start_matches('\n'), actual.as_str());
    }

    #[test]
    fn parsed_maze_renders_back_unchanged() {
        let level = r#"
+-+-+-+-+
|S  |   |
+-+ + +-+
|   |   |
+ +-+ + +
|      D|
+-+-+-+-+
"#;
        let game = MazeTestState::new(level);
        assert_eq!(game.start, Coord::new(0, 0));
        assert_eq!(game.destination, Coord::new(3, 2));
        assert_eq!(game.grid.wall_count(), 5);
        game.assert_matches(level);
    }

    #[test]
    fn parse_rejects_empty_drawing() {
        assert!(matches!(parse_maze(""), Err(MazeError::InvalidDimension { .. })));
    }

    #[test]
    fn hidden_path_is_not_drawn() {
        let config = MazeConfig {
            seed: Some(1),
            wall_attempts_per_cell: 0.0,
            ..MazeConfig::default()
        };
        let mut session = MazeSession::with_grid_size(config, 3, 1).unwrap();
        let shown = render_maze_to_string(session.grid(), &CellMarks::from_session(&session));
        assert_eq_text!("+-+-+-+\n|S * D|\n+-+-+-+\n", shown.as_str());

        session.apply(MazeEvent::TogglePath).unwrap();
        let hidden = render_maze_to_string(session.grid(), &CellMarks::from_session(&session));
        assert_eq_text!("+-+-+-+\n|S   D|\n+-+-+-+\n", hidden.as_str());
    }

    #[test]
    fn terminal_positions_map_to_cells() {
        let area = Rect::new(0, 0, 40, 20);
        let grid = Grid::new(10, 5).unwrap();

        assert_eq!(surface_size(area), (37, 13));
        assert_eq!(cell_at(area, &grid, 2, 2), Some(Coord::new(0, 0)));
        assert_eq!(cell_at(area, &grid, 4, 2), Some(Coord::new(1, 0)));
        assert_eq!(cell_at(area, &grid, 6, 6), Some(Coord::new(2, 2)));
        assert_eq!(cell_at(area, &grid, 0, 0), None);
        assert_eq!(cell_at(area, &grid, 30, 2), None);
    }

    #[test]
    fn status_line_reports_unreachable() {
        let config = MazeConfig {
            seed: Some(3),
            wall_attempts_per_cell: 50.0,
            ..MazeConfig::default()
        };
        let session = MazeSession::with_grid_size(config, 2, 1).unwrap();
        let status = status_line(&MazeRenderState {
            session: &session,
            cursor: None,
            message: None,
        });
        assert!(status.contains("no path"), "{}", status);
        assert!(status.contains("seed 3"), "{}", status);
        assert!(status.contains("2 regions"), "{}", status);
    }

    #[test]
    fn keys_map_to_maze_events() {
        assert!(matches!(map_key(KeyCode::Char('r')), ConsoleInput::Maze(MazeEvent::Regenerate)));
        assert!(matches!(map_key(KeyCode::Char('s')), ConsoleInput::Maze(MazeEvent::TogglePath)));
        assert!(matches!(map_key(KeyCode::Char('+')), ConsoleInput::Maze(MazeEvent::ChangeCellSize(1))));
        assert!(matches!(map_key(KeyCode::Char('-')), ConsoleInput::Maze(MazeEvent::ChangeCellSize(-1))));
        assert!(matches!(map_key(KeyCode::Up), ConsoleInput::MoveCursor(Side::Up)));
        assert!(matches!(map_key(KeyCode::Enter), ConsoleInput::SelectCursor));
        assert!(matches!(map_key(KeyCode::Esc), ConsoleInput::Quit));
        assert!(matches!(map_key(KeyCode::Char('z')), ConsoleInput::Unknown));
    }

    #[test]
    fn only_arrow_keys_move_the_cursor() {
        assert!(matches!(map_key(KeyCode::Down), ConsoleInput::MoveCursor(Side::Down)));
        assert!(matches!(map_key(KeyCode::Left), ConsoleInput::MoveCursor(Side::Left)));
        assert!(matches!(map_key(KeyCode::Right), ConsoleInput::MoveCursor(Side::Right)));
        assert!(matches!(map_key(KeyCode::Char('w')), ConsoleInput::Unknown));
        assert!(matches!(map_key(KeyCode::Char('a')), ConsoleInput::Unknown));
        assert!(matches!(map_key(KeyCode::Char('d')), ConsoleInput::Unknown));
    }
}
