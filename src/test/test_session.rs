mod test {
    use crate::config::MazeConfig;
    use crate::core::*;
    use crate::session::{grid_dimensions, MazeEvent, MazeSession};

    fn open_config() -> MazeConfig {
        MazeConfig {
            seed: Some(1),
            wall_attempts_per_cell: 0.0,
            ..MazeConfig::default()
        }
    }

    fn open_session(width: i32, height: i32) -> MazeSession {
        MazeSession::with_grid_size(open_config(), width, height).unwrap()
    }

    #[test]
    fn grid_dimensions_fit_surface() {
        assert_eq!(grid_dimensions(100, 50, 10, 5), (9, 4));
        assert_eq!(grid_dimensions(8, 6, 2, 0), (4, 3));
        assert_eq!(grid_dimensions(9, 7, 2, 0), (4, 3));
    }

    #[test]
    fn grid_dimensions_never_drop_below_one() {
        assert_eq!(grid_dimensions(3, 3, 5, 0), (1, 1));
        assert_eq!(grid_dimensions(0, -4, 2, 1), (1, 1));
    }

    #[test]
    fn new_session_requests_opposite_corners() {
        let session = open_session(4, 3);
        assert_eq!((session.grid().width(), session.grid().height()), (4, 3));
        assert_eq!(session.start(), Coord::new(0, 0));
        assert_eq!(session.destination(), Coord::new(3, 2));
        assert_eq!(session.path().len(), 6);
        assert!(session.show_path());
        assert!(!session.awaiting_destination());
        assert_eq!(session.region_count(), 1);
    }

    #[test]
    fn fixed_size_must_be_positive() {
        let result = MazeSession::with_grid_size(open_config(), 0, 2);
        assert!(matches!(result, Err(MazeError::InvalidDimension { width: 0, height: 2 })));
    }

    #[test]
    fn select_cell_picks_start_then_destination() {
        let mut session = open_session(4, 3);

        session.apply(MazeEvent::SelectCell(Coord::new(1, 1))).unwrap();
        assert_eq!(session.start(), Coord::new(1, 1));
        assert_eq!(session.destination(), Coord::new(3, 2));
        assert!(session.awaiting_destination());
        assert_eq!(session.path().len(), 4);

        session.apply(MazeEvent::SelectCell(Coord::new(0, 0))).unwrap();
        assert_eq!(session.start(), Coord::new(1, 1));
        assert_eq!(session.destination(), Coord::new(0, 0));
        assert!(!session.awaiting_destination());
        assert_eq!(session.path().cells().unwrap().first(), Some(&Coord::new(1, 1)));
        assert_eq!(session.path().cells().unwrap().last(), Some(&Coord::new(0, 0)));
        assert_eq!(session.path().len(), 3);
    }

    #[test]
    fn set_start_and_destination_recompute_path() {
        let mut session = open_session(5, 5);
        session.apply(MazeEvent::SetStart(Coord::new(2, 2))).unwrap();
        assert_eq!(session.path().len(), 5);

        session.apply(MazeEvent::SetDestination(Coord::new(2, 2))).unwrap();
        assert_eq!(session.path(), &PathResult::Found(vec![Coord::new(2, 2)]));
    }

    #[test]
    fn out_of_bounds_selection_leaves_state_unchanged() {
        let mut session = open_session(3, 3);
        let path_before = session.path().clone();

        let result = session.apply(MazeEvent::SetDestination(Coord::new(3, 3)));
        assert_eq!(result, Err(MazeError::OutOfBounds { cell: Coord::new(3, 3), width: 3, height: 3 }));
        assert_eq!(session.destination(), Coord::new(2, 2));
        assert_eq!(session.path(), &path_before);

        assert!(session.apply(MazeEvent::SelectCell(Coord::new(-1, 0))).is_err());
        assert!(!session.awaiting_destination());
        assert_eq!(session.start(), Coord::new(0, 0));
    }

    #[test]
    fn toggle_path_only_flips_visibility() {
        let mut session = open_session(3, 3);
        let path_before = session.path().clone();

        session.apply(MazeEvent::TogglePath).unwrap();
        assert!(!session.show_path());
        assert_eq!(session.path(), &path_before);

        session.apply(MazeEvent::TogglePath).unwrap();
        assert!(session.show_path());
    }

    #[test]
    fn regenerate_resets_request() {
        let mut session = open_session(4, 4);
        session.apply(MazeEvent::SetDestination(Coord::new(1, 2))).unwrap();
        session.apply(MazeEvent::SelectCell(Coord::new(2, 2))).unwrap();
        assert!(session.awaiting_destination());

        session.apply(MazeEvent::Regenerate).unwrap();
        assert_eq!(session.start(), Coord::new(0, 0));
        assert_eq!(session.destination(), Coord::new(3, 3));
        assert!(!session.awaiting_destination());
        assert_eq!(session.path().len(), 7);
    }

    #[test]
    fn cell_size_changes_grid_and_respects_minimum() {
        let mut session = open_session(4, 3);

        session.apply(MazeEvent::ChangeCellSize(-5)).unwrap();
        assert_eq!(session.cell_size(), 2);
        assert_eq!((session.grid().width(), session.grid().height()), (4, 3));

        session.apply(MazeEvent::ChangeCellSize(2)).unwrap();
        assert_eq!(session.cell_size(), 4);
        assert_eq!((session.grid().width(), session.grid().height()), (2, 1));
        assert_eq!(session.destination(), Coord::new(1, 0));
    }

    #[test]
    fn resize_regenerates_for_new_surface() {
        let mut session = open_session(4, 3);

        session.apply(MazeEvent::Resize { width: 20, height: 10 }).unwrap();
        assert_eq!((session.grid().width(), session.grid().height()), (10, 5));
        assert_eq!(session.destination(), Coord::new(9, 4));

        session.apply(MazeEvent::Resize { width: 0, height: -3 }).unwrap();
        assert_eq!((session.grid().width(), session.grid().height()), (1, 1));
        assert_eq!(session.path(), &PathResult::Found(vec![Coord::new(0, 0)]));
    }

    #[test]
    fn same_seed_sessions_match() {
        let config = MazeConfig {
            seed: Some(99),
            ..MazeConfig::default()
        };
        let mut first = MazeSession::with_grid_size(config.clone(), 15, 10).unwrap();
        let mut second = MazeSession::with_grid_size(config, 15, 10).unwrap();
        assert_eq!(first.grid(), second.grid());
        assert_eq!(first.path(), second.path());

        first.apply(MazeEvent::Regenerate).unwrap();
        second.apply(MazeEvent::Regenerate).unwrap();
        assert_eq!(first.grid(), second.grid());
    }

    #[test]
    fn dense_generation_reports_unreachable() {
        let config = MazeConfig {
            seed: Some(3),
            wall_attempts_per_cell: 50.0,
            ..MazeConfig::default()
        };
        let session = MazeSession::with_grid_size(config, 2, 1).unwrap();
        assert_eq!(session.path(), &PathResult::Unreachable);
        assert_eq!(session.region_count(), 2);
    }

    #[test]
    fn oversized_grid_request_is_rejected() {
        assert!(matches!(
            MazeSession::with_grid_size(open_config(), 2_000_000_000, 1),
            Err(MazeError::InvalidDimension { width: 2_000_000_000, height: 1 })
        ));
        assert!(matches!(
            MazeSession::with_grid_size(open_config(), 1, i32::MAX),
            Err(MazeError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn huge_margin_and_cell_size_clamp_to_one_cell() {
        assert_eq!(grid_dimensions(100, 50, 2, i32::MAX), (1, 1));

        let mut session = open_session(4, 3);
        session.apply(MazeEvent::ChangeCellSize(i32::MAX)).unwrap();
        assert_eq!(session.cell_size(), i32::MAX);
        assert_eq!((session.grid().width(), session.grid().height()), (1, 1));
    }
}
