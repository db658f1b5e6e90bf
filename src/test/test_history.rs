mod test {
    use crate::config::SessionConfig;
    use crate::core::Direction::*;
    use crate::core::*;
    use crate::test::test_util::GameTestState;

    const LEVEL: &str = r#"
+++++++
+ W   +
+ # * +
+     +
+++++++
"#;

    fn rows() -> Vec<&'static str> {
        LEVEL.trim_matches('\n').lines().collect()
    }

    #[test]
    fn snapshot_is_independent_of_live_state() {
        let game = GameTestState::new(LEVEL);
        let mut live = game.session.state().clone();
        let mut history = MovementHistory::new();
        history.record(&live);

        assert!(step(&mut live, UserAction::Move(Down)).is_success());
        live.grid.set_tile(1, 5, Tile::Wall).unwrap();

        let snapshot = history.undo().unwrap();
        assert_eq!(snapshot.state(), game.session.state());
        assert_ne!(snapshot.state(), &live);
    }

    #[test]
    fn history_is_last_in_first_out() {
        let mut game = GameTestState::new(LEVEL);
        let mut history = MovementHistory::new();
        for dir in [Left, Down, Right] {
            history.record(game.session.state());
            game.assert_move(dir);
        }
        assert_eq!(history.len(), 3);

        let counts: Vec<u32> = std::iter::from_fn(|| history.undo())
            .map(|s| s.state().move_count)
            .collect();
        assert_eq!(counts, vec![2, 1, 0]);
        assert!(history.is_empty());
        assert!(history.undo().is_none());
    }

    #[test]
    fn clear_empties_history() {
        let game = GameTestState::new(LEVEL);
        let mut history = MovementHistory::new();
        history.record(game.session.state());
        history.record(game.session.state());
        history.clear();
        assert!(history.is_empty());
        assert!(history.undo().is_none());
    }

    #[test]
    fn undo_after_move_restores_previous_state() {
        let mut game = GameTestState::new(LEVEL);
        game.assert_moves(&[Left, Down]);
        let before_push = game.session.state().clone();

        game.assert_move(Right);
        game.assert_matches(r#"
+++++++
+     +
+ W#* +
+     +
+++++++
"#);

        assert!(game.session.undo());
        assert_eq!(game.session.state(), &before_push);
        assert_eq!(game.session.player(), Vec2 { i: 2, j: 1 });
        assert_eq!(game.session.move_count(), 2);
    }

    #[test]
    fn undo_on_empty_history_is_a_no_op() {
        let mut game = GameTestState::new(LEVEL);
        let original = game.session.state().clone();

        assert!(!game.session.undo());
        assert_eq!(game.session.state(), &original);
    }

    #[test]
    fn rejected_moves_are_recorded_by_default() {
        let mut game = GameTestState::new(LEVEL);
        game.assert_rejected(Up);
        game.assert_rejected(Up);
        assert_eq!(game.session.history().len(), 2);

        let original = game.session.state().clone();
        assert!(game.session.undo());
        assert_eq!(game.session.state(), &original);
        assert_eq!(game.session.history().len(), 1);
    }

    #[test]
    fn rejected_moves_skip_history_when_configured() {
        let config = SessionConfig { record_rejected_moves: false };
        let mut game = GameTestState::with_config(&rows(), config);
        game.assert_rejected(Up);
        assert!(game.session.history().is_empty());

        game.assert_move(Left);
        game.assert_rejected(Left);
        assert_eq!(game.session.history().len(), 1);

        assert!(game.session.undo());
        assert_eq!(game.session.player(), Vec2 { i: 1, j: 2 });
        assert_eq!(game.session.move_count(), 0);
        assert!(!game.session.undo());
    }

    #[test]
    fn undo_walks_back_to_the_start() {
        let mut game = GameTestState::new(LEVEL);
        let start = game.session.state().clone();
        game.assert_moves(&[Left, Down, Right, Right]);
        assert!(game.session.is_completed());

        while game.session.undo() {}

        assert_eq!(game.session.state(), &start);
        assert!(!game.session.is_completed());
    }
}
