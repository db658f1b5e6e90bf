mod test {
    use crate::config::SessionConfig;
    use crate::core::Direction::*;
    use crate::core::Direction;
    use crate::error::LevelError;
    use crate::level::LevelSet;
    use crate::session::{GameEvent, GameSession, LevelProgress};
    use crate::test::test_util::level_text;

    const SOLVE_FIRST: [Direction; 4] = [Left, Down, Right, Right];

    fn campaign() -> (LevelSet, GameSession) {
        let levels = LevelSet::from_texts([
            level_text(&["+++++++", "+ W   +", "+ # * +", "+     +", "+++++++"]),
            level_text(&["W#*"]),
        ]);
        let session = GameSession::new_campaign(&levels, SessionConfig::default()).unwrap();
        (levels, session)
    }

    fn play(session: &mut GameSession, moves: &[Direction]) -> Vec<GameEvent> {
        moves
            .iter()
            .filter_map(|&dir| session.apply_move(dir).event)
            .collect()
    }

    #[test]
    fn completing_a_level_emits_one_event_and_scores_moves() {
        let (_, mut session) = campaign();
        assert_eq!(session.context().level_index(), 1);

        let events = play(&mut session, &SOLVE_FIRST);

        assert_eq!(events, vec![GameEvent::LevelCompleted { level_index: 1, moves: 4 }]);
        assert!(session.is_completed());
        assert_eq!(session.context().total_score(), 4);

        // moving around a solved board does not signal again
        assert!(play(&mut session, &[Up, Down, Left]).is_empty());
        assert_eq!(session.context().total_score(), 4);
    }

    #[test]
    fn re_entering_completion_signals_again_without_rescoring() {
        let (_, mut session) = campaign();
        play(&mut session, &SOLVE_FIRST);

        assert!(session.undo());
        assert!(!session.is_completed());

        let report = session.apply_move(Right);
        assert_eq!(report.event, Some(GameEvent::LevelCompleted { level_index: 1, moves: 4 }));
        assert_eq!(session.context().total_score(), 4);
    }

    #[test]
    fn advance_walks_through_levels_then_finishes() {
        let (levels, mut session) = campaign();
        play(&mut session, &SOLVE_FIRST);

        assert_eq!(session.advance_level(&levels), Ok(LevelProgress::Loaded(2)));
        assert_eq!(session.context().level_index(), 2);
        assert_eq!(session.move_count(), 0);
        assert!(session.history().is_empty());
        assert!(!session.is_completed());

        assert!(session.attempt_move(Right));
        assert_eq!(session.context().total_score(), 5);

        assert_eq!(session.advance_level(&levels), Ok(LevelProgress::Finished));
        assert_eq!(session.context().level_index(), 2);
    }

    #[test]
    fn restart_level_resets_moves_and_history_but_keeps_score() {
        let (levels, mut session) = campaign();
        play(&mut session, &SOLVE_FIRST);
        session.advance_level(&levels).unwrap();
        session.attempt_move(Right);
        let score = session.context().total_score();

        session.restart_level(&levels).unwrap();

        assert_eq!(session.context().level_index(), 2);
        assert_eq!(session.move_count(), 0);
        assert!(session.history().is_empty());
        assert!(!session.is_completed());
        assert_eq!(session.context().total_score(), score);
    }

    #[test]
    fn restart_campaign_resets_context() {
        let (levels, mut session) = campaign();
        play(&mut session, &SOLVE_FIRST);
        session.advance_level(&levels).unwrap();

        session.restart_campaign(&levels).unwrap();

        assert_eq!(session.context().level_index(), 1);
        assert_eq!(session.context().total_score(), 0);
        assert_eq!(session.move_count(), 0);
    }

    #[test]
    fn rejected_level_leaves_session_untouched() {
        let (_, mut session) = campaign();
        play(&mut session, &[Left, Down]);
        let state = session.state().clone();
        let depth = session.history().len();

        let err = session.load_level(&level_text(&["W##*"])).unwrap_err();

        assert!(matches!(err, LevelError::Invalid(_)));
        assert_eq!(session.state(), &state);
        assert_eq!(session.history().len(), depth);

        assert!(matches!(
            session.load_level("broken"),
            Err(LevelError::Format { line: 2, .. })
        ));
        assert_eq!(session.state(), &state);
    }

    #[test]
    fn unknown_level_index_is_an_error() {
        let (levels, mut session) = campaign();
        assert_eq!(
            session.start_level(&levels, 7),
            Err(LevelError::UnknownLevel { index: 7, available: 2 })
        );
        assert_eq!(session.context().level_index(), 1);
    }

    #[test]
    fn new_game_reports_level_name() {
        let session = GameSession::new_game("Corridor\n1 3\nW#*\n", SessionConfig::default()).unwrap();
        assert_eq!(session.level_name(), "Corridor");
        assert_eq!(session.move_count(), 0);
        assert!(session.history().is_empty());
    }

    #[test]
    fn built_in_campaign_first_level_is_solvable() {
        let levels = LevelSet::built_in();
        let mut session = GameSession::new_campaign(&levels, SessionConfig::default()).unwrap();
        let events = play(&mut session, &SOLVE_FIRST);
        assert_eq!(events.len(), 1);
        assert_eq!(session.advance_level(&levels), Ok(LevelProgress::Loaded(2)));
        assert_eq!(session.level_name(), "Twin Crates");
    }
}
