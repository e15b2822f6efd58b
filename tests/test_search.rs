#[cfg(test)]
mod tests {
    use rustictactoe::board::Board;
    use rustictactoe::error::EngineError;
    use rustictactoe::evaluator::outcome::{DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
    use rustictactoe::evaluator::{Evaluator, OutcomeEvaluator};
    use rustictactoe::search::{
        AlphaBetaSearchStrategy, EvaluationResult, MinMaxSearchStrategy, SearchEngine,
        SearchStrategy,
    };
    use rustictactoe::state::State;

    fn run_both(board: &Board, player: State, max_depth: u8) -> (EvaluationResult, EvaluationResult) {
        let minmax = MinMaxSearchStrategy::new();
        let alphabeta = AlphaBetaSearchStrategy::new();

        let mut minmax_board = board.clone();
        let minmax_result = minmax
            .run(&mut minmax_board, player, max_depth, None)
            .expect("minmax search failed");

        let mut alphabeta_board = board.clone();
        let alphabeta_result = alphabeta
            .run(&mut alphabeta_board, player, max_depth, None)
            .expect("alphabeta search failed");

        (minmax_result, alphabeta_result)
    }

    #[test]
    fn test_outcome_evaluator_win() {
        let board = Board::from_string("XXXOO----", State::PlayerO);
        let evaluator = OutcomeEvaluator::new();
        assert_eq!(evaluator.evaluate(&board, State::PlayerX), Ok(WIN_SCORE));
        assert_eq!(evaluator.evaluate(&board, State::PlayerO), Ok(LOSS_SCORE));
    }

    #[test]
    fn test_outcome_evaluator_draw() {
        let board = Board::from_string("XXOOOXXXO", State::PlayerX);
        let evaluator = OutcomeEvaluator::new();
        assert_eq!(evaluator.evaluate(&board, State::PlayerX), Ok(DRAW_SCORE));
        assert_eq!(evaluator.evaluate(&board, State::PlayerO), Ok(DRAW_SCORE));
    }

    #[test]
    fn test_outcome_evaluator_non_terminal() {
        let board = Board::from_string("X---O----", State::PlayerX);
        let evaluator = OutcomeEvaluator::new();
        assert_eq!(evaluator.evaluate(&board, State::PlayerX), Ok(DRAW_SCORE));
    }

    #[test]
    fn test_outcome_evaluator_rejects_blank() {
        let board = Board::from_string("XXXOO----", State::PlayerO);
        let evaluator = OutcomeEvaluator::new();
        assert_eq!(
            evaluator.evaluate(&board, State::Blank),
            Err(EngineError::InvalidPlayer)
        );
    }

    #[test]
    fn test_zero_depth_is_rejected() {
        let board = Board::from_string("X---O----", State::PlayerX);

        let minmax = MinMaxSearchStrategy::new();
        let mut minmax_board = board.clone();
        assert_eq!(
            minmax
                .run(&mut minmax_board, State::PlayerX, 0, None)
                .unwrap_err(),
            EngineError::InvalidDepth
        );
        assert_eq!(minmax_board, board, "a failed run must not touch the board");

        let alphabeta = AlphaBetaSearchStrategy::new();
        let mut alphabeta_board = board.clone();
        assert_eq!(
            alphabeta
                .run(&mut alphabeta_board, State::PlayerX, 0, None)
                .unwrap_err(),
            EngineError::InvalidDepth
        );
        assert_eq!(alphabeta_board, board);
    }

    #[test]
    fn test_blank_player_is_rejected() {
        let board = Board::from_string("X---O----", State::PlayerO);

        let minmax = MinMaxSearchStrategy::new();
        let mut minmax_board = board.clone();
        assert_eq!(
            minmax
                .run(&mut minmax_board, State::Blank, 3, None)
                .unwrap_err(),
            EngineError::InvalidPlayer
        );
        assert_eq!(minmax_board, board, "a failed run must not touch the board");

        let alphabeta = AlphaBetaSearchStrategy::new();
        let mut alphabeta_board = board.clone();
        assert_eq!(
            alphabeta
                .run(&mut alphabeta_board, State::Blank, 3, None)
                .unwrap_err(),
            EngineError::InvalidPlayer
        );
        assert_eq!(alphabeta_board, board);
    }

    #[test]
    fn test_terminal_board_applies_no_move() {
        let board = Board::from_string("XXXOO----", State::PlayerO);
        let (minmax_result, alphabeta_result) = run_both(&board, State::PlayerX, 5);

        assert_eq!(minmax_result.best_move, None);
        assert_eq!(minmax_result.score, WIN_SCORE);
        assert_eq!(alphabeta_result.best_move, None);
        assert_eq!(alphabeta_result.score, WIN_SCORE);
    }

    #[test]
    fn test_takes_immediate_win_at_depth_one() {
        // X completes the top row; everything else scores as a draw at
        // this depth.
        let board = Board::from_string("XX-OO----", State::PlayerX);
        let (minmax_result, alphabeta_result) = run_both(&board, State::PlayerX, 1);

        assert_eq!(minmax_result.best_move, Some(2));
        assert_eq!(minmax_result.score, WIN_SCORE);
        assert_eq!(alphabeta_result.best_move, Some(2));
        assert_eq!(alphabeta_result.score, WIN_SCORE);

        let minmax = MinMaxSearchStrategy::new();
        let mut played = board.clone();
        minmax
            .run(&mut played, State::PlayerX, 1, None)
            .expect("minmax search failed");
        assert!(played.is_game_over());
        assert_eq!(played.winner(), State::PlayerX);
    }

    #[test]
    fn test_blocks_opponent_win() {
        // O threatens the top row at cell 2; any other move loses on O's
        // reply, so both engines must block.
        let board = Board::from_string("OO--X---X", State::PlayerX);

        for depth in [2, 9] {
            let (minmax_result, alphabeta_result) = run_both(&board, State::PlayerX, depth);
            assert_eq!(
                minmax_result.best_move,
                Some(2),
                "minmax failed to block at depth {}",
                depth
            );
            assert_eq!(
                alphabeta_result.best_move,
                Some(2),
                "alphabeta failed to block at depth {}",
                depth
            );
        }
    }

    #[test]
    fn test_engines_agree_on_score_at_full_depth() {
        let positions = [
            Board::new(),
            Board::from_string("X--------", State::PlayerO),
            Board::from_string("X---O----", State::PlayerX),
            Board::from_string("XO--X----", State::PlayerO),
            Board::from_string("OO--X---X", State::PlayerX),
        ];

        for board in &positions {
            let (minmax_result, alphabeta_result) = run_both(board, board.current_turn(), 9);
            assert_eq!(
                minmax_result.score, alphabeta_result.score,
                "engines disagree on {:?}",
                board
            );
            assert!(
                alphabeta_result.nodes_searched <= minmax_result.nodes_searched,
                "pruning searched more nodes than exhaustive search: {} > {}",
                alphabeta_result.nodes_searched,
                minmax_result.nodes_searched
            );
        }
    }

    #[test]
    fn test_engines_agree_when_minimizing_at_root() {
        // Search run for the player not on turn: the root layer minimizes.
        let board = Board::from_string("X---O----", State::PlayerX);
        let (minmax_result, alphabeta_result) = run_both(&board, State::PlayerO, 9);
        assert_eq!(minmax_result.score, alphabeta_result.score);
    }

    #[test]
    fn test_empty_board_is_a_draw_at_full_depth() {
        let (minmax_result, alphabeta_result) = run_both(&Board::new(), State::PlayerX, 9);
        assert_eq!(minmax_result.score, DRAW_SCORE);
        assert_eq!(alphabeta_result.score, DRAW_SCORE);
    }

    #[test]
    fn test_self_play_ends_in_draw() {
        // Optimal play from both sides always draws. X uses exhaustive
        // minmax, O uses alpha-beta.
        let minmax = MinMaxSearchStrategy::new();
        let alphabeta = AlphaBetaSearchStrategy::new();

        let mut board = Board::new();
        while !board.is_game_over() {
            let player = board.current_turn();
            let result = if player == State::PlayerX {
                minmax.run(&mut board, player, 9, None)
            } else {
                alphabeta.run(&mut board, player, 9, None)
            };
            result.expect("search failed during self-play");
        }

        assert!(board.is_game_over());
        assert_eq!(board.winner(), State::Blank, "optimal self-play must draw");
    }

    #[test]
    fn test_alphabeta_self_play_ends_in_draw() {
        let alphabeta = AlphaBetaSearchStrategy::new();

        let mut board = Board::new();
        while !board.is_game_over() {
            let player = board.current_turn();
            alphabeta
                .run(&mut board, player, 9, None)
                .expect("search failed during self-play");
        }

        assert_eq!(board.winner(), State::Blank);
    }

    #[test]
    fn test_search_engine_delegates() {
        let engine = SearchEngine::new(Box::new(AlphaBetaSearchStrategy::new()), None);

        let mut board = Board::from_string("XX-OO----", State::PlayerX);
        let result = engine
            .run(&mut board, State::PlayerX, 1)
            .expect("engine run failed");

        assert_eq!(result.best_move, Some(2));
        assert!(board.is_game_over());
        assert_eq!(board.winner(), State::PlayerX);
    }

    #[test]
    fn test_custom_evaluator_is_used() {
        // A constant evaluator makes every leaf equal; the engines must
        // still pick a legal move and report that constant.
        struct ConstantEvaluator;
        impl Evaluator for ConstantEvaluator {
            fn evaluate(&self, _board: &Board, player: State) -> Result<i32, EngineError> {
                if player == State::Blank {
                    return Err(EngineError::InvalidPlayer);
                }
                Ok(3)
            }
        }

        let board = Board::from_string("X---O----", State::PlayerX);
        let minmax = MinMaxSearchStrategy::new();
        let mut minmax_board = board.clone();
        let result = minmax
            .run(&mut minmax_board, State::PlayerX, 2, Some(&ConstantEvaluator))
            .expect("minmax search failed");

        assert_eq!(result.score, 3);
        assert!(result.best_move.is_some());
        assert_eq!(minmax_board.move_count(), board.move_count() + 1);
    }

    #[test]
    fn test_minmax_keeps_last_equal_move_and_alphabeta_keeps_first() {
        // At depth 1 on this quiet position every leaf scores 0, so the
        // choice is decided purely by each engine's tie-break policy.
        let board = Board::from_string("X---O----", State::PlayerX);
        let moves = board.available_moves();
        let (minmax_result, alphabeta_result) = run_both(&board, State::PlayerX, 1);

        assert_eq!(minmax_result.best_move, moves.last().copied());
        assert_eq!(alphabeta_result.best_move, moves.first().copied());
        assert_eq!(minmax_result.score, alphabeta_result.score);
    }
}
