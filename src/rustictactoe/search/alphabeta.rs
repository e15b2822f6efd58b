use super::super::board::Board;
use super::super::error::EngineError;
use super::super::evaluator::abst::Evaluator;
use super::super::evaluator::outcome::OutcomeEvaluator;
use super::super::state::State;
use super::search_strategy::{EvaluationResult, SearchStrategy};

/// Alpha-beta pruning search.
///
/// Same contract as MinMaxSearchStrategy, but carries an [alpha, beta]
/// window through the recursion and stops scanning siblings once
/// alpha >= beta. Ties keep the first move in enumeration order (strict
/// comparison), where MinMax keeps the last; both always agree on the
/// resulting score.
#[derive(Debug, Clone, Default)]
pub struct AlphaBetaSearchStrategy;

impl AlphaBetaSearchStrategy {
    pub fn new() -> Self {
        Self
    }

    #[allow(clippy::too_many_arguments)]
    fn alphabeta(
        &self,
        player: State,
        board: &mut Board,
        alpha: i32,
        beta: i32,
        ply: u8,
        max_depth: u8,
        nodes: &mut u64,
        evaluator: &dyn Evaluator,
    ) -> Result<i32, EngineError> {
        *nodes += 1;

        if ply == max_depth || board.is_game_over() {
            return evaluator.evaluate(board, player);
        }

        let result = if board.current_turn() == player {
            self.get_max(player, board, alpha, beta, ply + 1, max_depth, nodes, evaluator)?
        } else {
            self.get_min(player, board, alpha, beta, ply + 1, max_depth, nodes, evaluator)?
        };
        Ok(result.0)
    }

    /// Maximizing step: raises alpha, pruning once it meets beta. The
    /// strict `>` keeps the first of equally scored moves.
    #[allow(clippy::too_many_arguments)]
    fn get_max(
        &self,
        player: State,
        board: &mut Board,
        mut alpha: i32,
        beta: i32,
        ply: u8,
        max_depth: u8,
        nodes: &mut u64,
        evaluator: &dyn Evaluator,
    ) -> Result<(i32, Option<u8>), EngineError> {
        let mut best_move: Option<u8> = None;

        for cell in board.available_moves() {
            let mut modified_board = board.clone();
            modified_board.apply_move(cell);

            let score = self.alphabeta(
                player,
                &mut modified_board,
                alpha,
                beta,
                ply,
                max_depth,
                nodes,
                evaluator,
            )?;

            if score > alpha {
                alpha = score;
                best_move = Some(cell);
            }

            // Pruning: the minimizer upstream already has a line at least
            // this good, so the remaining siblings cannot matter.
            if alpha >= beta {
                break;
            }
        }

        if let Some(cell) = best_move {
            board.apply_move(cell);
        }
        Ok((alpha, best_move))
    }

    /// Minimizing step, symmetric to get_max: lowers beta, strict `<`
    /// keeps the first of equally scored moves.
    #[allow(clippy::too_many_arguments)]
    fn get_min(
        &self,
        player: State,
        board: &mut Board,
        alpha: i32,
        mut beta: i32,
        ply: u8,
        max_depth: u8,
        nodes: &mut u64,
        evaluator: &dyn Evaluator,
    ) -> Result<(i32, Option<u8>), EngineError> {
        let mut best_move: Option<u8> = None;

        for cell in board.available_moves() {
            let mut modified_board = board.clone();
            modified_board.apply_move(cell);

            let score = self.alphabeta(
                player,
                &mut modified_board,
                alpha,
                beta,
                ply,
                max_depth,
                nodes,
                evaluator,
            )?;

            if score < beta {
                beta = score;
                best_move = Some(cell);
            }

            if alpha >= beta {
                break;
            }
        }

        if let Some(cell) = best_move {
            board.apply_move(cell);
        }
        Ok((beta, best_move))
    }
}

impl SearchStrategy for AlphaBetaSearchStrategy {
    fn run(
        &self,
        board: &mut Board,
        player: State,
        max_depth: u8,
        evaluator: Option<&dyn Evaluator>,
    ) -> Result<EvaluationResult, EngineError> {
        if max_depth < 1 {
            return Err(EngineError::InvalidDepth);
        }

        let default_evaluator = OutcomeEvaluator::new();
        let evaluator = evaluator.unwrap_or(&default_evaluator as &dyn Evaluator);

        if board.is_game_over() {
            return Ok(EvaluationResult {
                score: evaluator.evaluate(board, player)?,
                best_move: None,
                nodes_searched: 1,
            });
        }

        let mut nodes = 0u64;
        let (score, best_move) = if board.current_turn() == player {
            self.get_max(
                player,
                board,
                i32::MIN,
                i32::MAX,
                1,
                max_depth,
                &mut nodes,
                evaluator,
            )?
        } else {
            self.get_min(
                player,
                board,
                i32::MIN,
                i32::MAX,
                1,
                max_depth,
                &mut nodes,
                evaluator,
            )?
        };

        Ok(EvaluationResult {
            score,
            best_move,
            nodes_searched: nodes,
        })
    }
}
