use super::super::board::Board;
use super::super::error::EngineError;
use super::super::evaluator::abst::Evaluator;
use super::super::evaluator::outcome::OutcomeEvaluator;
use super::super::state::State;
use super::search_strategy::{EvaluationResult, SearchStrategy};

/// Exhaustive MinMax search.
///
/// Visits every node of the game tree down to `max_depth`. When several
/// moves share the best score, the last one in board enumeration order
/// is kept; AlphaBetaSearchStrategy keeps the first, so the two can pick
/// different moves of equal value on the same position.
#[derive(Debug, Clone, Default)]
pub struct MinMaxSearchStrategy;

impl MinMaxSearchStrategy {
    pub fn new() -> Self {
        Self
    }

    fn minmax(
        &self,
        player: State,
        board: &mut Board,
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
            self.get_max(player, board, ply + 1, max_depth, nodes, evaluator)?
        } else {
            self.get_min(player, board, ply + 1, max_depth, nodes, evaluator)?
        };
        Ok(result.0)
    }

    /// Maximizing step: keeps the move with the highest score, applies it
    /// to `board` and returns it along with the score. `>=` keeps the last
    /// of equally scored moves.
    fn get_max(
        &self,
        player: State,
        board: &mut Board,
        ply: u8,
        max_depth: u8,
        nodes: &mut u64,
        evaluator: &dyn Evaluator,
    ) -> Result<(i32, Option<u8>), EngineError> {
        let mut best_score = i32::MIN;
        let mut best_move: Option<u8> = None;

        for cell in board.available_moves() {
            let mut modified_board = board.clone();
            modified_board.apply_move(cell);

            let score = self.minmax(player, &mut modified_board, ply, max_depth, nodes, evaluator)?;

            if score >= best_score {
                best_score = score;
                best_move = Some(cell);
            }
        }

        if let Some(cell) = best_move {
            board.apply_move(cell);
        }
        Ok((best_score, best_move))
    }

    /// Minimizing step, symmetric to get_max. `<=` keeps the last of
    /// equally scored moves.
    fn get_min(
        &self,
        player: State,
        board: &mut Board,
        ply: u8,
        max_depth: u8,
        nodes: &mut u64,
        evaluator: &dyn Evaluator,
    ) -> Result<(i32, Option<u8>), EngineError> {
        let mut best_score = i32::MAX;
        let mut best_move: Option<u8> = None;

        for cell in board.available_moves() {
            let mut modified_board = board.clone();
            modified_board.apply_move(cell);

            let score = self.minmax(player, &mut modified_board, ply, max_depth, nodes, evaluator)?;

            if score <= best_score {
                best_score = score;
                best_move = Some(cell);
            }
        }

        if let Some(cell) = best_move {
            board.apply_move(cell);
        }
        Ok((best_score, best_move))
    }
}

impl SearchStrategy for MinMaxSearchStrategy {
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
            self.get_max(player, board, 1, max_depth, &mut nodes, evaluator)?
        } else {
            self.get_min(player, board, 1, max_depth, &mut nodes, evaluator)?
        };

        Ok(EvaluationResult {
            score,
            best_move,
            nodes_searched: nodes,
        })
    }
}
