use super::super::board::Board;
use super::super::error::EngineError;
use super::super::evaluator::abst::Evaluator;
use super::super::state::State;

/// Outcome of one search run.
#[derive(Debug, Clone)]
pub struct EvaluationResult {
    /// Score of the chosen line, from the searched player's perspective.
    pub score: i32,
    /// The root move that was applied to the board, if any. None only
    /// when the board was already terminal at the root.
    pub best_move: Option<u8>,
    pub nodes_searched: u64,
}

/// Trait for tree-search strategies.
pub trait SearchStrategy {
    /// Runs the search and applies the chosen move to `board`.
    ///
    /// # Arguments
    /// * `board` - The position to search; mutated in place with the chosen move
    /// * `player` - The player the search maximizes for
    /// * `max_depth` - Maximum depth in plies; must be at least 1
    /// * `evaluator` - Leaf evaluation function; defaults to terminal-outcome scoring
    ///
    /// # Returns
    /// The evaluation result, or `EngineError::InvalidDepth` when
    /// `max_depth` is 0. On any error the board is left unmodified.
    fn run(
        &self,
        board: &mut Board,
        player: State,
        max_depth: u8,
        evaluator: Option<&dyn Evaluator>,
    ) -> Result<EvaluationResult, EngineError>;
}
