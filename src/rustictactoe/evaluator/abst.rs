use super::super::board::Board;
use super::super::error::EngineError;
use super::super::state::State;

/// Trait for evaluation functions.
/// Each evaluation function can be used by the search strategies by
/// implementing this trait.
pub trait Evaluator: Send + Sync {
    /// Evaluates a board position.
    ///
    /// # Arguments
    /// * `board` - The board position to evaluate
    /// * `player` - The player to evaluate for; must be X or O
    ///
    /// # Returns
    /// Evaluation value from `player`'s perspective, higher is better,
    /// or `EngineError::InvalidPlayer` when `player` is Blank.
    fn evaluate(&self, board: &Board, player: State) -> Result<i32, EngineError>;
}
