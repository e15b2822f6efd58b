use super::super::board::Board;
use super::super::error::EngineError;
use super::super::evaluator::abst::Evaluator;
use super::super::state::State;
use super::search_strategy::{EvaluationResult, SearchStrategy};

/// Search engine combining a search strategy with an evaluation function.
/// With no evaluator configured, the strategies fall back to
/// terminal-outcome scoring.
pub struct SearchEngine {
    search_strategy: Box<dyn SearchStrategy + Send + Sync>,
    evaluator: Option<Box<dyn Evaluator + Send + Sync>>,
}

impl SearchEngine {
    pub fn new(
        search_strategy: Box<dyn SearchStrategy + Send + Sync>,
        evaluator: Option<Box<dyn Evaluator + Send + Sync>>,
    ) -> Self {
        Self {
            search_strategy,
            evaluator,
        }
    }

    /// Runs the configured strategy, applying the chosen move to `board`.
    pub fn run(
        &self,
        board: &mut Board,
        player: State,
        max_depth: u8,
    ) -> Result<EvaluationResult, EngineError> {
        self.search_strategy.run(
            board,
            player,
            max_depth,
            self.evaluator
                .as_ref()
                .map(|e| e.as_ref() as &dyn Evaluator),
        )
    }
}
