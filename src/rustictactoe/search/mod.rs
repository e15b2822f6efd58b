pub mod alphabeta;
pub mod engine;
pub mod minmax;
pub mod search_strategy;

pub use alphabeta::AlphaBetaSearchStrategy;
pub use engine::SearchEngine;
pub use minmax::MinMaxSearchStrategy;
pub use search_strategy::{EvaluationResult, SearchStrategy};
