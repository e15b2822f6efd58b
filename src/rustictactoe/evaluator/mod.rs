pub mod abst;
pub mod outcome;

pub use abst::Evaluator;
pub use outcome::OutcomeEvaluator;
