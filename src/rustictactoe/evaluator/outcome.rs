use super::super::board::Board;
use super::super::error::EngineError;
use super::super::state::{get_opponent, State};
use super::abst::Evaluator;

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

/// Terminal-outcome evaluation function: win, loss or nothing.
/// Non-terminal positions score 0, so a depth-cut-off leaf looks exactly
/// like a draw. That makes depth-limited search myopic by construction.
#[derive(Debug, Clone, Default)]
pub struct OutcomeEvaluator;

impl OutcomeEvaluator {
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for OutcomeEvaluator {
    fn evaluate(&self, board: &Board, player: State) -> Result<i32, EngineError> {
        if player == State::Blank {
            return Err(EngineError::InvalidPlayer);
        }

        let opponent = get_opponent(player);

        if board.is_game_over() && board.winner() == player {
            Ok(WIN_SCORE)
        } else if board.is_game_over() && board.winner() == opponent {
            Ok(LOSS_SCORE)
        } else {
            Ok(DRAW_SCORE)
        }
    }
}
