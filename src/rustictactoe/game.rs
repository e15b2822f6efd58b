use serde::{Deserialize, Serialize};

use super::board::Board;
use super::random::Random;
use super::state::State;

/// One match of tic-tac-toe: a board plus move bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub board: Board,
    pub move_number: u16,
    pub winner: State,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            move_number: 1,
            winner: State::Blank,
        }
    }

    pub fn is_finished(&self) -> (bool, State) {
        (self.board.is_game_over(), self.board.winner())
    }

    pub fn execute_move(&mut self, cell: u8) {
        self.board.apply_move(cell);
        self.move_number += 1;
        let is_finish = self.is_finished();
        if is_finish.0 {
            self.winner = is_finish.1;
        }
    }

    /// Plays the match out with uniformly random moves.
    pub fn random_play(&mut self) -> Self {
        while !self.is_finished().0 {
            let moves = self.board.available_moves();
            if moves.is_empty() {
                break;
            }

            let mut random = Random::new(0, (moves.len() - 1) as u16);
            let cell = moves[random.generate_one() as usize];
            self.execute_move(cell);
        }
        self.clone()
    }
}
