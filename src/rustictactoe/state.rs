use serde::{Deserialize, Serialize};

/// Contents of a single cell, also used to identify a player.
/// `Blank` marks an empty cell and a drawn game; it is never a valid
/// player argument to an evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum State {
    Blank,
    PlayerX,
    PlayerO,
}

/// Returns the other player. Blank has no opponent and maps to itself;
/// evaluators reject Blank before this matters.
pub fn get_opponent(state: State) -> State {
    match state {
        State::PlayerX => State::PlayerO,
        State::PlayerO => State::PlayerX,
        State::Blank => State::Blank,
    }
}

pub fn convert_from_char(ch: char) -> State {
    match ch {
        'X' | 'x' => State::PlayerX,
        'O' | 'o' => State::PlayerO,
        _ => State::Blank,
    }
}

impl State {
    pub fn to_char(self) -> char {
        match self {
            State::PlayerX => 'X',
            State::PlayerO => 'O',
            State::Blank => '-',
        }
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
