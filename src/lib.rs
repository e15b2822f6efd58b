#[path = "rustictactoe/board.rs"]
pub mod board;
#[path = "rustictactoe/error.rs"]
pub mod error;
#[path = "rustictactoe/evaluator/mod.rs"]
pub mod evaluator;
#[path = "rustictactoe/game.rs"]
pub mod game;
#[path = "rustictactoe/random.rs"]
pub mod random;
#[path = "rustictactoe/search/mod.rs"]
pub mod search;
#[path = "rustictactoe/state.rs"]
pub mod state;
