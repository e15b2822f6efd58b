use serde::{Deserialize, Serialize};

use super::state::{convert_from_char, get_opponent, State};

pub const BOARD_WIDTH: usize = 3;
pub const CELL_COUNT: usize = BOARD_WIDTH * BOARD_WIDTH;

/// The eight winning lines, by cell index:
/// rows, columns, then the two diagonals.
const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A 3x3 tic-tac-toe position. Cells are indexed row-major, 0 to 8.
/// Cloning produces a fully independent copy; the search relies on that
/// to explore siblings from a pristine parent position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [State; CELL_COUNT],
    turn: State,
    move_count: u8,
    winner: State,
    game_over: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board with X to move.
    pub fn new() -> Self {
        Self {
            cells: [State::Blank; CELL_COUNT],
            turn: State::PlayerX,
            move_count: 0,
            winner: State::Blank,
            game_over: false,
        }
    }

    /// Builds a position from a 9-character row-major grid string,
    /// e.g. `"XO--X---O"`. Characters other than `X`/`O` read as blank.
    pub fn from_string(grid: &str, turn: State) -> Self {
        let mut board = Self::new();
        for (index, ch) in grid.chars().take(CELL_COUNT).enumerate() {
            let state = convert_from_char(ch);
            if state != State::Blank {
                board.cells[index] = state;
                board.move_count += 1;
            }
        }
        board.turn = turn;
        board.winner = board.compute_winner();
        board.game_over = board.winner != State::Blank || board.move_count as usize == CELL_COUNT;
        board
    }

    /// Currently legal moves, in ascending cell order. The order matters:
    /// it decides which of several equally scored moves a search keeps.
    pub fn available_moves(&self) -> Vec<u8> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &state)| state == State::Blank)
            .map(|(index, _)| index as u8)
            .collect()
    }

    /// Occupies `cell` for the player whose turn it is, then advances the
    /// turn. Returns false and leaves the board untouched if the game is
    /// over or the cell is occupied or out of range.
    pub fn apply_move(&mut self, cell: u8) -> bool {
        let index = cell as usize;
        if self.game_over || index >= CELL_COUNT || self.cells[index] != State::Blank {
            return false;
        }
        self.cells[index] = self.turn;
        self.move_count += 1;
        self.winner = self.compute_winner();
        self.game_over = self.winner != State::Blank || self.move_count as usize == CELL_COUNT;
        self.turn = get_opponent(self.turn);
        true
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The winning player once the game is over; Blank means a draw
    /// (or a game still in progress).
    pub fn winner(&self) -> State {
        self.winner
    }

    pub fn current_turn(&self) -> State {
        self.turn
    }

    pub fn get_cell(&self, cell: u8) -> State {
        self.cells[cell as usize]
    }

    pub fn move_count(&self) -> u8 {
        self.move_count
    }

    fn compute_winner(&self) -> State {
        for line in &WIN_LINES {
            let first = self.cells[line[0]];
            if first != State::Blank && first == self.cells[line[1]] && first == self.cells[line[2]]
            {
                return first;
            }
        }
        State::Blank
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in 0..BOARD_WIDTH {
            for col in 0..BOARD_WIDTH {
                write!(f, "{}", self.cells[row * BOARD_WIDTH + col])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
