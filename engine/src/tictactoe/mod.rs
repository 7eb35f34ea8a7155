mod board;
mod bot_controller;
mod game_state;
mod random_source;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{best_move, random_move, weighted_move};
pub use game_state::{MoveError, TicTacToeGameState};
pub use random_source::RandomSource;
pub use types::{BOARD_SIZE, CELL_COUNT, Cell, Difficulty, Mark, TerminalResult, WinningLine};
pub use win_detector::{WINNING_COMBINATIONS, check_win, check_win_with_line, evaluate};
