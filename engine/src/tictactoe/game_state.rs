use std::fmt;

use super::board::Board;
use super::bot_controller::weighted_move;
use super::random_source::RandomSource;
use super::types::{CELL_COUNT, Difficulty, Mark, TerminalResult};
use crate::log;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    GameOver,
    NotYourTurn,
    OutOfBounds(usize),
    CellOccupied(usize),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "Game is already over"),
            MoveError::NotYourTurn => write!(f, "Not your turn"),
            MoveError::OutOfBounds(index) => write!(f, "Cell {} is out of bounds", index),
            MoveError::CellOccupied(index) => write!(f, "Cell {} is already marked", index),
        }
    }
}

impl std::error::Error for MoveError {}

/// One human-vs-computer match. X always opens; the board is only ever
/// changed through `Board::place`.
#[derive(Debug)]
pub struct TicTacToeGameState {
    board: Board,
    human_mark: Mark,
    current_mark: Mark,
    difficulty: Difficulty,
    status: TerminalResult,
    last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new(human_mark: Mark, difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            human_mark,
            current_mark: Mark::X,
            difficulty,
            status: TerminalResult::InProgress,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> TerminalResult {
        self.status
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    pub fn computer_mark(&self) -> Mark {
        self.human_mark.opponent()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        log!("Difficulty changed from {} to {}", self.difficulty, difficulty);
        self.difficulty = difficulty;
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn is_computer_turn(&self) -> bool {
        self.status == TerminalResult::InProgress && self.current_mark == self.computer_mark()
    }

    /// `Some(true)` if the human won, `Some(false)` if the computer did.
    pub fn winner_is_human(&self) -> Option<bool> {
        match self.status {
            TerminalResult::WinBy(mark) => Some(mark == self.human_mark),
            _ => None,
        }
    }

    pub fn human_move(&mut self, index: usize) -> Result<(), MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        if self.current_mark != self.human_mark {
            return Err(MoveError::NotYourTurn);
        }

        if index >= CELL_COUNT {
            return Err(MoveError::OutOfBounds(index));
        }

        if !self.board.place(index, self.human_mark) {
            return Err(MoveError::CellOccupied(index));
        }

        self.finish_move(index);
        Ok(())
    }

    /// Plays the computer's difficulty-weighted move. Does nothing and
    /// returns `None` when the game is over or it is the human's turn.
    pub fn computer_move<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<usize> {
        if !self.is_computer_turn() {
            return None;
        }

        let mark = self.computer_mark();
        let index = weighted_move(&self.board, mark, self.difficulty, rng)?;
        if !self.board.place(index, mark) {
            return None;
        }

        self.finish_move(index);
        Some(index)
    }

    pub fn restart(&mut self) {
        self.board.reset();
        self.current_mark = Mark::X;
        self.status = TerminalResult::InProgress;
        self.last_move = None;
        log!(
            "New game: human {} vs computer {} on {}",
            self.human_mark,
            self.computer_mark(),
            self.difficulty
        );
    }

    fn finish_move(&mut self, index: usize) {
        let who = if self.current_mark == self.human_mark { "Human" } else { "Computer" };
        log!("{} played {} at {}", who, self.current_mark, index);

        self.last_move = Some(index);
        self.status = self.board.evaluate();

        match self.status {
            TerminalResult::InProgress => self.current_mark = self.current_mark.opponent(),
            TerminalResult::WinBy(mark) => log!("Game over: {} wins", mark),
            TerminalResult::Tie => log!("Game over: tie"),
        }
    }
}
