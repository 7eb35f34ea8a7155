use super::board::Board;
use super::random_source::RandomSource;
use super::types::{Difficulty, Mark, TerminalResult};

const WIN_SCORE: i32 = 10;

/// Returns `None` when there is no empty cell to play.
pub fn random_move<R: RandomSource + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return None;
    }
    Some(available_moves[rng.pick_index(available_moves.len())])
}

/// Full-depth minimax for `bot_mark`. Scores carry no depth discount, so
/// among equally scored moves the lowest index wins.
///
/// Returns `None` if the board is already decided or full.
pub fn best_move(board: &Board, bot_mark: Mark) -> Option<usize> {
    if board.evaluate().is_over() {
        return None;
    }

    let mut best: Option<(usize, i32)> = None;

    for index in board.available_moves() {
        let mut next = *board;
        next.place(index, bot_mark);
        let score = minimax(&next, bot_mark.opponent(), bot_mark);

        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((index, score)),
        }
    }

    best.map(|(index, _)| index)
}

/// Draws a random candidate, computes the optimal one, then keeps the
/// random candidate when the selector is at or above the difficulty
/// threshold. `Impossible` never keeps the random candidate.
pub fn weighted_move<R: RandomSource + ?Sized>(
    board: &Board,
    bot_mark: Mark,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<usize> {
    let random_candidate = random_move(board, rng)?;
    let optimal_candidate = best_move(board, bot_mark)?;
    let selector = rng.selector();

    if selector >= difficulty.threshold() {
        Some(random_candidate)
    } else {
        Some(optimal_candidate)
    }
}

fn minimax(board: &Board, to_move: Mark, bot_mark: Mark) -> i32 {
    match board.evaluate() {
        TerminalResult::WinBy(winner) if winner == bot_mark => return WIN_SCORE,
        TerminalResult::WinBy(_) => return -WIN_SCORE,
        TerminalResult::Tie => return 0,
        TerminalResult::InProgress => {}
    }

    let scores = board.available_moves().into_iter().map(|index| {
        let mut next = *board;
        next.place(index, to_move);
        minimax(&next, to_move.opponent(), bot_mark)
    });

    let score = if to_move == bot_mark {
        scores.max()
    } else {
        scores.min()
    };
    score.unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session_rng::SessionRng;
    use crate::tictactoe::types::{CELL_COUNT, Cell};
    use std::collections::VecDeque;

    const X: Cell = Some(Mark::X);
    const O: Cell = Some(Mark::O);
    const E: Cell = None;

    struct ScriptedRandom {
        indices: VecDeque<usize>,
        selectors: VecDeque<f64>,
    }

    impl ScriptedRandom {
        fn new(indices: &[usize], selectors: &[f64]) -> Self {
            Self {
                indices: indices.iter().copied().collect(),
                selectors: selectors.iter().copied().collect(),
            }
        }
    }

    impl RandomSource for ScriptedRandom {
        fn pick_index(&mut self, len: usize) -> usize {
            let index = self.indices.pop_front().unwrap();
            assert!(index < len);
            index
        }

        fn selector(&mut self) -> f64 {
            self.selectors.pop_front().unwrap()
        }
    }

    fn board(cells: [Cell; CELL_COUNT]) -> Board {
        Board::from_cells(cells)
    }

    fn next_to_move(board: &Board) -> Mark {
        let x_count = board.cells().iter().filter(|&&c| c == X).count();
        let o_count = board.cells().iter().filter(|&&c| c == O).count();
        if x_count == o_count { Mark::X } else { Mark::O }
    }

    /// Engine plays `bot_mark`, the opponent tries every legal reply.
    /// Returns false if any line of play ends in an engine loss.
    fn never_loses_against_any_opponent(board: Board, bot_mark: Mark) -> bool {
        match board.evaluate() {
            TerminalResult::WinBy(winner) => return winner == bot_mark,
            TerminalResult::Tie => return true,
            TerminalResult::InProgress => {}
        }

        if next_to_move(&board) == bot_mark {
            let index = best_move(&board, bot_mark).unwrap();
            let mut next = board;
            assert!(next.place(index, bot_mark));
            never_loses_against_any_opponent(next, bot_mark)
        } else {
            board.available_moves().into_iter().all(|index| {
                let mut next = board;
                next.place(index, bot_mark.opponent());
                never_loses_against_any_opponent(next, bot_mark)
            })
        }
    }

    #[test]
    fn test_best_move_takes_win() {
        let b = board([X, X, E, O, O, E, E, E, E]);
        assert_eq!(best_move(&b, Mark::X), Some(2));
    }

    #[test]
    fn test_best_move_blocks_opponent() {
        let b = board([O, O, E, X, E, E, E, E, E]);
        assert_eq!(best_move(&b, Mark::X), Some(2));
    }

    #[test]
    fn test_best_move_shared_cell_for_both_marks() {
        // O wins at 2 outright; X blocking at 2 also forks 3-4-5 and 2-4-6.
        let b = board([O, O, E, X, X, E, E, E, E]);
        assert_eq!(best_move(&b, Mark::O), Some(2));
        assert_eq!(best_move(&b, Mark::X), Some(2));
    }

    #[test]
    fn test_best_move_ignores_win_speed() {
        // 8 wins at once, but 3 forks 0-3-6 and 0-4-8 and is enumerated first.
        let b = board([X, O, O, E, X, E, E, E, E]);
        assert_eq!(best_move(&b, Mark::X), Some(3));
    }

    #[test]
    fn test_best_move_empty_board_picks_first_cell() {
        // Every opening draws under perfect play, so the first index wins the tie.
        assert_eq!(best_move(&Board::new(), Mark::X), Some(0));
    }

    #[test]
    fn test_best_move_none_on_finished_board() {
        let full = board([X, O, X, X, O, O, O, X, X]);
        assert_eq!(best_move(&full, Mark::X), None);

        let won = board([X, X, X, O, O, E, E, E, E]);
        assert_eq!(best_move(&won, Mark::O), None);
    }

    #[test]
    fn test_best_move_last_cell() {
        let b = board([X, O, X, X, O, O, O, X, E]);
        assert_eq!(best_move(&b, Mark::X), Some(8));
    }

    #[test]
    fn test_best_move_is_repeatable() {
        let b = board([X, E, E, E, O, E, E, E, E]);
        let first = best_move(&b, Mark::X);
        for _ in 0..3 {
            assert_eq!(best_move(&b, Mark::X), first);
        }
        assert_eq!(b, board([X, E, E, E, O, E, E, E, E]));
    }

    #[test]
    fn test_best_move_never_loses_as_x() {
        assert!(never_loses_against_any_opponent(Board::new(), Mark::X));
    }

    #[test]
    fn test_best_move_never_loses_as_o() {
        assert!(never_loses_against_any_opponent(Board::new(), Mark::O));
    }

    #[test]
    fn test_perfect_play_against_itself_ties() {
        let mut b = Board::new();
        let mut mark = Mark::X;
        while !b.evaluate().is_over() {
            let index = best_move(&b, mark).unwrap();
            assert!(b.place(index, mark));
            mark = mark.opponent();
        }
        assert_eq!(b.evaluate(), TerminalResult::Tie);
    }

    #[test]
    fn test_random_move_none_on_full_board() {
        let full = board([X, O, X, X, O, O, O, X, X]);
        let mut rng = SessionRng::new(1);
        assert_eq!(random_move(&full, &mut rng), None);
    }

    #[test]
    fn test_random_move_indexes_available_cells() {
        let b = board([X, E, O, E, X, E, O, E, E]);
        let mut rng = ScriptedRandom::new(&[0, 2, 4], &[]);
        assert_eq!(random_move(&b, &mut rng), Some(1));
        assert_eq!(random_move(&b, &mut rng), Some(5));
        assert_eq!(random_move(&b, &mut rng), Some(8));
    }

    #[test]
    fn test_weighted_move_threshold_boundaries() {
        // Optimal is 2; random candidate is index 4 of [2, 5, 6, 7, 8], i.e. 8.
        let b = board([X, X, E, O, O, E, E, E, E]);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let threshold = difficulty.threshold();

            let mut at = ScriptedRandom::new(&[4], &[threshold]);
            assert_eq!(weighted_move(&b, Mark::X, difficulty, &mut at), Some(8));

            let mut below = ScriptedRandom::new(&[4], &[threshold - 0.01]);
            assert_eq!(weighted_move(&b, Mark::X, difficulty, &mut below), Some(2));
        }
    }

    #[test]
    fn test_weighted_move_impossible_always_optimal() {
        let b = board([O, O, E, X, E, E, E, E, E]);
        for random_index in 0..6 {
            let mut rng = ScriptedRandom::new(&[random_index], &[0.999_999]);
            assert_eq!(
                weighted_move(&b, Mark::X, Difficulty::Impossible, &mut rng),
                best_move(&b, Mark::X)
            );
        }

        let mut rng = SessionRng::new(99);
        for _ in 0..200 {
            assert_eq!(
                weighted_move(&b, Mark::X, Difficulty::Impossible, &mut rng),
                Some(2)
            );
        }
    }

    #[test]
    fn test_weighted_move_none_without_moves() {
        let full = board([X, O, X, X, O, O, O, X, X]);
        let mut rng = ScriptedRandom::new(&[], &[]);
        assert_eq!(weighted_move(&full, Mark::O, Difficulty::Easy, &mut rng), None);
    }

    #[test]
    fn test_weighted_move_easy_mostly_random() {
        // Optimal move 2 is chosen with p = 0.25 + 0.75 / 5 = 0.4.
        let b = board([X, X, E, O, O, E, E, E, E]);
        let mut rng = SessionRng::new(2024);
        let trials = 2000;
        let optimal = (0..trials)
            .filter(|_| weighted_move(&b, Mark::X, Difficulty::Easy, &mut rng) == Some(2))
            .count();
        let ratio = optimal as f64 / trials as f64;
        assert!((0.34..0.46).contains(&ratio), "ratio {}", ratio);
    }
}
