use super::types::{CELL_COUNT, Cell, Mark, TerminalResult, WinningLine};

pub const WINNING_COMBINATIONS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(cells: &[Cell; CELL_COUNT]) -> Option<Mark> {
    check_win_with_line(cells).map(|line| line.mark)
}

pub fn check_win_with_line(cells: &[Cell; CELL_COUNT]) -> Option<WinningLine> {
    for combination in WINNING_COMBINATIONS {
        let [a, b, c] = combination;
        if let Some(mark) = cells[a]
            && cells[b] == Some(mark)
            && cells[c] == Some(mark)
        {
            return Some(WinningLine::new(mark, combination));
        }
    }
    None
}

/// Win is checked first, so a full board with a completed line is a win.
pub fn evaluate(cells: &[Cell; CELL_COUNT]) -> TerminalResult {
    if let Some(mark) = check_win(cells) {
        return TerminalResult::WinBy(mark);
    }
    if cells.iter().all(|cell| cell.is_some()) {
        return TerminalResult::Tie;
    }
    TerminalResult::InProgress
}
