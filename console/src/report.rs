use engine::tictactoe::{Mark, TerminalResult, WinningLine};

fn format_line(line: &WinningLine) -> String {
    line.cells
        .iter()
        .map(|index| (index + 1).to_string())
        .collect::<Vec<_>>()
        .join("-")
}

/// Final message for a finished game, naming the winning cells 1-9.
pub fn describe_result(
    status: TerminalResult,
    winning_line: Option<WinningLine>,
    human_mark: Mark,
) -> String {
    match (status, winning_line) {
        (TerminalResult::Tie, _) => "It's a tie.".to_string(),
        (TerminalResult::WinBy(mark), Some(line)) if mark == human_mark => {
            format!("You win as {} on {}!", mark, format_line(&line))
        }
        (TerminalResult::WinBy(mark), Some(line)) => {
            format!("Computer wins as {} on {}.", mark, format_line(&line))
        }
        (TerminalResult::WinBy(mark), None) if mark == human_mark => format!("You win as {}!", mark),
        (TerminalResult::WinBy(mark), None) => format!("Computer wins as {}.", mark),
        (TerminalResult::InProgress, _) => String::new(),
    }
}
