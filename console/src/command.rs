use engine::tictactoe::{CELL_COUNT, Difficulty};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based cell index; the player types 1-9.
    Place(usize),
    Difficulty(Difficulty),
    Restart,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err("Enter a cell number (1-9) or 'help'".to_string());
    };

    match head.to_ascii_lowercase().as_str() {
        "restart" | "r" => Ok(Command::Restart),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        "difficulty" | "d" => {
            let name = parts
                .next()
                .ok_or_else(|| "Usage: difficulty <easy|medium|hard|impossible>".to_string())?;
            Ok(Command::Difficulty(name.parse()?))
        }
        other => match other.parse::<usize>() {
            Ok(cell) if (1..=CELL_COUNT).contains(&cell) => Ok(Command::Place(cell - 1)),
            Ok(_) => Err(format!("Cell must be between 1 and {}", CELL_COUNT)),
            Err(_) => Err(format!("Unknown command: {}", other)),
        },
    }
}
