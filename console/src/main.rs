mod command;
mod report;

use std::io::Write;
use std::time::Duration;

use clap::Parser;
use engine::config::{Validate, get_config_manager};
use engine::tictactoe::{Difficulty, Mark, MoveError, TicTacToeGameState};
use engine::{SessionRng, log, logger};
use tokio::io::{AsyncBufReadExt, BufReader};

use command::{Command, parse_command};
use report::describe_result;

#[derive(Parser)]
#[command(name = "tictactoe_console")]
struct Args {
    /// YAML config file; defaults to tictactoe_config.yaml next to the binary.
    #[arg(long)]
    config: Option<String>,
    #[arg(long)]
    difficulty: Option<Difficulty>,
    /// Mark played by the human (x or o). X always moves first.
    #[arg(long)]
    human: Option<Mark>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    delay_ms: Option<u64>,
    #[arg(long)]
    use_log_prefix: bool,
}

fn print_help() {
    println!("Commands:");
    println!("  1-9                     place your mark (cells numbered left to right, top to bottom)");
    println!("  difficulty <level>      easy, medium, hard or impossible");
    println!("  restart                 start a new game");
    println!("  quit                    leave");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.as_deref());
    let mut config = config_manager.get_config()?;
    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }
    if let Some(human) = args.human {
        config.human_mark = human;
    }
    if let Some(delay_ms) = args.delay_ms {
        config.computer_delay_ms = delay_ms;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.use_log_prefix |= args.use_log_prefix;
    config.validate()?;

    let prefix = if config.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed {}", rng.seed());

    let computer_delay = Duration::from_millis(config.computer_delay_ms);
    let mut state = TicTacToeGameState::new(config.human_mark, config.difficulty);
    state.restart();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    print_help();

    loop {
        println!("\n{}", state.board());

        if state.status().is_over() {
            let message = describe_result(
                state.status(),
                state.board().winning_line(),
                state.human_mark(),
            );
            println!("{}", message);
            println!("Type 'restart' to play again or 'quit' to leave.");
        } else if state.is_computer_turn() {
            println!("Computer ({}, {}) is thinking...", state.computer_mark(), state.difficulty());
            tokio::time::sleep(computer_delay).await;
            if let Some(index) = state.computer_move(&mut rng) {
                println!("Computer played {}", index + 1);
            }
            continue;
        } else {
            print!("Your move ({}): ", state.human_mark());
            std::io::stdout().flush()?;
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_command(&line) {
            Ok(Command::Place(index)) => match state.human_move(index) {
                Ok(()) => {}
                Err(MoveError::CellOccupied(_)) => println!("Cell {} is already taken", index + 1),
                Err(e) => println!("{}", e),
            },
            Ok(Command::Difficulty(difficulty)) => {
                state.set_difficulty(difficulty);
                println!("Difficulty set to {}", difficulty);
                if let Err(e) = config_manager.update_config(|c| c.difficulty = difficulty) {
                    log!("Failed to save difficulty: {}", e);
                }
            }
            Ok(Command::Restart) => state.restart(),
            Ok(Command::Help) => print_help(),
            Ok(Command::Quit) => break,
            Err(e) => println!("{}", e),
        }
    }

    log!("Console shut down");
    Ok(())
}
