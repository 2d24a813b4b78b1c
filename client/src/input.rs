use common::games::tictactoe::{BOARD_CELLS, Difficulty, GameMode, TicTacToeCommand};

pub const HELP_TEXT: &str = "\
Commands:
  1-9                 place your mark (cells numbered left to right, top to bottom)
  restart, r          start over with the same mode
  two, 2p             new two-player game
  vs [difficulty]     new game against the computer
  difficulty <name>   easy, medium, hard or impossible
  help, h             show this help
  quit, q             leave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    Game(TicTacToeCommand),
    Help,
    Quit,
}

/// Parses one line of user input. `current_difficulty` is used by a bare
/// `vs` command.
pub fn parse_command(line: &str, current_difficulty: Difficulty) -> Result<ClientCommand, String> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err("Empty command, type 'help' for the command list".to_string());
    };
    let head = head.to_ascii_lowercase();
    let argument = words.next();

    if words.next().is_some() {
        return Err(format!("Too many arguments in '{}'", line.trim()));
    }

    if let Ok(cell) = head.parse::<usize>() {
        if argument.is_some() {
            return Err(format!("Too many arguments in '{}'", line.trim()));
        }
        if !(1..=BOARD_CELLS).contains(&cell) {
            return Err(format!("Cell must be between 1 and {}", BOARD_CELLS));
        }
        return Ok(ClientCommand::Game(TicTacToeCommand::PlaceMark { index: cell - 1 }));
    }

    let command = match (head.as_str(), argument) {
        ("restart" | "r", None) => ClientCommand::Game(TicTacToeCommand::Restart),
        ("two" | "2p", None) => ClientCommand::Game(TicTacToeCommand::NewGame {
            mode: GameMode::TwoPlayer,
            difficulty: current_difficulty,
        }),
        ("vs", difficulty) => {
            let difficulty = match difficulty {
                Some(name) => name.parse()?,
                None => current_difficulty,
            };
            ClientCommand::Game(TicTacToeCommand::NewGame {
                mode: GameMode::VsComputer,
                difficulty,
            })
        }
        ("difficulty" | "d", Some(name)) => ClientCommand::Game(TicTacToeCommand::SetDifficulty {
            difficulty: name.parse()?,
        }),
        ("difficulty" | "d", None) => {
            return Err("Missing difficulty: easy, medium, hard or impossible".to_string());
        }
        ("help" | "h", None) => ClientCommand::Help,
        ("quit" | "q" | "exit", None) => ClientCommand::Quit,
        _ => {
            return Err(format!(
                "Unknown command '{}', type 'help' for the command list",
                line.trim()
            ));
        }
    };

    Ok(command)
}
