use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use common::games::tictactoe::{TicTacToeCommand, TicTacToeSession, TicTacToeSessionSettings};
use common::log;

use crate::input::{ClientCommand, HELP_TEXT, parse_command};
use super::TerminalBroadcaster;

pub async fn run_tictactoe_game(settings: TicTacToeSessionSettings, seed: u64) -> Result<(), String> {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let mut current_difficulty = settings.difficulty;

    println!("{}", HELP_TEXT);

    let game_handle = tokio::spawn(TicTacToeSession::run(
        settings,
        seed,
        command_rx,
        TerminalBroadcaster::new(),
    ));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                log!("Failed to read input: {}", e);
                break;
            }
        };

        match parse_command(&line, current_difficulty) {
            Ok(ClientCommand::Game(command)) => {
                match command {
                    TicTacToeCommand::NewGame { difficulty, .. }
                    | TicTacToeCommand::SetDifficulty { difficulty } => {
                        current_difficulty = difficulty;
                    }
                    TicTacToeCommand::Restart | TicTacToeCommand::PlaceMark { .. } => {}
                }
                if command_tx.send(command).is_err() {
                    log!("Session ended, dropping {:?}", command);
                    break;
                }
            }
            Ok(ClientCommand::Help) => println!("{}", HELP_TEXT),
            Ok(ClientCommand::Quit) => break,
            Err(e) => println!("{}", e),
        }
    }

    drop(command_tx);

    let final_state = game_handle
        .await
        .map_err(|e| format!("Game session task failed: {}", e))?;
    log!("Left with board {:?}", final_state.board);

    Ok(())
}
