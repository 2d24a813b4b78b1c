use common::games::GameBroadcaster;
use common::games::tictactoe::{GameOverNotification, GameStateUpdate};

use crate::game_ui::{render_game_over, render_state};

#[derive(Clone, Default)]
pub struct TerminalBroadcaster;

impl TerminalBroadcaster {
    pub fn new() -> Self {
        Self
    }
}

impl GameBroadcaster for TerminalBroadcaster {
    async fn broadcast_state(&self, state: GameStateUpdate) {
        println!("\n{}", render_state(&state));
    }

    async fn broadcast_game_over(&self, notification: GameOverNotification) {
        if let Some(text) = render_game_over(&notification) {
            println!("{}", text);
        }
    }
}
