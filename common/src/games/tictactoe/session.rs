use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::games::{GameBroadcaster, SessionRng};
use crate::log;
use super::bot_controller::{BotInput, calculate_move};
use super::game_state::TicTacToeGameState;
use super::types::{Difficulty, GameEvent, GameMode, GameOverNotification};

pub const DEFAULT_BOT_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicTacToeCommand {
    NewGame {
        mode: GameMode,
        difficulty: Difficulty,
    },
    Restart,
    PlaceMark {
        index: usize,
    },
    SetDifficulty {
        difficulty: Difficulty,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct TicTacToeSessionSettings {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub bot_delay: Duration,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::TwoPlayer,
            difficulty: Difficulty::Easy,
            bot_delay: DEFAULT_BOT_DELAY,
        }
    }
}

struct TicTacToeSessionState {
    game_state: TicTacToeGameState,
    rng: SessionRng,
    bot_delay: Duration,
    pending_bot_move: Option<Instant>,
}

enum Wakeup {
    BotMove,
    Command(Option<TicTacToeCommand>),
}

pub struct TicTacToeSession;

impl TicTacToeSession {
    /// Drives one game at a time until the command channel closes. A
    /// computer move that is already scheduled still runs after the close.
    pub async fn run(
        settings: TicTacToeSessionSettings,
        seed: u64,
        mut command_rx: mpsc::UnboundedReceiver<TicTacToeCommand>,
        broadcaster: impl GameBroadcaster,
    ) -> TicTacToeGameState {
        let mut state = TicTacToeSessionState {
            game_state: TicTacToeGameState::new(settings.mode, settings.difficulty),
            rng: SessionRng::new(seed),
            bot_delay: settings.bot_delay,
            pending_bot_move: None,
        };
        let mut commands_closed = false;

        log!(
            "Session started: mode={}, difficulty={}, seed={}",
            settings.mode,
            settings.difficulty,
            seed
        );
        broadcaster.broadcast_state(state.game_state.to_update()).await;

        loop {
            let wakeup = match state.pending_bot_move {
                Some(deadline) if !commands_closed => tokio::select! {
                    _ = tokio::time::sleep_until(deadline) => Wakeup::BotMove,
                    command = command_rx.recv() => Wakeup::Command(command),
                },
                Some(deadline) => {
                    tokio::time::sleep_until(deadline).await;
                    Wakeup::BotMove
                }
                None => Wakeup::Command(command_rx.recv().await),
            };

            match wakeup {
                Wakeup::BotMove => {
                    state.pending_bot_move = None;
                    play_bot_turn(&mut state, &broadcaster).await;
                }
                Wakeup::Command(Some(command)) => {
                    handle_command(&mut state, command, &broadcaster).await;
                }
                Wakeup::Command(None) => {
                    if state.pending_bot_move.is_none() {
                        break;
                    }
                    commands_closed = true;
                }
            }
        }

        log!("Session finished: {}", state.game_state.status_text());
        state.game_state
    }
}

async fn handle_command(
    state: &mut TicTacToeSessionState,
    command: TicTacToeCommand,
    broadcaster: &impl GameBroadcaster,
) {
    match command {
        TicTacToeCommand::NewGame { mode, difficulty } => {
            state.game_state = TicTacToeGameState::new(mode, difficulty);
            state.pending_bot_move = None;
            log!("New game: mode={}, difficulty={}", mode, difficulty);
            broadcaster.broadcast_state(state.game_state.to_update()).await;
        }
        TicTacToeCommand::Restart => {
            state.game_state.restart();
            state.pending_bot_move = None;
            log!("Game restarted");
            broadcaster.broadcast_state(state.game_state.to_update()).await;
        }
        TicTacToeCommand::SetDifficulty { difficulty } => {
            state.game_state.set_difficulty(difficulty);
            log!("Difficulty set to {}", difficulty);
            broadcaster.broadcast_state(state.game_state.to_update()).await;
        }
        TicTacToeCommand::PlaceMark { index } => {
            if state.game_state.is_computer_turn() {
                log!("Ignoring move at {}: computer is thinking", index);
                return;
            }
            apply_move(state, index, broadcaster).await;
        }
    }
}

async fn play_bot_turn(state: &mut TicTacToeSessionState, broadcaster: &impl GameBroadcaster) {
    if !state.game_state.is_computer_turn() {
        return;
    }

    let bot_input = BotInput::from_game_state(&state.game_state);
    match calculate_move(&bot_input, &mut state.rng) {
        Some(index) => {
            log!("Computer ({}) plays {}", bot_input.difficulty, index);
            apply_move(state, index, broadcaster).await;
        }
        None => log!("Computer has no move available"),
    }
}

async fn apply_move(
    state: &mut TicTacToeSessionState,
    index: usize,
    broadcaster: &impl GameBroadcaster,
) {
    if !state.game_state.place_mark(index) {
        log!("Ignoring move at {}: cell taken or game over", index);
        return;
    }

    broadcaster.broadcast_state(state.game_state.to_update()).await;

    for event in state.game_state.take_events() {
        match event {
            GameEvent::MoveApplied { .. } => {}
            GameEvent::ComputerTurn => {
                state.pending_bot_move = Some(Instant::now() + state.bot_delay);
            }
            GameEvent::GameEnded(outcome) => {
                log!("Game over: {:?}", outcome);
                let notification = GameOverNotification {
                    outcome,
                    winning_line: state.game_state.winning_line(),
                };
                broadcaster.broadcast_game_over(notification).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use crate::games::tictactoe::board::EMPTY_BOARD;
    use crate::games::tictactoe::types::{GameOutcome, GameStateUpdate, Mark, WinningLine};

    #[derive(Clone, Default)]
    struct RecordingBroadcaster {
        states: Arc<Mutex<Vec<GameStateUpdate>>>,
        game_overs: Arc<Mutex<Vec<GameOverNotification>>>,
    }

    impl GameBroadcaster for RecordingBroadcaster {
        async fn broadcast_state(&self, state: GameStateUpdate) {
            self.states.lock().unwrap().push(state);
        }

        async fn broadcast_game_over(&self, notification: GameOverNotification) {
            self.game_overs.lock().unwrap().push(notification);
        }
    }

    fn settings(mode: GameMode, difficulty: Difficulty, bot_delay: Duration) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            mode,
            difficulty,
            bot_delay,
        }
    }

    async fn run_commands(
        settings: TicTacToeSessionSettings,
        commands: &[TicTacToeCommand],
    ) -> (TicTacToeGameState, RecordingBroadcaster) {
        let (tx, rx) = mpsc::unbounded_channel();
        for command in commands {
            tx.send(*command).unwrap();
        }
        drop(tx);

        let broadcaster = RecordingBroadcaster::default();
        let final_state = TicTacToeSession::run(settings, 42, rx, broadcaster.clone()).await;
        (final_state, broadcaster)
    }

    fn place(index: usize) -> TicTacToeCommand {
        TicTacToeCommand::PlaceMark { index }
    }

    #[tokio::test]
    async fn test_initial_state_is_broadcast() {
        let (final_state, broadcaster) =
            run_commands(TicTacToeSessionSettings::default(), &[]).await;

        assert_eq!(final_state.board, EMPTY_BOARD);
        let states = broadcaster.states.lock().unwrap();
        assert_eq!(states.len(), 1);
        assert_eq!(states[0].status_text, "2 Player Mode: X goes first!");
        assert!(!states[0].restart_visible);
    }

    #[tokio::test]
    async fn test_two_player_game_to_draw() {
        let moves = [0, 1, 2, 4, 3, 5, 7, 6, 8].map(place);
        let (final_state, broadcaster) =
            run_commands(TicTacToeSessionSettings::default(), &moves).await;

        assert_eq!(final_state.outcome(), Some(GameOutcome::Draw));
        let game_overs = broadcaster.game_overs.lock().unwrap();
        assert_eq!(
            *game_overs,
            vec![GameOverNotification {
                outcome: GameOutcome::Draw,
                winning_line: None,
            }]
        );
        let states = broadcaster.states.lock().unwrap();
        assert_eq!(states.len(), 10);
        assert!(states.last().unwrap().restart_visible);
    }

    #[tokio::test]
    async fn test_computer_replies_after_human_move() {
        let settings = settings(GameMode::VsComputer, Difficulty::Impossible, Duration::from_millis(1));
        let (final_state, broadcaster) = run_commands(settings, &[place(4)]).await;

        assert_eq!(final_state.board[4], Mark::X);
        let replies: Vec<usize> = (0..9).filter(|&i| final_state.board[i] == Mark::O).collect();
        assert_eq!(replies.len(), 1);
        assert!([0, 2, 6, 8].contains(&replies[0]));
        assert_eq!(final_state.current_mark, Mark::X);

        let states = broadcaster.states.lock().unwrap();
        assert_eq!(states.last().unwrap().last_move, Some((replies[0], Mark::O)));
    }

    #[tokio::test]
    async fn test_human_move_during_computer_turn_is_ignored() {
        let settings = settings(GameMode::VsComputer, Difficulty::Impossible, Duration::from_millis(20));
        let (final_state, _) = run_commands(settings, &[place(0), place(8)]).await;

        assert_eq!(final_state.board[0], Mark::X);
        assert_eq!(final_state.board[4], Mark::O);
        assert_eq!(final_state.board[8], Mark::Empty);
    }

    #[tokio::test]
    async fn test_restart_drops_pending_computer_move() {
        let settings = settings(GameMode::VsComputer, Difficulty::Impossible, Duration::from_secs(30));
        let (final_state, broadcaster) =
            run_commands(settings, &[place(4), TicTacToeCommand::Restart]).await;

        assert_eq!(final_state.board, EMPTY_BOARD);
        assert_eq!(final_state.mode, GameMode::VsComputer);
        assert!(broadcaster.game_overs.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_new_game_switches_mode() {
        let commands = [
            place(0),
            TicTacToeCommand::NewGame {
                mode: GameMode::VsComputer,
                difficulty: Difficulty::Hard,
            },
        ];
        let (final_state, broadcaster) =
            run_commands(TicTacToeSessionSettings::default(), &commands).await;

        assert_eq!(final_state.board, EMPTY_BOARD);
        assert_eq!(final_state.mode, GameMode::VsComputer);
        let states = broadcaster.states.lock().unwrap();
        assert_eq!(states.last().unwrap().status_text, "Vs Computer Mode (HARD): You are X!");
    }

    #[tokio::test]
    async fn test_set_difficulty_applies_to_current_game() {
        let commands = [
            TicTacToeCommand::SetDifficulty {
                difficulty: Difficulty::Impossible,
            },
            place(0),
        ];
        let settings = settings(GameMode::VsComputer, Difficulty::Easy, Duration::ZERO);
        let (final_state, _) = run_commands(settings, &commands).await;

        assert_eq!(final_state.difficulty, Difficulty::Impossible);
        assert_eq!(final_state.board[4], Mark::O);
    }

    async fn wait_for_states(broadcaster: &RecordingBroadcaster, count: usize) {
        let wait = async {
            while broadcaster.states.lock().unwrap().len() < count {
                tokio::time::sleep(Duration::from_millis(1)).await;
            }
        };
        tokio::time::timeout(Duration::from_secs(5), wait)
            .await
            .expect("session stopped broadcasting");
    }

    #[tokio::test]
    async fn test_computer_win_broadcasts_winning_line() {
        let settings = settings(GameMode::VsComputer, Difficulty::Impossible, Duration::ZERO);
        let (tx, rx) = mpsc::unbounded_channel();
        let broadcaster = RecordingBroadcaster::default();
        let handle = tokio::spawn(TicTacToeSession::run(settings, 7, rx, broadcaster.clone()));

        // O answers 0 with 4, blocks 1 with 2, then completes 2-4-6.
        wait_for_states(&broadcaster, 1).await;
        tx.send(place(0)).unwrap();
        wait_for_states(&broadcaster, 3).await;
        tx.send(place(1)).unwrap();
        wait_for_states(&broadcaster, 5).await;
        tx.send(place(3)).unwrap();
        wait_for_states(&broadcaster, 7).await;
        drop(tx);

        let final_state = handle.await.unwrap();

        assert_eq!(final_state.outcome(), Some(GameOutcome::Win(Mark::O)));
        assert_eq!(final_state.status_text(), "O wins! 🎉");
        let game_overs = broadcaster.game_overs.lock().unwrap();
        assert_eq!(
            *game_overs,
            vec![GameOverNotification {
                outcome: GameOutcome::Win(Mark::O),
                winning_line: Some(WinningLine::new(Mark::O, [2, 4, 6])),
            }]
        );
    }

    #[tokio::test]
    async fn test_two_player_win_reports_line() {
        let moves = [0, 1, 3, 4, 6].map(place);
        let (_, broadcaster) = run_commands(TicTacToeSessionSettings::default(), &moves).await;

        let game_overs = broadcaster.game_overs.lock().unwrap();
        assert_eq!(game_overs.len(), 1);
        assert_eq!(game_overs[0].outcome, GameOutcome::Win(Mark::X));
        assert_eq!(game_overs[0].winning_line.map(|l| l.cells), Some([0, 3, 6]));
    }
}
