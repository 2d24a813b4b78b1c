use super::board::{Board, EMPTY_BOARD, is_board_full, is_valid_move};
use super::bot_controller::BOT_MARK;
use super::types::{
    Difficulty, GameEvent, GameMode, GameOutcome, GameStateUpdate, GameStatus, Mark, WinningLine,
};
use super::win_detector::{check_win, check_win_with_line};

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub last_move: Option<usize>,
    pending_events: Vec<GameEvent>,
}

impl TicTacToeGameState {
    pub fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        Self {
            board: EMPTY_BOARD,
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            mode,
            difficulty,
            last_move: None,
            pending_events: Vec::new(),
        }
    }

    /// Fresh game with the same mode and difficulty.
    pub fn restart(&mut self) {
        *self = Self::new(self.mode, self.difficulty);
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn is_active(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    pub fn is_computer_turn(&self) -> bool {
        self.is_active() && self.mode == GameMode::VsComputer && self.current_mark == BOT_MARK
    }

    /// Places the current mark at `index`. Moves on a finished game, an
    /// occupied cell or an index outside the board are ignored and return
    /// `false` without touching the state.
    pub fn place_mark(&mut self, index: usize) -> bool {
        if !self.is_active() || !is_valid_move(&self.board, index) {
            return false;
        }

        let mark = self.current_mark;
        self.board[index] = mark;
        self.last_move = Some(index);
        self.pending_events.push(GameEvent::MoveApplied { index, mark });

        self.check_game_over();

        if let Some(outcome) = self.outcome() {
            self.pending_events.push(GameEvent::GameEnded(outcome));
        } else {
            self.switch_turn();
            if self.is_computer_turn() {
                self.pending_events.push(GameEvent::ComputerTurn);
            }
        }

        true
    }

    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events)
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }

    fn check_game_over(&mut self) {
        if let Some(winner_mark) = check_win(&self.board) {
            self.status = match winner_mark {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if is_board_full(&self.board) {
            self.status = GameStatus::Draw;
        }
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.status {
            GameStatus::XWon => Some(GameOutcome::Win(Mark::X)),
            GameStatus::OWon => Some(GameOutcome::Win(Mark::O)),
            GameStatus::Draw => Some(GameOutcome::Draw),
            GameStatus::InProgress => None,
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    pub fn status_text(&self) -> String {
        match self.outcome() {
            Some(GameOutcome::Win(mark)) => format!("{} wins! 🎉", mark),
            Some(GameOutcome::Draw) => "It's a draw 😐".to_string(),
            None => match self.mode {
                GameMode::TwoPlayer => "2 Player Mode: X goes first!".to_string(),
                GameMode::VsComputer => format!(
                    "Vs Computer Mode ({}): You are X!",
                    self.difficulty.name().to_uppercase()
                ),
            },
        }
    }

    pub fn to_update(&self) -> GameStateUpdate {
        GameStateUpdate {
            board: self.board,
            current_mark: self.current_mark,
            status_text: self.status_text(),
            restart_visible: !self.is_active(),
            last_move: self.last_move.map(|index| (index, self.board[index])),
        }
    }
}
