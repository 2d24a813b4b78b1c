mod board;
mod bot_controller;
mod game_state;
mod session;
mod types;
mod win_detector;

pub use board::{
    BOARD_CELLS, BOARD_SIZE, Board, EMPTY_BOARD, WINNING_LINES, get_available_moves,
    is_board_full, is_valid_move, row_col,
};
pub use bot_controller::{BOT_MARK, BotInput, calculate_best_move, calculate_move};
pub use game_state::TicTacToeGameState;
pub use session::{DEFAULT_BOT_DELAY, TicTacToeCommand, TicTacToeSession, TicTacToeSessionSettings};
pub use types::{
    Difficulty, GameEvent, GameMode, GameOutcome, GameOverNotification, GameStateUpdate,
    GameStatus, Mark, WinningLine,
};
pub use win_detector::{check_win, check_win_with_line};
