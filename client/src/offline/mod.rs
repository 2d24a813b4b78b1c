mod broadcaster;
mod tictactoe_runner;

pub use broadcaster::TerminalBroadcaster;
pub use tictactoe_runner::run_tictactoe_game;
