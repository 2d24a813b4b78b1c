use crate::games::SessionRng;
use super::board::{Board, get_available_moves, is_board_full};
use super::game_state::TicTacToeGameState;
use super::types::{Difficulty, Mark};
use super::win_detector::check_win;

/// The computer always plays O.
pub const BOT_MARK: Mark = Mark::O;

const WIN_SCORE: i32 = 10;

pub struct BotInput {
    pub board: Board,
    pub difficulty: Difficulty,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.board,
            difficulty: state.difficulty,
        }
    }
}

pub fn calculate_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    match input.difficulty {
        Difficulty::Easy => calculate_random_move(&input.board, rng),
        Difficulty::Impossible => calculate_best_move(&input.board),
        tier @ (Difficulty::Medium | Difficulty::Hard) => {
            if rng.random_chance(tier.optimal_move_probability()) {
                calculate_best_move(&input.board)
            } else {
                calculate_random_move(&input.board, rng)
            }
        }
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = get_available_moves(board);
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

/// Exhaustive minimax move for O. Ties go to the lowest index.
pub fn calculate_best_move(board: &Board) -> Option<usize> {
    let mut board = *board;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in get_available_moves(&board) {
        board[index] = BOT_MARK;
        let score = minimax(&mut board, 0, false);
        board[index] = Mark::Empty;

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

fn minimax(board: &mut Board, depth: i32, is_maximizing: bool) -> i32 {
    match check_win(board) {
        Some(Mark::O) => return WIN_SCORE - depth,
        Some(Mark::X) => return depth - WIN_SCORE,
        _ => {}
    }

    if is_board_full(board) {
        return 0;
    }

    let mark = if is_maximizing { Mark::O } else { Mark::X };
    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

    for index in 0..board.len() {
        if board[index] != Mark::Empty {
            continue;
        }

        board[index] = mark;
        let score = minimax(board, depth + 1, !is_maximizing);
        board[index] = Mark::Empty;

        best = if is_maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}
