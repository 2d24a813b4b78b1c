use super::board::{Board, WINNING_LINES};
use super::types::{Mark, WinningLine};

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let mark = board[a];
        if mark != Mark::Empty && mark == board[b] && mark == board[c] {
            Some(WinningLine::new(mark, [a, b, c]))
        } else {
            None
        }
    })
}
