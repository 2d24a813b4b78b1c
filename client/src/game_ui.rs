use common::games::tictactoe::{
    BOARD_SIZE, Board, GameOutcome, GameOverNotification, GameStateUpdate, Mark, row_col,
};

/// Draws the grid. Empty cells show their 1-based number so the player can
/// see what to type.
pub fn render_board(board: &Board) -> String {
    let rows: Vec<String> = board
        .chunks(BOARD_SIZE)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, mark)| match mark {
                    Mark::Empty => format!(" {} ", row * BOARD_SIZE + col + 1),
                    mark => format!(" {} ", mark),
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    rows.join("\n---+---+---\n")
}

pub fn render_state(update: &GameStateUpdate) -> String {
    let mut out = String::new();
    if let Some((index, mark)) = update.last_move {
        let (row, col) = row_col(index);
        out.push_str(&format!("{} played row {}, column {}\n", mark, row + 1, col + 1));
    }
    out.push_str(&render_board(&update.board));
    out.push('\n');
    out.push_str(&update.status_text);
    if update.restart_visible {
        out.push_str("\nType 'restart' to play again.");
    } else {
        out.push_str(&format!("\n{} to move.", update.current_mark));
    }
    out
}

pub fn render_game_over(notification: &GameOverNotification) -> Option<String> {
    match (notification.outcome, notification.winning_line) {
        (GameOutcome::Win(_), Some(line)) => {
            let cells: Vec<String> = line.cells.iter().map(|i| (i + 1).to_string()).collect();
            Some(format!("Winning line: {}", cells.join("-")))
        }
        _ => None,
    }
}
