use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::board::Board;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => ' ',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    #[default]
    TwoPlayer,
    VsComputer,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::TwoPlayer => write!(f, "two-player"),
            GameMode::VsComputer => write!(f, "vs-computer"),
        }
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "two-player" | "two_player" | "2p" => Ok(GameMode::TwoPlayer),
            "vs-computer" | "vs_computer" | "vs" => Ok(GameMode::VsComputer),
            other => Err(format!(
                "Unknown game mode '{}', expected two-player or vs-computer",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Impossible,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Impossible,
    ];

    /// Probability that the bot plays the minimax move instead of a random one.
    pub fn optimal_move_probability(&self) -> f64 {
        match self {
            Difficulty::Easy => 0.0,
            Difficulty::Medium => 0.6,
            Difficulty::Hard => 0.8,
            Difficulty::Impossible => 1.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Impossible => "impossible",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name() == lowered)
            .ok_or_else(|| {
                format!(
                    "Unknown difficulty '{}', expected easy, medium, hard or impossible",
                    s.trim()
                )
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win(Mark),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    MoveApplied { index: usize, mark: Mark },
    GameEnded(GameOutcome),
    /// The computer owns the next move.
    ComputerTurn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; 3]) -> Self {
        Self { mark, cells }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStateUpdate {
    pub board: Board,
    pub current_mark: Mark,
    pub status_text: String,
    pub restart_visible: bool,
    pub last_move: Option<(usize, Mark)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOverNotification {
    pub outcome: GameOutcome,
    pub winning_line: Option<WinningLine>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Some(Mark::O));
        assert_eq!(Mark::O.opponent(), Some(Mark::X));
        assert_eq!(Mark::Empty.opponent(), None);
    }

    #[test]
    fn test_difficulty_parse_is_case_insensitive() {
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(" impossible ".parse::<Difficulty>(), Ok(Difficulty::Impossible));
        assert!("nightmare".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_difficulty_probabilities_are_ordered() {
        let probabilities: Vec<f64> = Difficulty::ALL
            .iter()
            .map(|d| d.optimal_move_probability())
            .collect();
        assert_eq!(probabilities, vec![0.0, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn test_game_mode_parse() {
        assert_eq!("vs-computer".parse::<GameMode>(), Ok(GameMode::VsComputer));
        assert_eq!("two_player".parse::<GameMode>(), Ok(GameMode::TwoPlayer));
        assert!("online".parse::<GameMode>().is_err());
    }
}
