mod config;
mod game_ui;
mod input;
mod offline;

use std::time::Duration;
use clap::Parser;
use common::games::tictactoe::{Difficulty, GameMode, TicTacToeSessionSettings};
use common::{log, logger};

use config::{CONFIG_FILE, Config, Validate, get_config_manager};
use offline::run_tictactoe_game;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe for two players or against the computer")]
struct Args {
    /// YAML config file; missing file means defaults
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    /// two-player or vs-computer
    #[arg(long)]
    mode: Option<GameMode>,

    /// easy, medium, hard or impossible
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Delay before the computer answers
    #[arg(long)]
    bot_delay_ms: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Log session activity to stderr
    #[arg(long, short)]
    verbose: bool,
}

impl Args {
    fn apply_to(&self, mut config: Config) -> Config {
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(bot_delay_ms) = self.bot_delay_ms {
            config.bot_delay_ms = bot_delay_ms;
        }
        config
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let file_config = get_config_manager(&args.config).get_config()?;
    let config = args.apply_to(file_config);
    config.validate()?;

    let seed = config.seed.unwrap_or_else(rand::random);
    log!("Using config {:?} with seed {}", config, seed);

    let settings = TicTacToeSessionSettings {
        mode: config.mode,
        difficulty: config.difficulty,
        bot_delay: Duration::from_millis(config.bot_delay_ms),
    };

    run_tictactoe_game(settings, seed).await?;

    Ok(())
}
