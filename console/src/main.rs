mod config;
mod game_loop;
mod input;
mod render;

use clap::Parser;
use common::tictactoe::{CELL_COUNT, get_available_moves};
use common::{log, logger};
use std::io;
use std::path::PathBuf;

use config::{CONFIG_FILE, Config, Controller, FirstPlayerMode, get_config_manager};
use game_loop::GameRunner;

#[derive(Parser)]
#[command(name = "tictactoe_console", about = "Play tic-tac-toe against a minimax opponent")]
struct Args {
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Controller of the X side
    #[arg(long, value_enum)]
    agent: Option<Controller>,

    /// Controller of the O side
    #[arg(long, value_enum)]
    human: Option<Controller>,

    #[arg(long, value_enum)]
    first_player: Option<FirstPlayerMode>,

    #[arg(long)]
    clear_screen: bool,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write the effective settings back to the config file before playing
    #[arg(long)]
    save_config: bool,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(agent) = self.agent {
            config.agent = agent;
        }
        if let Some(human) = self.human {
            config.human = human;
        }
        if let Some(first_player) = self.first_player {
            config.first_player = first_player;
        }
        config.clear_screen |= self.clear_screen;
        config.use_log_prefix |= self.use_log_prefix;
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let manager = get_config_manager(&args.config);
    let mut config = manager.load()?;
    args.apply(&mut config);

    logger::init_logger(config.log_prefix());
    log!("Using config {}", args.config.display());

    if args.save_config {
        manager.save(&config)?;
        log!("Saved config to {}", args.config.display());
    }

    let first_player = config.first_player.resolve(&mut rand::rng());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let state = GameRunner::new(&config, stdin.lock(), stdout.lock()).run(first_player)?;

    let moves = CELL_COUNT - get_available_moves(state.board()).len();
    log!("Finished after {} moves: {:?}", moves, state.status());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let args = Args::parse_from([
            "tictactoe_console",
            "--agent",
            "human",
            "--first-player",
            "random",
            "--clear-screen",
        ]);
        let mut config = Config::default();
        args.apply(&mut config);

        assert_eq!(config.agent, Controller::Human);
        assert_eq!(config.human, Controller::Human);
        assert_eq!(config.first_player, FirstPlayerMode::Random);
        assert!(config.clear_screen);
        assert!(!config.use_log_prefix);
        assert_eq!(args.config, PathBuf::from(CONFIG_FILE));
    }

    #[test]
    fn test_no_flags_keep_file_values() {
        let args = Args::parse_from(["tictactoe_console"]);
        let mut config = Config {
            clear_screen: true,
            human: Controller::Minimax,
            ..Config::default()
        };
        args.apply(&mut config);

        assert!(config.clear_screen);
        assert_eq!(config.human, Controller::Minimax);
        assert_eq!(config.agent, Controller::Minimax);
    }
}
