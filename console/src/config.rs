use clap::ValueEnum;
use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::tictactoe::Player;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE: &str = "tictactoe_console_config.yaml";

pub fn get_config_manager(path: &Path) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

/// Who picks the moves for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Controller {
    Human,
    Minimax,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayerMode {
    Human,
    Agent,
    Random,
}

impl FirstPlayerMode {
    pub fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> Player {
        match self {
            FirstPlayerMode::Human => Player::Human,
            FirstPlayerMode::Agent => Player::Agent,
            FirstPlayerMode::Random => {
                if rng.random_bool(0.5) {
                    Player::Agent
                } else {
                    Player::Human
                }
            }
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Controller of the `X` side.
    pub agent: Controller,
    /// Controller of the `O` side.
    pub human: Controller,
    pub first_player: FirstPlayerMode,
    pub clear_screen: bool,
    pub use_log_prefix: bool,
    pub log_prefix: String,
}

impl Config {
    pub fn controller(&self, player: Player) -> Controller {
        match player {
            Player::Agent => self.agent,
            Player::Human => self.human,
        }
    }

    pub fn log_prefix(&self) -> Option<String> {
        self.use_log_prefix.then(|| self.log_prefix.clone())
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.use_log_prefix && self.log_prefix.trim().is_empty() {
            return Err("log_prefix must not be empty when use_log_prefix is set".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            agent: Controller::Minimax,
            human: Controller::Human,
            first_player: FirstPlayerMode::Human,
            clear_screen: false,
            use_log_prefix: false,
            log_prefix: "Console".to_string(),
        }
    }
}
