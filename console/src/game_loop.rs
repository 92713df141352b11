use common::log;
use common::tictactoe::{BotInput, Player, Position, TicTacToeGameState, calculate_move};
use std::io::{BufRead, Write};

use crate::config::{Config, Controller};
use crate::input::{InputError, read_move};
use crate::render::{CLEAR_SCREEN, render_board, render_outcome, render_prompt};

pub struct GameRunner<'a, R: BufRead, W: Write> {
    config: &'a Config,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> GameRunner<'a, R, W> {
    pub fn new(config: &'a Config, input: R, output: W) -> Self {
        Self { config, input, output }
    }

    /// Plays one game and returns its final state. The game also ends early,
    /// still in progress, when human input is closed.
    pub fn run(&mut self, first_player: Player) -> Result<TicTacToeGameState, String> {
        let mut state = TicTacToeGameState::new(first_player);
        log!(
            "New game: X={:?} O={:?}, {} moves first",
            self.config.agent,
            self.config.human,
            first_player
        );
        self.draw(&state)?;

        while !state.status().is_over() {
            let player = state.current_player();
            let Some(pos) = self.next_move(&state, player)? else {
                break;
            };

            // A rejected move keeps the same side to move.
            if let Err(err) = state.place_mark(player, pos) {
                log!("{} tried {}: {}", player, pos, err);
                self.write_line(&format!("{}, try again.", err))?;
                continue;
            }
            self.draw(&state)?;
        }

        log!("Game over: {:?}", state.status());
        self.write_line(&render_outcome(state.status()))?;
        Ok(state)
    }

    fn next_move(&mut self, state: &TicTacToeGameState, player: Player) -> Result<Option<Position>, String> {
        match self.config.controller(player) {
            Controller::Minimax => Ok(calculate_move(BotInput::from_game_state(state))),
            Controller::Human => self.prompt_human(player),
        }
    }

    fn prompt_human(&mut self, player: Player) -> Result<Option<Position>, String> {
        loop {
            self.write(&render_prompt(player))?;
            match read_move(&mut self.input) {
                Ok(pos) => return Ok(Some(pos)),
                Err(InputError::Closed) => {
                    log!("Input closed while waiting for {}", player);
                    self.write_line("")?;
                    return Ok(None);
                }
                Err(InputError::Read(err)) => return Err(format!("Failed to read move: {}", err)),
                Err(err) => {
                    log!("Rejected input from {}: {}", player, err);
                    self.write_line(&format!("{}, try again.", err))?;
                }
            }
        }
    }

    fn draw(&mut self, state: &TicTacToeGameState) -> Result<(), String> {
        if self.config.clear_screen {
            self.write(CLEAR_SCREEN)?;
        }
        self.write(&render_board(state.board()))
    }

    fn write(&mut self, text: &str) -> Result<(), String> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(|e| format!("Failed to write output: {}", e))
    }

    fn write_line(&mut self, text: &str) -> Result<(), String> {
        self.write(&format!("{}\n", text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FirstPlayerMode;
    use common::tictactoe::{Cell, GameStatus};
    use std::io::Cursor;

    fn play(config: &Config, first: Player, input: &str) -> (TicTacToeGameState, String) {
        let mut output = Vec::new();
        let state = GameRunner::new(config, Cursor::new(input.to_string()), &mut output)
            .run(first)
            .unwrap();
        (state, String::from_utf8(output).unwrap())
    }

    fn two_humans() -> Config {
        Config {
            agent: Controller::Human,
            human: Controller::Human,
            first_player: FirstPlayerMode::Agent,
            ..Config::default()
        }
    }

    #[test]
    fn test_two_humans_play_to_a_win() {
        // X takes the top row while O plays the middle row.
        let (state, output) = play(&two_humans(), Player::Agent, "0\n3\n1\n4\n2\n");
        assert_eq!(state.status(), GameStatus::AgentWon);
        assert!(output.ends_with("Agent (X) wins!\n"));
    }

    #[test]
    fn test_invalid_input_does_not_consume_turn() {
        // "9", "abc" and the occupied 0 are all rejected; O must still move.
        let (state, output) = play(&two_humans(), Player::Agent, "0\n9\nabc\n0\n4\n");
        assert_eq!(state.board().get(Position::new(0, 0)), Some(Cell::Agent));
        assert_eq!(state.board().get(Position::new(1, 1)), Some(Cell::Human));
        assert_eq!(state.status(), GameStatus::InProgress);
        assert!(output.contains("9 is out of range"));
        assert!(output.contains("'abc' is not a cell number"));
        assert!(output.contains("Cell is already marked, try again."));
    }

    #[test]
    fn test_closed_input_stops_game() {
        let (state, output) = play(&two_humans(), Player::Human, "");
        assert_eq!(state.status(), GameStatus::InProgress);
        assert!(output.ends_with("Game stopped.\n"));
    }

    #[test]
    fn test_agent_answers_after_each_human_move() {
        let config = Config::default();
        let (state, _) = play(&config, Player::Human, "4\n");
        // Human's center move plus the agent's reply.
        assert_eq!(state.board().count(Cell::Human), 1);
        assert_eq!(state.board().count(Cell::Agent), 1);
        assert_eq!(state.current_player(), Player::Human);
    }

    #[test]
    fn test_agent_takes_open_win() {
        let config = Config {
            first_player: FirstPlayerMode::Agent,
            ..Config::default()
        };
        // The agent opens at 0; the human ignores its threats.
        let (state, output) = play(&config, Player::Agent, "3\n5\n7\n8\n");
        assert_eq!(state.status(), GameStatus::AgentWon);
        assert!(output.ends_with("Agent (X) wins!\n"));
    }

    #[test]
    fn test_minimax_against_minimax_draws() {
        let config = Config {
            agent: Controller::Minimax,
            human: Controller::Minimax,
            ..Config::default()
        };
        let (state, output) = play(&config, Player::Agent, "");
        assert_eq!(state.status(), GameStatus::Draw);
        assert!(output.ends_with("Draw.\n"));
    }

    #[test]
    fn test_clear_screen_before_each_board() {
        let config = Config {
            clear_screen: true,
            ..two_humans()
        };
        let (_, output) = play(&config, Player::Agent, "0\n");
        assert_eq!(output.matches(CLEAR_SCREEN).count(), 2);
    }
}
