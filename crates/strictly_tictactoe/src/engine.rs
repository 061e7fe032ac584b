//! Turn engine for tic-tac-toe.
//!
//! The engine is a pure state machine: every transition consumes a
//! [`Game`] and returns the next one together with any feedback for the
//! player. Nothing here touches the console, which keeps the whole
//! turn-taking logic testable without I/O.
//!
//! ```text
//! AwaitingMove(p) --bad syntax-----> AwaitingMove(p)   + InvalidCommand
//! AwaitingMove(p) --occupied cell--> AwaitingMove(p)   + CellOccupied
//! AwaitingMove(p) --q--------------> Quit
//! AwaitingMove(p) --move, no end---> AwaitingMove(p')
//! AwaitingMove(p) --move, line-----> Won(p)
//! AwaitingMove(p) --move, full-----> Draw
//! ```

use crate::board::Board;
use crate::command::{Command, ParseError, parse};
use crate::rules::{GameOutcome, evaluate};
use crate::types::{CellAddress, Player};
use crate::validator::{MoveRejected, validate};
use derive_getters::Getters;
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the given player to move.
    AwaitingMove(Player),
    /// The player completed a line.
    Won(Player),
    /// The board filled up with no line.
    Draw,
    /// A player quit.
    Quit,
}

impl Phase {
    /// Returns true if no further input will be requested.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Phase::AwaitingMove(_))
    }

    /// Returns the player whose turn it is, if the game is still running.
    pub fn current_player(&self) -> Option<Player> {
        match self {
            Phase::AwaitingMove(player) => Some(*player),
            Phase::Won(_) | Phase::Draw | Phase::Quit => None,
        }
    }
}

/// Retryable problem with the last input, shown to the player once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, From)]
pub enum Feedback {
    /// The input was not a command.
    #[display("Invalid command. Try again!")]
    InvalidCommand(ParseError),
    /// The target cell was taken.
    #[display("Position already played. Please try again with different coordinates!")]
    CellOccupied(MoveRejected),
}

/// A game session's complete state: the board plus the phase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Game {
    /// The board.
    board: Board,
    /// Current phase.
    phase: Phase,
}

/// Result of feeding one input to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Transition {
    /// The game after the input.
    game: Game,
    /// Message for the player, if the input was rejected.
    feedback: Option<Feedback>,
}

impl Transition {
    /// Splits the transition into the game and its feedback.
    pub fn into_parts(self) -> (Game, Option<Feedback>) {
        (self.game, self.feedback)
    }

    fn accepted(game: Game) -> Self {
        Self {
            game,
            feedback: None,
        }
    }

    fn rejected(game: Game, feedback: impl Into<Feedback>) -> Self {
        Self {
            game,
            feedback: Some(feedback.into()),
        }
    }
}

impl Game {
    /// Creates a new game with an empty board and the first player to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            phase: Phase::AwaitingMove(Player::First),
        }
    }

    /// Returns the player to move, if the game is still running.
    pub fn to_move(&self) -> Option<Player> {
        self.phase.current_player()
    }

    /// Feeds one raw input line to the engine.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn step(self, raw: &str) -> Transition {
        if self.phase.is_terminal() {
            warn!("Input after game ended, ignoring");
            return Transition::accepted(self);
        }

        match parse(raw) {
            Ok(command) => self.apply(command),
            Err(err) => {
                debug!(input = raw, "Unparseable command");
                Transition::rejected(self, err)
            }
        }
    }

    /// Applies an already-parsed command.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn apply(self, command: Command) -> Transition {
        let Phase::AwaitingMove(player) = self.phase else {
            warn!("Command after game ended, ignoring");
            return Transition::accepted(self);
        };

        match command {
            Command::Quit => {
                info!(%player, "Player quit");
                Transition::accepted(Self {
                    phase: Phase::Quit,
                    ..self
                })
            }
            Command::Play(address) => self.play(player, address),
        }
    }

    fn play(mut self, player: Player, address: CellAddress) -> Transition {
        if let Err(rejected) = validate(&self.board, address) {
            return Transition::rejected(self, rejected);
        }

        self.board
            .place(address, player.mark())
            .unwrap_or_else(|err| panic!("validated move left the board: {err}"));

        self.phase = match evaluate(&self.board) {
            GameOutcome::Won(winner) => {
                info!(%winner, "Game won");
                Phase::Won(winner)
            }
            GameOutcome::Draw => {
                info!("Game drawn");
                Phase::Draw
            }
            GameOutcome::InProgress => Phase::AwaitingMove(player.opponent()),
        };
        debug!(%player, %address, phase = ?self.phase, "Move applied");

        Transition::accepted(self)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    fn play_all(moves: &[&str]) -> Game {
        moves.iter().fold(Game::new(), |game, raw| {
            let (game, feedback) = game.step(raw).into_parts();
            assert_eq!(feedback, None, "move {raw} rejected");
            game
        })
    }

    #[test]
    fn test_new_game_awaits_first_player() {
        let game = Game::new();
        assert_eq!(game.phase(), &Phase::AwaitingMove(Player::First));
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_accepted_move_switches_player() {
        let game = play_all(&["22"]);
        assert_eq!(game.to_move(), Some(Player::Second));
        assert_eq!(game.board().cell_at(CellAddress::new(2, 2)), Ok(Cell::MarkA));
    }

    #[test]
    fn test_bad_syntax_keeps_player_and_board() {
        let game = play_all(&["11"]);
        let (after, feedback) = game.clone().step("4 4").into_parts();
        assert_eq!(after, game);
        assert_eq!(
            feedback,
            Some(Feedback::InvalidCommand(ParseError::InvalidSyntax))
        );
    }

    #[test]
    fn test_occupied_cell_keeps_player_and_board() {
        let game = play_all(&["11"]);
        let (after, feedback) = game.clone().step("11").into_parts();
        assert_eq!(after, game);
        assert_eq!(after.to_move(), Some(Player::Second));
        assert_eq!(
            feedback,
            Some(Feedback::CellOccupied(MoveRejected::CellOccupied(
                CellAddress::new(1, 1)
            )))
        );
    }

    #[test]
    fn test_quit_leaves_board_untouched() {
        let game = play_all(&["13"]);
        let (after, feedback) = game.step("Q").into_parts();
        assert_eq!(after.phase(), &Phase::Quit);
        assert_eq!(after.board().marks_placed(), 1);
        assert_eq!(feedback, None);
    }

    #[test]
    fn test_winning_move_credits_mover() {
        let game = play_all(&["31", "11", "32", "22", "12", "33"]);
        assert_eq!(game.phase(), &Phase::Won(Player::Second));
        assert_eq!(game.to_move(), None);
    }

    #[test]
    fn test_terminal_game_ignores_input() {
        let game = play_all(&["11", "21", "12", "22", "13"]);
        assert_eq!(game.phase(), &Phase::Won(Player::First));

        let (after, feedback) = game.clone().step("33").into_parts();
        assert_eq!(after, game);
        assert_eq!(feedback, None);
    }

    #[test]
    fn test_feedback_messages() {
        assert_eq!(
            Feedback::from(ParseError::InvalidSyntax).to_string(),
            "Invalid command. Try again!"
        );
        assert_eq!(
            Feedback::from(MoveRejected::CellOccupied(CellAddress::new(1, 1))).to_string(),
            "Position already played. Please try again with different coordinates!"
        );
    }

    #[test]
    fn test_phase_terminality() {
        assert!(!Phase::AwaitingMove(Player::Second).is_terminal());
        assert!(Phase::Won(Player::First).is_terminal());
        assert!(Phase::Draw.is_terminal());
        assert!(Phase::Quit.is_terminal());
    }
}
