//! Strictly Tic-Tac-Toe - pure game logic for two players on a 3x3 grid
//!
//! # Architecture
//!
//! - **Board**: the grid of cells and the only place marks are written
//! - **Validator**: decides whether a move is legal
//! - **Rules**: win and draw detection over the eight lines
//! - **Command**: parsing of raw input lines (`<row><col>` or `q`)
//! - **Engine**: the turn-taking state machine, a pure `(game, input) -> (game, feedback)`
//! - **Session**: the loop driving the engine through [`LineSource`] and [`Renderer`]
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Game, Phase, Player};
//!
//! let game = ["11", "22", "12", "21", "13"]
//!     .iter()
//!     .fold(Game::new(), |game, input| game.step(input).into_parts().0);
//!
//! assert_eq!(game.phase(), &Phase::Won(Player::First));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod command;
mod engine;
mod error;
mod session;
mod types;
mod validator;

pub mod rules;

pub use board::{BOARD_SIZE, Board, OutOfBoundsError};
pub use command::{Command, ParseError, parse};
pub use engine::{Feedback, Game, Phase, Transition};
pub use error::SessionError;
pub use rules::{GameOutcome, evaluate};
pub use session::{LineSource, Renderer, Session, View};
pub use types::{Cell, CellAddress, Player};
pub use validator::{MoveRejected, validate};
