//! The interaction loop that connects the engine to its I/O adapters.

use crate::board::Board;
use crate::command::Command;
use crate::engine::{Feedback, Game, Phase};
use crate::error::SessionError;
use derive_new::new;
use tracing::{debug, info, instrument};

/// Source of raw player input, one line per call.
pub trait LineSource {
    /// Blocks until the player submits a line.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>, SessionError>;
}

/// Everything an output adapter needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct View<'a> {
    /// Board to draw.
    pub board: &'a Board,
    /// Phase to announce or prompt for.
    pub phase: Phase,
    /// One-shot message about the previous input.
    pub feedback: Option<Feedback>,
}

/// Sink for rendered frames.
pub trait Renderer {
    /// Draws the board, the pending message (if any) and the prompt or
    /// final announcement implied by the phase.
    fn render(&mut self, view: &View<'_>) -> Result<(), SessionError>;
}

/// One game between two players sharing an input and an output adapter.
#[derive(Debug, new)]
pub struct Session<I, R> {
    input: I,
    renderer: R,
}

impl<I: LineSource, R: Renderer> Session<I, R> {
    /// Plays a game to completion and returns the final state.
    ///
    /// A quitting game returns without drawing again. A won or drawn game
    /// gets one last frame showing the deciding move. Running out of input
    /// counts as quitting.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Game, SessionError> {
        let mut game = Game::new();
        let mut feedback = None;

        loop {
            self.renderer
                .render(&View::new(game.board(), *game.phase(), feedback.take()))?;

            let transition = match self.input.read_line()? {
                Some(line) => game.step(&line),
                None => {
                    info!("Input closed, quitting");
                    game.apply(Command::Quit)
                }
            };
            (game, feedback) = transition.into_parts();

            match game.phase() {
                Phase::AwaitingMove(player) => {
                    debug!(%player, retry = feedback.is_some(), "Awaiting move");
                }
                Phase::Quit => return Ok(game),
                Phase::Won(_) | Phase::Draw => {
                    self.renderer
                        .render(&View::new(game.board(), *game.phase(), None))?;
                    return Ok(game);
                }
            }
        }
    }

    /// Consumes the session, handing back its adapters.
    pub fn into_parts(self) -> (I, R) {
        (self.input, self.renderer)
    }
}
