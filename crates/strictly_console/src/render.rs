//! Text-art board rendering.

use crate::config::ConsoleConfig;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::Write;
use strictly_tictactoe::{Board, Cell, Phase, Renderer, SessionError, View};
use tracing::instrument;

const COLUMN_LABELS: &str = "        1   2   3   ";
const BORDER: &str = "      #############";
const HELP: &str = "=> Enter `<row><col>` as coordinates on the board OR `q` to quit";

/// Draws frames as plain text to any writer (stdout in practice).
#[derive(Debug)]
pub struct ConsoleRenderer<W> {
    out: W,
    config: ConsoleConfig,
}

impl<W: Write> ConsoleRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W, config: ConsoleConfig) -> Self {
        Self { out, config }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Maps a cell to the character drawn for it.
    fn symbol(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => ' ',
            Cell::MarkA => *self.config.first_mark(),
            Cell::MarkB => *self.config.second_mark(),
        }
    }

    fn draw_board(&mut self, board: &Board) -> std::io::Result<()> {
        writeln!(self.out, "{COLUMN_LABELS}")?;
        for (index, row) in board.rows().iter().enumerate() {
            let label = index + 1;
            writeln!(self.out, "{BORDER}")?;
            write!(self.out, "    {label} ")?;
            for cell in row {
                let symbol = self.symbol(*cell);
                write!(self.out, "# {symbol} ")?;
            }
            writeln!(self.out, "# {label}")?;
        }
        writeln!(self.out, "{BORDER}")?;
        writeln!(self.out, "{COLUMN_LABELS}")
    }

    fn draw_error(&mut self, message: &str) -> std::io::Result<()> {
        if *self.config.color() {
            queue!(
                self.out,
                SetForegroundColor(Color::Red),
                Print(format!("=> {message}")),
                ResetColor,
                Print("\n")
            )
        } else {
            writeln!(self.out, "=> {message}")
        }
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    #[instrument(skip(self, view), fields(phase = ?view.phase))]
    fn render(&mut self, view: &View<'_>) -> Result<(), SessionError> {
        if *self.config.clear_screen() {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }

        self.draw_board(view.board)?;

        if let Some(feedback) = view.feedback {
            self.draw_error(&feedback.to_string())?;
        }

        match view.phase {
            Phase::AwaitingMove(player) => {
                writeln!(self.out, "{HELP}")?;
                write!(self.out, "=> {player}: ")?;
            }
            Phase::Won(player) => writeln!(self.out, "=> {player} won!")?,
            Phase::Draw => writeln!(self.out, "=> Draw! Try again :)")?,
            Phase::Quit => {}
        }

        self.out.flush()?;
        Ok(())
    }
}
