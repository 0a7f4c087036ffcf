//! Text presentation of boards and match events.

use std::fmt;
use std::io::{self, Write};

use crate::board::{Board, CellState};
use crate::common::BoardError;
use crate::game::Side;
use crate::observer::{MatchEvent, MatchObserver};

pub const EMPTY_GLYPH: char = 'O';
pub const SHIP_GLYPH: char = '■';
pub const HIT_GLYPH: char = 'X';
pub const MISS_GLYPH: char = '.';

const DIVIDER: &str = "------------";

/// Character shown for a cell. Ships read as water on a concealed board.
pub fn cell_glyph(state: CellState, concealed: bool) -> char {
    match state {
        CellState::Empty => EMPTY_GLYPH,
        CellState::Ship if concealed => EMPTY_GLYPH,
        CellState::Ship => SHIP_GLYPH,
        CellState::Hit => HIT_GLYPH,
        CellState::Miss | CellState::Margin => MISS_GLYPH,
    }
}

/// Grid rendering of a board with 1-indexed row and column headers.
///
/// ```text
///   | 1 | 2 | 3 |
/// 1 | O | ■ | . |
/// ```
pub struct BoardView<'a>(pub &'a Board);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        let width = board.size().to_string().len();
        write!(f, "{:width$} |", "")?;
        for c in 1..=board.size() {
            write!(f, " {:^width$} |", c)?;
        }
        for (r, row) in board.rows().enumerate() {
            write!(f, "\n{:<width$} |", r + 1)?;
            for &state in row {
                write!(f, " {:^width$} |", cell_glyph(state, board.is_concealed()))?;
            }
        }
        Ok(())
    }
}

/// Render `board` to a string.
pub fn render_board(board: &Board) -> String {
    BoardView(board).to_string()
}

/// Banner shown before the match.
pub fn greeting() -> String {
    [
        "-------------------",
        "    Sea Battle     ",
        "-------------------",
        " input format: x y ",
        " x - row number    ",
        " y - column number ",
        "-------------------",
    ]
    .join("\n")
}

/// Writes both boards, the first side's on top.
pub fn write_boards<W: Write>(
    out: &mut W,
    first: (&str, &Board),
    second: (&str, &Board),
) -> io::Result<()> {
    writeln!(out, "{}:", first.0)?;
    writeln!(out, "{}", BoardView(first.1))?;
    writeln!(out, "{}", DIVIDER)?;
    writeln!(out, "{}:", second.0)?;
    writeln!(out, "{}", BoardView(second.1))?;
    writeln!(out, "{}", DIVIDER)
}

/// [`MatchObserver`] printing one line per event.
pub struct ConsoleReporter<W> {
    out: W,
    names: [String; 2],
    error: Option<io::Error>,
}

impl<W: Write> ConsoleReporter<W> {
    /// Reporter naming the sides "Player" and "Computer".
    pub fn new(out: W) -> Self {
        Self::with_names(out, "Player", "Computer")
    }

    pub fn with_names(out: W, first: &str, second: &str) -> Self {
        Self {
            out,
            names: [first.to_string(), second.to_string()],
            error: None,
        }
    }

    /// First write error hit while reporting, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn name(&self, side: Side) -> &str {
        match side {
            Side::First => &self.names[0],
            Side::Second => &self.names[1],
        }
    }

    fn message(&self, event: &MatchEvent) -> String {
        match event {
            MatchEvent::TurnStarted(side) => format!("Turn: {}", self.name(*side)),
            MatchEvent::ShotFired { side, target } => {
                format!("{} shot at {}", self.name(*side), target)
            }
            MatchEvent::Miss { .. } => "Miss".to_string(),
            MatchEvent::Hit { .. } => "Ship hit!".to_string(),
            MatchEvent::Sunk { .. } => "Ship destroyed!".to_string(),
            MatchEvent::TargetRejected { error, .. } => match error {
                BoardError::OutOfBoundsFire(_) => "You cannot fire outside the board".to_string(),
                BoardError::AlreadyTargeted(_) => "That cell has already been targeted".to_string(),
                other => other.to_string(),
            },
            MatchEvent::InputRejected(error) => capitalize(&error.to_string()),
            MatchEvent::MatchWon(side) => format!("{}\nWinner: {}", DIVIDER, self.name(*side)),
        }
    }
}

impl<W: Write> MatchObserver for ConsoleReporter<W> {
    fn notify(&mut self, event: &MatchEvent) {
        let line = self.message(event);
        if let Err(e) = writeln!(self.out, "{}", line) {
            self.error.get_or_insert(e);
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
