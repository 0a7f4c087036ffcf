use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use rand::rngs::SmallRng;
use thiserror::Error;

use crate::board::Board;
use crate::common::MatchError;
use crate::coordinate::Coordinate;
use crate::observer::{MatchEvent, MatchObserver};

use super::Combatant;

const MOVE_PROMPT: &str = "Your move:";

/// Why a line of input is not a target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Anything other than exactly two values.
    #[error("enter 2 coordinates (got {0})")]
    WrongTokenCount(usize),
    #[error("enter numbers ('{0}' is not a number)")]
    NotANumber(String),
    #[error("'{0}' is too large")]
    OutOfRange(String),
}

/// Parse `"row col"` (1-indexed, whitespace separated) into a 0-indexed
/// [`Coordinate`]. Range checks against the board happen when firing.
pub fn parse_target(line: &str) -> Result<Coordinate, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let &[row, col] = tokens.as_slice() else {
        return Err(InputError::WrongTokenCount(tokens.len()));
    };
    let row = parse_number(row)?;
    let col = parse_number(col)?;
    Ok(Coordinate::from_one_based(row, col))
}

fn parse_number(token: &str) -> Result<i32, InputError> {
    if !token.chars().all(|c| c.is_ascii_digit()) {
        return Err(InputError::NotANumber(token.to_string()));
    }
    token
        .parse()
        .map_err(|_| InputError::OutOfRange(token.to_string()))
}

/// Line-oriented source of player input.
pub trait InputSource {
    /// Show `prompt` and read one line. Returns `Ok(None)` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// [`InputSource`] that prompts on a writer and reads from a buffered reader.
pub struct ConsoleInput<R, W> {
    read: R,
    write: W,
    buf: Vec<u8>,
}

impl<R, W> ConsoleInput<R, W> {
    pub fn new(read: R, write: W) -> Self {
        Self {
            read,
            write,
            buf: Vec::new(),
        }
    }

    /// Give back the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.read, self.write)
    }
}

impl ConsoleInput<StdinLock<'static>, Stdout> {
    /// Input from the process's stdin, prompts on stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> InputSource for ConsoleInput<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.write, "{} ", prompt)?;
        self.write.flush()?;
        self.buf.clear();
        if self.read.read_until(b'\n', &mut self.buf)? == 0 {
            writeln!(self.write)?;
            return Ok(None);
        }
        // invalid UTF-8 is left for the parser to reject
        Ok(Some(String::from_utf8_lossy(&self.buf).trim().to_string()))
    }
}

/// Player at the keyboard.
pub struct HumanCombatant<I> {
    input: I,
}

impl<I: InputSource> HumanCombatant<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }

    pub fn into_input(self) -> I {
        self.input
    }
}

impl<I: InputSource> Combatant for HumanCombatant<I> {
    /// Prompt until a line parses as two numbers. Malformed lines are
    /// reported and never touch either board.
    fn choose_target(
        &mut self,
        _rng: &mut SmallRng,
        _opponent: &Board,
        observer: &mut dyn MatchObserver,
    ) -> Result<Coordinate, MatchError> {
        loop {
            let Some(line) = self.input.read_line(MOVE_PROMPT)? else {
                return Err(MatchError::InputClosed);
            };
            match parse_target(&line) {
                Ok(target) => return Ok(target),
                Err(error) => observer.notify(&MatchEvent::InputRejected(error)),
            }
        }
    }
}
