//! Error types for parsing and simulation.
//!
//! Every failure is fatal for the run that hit it.  Parse errors carry the
//! 1-based line they were found on; move failures carry the line of the
//! offending instruction.

use std::fmt;

/// A failure while applying a single move to a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The source stack holds fewer crates than the move asks for.
    NotEnoughCrates {
        stack: usize,
        requested: usize,
        available: usize,
    },
    StackOutOfRange { stack: usize, stacks: usize },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Stacks are reported 1-based, as written in the input.
        match self {
            MoveError::NotEnoughCrates {
                stack,
                requested,
                available,
            } => write!(
                f,
                "cannot move {requested} crate(s) from stack {}: only {available} present",
                stack + 1
            ),
            MoveError::StackOutOfRange { stack, stacks } => {
                write!(f, "stack {} does not exist (board has {stacks})", stack + 1)
            }
        }
    }
}

impl std::error::Error for MoveError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A token that should be a decimal integer is not.
    InvalidNumber(String),
    /// A move line that does not read `move <n> from <a> to <b>`.
    MalformedMove,
    ZeroQuantity,
    /// A 1-based stack reference outside `1..=stacks`.
    StackOutOfRange { stack: usize, stacks: usize },
    /// The input ended (or moves started) before the index row.
    MissingIndexRow,
    /// The index row is not `1 2 … N`.
    MalformedIndexRow,
    InvalidLabel(char),
    /// A crate sits at a column past the last stack.
    CrateOutsideStacks { column: usize },
    /// A crate sits above an empty slot of the same stack.
    FloatingCrate { stack: usize },
    /// A diagram or index row after the moves have started.
    UnexpectedLine,
    Move(MoveError),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidNumber(token) => write!(f, "invalid number `{token}`"),
            ErrorKind::MalformedMove => {
                write!(f, "malformed move, expected `move <n> from <a> to <b>`")
            }
            ErrorKind::ZeroQuantity => write!(f, "move quantity must be at least 1"),
            ErrorKind::StackOutOfRange { stack, stacks } => {
                write!(f, "stack {stack} does not exist (board has {stacks})")
            }
            ErrorKind::MissingIndexRow => write!(f, "stack index row not found"),
            ErrorKind::MalformedIndexRow => {
                write!(f, "stack index row must list 1 2 … N in order")
            }
            ErrorKind::InvalidLabel(c) => write!(f, "invalid crate label {c:?}"),
            ErrorKind::CrateOutsideStacks { column } => {
                write!(f, "crate at column {column} is outside every stack")
            }
            ErrorKind::FloatingCrate { stack } => {
                write!(f, "crate in stack {} rests on an empty slot", stack + 1)
            }
            ErrorKind::UnexpectedLine => write!(f, "unexpected line among moves"),
            ErrorKind::Move(e) => write!(f, "{e}"),
        }
    }
}

/// A fatal error tagged with the 1-based input line it refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub line: usize,
    pub kind: ErrorKind,
}

impl Error {
    pub fn new(line: usize, kind: ErrorKind) -> Self {
        Self { line, kind }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Move(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
