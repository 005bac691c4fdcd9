//! Streaming parser for the crate diagram and its move list.
//!
//! The input is read line by line through a single [`Split`] and interpreted
//! by a forward-only state machine:
//!
//! ```text
//! ReadingDiagramRows ──index row──▶ BuildingBoardFromDiagram ──▶ ReadingMoves
//! ```
//!
//! Diagram rows are buffered (as borrowed slices) until the index row shows
//! up.  The board is then built from the buffered rows bottom-to-top and the
//! remaining lines are parsed as moves.  [`StackParser`] exposes this as an
//! iterator of [`Event`]s: one `Board`, then one `Move` per instruction.

use crate::board::{Board, Move};
use crate::error::{Error, ErrorKind, Result};
use crate::split::Split;
use std::num::NonZeroUsize;

/// Distance between two stack columns in the diagram.
const COLUMN_STRIDE: usize = 4;
/// Column of the first stack's label (`[Z]` → `Z`).
const FIRST_COLUMN: usize = 1;

// ── Line classification ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    DiagramRow,
    /// The ` 1   2   3 ` row under the diagram.
    IndexRow,
    MoveLine,
    Blank,
}

/// Decide how a line should be read, from its shape alone.
pub fn classify(line: &str) -> LineKind {
    let trimmed = line.trim_ascii();
    if trimmed.is_empty() {
        LineKind::Blank
    } else if line.starts_with("move ") {
        LineKind::MoveLine
    } else if trimmed.starts_with('1')
        && trimmed.bytes().all(|b| b.is_ascii_digit() || b == b' ')
    {
        LineKind::IndexRow
    } else {
        LineKind::DiagramRow
    }
}

// ── State machine ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    ReadingDiagramRows,
    BuildingBoardFromDiagram { stacks: usize },
    ReadingMoves,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The initial board.  Always the first event.
    Board(Board),
    Move(Move),
}

pub struct StackParser<'src> {
    lines: Split<'src>,
    /// 1-based number of the last line pulled from `lines`.
    line_no: usize,
    state: ParserState,
    /// Buffered diagram rows with their line numbers, top row first.
    rows: Vec<(usize, &'src str)>,
    stacks: usize,
    /// Set after the input is exhausted or an error was reported.
    halted: bool,
}

impl<'src> StackParser<'src> {
    pub fn new(input: &'src str) -> Self {
        Self {
            lines: Split::lines(input),
            line_no: 0,
            state: ParserState::ReadingDiagramRows,
            rows: Vec::new(),
            stacks: 0,
            halted: false,
        }
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Number of stacks, known once the index row has been read.
    pub fn stacks(&self) -> usize {
        self.stacks
    }

    fn next_line(&mut self) -> Option<&'src str> {
        let line = self.lines.advance()?;
        self.line_no += 1;
        Some(line.strip_suffix('\r').unwrap_or(line))
    }

    fn error(&self, kind: ErrorKind) -> Error {
        Error::new(self.line_no.max(1), kind)
    }

    fn step(&mut self) -> Result<Option<Event>> {
        loop {
            match self.state {
                ParserState::ReadingDiagramRows => {
                    let Some(line) = self.next_line() else {
                        return Err(self.error(ErrorKind::MissingIndexRow));
                    };
                    match classify(line) {
                        LineKind::DiagramRow | LineKind::Blank => {
                            self.rows.push((self.line_no, line));
                        }
                        LineKind::IndexRow => {
                            let stacks = parse_index_row(line).map_err(|k| self.error(k))?;
                            self.stacks = stacks;
                            self.state = ParserState::BuildingBoardFromDiagram { stacks };
                        }
                        LineKind::MoveLine => {
                            return Err(self.error(ErrorKind::MissingIndexRow));
                        }
                    }
                }
                ParserState::BuildingBoardFromDiagram { stacks } => {
                    let board = build_board(&self.rows, stacks)?;
                    self.rows.clear();
                    self.state = ParserState::ReadingMoves;
                    return Ok(Some(Event::Board(board)));
                }
                ParserState::ReadingMoves => {
                    let Some(line) = self.next_line() else {
                        return Ok(None);
                    };
                    match classify(line) {
                        LineKind::Blank => continue,
                        LineKind::MoveLine => {
                            let mv = parse_move(line, self.line_no, self.stacks)?;
                            return Ok(Some(Event::Move(mv)));
                        }
                        LineKind::DiagramRow | LineKind::IndexRow => {
                            return Err(self.error(ErrorKind::UnexpectedLine));
                        }
                    }
                }
            }
        }
    }
}

impl Iterator for StackParser<'_> {
    type Item = Result<Event>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }
        match self.step() {
            Ok(Some(event)) => Some(Ok(event)),
            Ok(None) => {
                self.halted = true;
                None
            }
            Err(e) => {
                self.halted = true;
                Some(Err(e))
            }
        }
    }
}

// ── Whole-input parse ─────────────────────────────────────────────────────────

/// A parsed input: the initial board and every move, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub board: Board,
    pub moves: Vec<Move>,
}

/// Parse the whole input up front.
pub fn parse(input: &str) -> Result<Puzzle> {
    let mut board = None;
    let mut moves = Vec::new();
    for event in StackParser::new(input) {
        match event? {
            Event::Board(b) => board = Some(b),
            Event::Move(mv) => moves.push(mv),
        }
    }
    let board = board.ok_or(Error::new(1, ErrorKind::MissingIndexRow))?;
    Ok(Puzzle { board, moves })
}

// ── Pieces ────────────────────────────────────────────────────────────────────

/// Stack count from an index row such as ` 1   2   3 `.
fn parse_index_row(line: &str) -> std::result::Result<usize, ErrorKind> {
    let mut count = 0;
    for token in Split::tokens(line).filter(|t| !t.is_empty()) {
        let n = parse_number(token)?;
        if n != count + 1 {
            return Err(ErrorKind::MalformedIndexRow);
        }
        count = n;
    }
    if count == 0 {
        return Err(ErrorKind::MalformedIndexRow);
    }
    Ok(count)
}

fn build_board(rows: &[(usize, &str)], stacks: usize) -> Result<Board> {
    let mut board = Board::new(stacks);
    // Blank rows hold no crates and take up no level.
    let filled = rows
        .iter()
        .rev()
        .filter(|&&(_, row)| classify(row) != LineKind::Blank);
    for (level, &(line, row)) in filled.enumerate() {
        let bytes = row.as_bytes();
        let columns = (FIRST_COLUMN..bytes.len()).step_by(COLUMN_STRIDE);
        for (stack, column) in columns.enumerate() {
            let b = bytes[column];
            if b == b' ' {
                continue;
            }
            if stack >= stacks {
                return Err(Error::new(
                    line,
                    ErrorKind::CrateOutsideStacks { column: column + 1 },
                ));
            }
            if !b.is_ascii_graphic() {
                let c = row
                    .get(column..)
                    .and_then(|s| s.chars().next())
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(Error::new(line, ErrorKind::InvalidLabel(c)));
            }
            // Every row below must already have put a crate on this stack.
            if board.height(stack) != Some(level) {
                return Err(Error::new(line, ErrorKind::FloatingCrate { stack }));
            }
            board
                .push(stack, b)
                .map_err(|e| Error::new(line, ErrorKind::Move(e)))?;
        }
    }
    Ok(board)
}

/// Parse `move <qty> from <src> to <dst>`.
fn parse_move(line: &str, line_no: usize, stacks: usize) -> Result<Move> {
    let err = |kind| Error::new(line_no, kind);
    let mut tokens = Split::tokens(line.trim_end());

    let mut field = |keyword: &str| -> Result<usize> {
        if tokens.next() != Some(keyword) {
            return Err(err(ErrorKind::MalformedMove));
        }
        match tokens.next() {
            Some(token) if !token.is_empty() => parse_number(token).map_err(err),
            _ => Err(err(ErrorKind::MalformedMove)),
        }
    };
    let quantity = field("move")?;
    let from = field("from")?;
    let to = field("to")?;
    if tokens.next().is_some() {
        return Err(err(ErrorKind::MalformedMove));
    }

    let quantity = NonZeroUsize::new(quantity).ok_or(err(ErrorKind::ZeroQuantity))?;
    let index = |stack: usize| {
        if (1..=stacks).contains(&stack) {
            Ok(stack - 1)
        } else {
            Err(err(ErrorKind::StackOutOfRange { stack, stacks }))
        }
    };
    Ok(Move {
        quantity,
        from: index(from)?,
        to: index(to)?,
        line: line_no,
    })
}

fn parse_number(token: &str) -> std::result::Result<usize, ErrorKind> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ErrorKind::InvalidNumber(token.to_string()));
    }
    token
        .parse()
        .map_err(|_| ErrorKind::InvalidNumber(token.to_string()))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
