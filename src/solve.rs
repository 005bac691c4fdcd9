//! Solving: replay the move list under both policies and read the tops.

use crate::board::{Board, Move, Policy};
use crate::error::{Error, ErrorKind, Result};
use crate::parser::{Event, StackParser, parse};
use serde::Serialize;
use std::fmt;

/// Top-of-stack readouts for both policies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answers {
    /// Crates moved one at a time.
    #[serde(rename = "part1")]
    pub part_a: String,
    /// Crates moved as a block.
    #[serde(rename = "part2")]
    pub part_b: String,
}

impl fmt::Display for Answers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "part1={} part2={}", self.part_a, self.part_b)
    }
}

fn apply(board: &mut Board, mv: &Move, policy: Policy) -> Result<()> {
    board
        .apply(mv, policy)
        .map_err(|e| Error::new(mv.line, ErrorKind::Move(e)))
}

/// Solve in a single streaming pass.
///
/// Each move is applied to both boards as soon as it is parsed and then
/// dropped; no move list is built.
pub fn solve(input: &str) -> Result<Answers> {
    let mut boards: Option<(Board, Board)> = None;
    for event in StackParser::new(input) {
        match event? {
            Event::Board(board) => boards = Some((board.clone(), board)),
            Event::Move(mv) => {
                let Some((single, bulk)) = boards.as_mut() else {
                    return Err(Error::new(mv.line, ErrorKind::MissingIndexRow));
                };
                apply(single, &mv, Policy::SingleCrate)?;
                apply(bulk, &mv, Policy::Bulk)?;
            }
        }
    }
    let (single, bulk) = boards.ok_or(Error::new(1, ErrorKind::MissingIndexRow))?;
    Ok(Answers {
        part_a: single.top_labels(),
        part_b: bulk.top_labels(),
    })
}

/// Replay `moves` over a copy of `board` under one policy.
pub fn simulate(board: &Board, moves: &[Move], policy: Policy) -> Result<Board> {
    moves.iter().try_fold(board.clone(), |mut board, mv| {
        apply(&mut board, mv, policy)?;
        Ok(board)
    })
}

/// Solve by parsing the whole input first, then folding the move list once
/// per policy over independent boards.
pub fn solve_folded(input: &str) -> Result<Answers> {
    let puzzle = parse(input)?;
    let single = simulate(&puzzle.board, &puzzle.moves, Policy::SingleCrate)?;
    let bulk = simulate(&puzzle.board, &puzzle.moves, Policy::Bulk)?;
    Ok(Answers {
        part_a: single.top_labels(),
        part_b: bulk.top_labels(),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
