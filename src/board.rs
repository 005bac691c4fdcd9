//! Board model: stacks of crate labels and the two move policies.

use crate::error::MoveError;
use std::fmt;
use std::num::NonZeroUsize;

/// A single instruction: move `quantity` crates from `from` to `to`.
///
/// Stack indices are 0-based; the input text is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub quantity: NonZeroUsize,
    pub from: usize,
    pub to: usize,
    /// 1-based input line the move was read from.
    pub line: usize,
}

/// How a multi-crate move reorders the crates it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// One crate at a time: the moved run ends up reversed.
    SingleCrate,
    /// The whole run at once: relative order is preserved.
    Bulk,
}

/// Stacks of single-character crate labels, indexed left to right.
///
/// Each stack is stored bottom-first, so the top crate is the last element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    stacks: Vec<Vec<u8>>,
}

impl Board {
    /// A board with `stacks` empty stacks.
    pub fn new(stacks: usize) -> Self {
        Self {
            stacks: vec![Vec::new(); stacks],
        }
    }

    /// Build a board from bottom-first label strings.
    ///
    /// Mostly useful in tests: `Board::from_stacks(&["ZN", "MCD", "P"])`.
    pub fn from_stacks(stacks: &[&str]) -> Self {
        Self {
            stacks: stacks.iter().map(|s| s.as_bytes().to_vec()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// Labels of stack `index`, bottom first.
    pub fn stack(&self, index: usize) -> Option<&[u8]> {
        self.stacks.get(index).map(Vec::as_slice)
    }

    pub fn height(&self, index: usize) -> Option<usize> {
        self.stacks.get(index).map(Vec::len)
    }

    /// Total number of crates on the board.
    pub fn crates(&self) -> usize {
        self.stacks.iter().map(Vec::len).sum()
    }

    /// Push `label` on top of stack `index`.
    pub fn push(&mut self, index: usize, label: u8) -> Result<(), MoveError> {
        let stacks = self.stacks.len();
        let stack = self
            .stacks
            .get_mut(index)
            .ok_or(MoveError::StackOutOfRange {
                stack: index,
                stacks,
            })?;
        stack.push(label);
        Ok(())
    }

    /// Apply `mv` under `policy`.
    ///
    /// Fails without touching the board if either stack index is out of
    /// range or the source holds fewer crates than requested.
    pub fn apply(&mut self, mv: &Move, policy: Policy) -> Result<(), MoveError> {
        let stacks = self.stacks.len();
        for stack in [mv.from, mv.to] {
            if stack >= stacks {
                return Err(MoveError::StackOutOfRange { stack, stacks });
            }
        }
        let quantity = mv.quantity.get();
        let available = self.stacks[mv.from].len();
        let Some(at) = available.checked_sub(quantity) else {
            return Err(MoveError::NotEnoughCrates {
                stack: mv.from,
                requested: quantity,
                available,
            });
        };
        if mv.from == mv.to {
            // Both policies put the run straight back where it was.
            return Ok(());
        }

        let (from, to) = pair_mut(&mut self.stacks, mv.from, mv.to);
        let moved = from.drain(at..);
        match policy {
            Policy::SingleCrate => to.extend(moved.rev()),
            Policy::Bulk => to.extend(moved),
        }
        Ok(())
    }

    /// Top label of every stack, `None` for empty stacks.
    pub fn tops(&self) -> Vec<Option<char>> {
        self.stacks
            .iter()
            .map(|s| s.last().map(|&b| b as char))
            .collect()
    }

    /// Concatenated top labels, left to right.  Empty stacks are skipped.
    pub fn top_labels(&self) -> String {
        self.tops().into_iter().flatten().collect()
    }
}

/// Two distinct mutable stacks out of one slice.
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = items.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = items.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

impl fmt::Display for Board {
    /// Render in the puzzle's own diagram format, index row included.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let height = self.stacks.iter().map(Vec::len).max().unwrap_or(0);
        for level in (0..height).rev() {
            let row: Vec<String> = self
                .stacks
                .iter()
                .map(|s| match s.get(level) {
                    Some(&b) => format!("[{}]", b as char),
                    None => "   ".to_string(),
                })
                .collect();
            writeln!(f, "{}", row.join(" ").trim_end())?;
        }
        let index: Vec<String> = (1..=self.stacks.len()).map(|i| format!(" {i} ")).collect();
        write!(f, "{}", index.join(" ").trim_end())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
