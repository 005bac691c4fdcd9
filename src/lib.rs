//! Zero-copy solver for the crate-stacking puzzle.
//!
//! The input (a crate diagram, an index row, then `move N from A to B` lines)
//! is split into borrowed lines by [`split::Split`], read by the streaming
//! state machine in [`parser`], and replayed by [`solve`] under two move
//! policies.
//!
//! ```
//! let input = "    [D]    \n[N] [C]    \n[Z] [M] [P]\n 1   2   3 \n\n\
//!              move 1 from 2 to 1\nmove 3 from 1 to 3\n\
//!              move 2 from 2 to 1\nmove 1 from 1 to 2\n";
//! let answers = crane::solve::solve(input).unwrap();
//! assert_eq!(answers.part_a, "CMZ");
//! assert_eq!(answers.part_b, "MCD");
//! ```

pub mod board;
pub mod discovery;
pub mod error;
pub mod parser;
pub mod runner;
pub mod solve;
pub mod split;
