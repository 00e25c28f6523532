//! Rubik's Cube solving for the cubelace editor.
//!
//! The editor hands over a 54-character facelet string; this crate parses it
//! into a piece-level model, checks that it describes a reachable cube and
//! solves it with one of several strategies.
//!
//! # Overview
//!
//! - [`Move`] and [`MoveSequence`]: face turns in the usual notation
//!   (`R`, `U2`, `F'`).
//! - [`CubieCube`]: corner and edge permutation and orientation.
//! - [`FaceletCube`]: the sticker view, converted to and from facelet
//!   strings.
//! - [`method`]: the [`Method`] trait with the [`Beginner`], [`Cfop`] and
//!   [`Kociemba`] implementations.
//! - [`Solver`] and [`SolveStrategy`]: the entry point used by the editor,
//!   which verifies every solution before returning it.
//!
//! # Examples
//!
//! ```
//! use cubelace_solver::{SolveStrategy, solve};
//!
//! let solved = "yyyyyyyyygggggggggooooooooobbbbbbbbbrrrrrrrrrwwwwwwwww";
//! let solution = solve(solved, SolveStrategy::Cfop)?;
//! assert!(solution.is_empty());
//! # Ok::<(), cubelace_solver::SolveError>(())
//! ```

pub use self::{
    cubie::{Corner, CubieCube, Edge},
    error::*,
    facelet::{FaceletCube, FaceletError},
    kociemba::Kociemba,
    method::{Beginner, BoxedMethod, Cfop, Method},
    moves::*,
    strategy::*,
};

mod cubie;
mod error;
mod facelet;
mod kociemba;
pub mod method;
mod moves;
mod stage;
mod strategy;
pub mod testing;
