//! Kociemba's two-phase algorithm.
//!
//! Phase 1 brings the cube into the subgroup generated by
//! `<U, D, R2, L2, F2, B2>`: every corner and edge oriented and the
//! middle-slice edges inside the middle slice. Phase 2 then solves the cube
//! using only those moves. Both phases run an iterative-deepening search
//! guided by precomputed pruning tables.
//!
//! The tables take a moment to build and are shared by every solve in the
//! process.

use self::{search::Search, tables::Tables};
use crate::{BoxedMethod, CubieCube, Method, MoveSequence, SolveError};

mod coord;
mod search;
mod tables;

/// Solves with Kociemba's two-phase algorithm.
///
/// Returns the first solution within the length limit. Solutions are much
/// shorter than those of the staged methods, typically around twenty moves.
///
/// # Examples
///
/// ```
/// use cubelace_solver::{CubieCube, Kociemba, Method as _, MoveSequence};
///
/// let scramble: MoveSequence = "R U R' F2".parse()?;
/// let cube = CubieCube::from_moves(&scramble);
/// let solution = Kociemba::new().solve(&cube)?;
///
/// let mut check = cube;
/// check.apply_moves(&solution);
/// assert!(check.is_solved());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kociemba {
    max_length: usize,
}

impl Kociemba {
    /// The default length limit.
    pub const DEFAULT_MAX_LENGTH: usize = 30;

    /// Creates the method with the default length limit.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_max_length(Self::DEFAULT_MAX_LENGTH)
    }

    /// Creates the method with a custom length limit.
    #[must_use]
    pub const fn with_max_length(max_length: usize) -> Self {
        Self { max_length }
    }

    /// Returns the length limit.
    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }
}

impl Default for Kociemba {
    fn default() -> Self {
        Self::new()
    }
}

impl Method for Kociemba {
    fn name(&self) -> &'static str {
        "Kociemba"
    }

    fn clone_box(&self) -> BoxedMethod {
        Box::new(*self)
    }

    fn solve(&self, cube: &CubieCube) -> Result<MoveSequence, SolveError> {
        let path = Search::new(Tables::get(), *cube, self.max_length)
            .run()
            .ok_or(SolveError::NoSolution {
                max_length: self.max_length,
            })?;
        Ok(MoveSequence::from(path).simplified())
    }
}
