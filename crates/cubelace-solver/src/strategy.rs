use std::{fmt, str::FromStr};

use crate::{Beginner, BoxedMethod, Cfop, CubieCube, Kociemba, MoveSequence, SolveError};

/// The solving strategies offered to the user.
///
/// # Examples
///
/// ```
/// use cubelace_solver::SolveStrategy;
///
/// let strategy: SolveStrategy = "cfop".parse()?;
/// assert_eq!(strategy, SolveStrategy::Cfop);
/// assert_eq!(strategy.to_string(), "CFOP");
/// # Ok::<(), cubelace_solver::ParseStrategyError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum SolveStrategy {
    /// Layer by layer.
    Beginner,
    /// Cross, first two layers, orientation and permutation of the last layer.
    Cfop,
    /// Kociemba's two-phase algorithm.
    Kociemba,
}

impl SolveStrategy {
    /// Every strategy, in the order they are run.
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Cfop, Self::Kociemba];

    /// Returns the display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Cfop => "CFOP",
            Self::Kociemba => "Kociemba",
        }
    }

    /// Returns the method implementing this strategy with default settings.
    #[must_use]
    pub fn method(self) -> BoxedMethod {
        match self {
            Self::Beginner => Box::new(Beginner::new()),
            Self::Cfop => Box::new(Cfop::new()),
            Self::Kociemba => Box::new(Kociemba::new()),
        }
    }
}

impl fmt::Display for SolveStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a name matches no strategy.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown strategy: {name:?}")]
pub struct ParseStrategyError {
    name: String,
}

impl ParseStrategyError {
    /// Returns the name that failed to parse.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for SolveStrategy {
    type Err = ParseStrategyError;

    /// Parses a strategy name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseStrategyError { name: s.to_owned() })
    }
}

/// Solves facelet strings and checks every result.
///
/// # Examples
///
/// ```
/// use cubelace_solver::{SolveStrategy, Solver, testing};
///
/// let solver = Solver::new();
/// let cube = testing::scrambled("R U R' U'");
///
/// for strategy in SolveStrategy::ALL {
///     let solution = solver.solve(&cube, strategy)?;
///     println!("{strategy}: {solution}");
/// }
/// # Ok::<(), cubelace_solver::SolveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    kociemba: Kociemba,
}

impl Solver {
    /// Creates a solver with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            kociemba: Kociemba::new(),
        }
    }

    /// Sets the length limit of the two-phase search.
    #[must_use]
    pub const fn with_kociemba_max_length(mut self, max_length: usize) -> Self {
        self.kociemba = Kociemba::with_max_length(max_length);
        self
    }

    /// Returns the method this solver uses for `strategy`.
    #[must_use]
    pub fn method(&self, strategy: SolveStrategy) -> BoxedMethod {
        match strategy {
            SolveStrategy::Kociemba => Box::new(self.kociemba),
            SolveStrategy::Beginner | SolveStrategy::Cfop => strategy.method(),
        }
    }

    /// Parses `facelets` and solves it with `strategy`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidCube`] if the string does not describe a
    /// solvable cube, [`SolveError::Unsolved`] if the method returns a
    /// sequence that does not solve it, and any error of the method itself.
    pub fn solve(
        &self,
        facelets: &str,
        strategy: SolveStrategy,
    ) -> Result<MoveSequence, SolveError> {
        let cube = CubieCube::from_facelets(facelets)?;
        self.solve_cubie(&cube, strategy)
    }

    /// Solves an already parsed cube with `strategy`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Unsolved`] if the method returns a sequence that
    /// does not solve the cube, and any error of the method itself.
    pub fn solve_cubie(
        &self,
        cube: &CubieCube,
        strategy: SolveStrategy,
    ) -> Result<MoveSequence, SolveError> {
        let solution = self.method(strategy).solve(cube)?;

        let mut check = *cube;
        check.apply_moves(&solution);
        if !check.is_solved() {
            log::warn!("{strategy} produced a sequence that does not solve the cube");
            return Err(SolveError::Unsolved);
        }
        log::debug!("{strategy}: {} moves", solution.len());
        Ok(solution)
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

/// Solves `facelets` with `strategy` using a default [`Solver`].
///
/// # Errors
///
/// See [`Solver::solve`].
pub fn solve(facelets: &str, strategy: SolveStrategy) -> Result<MoveSequence, SolveError> {
    Solver::new().solve(facelets, strategy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FaceletError, Move, testing};

    #[test]
    fn test_names_round_trip() {
        for strategy in SolveStrategy::ALL {
            assert_eq!(strategy.name().parse::<SolveStrategy>().unwrap(), strategy);
            assert_eq!(strategy.method().name(), strategy.name());
        }
        assert_eq!(
            " kociemba ".parse::<SolveStrategy>().unwrap(),
            SolveStrategy::Kociemba
        );
        let err = "roux".parse::<SolveStrategy>().unwrap_err();
        assert_eq!(err.name(), "roux");
    }

    #[test]
    fn test_every_strategy_solves_a_scramble() {
        let scramble = "F2 D' R U2 L B' D2 F R' U L2 B";
        let facelets = testing::scrambled(scramble);
        let cube = testing::scrambled_cubie(scramble);
        for strategy in SolveStrategy::ALL {
            let solution = solve(&facelets, strategy).unwrap();
            testing::assert_solves(&cube, &solution);
        }
    }

    #[test]
    fn test_solved_cube() {
        let cube = testing::scrambled("");
        assert_eq!(cube, "yyyyyyyyygggggggggooooooooobbbbbbbbbrrrrrrrrrwwwwwwwww");
        for strategy in SolveStrategy::ALL {
            assert!(solve(&cube, strategy).unwrap().is_empty());
        }
    }

    #[test]
    fn test_invalid_cube_is_reported() {
        let err = solve("yyy", SolveStrategy::Beginner).unwrap_err();
        assert_eq!(
            err,
            SolveError::InvalidCube(FaceletError::InvalidLength { len: 3 })
        );

        // Swapping two stickers of one edge flips it.
        let mut chars: Vec<char> = testing::scrambled("").chars().collect();
        chars.swap(7, 19);
        let flipped: String = chars.into_iter().collect();
        let err = solve(&flipped, SolveStrategy::Kociemba).unwrap_err();
        assert!(err.is_invalid_cube());
    }

    #[test]
    fn test_kociemba_length_limit() {
        let solver = Solver::new().with_kociemba_max_length(1);
        let cube = testing::scrambled("R U");
        let err = solver.solve(&cube, SolveStrategy::Kociemba).unwrap_err();
        assert_eq!(err, SolveError::NoSolution { max_length: 1 });
        let solution = solver
            .solve(&testing::scrambled("R"), SolveStrategy::Kociemba)
            .unwrap();
        assert_eq!(solution.as_slice(), &[Move::R_PRIME]);
    }
}
