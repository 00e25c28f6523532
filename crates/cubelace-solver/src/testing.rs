//! Test utilities for solving methods.
//!
//! Scrambles are written in the usual move notation and turned into cubes
//! or facelet strings, so tests can describe cube states without spelling
//! out 54 stickers.
//!
//! # Example
//!
//! ```
//! use cubelace_solver::{Cfop, Method as _, testing};
//!
//! let cube = testing::scrambled_cubie("R U R' U'");
//! let solution = Cfop::new().solve(&cube)?;
//! testing::assert_solves(&cube, &solution);
//! # Ok::<(), cubelace_solver::SolveError>(())
//! ```

use cubelace_core::FaceSlot;

use crate::{CubieCube, FaceletCube, MoveSequence};

/// Scrambles used across tests and benchmarks.
pub const SCRAMBLES: [&str; 5] = [
    "R U R' U'",
    "F2 D' R U2 L B' D2 F R' U L2 B",
    "L2 U' B R2 D F' U2 R B2 L' D",
    "D B2 L' F U' R2 D2 B L U2 F' R D' L2 B'",
    "U' L F2 R' D B U2 L' F D2 R B' U F2 L' D R2",
];

/// The editor's solved colors, indexed by [`FaceSlot`].
pub const STANDARD_COLORS: [char; FaceSlot::COUNT] = {
    let mut colors = ['?'; FaceSlot::COUNT];
    let mut i = 0;
    while i < FaceSlot::COUNT {
        colors[i] = FaceSlot::ALL[i].solved_color().as_char();
        i += 1;
    }
    colors
};

/// Returns the cube reached from the solved state by `scramble`.
///
/// # Panics
///
/// Panics if `scramble` is not valid move notation.
#[must_use]
#[track_caller]
pub fn scrambled_cubie(scramble: &str) -> CubieCube {
    let moves: MoveSequence = scramble
        .parse()
        .unwrap_or_else(|e| panic!("invalid scramble {scramble:?}: {e}"));
    CubieCube::from_moves(&moves)
}

/// Returns the facelet string, in the editor's colors, of the cube reached
/// by `scramble`.
///
/// # Panics
///
/// Panics if `scramble` is not valid move notation.
#[must_use]
#[track_caller]
pub fn scrambled(scramble: &str) -> String {
    FaceletCube::from_cubie(&scrambled_cubie(scramble), STANDARD_COLORS).to_string()
}

/// Asserts that applying `solution` to `cube` solves it.
///
/// # Panics
///
/// Panics with the remaining state if the cube is not solved.
#[track_caller]
pub fn assert_solves(cube: &CubieCube, solution: &MoveSequence) {
    let mut result = *cube;
    result.apply_moves(solution);
    assert!(
        result.is_solved(),
        "solution {solution} leaves the cube at {}",
        FaceletCube::from_cubie(&result, STANDARD_COLORS)
    );
}
