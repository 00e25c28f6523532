//! Solving methods.
//!
//! Each method implements the [`Method`] trait and turns a [`CubieCube`]
//! into a move sequence that solves it:
//!
//! - [`Beginner`]: layer by layer with a handful of basic algorithms
//! - [`Cfop`]: cross, paired first two layers, then orientation and
//!   permutation of the last layer
//! - [`Kociemba`](crate::Kociemba): the two-phase algorithm, producing short
//!   solutions
//!
//! The staged methods share the cross and the algorithm helpers defined
//! here.

use std::{fmt::Debug, sync::OnceLock};

pub use self::{beginner::Beginner, cfop::Cfop};
use crate::{
    Corner, CubieCube, Edge, Move, MoveFace, MoveSequence, SolveError,
    stage::{Goal, Macro, PatternTable, Piece, Stage},
};

mod beginner;
mod cfop;

/// A strategy that solves a cube.
pub trait Method: Debug + Send + Sync {
    /// Returns the display name of the method.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the method.
    fn clone_box(&self) -> BoxedMethod;

    /// Finds a move sequence that takes `cube` to the solved state.
    ///
    /// The result is not necessarily verified; use
    /// [`Solver`](crate::Solver) to get verified solutions.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError`] if the method cannot find a solution.
    fn solve(&self, cube: &CubieCube) -> Result<MoveSequence, SolveError>;
}

/// A boxed method.
pub type BoxedMethod = Box<dyn Method>;

impl Clone for BoxedMethod {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

use Move as M;

/// `R U R' U'`
pub(crate) const SEXY: &[Move] = &[M::R, M::U, M::R_PRIME, M::U_PRIME];
/// `F R U R' U' F'`
pub(crate) const EDGE_FLIP: &[Move] = &[M::F, M::R, M::U, M::R_PRIME, M::U_PRIME, M::F_PRIME];
/// `R U R' U R U2 R'`
pub(crate) const SUNE: &[Move] = &[M::R, M::U, M::R_PRIME, M::U, M::R, M::U2, M::R_PRIME];

/// The first-two-layers slots, as (corner, edge). Slot `k` is slot 0 seen
/// after `k` `y` rotations.
pub(crate) const SLOTS: [(Corner, Edge); 4] = [
    (Corner::Dfr, Edge::Fr),
    (Corner::Drb, Edge::Br),
    (Corner::Dbl, Edge::Bl),
    (Corner::Dlf, Edge::Fl),
];

pub(crate) const CROSS_EDGES: [Edge; 4] = [Edge::Df, Edge::Dr, Edge::Db, Edge::Dl];
pub(crate) const LAST_LAYER_EDGES: [Edge; 4] = [Edge::Uf, Edge::Ur, Edge::Ub, Edge::Ul];
pub(crate) const LAST_LAYER_CORNERS: [Corner; 4] =
    [Corner::Urf, Corner::Ubr, Corner::Ulb, Corner::Ufl];

/// Returns `moves` as seen after `times` `y` rotations.
pub(crate) fn rotated(moves: &[Move], times: usize) -> Vec<Move> {
    moves
        .iter()
        .map(|&m| (0..times % 4).fold(m, |m, _| m.rotate_y()))
        .collect()
}

/// Returns the sequence that undoes `moves`.
pub(crate) fn inverted(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|m| m.inverse()).collect()
}

/// Returns `U^times moves U^-times`.
pub(crate) fn conjugated_by_u(moves: &[Move], times: u8) -> Vec<Move> {
    if times % 4 == 0 {
        return moves.to_vec();
    }
    let setup = Move::new(MoveFace::U, times % 4);
    let mut out = Vec::with_capacity(moves.len() + 2);
    out.push(setup);
    out.extend_from_slice(moves);
    out.push(setup.inverse());
    out
}

/// `U`, `U2` and `U'` as single-move macros.
pub(crate) fn u_turns() -> [Macro; 3] {
    [M::U, M::U2, M::U_PRIME].map(|m| Macro::new(vec![m]))
}

/// The four rotations of `moves`, optionally with their inverses.
pub(crate) fn all_angles(moves: &[Move], with_inverse: bool) -> Vec<Macro> {
    let mut macros: Vec<Macro> = (0..4).map(|k| Macro::new(rotated(moves, k))).collect();
    if with_inverse {
        let inverse = inverted(moves);
        macros.extend((0..4).map(|k| Macro::new(rotated(&inverse, k))));
    }
    macros
}

pub(crate) fn corner_solved(cube: &CubieCube, corner: Corner) -> bool {
    cube.find_corner(corner) == (corner, 0)
}

pub(crate) fn edge_solved(cube: &CubieCube, edge: Edge) -> bool {
    cube.find_edge(edge) == (edge, 0)
}

pub(crate) fn slot_solved(cube: &CubieCube, k: usize) -> bool {
    let (corner, edge) = SLOTS[k];
    corner_solved(cube, corner) && edge_solved(cube, edge)
}

pub(crate) fn last_layer_pieces() -> impl Iterator<Item = Piece> {
    LAST_LAYER_CORNERS
        .into_iter()
        .map(Piece::Corner)
        .chain(LAST_LAYER_EDGES.into_iter().map(Piece::Edge))
}

#[cfg(test)]
pub(crate) fn first_two_layers() -> Vec<Piece> {
    CROSS_EDGES
        .into_iter()
        .map(Piece::Edge)
        .chain(
            SLOTS
                .into_iter()
                .flat_map(|(c, e)| [Piece::Corner(c), Piece::Edge(e)]),
        )
        .collect()
}

/// The four D-layer edges, solved with single face turns from a shared
/// distance table.
pub(crate) fn cross() -> &'static PatternTable {
    static CROSS: OnceLock<PatternTable> = OnceLock::new();
    CROSS.get_or_init(|| {
        PatternTable::build(
            Stage::new("cross")
                .targets(CROSS_EDGES.map(Piece::Edge), Goal::Solved)
                .with_macros(Move::ALL.map(|m| Macro::new(vec![m]))),
        )
    })
}
