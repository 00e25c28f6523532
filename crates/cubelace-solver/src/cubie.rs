//! The cubie-level model: where each corner and edge piece sits and how it
//! is twisted.
//!
//! A [`CubieCube`] describes a cube state as the permutation and orientation
//! of its 8 corners and 12 edges. Centers never move. Moves are applied by
//! multiplying with the fixed cube of a basic face turn.

use std::sync::LazyLock;

use crate::Move;

/// A corner position (and the corner piece that belongs there).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[expect(missing_docs)]
pub enum Corner {
    Urf = 0,
    Ufl,
    Ulb,
    Ubr,
    Dfr,
    Dlf,
    Dbl,
    Drb,
}

impl Corner {
    /// All corners in index order.
    pub const ALL: [Self; 8] = [
        Self::Urf,
        Self::Ufl,
        Self::Ulb,
        Self::Ubr,
        Self::Dfr,
        Self::Dlf,
        Self::Dbl,
        Self::Drb,
    ];

    /// Returns the index of this corner (0-7).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// An edge position (and the edge piece that belongs there).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[expect(missing_docs)]
pub enum Edge {
    Ur = 0,
    Uf,
    Ul,
    Ub,
    Dr,
    Df,
    Dl,
    Db,
    Fr,
    Fl,
    Bl,
    Br,
}

impl Edge {
    /// All edges in index order.
    pub const ALL: [Self; 12] = [
        Self::Ur,
        Self::Uf,
        Self::Ul,
        Self::Ub,
        Self::Dr,
        Self::Df,
        Self::Dl,
        Self::Db,
        Self::Fr,
        Self::Fl,
        Self::Bl,
        Self::Br,
    ];

    /// Returns the index of this edge (0-11).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns `true` for the four edges between the U and D layers.
    #[must_use]
    pub const fn is_slice(self) -> bool {
        self.index() >= Self::Fr.index()
    }
}

/// Cube state at the cubie level.
///
/// `cp[i]` is the corner piece sitting at position `i` and `co[i]` its twist
/// (0-2); `ep`/`eo` are the same for edges with a flip of 0-1.
///
/// # Examples
///
/// ```
/// use cubelace_solver::{CubieCube, Move};
///
/// let mut cube = CubieCube::SOLVED;
/// cube.apply_move(Move::R);
/// assert!(!cube.is_solved());
/// cube.apply_move(Move::R_PRIME);
/// assert!(cube.is_solved());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CubieCube {
    pub(crate) cp: [Corner; 8],
    pub(crate) co: [u8; 8],
    pub(crate) ep: [Edge; 12],
    pub(crate) eo: [u8; 12],
}

use Corner::{Dbl, Dfr, Dlf, Drb, Ubr, Ufl, Ulb, Urf};
use Edge::{Bl, Br, Db, Df, Dl, Dr, Fl, Fr, Ub, Uf, Ul, Ur};

/// Clockwise quarter turns of each face, in [`MoveFace`](crate::MoveFace) order.
const BASIC_MOVES: [CubieCube; 6] = [
    // U
    CubieCube {
        cp: [Ubr, Urf, Ufl, Ulb, Dfr, Dlf, Dbl, Drb],
        co: [0; 8],
        ep: [Ub, Ur, Uf, Ul, Dr, Df, Dl, Db, Fr, Fl, Bl, Br],
        eo: [0; 12],
    },
    // R
    CubieCube {
        cp: [Dfr, Ufl, Ulb, Urf, Drb, Dlf, Dbl, Ubr],
        co: [2, 0, 0, 1, 1, 0, 0, 2],
        ep: [Fr, Uf, Ul, Ub, Br, Df, Dl, Db, Dr, Fl, Bl, Ur],
        eo: [0; 12],
    },
    // F
    CubieCube {
        cp: [Ufl, Dlf, Ulb, Ubr, Urf, Dfr, Dbl, Drb],
        co: [1, 2, 0, 0, 2, 1, 0, 0],
        ep: [Ur, Fl, Ul, Ub, Dr, Fr, Dl, Db, Uf, Df, Bl, Br],
        eo: [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
    },
    // D
    CubieCube {
        cp: [Urf, Ufl, Ulb, Ubr, Dlf, Dbl, Drb, Dfr],
        co: [0; 8],
        ep: [Ur, Uf, Ul, Ub, Df, Dl, Db, Dr, Fr, Fl, Bl, Br],
        eo: [0; 12],
    },
    // L
    CubieCube {
        cp: [Urf, Ulb, Dbl, Ubr, Dfr, Ufl, Dlf, Drb],
        co: [0, 1, 2, 0, 0, 2, 1, 0],
        ep: [Ur, Uf, Bl, Ub, Dr, Df, Fl, Db, Fr, Ul, Dl, Br],
        eo: [0; 12],
    },
    // B
    CubieCube {
        cp: [Urf, Ufl, Ubr, Drb, Dfr, Dlf, Ulb, Dbl],
        co: [0, 0, 1, 2, 0, 0, 2, 1],
        ep: [Ur, Uf, Ul, Br, Dr, Df, Dl, Bl, Fr, Fl, Ub, Db],
        eo: [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
    },
];

static MOVE_CUBES: LazyLock<[CubieCube; Move::COUNT]> = LazyLock::new(|| {
    Move::ALL.map(|m| {
        let basic = &BASIC_MOVES[m.face().index()];
        let mut cube = CubieCube::SOLVED;
        for _ in 0..m.quarters() {
            cube.multiply(basic);
        }
        cube
    })
});

impl CubieCube {
    /// The solved cube.
    pub const SOLVED: Self = Self {
        cp: Corner::ALL,
        co: [0; 8],
        ep: Edge::ALL,
        eo: [0; 12],
    };

    /// Returns the cube reached from the solved state by a single move.
    #[must_use]
    pub fn from_move(m: Move) -> Self {
        MOVE_CUBES[m.index()]
    }

    /// Returns the cube reached from the solved state by `moves`.
    #[must_use]
    pub fn from_moves<'a>(moves: impl IntoIterator<Item = &'a Move>) -> Self {
        let mut cube = Self::SOLVED;
        cube.apply_moves(moves);
        cube
    }

    /// Returns the corner piece at `position` and its twist.
    #[must_use]
    pub const fn corner_at(&self, position: Corner) -> (Corner, u8) {
        (self.cp[position.index()], self.co[position.index()])
    }

    /// Returns the edge piece at `position` and its flip.
    #[must_use]
    pub const fn edge_at(&self, position: Edge) -> (Edge, u8) {
        (self.ep[position.index()], self.eo[position.index()])
    }

    /// Returns the position of `corner` and its twist there.
    #[must_use]
    pub fn find_corner(&self, corner: Corner) -> (Corner, u8) {
        let i = self.cp.iter().position(|&c| c == corner).unwrap_or_default();
        (Corner::ALL[i], self.co[i])
    }

    /// Returns the position of `edge` and its flip there.
    #[must_use]
    pub fn find_edge(&self, edge: Edge) -> (Edge, u8) {
        let i = self.ep.iter().position(|&e| e == edge).unwrap_or_default();
        (Edge::ALL[i], self.eo[i])
    }

    /// Replaces `self` with `self * other` for the corners only.
    pub fn multiply_corners(&mut self, other: &Self) {
        let (cp, co) = (self.cp, self.co);
        for i in 0..8 {
            let from = other.cp[i].index();
            self.cp[i] = cp[from];
            self.co[i] = (co[from] + other.co[i]) % 3;
        }
    }

    /// Replaces `self` with `self * other` for the edges only.
    pub fn multiply_edges(&mut self, other: &Self) {
        let (ep, eo) = (self.ep, self.eo);
        for i in 0..12 {
            let from = other.ep[i].index();
            self.ep[i] = ep[from];
            self.eo[i] = (eo[from] + other.eo[i]) % 2;
        }
    }

    /// Replaces `self` with `self * other`: the state reached by applying
    /// `other` after `self`.
    pub fn multiply(&mut self, other: &Self) {
        self.multiply_corners(other);
        self.multiply_edges(other);
    }

    /// Applies one move.
    pub fn apply_move(&mut self, m: Move) {
        self.multiply(&MOVE_CUBES[m.index()]);
    }

    /// Applies moves in order.
    pub fn apply_moves<'a>(&mut self, moves: impl IntoIterator<Item = &'a Move>) {
        for &m in moves {
            self.apply_move(m);
        }
    }

    /// Returns the state that undoes this one.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let mut inv = Self::SOLVED;
        for i in 0..8 {
            let c = self.cp[i].index();
            inv.cp[c] = Corner::ALL[i];
            inv.co[c] = (3 - self.co[i]) % 3;
        }
        for i in 0..12 {
            let e = self.ep[i].index();
            inv.ep[e] = Edge::ALL[i];
            inv.eo[e] = self.eo[i];
        }
        inv
    }

    /// Returns `true` if every piece is home and unturned.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Returns the parity of the corner permutation (0 even, 1 odd).
    #[must_use]
    pub fn corner_parity(&self) -> u8 {
        permutation_parity(&self.cp.map(Corner::index))
    }

    /// Returns the parity of the edge permutation (0 even, 1 odd).
    #[must_use]
    pub fn edge_parity(&self) -> u8 {
        permutation_parity(&self.ep.map(Edge::index))
    }

    /// Returns `true` if this state can be reached from the solved cube:
    /// twists sum to a multiple of 3, flips to a multiple of 2, and both
    /// permutations have the same parity.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        self.co.iter().map(|&o| u32::from(o)).sum::<u32>() % 3 == 0
            && self.eo.iter().map(|&o| u32::from(o)).sum::<u32>() % 2 == 0
            && self.corner_parity() == self.edge_parity()
    }
}

impl Default for CubieCube {
    fn default() -> Self {
        Self::SOLVED
    }
}

fn permutation_parity(perm: &[usize]) -> u8 {
    let mut inversions = 0;
    for i in 0..perm.len() {
        for j in i + 1..perm.len() {
            if perm[i] > perm[j] {
                inversions += 1;
            }
        }
    }
    inversions % 2
}
