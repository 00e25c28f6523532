//! Coordinates: small integers summarizing part of a cube state.
//!
//! Phase 1 works on corner twist, edge flip, and the set of positions holding
//! the four middle-slice edges. Phase 2 only uses moves that keep all three
//! at zero, and works on the permutations of the corners, the U/D-layer
//! edges, and the slice edges. Every coordinate is zero on the solved cube.

use crate::{CubieCube, Edge};

pub(crate) const TWIST_COUNT: usize = 2187;
pub(crate) const FLIP_COUNT: usize = 2048;
pub(crate) const SLICE_COUNT: usize = 495;
pub(crate) const CORNER_PERM_COUNT: usize = 40320;
pub(crate) const EDGE_PERM_COUNT: usize = 40320;
pub(crate) const SLICE_PERM_COUNT: usize = 24;

const fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let mut result = 1;
    let mut i = 0;
    while i < k {
        result = result * (n - i) / (i + 1);
        i += 1;
    }
    result
}

/// Lehmer rank of a permutation of `0..perm.len()`.
fn rank(perm: &[usize]) -> usize {
    let n = perm.len();
    (0..n).fold(0, |acc, i| {
        let smaller = perm[i + 1..].iter().filter(|&&p| p < perm[i]).count();
        acc * (n - i) + smaller
    })
}

impl CubieCube {
    /// Twists of the first seven corners in base 3 (the last one follows).
    pub(crate) fn twist(&self) -> usize {
        self.co[..7]
            .iter()
            .fold(0, |acc, &o| acc * 3 + usize::from(o))
    }

    /// Flips of the first eleven edges in base 2 (the last one follows).
    pub(crate) fn flip(&self) -> usize {
        self.eo[..11]
            .iter()
            .fold(0, |acc, &o| acc * 2 + usize::from(o))
    }

    /// Which four positions hold the slice edges, as a combination index.
    pub(crate) fn slice(&self) -> usize {
        let mut index = 0;
        let mut found = 0;
        for j in (0..12).rev() {
            if self.ep[j].is_slice() {
                index += binomial(11 - j, found + 1);
                found += 1;
            }
        }
        index
    }

    pub(crate) fn corner_perm(&self) -> usize {
        rank(&self.cp.map(|c| c.index()))
    }

    /// Permutation of the U/D-layer edges; only meaningful once the slice
    /// edges are in the slice.
    pub(crate) fn edge_perm(&self) -> usize {
        let mut perm = [0; 8];
        for (p, e) in perm.iter_mut().zip(&self.ep[..8]) {
            *p = e.index();
        }
        rank(&perm)
    }

    /// Permutation of the slice edges; only meaningful once they are in the
    /// slice.
    pub(crate) fn slice_perm(&self) -> usize {
        let mut perm = [0; 4];
        for (p, e) in perm.iter_mut().zip(&self.ep[8..]) {
            *p = e.index().saturating_sub(Edge::Fr.index());
        }
        rank(&perm)
    }
}
