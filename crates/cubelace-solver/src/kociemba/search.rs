//! Iterative-deepening search for both phases.

use tinyvec::TinyVec;

use super::tables::{PHASE2_MOVES, Tables};
use crate::{CubieCube, Move, MoveFace};

/// Returns `true` if `next` may follow a move of `last`.
///
/// Turning the same face twice in a row is never useful, and of two
/// opposite faces only one order is searched since they commute.
fn allowed_after(last: Option<MoveFace>, next: MoveFace) -> bool {
    match last {
        None => true,
        Some(last) => {
            next != last && !(next == last.opposite() && next.index() < last.index())
        }
    }
}

fn is_phase2_move(m: Move) -> bool {
    matches!(m.face(), MoveFace::U | MoveFace::D) || m.quarters() == 2
}

#[derive(Debug, Clone, Copy)]
struct Phase1 {
    twist: usize,
    flip: usize,
    slice: usize,
}

#[derive(Debug, Clone, Copy)]
struct Phase2 {
    corner_perm: usize,
    edge_perm: usize,
    slice_perm: usize,
}

pub(crate) struct Search<'a> {
    tables: &'a Tables,
    cube: CubieCube,
    max_length: usize,
    path: TinyVec<[Move; 32]>,
    phase1_len: usize,
    nodes: u64,
}

impl<'a> Search<'a> {
    pub(crate) fn new(tables: &'a Tables, cube: CubieCube, max_length: usize) -> Self {
        Self {
            tables,
            cube,
            max_length,
            path: TinyVec::new(),
            phase1_len: 0,
            nodes: 0,
        }
    }

    /// Runs the search, returning the first solution that fits in
    /// `max_length` moves.
    ///
    /// The two halves are searched independently, so the last phase-1 move
    /// and the first phase-2 move may turn the same face. Callers should
    /// simplify the result.
    pub(crate) fn run(mut self) -> Option<Vec<Move>> {
        let start = Phase1 {
            twist: self.cube.twist(),
            flip: self.cube.flip(),
            slice: self.cube.slice(),
        };
        for depth in 0..=self.max_length {
            if self.phase1(start, depth) {
                log::debug!(
                    "two-phase search: {} moves, {} nodes",
                    self.path.len(),
                    self.nodes
                );
                return Some(self.path.to_vec());
            }
        }
        None
    }

    fn phase1_bound(&self, state: Phase1) -> usize {
        let t = self.tables;
        usize::from(
            t.twist_slice
                .get(state.twist, state.slice)
                .max(t.flip_slice.get(state.flip, state.slice)),
        )
    }

    fn phase2_bound(&self, state: Phase2) -> usize {
        let t = self.tables;
        usize::from(
            t.corner_slice_perm
                .get(state.corner_perm, state.slice_perm)
                .max(t.edge_slice_perm.get(state.edge_perm, state.slice_perm)),
        )
    }

    fn phase1(&mut self, state: Phase1, togo: usize) -> bool {
        self.nodes += 1;
        let bound = self.phase1_bound(state);
        if bound > togo {
            return false;
        }
        if togo == 0 {
            // A phase-1 solution ending in a phase-2 move has a shorter
            // variant that was already tried.
            if self.path.last().is_some_and(|&m| is_phase2_move(m)) {
                return false;
            }
            return self.start_phase2();
        }

        let last = self.path.last().map(|m| m.face());
        for m in Move::ALL {
            if !allowed_after(last, m.face()) {
                continue;
            }
            let t = self.tables;
            let next = Phase1 {
                twist: t.twist.apply(state.twist, m.index()),
                flip: t.flip.apply(state.flip, m.index()),
                slice: t.slice.apply(state.slice, m.index()),
            };
            self.path.push(m);
            if self.phase1(next, togo - 1) {
                return true;
            }
            self.path.pop();
        }
        false
    }

    fn start_phase2(&mut self) -> bool {
        let mut cube = self.cube;
        cube.apply_moves(self.path.iter());
        let state = Phase2 {
            corner_perm: cube.corner_perm(),
            edge_perm: cube.edge_perm(),
            slice_perm: cube.slice_perm(),
        };
        self.phase1_len = self.path.len();
        let budget = self.max_length.saturating_sub(self.path.len());
        (0..=budget).any(|depth| self.phase2(state, depth))
    }

    fn phase2(&mut self, state: Phase2, togo: usize) -> bool {
        self.nodes += 1;
        let bound = self.phase2_bound(state);
        if bound > togo {
            return false;
        }
        if togo == 0 {
            return true;
        }

        let last = if self.path.len() > self.phase1_len {
            self.path.last().map(|m| m.face())
        } else {
            None
        };
        for (i, m) in PHASE2_MOVES.into_iter().enumerate() {
            if !allowed_after(last, m.face()) {
                continue;
            }
            let t = self.tables;
            let next = Phase2 {
                corner_perm: t.corner_perm.apply(state.corner_perm, i),
                edge_perm: t.edge_perm.apply(state.edge_perm, i),
                slice_perm: t.slice_perm.apply(state.slice_perm, i),
            };
            self.path.push(m);
            if self.phase2(next, togo - 1) {
                return true;
            }
            self.path.pop();
        }
        false
    }
}
