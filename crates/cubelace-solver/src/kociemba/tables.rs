//! Move and pruning tables, built once on first use.

use std::{collections::VecDeque, sync::OnceLock};

use super::coord::{
    CORNER_PERM_COUNT, EDGE_PERM_COUNT, FLIP_COUNT, SLICE_COUNT, SLICE_PERM_COUNT, TWIST_COUNT,
};
use crate::{CubieCube, Move};

/// Moves that keep a cube inside the phase-2 subgroup.
pub(crate) const PHASE2_MOVES: [Move; 10] = [
    Move::U,
    Move::U2,
    Move::U_PRIME,
    Move::D,
    Move::D2,
    Move::D_PRIME,
    Move::R2,
    Move::L2,
    Move::F2,
    Move::B2,
];

/// How a coordinate changes under each move, stored row by row.
#[derive(Debug)]
pub(crate) struct MoveTable {
    moves: usize,
    next: Vec<u16>,
}

impl MoveTable {
    /// Explores every value of a coordinate breadth-first from the solved
    /// cube, keeping one representative cube per value.
    fn build(size: usize, moves: &[Move], coord: impl Fn(&CubieCube) -> usize) -> Self {
        let mut next = vec![u16::MAX; size * moves.len()];
        let mut seen = vec![false; size];
        seen[coord(&CubieCube::SOLVED)] = true;
        let mut queue = VecDeque::from([CubieCube::SOLVED]);
        while let Some(cube) = queue.pop_front() {
            let from = coord(&cube);
            for (i, &m) in moves.iter().enumerate() {
                let mut moved = cube;
                moved.apply_move(m);
                let to = coord(&moved);
                #[expect(clippy::cast_possible_truncation)]
                let value = to as u16;
                next[from * moves.len() + i] = value;
                if !seen[to] {
                    seen[to] = true;
                    queue.push_back(moved);
                }
            }
        }
        debug_assert!(seen.iter().all(|&s| s), "coordinate not fully reachable");
        Self {
            moves: moves.len(),
            next,
        }
    }

    pub(crate) fn apply(&self, coord: usize, move_index: usize) -> usize {
        usize::from(self.next[coord * self.moves + move_index])
    }
}

/// Exact distances to the goal for a pair of coordinates, combined as
/// `first * second_size + second`.
#[derive(Debug)]
pub(crate) struct PruningTable {
    second_size: usize,
    distance: Vec<u8>,
}

impl PruningTable {
    fn build(first: &MoveTable, second: &MoveTable, first_size: usize, second_size: usize) -> Self {
        let mut distance = vec![u8::MAX; first_size * second_size];
        distance[0] = 0;
        let mut frontier = vec![0];
        let mut depth = 0;
        while !frontier.is_empty() {
            depth += 1;
            let mut next_frontier = Vec::new();
            for index in frontier {
                let (a, b) = (index / second_size, index % second_size);
                for m in 0..first.moves {
                    let next = first.apply(a, m) * second_size + second.apply(b, m);
                    if distance[next] == u8::MAX {
                        distance[next] = depth;
                        next_frontier.push(next);
                    }
                }
            }
            frontier = next_frontier;
        }
        Self {
            second_size,
            distance,
        }
    }

    pub(crate) fn get(&self, first: usize, second: usize) -> u8 {
        self.distance[first * self.second_size + second]
    }
}

/// Every table the two-phase search needs.
#[derive(Debug)]
pub(crate) struct Tables {
    pub(crate) twist: MoveTable,
    pub(crate) flip: MoveTable,
    pub(crate) slice: MoveTable,
    pub(crate) corner_perm: MoveTable,
    pub(crate) edge_perm: MoveTable,
    pub(crate) slice_perm: MoveTable,
    pub(crate) twist_slice: PruningTable,
    pub(crate) flip_slice: PruningTable,
    pub(crate) corner_slice_perm: PruningTable,
    pub(crate) edge_slice_perm: PruningTable,
}

impl Tables {
    /// Returns the shared tables, building them on the first call.
    pub(crate) fn get() -> &'static Self {
        static TABLES: OnceLock<Tables> = OnceLock::new();
        TABLES.get_or_init(Self::build)
    }

    fn build() -> Self {
        log::debug!("building two-phase tables");
        let twist = MoveTable::build(TWIST_COUNT, &Move::ALL, CubieCube::twist);
        let flip = MoveTable::build(FLIP_COUNT, &Move::ALL, CubieCube::flip);
        let slice = MoveTable::build(SLICE_COUNT, &Move::ALL, CubieCube::slice);
        let corner_perm =
            MoveTable::build(CORNER_PERM_COUNT, &PHASE2_MOVES, CubieCube::corner_perm);
        let edge_perm = MoveTable::build(EDGE_PERM_COUNT, &PHASE2_MOVES, CubieCube::edge_perm);
        let slice_perm = MoveTable::build(SLICE_PERM_COUNT, &PHASE2_MOVES, CubieCube::slice_perm);

        let twist_slice = PruningTable::build(&twist, &slice, TWIST_COUNT, SLICE_COUNT);
        let flip_slice = PruningTable::build(&flip, &slice, FLIP_COUNT, SLICE_COUNT);
        let corner_slice_perm =
            PruningTable::build(&corner_perm, &slice_perm, CORNER_PERM_COUNT, SLICE_PERM_COUNT);
        let edge_slice_perm =
            PruningTable::build(&edge_perm, &slice_perm, EDGE_PERM_COUNT, SLICE_PERM_COUNT);
        log::debug!("two-phase tables ready");

        Self {
            twist,
            flip,
            slice,
            corner_perm,
            edge_perm,
            slice_perm,
            twist_slice,
            flip_slice,
            corner_slice_perm,
            edge_slice_perm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MoveSequence;

    #[test]
    fn test_move_tables_agree_with_cubies() {
        let tables = Tables::get();
        let seq: MoveSequence = "R U2 F' L D B2 R' U F2 L' D' B".parse().unwrap();
        let mut cube = CubieCube::SOLVED;
        let (mut twist, mut flip, mut slice) = (0, 0, 0);
        for &m in &seq {
            cube.apply_move(m);
            twist = tables.twist.apply(twist, m.index());
            flip = tables.flip.apply(flip, m.index());
            slice = tables.slice.apply(slice, m.index());
            assert_eq!(twist, cube.twist());
            assert_eq!(flip, cube.flip());
            assert_eq!(slice, cube.slice());
        }
    }

    #[test]
    fn test_phase_two_tables_agree_with_cubies() {
        let tables = Tables::get();
        let mut cube = CubieCube::SOLVED;
        let (mut cp, mut ep, mut sp) = (0, 0, 0);
        for i in [0, 6, 4, 8, 2, 9, 7, 3, 6, 1] {
            cube.apply_move(PHASE2_MOVES[i]);
            cp = tables.corner_perm.apply(cp, i);
            ep = tables.edge_perm.apply(ep, i);
            sp = tables.slice_perm.apply(sp, i);
            assert_eq!(cp, cube.corner_perm());
            assert_eq!(ep, cube.edge_perm());
            assert_eq!(sp, cube.slice_perm());
        }
    }

    #[test]
    fn test_pruning_tables_are_admissible_around_goal() {
        let tables = Tables::get();
        assert_eq!(tables.twist_slice.get(0, 0), 0);
        assert_eq!(tables.flip_slice.get(0, 0), 0);
        for m in Move::ALL {
            let cube = CubieCube::from_move(m);
            assert!(tables.twist_slice.get(cube.twist(), cube.slice()) <= 1);
            assert!(tables.flip_slice.get(cube.flip(), cube.slice()) <= 1);
        }
        let cube = CubieCube::from_move(Move::R);
        assert_eq!(tables.twist_slice.get(cube.twist(), cube.slice()), 1);
        // Phase 1 never needs more than 12 moves.
        assert!(tables.twist_slice.distance.iter().all(|&d| d <= 12));
        assert!(tables.edge_slice_perm.distance.iter().all(|&d| d != u8::MAX));
    }
}
