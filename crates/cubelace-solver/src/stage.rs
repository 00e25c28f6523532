//! Breadth-first search over macro sequences, tracking only a few pieces.
//!
//! Human methods solve the cube in stages, each of which places a handful of
//! pieces with a small set of algorithms ("macros") while leaving the
//! already-solved pieces alone. A [`Stage`] models exactly that: it tracks the
//! position and orientation of the pieces it cares about, packed into a
//! `u64`, and searches for the shortest macro sequence that brings all of
//! them to their goal.
//!
//! The macros themselves must preserve the pieces solved by earlier stages;
//! [`Macro::preserves`] checks that.

use std::collections::{HashMap, VecDeque, hash_map::Entry};

use crate::{Corner, CubieCube, Edge, Move, SolveError};

/// Bits per tracked piece in a packed state.
const BITS: u32 = 5;
const MASK: u64 = (1 << BITS) - 1;

/// Upper bound on the states a single stage search may visit.
const STATE_LIMIT: usize = 2_000_000;

/// A corner or an edge piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Piece {
    Corner(Corner),
    Edge(Edge),
}

/// What a tracked piece has to satisfy at the end of a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Goal {
    /// Home and unturned.
    Solved,
    /// Unturned, anywhere.
    Oriented,
    /// Home, with any orientation.
    Placed,
}

/// A move sequence together with its effect on every position.
#[derive(Debug, Clone)]
pub(crate) struct Macro {
    moves: Vec<Move>,
    /// For each corner position: destination position and added twist.
    corners: [(u8, u8); 8],
    /// For each edge position: destination position and added flip.
    edges: [(u8, u8); 12],
}

impl Macro {
    pub(crate) fn new(moves: Vec<Move>) -> Self {
        let cube = CubieCube::from_moves(&moves);
        let mut corners = [(0, 0); 8];
        let mut edges = [(0, 0); 12];
        #[expect(clippy::cast_possible_truncation)]
        for i in 0..8 {
            corners[cube.cp[i].index()] = (i as u8, cube.co[i]);
        }
        #[expect(clippy::cast_possible_truncation)]
        for i in 0..12 {
            edges[cube.ep[i].index()] = (i as u8, cube.eo[i]);
        }
        Self {
            moves,
            corners,
            edges,
        }
    }

    pub(crate) fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Returns `true` if every piece in `pieces` stays home and unturned
    /// when it starts home and unturned.
    pub(crate) fn preserves(&self, pieces: &[Piece]) -> bool {
        pieces.iter().all(|piece| match *piece {
            #[expect(clippy::cast_possible_truncation)]
            Piece::Corner(c) => self.corners[c.index()] == (c.index() as u8, 0),
            #[expect(clippy::cast_possible_truncation)]
            Piece::Edge(e) => self.edges[e.index()] == (e.index() as u8, 0),
        })
    }
}

#[derive(Debug, Clone, Copy)]
struct Target {
    piece: Piece,
    goal: Goal,
}

impl Target {
    fn encode(self, cube: &CubieCube) -> u64 {
        match self.piece {
            Piece::Corner(c) => {
                let (pos, twist) = cube.find_corner(c);
                (pos.index() * 3) as u64 + u64::from(twist)
            }
            Piece::Edge(e) => {
                let (pos, flip) = cube.find_edge(e);
                (pos.index() * 2) as u64 + u64::from(flip)
            }
        }
    }

    fn apply(self, code: u64, m: &Macro) -> u64 {
        match self.piece {
            Piece::Corner(_) => {
                let (dest, twist) = m.corners[(code / 3) as usize];
                u64::from(dest) * 3 + (code % 3 + u64::from(twist)) % 3
            }
            Piece::Edge(_) => {
                let (dest, flip) = m.edges[(code / 2) as usize];
                u64::from(dest) * 2 + (code % 2 + u64::from(flip)) % 2
            }
        }
    }

    fn is_met(self, code: u64) -> bool {
        let (home, base) = match self.piece {
            Piece::Corner(c) => (c.index() as u64, 3),
            Piece::Edge(e) => (e.index() as u64, 2),
        };
        match self.goal {
            Goal::Solved => code == home * base,
            Goal::Oriented => code % base == 0,
            Goal::Placed => code / base == home,
        }
    }
}

/// One stage of a staged method: the pieces to track, their goals, and the
/// macros allowed to reach them.
#[derive(Debug, Clone)]
pub(crate) struct Stage {
    name: &'static str,
    targets: Vec<Target>,
    macros: Vec<Macro>,
}

impl Stage {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            targets: Vec::new(),
            macros: Vec::new(),
        }
    }

    pub(crate) fn target(mut self, piece: Piece, goal: Goal) -> Self {
        debug_assert!(self.targets.len() < (u64::BITS / BITS) as usize);
        self.targets.push(Target { piece, goal });
        self
    }

    pub(crate) fn targets(self, pieces: impl IntoIterator<Item = Piece>, goal: Goal) -> Self {
        pieces
            .into_iter()
            .fold(self, |stage, piece| stage.target(piece, goal))
    }

    pub(crate) fn with_macros(mut self, macros: impl IntoIterator<Item = Macro>) -> Self {
        self.macros.extend(macros);
        self
    }

    pub(crate) fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn macros(&self) -> &[Macro] {
        &self.macros
    }

    fn pack(&self, cube: &CubieCube) -> u64 {
        self.targets
            .iter()
            .enumerate()
            .fold(0, |state, (i, t)| state | (t.encode(cube) << (i as u32 * BITS)))
    }

    fn step(&self, state: u64, m: &Macro) -> u64 {
        self.targets
            .iter()
            .enumerate()
            .fold(0, |next, (i, t)| {
                let shift = i as u32 * BITS;
                next | (t.apply((state >> shift) & MASK, m) << shift)
            })
    }

    fn is_goal(&self, state: u64) -> bool {
        self.targets
            .iter()
            .enumerate()
            .all(|(i, t)| t.is_met((state >> (i as u32 * BITS)) & MASK))
    }

    /// Finds the shortest macro sequence (by macro count) that meets every
    /// target, returned as indices into [`Stage::macros`].
    pub(crate) fn search(&self, cube: &CubieCube) -> Result<Vec<usize>, SolveError> {
        let failed = SolveError::StageFailed { stage: self.name };
        let start = self.pack(cube);
        if self.is_goal(start) {
            return Ok(Vec::new());
        }

        let mut parents: HashMap<u64, (u64, usize)> = HashMap::new();
        parents.insert(start, (start, usize::MAX));
        let mut queue = VecDeque::from([start]);
        while let Some(state) = queue.pop_front() {
            for (i, m) in self.macros.iter().enumerate() {
                let next = self.step(state, m);
                let Entry::Vacant(entry) = parents.entry(next) else {
                    continue;
                };
                entry.insert((state, i));
                if self.is_goal(next) {
                    return Ok(reconstruct(&parents, start, next));
                }
                queue.push_back(next);
            }
            if parents.len() > STATE_LIMIT {
                break;
            }
        }
        log::warn!("stage {} gave up after {} states", self.name, parents.len());
        Err(failed)
    }

    /// Runs [`Stage::search`] and applies the result to `cube`, appending
    /// the moves to `solution`.
    pub(crate) fn solve(
        &self,
        cube: &mut CubieCube,
        solution: &mut Vec<Move>,
    ) -> Result<(), SolveError> {
        let path = self.search(cube)?;
        log::trace!("stage {}: {} macros", self.name, path.len());
        for i in path {
            let moves = self.macros[i].moves();
            cube.apply_moves(moves);
            solution.extend_from_slice(moves);
        }
        Ok(())
    }
}

fn reconstruct(parents: &HashMap<u64, (u64, usize)>, start: u64, goal: u64) -> Vec<usize> {
    let mut path = Vec::new();
    let mut state = goal;
    while state != start {
        let (prev, i) = parents[&state];
        path.push(i);
        state = prev;
    }
    path.reverse();
    path
}

/// A fully precomputed distance table for a stage whose targets all have
/// [`Goal::Solved`], so the goal is a single state.
///
/// Each tracked piece takes one of 24 codes, and the table is indexed by the
/// tracked codes in base 24.
#[derive(Debug)]
pub(crate) struct PatternTable {
    stage: Stage,
    distances: Vec<u8>,
}

impl PatternTable {
    const UNREACHED: u8 = u8::MAX;

    pub(crate) fn build(stage: Stage) -> Self {
        debug_assert!(stage.targets.iter().all(|t| t.goal == Goal::Solved));
        let size = 24usize.pow(stage.targets.len() as u32);
        let mut distances = vec![Self::UNREACHED; size];
        let goal = stage.pack(&CubieCube::SOLVED);
        distances[Self::index(&stage, goal)] = 0;

        let mut frontier = vec![goal];
        let mut depth = 0;
        while !frontier.is_empty() {
            depth += 1;
            let mut next_frontier = Vec::new();
            for &state in &frontier {
                for m in &stage.macros {
                    let next = stage.step(state, m);
                    let idx = Self::index(&stage, next);
                    if distances[idx] == Self::UNREACHED {
                        distances[idx] = depth;
                        next_frontier.push(next);
                    }
                }
            }
            frontier = next_frontier;
        }
        log::debug!("pattern table for {}: depth {}", stage.name, depth - 1);
        Self { stage, distances }
    }

    fn index(stage: &Stage, state: u64) -> usize {
        (0..stage.targets.len()).rev().fold(0, |idx, i| {
            idx * 24 + ((state >> (i as u32 * BITS)) & MASK) as usize
        })
    }

    fn distance(&self, state: u64) -> u8 {
        self.distances[Self::index(&self.stage, state)]
    }

    /// Walks down the table from `cube` to the goal, applying the moves to
    /// `cube` and appending them to `solution`.
    pub(crate) fn solve(
        &self,
        cube: &mut CubieCube,
        solution: &mut Vec<Move>,
    ) -> Result<(), SolveError> {
        let failed = SolveError::StageFailed {
            stage: self.stage.name,
        };
        let mut state = self.stage.pack(cube);
        let mut distance = self.distance(state);
        if distance == Self::UNREACHED {
            return Err(failed);
        }
        while distance > 0 {
            let (next, m) = self
                .stage
                .macros
                .iter()
                .map(|m| (self.stage.step(state, m), m))
                .find(|&(next, _)| self.distance(next) == distance - 1)
                .ok_or_else(|| failed.clone())?;
            cube.apply_moves(m.moves());
            solution.extend_from_slice(m.moves());
            state = next;
            distance -= 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MoveSequence;

    fn single_moves() -> Vec<Macro> {
        Move::ALL.map(|m| Macro::new(vec![m])).to_vec()
    }

    fn cube(moves: &str) -> CubieCube {
        CubieCube::from_moves(&moves.parse::<MoveSequence>().unwrap())
    }

    #[test]
    fn test_macro_maps_pieces() {
        let m = Macro::new(vec![Move::U]);
        // The piece at UBR moves to URF.
        assert_eq!(m.corners[Corner::Ubr.index()], (Corner::Urf as u8, 0));
        assert_eq!(m.edges[Edge::Ub.index()], (Edge::Ur as u8, 0));
        assert!(m.preserves(&[Piece::Edge(Edge::Df), Piece::Corner(Corner::Dfr)]));
        assert!(!m.preserves(&[Piece::Edge(Edge::Uf)]));
    }

    #[test]
    fn test_step_agrees_with_cubie_model() {
        let stage = Stage::new("test")
            .targets([Piece::Corner(Corner::Urf), Piece::Corner(Corner::Dlf)], Goal::Solved)
            .targets([Piece::Edge(Edge::Uf), Piece::Edge(Edge::Bl)], Goal::Solved)
            .with_macros(single_moves());
        let mut cube = cube("R U F' L2 D B");
        let mut state = stage.pack(&cube);
        for m in [Move::F, Move::R2, Move::D_PRIME, Move::B] {
            state = stage.step(state, &Macro::new(vec![m]));
            cube.apply_move(m);
            assert_eq!(state, stage.pack(&cube));
        }
    }

    #[test]
    fn test_search_finds_shortest_path() {
        let stage = Stage::new("two edges")
            .targets([Piece::Edge(Edge::Uf), Piece::Edge(Edge::Ur)], Goal::Solved)
            .with_macros(single_moves());
        let mut cube = cube("F R");
        let path = stage.search(&cube).unwrap();
        assert_eq!(path.len(), 2);
        let mut solution = vec![];
        stage.solve(&mut cube, &mut solution).unwrap();
        assert_eq!(cube.find_edge(Edge::Uf), (Edge::Uf, 0));
        assert_eq!(cube.find_edge(Edge::Ur), (Edge::Ur, 0));
    }

    #[test]
    fn test_already_met_goal_needs_no_macros() {
        let stage = Stage::new("oriented")
            .target(Piece::Edge(Edge::Uf), Goal::Oriented)
            .with_macros(single_moves());
        assert!(stage.search(&cube("U")).unwrap().is_empty());
        assert_eq!(stage.search(&cube("F")).unwrap().len(), 1);
    }

    #[test]
    fn test_unreachable_goal_fails() {
        // U turns alone can never flip an edge.
        let stage = Stage::new("flip")
            .target(Piece::Edge(Edge::Uf), Goal::Oriented)
            .with_macros([Macro::new(vec![Move::U])]);
        let err = stage.search(&cube("F")).unwrap_err();
        assert_eq!(err, SolveError::StageFailed { stage: "flip" });
    }

    #[test]
    fn test_placed_goal_ignores_twist() {
        let stage = Stage::new("placed")
            .target(Piece::Corner(Corner::Urf), Goal::Placed)
            .with_macros(single_moves());
        let twisted = cube("R' D' R D R' D' R D");
        assert_eq!(twisted.find_corner(Corner::Urf).0, Corner::Urf);
        assert!(stage.search(&twisted).unwrap().is_empty());
    }

    #[test]
    fn test_pattern_table_descends_to_goal() {
        let table = PatternTable::build(
            Stage::new("pair")
                .targets([Piece::Edge(Edge::Df), Piece::Edge(Edge::Dr)], Goal::Solved)
                .with_macros(single_moves()),
        );
        let mut cube = cube("R2 F D' L B2 U R'");
        let mut solution = vec![];
        table.solve(&mut cube, &mut solution).unwrap();
        assert_eq!(cube.find_edge(Edge::Df), (Edge::Df, 0));
        assert_eq!(cube.find_edge(Edge::Dr), (Edge::Dr, 0));
        assert!(solution.len() <= 7);
    }
}
