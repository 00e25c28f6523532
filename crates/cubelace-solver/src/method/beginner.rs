use super::{
    BoxedMethod, LAST_LAYER_CORNERS, LAST_LAYER_EDGES, Method, SEXY, SLOTS, all_angles,
    conjugated_by_u, corner_solved, cross, edge_solved, rotated, u_turns,
};
use crate::{
    CubieCube, Move, MoveSequence, SolveError,
    stage::{Goal, Macro, Piece, Stage},
};

use Move as M;

/// `U R U' R' U' F' U F`: inserts the edge at UF into the front-right slot.
const RIGHT_INSERT: &[Move] = &[
    M::U,
    M::R,
    M::U_PRIME,
    M::R_PRIME,
    M::U_PRIME,
    M::F_PRIME,
    M::U,
    M::F,
];

/// `U' F' U F U R U' R'`: inserts the edge at UR into the front-right slot.
const LEFT_INSERT: &[Move] = &[
    M::U_PRIME,
    M::F_PRIME,
    M::U,
    M::F,
    M::U,
    M::R,
    M::U_PRIME,
    M::R_PRIME,
];

/// `R U R' U R U2 R' U`: cycles three last-layer edges.
const EDGE_CYCLE: &[Move] = &[
    M::R,
    M::U,
    M::R_PRIME,
    M::U,
    M::R,
    M::U2,
    M::R_PRIME,
    M::U,
];

/// `U R U' L' U R' U' L`: cycles three last-layer corners.
const CORNER_CYCLE: &[Move] = &[
    M::U,
    M::R,
    M::U_PRIME,
    M::L_PRIME,
    M::U,
    M::R_PRIME,
    M::U_PRIME,
    M::L,
];

/// `R' D' R D`, repeated to twist the corner at URF in place.
const CORNER_TWIST: &[Move] = &[M::R_PRIME, M::D_PRIME, M::R, M::D];

/// Twists URF one way and UBR the other, leaving everything else alone.
fn corner_pair_twist() -> Vec<Move> {
    let mut moves = Vec::with_capacity(CORNER_TWIST.len() * 6 + 2);
    for _ in 0..2 {
        moves.extend_from_slice(CORNER_TWIST);
    }
    moves.push(M::U);
    for _ in 0..4 {
        moves.extend_from_slice(CORNER_TWIST);
    }
    moves.push(M::U_PRIME);
    moves
}

/// The layer-by-layer beginner's method.
///
/// 1. the cross on the D face
/// 2. the four first-layer corners, one at a time, with `R U R' U'`
/// 3. the four middle-layer edges with the left and right insertions
/// 4. the last-layer cross, oriented with `F R U R' U' F'`
/// 5. the last-layer edges, permuted with a Sune
/// 6. the last-layer corners, placed with a corner three-cycle
/// 7. the last-layer corners, twisted with `R' D' R D`
///
/// Solutions are long (often over a hundred moves) but each stage is easy
/// to follow.
#[derive(Debug, Clone, Copy, Default)]
pub struct Beginner;

impl Beginner {
    /// Creates the method.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Method for Beginner {
    fn name(&self) -> &'static str {
        "Beginner"
    }

    fn clone_box(&self) -> BoxedMethod {
        Box::new(*self)
    }

    fn solve(&self, cube: &CubieCube) -> Result<MoveSequence, SolveError> {
        let mut cube = *cube;
        let mut moves = Vec::new();

        cross().solve(&mut cube, &mut moves)?;
        for k in 0..SLOTS.len() {
            first_layer_corner(&cube, k).solve(&mut cube, &mut moves)?;
        }
        for k in 0..SLOTS.len() {
            middle_layer_edge(&cube, k).solve(&mut cube, &mut moves)?;
        }
        for stage in last_layer_stages() {
            stage.solve(&mut cube, &mut moves)?;
        }

        Ok(MoveSequence::from(moves).simplified())
    }
}

fn first_layer_corner(cube: &CubieCube, k: usize) -> Stage {
    let pops = (0..SLOTS.len())
        .filter(|&j| j != k && !corner_solved(cube, SLOTS[j].0))
        .map(|j| Macro::new(rotated(SEXY, j)));
    Stage::new("first layer")
        .target(Piece::Corner(SLOTS[k].0), Goal::Solved)
        .with_macros(u_turns())
        .with_macros([Macro::new(rotated(SEXY, k))])
        .with_macros(pops)
}

fn middle_layer_edge(cube: &CubieCube, k: usize) -> Stage {
    let pops = (0..SLOTS.len())
        .filter(|&j| j != k && !edge_solved(cube, SLOTS[j].1))
        .map(|j| Macro::new(rotated(RIGHT_INSERT, j)));
    Stage::new("middle layer")
        .target(Piece::Edge(SLOTS[k].1), Goal::Solved)
        .with_macros(u_turns())
        .with_macros([
            Macro::new(rotated(RIGHT_INSERT, k)),
            Macro::new(rotated(LEFT_INSERT, k)),
        ])
        .with_macros(pops)
}

fn last_layer_stages() -> [Stage; 4] {
    let edges = LAST_LAYER_EDGES.map(Piece::Edge);
    let corners = LAST_LAYER_CORNERS.map(Piece::Corner);
    let twist = corner_pair_twist();
    let twist_inverse = super::inverted(&twist);
    [
        Stage::new("last layer cross")
            .targets(edges, Goal::Oriented)
            .with_macros(u_turns())
            .with_macros(all_angles(super::EDGE_FLIP, false)),
        Stage::new("last layer edges")
            .targets(edges, Goal::Solved)
            .with_macros(u_turns())
            .with_macros(all_angles(EDGE_CYCLE, false)),
        Stage::new("last layer corner positions")
            .targets(edges, Goal::Solved)
            .targets(corners, Goal::Placed)
            .with_macros(u_turns())
            .with_macros(all_angles(CORNER_CYCLE, false)),
        Stage::new("last layer corner twists")
            .targets(edges, Goal::Solved)
            .targets(corners, Goal::Solved)
            .with_macros((0..4).flat_map(|k| {
                [
                    Macro::new(conjugated_by_u(&twist, k)),
                    Macro::new(conjugated_by_u(&twist_inverse, k)),
                ]
            })),
    ]
}
