use super::{
    BoxedMethod, EDGE_FLIP, Method, SLOTS, SUNE, all_angles, corner_solved, cross, edge_solved,
    last_layer_pieces, rotated, slot_solved, u_turns,
};
use crate::{
    CubieCube, Move, MoveSequence, SolveError,
    stage::{Goal, Macro, Piece, Stage},
};

use Move as M;

/// Inserts and extracts pairs at the front-right slot: `R U^n R'` and
/// `F' U^n F`.
const PAIR_TRIGGERS: [&[Move]; 6] = [
    &[M::R, M::U, M::R_PRIME],
    &[M::R, M::U_PRIME, M::R_PRIME],
    &[M::R, M::U2, M::R_PRIME],
    &[M::F_PRIME, M::U, M::F],
    &[M::F_PRIME, M::U_PRIME, M::F],
    &[M::F_PRIME, M::U2, M::F],
];

/// `R U R' U' R' F R2 U' R' U' R U R' F'`
const T_PERM: &[Move] = &[
    M::R,
    M::U,
    M::R_PRIME,
    M::U_PRIME,
    M::R_PRIME,
    M::F,
    M::R2,
    M::U_PRIME,
    M::R_PRIME,
    M::U_PRIME,
    M::R,
    M::U,
    M::R_PRIME,
    M::F_PRIME,
];

/// `R U' R U R U R U' R' U' R2`
const UA_PERM: &[Move] = &[
    M::R,
    M::U_PRIME,
    M::R,
    M::U,
    M::R,
    M::U,
    M::R,
    M::U_PRIME,
    M::R_PRIME,
    M::U_PRIME,
    M::R2,
];

/// Cross, first two layers, orientation of the last layer, permutation of
/// the last layer.
///
/// The first two layers are built pair by pair: each corner is joined with
/// its edge and inserted with short triggers, always picking the slot that
/// is cheapest to fill next. The last layer uses a small set of algorithms
/// (Sune, `F R U R' U' F'`, T- and U-permutations) applied from all four
/// sides, which keeps the algorithm count low at the cost of some extra
/// moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cfop;

impl Cfop {
    /// Creates the method.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Method for Cfop {
    fn name(&self) -> &'static str {
        "CFOP"
    }

    fn clone_box(&self) -> BoxedMethod {
        Box::new(*self)
    }

    fn solve(&self, cube: &CubieCube) -> Result<MoveSequence, SolveError> {
        let mut cube = *cube;
        let mut moves = Vec::new();

        cross().solve(&mut cube, &mut moves)?;
        while let Some(k) = (0..SLOTS.len()).find(|&k| !slot_solved(&cube, k)) {
            let (stage, _) = (k..SLOTS.len())
                .filter(|&j| !slot_solved(&cube, j))
                .map(|j| {
                    let stage = pair(&cube, j);
                    let len = stage.search(&cube).map_or(usize::MAX, |path| {
                        path.iter().map(|&i| stage.macros()[i].moves().len()).sum()
                    });
                    (stage, len)
                })
                .min_by_key(|(_, len)| *len)
                .unwrap_or_else(|| (pair(&cube, k), usize::MAX));
            log::trace!("next pair: {}", stage.name());
            stage.solve(&mut cube, &mut moves)?;
        }
        orientation().solve(&mut cube, &mut moves)?;
        permutation().solve(&mut cube, &mut moves)?;

        Ok(MoveSequence::from(moves).simplified())
    }
}

const PAIR_NAMES: [&str; 4] = [
    "front-right pair",
    "back-right pair",
    "back-left pair",
    "front-left pair",
];

fn pair(cube: &CubieCube, k: usize) -> Stage {
    let (corner, edge) = SLOTS[k];
    let pops = (0..SLOTS.len())
        .filter(|&j| {
            j != k && !(corner_solved(cube, SLOTS[j].0) && edge_solved(cube, SLOTS[j].1))
        })
        .map(|j| Macro::new(rotated(PAIR_TRIGGERS[0], j)));
    Stage::new(PAIR_NAMES[k])
        .target(Piece::Corner(corner), Goal::Solved)
        .target(Piece::Edge(edge), Goal::Solved)
        .with_macros(u_turns())
        .with_macros(
            PAIR_TRIGGERS
                .iter()
                .map(|trigger| Macro::new(rotated(trigger, k))),
        )
        .with_macros(pops)
}

fn orientation() -> Stage {
    let mut macros = all_angles(EDGE_FLIP, true);
    macros.extend(all_angles(SUNE, true));
    Stage::new("orientation of the last layer")
        .targets(last_layer_pieces(), Goal::Oriented)
        .with_macros(u_turns())
        .with_macros(macros)
}

fn permutation() -> Stage {
    let mut macros = all_angles(T_PERM, false);
    macros.extend(all_angles(UA_PERM, true));
    Stage::new("permutation of the last layer")
        .targets(last_layer_pieces(), Goal::Solved)
        .with_macros(u_turns())
        .with_macros(macros)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{method::first_two_layers, testing};

    #[test]
    fn test_triggers_only_touch_their_slot() {
        for k in 0..4 {
            let keep: Vec<Piece> = crate::method::CROSS_EDGES
                .into_iter()
                .map(Piece::Edge)
                .chain(
                    (0..4)
                        .filter(|&j| j != k)
                        .flat_map(|j| [Piece::Corner(SLOTS[j].0), Piece::Edge(SLOTS[j].1)]),
                )
                .collect();
            for trigger in PAIR_TRIGGERS {
                assert!(Macro::new(rotated(trigger, k)).preserves(&keep), "slot {k}");
            }
        }
    }

    #[test]
    fn test_permutations_keep_orientation_and_first_two_layers() {
        let f2l = first_two_layers();
        for moves in [T_PERM, UA_PERM] {
            let m = Macro::new(moves.to_vec());
            assert!(m.preserves(&f2l));
            let cube = CubieCube::from_moves(moves);
            assert!(cube.co.iter().all(|&o| o == 0));
            assert!(cube.eo.iter().all(|&o| o == 0));
            assert!(!cube.is_solved());
        }
    }

    #[test]
    fn test_t_perm_is_an_involution() {
        let mut cube = CubieCube::from_moves(T_PERM);
        cube.apply_moves(T_PERM);
        assert!(cube.is_solved());
    }

    #[test]
    fn test_pairs_are_solved_one_at_a_time() {
        let mut cube = testing::scrambled_cubie("L2 U' B R2 D F' U2 R B2 L' D");
        let mut moves = vec![];
        cross().solve(&mut cube, &mut moves).unwrap();
        for k in 0..4 {
            if !slot_solved(&cube, k) {
                pair(&cube, k).solve(&mut cube, &mut moves).unwrap();
            }
            assert!((0..=k).all(|j| slot_solved(&cube, j)));
        }
    }

    #[test]
    fn test_solves_scrambles() {
        for scramble in testing::SCRAMBLES {
            let cube = testing::scrambled_cubie(scramble);
            let solution = Cfop.solve(&cube).unwrap();
            testing::assert_solves(&cube, &solution);
        }
    }

    #[test]
    fn test_solved_cube_needs_no_moves() {
        assert!(Cfop.solve(&CubieCube::SOLVED).unwrap().is_empty());
    }
}
