//! Conversion between facelet strings and the cubie model.
//!
//! A facelet string lists 54 color characters: the faces in the order
//! `Up Left Front Right Back Down`, each face row by row as seen in the
//! unfolded net. Any six distinct characters may be used; each face is
//! identified by the color of its center.

use std::{fmt, str::FromStr};

use cubelace_core::{CubeLayout, FaceSlot};

use crate::{Corner, CubieCube, Edge};

const fn at(face: FaceSlot, index: usize) -> usize {
    face.index() * 9 + index
}

use FaceSlot::{Back as B, Down as D, Front as F, Left as L, Right as R, Up as U};

/// Facelets of each corner position, starting with the U or D sticker and
/// going clockwise.
const CORNER_FACELETS: [[usize; 3]; 8] = [
    [at(U, 8), at(R, 0), at(F, 2)],
    [at(U, 6), at(F, 0), at(L, 2)],
    [at(U, 0), at(L, 0), at(B, 2)],
    [at(U, 2), at(B, 0), at(R, 2)],
    [at(D, 2), at(F, 8), at(R, 6)],
    [at(D, 0), at(L, 8), at(F, 6)],
    [at(D, 6), at(B, 8), at(L, 6)],
    [at(D, 8), at(R, 8), at(B, 6)],
];

/// Faces of each corner piece, in the same order as [`CORNER_FACELETS`].
const CORNER_FACES: [[FaceSlot; 3]; 8] = [
    [U, R, F],
    [U, F, L],
    [U, L, B],
    [U, B, R],
    [D, F, R],
    [D, L, F],
    [D, B, L],
    [D, R, B],
];

/// Facelets of each edge position; the first one is the reference sticker.
const EDGE_FACELETS: [[usize; 2]; 12] = [
    [at(U, 5), at(R, 1)],
    [at(U, 7), at(F, 1)],
    [at(U, 3), at(L, 1)],
    [at(U, 1), at(B, 1)],
    [at(D, 5), at(R, 7)],
    [at(D, 1), at(F, 7)],
    [at(D, 3), at(L, 7)],
    [at(D, 7), at(B, 7)],
    [at(F, 5), at(R, 3)],
    [at(F, 3), at(L, 5)],
    [at(B, 5), at(L, 3)],
    [at(B, 3), at(R, 5)],
];

const EDGE_FACES: [[FaceSlot; 2]; 12] = [
    [U, R],
    [U, F],
    [U, L],
    [U, B],
    [D, R],
    [D, F],
    [D, L],
    [D, B],
    [F, R],
    [F, L],
    [B, L],
    [B, R],
];

/// Reasons a facelet string cannot describe a solvable cube.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum FaceletError {
    /// The string does not contain exactly 54 characters.
    #[display("expected {} facelets, found {len}", CubeLayout::FACELET_COUNT)]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// Two faces have the same center color.
    #[display("two centers share the color {color:?}")]
    DuplicateCenter {
        /// The repeated center color.
        color: char,
    },
    /// A facelet uses a color that no center has.
    #[display("facelet {index} has color {color:?}, which is not a center color")]
    UnknownColor {
        /// Index of the facelet.
        index: usize,
        /// The unexpected color.
        color: char,
    },
    /// A color does not appear exactly nine times.
    #[display("color {color:?} appears {count} times instead of 9")]
    InvalidColorCount {
        /// The color.
        color: char,
        /// Number of facelets with that color.
        count: usize,
    },
    /// The stickers at a corner position do not form any corner piece.
    #[display("no corner piece matches the stickers at {position:?}")]
    InvalidCorner {
        /// The corner position.
        position: Corner,
    },
    /// The stickers at an edge position do not form any edge piece.
    #[display("no edge piece matches the stickers at {position:?}")]
    InvalidEdge {
        /// The edge position.
        position: Edge,
    },
    /// A corner piece appears more than once.
    #[display("corner piece {corner:?} appears twice")]
    DuplicateCorner {
        /// The repeated piece.
        corner: Corner,
    },
    /// An edge piece appears more than once.
    #[display("edge piece {edge:?} appears twice")]
    DuplicateEdge {
        /// The repeated piece.
        edge: Edge,
    },
    /// The corner twists do not add up to a multiple of three.
    #[display("a corner is twisted")]
    TwistedCorner,
    /// The edge flips do not add up to a multiple of two.
    #[display("an edge is flipped")]
    FlippedEdge,
    /// Corner and edge permutations have different parity.
    #[display("two pieces are swapped")]
    ParityMismatch,
}

/// A cube described sticker by sticker.
///
/// # Examples
///
/// ```
/// use cubelace_solver::FaceletCube;
///
/// let cube: FaceletCube = "yyyyyyyyygggggggggooooooooobbbbbbbbbrrrrrrrrrwwwwwwwww".parse()?;
/// assert!(cube.to_cubie()?.is_solved());
/// # Ok::<(), cubelace_solver::FaceletError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceletCube {
    facelets: [FaceSlot; CubeLayout::FACELET_COUNT],
    colors: [char; FaceSlot::COUNT],
}

impl FaceletCube {
    /// Parses a facelet string, checking the length, the centers, and that
    /// every color is used nine times.
    ///
    /// # Errors
    ///
    /// Returns [`FaceletError`] describing the first problem found.
    pub fn parse(s: &str) -> Result<Self, FaceletError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != CubeLayout::FACELET_COUNT {
            return Err(FaceletError::InvalidLength { len: chars.len() });
        }

        let colors = FaceSlot::ALL.map(|slot| chars[at(slot, 4)]);
        for (i, color) in colors.iter().enumerate() {
            if colors[..i].contains(color) {
                return Err(FaceletError::DuplicateCenter { color: *color });
            }
        }

        let mut facelets = [FaceSlot::Up; CubeLayout::FACELET_COUNT];
        let mut counts = [0; FaceSlot::COUNT];
        for (index, &color) in chars.iter().enumerate() {
            let face = colors
                .iter()
                .position(|&c| c == color)
                .ok_or(FaceletError::UnknownColor { index, color })?;
            facelets[index] = FaceSlot::from_index(face);
            counts[face] += 1;
        }
        for (&color, &count) in colors.iter().zip(&counts) {
            if count != 9 {
                return Err(FaceletError::InvalidColorCount { color, count });
            }
        }

        Ok(Self { facelets, colors })
    }

    /// Builds the facelets of a cubie state, using `colors` (indexed by
    /// [`FaceSlot`]) for the stickers.
    #[must_use]
    pub fn from_cubie(cube: &CubieCube, colors: [char; FaceSlot::COUNT]) -> Self {
        let mut facelets = [FaceSlot::Up; CubeLayout::FACELET_COUNT];
        for slot in FaceSlot::ALL {
            facelets[at(slot, 4)] = slot;
        }
        for (i, facelet) in CORNER_FACELETS.iter().enumerate() {
            let piece = cube.cp[i].index();
            let twist = usize::from(cube.co[i]);
            for n in 0..3 {
                facelets[facelet[(n + twist) % 3]] = CORNER_FACES[piece][n];
            }
        }
        for (i, facelet) in EDGE_FACELETS.iter().enumerate() {
            let piece = cube.ep[i].index();
            let flip = usize::from(cube.eo[i]);
            for n in 0..2 {
                facelets[facelet[(n + flip) % 2]] = EDGE_FACES[piece][n];
            }
        }
        Self { facelets, colors }
    }

    /// Returns the face whose center color each facelet carries.
    #[must_use]
    pub fn facelets(&self) -> &[FaceSlot; CubeLayout::FACELET_COUNT] {
        &self.facelets
    }

    /// Returns the center color of each face, indexed by [`FaceSlot`].
    #[must_use]
    pub fn colors(&self) -> [char; FaceSlot::COUNT] {
        self.colors
    }

    /// Converts to the cubie model and checks that the state is solvable.
    ///
    /// # Errors
    ///
    /// Returns [`FaceletError`] if a piece cannot be identified or appears
    /// twice, or if the state is twisted, flipped, or has a parity mismatch.
    pub fn to_cubie(&self) -> Result<CubieCube, FaceletError> {
        let f = &self.facelets;
        let mut cube = CubieCube::SOLVED;

        for (i, facelet) in CORNER_FACELETS.iter().enumerate() {
            let position = Corner::ALL[i];
            let twist = (0..3u8)
                .find(|&t| matches!(f[facelet[usize::from(t)]], U | D))
                .ok_or(FaceletError::InvalidCorner { position })?;
            let t = usize::from(twist);
            let first = f[facelet[(t + 1) % 3]];
            let second = f[facelet[(t + 2) % 3]];
            let piece = CORNER_FACES
                .iter()
                .position(|faces| faces[1] == first && faces[2] == second)
                .ok_or(FaceletError::InvalidCorner { position })?;
            cube.cp[i] = Corner::ALL[piece];
            cube.co[i] = twist;
        }

        for (i, facelet) in EDGE_FACELETS.iter().enumerate() {
            let position = Edge::ALL[i];
            let stickers = [f[facelet[0]], f[facelet[1]]];
            let (piece, flip) = EDGE_FACES
                .iter()
                .enumerate()
                .find_map(|(j, faces)| {
                    if *faces == stickers {
                        Some((j, 0))
                    } else if faces[0] == stickers[1] && faces[1] == stickers[0] {
                        Some((j, 1))
                    } else {
                        None
                    }
                })
                .ok_or(FaceletError::InvalidEdge { position })?;
            cube.ep[i] = Edge::ALL[piece];
            cube.eo[i] = flip;
        }

        for corner in Corner::ALL {
            if cube.cp.iter().filter(|&&c| c == corner).count() > 1 {
                return Err(FaceletError::DuplicateCorner { corner });
            }
        }
        for edge in Edge::ALL {
            if cube.ep.iter().filter(|&&e| e == edge).count() > 1 {
                return Err(FaceletError::DuplicateEdge { edge });
            }
        }
        if cube.co.iter().map(|&o| u32::from(o)).sum::<u32>() % 3 != 0 {
            return Err(FaceletError::TwistedCorner);
        }
        if cube.eo.iter().map(|&o| u32::from(o)).sum::<u32>() % 2 != 0 {
            return Err(FaceletError::FlippedEdge);
        }
        if cube.corner_parity() != cube.edge_parity() {
            return Err(FaceletError::ParityMismatch);
        }
        Ok(cube)
    }
}

impl FromStr for FaceletCube {
    type Err = FaceletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FaceletCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for face in self.facelets {
            write!(f, "{}", self.colors[face.index()])?;
        }
        Ok(())
    }
}

impl CubieCube {
    /// Parses and validates a facelet string.
    ///
    /// # Errors
    ///
    /// Returns [`FaceletError`] if the string does not describe a solvable
    /// cube.
    pub fn from_facelets(s: &str) -> Result<Self, FaceletError> {
        FaceletCube::parse(s)?.to_cubie()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{Move, MoveSequence, testing};

    const SOLVED: &str = "yyyyyyyyygggggggggooooooooobbbbbbbbbrrrrrrrrrwwwwwwwww";

    fn face_str(s: &str, slot: FaceSlot) -> &str {
        &s[slot.index() * 9..slot.index() * 9 + 9]
    }

    #[test]
    fn test_solved_round_trip() {
        let cube = FaceletCube::parse(SOLVED).unwrap();
        assert_eq!(cube.colors(), ['y', 'g', 'o', 'b', 'r', 'w']);
        assert!(cube.to_cubie().unwrap().is_solved());
        assert_eq!(cube.to_string(), SOLVED);
        assert_eq!(
            FaceletCube::from_cubie(&CubieCube::SOLVED, cube.colors()).to_string(),
            SOLVED
        );
    }

    #[test]
    fn test_u_turn_moves_right_stickers_to_front() {
        let s = testing::scrambled("U");
        assert_eq!(face_str(&s, FaceSlot::Up), "yyyyyyyyy");
        assert_eq!(face_str(&s, FaceSlot::Front), "bbboooooo");
        assert_eq!(face_str(&s, FaceSlot::Right), "rrrbbbbbb");
        assert_eq!(face_str(&s, FaceSlot::Back), "gggrrrrrr");
        assert_eq!(face_str(&s, FaceSlot::Left), "ooogggggg");
        assert_eq!(face_str(&s, FaceSlot::Down), "wwwwwwwww");
    }

    #[test]
    fn test_r_turn_moves_front_stickers_up() {
        let s = testing::scrambled("R");
        assert_eq!(face_str(&s, FaceSlot::Up), "yyoyyoyyo");
        assert_eq!(face_str(&s, FaceSlot::Front), "oowoowoow");
        assert_eq!(face_str(&s, FaceSlot::Back), "yrryrryrr");
        assert_eq!(face_str(&s, FaceSlot::Down), "wwrwwrwwr");
        assert_eq!(face_str(&s, FaceSlot::Right), "bbbbbbbbb");
    }

    #[test]
    fn test_f_turn_moves_up_stickers_right() {
        let s = testing::scrambled("F");
        assert_eq!(face_str(&s, FaceSlot::Up), "yyyyyyggg");
        assert_eq!(face_str(&s, FaceSlot::Right), "ybbybbybb");
        assert_eq!(face_str(&s, FaceSlot::Down), "bbbwwwwww");
        assert_eq!(face_str(&s, FaceSlot::Left), "ggwggwggw");
    }

    #[test]
    fn test_any_center_colors_are_accepted() {
        let relabeled: String = SOLVED
            .chars()
            .map(|c| match c {
                'y' => 'U',
                'g' => 'L',
                'o' => 'F',
                'b' => 'R',
                'r' => 'B',
                _ => 'D',
            })
            .collect();
        assert!(CubieCube::from_facelets(&relabeled).unwrap().is_solved());
    }

    #[test]
    fn test_structural_errors() {
        assert_eq!(
            FaceletCube::parse("yyy"),
            Err(FaceletError::InvalidLength { len: 3 })
        );

        let mut s = SOLVED.to_owned();
        s.replace_range(13..14, "y");
        assert_eq!(
            FaceletCube::parse(&s),
            Err(FaceletError::DuplicateCenter { color: 'y' })
        );

        let mut s = SOLVED.to_owned();
        s.replace_range(0..1, "x");
        assert_eq!(
            FaceletCube::parse(&s),
            Err(FaceletError::UnknownColor {
                index: 0,
                color: 'x'
            })
        );

        let mut s = SOLVED.to_owned();
        s.replace_range(0..1, "g");
        assert_eq!(
            FaceletCube::parse(&s),
            Err(FaceletError::InvalidColorCount {
                color: 'y',
                count: 8
            })
        );
    }

    #[test]
    fn test_piece_errors() {
        // Swap two stickers of different faces on one edge: still nine of
        // each color, but that edge now reads as a flipped UF.
        let mut chars: Vec<char> = SOLVED.chars().collect();
        chars.swap(at(U, 7), at(F, 1));
        let s: String = chars.iter().collect();
        assert_eq!(CubieCube::from_facelets(&s), Err(FaceletError::FlippedEdge));

        // Rotate the stickers of one corner.
        let mut chars: Vec<char> = SOLVED.chars().collect();
        let [a, b, c] = CORNER_FACELETS[0];
        let (ca, cb, cc) = (chars[a], chars[b], chars[c]);
        chars[a] = cc;
        chars[b] = ca;
        chars[c] = cb;
        let s: String = chars.iter().collect();
        assert_eq!(CubieCube::from_facelets(&s), Err(FaceletError::TwistedCorner));

        // Exchange two whole edges.
        let solved = FaceletCube::parse(SOLVED).unwrap();
        let mut cube = CubieCube::SOLVED;
        cube.ep.swap(0, 1);
        let swapped = FaceletCube::from_cubie(&cube, solved.colors()).to_string();
        assert_eq!(
            CubieCube::from_facelets(&swapped),
            Err(FaceletError::ParityMismatch)
        );

        // Two front stickers on the FR edge.
        let mut chars: Vec<char> = SOLVED.chars().collect();
        chars.swap(at(F, 1), at(R, 3));
        let s: String = chars.iter().collect();
        assert!(CubieCube::from_facelets(&s).unwrap_err().is_invalid_edge());
    }

    #[test]
    fn test_duplicate_piece() {
        let solved = FaceletCube::parse(SOLVED).unwrap();
        let mut cube = CubieCube::SOLVED;
        cube.cp[0] = Corner::Ufl;
        // The color counts are off as well, so skip `parse`.
        let facelets = FaceletCube::from_cubie(&cube, solved.colors());
        assert_eq!(
            facelets.to_cubie(),
            Err(FaceletError::DuplicateCorner {
                corner: Corner::Ufl
            })
        );
    }

    fn any_moves() -> impl Strategy<Value = MoveSequence> {
        prop::collection::vec((0..Move::COUNT).prop_map(|i| Move::ALL[i]), 0..40)
            .prop_map(MoveSequence::from)
    }

    proptest! {
        #[test]
        fn prop_facelets_round_trip_through_cubies(moves in any_moves()) {
            let cube = CubieCube::from_moves(&moves);
            let s = FaceletCube::from_cubie(&cube, ['y', 'g', 'o', 'b', 'r', 'w']).to_string();
            prop_assert_eq!(CubieCube::from_facelets(&s), Ok(cube));
        }
    }
}
