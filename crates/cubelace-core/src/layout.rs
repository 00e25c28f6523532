//! The six faces in the unfolded cross layout.

use std::fmt::{self, Display};

use crate::{CellPosition, ColorId, CubeGeometry, Face, ParseColorError};

/// Slot of a face in the unfolded net.
///
/// The declaration order is the layout order and the serialization order.
///
/// ```text
///         [Up]
/// [Left] [Front] [Right] [Back]
///        [Down]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum FaceSlot {
    /// Top of the cross (face 0).
    Up = 0,
    /// Leftmost face of the middle band (face 1).
    Left = 1,
    /// Center of the cross (face 2).
    Front = 2,
    /// Right of the front face (face 3).
    Right = 3,
    /// Rightmost face of the middle band (face 4).
    Back = 4,
    /// Bottom of the cross (face 5).
    Down = 5,
}

impl FaceSlot {
    /// Number of faces.
    pub const COUNT: usize = 6;

    /// All slots in layout order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Up,
        Self::Left,
        Self::Front,
        Self::Right,
        Self::Back,
        Self::Down,
    ];

    /// Returns the face index (0-5).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Creates a slot from its face index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-5.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < Self::COUNT, "Invalid face index");
        Self::ALL[index]
    }

    /// Color of this face on a solved cube.
    #[must_use]
    pub const fn solved_color(self) -> ColorId {
        match self {
            Self::Up => ColorId::Yellow,
            Self::Left => ColorId::Green,
            Self::Front => ColorId::Orange,
            Self::Right => ColorId::Blue,
            Self::Back => ColorId::Red,
            Self::Down => ColorId::White,
        }
    }
}

/// Identifies one facelet of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId {
    /// The face holding the facelet.
    pub face: FaceSlot,
    /// Position of the facelet within its face.
    pub position: CellPosition,
}

impl CellId {
    /// Creates a cell id.
    #[must_use]
    pub const fn new(face: FaceSlot, position: CellPosition) -> Self {
        Self { face, position }
    }

    /// Returns the index of this facelet in the serialized string (0-53).
    #[must_use]
    pub const fn serial_index(self) -> usize {
        self.face.index() * 9 + self.position.index()
    }
}

impl Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {}", self.face, self.position)
    }
}

/// Errors that can occur when rebuilding a layout from a serialized string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseLayoutError {
    /// The string does not contain exactly 54 characters.
    #[display("expected {} facelets, found {len}", CubeLayout::FACELET_COUNT)]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// A character is not a valid color.
    #[display("facelet {index}: {source}")]
    InvalidColor {
        /// Index of the offending facelet.
        index: usize,
        /// The underlying parse error.
        source: ParseColorError,
    },
}

/// The six faces of the cube in the cross layout.
///
/// Faces are created once with the solved colors and afterwards only change
/// through [`CubeLayout::cycle`] (or the lower-level [`Face::set`]).
///
/// # Examples
///
/// ```
/// use cubelace_core::{CellId, CellPosition, ColorId, CubeGeometry, CubeLayout, FaceSlot};
///
/// let mut layout = CubeLayout::new(&CubeGeometry::STANDARD);
/// let cell = CellId::new(FaceSlot::Front, CellPosition::CENTER);
///
/// assert_eq!(layout.cycle(cell), ColorId::Blue);
/// assert_eq!(layout.serialize().len(), 54);
/// assert_eq!(layout.serialize().chars().nth(cell.serial_index()), Some('b'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeLayout {
    faces: [Face; FaceSlot::COUNT],
}

impl CubeLayout {
    /// Number of facelets in a serialized cube.
    pub const FACELET_COUNT: usize = FaceSlot::COUNT * 9;

    /// Creates a solved cube placed according to `geometry`.
    #[must_use]
    pub fn new(geometry: &CubeGeometry) -> Self {
        Self {
            faces: FaceSlot::ALL
                .map(|slot| Face::new(geometry.face_offset(slot), slot.solved_color())),
        }
    }

    /// Rebuilds a layout from a 54-character serialized string.
    ///
    /// # Errors
    ///
    /// Returns [`ParseLayoutError`] if the length is wrong or a character is
    /// not a known color.
    pub fn from_serialized(geometry: &CubeGeometry, s: &str) -> Result<Self, ParseLayoutError> {
        let colors = s
            .chars()
            .enumerate()
            .map(|(index, c)| {
                ColorId::from_char(c)
                    .map_err(|source| ParseLayoutError::InvalidColor { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if colors.len() != Self::FACELET_COUNT {
            return Err(ParseLayoutError::InvalidLength { len: colors.len() });
        }

        let mut layout = Self::new(geometry);
        for (face, chunk) in layout.faces.iter_mut().zip(colors.chunks(9)) {
            for (pos, &color) in CellPosition::ALL.iter().zip(chunk) {
                face.set(pos.row(), pos.col(), color);
            }
        }
        Ok(layout)
    }

    /// Returns the faces in layout order.
    #[must_use]
    pub const fn faces(&self) -> &[Face; FaceSlot::COUNT] {
        &self.faces
    }

    /// Returns the face in `slot`.
    #[must_use]
    pub const fn face(&self, slot: FaceSlot) -> &Face {
        &self.faces[slot.index()]
    }

    /// Returns the face in `slot` mutably.
    pub const fn face_mut(&mut self, slot: FaceSlot) -> &mut Face {
        &mut self.faces[slot.index()]
    }

    /// Returns the color of `cell`.
    #[must_use]
    pub const fn color(&self, cell: CellId) -> ColorId {
        self.face(cell.face).color(cell.position)
    }

    /// Advances `cell` to the next color and returns it.
    pub const fn cycle(&mut self, cell: CellId) -> ColorId {
        self.face_mut(cell.face).cycle(cell.position)
    }

    /// Iterates over every facelet in serialization order.
    pub fn cells(&self) -> impl Iterator<Item = (CellId, ColorId)> + '_ {
        FaceSlot::ALL.into_iter().flat_map(move |slot| {
            self.face(slot)
                .cells()
                .map(move |(pos, color)| (CellId::new(slot, pos), color))
        })
    }

    /// Serializes the cube as 54 color characters.
    ///
    /// Faces appear in [`FaceSlot`] order and the facelets of each face in
    /// row-major order.
    #[must_use]
    pub fn serialize(&self) -> String {
        self.cells().map(|(_, color)| color.as_char()).collect()
    }

    /// Returns `true` if every face is a single color.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        self.faces.iter().all(Face::is_uniform)
    }
}

impl Default for CubeLayout {
    fn default() -> Self {
        Self::new(&CubeGeometry::STANDARD)
    }
}

impl Display for CubeLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const SOLVED: &str = "yyyyyyyyygggggggggooooooooobbbbbbbbbrrrrrrrrrwwwwwwwww";

    #[test]
    fn test_default_serializes_to_solved_string() {
        let layout = CubeLayout::default();
        assert_eq!(layout.serialize(), SOLVED);
        assert_eq!(layout.to_string(), SOLVED);
        assert!(layout.is_uniform());
    }

    #[test]
    fn test_faces_use_geometry_offsets() {
        let geometry = CubeGeometry::STANDARD;
        let layout = CubeLayout::new(&geometry);
        for slot in FaceSlot::ALL {
            assert_eq!(layout.face(slot).offset(), geometry.face_offset(slot));
        }
        assert_eq!(layout.faces().len(), 6);
    }

    #[test]
    fn test_single_cycle_changes_one_character() {
        let mut layout = CubeLayout::default();
        let cell = CellId::new(FaceSlot::Front, CellPosition::CENTER);
        layout.cycle(cell);

        let serialized = layout.serialize();
        let changed: Vec<usize> = serialized
            .chars()
            .zip(SOLVED.chars())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(changed, vec![cell.serial_index()]);
        assert_eq!(cell.serial_index(), 22);
    }

    #[test]
    fn test_serialization_is_row_major() {
        let mut layout = CubeLayout::default();
        layout.face_mut(FaceSlot::Up).set(0, 1, ColorId::Red);
        layout.face_mut(FaceSlot::Down).set(2, 2, ColorId::Blue);
        let serialized = layout.serialize();
        assert_eq!(&serialized[..3], "yry");
        assert!(serialized.ends_with("wwb"));
    }

    #[test]
    fn test_from_serialized() {
        let geometry = CubeGeometry::STANDARD;
        let mut layout = CubeLayout::new(&geometry);
        layout.cycle(CellId::new(FaceSlot::Back, CellPosition::new(2, 1)));
        let parsed = CubeLayout::from_serialized(&geometry, &layout.serialize()).unwrap();
        assert_eq!(parsed, layout);

        assert_eq!(
            CubeLayout::from_serialized(&geometry, "yyy"),
            Err(ParseLayoutError::InvalidLength { len: 3 })
        );
        let mut bad = SOLVED.to_owned();
        bad.replace_range(10..11, "x");
        assert!(matches!(
            CubeLayout::from_serialized(&geometry, &bad),
            Err(ParseLayoutError::InvalidColor { index: 10, .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_serialize_uses_fixed_alphabet(
            clicks in prop::collection::vec((0..6usize, 0..3u8, 0..3u8), 0..64)
        ) {
            let mut layout = CubeLayout::default();
            for (face, row, col) in clicks {
                layout.cycle(CellId::new(FaceSlot::from_index(face), CellPosition::new(row, col)));
            }
            let serialized = layout.serialize();
            prop_assert_eq!(serialized.chars().count(), CubeLayout::FACELET_COUNT);
            prop_assert!(serialized.chars().all(|c| "ygobrw".contains(c)));
        }
    }
}
