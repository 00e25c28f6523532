//! World-space geometry of the unfolded cube.
//!
//! All positions are expressed in *world units*: the origin is the top-left
//! corner of the net, `x` grows to the right and `y` grows downward. A single
//! facelet is [`CELL_SIZE`] units wide.
//!
//! [`cell_bounds`] is the only place where a facelet rectangle is computed.
//! Rendering and hit testing both call it, so the two can never disagree
//! about where a facelet is.

use crate::FaceSlot;

/// Side length of one facelet in world units.
pub const CELL_SIZE: i32 = 50;

/// Side length of one face (3×3 facelets) in world units.
pub const FACE_SIZE: i32 = CELL_SIZE * 3;

/// Extra margin on the right and bottom edges of the world.
const WORLD_MARGIN: i32 = 7;

/// A point in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate, growing downward.
    pub y: f32,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An integer world position, used as the top-left anchor of a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Offset {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate, growing downward.
    pub y: i32,
}

impl Offset {
    /// Creates a new offset.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in world coordinates.
///
/// The rectangle is treated as *open* for containment: a point lying exactly
/// on one of its edges is not inside it.
///
/// # Examples
///
/// ```
/// use cubelace_core::{CellBounds, Point};
///
/// let bounds = CellBounds::new(0, 0, 50, 50);
/// assert!(bounds.contains(Point::new(25.0, 25.0)));
/// assert!(!bounds.contains(Point::new(50.0, 25.0))); // on the right edge
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellBounds {
    /// Left edge.
    pub left: i32,
    /// Top edge.
    pub top: i32,
    /// Right edge.
    pub right: i32,
    /// Bottom edge.
    pub bottom: i32,
}

impl CellBounds {
    /// Creates a rectangle from its four edges.
    ///
    /// # Panics
    ///
    /// Panics if `right < left` or `bottom < top`.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        assert!(left <= right && top <= bottom, "Inverted bounds");
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates a square anchored at `origin`.
    #[must_use]
    pub const fn square(origin: Offset, size: i32) -> Self {
        Self::new(origin.x, origin.y, origin.x + size, origin.y + size)
    }

    /// Returns the width of the rectangle.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Returns the height of the rectangle.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Returns the top-left corner.
    #[must_use]
    pub fn top_left(&self) -> Point {
        Point::new(world(self.left), world(self.top))
    }

    /// Returns the bottom-right corner.
    #[must_use]
    pub fn bottom_right(&self) -> Point {
        Point::new(world(self.right), world(self.bottom))
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            (world(self.left) + world(self.right)) / 2.0,
            (world(self.top) + world(self.bottom)) / 2.0,
        )
    }

    /// Returns `true` if `point` lies strictly inside the rectangle.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        world(self.left) < point.x
            && point.x < world(self.right)
            && world(self.top) < point.y
            && point.y < world(self.bottom)
    }

    /// Returns `true` if the interiors of the two rectangles intersect.
    ///
    /// Rectangles that only share an edge do not overlap.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }
}

#[expect(clippy::cast_precision_loss)]
fn world(value: i32) -> f32 {
    value as f32
}

/// Returns the world rectangle of the facelet at (`row`, `col`) of a face
/// anchored at `offset`.
///
/// `row` is the vertical index and `col` the horizontal one, both 0-2.
///
/// # Panics
///
/// Panics if `row` or `col` is greater than 2.
///
/// # Examples
///
/// ```
/// use cubelace_core::{CELL_SIZE, CellBounds, Offset, cell_bounds};
///
/// let bounds = cell_bounds(Offset::new(150, 0), 2, 1);
/// assert_eq!(bounds, CellBounds::new(200, 100, 250, 150));
/// assert_eq!(bounds.width(), CELL_SIZE);
/// ```
#[must_use]
pub const fn cell_bounds(offset: Offset, row: u8, col: u8) -> CellBounds {
    assert!(row < 3 && col < 3, "Invalid cell position");
    #[allow(clippy::cast_lossless)]
    let (row, col) = (row as i32, col as i32);
    CellBounds::square(
        Offset::new(offset.x + col * CELL_SIZE, offset.y + row * CELL_SIZE),
        CELL_SIZE,
    )
}

/// The immutable geometry of the unfolded net.
///
/// Built once at startup and shared by reference with everything that needs
/// to place faces, draw cells, or test clicks.
///
/// ```text
///         [Up]
/// [Left] [Front] [Right] [Back]
///        [Down]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeGeometry {
    face_offsets: [Offset; FaceSlot::COUNT],
    control_region: CellBounds,
    world_bounds: CellBounds,
}

impl CubeGeometry {
    /// The standard cross layout with 50-unit facelets.
    ///
    /// The control region sits in the top-right corner, right of `3.3` face
    /// widths and within the first facelet row, where no face is drawn.
    pub const STANDARD: Self = {
        let world_bounds = CellBounds::new(
            0,
            0,
            FACE_SIZE * 4 + WORLD_MARGIN,
            FACE_SIZE * 3 + WORLD_MARGIN,
        );
        Self {
            face_offsets: [
                Offset::new(FACE_SIZE, 0),
                Offset::new(0, FACE_SIZE),
                Offset::new(FACE_SIZE, FACE_SIZE),
                Offset::new(FACE_SIZE * 2, FACE_SIZE),
                Offset::new(FACE_SIZE * 3, FACE_SIZE),
                Offset::new(FACE_SIZE, FACE_SIZE * 2),
            ],
            control_region: CellBounds::new(
                FACE_SIZE * 33 / 10,
                0,
                world_bounds.right,
                CELL_SIZE,
            ),
            world_bounds,
        }
    };

    /// Returns the top-left anchor of the face in `slot`.
    #[must_use]
    pub const fn face_offset(&self, slot: FaceSlot) -> Offset {
        self.face_offsets[slot.index()]
    }

    /// Returns the whole rectangle covered by the face in `slot`.
    #[must_use]
    pub const fn face_bounds(&self, slot: FaceSlot) -> CellBounds {
        CellBounds::square(self.face_offset(slot), FACE_SIZE)
    }

    /// Returns the "solve and exit" control region.
    #[must_use]
    pub const fn control_region(&self) -> CellBounds {
        self.control_region
    }

    /// Returns the extent of the world that has to be visible.
    #[must_use]
    pub const fn world_bounds(&self) -> CellBounds {
        self.world_bounds
    }
}

impl Default for CubeGeometry {
    fn default() -> Self {
        Self::STANDARD
    }
}
