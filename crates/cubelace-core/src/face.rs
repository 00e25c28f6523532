//! A single 3×3 face.

use std::fmt::{self, Display};

use crate::{CellBounds, ColorId, Offset, cell_bounds};

/// Position of a facelet within a face.
///
/// `row` is the vertical index (0 at the top) and `col` the horizontal one
/// (0 at the left).
///
/// # Examples
///
/// ```
/// use cubelace_core::CellPosition;
///
/// let pos = CellPosition::new(1, 2);
/// assert_eq!(pos.index(), 5);
/// assert_eq!(CellPosition::try_new(3, 0), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellPosition {
    row: u8,
    col: u8,
}

impl CellPosition {
    /// All positions in row-major order.
    pub const ALL: [Self; 9] = {
        let mut all = [Self { row: 0, col: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self {
                row: (i / 3) as u8,
                col: (i % 3) as u8,
            };
            i += 1;
        }
        all
    };

    /// The center facelet.
    pub const CENTER: Self = Self { row: 1, col: 1 };

    /// Creates a position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is greater than 2.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 3 && col < 3, "Invalid cell position");
        Self { row, col }
    }

    /// Creates a position, returning `None` when out of range.
    #[must_use]
    pub const fn try_new(row: u8, col: u8) -> Option<Self> {
        if row < 3 && col < 3 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Returns the row (0-2).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-2).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row-major index (0-8).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 3 + self.col as usize
    }
}

impl Display for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One face of the cube: a 3×3 grid of colors anchored at a fixed offset.
///
/// The offset is set at construction and never changes. Every cell always
/// holds exactly one color.
///
/// # Examples
///
/// ```
/// use cubelace_core::{CellBounds, ColorId, Face, Offset};
///
/// let mut face = Face::new(Offset::new(150, 150), ColorId::Orange);
/// assert_eq!(face.get(1, 1), ColorId::Orange);
///
/// face.set(0, 2, ColorId::Red);
/// assert_eq!(face.get(0, 2), ColorId::Red);
/// assert_eq!(face.screen_bounds(0, 2), CellBounds::new(250, 150, 300, 200));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    offset: Offset,
    grid: [ColorId; 9],
}

impl Face {
    /// Creates a face filled with a single color.
    #[must_use]
    pub const fn new(offset: Offset, color: ColorId) -> Self {
        Self {
            offset,
            grid: [color; 9],
        }
    }

    /// Returns the top-left anchor of this face.
    #[must_use]
    pub const fn offset(&self) -> Offset {
        self.offset
    }

    /// Returns the color at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is greater than 2.
    #[must_use]
    pub const fn get(&self, row: u8, col: u8) -> ColorId {
        self.color(CellPosition::new(row, col))
    }

    /// Overwrites the color at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is greater than 2.
    pub const fn set(&mut self, row: u8, col: u8, color: ColorId) {
        self.grid[CellPosition::new(row, col).index()] = color;
    }

    /// Returns the color at `pos`.
    #[must_use]
    pub const fn color(&self, pos: CellPosition) -> ColorId {
        self.grid[pos.index()]
    }

    /// Advances the color at `pos` to the next one in the cycle and returns it.
    pub const fn cycle(&mut self, pos: CellPosition) -> ColorId {
        let next = self.grid[pos.index()].next();
        self.grid[pos.index()] = next;
        next
    }

    /// Returns the world rectangle of the facelet at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is greater than 2.
    #[must_use]
    pub const fn screen_bounds(&self, row: u8, col: u8) -> CellBounds {
        cell_bounds(self.offset, row, col)
    }

    /// Returns the world rectangle of the facelet at `pos`.
    #[must_use]
    pub const fn bounds(&self, pos: CellPosition) -> CellBounds {
        cell_bounds(self.offset, pos.row, pos.col)
    }

    /// Iterates over the facelets in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (CellPosition, ColorId)> + '_ {
        CellPosition::ALL.into_iter().map(|pos| (pos, self.color(pos)))
    }

    /// Returns `true` if every facelet has the same color.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        self.grid.iter().all(|&c| c == self.grid[0])
    }
}
