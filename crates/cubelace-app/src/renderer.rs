//! Drawing seam between the controller and the UI toolkit.

use cubelace_core::{CellBounds, ColorId, CubeGeometry, Point};
use eframe::egui::{Pos2, Rect, Vec2};

/// Outline drawn around a facelet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum BorderStyle {
    /// The regular thin outline.
    #[default]
    Normal,
    /// The facelet under the pointer.
    Hovered,
}

/// Something that can draw one facelet.
///
/// The controller only ever asks for whole cells, one at a time, in world
/// coordinates; mapping them to the screen is up to the implementation.
pub trait CellRenderer {
    /// Draws a facelet covering `bounds`.
    fn draw_cell(&mut self, bounds: CellBounds, fill: ColorId, border: BorderStyle);
}

/// Uniform scaling plus translation from world coordinates to the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    origin: Pos2,
    scale: f32,
}

impl ViewTransform {
    /// Creates a transform mapping the world origin to `origin`.
    ///
    /// # Panics
    ///
    /// Panics if `scale` is not positive.
    #[must_use]
    pub fn new(origin: Pos2, scale: f32) -> Self {
        assert!(scale > 0.0, "View scale must be positive");
        Self { origin, scale }
    }

    /// Returns the largest transform that shows the whole world inside
    /// `available`, anchored at its top-left corner.
    #[must_use]
    pub fn fit(geometry: &CubeGeometry, available: Rect) -> Self {
        let world = world_size(geometry);
        let scale = f32::min(available.width() / world.x, available.height() / world.y);
        Self::new(available.min, scale.max(f32::EPSILON))
    }

    /// Returns the scale factor.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Converts a screen position to world coordinates.
    #[must_use]
    pub fn to_world(&self, pos: Pos2) -> Point {
        let world = (pos - self.origin) / self.scale;
        Point::new(world.x, world.y)
    }

    /// Converts a world point to a screen position.
    #[must_use]
    pub fn to_screen(&self, point: Point) -> Pos2 {
        self.origin + Vec2::new(point.x, point.y) * self.scale
    }

    /// Converts a world rectangle to a screen rectangle.
    #[must_use]
    pub fn to_screen_rect(&self, bounds: CellBounds) -> Rect {
        Rect::from_min_max(
            self.to_screen(bounds.top_left()),
            self.to_screen(bounds.bottom_right()),
        )
    }
}

/// Returns the size of the world in world units.
#[must_use]
pub fn world_size(geometry: &CubeGeometry) -> Vec2 {
    let world = geometry.world_bounds();
    #[expect(clippy::cast_precision_loss)]
    let size = Vec2::new(world.width() as f32, world.height() as f32);
    size
}
