//! Mapping world points to facelets and to the control region.
//!
//! Every test goes through [`Face::screen_bounds`](crate::Face::screen_bounds),
//! so a point hits exactly the rectangle that gets drawn. Containment is
//! strict: points on a shared edge between two facelets hit nothing.

use crate::{CellId, CellPosition, CubeGeometry, CubeLayout, FaceSlot, Point};

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum HitTarget {
    /// The "solve and exit" control region.
    Control,
    /// A facelet.
    Cell(CellId),
}

/// Returns the facelet containing `point`, if any.
///
/// Faces are scanned in layout order, then rows, then columns; the first
/// match wins.
///
/// # Examples
///
/// ```
/// use cubelace_core::{CellId, CellPosition, CubeLayout, FaceSlot, Point, hit_test};
///
/// let layout = CubeLayout::default();
/// assert_eq!(
///     hit_test::locate(&layout, Point::new(175.0, 25.0)),
///     Some(CellId::new(FaceSlot::Up, CellPosition::new(0, 0))),
/// );
///
/// // The shared edge between two facelets is not a hit.
/// assert_eq!(hit_test::locate(&layout, Point::new(200.0, 25.0)), None);
/// ```
#[must_use]
pub fn locate(layout: &CubeLayout, point: Point) -> Option<CellId> {
    FaceSlot::ALL.into_iter().find_map(|slot| {
        let face = layout.face(slot);
        CellPosition::ALL
            .into_iter()
            .find(|pos| face.screen_bounds(pos.row(), pos.col()).contains(point))
            .map(|pos| CellId::new(slot, pos))
    })
}

/// Returns `true` if `point` lies inside the control region.
#[must_use]
pub fn is_control(geometry: &CubeGeometry, point: Point) -> bool {
    geometry.control_region().contains(point)
}

/// Resolves a click: the control region is checked first, then the facelets.
#[must_use]
pub fn hit_test(layout: &CubeLayout, geometry: &CubeGeometry, point: Point) -> Option<HitTarget> {
    if is_control(geometry, point) {
        return Some(HitTarget::Control);
    }
    locate(layout, point).map(HitTarget::Cell)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_center_of_every_cell_locates_that_cell() {
        let layout = CubeLayout::default();
        for (cell, _) in layout.cells() {
            let bounds = layout
                .face(cell.face)
                .screen_bounds(cell.position.row(), cell.position.col());
            assert_eq!(locate(&layout, bounds.center()), Some(cell), "{cell}");
        }
    }

    #[test]
    fn test_cell_bounds_do_not_overlap_across_faces() {
        let layout = CubeLayout::default();
        let all: Vec<_> = layout
            .cells()
            .map(|(cell, _)| (cell, layout.face(cell.face).bounds(cell.position)))
            .collect();
        for (i, (a, bounds_a)) in all.iter().enumerate() {
            for (b, bounds_b) in &all[i + 1..] {
                assert!(!bounds_a.overlaps(bounds_b), "{a} overlaps {b}");
            }
        }
    }

    #[test]
    fn test_boundary_between_cells_is_no_hit() {
        let layout = CubeLayout::default();
        // Vertical line between front (1,0) and (1,1).
        assert_eq!(locate(&layout, Point::new(200.0, 225.0)), None);
        // Horizontal line between front (0,1) and (1,1).
        assert_eq!(locate(&layout, Point::new(225.0, 200.0)), None);
        // Edge shared by the left and front faces.
        assert_eq!(locate(&layout, Point::new(150.0, 225.0)), None);
        // Corner shared by four facelets.
        assert_eq!(locate(&layout, Point::new(200.0, 200.0)), None);
    }

    #[test]
    fn test_dead_space_is_no_hit() {
        let geometry = CubeGeometry::STANDARD;
        let layout = CubeLayout::new(&geometry);
        for point in [
            Point::new(10.0, 10.0),
            Point::new(400.0, 100.0),
            Point::new(400.0, 400.0),
            Point::new(603.0, 200.0),
            Point::new(-5.0, -5.0),
        ] {
            assert_eq!(hit_test(&layout, &geometry, point), None, "{point:?}");
        }
    }

    #[test]
    fn test_control_region_is_checked_first() {
        let geometry = CubeGeometry::STANDARD;
        let layout = CubeLayout::new(&geometry);
        let point = Point::new(550.0, 25.0);
        assert!(is_control(&geometry, point));
        assert_eq!(
            hit_test(&layout, &geometry, point),
            Some(HitTarget::Control)
        );
        assert!(!is_control(&geometry, Point::new(495.0, 25.0)));
        assert!(!is_control(&geometry, Point::new(550.0, 50.0)));
    }

    #[test]
    fn test_hit_test_finds_cells() {
        let geometry = CubeGeometry::STANDARD;
        let layout = CubeLayout::new(&geometry);
        assert_eq!(
            hit_test(&layout, &geometry, Point::new(525.0, 275.0)),
            Some(HitTarget::Cell(CellId::new(
                FaceSlot::Back,
                CellPosition::new(2, 1)
            )))
        );
    }

    proptest! {
        #[test]
        fn prop_locate_agrees_with_bounds(x in -20.0f32..640.0, y in -20.0f32..480.0) {
            let layout = CubeLayout::default();
            let point = Point::new(x, y);
            let containing: Vec<CellId> = layout
                .cells()
                .map(|(cell, _)| cell)
                .filter(|cell| layout.face(cell.face).bounds(cell.position).contains(point))
                .collect();
            prop_assert!(containing.len() <= 1);
            prop_assert_eq!(locate(&layout, point), containing.first().copied());
        }
    }
}
