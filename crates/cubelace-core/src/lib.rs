//! Core data structures for the cubelace facelet editor.
//!
//! This crate models the six faces of a Rubik's Cube laid out as an unfolded
//! net, together with the geometry used to draw that net and to map pointer
//! positions back to individual facelets.
//!
//! # Overview
//!
//! 1. **Colors** - [`color`]: the six sticker colors, their cycle order and the
//!    fixed one-character encoding understood by the solver.
//! 2. **Faces** - [`face`]: a 3×3 grid of colors anchored at a world offset.
//! 3. **Layout** - [`layout`]: the six faces arranged in the cross pattern and
//!    serialized in a fixed order.
//! 4. **Geometry** - [`geometry`]: cell size, face offsets, the control region
//!    and [`cell_bounds`], the one function every drawing and hit-testing path
//!    goes through.
//! 5. **Hit testing** - [`hit_test`]: world point to facelet or control region.
//!
//! # Examples
//!
//! ```
//! use cubelace_core::{CubeGeometry, CubeLayout, FaceSlot, HitTarget, hit_test};
//!
//! let geometry = CubeGeometry::STANDARD;
//! let mut layout = CubeLayout::new(&geometry);
//! assert_eq!(&layout.serialize()[..9], "yyyyyyyyy");
//!
//! // Click in the middle of the front face.
//! let center = layout.face(FaceSlot::Front).screen_bounds(1, 1).center();
//! let Some(HitTarget::Cell(cell)) = hit_test::hit_test(&layout, &geometry, center) else {
//!     panic!("expected a facelet");
//! };
//! layout.cycle(cell);
//! assert_ne!(layout.serialize(), CubeLayout::new(&geometry).serialize());
//! ```

pub use self::{color::*, face::*, geometry::*, hit_test::HitTarget, layout::*};

pub mod color;
pub mod face;
pub mod geometry;
pub mod hit_test;
pub mod layout;
