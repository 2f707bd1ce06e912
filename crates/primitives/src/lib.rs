//! Core types for pane navigation: directions, coordinates, and rectangles.

/// Directional types for navigation and split operations.
pub mod direction;
/// Integer canvas geometry and range arithmetic.
pub mod geometry;

pub use direction::{Axis, ParseDirectionError, SpatialDirection};
pub use geometry::{Bounds, Coordinate, Rect, clamp_to_range, wrap_to_range};
