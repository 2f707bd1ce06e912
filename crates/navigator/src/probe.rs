//! Probe placement just past a pane edge.

use panewalk_primitives::{Coordinate, Rect, SpatialDirection};

/// Computes the probe point `delta` cells past the `direction` edge of `edges`.
///
/// The coordinate along the movement axis comes from the pane edge; the
/// cross-axis coordinate comes from `reference`, which is what picks one
/// neighbor out of several split along that edge.
pub fn probe_point(direction: SpatialDirection, edges: Rect, reference: Coordinate, delta: i32) -> Coordinate {
	match direction {
		SpatialDirection::Left => Coordinate::new(edges.left() - delta, reference.y),
		SpatialDirection::Up => Coordinate::new(reference.x, edges.top() - delta),
		SpatialDirection::Right => Coordinate::new(edges.right() - 1 + delta, reference.y),
		SpatialDirection::Down => Coordinate::new(reference.x, edges.bottom() - 1 + delta),
	}
}
