//! Constraining probes to the canvas and wrapping them around its edges.

use panewalk_primitives::{Coordinate, SpatialDirection, clamp_to_range, wrap_to_range};

use crate::canvas::CanvasGeometry;

/// Sanitizes a probe against the canvas bounds.
///
/// The axis orthogonal to the movement is always clamped, so a probe never
/// leaves two edges at once. The vertical axis is also clamped for
/// horizontal moves and for downward moves out of ordinary panes; a large
/// edge delta therefore can never jump over the reserved region. Upward
/// moves, and downward moves out of the reserved region itself, keep their
/// out-of-bounds `y` so the wrapper can see it. A canvas without a reserved
/// region has nothing to protect, so downward moves stay unclamped there.
pub fn constrain(
	probe: Coordinate,
	canvas: &CanvasGeometry,
	direction: SpatialDirection,
	in_reserved_region: bool,
) -> Coordinate {
	let bounds = canvas.bounds;
	let x = match direction {
		SpatialDirection::Up | SpatialDirection::Down => clamp_to_range(probe.x, bounds.min_x, bounds.max_x),
		SpatialDirection::Left | SpatialDirection::Right => probe.x,
	};
	let clamp_y = match direction {
		SpatialDirection::Left | SpatialDirection::Right => true,
		SpatialDirection::Down => canvas.has_reserved_region() && !in_reserved_region,
		SpatialDirection::Up => false,
	};
	let y = if clamp_y {
		clamp_to_range(probe.y, bounds.min_y, bounds.max_y)
	} else {
		probe.y
	};
	Coordinate::new(x, y)
}

/// Wraps a constrained probe to the opposite canvas edge.
///
/// Vertically the range ends above an inactive reserved region, so wrapping
/// skips it, while an active one is a valid landing spot.
pub fn wrap(probe: Coordinate, canvas: &CanvasGeometry) -> Coordinate {
	let bounds = canvas.bounds;
	Coordinate::new(
		wrap_to_range(probe.x, bounds.min_x, bounds.max_x),
		wrap_to_range(probe.y, bounds.min_y, canvas.wrap_max_y()),
	)
}
