//! Neighbor resolution.
//!
//! Every directional command funnels through [`resolve_neighbor`], so select,
//! create, delete, swap and display agree on the target for a given layout
//! and argument.

use panewalk_primitives::{Axis, Coordinate, SpatialDirection};

use crate::arg::ReferenceMode;
use crate::canvas::CanvasGeometry;
use crate::constrain::{constrain, wrap};
use crate::host::PaneLayout;
use crate::probe::probe_point;
use crate::reference::reference_point;

/// Computes the final canvas point looked up for a move out of `origin`.
pub fn locate_probe<L: PaneLayout>(
	layout: &L,
	direction: SpatialDirection,
	origin: L::Pane,
	mode: ReferenceMode,
	wrap_around: bool,
	delta: i32,
) -> Coordinate {
	let edges = layout.pane_edges(origin);
	let extent = match direction.axis() {
		Axis::Horizontal => edges.width,
		Axis::Vertical => edges.height,
	};
	if delta > extent {
		tracing::warn!(?origin, delta, extent, "Edge delta exceeds pane size; neighbors may be skipped");
	}

	let reference = reference_point(layout, origin, mode);
	let canvas = CanvasGeometry::of(layout, origin);
	let probe = probe_point(direction, edges, reference, delta);
	let constrained = constrain(probe, &canvas, direction, layout.is_reserved_region(origin));
	let target = if wrap_around { wrap(constrained, &canvas) } else { constrained };

	tracing::trace!(
		?direction,
		?mode,
		?reference,
		?probe,
		?constrained,
		?target,
		"Located probe"
	);
	target
}

/// Finds the pane lying in `direction` from `origin`.
///
/// Returns `None` when the probe lands outside every pane. The result may
/// be the reserved region, active or not; callers decide whether that is a
/// valid target.
pub fn resolve_neighbor<L: PaneLayout>(
	layout: &L,
	direction: SpatialDirection,
	origin: L::Pane,
	mode: ReferenceMode,
	wrap_around: bool,
	delta: i32,
) -> Option<L::Pane> {
	debug_assert!(delta >= 1, "edge delta must be positive");
	let probe = locate_probe(layout, direction, origin, mode, wrap_around, delta);
	let found = layout.pane_at(layout.canvas_of(origin), probe);
	tracing::trace!(?origin, ?direction, ?probe, ?found, "Resolved neighbor");
	found
}
