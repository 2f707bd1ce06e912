//! Reference point resolution.

use panewalk_primitives::Coordinate;

use crate::arg::ReferenceMode;
use crate::host::PaneLayout;

/// Returns the canvas coordinate a move out of `pane` is computed from.
///
/// Corners are taken from the pane's interior; the trailing corner is the
/// last interior cell. The cursor offset is reported relative to the
/// interior origin, so it is added to the interior top-left.
pub fn reference_point<L: PaneLayout>(layout: &L, pane: L::Pane, mode: ReferenceMode) -> Coordinate {
	let interior = layout.pane_interior(pane);
	match mode {
		ReferenceMode::LeadingCorner => interior.top_left(),
		ReferenceMode::TrailingCorner => interior.bottom_right(),
		ReferenceMode::Point => interior.top_left() + layout.cursor_offset(pane),
	}
}
