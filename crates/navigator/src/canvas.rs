//! Canvas bounds and reserved region geometry.

use panewalk_primitives::Bounds;

use crate::host::PaneLayout;

/// Snapshot of the canvas a resolution runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasGeometry {
	/// Inclusive canvas box, reserved region included.
	pub bounds: Bounds,
	/// Height of the reserved region, zero when the canvas has none.
	pub reserved_height: i32,
	/// Whether the reserved region currently accepts input.
	pub reserved_active: bool,
}

impl CanvasGeometry {
	/// Reads the geometry of the canvas `pane` lives on.
	pub fn of<L: PaneLayout>(layout: &L, pane: L::Pane) -> Self {
		let canvas = layout.canvas_of(pane);
		let (reserved_height, reserved_active) = reserved_region_geometry(layout, canvas);
		Self {
			bounds: canvas_bounds(layout, canvas),
			reserved_height,
			reserved_active,
		}
	}

	/// Whether the canvas has a reserved region of non-zero height.
	pub fn has_reserved_region(&self) -> bool {
		self.reserved_height > 0
	}

	/// Largest `y` a wrapped probe may land on.
	///
	/// An inactive reserved region is skipped entirely.
	pub fn wrap_max_y(&self) -> i32 {
		if self.reserved_active {
			self.bounds.max_y
		} else {
			self.bounds.max_y - self.reserved_height
		}
	}
}

/// Computes the inclusive bounds of a canvas.
///
/// The minimum corner comes from the canvas's top-left pane; the maximum is
/// one less than the canvas width and height.
pub fn canvas_bounds<L: PaneLayout>(layout: &L, canvas: L::Canvas) -> Bounds {
	let origin = layout.pane_edges(layout.first_pane(canvas));
	let area = layout.canvas_area(canvas);
	Bounds::new(origin.left(), origin.top(), area.width - 1, area.height - 1)
}

/// Returns `(height, is_active)` of the canvas's reserved region.
///
/// A canvas without one reports `(0, false)`.
pub fn reserved_region_geometry<L: PaneLayout>(layout: &L, canvas: L::Canvas) -> (i32, bool) {
	match layout.reserved_region(canvas) {
		Some(region) => (layout.pane_edges(region).height, layout.is_reserved_region_active(region)),
		None => (0, false),
	}
}
