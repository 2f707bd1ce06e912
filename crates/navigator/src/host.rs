//! Host seams: the layout engine and the content collaborator.
//!
//! The navigator never stores panes. It reads geometry through
//! [`PaneLayout`], asks it which pane occupies a canvas point, and requests
//! the final select/split/destroy mutations. Content routing goes through
//! [`PaneContent`].

use std::fmt::Debug;

use panewalk_primitives::{Coordinate, Rect, SpatialDirection};

use crate::error::LayoutError;

/// Layout engine owning the tiling of one or more canvases.
pub trait PaneLayout {
	/// Handle to a pane.
	type Pane: Copy + Eq + Debug;
	/// Handle to a canvas.
	type Canvas: Copy + Eq + Debug;

	/// Returns the canvas a pane belongs to.
	fn canvas_of(&self, pane: Self::Pane) -> Self::Canvas;

	/// Returns the full area of a canvas, reserved region included.
	fn canvas_area(&self, canvas: Self::Canvas) -> Rect;

	/// Returns the top-left pane of a canvas.
	fn first_pane(&self, canvas: Self::Canvas) -> Self::Pane;

	/// Returns the pane occupying `pos`, if any.
	fn pane_at(&self, canvas: Self::Canvas, pos: Coordinate) -> Option<Self::Pane>;

	/// Returns the outer edges of a pane.
	fn pane_edges(&self, pane: Self::Pane) -> Rect;

	/// Returns the interior of a pane, excluding decorations.
	fn pane_interior(&self, pane: Self::Pane) -> Rect {
		self.pane_edges(pane)
	}

	/// Returns the cursor position relative to the pane's interior origin.
	fn cursor_offset(&self, pane: Self::Pane) -> Coordinate;

	/// Returns the reserved region pinned to the bottom of a canvas.
	fn reserved_region(&self, canvas: Self::Canvas) -> Option<Self::Pane>;

	/// Returns whether a reserved region currently accepts input.
	fn is_reserved_region_active(&self, region: Self::Pane) -> bool;

	/// Returns whether `pane` is the reserved region of its canvas.
	fn is_reserved_region(&self, pane: Self::Pane) -> bool {
		self.reserved_region(self.canvas_of(pane)) == Some(pane)
	}

	/// Returns whether directional selection may land on `pane`.
	fn accepts_focus(&self, _pane: Self::Pane) -> bool {
		true
	}

	/// Returns the currently selected pane.
	fn selected_pane(&self) -> Self::Pane;

	/// Makes `pane` the selected pane.
	fn select_pane(&mut self, pane: Self::Pane);

	/// Splits `pane`, placing the new pane on the `direction` side.
	fn split_pane(&mut self, pane: Self::Pane, direction: SpatialDirection) -> Result<Self::Pane, LayoutError>;

	/// Removes `pane` from its canvas.
	fn destroy_pane(&mut self, pane: Self::Pane) -> Result<(), LayoutError>;
}

/// Content shown in panes.
pub trait PaneContent: PaneLayout {
	/// What gets displayed in a pane.
	type Content;

	/// Shows `content` in `pane`.
	fn show_content(&mut self, pane: Self::Pane, content: Self::Content);

	/// Destroys the content currently shown in `pane`.
	fn kill_content(&mut self, pane: Self::Pane);

	/// Exchanges the content and view state of two panes.
	fn swap_contents(&mut self, a: Self::Pane, b: Self::Pane);

	/// Nesting depth of input prompts currently open, zero at top level.
	fn prompt_depth(&self) -> usize {
		0
	}
}
