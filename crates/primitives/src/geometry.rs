//! Integer canvas geometry.
//!
//! Coordinates are canvas-relative and zero-based: `x` grows rightward and
//! `y` grows downward. Values are signed so that probes computed just past a
//! canvas edge stay representable.

use std::ops::Add;

use serde::{Deserialize, Serialize};


/// A point on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coordinate {
	pub x: i32,
	pub y: i32,
}

impl Coordinate {
	/// Creates a new coordinate.
	pub const fn new(x: i32, y: i32) -> Self {
		Self { x, y }
	}

	/// Component-wise sum.
	pub const fn add(self, other: Self) -> Self {
		Self {
			x: self.x.wrapping_add(other.x),
			y: self.y.wrapping_add(other.y),
		}
	}
}

impl Add for Coordinate {
	type Output = Coordinate;

	fn add(self, rhs: Self) -> Self::Output {
		Coordinate::add(self, rhs)
	}
}

impl From<(i32, i32)> for Coordinate {
	fn from((x, y): (i32, i32)) -> Self {
		Self { x, y }
	}
}

/// Clamps `n` into `[lo, hi]`, computed as `max(lo, min(n, hi))`.
///
/// Total over all inputs; an inverted range yields `lo`.
#[inline]
pub fn clamp_to_range(n: i32, lo: i32, hi: i32) -> i32 {
	lo.max(n.min(hi))
}

/// Wraps `n` to the opposite end of `[lo, hi]` when it falls outside.
///
/// Values below `lo` become `hi`, values above `hi` become `lo`, anything
/// else is returned unchanged.
#[inline]
pub fn wrap_to_range(n: i32, lo: i32, hi: i32) -> i32 {
	if n < lo {
		hi
	} else if n > hi {
		lo
	} else {
		n
	}
}

/// A rectangle with an inclusive origin and exclusive right/bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
	pub x: i32,
	pub y: i32,
	pub width: i32,
	pub height: i32,
}

impl Rect {
	/// Creates a new rectangle. Negative dimensions are clamped to zero.
	pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
		Self {
			x,
			y,
			width: if width < 0 { 0 } else { width },
			height: if height < 0 { 0 } else { height },
		}
	}

	/// Creates a rectangle from `(x0, y0, x1, y1)` edges, `x1`/`y1` exclusive.
	pub const fn from_edges(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
		Self::new(x0, y0, x1 - x0, y1 - y0)
	}

	/// Returns true if the rectangle has zero area.
	pub const fn is_empty(&self) -> bool {
		self.width == 0 || self.height == 0
	}

	/// Returns the left edge x coordinate.
	pub const fn left(&self) -> i32 {
		self.x
	}

	/// Returns the right edge x coordinate (exclusive).
	pub const fn right(&self) -> i32 {
		self.x.saturating_add(self.width)
	}

	/// Returns the top edge y coordinate.
	pub const fn top(&self) -> i32 {
		self.y
	}

	/// Returns the bottom edge y coordinate (exclusive).
	pub const fn bottom(&self) -> i32 {
		self.y.saturating_add(self.height)
	}

	/// The first interior cell.
	pub const fn top_left(&self) -> Coordinate {
		Coordinate::new(self.x, self.y)
	}

	/// The last interior cell, one step in from both exclusive edges.
	pub const fn bottom_right(&self) -> Coordinate {
		Coordinate::new(self.right() - 1, self.bottom() - 1)
	}

	/// Returns true if `pos` lies inside the rectangle.
	pub const fn contains(&self, pos: Coordinate) -> bool {
		pos.x >= self.left() && pos.x < self.right() && pos.y >= self.top() && pos.y < self.bottom()
	}
}

/// An axis-aligned box inclusive on all four sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Bounds {
	pub min_x: i32,
	pub min_y: i32,
	pub max_x: i32,
	pub max_y: i32,
}

impl Bounds {
	/// Creates new bounds.
	pub const fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
		Self {
			min_x,
			min_y,
			max_x,
			max_y,
		}
	}

	/// Returns true if `pos` lies inside the bounds.
	pub const fn contains(&self, pos: Coordinate) -> bool {
		pos.x >= self.min_x && pos.x <= self.max_x && pos.y >= self.min_y && pos.y <= self.max_y
	}

	/// Clamps both components of `pos` into the bounds.
	pub fn clamp(&self, pos: Coordinate) -> Coordinate {
		Coordinate::new(
			clamp_to_range(pos.x, self.min_x, self.max_x),
			clamp_to_range(pos.y, self.min_y, self.max_y),
		)
	}
}
