//! Directional types for navigation and split operations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Spatial direction for focus navigation between panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpatialDirection {
	Left,
	Up,
	Right,
	Down,
}

impl SpatialDirection {
	/// All four directions in clockwise order starting from `Left`.
	pub const ALL: [SpatialDirection; 4] = [
		SpatialDirection::Left,
		SpatialDirection::Up,
		SpatialDirection::Right,
		SpatialDirection::Down,
	];

	/// Returns the axis movement in this direction travels along.
	pub const fn axis(self) -> Axis {
		match self {
			SpatialDirection::Left | SpatialDirection::Right => Axis::Horizontal,
			SpatialDirection::Up | SpatialDirection::Down => Axis::Vertical,
		}
	}

	/// Returns the opposite direction.
	pub const fn opposite(self) -> Self {
		match self {
			SpatialDirection::Left => SpatialDirection::Right,
			SpatialDirection::Right => SpatialDirection::Left,
			SpatialDirection::Up => SpatialDirection::Down,
			SpatialDirection::Down => SpatialDirection::Up,
		}
	}

	/// Returns the lowercase name used in messages and configuration.
	pub const fn as_str(self) -> &'static str {
		match self {
			SpatialDirection::Left => "left",
			SpatialDirection::Up => "up",
			SpatialDirection::Right => "right",
			SpatialDirection::Down => "down",
		}
	}
}

impl fmt::Display for SpatialDirection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A direction name that is not one of `left`, `up`, `right`, `down`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid direction: {0:?} (expected left, up, right or down)")]
pub struct ParseDirectionError(pub String);

impl FromStr for SpatialDirection {
	type Err = ParseDirectionError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"left" | "h" => Ok(SpatialDirection::Left),
			"up" | "k" => Ok(SpatialDirection::Up),
			"right" | "l" => Ok(SpatialDirection::Right),
			"down" | "j" => Ok(SpatialDirection::Down),
			_ => Err(ParseDirectionError(s.to_owned())),
		}
	}
}

/// Axis of movement.
///
/// `Horizontal` covers left/right movement, `Vertical` covers up/down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
	Horizontal,
	Vertical,
}
