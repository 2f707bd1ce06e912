//! Error types for directional commands and host layout mutation.

use std::path::PathBuf;

use panewalk_primitives::SpatialDirection;
use thiserror::Error;

/// Errors raised by directional commands.
///
/// `NoNeighbor` and `ReservedRegionInactive` are recoverable and meant to be
/// shown to the user. `Layout` wraps a refusal from the host layout engine.
#[derive(Debug, Error)]
pub enum NavError {
	/// No pane lies in the requested direction.
	#[error("no pane {direction} from selected pane")]
	NoNeighbor {
		/// The direction that was searched.
		direction: SpatialDirection,
	},

	/// The resolved pane is the reserved region and it is not active.
	#[error("reserved region is inactive")]
	ReservedRegionInactive,

	/// The host refused a layout mutation.
	#[error(transparent)]
	Layout(#[from] LayoutError),
}

/// Result type for directional commands.
pub type Result<T> = std::result::Result<T, NavError>;

/// Errors a host layout engine reports when asked to mutate the layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
	/// The pane could not be split (too small, fixed size, ...).
	#[error("cannot split pane: {0}")]
	Split(String),

	/// The pane is the only one left on its canvas.
	#[error("cannot delete the sole pane of a canvas")]
	SolePane,

	/// The pane handle does not refer to a live pane.
	#[error("unknown pane")]
	UnknownPane,
}

/// Errors that can occur when loading navigation configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or an invalid value.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},
}
