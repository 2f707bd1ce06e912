//! Navigation configuration.

use std::num::NonZeroU16;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Process-wide navigation settings, read-only to the navigator.
///
/// Handed to [`Navigator::new`](crate::Navigator::new) by value so that
/// resolution never reads ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
	/// Wrap probes that leave the canvas around to the opposite edge.
	pub wrap_around: bool,
	/// Split the current pane when selecting in a direction with no neighbor.
	pub create_on_miss: bool,
	/// Distance a probe is placed past the pane edge.
	///
	/// Values above 1 compensate for gaps the layout engine leaves between
	/// panes. Values larger than the smallest pane dimension are unsupported.
	pub edge_delta: NonZeroU16,
	/// Restore the previously selected pane after a deferred display.
	pub display_no_select: bool,
	/// Let directional selection land on panes that refuse focus.
	pub allow_all_panes: bool,
}

impl Default for NavConfig {
	fn default() -> Self {
		Self {
			wrap_around: false,
			create_on_miss: false,
			edge_delta: NonZeroU16::MIN,
			display_no_select: false,
			allow_all_panes: false,
		}
	}
}

impl NavConfig {
	/// Parses configuration from TOML text. Missing keys take their defaults.
	pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(text)?)
	}

	/// Reads and parses a TOML configuration file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let text = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config = Self::from_toml_str(&text)?;
		tracing::debug!(path = %path.display(), ?config, "Loaded navigation config");
		Ok(config)
	}

	/// Returns the edge delta as a signed canvas distance.
	pub fn delta(&self) -> i32 {
		i32::from(self.edge_delta.get())
	}

	pub fn with_wrap_around(mut self, wrap_around: bool) -> Self {
		self.wrap_around = wrap_around;
		self
	}

	pub fn with_create_on_miss(mut self, create_on_miss: bool) -> Self {
		self.create_on_miss = create_on_miss;
		self
	}

	pub fn with_edge_delta(mut self, edge_delta: NonZeroU16) -> Self {
		self.edge_delta = edge_delta;
		self
	}

	pub fn with_display_no_select(mut self, display_no_select: bool) -> Self {
		self.display_no_select = display_no_select;
		self
	}

	pub fn with_allow_all_panes(mut self, allow_all_panes: bool) -> Self {
		self.allow_all_panes = allow_all_panes;
		self
	}
}
