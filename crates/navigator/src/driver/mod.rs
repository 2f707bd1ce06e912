//! Directional commands.
//!
//! [`Navigator`] owns the immutable configuration and the single pending
//! display slot. Every command reads the selected pane from the host,
//! resolves its neighbor through [`resolve_neighbor`], then performs the
//! final layout mutation. Commands hold `&mut` to the host for their whole
//! duration, so resolution and mutation never interleave with another
//! command.

mod display;

pub use display::{DisplayOutcome, DisplayTarget, PendingDisplay};
use panewalk_primitives::SpatialDirection;

use crate::arg::PrefixArg;
use crate::config::NavConfig;
use crate::error::{NavError, Result};
use crate::host::{PaneContent, PaneLayout};
use crate::resolve::resolve_neighbor;

/// Drives directional commands against a host layout.
#[derive(Debug, Default)]
pub struct Navigator {
	config: NavConfig,
	pending: Option<PendingDisplay>,
}

impl Navigator {
	/// Creates a navigator with no pending display.
	pub fn new(config: NavConfig) -> Self {
		Self { config, pending: None }
	}

	pub fn config(&self) -> &NavConfig {
		&self.config
	}

	/// Finds the pane in `direction` from `origin` using this navigator's
	/// wrap-around and edge delta settings.
	pub fn neighbor<L: PaneLayout>(
		&self,
		layout: &L,
		direction: SpatialDirection,
		origin: L::Pane,
		arg: PrefixArg,
	) -> Option<L::Pane> {
		resolve_neighbor(
			layout,
			direction,
			origin,
			arg.reference_mode(),
			self.config.wrap_around,
			self.config.delta(),
		)
	}

	/// Selects the pane in `direction` from the selected pane.
	///
	/// With `create_on_miss`, a missing neighbor is created by splitting the
	/// selected pane. Returns the newly selected pane.
	pub fn select_in_direction<L: PaneLayout>(
		&mut self,
		layout: &mut L,
		direction: SpatialDirection,
		arg: PrefixArg,
	) -> Result<L::Pane> {
		let origin = layout.selected_pane();
		let target = match self.neighbor(layout, direction, origin, arg) {
			Some(pane) => self.check_focus_target(layout, direction, pane)?,
			None if self.config.create_on_miss => {
				let pane = layout.split_pane(origin, direction)?;
				tracing::debug!(?origin, ?pane, ?direction, "Created missing neighbor");
				pane
			}
			None => return Err(NavError::NoNeighbor { direction }),
		};
		layout.select_pane(target);
		tracing::debug!(?origin, ?target, ?direction, "Selected pane in direction");
		Ok(target)
	}

	/// Splits the selected pane toward `direction` and selects the new pane.
	pub fn create_in_direction<L: PaneLayout>(
		&mut self,
		layout: &mut L,
		direction: SpatialDirection,
	) -> Result<L::Pane> {
		let origin = layout.selected_pane();
		let pane = layout.split_pane(origin, direction)?;
		layout.select_pane(pane);
		tracing::debug!(?origin, ?pane, ?direction, "Created pane in direction");
		Ok(pane)
	}

	/// Deletes the pane in `direction` from the selected pane.
	///
	/// With `kill_content`, the content shown in the resolved pane is
	/// destroyed first. An explicit `PrefixArg::Numeric(0)` deletes the
	/// selected pane instead and selects the resolved one in its place;
	/// `PrefixArg::None` counts as no argument here, not as zero, and deletes
	/// the neighbor. Reserved regions may be deleted. A lookup that wraps back
	/// onto the selected pane means there is no neighbor. Returns the pane
	/// that was destroyed.
	pub fn delete_in_direction<L: PaneContent>(
		&mut self,
		layout: &mut L,
		direction: SpatialDirection,
		arg: PrefixArg,
		kill_content: bool,
	) -> Result<L::Pane> {
		let origin = layout.selected_pane();
		let found = self
			.neighbor(layout, direction, origin, arg)
			.filter(|&pane| pane != origin)
			.ok_or(NavError::NoNeighbor { direction })?;

		if kill_content {
			layout.kill_content(found);
		}

		if arg.is_zero() {
			layout.destroy_pane(origin)?;
			layout.select_pane(found);
			tracing::debug!(?origin, ?found, ?direction, "Deleted selected pane, moved selection");
			Ok(origin)
		} else {
			layout.destroy_pane(found)?;
			tracing::debug!(?origin, ?found, ?direction, kill_content, "Deleted pane in direction");
			Ok(found)
		}
	}

	/// Swaps the contents of the selected pane and its neighbor in
	/// `direction`, then selects the neighbor. Wrapping back onto the
	/// selected pane counts as no neighbor.
	pub fn swap_in_direction<L: PaneContent>(
		&mut self,
		layout: &mut L,
		direction: SpatialDirection,
		arg: PrefixArg,
	) -> Result<L::Pane> {
		let origin = layout.selected_pane();
		let target = self
			.neighbor(layout, direction, origin, arg)
			.filter(|&pane| pane != origin && !layout.is_reserved_region(pane))
			.ok_or(NavError::NoNeighbor { direction })?;
		let target = self.check_focus_target(layout, direction, target)?;
		layout.swap_contents(origin, target);
		layout.select_pane(target);
		tracing::debug!(?origin, ?target, ?direction, "Swapped pane contents");
		Ok(target)
	}

	/// Rejects an inactive reserved region and, unless `allow_all_panes` is
	/// set, panes that refuse focus.
	fn check_focus_target<L: PaneLayout>(
		&self,
		layout: &L,
		direction: SpatialDirection,
		pane: L::Pane,
	) -> Result<L::Pane> {
		if layout.is_reserved_region(pane) && !layout.is_reserved_region_active(pane) {
			return Err(NavError::ReservedRegionInactive);
		}
		if !self.config.allow_all_panes && !layout.accepts_focus(pane) {
			return Err(NavError::NoNeighbor { direction });
		}
		Ok(pane)
	}
}
