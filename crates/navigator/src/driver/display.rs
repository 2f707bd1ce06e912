//! Deferred display into a directional target.
//!
//! Scheduling arms a single slot on the [`Navigator`]. The next display
//! event at or above the scheduling prompt depth consumes it. Scheduling
//! again replaces whatever is armed.

use panewalk_primitives::SpatialDirection;

use super::Navigator;
use crate::arg::PrefixArg;
use crate::error::{NavError, Result};
use crate::host::PaneContent;

/// Where deferred content should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayTarget {
	/// The pane in a direction from the pane selected at display time.
	Direction(SpatialDirection),
	/// The pane selected at display time.
	SameCanvas,
}

impl From<SpatialDirection> for DisplayTarget {
	fn from(direction: SpatialDirection) -> Self {
		DisplayTarget::Direction(direction)
	}
}

/// An armed deferred display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDisplay {
	pub target: DisplayTarget,
	pub arg: PrefixArg,
	/// Select the target after routing; otherwise restore the prior selection.
	pub select: bool,
	/// Prompt depth at scheduling; deeper display events are ignored.
	pub prompt_depth: usize,
	/// Set once the scheduling command has finished.
	seen_command_end: bool,
}

/// Result of offering a display event to the navigator.
#[derive(Debug)]
pub enum DisplayOutcome<P, C> {
	/// The content was shown in `pane`.
	Routed {
		pane: P,
		/// Whether `pane` was left selected.
		selected: bool,
	},
	/// Nothing was armed for this event; the host should display normally.
	Unhandled(C),
	/// The armed display could not find or create its target. The slot is
	/// consumed and the content is handed back.
	Failed { error: NavError, content: C },
}

impl Navigator {
	/// Arms a deferred display toward `target`.
	///
	/// Whether the target ends up selected is the configured
	/// `display_no_select` default, flipped by a universal argument.
	/// Returns the display this one replaced, if any.
	pub fn display_in_direction<L: PaneContent>(
		&mut self,
		layout: &L,
		target: DisplayTarget,
		arg: PrefixArg,
	) -> Option<PendingDisplay> {
		let select = !(self.config.display_no_select ^ arg.is_universal());
		let pending = PendingDisplay {
			target,
			arg,
			select,
			prompt_depth: layout.prompt_depth(),
			seen_command_end: false,
		};
		let replaced = self.pending.replace(pending);
		tracing::debug!(?target, ?arg, select, replaced = replaced.is_some(), "Armed deferred display");
		replaced
	}

	pub fn pending_display(&self) -> Option<&PendingDisplay> {
		self.pending.as_ref()
	}

	/// Disarms the pending display, returning it.
	pub fn cancel_pending_display(&mut self) -> Option<PendingDisplay> {
		let cancelled = self.pending.take();
		if cancelled.is_some() {
			tracing::debug!("Cancelled deferred display");
		}
		cancelled
	}

	/// Offers a content display event to the pending deferred display.
	pub fn handle_display<L: PaneContent>(
		&mut self,
		layout: &mut L,
		content: L::Content,
	) -> DisplayOutcome<L::Pane, L::Content> {
		let Some(pending) = self.pending else {
			return DisplayOutcome::Unhandled(content);
		};
		if layout.prompt_depth() > pending.prompt_depth {
			tracing::trace!(depth = layout.prompt_depth(), "Ignoring display inside nested prompt");
			return DisplayOutcome::Unhandled(content);
		}
		self.pending = None;

		let origin = layout.selected_pane();
		let pane = match self.display_target(layout, &pending) {
			Ok(pane) => pane,
			Err(error) => {
				tracing::debug!(?origin, target = ?pending.target, %error, "Deferred display failed");
				return DisplayOutcome::Failed { error, content };
			}
		};
		layout.show_content(pane, content);
		layout.select_pane(if pending.select { pane } else { origin });
		tracing::debug!(?origin, ?pane, select = pending.select, "Fired deferred display");
		DisplayOutcome::Routed {
			pane,
			selected: pending.select,
		}
	}

	/// Tells the navigator a command finished without displaying anything.
	///
	/// The command that armed the display is exempt; after that, the first
	/// command to finish at or above the scheduling prompt depth expires it.
	pub fn finish_command<L: PaneContent>(&mut self, layout: &L) {
		let depth = layout.prompt_depth();
		let Some(pending) = self.pending.as_mut() else {
			return;
		};
		if depth > pending.prompt_depth {
			return;
		}
		if !pending.seen_command_end {
			pending.seen_command_end = true;
			return;
		}
		self.pending = None;
		tracing::debug!("Deferred display expired unused");
	}

	fn display_target<L: PaneContent>(&self, layout: &mut L, pending: &PendingDisplay) -> Result<L::Pane> {
		let origin = layout.selected_pane();
		let direction = match pending.target {
			DisplayTarget::SameCanvas => return Ok(origin),
			DisplayTarget::Direction(direction) => direction,
		};
		let found = self
			.neighbor(layout, direction, origin, pending.arg)
			.filter(|&pane| !layout.is_reserved_region(pane));
		match found {
			Some(pane) => Ok(pane),
			None => Ok(layout.split_pane(origin, direction)?),
		}
	}
}
