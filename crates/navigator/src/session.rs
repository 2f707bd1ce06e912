//! A navigator and its host behind one lock.
//!
//! On hosts that run commands from more than one thread, resolution and the
//! mutation that follows it must not interleave with another command, and
//! the deferred display slot must have a single writer. [`SharedSession`]
//! serializes both behind one [`parking_lot::Mutex`].

use std::sync::Arc;

use panewalk_primitives::SpatialDirection;
use parking_lot::Mutex;

use crate::arg::PrefixArg;
use crate::driver::{DisplayOutcome, DisplayTarget, Navigator, PendingDisplay};
use crate::error::Result;
use crate::host::{PaneContent, PaneLayout};

struct Session<H> {
	navigator: Navigator,
	host: H,
}

/// Cloneable handle to a locked navigator/host pair.
pub struct SharedSession<H> {
	inner: Arc<Mutex<Session<H>>>,
}

impl<H> Clone for SharedSession<H> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<H> SharedSession<H> {
	pub fn new(navigator: Navigator, host: H) -> Self {
		Self {
			inner: Arc::new(Mutex::new(Session { navigator, host })),
		}
	}

	/// Runs `f` with exclusive access to the navigator and host.
	pub fn with<R>(&self, f: impl FnOnce(&mut Navigator, &mut H) -> R) -> R {
		let mut guard = self.inner.lock();
		let Session { navigator, host } = &mut *guard;
		f(navigator, host)
	}
}

impl<H: PaneLayout> SharedSession<H> {
	pub fn select_in_direction(&self, direction: SpatialDirection, arg: PrefixArg) -> Result<H::Pane> {
		self.with(|nav, host| nav.select_in_direction(host, direction, arg))
	}

	pub fn create_in_direction(&self, direction: SpatialDirection) -> Result<H::Pane> {
		self.with(|nav, host| nav.create_in_direction(host, direction))
	}

	/// Copy of the armed deferred display, if any.
	pub fn pending_display(&self) -> Option<PendingDisplay> {
		self.with(|nav, _| nav.pending_display().copied())
	}

	pub fn cancel_pending_display(&self) -> Option<PendingDisplay> {
		self.with(|nav, _| nav.cancel_pending_display())
	}
}

impl<H: PaneContent> SharedSession<H> {
	pub fn delete_in_direction(
		&self,
		direction: SpatialDirection,
		arg: PrefixArg,
		kill_content: bool,
	) -> Result<H::Pane> {
		self.with(|nav, host| nav.delete_in_direction(host, direction, arg, kill_content))
	}

	pub fn swap_in_direction(&self, direction: SpatialDirection, arg: PrefixArg) -> Result<H::Pane> {
		self.with(|nav, host| nav.swap_in_direction(host, direction, arg))
	}

	/// Arms a deferred display, returning the one it replaced.
	pub fn display_in_direction(&self, target: DisplayTarget, arg: PrefixArg) -> Option<PendingDisplay> {
		self.with(|nav, host| nav.display_in_direction(host, target, arg))
	}

	pub fn finish_command(&self) {
		self.with(|nav, host| nav.finish_command(host));
	}

	pub fn handle_display(&self, content: H::Content) -> DisplayOutcome<H::Pane, H::Content> {
		self.with(|nav, host| nav.handle_display(host, content))
	}
}
