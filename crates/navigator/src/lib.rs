//! Directional navigation between panes tiled on a bounded canvas.
//!
//! Given the selected pane and a direction, the navigator computes a probe
//! point just past the pane's edge, constrains it to the canvas (taking care
//! never to skip over the reserved region at the bottom), optionally wraps
//! it around, and asks the host layout which pane lies there. Select,
//! create, delete, swap and deferred display commands are all built on that
//! single resolution.
//!
//! # Modules
//!
//! - `arg` - Command arguments and reference modes
//! - `canvas` - Canvas bounds and reserved region geometry
//! - `reference` - Reference point resolution
//! - `probe` - Probe placement
//! - `constrain` - Clamping and wrap-around
//! - `resolve` - Neighbor resolution
//! - `driver` - Directional commands and deferred display
//! - `session` - Locked navigator/host pair

pub mod arg;
pub mod canvas;
pub mod config;
pub mod constrain;
pub mod driver;
pub mod error;
pub mod host;
pub mod probe;
pub mod reference;
pub mod resolve;
pub mod session;

#[cfg(test)]
mod test_support;

pub use arg::{PrefixArg, ReferenceMode};
pub use canvas::CanvasGeometry;
pub use config::NavConfig;
pub use driver::{DisplayOutcome, DisplayTarget, Navigator, PendingDisplay};
pub use error::{ConfigError, LayoutError, NavError, Result};
pub use host::{PaneContent, PaneLayout};
pub use panewalk_primitives::{Axis, Bounds, Coordinate, Rect, SpatialDirection};
pub use resolve::{locate_probe, resolve_neighbor};
pub use session::SharedSession;
