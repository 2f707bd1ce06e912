//! In-memory layout fake used by the navigator tests.

use std::collections::{HashMap, HashSet};

use panewalk_primitives::{Coordinate, Rect, SpatialDirection};

use crate::error::LayoutError;
use crate::host::{PaneContent, PaneLayout};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct PaneId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CanvasId;

#[derive(Debug)]
struct FakePane {
	id: PaneId,
	rect: Rect,
	alive: bool,
}

/// A single canvas tiled by explicit rectangles.
#[derive(Debug)]
pub(crate) struct GridLayout {
	width: i32,
	height: i32,
	panes: Vec<FakePane>,
	reserved: Option<PaneId>,
	pub reserved_active: bool,
	selected: Option<PaneId>,
	cursors: HashMap<PaneId, Coordinate>,
	no_focus: HashSet<PaneId>,
	pub contents: HashMap<PaneId, String>,
	pub killed: Vec<String>,
	pub destroyed: Vec<PaneId>,
	pub selections: usize,
	pub prompt_depth: usize,
}

impl GridLayout {
	pub fn new(width: i32, height: i32) -> Self {
		Self {
			width,
			height,
			panes: Vec::new(),
			reserved: None,
			reserved_active: false,
			selected: None,
			cursors: HashMap::new(),
			no_focus: HashSet::new(),
			contents: HashMap::new(),
			killed: Vec::new(),
			destroyed: Vec::new(),
			selections: 0,
			prompt_depth: 0,
		}
	}

	/// Adds a content pane. The first one added starts out selected.
	pub fn pane(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> PaneId {
		let id = self.push(Rect::from_edges(x0, y0, x1, y1));
		self.selected.get_or_insert(id);
		id
	}

	/// Adds a reserved region spanning the bottom `height` rows.
	pub fn reserved(&mut self, height: i32, active: bool) -> PaneId {
		let id = self.push(Rect::from_edges(0, self.height - height, self.width, self.height));
		self.reserved = Some(id);
		self.reserved_active = active;
		id
	}

	pub fn set_cursor(&mut self, pane: PaneId, col: i32, row: i32) {
		self.cursors.insert(pane, Coordinate::new(col, row));
	}

	pub fn refuse_focus(&mut self, pane: PaneId) {
		self.no_focus.insert(pane);
	}

	pub fn put(&mut self, pane: PaneId, content: &str) {
		self.contents.insert(pane, content.to_owned());
	}

	pub fn content(&self, pane: PaneId) -> Option<&str> {
		self.contents.get(&pane).map(String::as_str)
	}

	pub fn is_alive(&self, pane: PaneId) -> bool {
		self.panes.iter().any(|p| p.id == pane && p.alive)
	}

	pub fn live_count(&self) -> usize {
		self.panes.iter().filter(|p| p.alive).count()
	}

	fn push(&mut self, rect: Rect) -> PaneId {
		let id = PaneId(self.panes.len() as u32);
		self.panes.push(FakePane { id, rect, alive: true });
		id
	}

	fn live(&self) -> impl Iterator<Item = &FakePane> {
		self.panes.iter().filter(|p| p.alive)
	}

	fn entry(&self, pane: PaneId) -> &FakePane {
		self.panes.iter().find(|p| p.id == pane).expect("unknown pane")
	}
}

impl PaneLayout for GridLayout {
	type Pane = PaneId;
	type Canvas = CanvasId;

	fn canvas_of(&self, _pane: PaneId) -> CanvasId {
		CanvasId
	}

	fn canvas_area(&self, _canvas: CanvasId) -> Rect {
		Rect::new(0, 0, self.width, self.height)
	}

	fn first_pane(&self, _canvas: CanvasId) -> PaneId {
		self.live()
			.filter(|p| Some(p.id) != self.reserved)
			.min_by_key(|p| (p.rect.y, p.rect.x))
			.map(|p| p.id)
			.expect("canvas has no panes")
	}

	fn pane_at(&self, _canvas: CanvasId, pos: Coordinate) -> Option<PaneId> {
		self.live().find(|p| p.rect.contains(pos)).map(|p| p.id)
	}

	fn pane_edges(&self, pane: PaneId) -> Rect {
		self.entry(pane).rect
	}

	fn cursor_offset(&self, pane: PaneId) -> Coordinate {
		self.cursors.get(&pane).copied().unwrap_or_default()
	}

	fn reserved_region(&self, _canvas: CanvasId) -> Option<PaneId> {
		self.reserved
	}

	fn is_reserved_region_active(&self, _region: PaneId) -> bool {
		self.reserved_active
	}

	fn accepts_focus(&self, pane: PaneId) -> bool {
		!self.no_focus.contains(&pane)
	}

	fn selected_pane(&self) -> PaneId {
		self.selected.expect("nothing selected")
	}

	fn select_pane(&mut self, pane: PaneId) {
		self.selections += 1;
		self.selected = Some(pane);
	}

	fn split_pane(&mut self, pane: PaneId, direction: SpatialDirection) -> Result<PaneId, LayoutError> {
		if !self.is_alive(pane) {
			return Err(LayoutError::UnknownPane);
		}
		if Some(pane) == self.reserved {
			return Err(LayoutError::Split("reserved region".into()));
		}
		let r = self.entry(pane).rect;
		let (kept, new) = match direction {
			SpatialDirection::Left | SpatialDirection::Right if r.width < 2 => {
				return Err(LayoutError::Split("too narrow".into()));
			}
			SpatialDirection::Up | SpatialDirection::Down if r.height < 2 => {
				return Err(LayoutError::Split("too short".into()));
			}
			SpatialDirection::Left => {
				let mid = r.x + r.width / 2;
				(Rect::from_edges(mid, r.y, r.right(), r.bottom()), Rect::from_edges(r.x, r.y, mid, r.bottom()))
			}
			SpatialDirection::Right => {
				let mid = r.x + r.width / 2;
				(Rect::from_edges(r.x, r.y, mid, r.bottom()), Rect::from_edges(mid, r.y, r.right(), r.bottom()))
			}
			SpatialDirection::Up => {
				let mid = r.y + r.height / 2;
				(Rect::from_edges(r.x, mid, r.right(), r.bottom()), Rect::from_edges(r.x, r.y, r.right(), mid))
			}
			SpatialDirection::Down => {
				let mid = r.y + r.height / 2;
				(Rect::from_edges(r.x, r.y, r.right(), mid), Rect::from_edges(r.x, mid, r.right(), r.bottom()))
			}
		};
		if let Some(p) = self.panes.iter_mut().find(|p| p.id == pane) {
			p.rect = kept;
		}
		Ok(self.push(new))
	}

	fn destroy_pane(&mut self, pane: PaneId) -> Result<(), LayoutError> {
		if !self.is_alive(pane) {
			return Err(LayoutError::UnknownPane);
		}
		let content_panes = self.live().filter(|p| Some(p.id) != self.reserved).count();
		if Some(pane) != self.reserved && content_panes <= 1 {
			return Err(LayoutError::SolePane);
		}
		if let Some(p) = self.panes.iter_mut().find(|p| p.id == pane) {
			p.alive = false;
		}
		self.destroyed.push(pane);
		if self.selected == Some(pane) {
			self.selected = Some(self.first_pane(CanvasId));
		}
		Ok(())
	}
}

impl PaneContent for GridLayout {
	type Content = String;

	fn show_content(&mut self, pane: PaneId, content: String) {
		self.contents.insert(pane, content);
	}

	fn kill_content(&mut self, pane: PaneId) {
		if let Some(content) = self.contents.remove(&pane) {
			self.killed.push(content);
		}
	}

	fn swap_contents(&mut self, a: PaneId, b: PaneId) {
		let first = self.contents.remove(&a);
		let second = self.contents.remove(&b);
		if let Some(content) = first {
			self.contents.insert(b, content);
		}
		if let Some(content) = second {
			self.contents.insert(a, content);
		}
		let cursor_a = self.cursors.remove(&a);
		let cursor_b = self.cursors.remove(&b);
		if let Some(cursor) = cursor_a {
			self.cursors.insert(b, cursor);
		}
		if let Some(cursor) = cursor_b {
			self.cursors.insert(a, cursor);
		}
	}

	fn prompt_depth(&self) -> usize {
		self.prompt_depth
	}
}

/// Canvas 80x24: `left` spans the full content height, `right` is split into
/// `top` and `bottom`, with a one-row inactive reserved region below.
pub(crate) struct SplitColumn {
	pub layout: GridLayout,
	pub left: PaneId,
	pub top: PaneId,
	pub bottom: PaneId,
	pub reserved: PaneId,
}

pub(crate) fn split_column() -> SplitColumn {
	let mut layout = GridLayout::new(80, 24);
	let left = layout.pane(0, 0, 40, 23);
	let top = layout.pane(40, 0, 80, 12);
	let bottom = layout.pane(40, 12, 80, 23);
	let reserved = layout.reserved(1, false);
	SplitColumn {
		layout,
		left,
		top,
		bottom,
		reserved,
	}
}

/// Installs a test subscriber so `tracing` output shows up under `--nocapture`.
pub(crate) fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_test_writer()
		.with_max_level(tracing::Level::TRACE)
		.try_init();
}
