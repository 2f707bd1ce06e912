//! Command arguments and the reference modes derived from them.

/// The argument a directional command was invoked with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrefixArg {
	/// No argument.
	#[default]
	None,
	/// The bare "universal" argument, numerically 4.
	Universal,
	/// An explicit signed count.
	Numeric(i64),
}

impl PrefixArg {
	/// Numeric value of the argument.
	pub const fn value(self) -> i64 {
		match self {
			PrefixArg::None => 0,
			PrefixArg::Universal => 4,
			PrefixArg::Numeric(n) => n,
		}
	}

	/// Whether this is the bare universal argument.
	pub const fn is_universal(self) -> bool {
		matches!(self, PrefixArg::Universal)
	}

	/// Whether an explicit zero was given.
	pub const fn is_zero(self) -> bool {
		matches!(self, PrefixArg::Numeric(0))
	}

	/// Derives the reference mode from the sign of the argument.
	pub const fn reference_mode(self) -> ReferenceMode {
		ReferenceMode::from_sign(self.value())
	}
}

impl From<i64> for PrefixArg {
	fn from(n: i64) -> Self {
		PrefixArg::Numeric(n)
	}
}

impl From<Option<i64>> for PrefixArg {
	fn from(n: Option<i64>) -> Self {
		n.map_or(PrefixArg::None, PrefixArg::Numeric)
	}
}

/// Which point of the origin pane a directional move is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceMode {
	/// The cursor position.
	Point,
	/// The interior top-left cell.
	LeadingCorner,
	/// The interior bottom-right cell.
	TrailingCorner,
}

impl ReferenceMode {
	/// Zero selects the cursor, positive the leading corner, negative the
	/// trailing corner.
	pub const fn from_sign(n: i64) -> Self {
		if n > 0 {
			ReferenceMode::LeadingCorner
		} else if n < 0 {
			ReferenceMode::TrailingCorner
		} else {
			ReferenceMode::Point
		}
	}
}
