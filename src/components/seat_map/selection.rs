use std::collections::BTreeSet;

/// Widget lifecycle phase. Mutations are only accepted in [`Phase::Ready`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
	/// Not attached to the page; the selection is empty.
	#[default]
	Unattached,
	/// Diagram asset is being parsed and inserted; no listeners yet.
	Rendering,
	/// Listeners installed, clicks accepted.
	Ready,
}

/// The set of currently selected seat identifiers plus the lifecycle phase
/// that gates mutation.
///
/// Pure bookkeeping: the DOM-facing widget keeps the `selected` class on seat
/// elements in lockstep with this set. A `BTreeSet` keeps read-out
/// deterministic; ordering carries no meaning.
#[derive(Debug, Default)]
pub struct SelectionState {
	phase: Phase,
	selected: BTreeSet<String>,
}

impl SelectionState {
	/// An unattached state with an empty selection.
	pub fn new() -> Self {
		Self::default()
	}

	/// Current lifecycle phase.
	pub fn phase(&self) -> Phase {
		self.phase
	}

	/// Whether clicks are currently accepted.
	pub fn is_ready(&self) -> bool {
		self.phase == Phase::Ready
	}

	/// Enter [`Phase::Rendering`]. Returns `false` if the widget is already
	/// past `Unattached`, which signals a duplicate attach.
	pub fn begin_render(&mut self) -> bool {
		if self.phase != Phase::Unattached {
			return false;
		}
		self.phase = Phase::Rendering;
		true
	}

	/// Enter [`Phase::Ready`] once listeners are installed.
	pub fn mark_ready(&mut self) {
		if self.phase == Phase::Rendering {
			self.phase = Phase::Ready;
		}
	}

	/// Back to [`Phase::Unattached`] with an empty selection. A later attach
	/// starts fresh with no carryover.
	pub fn reset(&mut self) {
		self.phase = Phase::Unattached;
		self.selected.clear();
	}

	/// Toggle membership of `seat`. Returns the new membership, or `None`
	/// when the widget is not ready and the click must be ignored.
	pub fn toggle(&mut self, seat: &str) -> Option<bool> {
		if !self.is_ready() {
			return None;
		}
		if self.selected.remove(seat) {
			Some(false)
		} else {
			self.selected.insert(seat.to_owned());
			Some(true)
		}
	}

	/// Remove every seat from the selection. Returns `false` when the widget
	/// is not ready.
	pub fn clear(&mut self) -> bool {
		if !self.is_ready() {
			return false;
		}
		self.selected.clear();
		true
	}

	/// Whether `seat` is currently selected.
	pub fn is_selected(&self, seat: &str) -> bool {
		self.selected.contains(seat)
	}

	/// The current selection as a sorted list of identifiers.
	pub fn selected_seats(&self) -> Vec<String> {
		self.selected.iter().cloned().collect()
	}
}
