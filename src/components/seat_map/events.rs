use js_sys::{Array, Object, Reflect};
use wasm_bindgen::JsValue;
use web_sys::{CustomEvent, CustomEventInit};

/// Name of the DOM event emitted on every selection change.
pub const SEAT_SELECTION_CHANGED: &str = "seat-selection-changed";

/// Payload of a selection-changed notification.
///
/// Serialized into the `CustomEvent` detail as `seatNumber` (omitted on a
/// clear), `selected` and `allSelected`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionChange {
	/// The identifier that triggered the change; `None` on a clear.
	pub seat_number: Option<String>,
	/// New membership of that seat. Meaningless on a clear.
	pub selected: bool,
	/// The complete current selection.
	pub all_selected: Vec<String>,
}

impl SelectionChange {
	/// A notification for one toggled seat.
	pub fn toggled(seat_number: String, selected: bool, all_selected: Vec<String>) -> Self {
		Self {
			seat_number: Some(seat_number),
			selected,
			all_selected,
		}
	}

	/// The single notification emitted by a clear.
	pub fn cleared() -> Self {
		Self {
			seat_number: None,
			selected: false,
			all_selected: Vec::new(),
		}
	}

	/// Whether this notification represents a clear.
	pub fn is_cleared(&self) -> bool {
		self.seat_number.is_none()
	}

	/// Build the bubbling, composed `CustomEvent` carrying this payload, so
	/// it can cross the widget's shadow boundary into the hosting page.
	pub fn to_custom_event(&self) -> Result<CustomEvent, JsValue> {
		let detail = Object::new();
		if let Some(seat) = &self.seat_number {
			Reflect::set(&detail, &"seatNumber".into(), &JsValue::from_str(seat))?;
		}
		Reflect::set(&detail, &"selected".into(), &JsValue::from_bool(self.selected))?;
		let all = Array::new();
		for seat in &self.all_selected {
			all.push(&JsValue::from_str(seat));
		}
		Reflect::set(&detail, &"allSelected".into(), &all)?;

		let init = CustomEventInit::new();
		init.set_bubbles(true);
		init.set_composed(true);
		init.set_detail(&detail);
		CustomEvent::new_with_event_init_dict(SEAT_SELECTION_CHANGED, &init)
	}

	/// Parse a notification back out of a `CustomEvent` detail. Returns
	/// `None` for details that do not carry the contract.
	pub fn from_event_detail(detail: &JsValue) -> Option<Self> {
		if !detail.is_object() {
			return None;
		}
		let seat_number = Reflect::get(detail, &"seatNumber".into())
			.ok()
			.and_then(|v| v.as_string());
		let selected = Reflect::get(detail, &"selected".into())
			.ok()
			.and_then(|v| v.as_bool())
			.unwrap_or(false);
		let all = Reflect::get(detail, &"allSelected".into()).ok()?;
		if all.is_undefined() || all.is_null() {
			return None;
		}
		let all_selected = Array::from(&all)
			.iter()
			.filter_map(|v| v.as_string())
			.collect();
		Some(Self {
			seat_number,
			selected,
			all_selected,
		})
	}
}
