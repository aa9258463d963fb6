//! Hosting-page panel that consumes selection-changed notifications from the
//! far side of the seat map's shadow boundary.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::CustomEvent;

use crate::components::seat_map::{SEAT_SELECTION_CHANGED, SelectionChange};

/// Lists the currently selected seats and gates the confirm button on a
/// non-empty selection. Subscribes to `seat-selection-changed` on the
/// document, relying on the event bubbling out of the widget.
#[component]
pub fn BookingPanel() -> impl IntoView {
	let (selected, set_selected) = signal(Vec::<String>::new());
	let (last_change, set_last_change) = signal(Option::<String>::None);

	let listener: Rc<RefCell<Option<EventListener>>> = Rc::new(RefCell::new(None));
	let listener_init = listener.clone();

	Effect::new(move |_| {
		if listener_init.borrow().is_some() {
			return;
		}
		let Some(document) = web_sys::window().and_then(|w| w.document()) else {
			return;
		};
		*listener_init.borrow_mut() = Some(EventListener::new(
			&document,
			SEAT_SELECTION_CHANGED,
			move |event| {
				let Some(custom) = event.dyn_ref::<CustomEvent>() else {
					return;
				};
				let Some(change) = SelectionChange::from_event_detail(&custom.detail()) else {
					return;
				};
				set_last_change.set(Some(describe(&change)));
				set_selected.set(change.all_selected);
			},
		));
	});

	let listener = leptos::__reexports::send_wrapper::SendWrapper::new(listener);
	on_cleanup(move || {
		listener.borrow_mut().take();
	});

	view! {
		<div class="booking-panel">
			<h2>"Your seats"</h2>
			<p class="booking-status">
				{move || last_change.get().unwrap_or_else(|| "No seats selected yet.".to_string())}
			</p>
			<ul class="booking-seats">
				{move || {
					selected
						.get()
						.into_iter()
						.map(|seat| view! { <li>{seat}</li> })
						.collect_view()
				}}
			</ul>
			<button class="confirm-booking" disabled=move || selected.get().is_empty()>
				"Confirm booking"
			</button>
		</div>
	}
}

fn describe(change: &SelectionChange) -> String {
	match (&change.seat_number, change.selected) {
		(Some(seat), true) => format!("Selected seat {seat}."),
		(Some(seat), false) => format!("Deselected seat {seat}."),
		(None, _) => "Selection cleared.".to_string(),
	}
}
