use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use web_sys::HtmlElement;

use super::events::SelectionChange;
use super::widget::SeatMapWidget;
use crate::components::Mountable;

/// Leptos wrapper around [`SeatMapWidget`]: attaches the widget once the host
/// element exists and detaches it when the component is unmounted.
#[component]
pub fn SeatMap(
	/// Typed observer for selection changes, in addition to the bubbling
	/// `seat-selection-changed` DOM event.
	#[prop(optional, into)]
	on_selection_change: Option<Callback<SelectionChange>>,
	/// Receives a widget handle once the seat map is interactive, for
	/// callers that need `selected_seats` / `clear_selection`.
	#[prop(optional, into)]
	on_ready: Option<Callback<SeatMapWidget>>,
) -> impl IntoView {
	let host_ref = NodeRef::<leptos::html::Div>::new();
	let widget: Rc<RefCell<Option<SeatMapWidget>>> = Rc::new(RefCell::new(None));
	let widget_init = widget.clone();

	Effect::new(move |_| {
		let Some(host) = host_ref.get() else {
			return;
		};
		if widget_init.borrow().is_some() {
			return;
		}
		let host: HtmlElement = host.into();
		let seat_map = SeatMapWidget::new(host);
		if let Some(cb) = on_selection_change {
			seat_map.subscribe(move |change| cb.run(change.clone()));
		}
		seat_map.on_attach();
		if let Some(cb) = on_ready {
			cb.run(seat_map.clone());
		}
		*widget_init.borrow_mut() = Some(seat_map);
	});

	let widget = leptos::__reexports::send_wrapper::SendWrapper::new(widget);
	on_cleanup(move || {
		if let Some(seat_map) = widget.borrow_mut().take() {
			seat_map.on_detach();
		}
	});

	view! { <div class="seat-map" node_ref=host_ref></div> }
}
