use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, ShadowRootInit, ShadowRootMode};

use super::assets::{SEAT_MAP_CSS, SEAT_MAP_SVG};
use super::events::SelectionChange;
use super::selection::SelectionState;
use crate::components::Mountable;

const SEAT_SELECTOR: &str = ".seat";
const SELECTED_SEAT_SELECTOR: &str = ".seat.selected";
const SEAT_NUMBER_ATTR: &str = "data-number";
const SELECTED_CLASS: &str = "selected";

type Observers = Rc<RefCell<Vec<Rc<dyn Fn(&SelectionChange)>>>>;

/// The seat-map widget core: owns the selection state, renders the diagram
/// into the host element's shadow root and keeps the `selected` markers in
/// lockstep with the selection set.
///
/// Cheap to clone; clones share the same state and listener registrations, so
/// a clone doubles as a query/command handle for the hosting code.
#[derive(Clone)]
pub struct SeatMapWidget {
	host: HtmlElement,
	state: Rc<RefCell<SelectionState>>,
	listeners: Rc<RefCell<Vec<EventListener>>>,
	observers: Observers,
}

impl SeatMapWidget {
	/// A detached widget that will render into `host` on attach.
	pub fn new(host: HtmlElement) -> Self {
		Self {
			host,
			state: Rc::new(RefCell::new(SelectionState::new())),
			listeners: Rc::new(RefCell::new(Vec::new())),
			observers: Rc::new(RefCell::new(Vec::new())),
		}
	}

	/// Register an observer invoked on every selection change, in addition
	/// to the `seat-selection-changed` DOM event.
	pub fn subscribe(&self, observer: impl Fn(&SelectionChange) + 'static) {
		self.observers.borrow_mut().push(Rc::new(observer));
	}

	/// The current selection as a sorted list of seat identifiers.
	pub fn selected_seats(&self) -> Vec<String> {
		self.state.borrow().selected_seats()
	}

	/// Deselect every seat, strip the `selected` markers and emit a single
	/// cleared notification. No-op while detached.
	pub fn clear_selection(&self) {
		if !self.state.borrow_mut().clear() {
			return;
		}
		if let Some(shadow) = self.host.shadow_root() {
			if let Ok(selected) = shadow.query_selector_all(SELECTED_SEAT_SELECTOR) {
				for i in 0..selected.length() {
					let Some(seat) = selected.get(i).and_then(|n| n.dyn_into::<Element>().ok())
					else {
						continue;
					};
					let _ = seat.class_list().remove_1(SELECTED_CLASS);
				}
			}
		}
		emit(&self.host, &self.observers, &SelectionChange::cleared());
	}
}

impl Mountable for SeatMapWidget {
	fn on_attach(&self) {
		if !self.state.borrow_mut().begin_render() {
			debug!("seat map already attached, ignoring duplicate attach");
			return;
		}
		let Some(document) = web_sys::window().and_then(|w| w.document()) else {
			warn!("no document available, seat map not rendered");
			self.state.borrow_mut().reset();
			return;
		};
		let Some(shadow) = self.render(&document) else {
			self.state.borrow_mut().reset();
			return;
		};

		let mut seat_count = 0;
		let Ok(seats) = shadow.query_selector_all(SEAT_SELECTOR) else {
			warn!("seat lookup failed, seat map not interactive");
			self.state.borrow_mut().reset();
			return;
		};
		let mut listeners = self.listeners.borrow_mut();
		for i in 0..seats.length() {
			let Some(seat) = seats.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
				continue;
			};
			let state = self.state.clone();
			let observers = self.observers.clone();
			let host = self.host.clone();
			listeners.push(EventListener::new(&seat, "click", move |event| {
				handle_seat_click(&state, &observers, &host, event);
			}));
			seat_count += 1;
		}
		drop(listeners);

		self.state.borrow_mut().mark_ready();
		info!("seat map attached with {seat_count} seats");
	}

	fn on_detach(&self) {
		// Dropping a gloo EventListener removes it from its target, so no
		// dangling handler survives even if the shadow tree is retained.
		self.listeners.borrow_mut().clear();
		self.state.borrow_mut().reset();
		debug!("seat map detached");
	}
}

impl SeatMapWidget {
	/// Parse the diagram asset and insert it, with its styles, into the
	/// host's shadow root. Reuses an existing shadow root on re-attach.
	fn render(&self, document: &Document) -> Option<web_sys::ShadowRoot> {
		let shadow = match self.host.shadow_root() {
			Some(existing) => {
				existing.set_inner_html("");
				existing
			}
			None => match self
				.host
				.attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open))
			{
				Ok(shadow) => shadow,
				Err(err) => {
					warn!("failed to attach shadow root: {err:?}");
					return None;
				}
			},
		};

		let Ok(style) = document.create_element("style") else {
			warn!("failed to create style element");
			return None;
		};
		style.set_text_content(Some(SEAT_MAP_CSS));
		let _ = shadow.append_child(&style);

		let Some(svg) = parse_diagram(SEAT_MAP_SVG) else {
			warn!("diagram asset is malformed, seat map not rendered");
			return None;
		};
		let _ = shadow.append_child(&svg);
		Some(shadow)
	}
}

/// Extract the `<svg>` root from the embedded diagram asset.
fn parse_diagram(asset: &str) -> Option<Element> {
	let parser = web_sys::DomParser::new().ok()?;
	let doc = parser
		.parse_from_string(asset, web_sys::SupportedType::ImageSvgXml)
		.ok()?;
	doc.query_selector("svg").ok().flatten()
}

fn handle_seat_click(
	state: &Rc<RefCell<SelectionState>>,
	observers: &Observers,
	host: &HtmlElement,
	event: &Event,
) {
	let Some(seat) = event
		.current_target()
		.and_then(|t| t.dyn_into::<Element>().ok())
	else {
		return;
	};
	let Some(seat_number) = seat.get_attribute(SEAT_NUMBER_ATTR) else {
		debug!("click on seat without {SEAT_NUMBER_ATTR}, ignoring");
		return;
	};

	let Some(selected) = state.borrow_mut().toggle(&seat_number) else {
		return;
	};
	let marker = seat.class_list();
	if selected {
		let _ = marker.add_1(SELECTED_CLASS);
	} else {
		let _ = marker.remove_1(SELECTED_CLASS);
	}

	let all_selected = state.borrow().selected_seats();
	let change = SelectionChange::toggled(seat_number, selected, all_selected);
	emit(host, observers, &change);
}

/// Dispatch the DOM event from the host element, then invoke the registered
/// observers. No state borrow may be held here: a listener on the far side of
/// the boundary is free to call back into the widget synchronously.
fn emit(host: &HtmlElement, observers: &Observers, change: &SelectionChange) {
	match change.to_custom_event() {
		Ok(event) => {
			let _ = host.dispatch_event(&event);
		}
		Err(err) => warn!("failed to build selection event: {err:?}"),
	}
	let observers = observers.borrow().clone();
	for observer in &observers {
		observer(change);
	}
}
