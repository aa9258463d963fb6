//! In-browser tests for the seat-map widget, driven through the explicit
//! `Mountable` lifecycle rather than a mounted component tree.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{CustomEvent, Document, Element, Event, HtmlElement};

use seat_map::{Mountable, SEAT_SELECTION_CHANGED, SeatMapWidget, SelectionChange};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

fn host() -> HtmlElement {
	let document = document();
	let host: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
	document.body().unwrap().append_child(&host).unwrap();
	host
}

/// An attached widget plus the log of notifications it has emitted.
fn attached_widget() -> (SeatMapWidget, HtmlElement, Rc<RefCell<Vec<SelectionChange>>>) {
	let host = host();
	let widget = SeatMapWidget::new(host.clone());
	let changes: Rc<RefCell<Vec<SelectionChange>>> = Rc::new(RefCell::new(Vec::new()));
	let log = changes.clone();
	widget.subscribe(move |change| log.borrow_mut().push(change.clone()));
	widget.on_attach();
	(widget, host, changes)
}

fn seat(host: &HtmlElement, number: &str) -> Element {
	host.shadow_root()
		.unwrap()
		.query_selector(&format!(".seat[data-number='{number}']"))
		.unwrap()
		.unwrap()
}

fn click(target: &Element) {
	let event = Event::new("click").unwrap();
	target.dispatch_event(&event).unwrap();
}

fn is_marked_selected(target: &Element) -> bool {
	target.class_list().contains("selected")
}

#[wasm_bindgen_test]
fn renders_styled_svg_with_seats() {
	let (_widget, host, _changes) = attached_widget();
	let shadow = host.shadow_root().unwrap();

	let style = shadow.query_selector("style").unwrap().unwrap();
	assert!(style.text_content().unwrap().contains(".seat"));
	assert!(shadow.query_selector("svg").unwrap().is_some());
	let seats = shadow.query_selector_all(".seat").unwrap();
	assert!(seats.length() > 0);
}

#[wasm_bindgen_test]
fn toggle_selects_then_deselects() {
	let (widget, host, _changes) = attached_widget();
	let seat = seat(&host, "A1");

	click(&seat);
	assert!(is_marked_selected(&seat));
	assert_eq!(widget.selected_seats(), vec!["A1"]);

	click(&seat);
	assert!(!is_marked_selected(&seat));
	assert!(widget.selected_seats().is_empty());
}

#[wasm_bindgen_test]
fn selection_set_reflects_clicks() {
	let (widget, host, _changes) = attached_widget();
	click(&seat(&host, "C3"));
	click(&seat(&host, "A1"));

	assert_eq!(widget.selected_seats(), vec!["A1", "C3"]);
	assert!(!is_marked_selected(&seat(&host, "B2")));
}

#[wasm_bindgen_test]
fn notification_payload_is_exact() {
	let (_widget, host, changes) = attached_widget();
	click(&seat(&host, "A1"));
	click(&seat(&host, "B2"));

	let changes = changes.borrow();
	assert_eq!(changes.len(), 2);
	let last = &changes[1];
	assert_eq!(last.seat_number.as_deref(), Some("B2"));
	assert!(last.selected);
	assert_eq!(last.all_selected, vec!["A1", "B2"]);
}

#[wasm_bindgen_test]
fn attach_is_idempotent() {
	let (widget, host, changes) = attached_widget();
	widget.on_attach();

	click(&seat(&host, "D4"));
	// One listener per seat, so one physical click fires one notification.
	assert_eq!(changes.borrow().len(), 1);
	assert_eq!(widget.selected_seats(), vec!["D4"]);
}

#[wasm_bindgen_test]
fn clear_is_total() {
	let (widget, host, changes) = attached_widget();
	click(&seat(&host, "A1"));
	click(&seat(&host, "B2"));
	click(&seat(&host, "C3"));

	widget.clear_selection();

	assert!(widget.selected_seats().is_empty());
	let shadow = host.shadow_root().unwrap();
	assert_eq!(shadow.query_selector_all(".seat.selected").unwrap().length(), 0);

	let changes = changes.borrow();
	assert_eq!(changes.len(), 4);
	let cleared = &changes[3];
	assert!(cleared.is_cleared());
	assert!(cleared.all_selected.is_empty());
}

#[wasm_bindgen_test]
fn malformed_click_is_ignored() {
	let (widget, host, changes) = attached_widget();
	let seat = seat(&host, "B1");
	seat.remove_attribute("data-number").unwrap();

	click(&seat);
	assert!(changes.borrow().is_empty());
	assert!(widget.selected_seats().is_empty());
	assert!(!is_marked_selected(&seat));
}

#[wasm_bindgen_test]
fn detach_releases_listeners() {
	let (widget, host, changes) = attached_widget();
	let seat = seat(&host, "A2");
	widget.on_detach();

	// The shadow tree is still referenced, but the handler is gone.
	click(&seat);
	assert!(changes.borrow().is_empty());
	assert!(widget.selected_seats().is_empty());
}

#[wasm_bindgen_test]
fn reattach_starts_fresh() {
	let (widget, host, changes) = attached_widget();
	click(&seat(&host, "A1"));
	widget.on_detach();
	widget.on_attach();

	assert!(widget.selected_seats().is_empty());
	click(&seat(&host, "B3"));
	assert_eq!(widget.selected_seats(), vec!["B3"]);
	// One from before detach, one after the fresh attach.
	assert_eq!(changes.borrow().len(), 2);
}

#[wasm_bindgen_test]
fn notification_crosses_the_shadow_boundary() {
	let (_widget, host, _changes) = attached_widget();
	let received: Rc<RefCell<Vec<SelectionChange>>> = Rc::new(RefCell::new(Vec::new()));
	let log = received.clone();
	let _listener = EventListener::new(&document(), SEAT_SELECTION_CHANGED, move |event| {
		let Some(custom) = event.dyn_ref::<CustomEvent>() else {
			return;
		};
		assert!(custom.composed());
		assert!(custom.bubbles());
		if let Some(change) = SelectionChange::from_event_detail(&custom.detail()) {
			log.borrow_mut().push(change);
		}
	});

	click(&seat(&host, "C7"));

	let received = received.borrow();
	assert_eq!(received.len(), 1);
	assert_eq!(received[0].seat_number.as_deref(), Some("C7"));
	assert!(received[0].selected);
	assert_eq!(received[0].all_selected, vec!["C7"]);
}
