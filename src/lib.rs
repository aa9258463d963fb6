//! Interactive seat-map widget for the event-booking frontend.
//!
//! The widget renders a venue seating chart from an embedded SVG asset into a
//! shadow-DOM render scope, toggles seat selection on click, and broadcasts a
//! selection-changed notification both as a typed observer callback and as a
//! bubbling `CustomEvent` that crosses the shadow boundary.

use log::{Level, info};

// Modules
pub mod bootstrap;
mod components;

pub use crate::components::Mountable;
pub use crate::components::booking_panel::BookingPanel;
pub use crate::components::seat_map::{
	Phase, SEAT_SELECTION_CHANGED, SeatMap, SeatMapWidget, SelectionChange, SelectionState,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}
