//! Embedded diagram asset and its scoped presentation rules.
//!
//! Both are compiled into the binary, so attachment is fully synchronous and
//! there is no load/detach race to guard against.

/// Venue seating chart. One `<g class="seat" data-number="...">` per seat.
pub const SEAT_MAP_SVG: &str = include_str!("seat_map.svg");

/// Styles injected verbatim into the widget's shadow root.
pub const SEAT_MAP_CSS: &str = include_str!("seat_map.css");
