//! Page bootstrap: an explicit widget registry keyed by tag name.
//!
//! The host page carries plain placeholder tags (`<seat-map>`, `<booking-panel>`)
//! inside the `#app` mount point. [`run`] populates the registry once at startup
//! and mounts the matching view into every placeholder it finds. Registering the
//! same tag twice is rejected rather than silently overwritten.

use std::collections::HashMap;

use leptos::prelude::*;
use log::info;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::components::booking_panel::BookingPanel;
use crate::components::seat_map::SeatMap;

/// Id of the element the host page must provide.
pub const APP_ROOT_ID: &str = "app";

/// Produces a fresh view for one widget instance.
pub type WidgetFactory = fn() -> AnyView;

/// Errors surfaced by the bootstrap layer. All of them are fatal to startup.
#[derive(Debug, Error)]
pub enum BootstrapError {
	/// A widget tag was registered twice.
	#[error("widget tag `{0}` is already registered")]
	DuplicateWidget(&'static str),
	/// No `document` object is available.
	#[error("document is not available")]
	DocumentUnavailable,
	/// The host page is missing the required mount point.
	#[error("mount point `#{0}` not found in host page")]
	MountPointMissing(&'static str),
	/// A registered tag is not a valid CSS selector.
	#[error("widget tag `{0}` is not a valid selector")]
	InvalidSelector(&'static str),
}

/// Associates widget tag names with view factories.
#[derive(Default)]
pub struct WidgetRegistry {
	widgets: HashMap<&'static str, WidgetFactory>,
}

impl WidgetRegistry {
	/// An empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Register `factory` under `tag`. A duplicate tag is rejected and the
	/// first registration stays in place.
	pub fn register(
		&mut self,
		tag: &'static str,
		factory: WidgetFactory,
	) -> Result<(), BootstrapError> {
		if self.widgets.contains_key(tag) {
			return Err(BootstrapError::DuplicateWidget(tag));
		}
		self.widgets.insert(tag, factory);
		Ok(())
	}

	/// Whether `tag` has been registered.
	pub fn contains(&self, tag: &str) -> bool {
		self.widgets.contains_key(tag)
	}

	/// Number of registered widget tags.
	pub fn len(&self) -> usize {
		self.widgets.len()
	}

	/// Whether the registry is empty.
	pub fn is_empty(&self) -> bool {
		self.widgets.is_empty()
	}

	/// Mount every registered widget into each matching element under `root`.
	/// Returns the number of instances mounted. A registered tag with no
	/// placeholder in the page is not an error.
	pub fn mount_all(&self, root: &Element) -> Result<usize, BootstrapError> {
		let mut mounted = 0;
		for (tag, factory) in &self.widgets {
			let hosts = root
				.query_selector_all(tag)
				.map_err(|_| BootstrapError::InvalidSelector(tag))?;
			for i in 0..hosts.length() {
				let Some(node) = hosts.get(i) else {
					continue;
				};
				let Ok(host) = node.dyn_into::<HtmlElement>() else {
					continue;
				};
				leptos::mount::mount_to(host, *factory).forget();
				mounted += 1;
			}
		}
		Ok(mounted)
	}
}

/// Build the registry and mount all widgets into the `#app` mount point.
pub fn run() -> Result<(), BootstrapError> {
	let mut registry = WidgetRegistry::new();
	registry.register("seat-map", || view! { <SeatMap /> }.into_any())?;
	registry.register("booking-panel", || view! { <BookingPanel /> }.into_any())?;

	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or(BootstrapError::DocumentUnavailable)?;
	let root = document
		.get_element_by_id(APP_ROOT_ID)
		.ok_or(BootstrapError::MountPointMissing(APP_ROOT_ID))?;

	let mounted = registry.mount_all(&root)?;
	info!("Mounted {mounted} widget(s) into #{APP_ROOT_ID}");
	Ok(())
}
