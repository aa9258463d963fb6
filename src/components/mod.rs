//! UI components and their shared lifecycle contract.

pub mod booking_panel;
pub mod seat_map;

/// Explicit attach/detach lifecycle for DOM-backed widgets.
///
/// Modelled as a plain trait rather than framework-invoked hooks so the
/// widget state machine can be driven directly from tests, without mounting
/// a component tree.
pub trait Mountable {
	/// Render into the host element and install interaction handlers.
	/// Must be idempotent: a second call without an intervening
	/// [`on_detach`](Mountable::on_detach) is a no-op.
	fn on_attach(&self);

	/// Remove every installed handler and discard per-attachment state, so a
	/// later [`on_attach`](Mountable::on_attach) starts fresh.
	fn on_detach(&self);
}
