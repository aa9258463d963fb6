//! Entry point: register the widgets and mount them into the host page.

use log::error;

fn main() {
	seat_map::init_logging();

	if let Err(err) = seat_map::bootstrap::run() {
		error!("bootstrap failed: {err}");
		// A partially mounted page is worse than no page. The panic hook
		// surfaces the message in the browser console.
		panic!("bootstrap failed: {err}");
	}
}
